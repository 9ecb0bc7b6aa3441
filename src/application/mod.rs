//! Application layer: exploration session and map loading

pub mod error;
pub mod explorer;
pub mod map_loader;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use explorer::{Explorer, Step};
pub use map_loader::{load_layout, load_map, parse_layout};
pub use session::{explore, Ending, Expedition, SessionOptions};
