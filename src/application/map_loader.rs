//! Loading the mansion from the built-in layout or a TOML file.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{MansionLayout, MansionMap};

/// Parse a layout from TOML text. `path` is only used in error messages.
pub fn parse_layout(content: &str, path: &Path) -> ApplicationResult<MansionLayout> {
    toml::from_str(content).map_err(|e| ApplicationError::InvalidMap {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and parse a layout file.
#[instrument(level = "debug")]
pub fn load_layout(path: &Path) -> ApplicationResult<MansionLayout> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::MapUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_layout(&content, path)
}

/// Build the map to explore: the layout file if given, the built-in mansion otherwise.
#[instrument(level = "debug")]
pub fn load_map(map_file: Option<&Path>) -> ApplicationResult<MansionMap> {
    let map = match map_file {
        Some(path) => MansionMap::from_layout(&load_layout(path)?)?,
        None => MansionMap::default_mansion()?,
    };
    debug!("map ready: {} rooms, depth {}", map.len(), map.depth());
    Ok(map)
}
