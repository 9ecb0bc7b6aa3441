//! Standard exit codes (BSD sysexits.h compatible)

/// Map layout malformed or not a tree
pub const DATAERR: i32 = 65;

/// Map file cannot be opened
pub const NOINPUT: i32 = 66;

/// Terminal input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
