//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Input violated the expected naming convention
pub const DATAERR: i32 = 65;

/// External tool could not be started
pub const UNAVAILABLE: i32 = 69;

/// External tool ran and reported failure
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
