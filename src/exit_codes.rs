//! Exit code constants for the genprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config or variables file)
//! - 2: Unknown template key
//! - 3: Unresolved placeholders in strict mode
//! - 4: I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or variables.
pub const USER_ERROR: i32 = 1;

/// The requested template key is not registered.
pub const TEMPLATE_NOT_FOUND: i32 = 2;

/// Strict rendering found placeholders without a value.
pub const UNRESOLVED_PLACEHOLDERS: i32 = 3;

/// Reading input or writing output failed.
pub const IO_FAILURE: i32 = 4;
