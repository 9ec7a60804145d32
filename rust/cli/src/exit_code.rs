//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration or a failed command.
pub const ERROR: i32 = 2;
