// -----------------------------------------------------------------------------
// Exit Codes
// -----------------------------------------------------------------------------

/// Execution success.
pub const E_CODE_SUCCESS: i32 = libc::EXIT_SUCCESS;

/// Process exit code used by [`terminate_process`] after reporting a raise.
///
/// [`terminate_process`]: crate::terminate_process
pub const E_CODE_FAILURE_RAISE: i32 = libc::EXIT_FAILURE;

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
