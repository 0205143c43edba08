use std::io::Write;

use crate::status::Status;

/// Bytes written when a checked call failed.
pub const ERROR_MESSAGE: &[u8] = b"error";

/// Checks the status of a CUDA runtime call, printing `error` to stdout if it failed.
///
/// Nothing is returned and nothing is propagated: execution always continues after the check.
/// The source location is not part of the printed message, it is only attached to a `TRACE` event.
pub fn handle_error<S: Status>(status: S, file: &str, line: u32) {
	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();
	handle_error_to(&mut stdout, status, file, line);
}

/// Same as [`handle_error`], but writes to `out` instead of stdout.
pub fn handle_error_to<S: Status, W: Write>(out: &mut W, status: S, file: &str, line: u32) {
	if status.is_success() {
		return;
	}

	tracing::trace!(status = status.code(), file, line, "CUDA runtime call failed");

	// A failing stdout must not turn into a failing caller.
	if out.write_all(ERROR_MESSAGE).and_then(|_| out.flush()).is_err() {
		tracing::trace!("Failed to write CUDA error message.");
	}
}

/// Checks the status returned by a CUDA runtime call.
///
/// ```ignore
/// handle_error!(unsafe { cudaMalloc(&mut ptr, size) });
/// ```
#[macro_export]
macro_rules! handle_error {
	($status:expr) => {
		$crate::handle_error($status, file!(), line!())
	};
}
