use std::process::Command;

use cuda_check::{handle_error, CudaStatus};

const CHILD_ENV: &str = "CUDA_CHECK_STDOUT_CHILD";

fn run_child(test: &str) -> String {
	let output = Command::new(std::env::current_exe().unwrap())
		.args(["--exact", test, "--nocapture", "--test-threads=1"])
		.env(CHILD_ENV, "1")
		.output()
		.unwrap();
	assert!(output.status.success());

	String::from_utf8(output.stdout).unwrap()
}

/// Returns whatever the checks wrote between the `[` and `]` markers.
fn between_markers(stdout: &str) -> &str {
	let start = stdout.find('[').unwrap() + 1;
	let end = stdout[start..].find(']').unwrap() + start;
	&stdout[start..end]
}

#[test]
fn writes_error_to_stdout() {
	if std::env::var_os(CHILD_ENV).is_some() {
		print!("[");
		handle_error!(CudaStatus::SUCCESS);
		handle_error!(cudart_sys::cudaError_cudaErrorMemoryAllocation);
		print!("]");
		std::io::Write::flush(&mut std::io::stdout()).unwrap();
		std::process::exit(0);
	}

	let stdout = run_child("writes_error_to_stdout");
	assert_eq!(between_markers(&stdout), "error");
}

#[test]
fn success_writes_nothing_to_stdout() {
	if std::env::var_os(CHILD_ENV).is_some() {
		print!("[");
		handle_error!(cudart_sys::cudaError_cudaSuccess);
		handle_error!(CudaStatus::SUCCESS);
		print!("]");
		std::io::Write::flush(&mut std::io::stdout()).unwrap();
		std::process::exit(0);
	}

	let stdout = run_child("success_writes_nothing_to_stdout");
	assert_eq!(between_markers(&stdout), "");
}
