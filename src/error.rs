use std::path::PathBuf;

use thiserror::Error;

use crate::status::CudaStatus;

#[derive(Error, Debug)]
pub enum CudaCheckError {
	/// The CUDA runtime library at this path could not be opened.
	#[error("failed to load CUDA runtime library '{}': {source}", .path.display())]
	LibraryLoading {
		path: PathBuf,
		source: libloading::Error,
	},

	/// No candidate paths were configured for the CUDA runtime library.
	#[error("no CUDA runtime library paths configured")]
	NoLibraryPaths,

	/// The loaded library doesn't export a required entry point.
	#[error("failed to find symbol '{name}' in CUDA runtime library: {source}")]
	Symbol {
		name: String,
		source: libloading::Error,
	},

	#[error("CUDA runtime returned no description for {0}")]
	NullDescription(CudaStatus),

	#[error("CUDA runtime description for {0} is not valid utf-8")]
	Utf8(CudaStatus),
}
