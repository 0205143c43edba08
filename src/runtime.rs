use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;

use cudart_sys::{
	PFN_cudaGetErrorName,
	PFN_cudaGetErrorString,
	CUDA_GET_ERROR_NAME_SYMBOL,
	CUDA_GET_ERROR_STRING_SYMBOL,
};
use libloading::Library;

use crate::{config::RuntimeConfig, error::CudaCheckError, status::CudaStatus};

/// A dynamically loaded CUDA runtime, used to describe status codes.
pub struct CudaRuntime {
	library: Library,
}

impl CudaRuntime {
	/// Opens the first library from `config.library_paths` that can be loaded.
	pub fn load(config: &RuntimeConfig) -> Result<Self, CudaCheckError> {
		let mut last_error = CudaCheckError::NoLibraryPaths;
		for path in &config.library_paths {
			match Self::open(path) {
				Ok(runtime) => {
					tracing::debug!("Loaded CUDA runtime from '{}'.", path.display());
					return Ok(runtime);
				},
				Err(e) => {
					tracing::debug!("{e}");
					last_error = e;
				},
			}
		}

		Err(last_error)
	}

	/// Opens the CUDA runtime library at `path`.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CudaCheckError> {
		let path = path.as_ref();

		// Runs the library initialisers.
		let library = unsafe { Library::new(path) }
			.map_err(|source| CudaCheckError::LibraryLoading { path: path.to_path_buf(), source })?;

		Ok(Self { library })
	}

	/// Symbolic name of `status` as reported by `cudaGetErrorName`.
	pub fn error_name(&self, status: CudaStatus) -> Result<String, CudaCheckError> {
		let function = unsafe { self.library.get::<PFN_cudaGetErrorName>(CUDA_GET_ERROR_NAME_SYMBOL) }
			.map_err(|source| symbol_error(CUDA_GET_ERROR_NAME_SYMBOL, source))?;

		let ptr = unsafe { function(status.code()) };
		to_string(ptr, status)
	}

	/// Human readable description of `status` as reported by `cudaGetErrorString`.
	pub fn error_string(&self, status: CudaStatus) -> Result<String, CudaCheckError> {
		let function = unsafe { self.library.get::<PFN_cudaGetErrorString>(CUDA_GET_ERROR_STRING_SYMBOL) }
			.map_err(|source| symbol_error(CUDA_GET_ERROR_STRING_SYMBOL, source))?;

		let ptr = unsafe { function(status.code()) };
		to_string(ptr, status)
	}

	/// Describes `status` as `name: description`, or falls back to the built-in name table.
	pub fn describe(&self, status: CudaStatus) -> String {
		match (self.error_name(status), self.error_string(status)) {
			(Ok(name), Ok(description)) => format!("{name}: {description}"),
			(Err(e), _) | (_, Err(e)) => {
				tracing::debug!("Failed to describe CUDA status {}: {e}", status.code());
				status.to_string()
			},
		}
	}
}

fn symbol_error(symbol: &[u8], source: libloading::Error) -> CudaCheckError {
	let name = String::from_utf8_lossy(symbol.strip_suffix(b"\0").unwrap_or(symbol)).into_owned();
	CudaCheckError::Symbol { name, source }
}

fn to_string(ptr: *const c_char, status: CudaStatus) -> Result<String, CudaCheckError> {
	if ptr.is_null() {
		return Err(CudaCheckError::NullDescription(status));
	}

	// The runtime returns pointers to static strings.
	let description = unsafe { CStr::from_ptr(ptr) };
	description.to_str()
		.map(|s| s.to_string())
		.map_err(|_| CudaCheckError::Utf8(status))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_without_paths() {
		let config = RuntimeConfig { library_paths: Vec::new() };
		assert!(matches!(CudaRuntime::load(&config), Err(CudaCheckError::NoLibraryPaths)));
	}

	#[test]
	fn load_reports_last_failure() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("libcudart-missing-1.so");
		let last = dir.path().join("libcudart-missing-2.so");
		let config = RuntimeConfig { library_paths: vec![first, last.clone()] };

		match CudaRuntime::load(&config) {
			Err(CudaCheckError::LibraryLoading { path, .. }) => assert_eq!(path, last),
			Err(e) => panic!("unexpected error: {e}"),
			Ok(_) => panic!("loaded a library that doesn't exist"),
		}
	}

	#[test]
	fn open_rejects_non_library() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("libcudart.so");
		std::fs::write(&path, "not a shared object").unwrap();

		let error = CudaRuntime::open(&path).err().unwrap();
		assert!(error.to_string().contains(&path.display().to_string()));
	}

	#[test]
	fn null_description() {
		let status = CudaStatus(cudart_sys::cudaError_cudaErrorUnknown);
		assert!(matches!(to_string(std::ptr::null(), status), Err(CudaCheckError::NullDescription(s)) if s == status));
	}

	#[test]
	fn static_description() {
		let description = c"out of memory";
		let status = CudaStatus(cudart_sys::cudaError_cudaErrorMemoryAllocation);
		assert_eq!(to_string(description.as_ptr(), status).unwrap(), "out of memory");
	}

	#[test]
	fn invalid_utf8_description() {
		let description = [0xffu8, 0xfe, 0x00];
		let status = CudaStatus(cudart_sys::cudaError_cudaErrorInvalidValue);
		assert!(matches!(to_string(description.as_ptr() as *const c_char, status), Err(CudaCheckError::Utf8(_))));
	}

	#[test]
	fn symbol_names_drop_nul() {
		let error = symbol_error(CUDA_GET_ERROR_NAME_SYMBOL, libloading::Error::DlSymUnknown);
		assert!(matches!(error, CudaCheckError::Symbol { ref name, .. } if name == "cudaGetErrorName"));
	}

	#[test]
	#[ignore = "requires an installed CUDA runtime"]
	fn describe_with_installed_runtime() {
		let runtime = CudaRuntime::load(&RuntimeConfig::default()).unwrap();

		let status = CudaStatus(cudart_sys::cudaError_cudaErrorMemoryAllocation);
		assert_eq!(runtime.error_name(status).unwrap(), "cudaErrorMemoryAllocation");
		assert!(runtime.describe(status).starts_with("cudaErrorMemoryAllocation: "));
	}
}
