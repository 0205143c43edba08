use std::fmt;

use cudart_sys::{cudaError_t, cudaError_cudaSuccess};

/// Anything that can tell whether a CUDA runtime call succeeded.
pub trait Status {
	fn is_success(&self) -> bool;

	/// Raw runtime code of this status.
	fn code(&self) -> cudaError_t;
}

/// Status returned by a CUDA runtime call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CudaStatus(pub cudaError_t);

impl CudaStatus {
	pub const SUCCESS: CudaStatus = CudaStatus(cudaError_cudaSuccess);

	pub fn code(&self) -> cudaError_t {
		self.0
	}

	/// Symbolic runtime name of this status (ie. `cudaErrorMemoryAllocation`).
	///
	/// Returns `None` for codes this crate doesn't know about, such as codes introduced by a newer runtime.
	pub fn name(&self) -> Option<&'static str> {
		cudart_sys::cudaError_names
			.iter()
			.find(|(code, _)| *code == self.0)
			.map(|(_, name)| *name)
	}
}

impl Status for CudaStatus {
	fn is_success(&self) -> bool {
		self.0 == cudaError_cudaSuccess
	}

	fn code(&self) -> cudaError_t {
		self.0
	}
}

impl Status for cudaError_t {
	fn is_success(&self) -> bool {
		*self == cudaError_cudaSuccess
	}

	fn code(&self) -> cudaError_t {
		*self
	}
}

impl From<cudaError_t> for CudaStatus {
	fn from(code: cudaError_t) -> Self {
		CudaStatus(code)
	}
}

impl fmt::Display for CudaStatus {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "{name} ({})", self.0),
			None => write!(f, "unknown CUDA status ({})", self.0),
		}
	}
}
