//! Status checks for CUDA runtime calls.
//!
//! ```ignore
//! use cuda_check::handle_error;
//!
//! handle_error!(unsafe { cudaDeviceSynchronize() });
//! ```
//!
//! A failing call prints `error` to stdout and execution continues.

mod check;
pub mod config;
pub mod error;
pub mod runtime;
pub mod status;

pub use check::{handle_error, handle_error_to, ERROR_MESSAGE};
pub use cudart_sys::cudaError_t;
pub use error::CudaCheckError;
pub use runtime::CudaRuntime;
pub use status::{CudaStatus, Status};
