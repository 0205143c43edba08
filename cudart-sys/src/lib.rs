#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int};

/// Return code of every CUDA runtime API call (`enum cudaError` in `driver_types.h`).
pub type cudaError_t = c_int;

pub const cudaError_cudaSuccess: cudaError_t = 0;
pub const cudaError_cudaErrorInvalidValue: cudaError_t = 1;
pub const cudaError_cudaErrorMemoryAllocation: cudaError_t = 2;
pub const cudaError_cudaErrorInitializationError: cudaError_t = 3;
pub const cudaError_cudaErrorCudartUnloading: cudaError_t = 4;
pub const cudaError_cudaErrorProfilerDisabled: cudaError_t = 5;
pub const cudaError_cudaErrorInvalidConfiguration: cudaError_t = 9;
pub const cudaError_cudaErrorInvalidPitchValue: cudaError_t = 12;
pub const cudaError_cudaErrorInvalidSymbol: cudaError_t = 13;
pub const cudaError_cudaErrorInvalidHostPointer: cudaError_t = 16;
pub const cudaError_cudaErrorInvalidDevicePointer: cudaError_t = 17;
pub const cudaError_cudaErrorInvalidTexture: cudaError_t = 18;
pub const cudaError_cudaErrorInvalidChannelDescriptor: cudaError_t = 20;
pub const cudaError_cudaErrorInvalidMemcpyDirection: cudaError_t = 21;
pub const cudaError_cudaErrorInsufficientDriver: cudaError_t = 35;
pub const cudaError_cudaErrorMissingConfiguration: cudaError_t = 52;
pub const cudaError_cudaErrorLaunchMaxDepthExceeded: cudaError_t = 65;
pub const cudaError_cudaErrorInvalidDeviceFunction: cudaError_t = 98;
pub const cudaError_cudaErrorNoDevice: cudaError_t = 100;
pub const cudaError_cudaErrorInvalidDevice: cudaError_t = 101;
pub const cudaError_cudaErrorDeviceNotLicensed: cudaError_t = 102;
pub const cudaError_cudaErrorStartupFailure: cudaError_t = 127;
pub const cudaError_cudaErrorInvalidKernelImage: cudaError_t = 200;
pub const cudaError_cudaErrorDeviceUninitialized: cudaError_t = 201;
pub const cudaError_cudaErrorMapBufferObjectFailed: cudaError_t = 205;
pub const cudaError_cudaErrorUnmapBufferObjectFailed: cudaError_t = 206;
pub const cudaError_cudaErrorNoKernelImageForDevice: cudaError_t = 209;
pub const cudaError_cudaErrorECCUncorrectable: cudaError_t = 214;
pub const cudaError_cudaErrorUnsupportedPtxVersion: cudaError_t = 222;
pub const cudaError_cudaErrorInvalidSource: cudaError_t = 300;
pub const cudaError_cudaErrorFileNotFound: cudaError_t = 301;
pub const cudaError_cudaErrorInvalidResourceHandle: cudaError_t = 400;
pub const cudaError_cudaErrorIllegalState: cudaError_t = 401;
pub const cudaError_cudaErrorSymbolNotFound: cudaError_t = 500;
pub const cudaError_cudaErrorNotReady: cudaError_t = 600;
pub const cudaError_cudaErrorIllegalAddress: cudaError_t = 700;
pub const cudaError_cudaErrorLaunchOutOfResources: cudaError_t = 701;
pub const cudaError_cudaErrorLaunchTimeout: cudaError_t = 702;
pub const cudaError_cudaErrorPeerAccessAlreadyEnabled: cudaError_t = 704;
pub const cudaError_cudaErrorPeerAccessNotEnabled: cudaError_t = 705;
pub const cudaError_cudaErrorSetOnActiveProcess: cudaError_t = 708;
pub const cudaError_cudaErrorContextIsDestroyed: cudaError_t = 709;
pub const cudaError_cudaErrorAssert: cudaError_t = 710;
pub const cudaError_cudaErrorHostMemoryAlreadyRegistered: cudaError_t = 712;
pub const cudaError_cudaErrorHostMemoryNotRegistered: cudaError_t = 713;
pub const cudaError_cudaErrorLaunchFailure: cudaError_t = 719;
pub const cudaError_cudaErrorNotSupported: cudaError_t = 801;
pub const cudaError_cudaErrorUnknown: cudaError_t = 999;

/// `const char* cudaGetErrorName(cudaError_t error)`
pub type PFN_cudaGetErrorName = unsafe extern "C" fn(error: cudaError_t) -> *const c_char;

/// `const char* cudaGetErrorString(cudaError_t error)`
pub type PFN_cudaGetErrorString = unsafe extern "C" fn(error: cudaError_t) -> *const c_char;

pub const CUDA_GET_ERROR_NAME_SYMBOL: &[u8] = b"cudaGetErrorName\0";
pub const CUDA_GET_ERROR_STRING_SYMBOL: &[u8] = b"cudaGetErrorString\0";

/// Symbolic names of the status values declared above, as reported by `cudaGetErrorName`.
pub const cudaError_names: &[(cudaError_t, &str)] = &[
	(cudaError_cudaSuccess, "cudaSuccess"),
	(cudaError_cudaErrorInvalidValue, "cudaErrorInvalidValue"),
	(cudaError_cudaErrorMemoryAllocation, "cudaErrorMemoryAllocation"),
	(cudaError_cudaErrorInitializationError, "cudaErrorInitializationError"),
	(cudaError_cudaErrorCudartUnloading, "cudaErrorCudartUnloading"),
	(cudaError_cudaErrorProfilerDisabled, "cudaErrorProfilerDisabled"),
	(cudaError_cudaErrorInvalidConfiguration, "cudaErrorInvalidConfiguration"),
	(cudaError_cudaErrorInvalidPitchValue, "cudaErrorInvalidPitchValue"),
	(cudaError_cudaErrorInvalidSymbol, "cudaErrorInvalidSymbol"),
	(cudaError_cudaErrorInvalidHostPointer, "cudaErrorInvalidHostPointer"),
	(cudaError_cudaErrorInvalidDevicePointer, "cudaErrorInvalidDevicePointer"),
	(cudaError_cudaErrorInvalidTexture, "cudaErrorInvalidTexture"),
	(cudaError_cudaErrorInvalidChannelDescriptor, "cudaErrorInvalidChannelDescriptor"),
	(cudaError_cudaErrorInvalidMemcpyDirection, "cudaErrorInvalidMemcpyDirection"),
	(cudaError_cudaErrorInsufficientDriver, "cudaErrorInsufficientDriver"),
	(cudaError_cudaErrorMissingConfiguration, "cudaErrorMissingConfiguration"),
	(cudaError_cudaErrorLaunchMaxDepthExceeded, "cudaErrorLaunchMaxDepthExceeded"),
	(cudaError_cudaErrorInvalidDeviceFunction, "cudaErrorInvalidDeviceFunction"),
	(cudaError_cudaErrorNoDevice, "cudaErrorNoDevice"),
	(cudaError_cudaErrorInvalidDevice, "cudaErrorInvalidDevice"),
	(cudaError_cudaErrorDeviceNotLicensed, "cudaErrorDeviceNotLicensed"),
	(cudaError_cudaErrorStartupFailure, "cudaErrorStartupFailure"),
	(cudaError_cudaErrorInvalidKernelImage, "cudaErrorInvalidKernelImage"),
	(cudaError_cudaErrorDeviceUninitialized, "cudaErrorDeviceUninitialized"),
	(cudaError_cudaErrorMapBufferObjectFailed, "cudaErrorMapBufferObjectFailed"),
	(cudaError_cudaErrorUnmapBufferObjectFailed, "cudaErrorUnmapBufferObjectFailed"),
	(cudaError_cudaErrorNoKernelImageForDevice, "cudaErrorNoKernelImageForDevice"),
	(cudaError_cudaErrorECCUncorrectable, "cudaErrorECCUncorrectable"),
	(cudaError_cudaErrorUnsupportedPtxVersion, "cudaErrorUnsupportedPtxVersion"),
	(cudaError_cudaErrorInvalidSource, "cudaErrorInvalidSource"),
	(cudaError_cudaErrorFileNotFound, "cudaErrorFileNotFound"),
	(cudaError_cudaErrorInvalidResourceHandle, "cudaErrorInvalidResourceHandle"),
	(cudaError_cudaErrorIllegalState, "cudaErrorIllegalState"),
	(cudaError_cudaErrorSymbolNotFound, "cudaErrorSymbolNotFound"),
	(cudaError_cudaErrorNotReady, "cudaErrorNotReady"),
	(cudaError_cudaErrorIllegalAddress, "cudaErrorIllegalAddress"),
	(cudaError_cudaErrorLaunchOutOfResources, "cudaErrorLaunchOutOfResources"),
	(cudaError_cudaErrorLaunchTimeout, "cudaErrorLaunchTimeout"),
	(cudaError_cudaErrorPeerAccessAlreadyEnabled, "cudaErrorPeerAccessAlreadyEnabled"),
	(cudaError_cudaErrorPeerAccessNotEnabled, "cudaErrorPeerAccessNotEnabled"),
	(cudaError_cudaErrorSetOnActiveProcess, "cudaErrorSetOnActiveProcess"),
	(cudaError_cudaErrorContextIsDestroyed, "cudaErrorContextIsDestroyed"),
	(cudaError_cudaErrorAssert, "cudaErrorAssert"),
	(cudaError_cudaErrorHostMemoryAlreadyRegistered, "cudaErrorHostMemoryAlreadyRegistered"),
	(cudaError_cudaErrorHostMemoryNotRegistered, "cudaErrorHostMemoryNotRegistered"),
	(cudaError_cudaErrorLaunchFailure, "cudaErrorLaunchFailure"),
	(cudaError_cudaErrorNotSupported, "cudaErrorNotSupported"),
	(cudaError_cudaErrorUnknown, "cudaErrorUnknown"),
];
