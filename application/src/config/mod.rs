//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ExecutionParams`]: tool loop control (round limit, timeouts, output caps)
//! - [`InferenceParams`]: sampling parameters sent with every model request

pub mod execution_params;
pub mod inference;

pub use execution_params::ExecutionParams;
pub use inference::InferenceParams;
