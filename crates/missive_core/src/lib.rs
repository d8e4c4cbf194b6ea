//! Core data types for the Missive message generation service.
//!
//! This crate provides the value objects shared across the service: the
//! wire-level request/result pair, the provider-neutral generation types
//! spoken by [`GenerativeDriver`] implementations, and the fixed
//! instruction template wrapped around caller prompts.

mod config;
mod driver;
mod message;
pub mod observability;
pub mod prompt;
mod request;
mod result;
mod role;

pub use config::{ModelConfig, ModelConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use driver::GenerativeDriver;
pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use result::{GenerationRequest, GenerationResult};
pub use role::Role;
