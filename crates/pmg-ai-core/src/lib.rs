//! PMG AI Core
//!
//! Types and error handling shared across the PMG AI crates.
//!
//! This crate provides:
//! - The `GeneratedResponse` value every generator and provider returns
//! - Response-type and provider labels
//! - Provider selection and generation options
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    ChatMessage, GeneratedResponse, GenerationOptions, ProviderKind, ProviderSelector,
    ResponseType, LOCAL_PROVIDER_LABEL,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        GeneratedResponse, GenerationOptions, ProviderKind, ProviderSelector, ResponseType,
    };
}
