//! Provider infrastructure for external cloud services.
//!
//! - **azure**: Azure Speech Services regions, endpoints and authentication

pub mod azure;

pub use azure::{AzureRegion, EndpointOverrides, SpeechEndpoints};
