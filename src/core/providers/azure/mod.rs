//! Microsoft Azure Speech Services provider infrastructure.
//!
//! - **region**: regional hostnames and the metadata endpoint URLs
//! - **endpoints**: the resolved endpoint set, with optional overrides
//! - **auth**: subscription key request headers
//!
//! # Example
//!
//! ```rust
//! use speech_locales::core::providers::azure::{AzureRegion, SpeechEndpoints};
//!
//! let endpoints = SpeechEndpoints::for_region(&AzureRegion::JapanEast);
//! assert!(endpoints.stt_languages.contains("japaneast"));
//! ```
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/>

pub mod auth;
pub mod endpoints;
pub mod region;

pub use auth::{AZURE_SUBSCRIPTION_KEY_HEADER, build_default_headers};
pub use endpoints::{EndpointOverrides, SpeechEndpoints};
pub use region::AzureRegion;
