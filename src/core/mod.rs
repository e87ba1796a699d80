//! Locale normalization, record enrichment and annotation.

pub mod annotate;
pub mod locale;
pub mod models;
pub mod prepare;
pub mod providers;
