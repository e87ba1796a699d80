pub mod config;
pub mod core;
pub mod errors;
pub mod markdown;
pub mod report;
pub mod utils;

// Re-export commonly used items for convenience
pub use config::ReportConfig;
pub use errors::{ReportError, ReportResult};
pub use markdown::ReportTable;
pub use utils::SpeechServiceClient;
