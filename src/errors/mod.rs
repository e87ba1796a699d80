pub mod report_error;

pub use report_error::{ReportError, ReportResult};
