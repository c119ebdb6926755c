pub mod dtos;
pub mod errors;
pub mod handlers;

pub use dtos::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
pub use errors::AnalyzeError;
pub use handlers::{analyze, run_analysis};
