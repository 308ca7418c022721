pub mod cli;
pub mod analysis_record;
pub mod analysis_request;
pub mod analysis_response;
pub mod aggregate;
pub mod gate_result;
pub mod config;
