pub mod config;
pub mod server_config;
pub mod gate_config;
