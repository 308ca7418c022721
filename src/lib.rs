pub mod structs;
pub mod services;
pub mod server;
pub mod enums;
pub mod errors;
pub mod config;
pub mod workers;
