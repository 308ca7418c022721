pub mod analysis_store;
pub mod aggregator;
pub mod gate_evaluator;
pub mod badge_renderer;
pub mod analyzer;
pub mod auth;
pub mod gate_service;
