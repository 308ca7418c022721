pub mod commands;
pub mod severity;
pub mod badge_status;
