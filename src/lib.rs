pub mod app;
pub mod cli;
pub mod error;
pub mod provision;
pub mod settings;
pub mod ui;

pub use error::{AppError, Result};
