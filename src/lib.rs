pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod gitignore;
pub mod store;
pub mod ui;

pub use error::{Result, VtesError};
