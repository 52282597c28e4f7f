pub mod config;
pub mod error;
pub mod fixes;
pub mod report;
pub mod runner;
pub mod scanner;

pub use error::{FixupError, Result};
