pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod progress;
pub mod renamer;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{BatchResult, RenameEngine, RenameRequest};
pub use error::Error;
pub use progress::{BatchReporter, SilentReporter};
