//! Configuration for Thicket

mod dispatcher_config;
mod file_loader;
mod logging_config;

pub use dispatcher_config::DispatcherConfig;
pub use file_loader::load_from_file;
pub use logging_config::{LogFormat, LoggingConfig};
