//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod config_home;
mod local;

pub use config_home::{scratchwipe_config_dir, SCRATCHWIPE_CONFIG_HOME_VAR};
pub use local::LocalFs;
