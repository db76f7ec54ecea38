//! Path Provider Implementations
//!
//! Concrete implementations of the PathProvider port.

mod fixed;
mod temp_dir;

pub use fixed::FixedPathProvider;
pub use temp_dir::TempDirProvider;
