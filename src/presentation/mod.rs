//! Presentation Layer
//!
//! This layer handles:
//! - Creating the clean use case with infrastructure dependencies
//! - Terminal capability detection
//! - Summary rendering (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use scratchwipe::presentation::factory;
//!
//! let reporter = factory::create_reporter(config.output.format);
//! let cleaner = factory::create_scratch_cleaner(&config, reporter)?;
//! let report = cleaner.clean()?;
//! ```

pub mod factory;
pub mod output;
pub mod terminal;

pub use factory::{create_path_provider, create_reporter, create_scratch_cleaner};
pub use output::{create_renderer, CleanReportRenderer, JsonRenderer, TextRenderer};
pub use terminal::{detect_capabilities, TerminalCapabilities};
