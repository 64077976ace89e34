//! Configuration for the demo programs.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{BasicAuth, ClientSettings};
