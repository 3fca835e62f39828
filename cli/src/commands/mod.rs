//! CLI command implementations

pub mod defaults;
pub mod path;

pub use defaults::defaults_command;
pub use path::path_command;
