//! Library side of the `parts-adapter` command.

pub mod logging;
pub mod pipeline;
pub mod types;
