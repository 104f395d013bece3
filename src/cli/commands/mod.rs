//! Command handlers, one module per subcommand.

pub mod new_file;
pub mod parse;
pub mod scan;
