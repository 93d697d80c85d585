//! Command handlers for the barbara CLI, one module per subcommand.

pub mod check;
pub mod repl;
pub mod show;
pub mod valids;
