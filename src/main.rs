//! CLI entry point and command dispatch for barbara.

mod cmd;
mod render;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser)]
#[command(name = "barbara")]
#[command(version)]
#[command(about = "Categorical syllogism validity tester", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    barbara                    Interactive shell\n    barbara check AAA-4        Test a single syllogism\n    barbara valids             List every valid form"
)]
struct Cli {
    /// Suppress banners and hints
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Test one or more syllogisms for validity
    ///
    /// Each argument is an MMM-F code: three mood letters (A, E, I or O,
    /// any case) and a figure from 1 to 4. With no arguments and piped
    /// input, reads one code per line from stdin.
    Check {
        /// Syllogism codes in MMM-F form, e.g. AAA-4 or eio-1
        #[arg(value_name = "SYLLOGISM")]
        syllogisms: Vec<String>,
        /// Emit verdicts as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all valid syllogisms, grouped by figure
    Valids {
        /// Restrict the listing to one figure (1-4)
        #[arg(long, value_name = "FIGURE")]
        figure: Option<u32>,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the parsed breakdown of a syllogism
    Show {
        /// Syllogism code in MMM-F form
        #[arg(value_name = "SYLLOGISM")]
        syllogism: String,
    },
    /// Start the interactive shell (the default when no command is given)
    Repl,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.quiet {
        ui::set_quiet();
    }

    match cli.command {
        Some(Commands::Check { syllogisms, json }) => cmd::check::cmd_check(&syllogisms, json),
        Some(Commands::Valids { figure, json }) => cmd::valids::cmd_valids(figure, json),
        Some(Commands::Show { syllogism }) => cmd::show::cmd_show(&syllogism),
        Some(Commands::Repl) | None => cmd::repl::cmd_repl(),
        Some(Commands::Completion { shell }) => cmd_completion(shell),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "barbara", &mut io::stdout());
    Ok(())
}
