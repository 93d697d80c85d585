//! Check command handler: parse codes and report verdicts.
//!
//! Accepts codes as arguments or, when none are given and stdin is piped,
//! one code per line. Malformed inputs are reported individually and the
//! command fails at the end so scripts can rely on the exit status.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead};

use barbara::syllogism::Syllogism;

use crate::render::{self, Verdict};

/// Print usage hint when check is invoked empty-handed on a terminal
fn print_check_usage_hint() {
    println!("Usage: barbara check <SYLLOGISM>...\n");
    println!("Examples:");
    println!("  barbara check AAA-4");
    println!("  barbara check eio-1 OAO-2 --json");
    println!("  printf 'AAA-4\\nAIO-1\\n' | barbara check\n");
    println!("Run 'barbara check --help' for all options.");
}

pub fn cmd_check(syllogisms: &[String], json: bool) -> Result<()> {
    let inputs: Vec<String> = if syllogisms.is_empty() {
        if atty::is(atty::Stream::Stdin) {
            print_check_usage_hint();
            return Ok(());
        }
        read_stdin_lines()?
    } else {
        syllogisms.to_vec()
    };

    let mut verdicts = Vec::new();
    let mut bad_inputs = 0usize;
    for input in &inputs {
        match Syllogism::parse(input) {
            Ok(s) => {
                if json {
                    verdicts.push(Verdict::of(&s));
                } else {
                    println!("{}", render::format_verdict(&s));
                }
            }
            Err(err) => {
                eprintln!("{} {}: {}", "✗".red(), input, err);
                bad_inputs += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    }

    if bad_inputs > 0 {
        anyhow::bail!("{} of {} inputs could not be parsed", bad_inputs, inputs.len());
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
