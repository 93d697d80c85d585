//! The interactive shell: read codes line by line and report verdicts.
//!
//! Besides syllogism codes the shell understands a few commands: `exit`
//! (or `quit`), `help`, and `valids` / `show valids` for the grouped
//! listing of every valid form. When stdin is not a terminal the same
//! dispatch runs over piped lines without prompts or banners.

use anyhow::Result;
use colored::Colorize;
use regex::Regex;
use std::io::{self, BufRead};

use barbara::syllogism::Syllogism;

use crate::cmd::valids;
use crate::render;
use crate::ui;

#[derive(Debug, PartialEq)]
enum Reply {
    Continue,
    Exit,
}

pub fn cmd_repl() -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        run_interactive()
    } else {
        run_piped()
    }
}

fn run_interactive() -> Result<()> {
    if !ui::is_quiet() {
        print_banner();
    }
    loop {
        let line: String = match dialoguer::Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // ^C or a closed terminal ends the session like "exit"
            Err(_) => break,
        };
        if dispatch(&line) == Reply::Exit {
            break;
        }
    }
    if !ui::is_quiet() {
        println!("Goodbye!");
    }
    Ok(())
}

fn run_piped() -> Result<()> {
    for line in io::stdin().lock().lines() {
        if dispatch(&line?) == Reply::Exit {
            break;
        }
    }
    Ok(())
}

fn dispatch(line: &str) -> Reply {
    let input = line.trim();
    if input.is_empty() {
        return Reply::Continue;
    }
    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return Reply::Exit;
    }
    if input.eq_ignore_ascii_case("help") {
        print_help();
        return Reply::Continue;
    }
    if is_valids_command(input) {
        println!(
            "{}",
            render::format_valids_listing(&valids::collect_valids(None))
        );
        return Reply::Continue;
    }
    match Syllogism::parse(input) {
        Ok(s) => println!("{}", render::format_verdict(&s)),
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            if !ui::is_quiet() {
                println!(
                    "{}",
                    "  Enter a syllogism of the form MMM-F, e.g. EIO-1.".dimmed()
                );
            }
        }
    }
    Reply::Continue
}

/// Accepts `valids` and the long form `show valids`, any case, any
/// amount of whitespace in between.
fn is_valids_command(input: &str) -> bool {
    Regex::new(r"(?i)^(show\s+)?valids$").unwrap().is_match(input)
}

fn print_banner() {
    println!("{}", "Welcome to the Syllogism Tester!".bold());
    println!(
        "Enter a syllogism of the form MMM-F, e.g. {}.",
        ui::code("AAA-4")
    );
    println!(
        "Type {} to list every valid form, {} to leave.",
        ui::code("valids"),
        ui::code("exit")
    );
}

fn print_help() {
    println!("Commands:");
    println!("  {:<14}test the given syllogism, e.g. EIO-1", "<MMM-F>");
    println!("  {:<14}list all valid syllogisms, grouped by figure", "valids");
    println!("  {:<14}show this help", "help");
    println!("  {:<14}leave the shell", "exit");
}
