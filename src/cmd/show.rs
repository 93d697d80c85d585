//! Show command handler: the parsed breakdown of one syllogism.

use anyhow::{Context, Result};

use barbara::syllogism::Syllogism;

use crate::render;

pub fn cmd_show(input: &str) -> Result<()> {
    let s = Syllogism::parse(input)
        .with_context(|| format!("could not parse \"{}\"", input))?;
    println!("{}", render::format_breakdown(&s));
    Ok(())
}
