//! Valids command handler: enumerate, validate and list the valid forms.

use anyhow::Result;
use serde::Serialize;

use barbara::fallacy;
use barbara::syllogism::{Figure, Syllogism};

use crate::render;

#[derive(Debug, Serialize)]
struct ValidsReport {
    count: usize,
    syllogisms: Vec<String>,
}

/// All valid forms, stable-sorted by figure so enumeration order is kept
/// within each figure group. Optionally restricted to one figure.
pub fn collect_valids(figure: Option<Figure>) -> Vec<Syllogism> {
    let mut valids: Vec<Syllogism> = Syllogism::enumerate_all()
        .filter(|s| fallacy::is_valid(s))
        .filter(|s| figure.map_or(true, |wanted| s.figure() == wanted))
        .collect();
    valids.sort_by(Syllogism::compare_by_figure);
    valids
}

pub fn cmd_valids(figure: Option<u32>, json: bool) -> Result<()> {
    let figure = match figure {
        Some(n) => Some(
            Figure::from_number(n)
                .ok_or_else(|| anyhow::anyhow!("figure must be between 1 and 4, got {}", n))?,
        ),
        None => None,
    };

    let valids = collect_valids(figure);
    if json {
        let report = ValidsReport {
            count: valids.len(),
            syllogisms: valids.iter().map(|s| s.to_string()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render::format_valids_listing(&valids));
    }
    Ok(())
}
