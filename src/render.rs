//! Formatters for verdicts, listings and breakdowns.
//!
//! Everything here builds plain `String`s so the command handlers decide
//! where output goes. Tests assert on content rather than escape codes.

use colored::Colorize;
use serde::Serialize;

use barbara::fallacy;
use barbara::form::Form;
use barbara::syllogism::{Statement, Syllogism};

use crate::ui;

/// A single verdict in machine-readable form.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub syllogism: String,
    pub valid: bool,
    pub fallacies: Vec<FallacyReport>,
}

/// One violated rule inside a [`Verdict`].
#[derive(Debug, Serialize)]
pub struct FallacyReport {
    pub code: &'static str,
    pub name: &'static str,
}

impl Verdict {
    pub fn of(s: &Syllogism) -> Verdict {
        let fallacies = fallacy::validate(s);
        Verdict {
            syllogism: s.to_string(),
            valid: fallacies.is_empty(),
            fallacies: fallacies
                .into_iter()
                .map(|f| FallacyReport {
                    code: f.code(),
                    name: f.name(),
                })
                .collect(),
        }
    }
}

/// Format a verdict as the one-line report plus one line per violated
/// rule.
pub fn format_verdict(s: &Syllogism) -> String {
    let fallacies = fallacy::validate(s);
    let mut lines = vec![format!(
        "{}: {}",
        ui::code(&s.to_string()),
        ui::verdict_word(fallacies.is_empty())
    )];
    for fallacy in &fallacies {
        lines.push(format!(
            "  {} {} {}",
            "✗".red(),
            fallacy.name(),
            format!("({})", fallacy.code()).dimmed()
        ));
    }
    lines.join("\n")
}

/// Format valid syllogisms grouped by figure, in the classic
/// brace-delimited listing. `valids` must already be sorted by figure.
pub fn format_valids_listing(valids: &[Syllogism]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("Here are all {} valid syllogisms:", valids.len()).bold()
    ));
    out.push_str("{\n");
    for (i, s) in valids.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
            if s.figure() != valids[i - 1].figure() {
                out.push('\n');
            }
        }
        out.push_str(&s.to_string());
    }
    out.push_str("\n}");
    out
}

/// The full parsed breakdown shown by `barbara show`.
pub fn format_breakdown(s: &Syllogism) -> String {
    let mut lines = vec![ui::code(&s.to_string()).bold().to_string()];
    for statement in [
        Statement::MajorPremise,
        Statement::MinorPremise,
        Statement::Conclusion,
    ] {
        let form = s.form(statement);
        lines.push(format!(
            "  {:<15}{}  {:<23}{}",
            format!("{}:", statement),
            form,
            format!("{} {}", form.quantity(), form.polarity()),
            distribution_phrase(form)
        ));
    }
    lines.push(format!(
        "  {:<15}{} of the major premise, {} of the minor premise",
        "middle term:",
        s.middle_position_in_major(),
        s.middle_position_in_minor()
    ));

    let fallacies = fallacy::validate(s);
    lines.push(format!(
        "  {:<15}{}",
        "verdict:",
        ui::verdict_word(fallacies.is_empty())
    ));
    for fallacy in &fallacies {
        lines.push(format!(
            "    {} {} {}",
            "✗".red(),
            fallacy.name(),
            format!("({})", fallacy.code()).dimmed()
        ));
    }
    lines.join("\n")
}

fn distribution_phrase(form: Form) -> &'static str {
    match form {
        Form::A => "distributes its subject",
        Form::E => "distributes both terms",
        Form::I => "distributes neither term",
        Form::O => "distributes its predicate",
    }
}
