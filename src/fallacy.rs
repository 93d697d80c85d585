//! The six fallacy rules of syllogistic validity.
//!
//! Each rule is an independent predicate over a parsed [`Syllogism`],
//! written in the shape the rules are traditionally stated: a guard
//! naming when the rule applies at all, then the violating condition.
//! A syllogism is valid exactly when no rule fires.

use std::fmt::{self, Display, Formatter};

use crate::form::TermPosition;
use crate::syllogism::{Statement, Syllogism};

/// A violated validity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallacy {
    UndistributedMiddle,
    IllicitMajor,
    IllicitMinor,
    ExclusivePremises,
    AffirmativeFromNegative,
    Existential,
}

impl Fallacy {
    /// Every rule, in reporting order.
    pub const ALL: [Fallacy; 6] = [
        Fallacy::UndistributedMiddle,
        Fallacy::IllicitMajor,
        Fallacy::IllicitMinor,
        Fallacy::ExclusivePremises,
        Fallacy::AffirmativeFromNegative,
        Fallacy::Existential,
    ];

    /// Short code used in compact listings.
    pub fn code(self) -> &'static str {
        match self {
            Fallacy::UndistributedMiddle => "UM",
            Fallacy::IllicitMajor => "IMa",
            Fallacy::IllicitMinor => "IMi",
            Fallacy::ExclusivePremises => "EP",
            Fallacy::AffirmativeFromNegative => "ACNP",
            Fallacy::Existential => "EF",
        }
    }

    /// The rule's traditional name.
    pub fn name(self) -> &'static str {
        match self {
            Fallacy::UndistributedMiddle => "undistributed middle",
            Fallacy::IllicitMajor => "illicit major",
            Fallacy::IllicitMinor => "illicit minor",
            Fallacy::ExclusivePremises => "exclusive premises",
            Fallacy::AffirmativeFromNegative => {
                "affirmative conclusion from a negative premise"
            }
            Fallacy::Existential => "existential fallacy",
        }
    }

    /// Whether the syllogism commits this fallacy.
    pub fn committed_by(self, s: &Syllogism) -> bool {
        match self {
            Fallacy::UndistributedMiddle => !has_distributed_middle(s),
            Fallacy::IllicitMajor => commits_illicit_major(s),
            Fallacy::IllicitMinor => commits_illicit_minor(s),
            Fallacy::ExclusivePremises => has_exclusive_premises(s),
            Fallacy::AffirmativeFromNegative => affirmative_from_negative(s),
            Fallacy::Existential => commits_existential_fallacy(s),
        }
    }
}

impl Display for Fallacy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rule 1: the middle term must be distributed in at least one premise.
pub fn has_distributed_middle(s: &Syllogism) -> bool {
    s.distributes(Statement::MajorPremise, s.middle_position_in_major())
        || s.distributes(Statement::MinorPremise, s.middle_position_in_minor())
}

/// Rule 2: a conclusion distributing its predicate (the major term) needs
/// a major premise that distributes that term too.
pub fn commits_illicit_major(s: &Syllogism) -> bool {
    if !s.distributes(Statement::Conclusion, TermPosition::Predicate) {
        return false;
    }
    !s.distributes(Statement::MajorPremise, s.major_term_position())
}

/// Rule 3: symmetric to illicit major, for the conclusion's subject (the
/// minor term) and the minor premise.
pub fn commits_illicit_minor(s: &Syllogism) -> bool {
    if !s.distributes(Statement::Conclusion, TermPosition::Subject) {
        return false;
    }
    !s.distributes(Statement::MinorPremise, s.minor_term_position())
}

/// Rule 4: two negative premises support no conclusion at all.
pub fn has_exclusive_premises(s: &Syllogism) -> bool {
    Statement::PREMISES
        .into_iter()
        .all(|premise| s.form(premise).is_negative())
}

/// Rule 5: an affirmative conclusion cannot rest on a negative premise.
pub fn affirmative_from_negative(s: &Syllogism) -> bool {
    if s.form(Statement::Conclusion).is_negative() {
        return false;
    }
    Statement::PREMISES
        .into_iter()
        .any(|premise| s.form(premise).is_negative())
}

/// Rule 6: a particular conclusion asserts existence, so at least one
/// premise must be particular.
pub fn commits_existential_fallacy(s: &Syllogism) -> bool {
    if !s.form(Statement::Conclusion).is_particular() {
        return false;
    }
    !Statement::PREMISES
        .into_iter()
        .any(|premise| s.form(premise).is_particular())
}

/// All rules the syllogism violates, in reporting order. An empty result
/// means the syllogism is valid.
pub fn validate(s: &Syllogism) -> Vec<Fallacy> {
    Fallacy::ALL
        .into_iter()
        .filter(|fallacy| fallacy.committed_by(s))
        .collect()
}

/// True when no rule fires.
pub fn is_valid(s: &Syllogism) -> bool {
    Fallacy::ALL.into_iter().all(|fallacy| !fallacy.committed_by(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(code: &str) -> Syllogism {
        Syllogism::parse(code).unwrap()
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: std::collections::HashSet<&str> =
            Fallacy::ALL.into_iter().map(Fallacy::code).collect();
        assert_eq!(codes.len(), Fallacy::ALL.len());
    }

    #[test]
    fn test_committed_by_agrees_with_rule_functions() {
        for s in Syllogism::enumerate_all() {
            assert_eq!(
                Fallacy::UndistributedMiddle.committed_by(&s),
                !has_distributed_middle(&s)
            );
            assert_eq!(Fallacy::IllicitMajor.committed_by(&s), commits_illicit_major(&s));
            assert_eq!(Fallacy::IllicitMinor.committed_by(&s), commits_illicit_minor(&s));
        }
    }

    #[test]
    fn test_validate_preserves_rule_order() {
        // OOO-1 breaks two rules; they must come back in ALL order
        assert_eq!(
            validate(&syl("OOO-1")),
            vec![Fallacy::IllicitMajor, Fallacy::ExclusivePremises]
        );
    }

    #[test]
    fn test_valid_syllogism_fires_nothing() {
        assert!(validate(&syl("EIO-1")).is_empty());
        assert!(is_valid(&syl("AAA-4")));
    }
}
