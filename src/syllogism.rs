//! The syllogism value type: parsing, term positions, ordering and
//! enumeration.
//!
//! A categorical syllogism is fully described by its *mood* (the forms of
//! major premise, minor premise and conclusion, in that order) and its
//! *figure* (which slot of each premise the middle term occupies). Both
//! are packed into the `MMM-F` code this module parses and prints, e.g.
//! `AAA-4` or `EIO-1`.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use crate::error::ParseError;
use crate::form::{Form, TermPosition};

/// The three statements of a syllogism, in their fixed order.
///
/// Used instead of raw indices into the mood string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    MajorPremise,
    MinorPremise,
    Conclusion,
}

impl Statement {
    /// The two premises, in order.
    pub const PREMISES: [Statement; 2] = [Statement::MajorPremise, Statement::MinorPremise];

    fn index(self) -> usize {
        match self {
            Statement::MajorPremise => 0,
            Statement::MinorPremise => 1,
            Statement::Conclusion => 2,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::MajorPremise => write!(f, "major premise"),
            Statement::MinorPremise => write!(f, "minor premise"),
            Statement::Conclusion => write!(f, "conclusion"),
        }
    }
}

/// The figure of a syllogism.
///
/// Each figure fixes where the major term sits within the major premise
/// and where the minor term sits within the minor premise; the middle
/// term occupies the opposite slot of each premise. The mapping is:
///
/// | Figure | Major term | Minor term |
/// |--------|------------|------------|
/// | 1      | subject    | predicate  |
/// | 2      | predicate  | predicate  |
/// | 3      | subject    | subject    |
/// | 4      | predicate  | subject    |
///
/// Note that this numbering runs opposite to the scholastic convention:
/// here the middle term is subject of the major premise in figure 4, so
/// Barbara is written `AAA-4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Figure {
    One,
    Two,
    Three,
    Four,
}

impl Figure {
    /// All four figures, in numeric order.
    pub const ALL: [Figure; 4] = [Figure::One, Figure::Two, Figure::Three, Figure::Four];

    /// The digit written in the `MMM-F` code.
    pub fn value(self) -> u8 {
        match self {
            Figure::One => 1,
            Figure::Two => 2,
            Figure::Three => 3,
            Figure::Four => 4,
        }
    }

    /// The figure named by `n`, if `n` is in 1..=4.
    pub fn from_number(n: u32) -> Option<Figure> {
        match n {
            1 => Some(Figure::One),
            2 => Some(Figure::Two),
            3 => Some(Figure::Three),
            4 => Some(Figure::Four),
            _ => None,
        }
    }

    /// Position of the major term in the major premise.
    pub fn major_term_position(self) -> TermPosition {
        match self {
            Figure::One | Figure::Three => TermPosition::Subject,
            Figure::Two | Figure::Four => TermPosition::Predicate,
        }
    }

    /// Position of the minor term in the minor premise.
    pub fn minor_term_position(self) -> TermPosition {
        match self {
            Figure::One | Figure::Two => TermPosition::Predicate,
            Figure::Three | Figure::Four => TermPosition::Subject,
        }
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An immutable categorical syllogism: a mood triple plus a figure.
///
/// Values come from [`Syllogism::parse`] or [`Syllogism::enumerate_all`];
/// everything else about a syllogism (distribution, term positions) is
/// derived from these two fields by pure lookups, so the type is `Copy`
/// and trivially shareable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllogism {
    mood: [Form; 3],
    figure: Figure,
}

impl Syllogism {
    fn new(mood: [Form; 3], figure: Figure) -> Syllogism {
        Syllogism { mood, figure }
    }

    /// Parse an `MMM-F` code such as `AAA-4` or `eio-1`.
    ///
    /// The input splits on the first `-` into a three-letter mood (any
    /// case, normalized to uppercase) and a figure digit in 1..=4. On any
    /// violation a [`ParseError`] is returned and no value is built.
    pub fn parse(input: &str) -> Result<Syllogism, ParseError> {
        let (mood_part, figure_part) = input.split_once('-').ok_or(ParseError::MissingDelimiter)?;

        let letters: Vec<char> = mood_part.chars().collect();
        if letters.len() != 3 {
            return Err(ParseError::MoodLength(mood_part.to_string()));
        }
        let mut mood = [Form::A; 3];
        for (slot, &letter) in mood.iter_mut().zip(&letters) {
            *slot = Form::from_char(letter).ok_or(ParseError::BadMoodLetter(letter))?;
        }

        let number: u32 = figure_part
            .parse()
            .map_err(|_| ParseError::FigureNotNumeric(figure_part.to_string()))?;
        let figure = Figure::from_number(number).ok_or(ParseError::FigureOutOfRange(number))?;

        Ok(Syllogism::new(mood, figure))
    }

    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// The form of one of the three statements.
    pub fn form(&self, statement: Statement) -> Form {
        self.mood[statement.index()]
    }

    /// The three-letter mood code, e.g. `"EIO"`.
    pub fn mood(&self) -> String {
        self.mood.iter().map(|form| form.letter()).collect()
    }

    /// Whether `statement` distributes the term at `position`.
    pub fn distributes(&self, statement: Statement, position: TermPosition) -> bool {
        self.form(statement).distributes(position)
    }

    /// Position of the major term in the major premise.
    pub fn major_term_position(&self) -> TermPosition {
        self.figure.major_term_position()
    }

    /// Position of the minor term in the minor premise.
    pub fn minor_term_position(&self) -> TermPosition {
        self.figure.minor_term_position()
    }

    /// Position of the middle term in the major premise.
    pub fn middle_position_in_major(&self) -> TermPosition {
        self.major_term_position().opposite()
    }

    /// Position of the middle term in the minor premise.
    pub fn middle_position_in_minor(&self) -> TermPosition {
        self.minor_term_position().opposite()
    }

    /// Total preorder on figure, used to group listings. Syllogisms with
    /// the same figure compare equal regardless of mood, so use a stable
    /// sort when the within-figure order matters.
    pub fn compare_by_figure(a: &Syllogism, b: &Syllogism) -> Ordering {
        a.figure.cmp(&b.figure)
    }

    /// Every mood and figure combination, 256 in all.
    ///
    /// The order is fixed: major, minor and conclusion forms each cycle
    /// through A, E, I, O with the figure varying fastest. Each call
    /// returns a fresh iterator, so the sequence is restartable.
    pub fn enumerate_all() -> impl Iterator<Item = Syllogism> {
        Form::ALL.into_iter().flat_map(|major| {
            Form::ALL.into_iter().flat_map(move |minor| {
                Form::ALL.into_iter().flat_map(move |conclusion| {
                    Figure::ALL
                        .into_iter()
                        .map(move |figure| Syllogism::new([major, minor, conclusion], figure))
                })
            })
        })
    }
}

impl Display for Syllogism {
    /// The canonical `MMM-F` form. Feeding the output back to
    /// [`Syllogism::parse`] reproduces the value.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mood(), self.figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_term_positions() {
        assert_eq!(Figure::One.major_term_position(), TermPosition::Subject);
        assert_eq!(Figure::One.minor_term_position(), TermPosition::Predicate);
        assert_eq!(Figure::Two.major_term_position(), TermPosition::Predicate);
        assert_eq!(Figure::Two.minor_term_position(), TermPosition::Predicate);
        assert_eq!(Figure::Three.major_term_position(), TermPosition::Subject);
        assert_eq!(Figure::Three.minor_term_position(), TermPosition::Subject);
        assert_eq!(Figure::Four.major_term_position(), TermPosition::Predicate);
        assert_eq!(Figure::Four.minor_term_position(), TermPosition::Subject);
    }

    #[test]
    fn test_middle_positions_per_figure() {
        let mids: Vec<(TermPosition, TermPosition)> = Figure::ALL
            .into_iter()
            .map(|figure| {
                let s = Syllogism::new([Form::A, Form::A, Form::A], figure);
                (s.middle_position_in_major(), s.middle_position_in_minor())
            })
            .collect();
        assert_eq!(
            mids,
            [
                (TermPosition::Predicate, TermPosition::Subject),
                (TermPosition::Subject, TermPosition::Subject),
                (TermPosition::Predicate, TermPosition::Predicate),
                (TermPosition::Subject, TermPosition::Predicate),
            ]
        );
    }

    #[test]
    fn test_parse_assigns_statements_in_order() {
        let s = Syllogism::parse("AEO-2").unwrap();
        assert_eq!(s.form(Statement::MajorPremise), Form::A);
        assert_eq!(s.form(Statement::MinorPremise), Form::E);
        assert_eq!(s.form(Statement::Conclusion), Form::O);
        assert_eq!(s.figure(), Figure::Two);
    }

    #[test]
    fn test_display_round_trips() {
        let s = Syllogism::parse("iIo-3").unwrap();
        assert_eq!(s.to_string(), "IIO-3");
        assert_eq!(Syllogism::parse(&s.to_string()).unwrap(), s);
    }

    #[test]
    fn test_distributes_delegates_to_form() {
        let s = Syllogism::parse("EIO-1").unwrap();
        assert!(s.distributes(Statement::MajorPremise, TermPosition::Subject));
        assert!(s.distributes(Statement::MajorPremise, TermPosition::Predicate));
        assert!(!s.distributes(Statement::MinorPremise, TermPosition::Subject));
        assert!(s.distributes(Statement::Conclusion, TermPosition::Predicate));
    }

    #[test]
    fn test_enumeration_starts_with_figure_cycle() {
        let first: Vec<String> = Syllogism::enumerate_all()
            .take(5)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(first, ["AAA-1", "AAA-2", "AAA-3", "AAA-4", "AAE-1"]);
    }
}
