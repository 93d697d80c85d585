//! Parsing, ordering and enumeration tests over the public API.

use std::cmp::Ordering;
use std::collections::HashSet;

use barbara::error::ParseError;
use barbara::form::Form;
use barbara::syllogism::{Figure, Statement, Syllogism};

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_parse_normalizes_case() {
    assert_eq!(Syllogism::parse("aaa-1").unwrap().to_string(), "AAA-1");
    assert_eq!(Syllogism::parse("aEi-3").unwrap().to_string(), "AEI-3");
}

#[test]
fn test_parse_assigns_statements_in_order() {
    let s = Syllogism::parse("EIO-4").unwrap();
    assert_eq!(s.form(Statement::MajorPremise), Form::E);
    assert_eq!(s.form(Statement::MinorPremise), Form::I);
    assert_eq!(s.form(Statement::Conclusion), Form::O);
    assert_eq!(s.figure(), Figure::Four);
}

#[test]
fn test_reject_short_mood() {
    assert_eq!(
        Syllogism::parse("AA-1"),
        Err(ParseError::MoodLength("AA".to_string()))
    );
}

#[test]
fn test_reject_long_mood() {
    assert_eq!(
        Syllogism::parse("AAAA-1"),
        Err(ParseError::MoodLength("AAAA".to_string()))
    );
}

#[test]
fn test_reject_bad_mood_letter() {
    assert_eq!(Syllogism::parse("AAB-1"), Err(ParseError::BadMoodLetter('B')));
    assert_eq!(Syllogism::parse("uAA-1"), Err(ParseError::BadMoodLetter('u')));
}

#[test]
fn test_reject_figure_out_of_range() {
    assert_eq!(Syllogism::parse("AAA-0"), Err(ParseError::FigureOutOfRange(0)));
    assert_eq!(Syllogism::parse("AAA-5"), Err(ParseError::FigureOutOfRange(5)));
}

#[test]
fn test_reject_non_numeric_figure() {
    assert_eq!(
        Syllogism::parse("AAA-x"),
        Err(ParseError::FigureNotNumeric("x".to_string()))
    );
    assert_eq!(
        Syllogism::parse("AAA-"),
        Err(ParseError::FigureNotNumeric(String::new()))
    );
}

#[test]
fn test_reject_missing_delimiter() {
    assert_eq!(Syllogism::parse("AAA"), Err(ParseError::MissingDelimiter));
    assert_eq!(Syllogism::parse(""), Err(ParseError::MissingDelimiter));
}

#[test]
fn test_reject_second_delimiter() {
    // splits on the first '-', leaving "1-2" as the figure part
    assert_eq!(
        Syllogism::parse("AAA-1-2"),
        Err(ParseError::FigureNotNumeric("1-2".to_string()))
    );
}

#[test]
fn test_parse_display_roundtrip_all_256() {
    for s in Syllogism::enumerate_all() {
        let reparsed = Syllogism::parse(&s.to_string()).unwrap();
        assert_eq!(reparsed, s);
        assert_eq!(reparsed.to_string(), s.to_string());
    }
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_compare_is_reflexive() {
    for s in Syllogism::enumerate_all() {
        assert_eq!(Syllogism::compare_by_figure(&s, &s), Ordering::Equal);
    }
}

#[test]
fn test_compare_orders_by_figure_only() {
    let low = Syllogism::parse("OOO-1").unwrap();
    let high = Syllogism::parse("AAA-3").unwrap();
    assert_eq!(Syllogism::compare_by_figure(&low, &high), Ordering::Less);
    assert_eq!(Syllogism::compare_by_figure(&high, &low), Ordering::Greater);

    let same_figure = Syllogism::parse("EIO-3").unwrap();
    assert_eq!(
        Syllogism::compare_by_figure(&high, &same_figure),
        Ordering::Equal
    );
}

#[test]
fn test_compare_is_transitive() {
    let one = Syllogism::parse("AAA-1").unwrap();
    let two = Syllogism::parse("EEE-2").unwrap();
    let four = Syllogism::parse("III-4").unwrap();
    assert_eq!(Syllogism::compare_by_figure(&one, &two), Ordering::Less);
    assert_eq!(Syllogism::compare_by_figure(&two, &four), Ordering::Less);
    assert_eq!(Syllogism::compare_by_figure(&one, &four), Ordering::Less);
}

// ============================================================================
// ENUMERATION
// ============================================================================

#[test]
fn test_enumeration_yields_256_distinct_forms() {
    let all: Vec<Syllogism> = Syllogism::enumerate_all().collect();
    assert_eq!(all.len(), 256);

    let distinct: HashSet<Syllogism> = all.iter().copied().collect();
    assert_eq!(distinct.len(), 256);
}

#[test]
fn test_enumeration_covers_every_combination() {
    let codes: HashSet<String> = Syllogism::enumerate_all().map(|s| s.to_string()).collect();
    for major in Form::ALL {
        for minor in Form::ALL {
            for conclusion in Form::ALL {
                for figure in 1..=4 {
                    let code = format!("{}{}{}-{}", major, minor, conclusion, figure);
                    assert!(codes.contains(&code), "missing {}", code);
                }
            }
        }
    }
}

#[test]
fn test_enumeration_is_restartable() {
    let first: Vec<Syllogism> = Syllogism::enumerate_all().collect();
    let second: Vec<Syllogism> = Syllogism::enumerate_all().collect();
    assert_eq!(first, second);
}

#[test]
fn test_enumeration_order_is_fixed() {
    let mut it = Syllogism::enumerate_all();
    assert_eq!(it.next().unwrap().to_string(), "AAA-1");
    assert_eq!(it.next().unwrap().to_string(), "AAA-2");
    assert_eq!(it.next().unwrap().to_string(), "AAA-3");
    assert_eq!(it.next().unwrap().to_string(), "AAA-4");
    assert_eq!(it.next().unwrap().to_string(), "AAE-1");

    assert_eq!(
        Syllogism::enumerate_all().last().unwrap().to_string(),
        "OOO-4"
    );
}
