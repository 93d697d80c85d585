//! # Barbara - categorical syllogism tester
//!
//! Barbara evaluates categorical syllogisms - three-line arguments whose
//! statements each take one of the four canonical forms A, E, I, O - and
//! decides formal validity under the six classical term-logic rules.
//!
//! ## Core Concepts
//!
//! - **Mood**: the three letters naming the forms of major premise, minor
//!   premise and conclusion, e.g. `EIO`.
//! - **Figure**: a digit 1-4 encoding which slot of each premise the
//!   middle term occupies.
//! - **Distribution**: whether a statement claims something about every
//!   member of a term's class; the six rules are stated in terms of it.
//!
//! A syllogism is written `MMM-F`, e.g. `AAA-4` ("Barbara", the
//! paradigmatic valid form under this crate's figure numbering).
//!
//! ## Modules
//!
//! - [`form`] - The four statement forms and their distribution semantics
//! - [`syllogism`] - The parsed syllogism value: parsing, term positions,
//!   ordering and enumeration of all 256 forms
//! - [`fallacy`] - The six validity rules and the validator
//! - [`error`] - The parse error taxonomy
//!
//! ## Example
//!
//! ```
//! use barbara::fallacy::{self, Fallacy};
//! use barbara::syllogism::Syllogism;
//!
//! let barbara = Syllogism::parse("AAA-4").unwrap();
//! assert!(fallacy::validate(&barbara).is_empty());
//!
//! let broken = Syllogism::parse("aio-1").unwrap();
//! assert_eq!(fallacy::validate(&broken), vec![Fallacy::UndistributedMiddle]);
//! ```

pub mod error;
pub mod fallacy;
pub mod form;
pub mod syllogism;

pub use error::ParseError;
pub use fallacy::{validate, Fallacy};
pub use form::{Form, Polarity, Quantity, TermPosition};
pub use syllogism::{Figure, Statement, Syllogism};
