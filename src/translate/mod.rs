//! Make-to-shell line translation
//!
//! Turns a Make configuration file into shell variable assignments:
//! - **Assignments** - `NAME := value` lines become `NAME=value`
//! - **Expansions** - `$(VAR)` references become `${VAR}`
//! - **Everything else** - comments, blank lines, rules and other operators are dropped

pub mod assignment;
pub mod document;
pub mod expand;

pub use assignment::{parse_assignment, Assignment};
pub use document::{translate_file, translate_str, Header, Translation};
pub use expand::rewrite_expansions;
