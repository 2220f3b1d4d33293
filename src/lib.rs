pub mod checker;
pub mod diff;
pub mod digest;
pub mod error;
pub mod repeat;

// Re-export functions if needed
pub use checker::{AnswerLayout, CaseReport, Checker, Outcome, Selection};
pub use repeat::{analyze, longest_repeated_substring, smallest_repeating_unit};
