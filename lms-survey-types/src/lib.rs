//! Core types for the lms-survey crate.
//!
//! This crate provides the foundational types for the survey data core:
//! - `SurveyRecord` and its section structs - one respondent's submission
//! - `WorkingRecord` - the mutable in-progress record
//! - `FieldUpdate` and `RatingCategory` - the per-field mutation vocabulary
//! - `validate` and `Violation` - the submission acceptance rules

mod record;
pub use record::{Demographic, Performance, Satisfaction, SurveyRecord};

mod field;
pub use field::{FieldUpdate, RatingCategory};

mod working;
pub use working::WorkingRecord;

mod validate;
pub use validate::{RESPONSE_TIME_MAX_MS, Violation, validate};
