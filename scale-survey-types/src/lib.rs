//! Core types for the scale-survey crate.
//!
//! This crate provides the foundational types for embeddable scale
//! questionnaires:
//! - `QuestionId` - Identifier used as answer-map key and branch target
//! - `QuestionDescriptor` and `BranchRule` - Individual questions and their
//!   branching logic
//! - `Answers` - Collected selections, keyed by question id
//! - `SurveyDeclaration` - The declarative input the host hands over
//! - `Diagnostics` and `Warning` - Observability hook for recovered anomalies

mod question_id;
pub use question_id::QuestionId;

mod branch_rule;
pub use branch_rule::BranchRule;

mod question;
pub use question::{DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, QuestionDescriptor};

mod answers;
pub use answers::Answers;

mod declaration;
pub use declaration::{BranchRuleDeclaration, QuestionDeclaration, SurveyDeclaration};

mod diagnostics;
pub use diagnostics::{Diagnostics, TracingDiagnostics, Warning};

mod error;
pub use error::SurveyError;
