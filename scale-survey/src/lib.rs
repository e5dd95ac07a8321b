//! # scale-survey
//!
//! Navigation core for embeddable multi-page scale questionnaires.
//! UI-agnostic.
//!
//! The engine owns three things: the ordered question registry, the answer
//! map, and the navigation position (linear pages, or a branched jump
//! triggered by conditional logic). The embedding UI forwards answer
//! changes and "next" actions into the engine and re-renders purely from
//! the state it reports: visible questions, control enablement, progress,
//! and completion.
//!
//! ## Usage
//!
//! ```
//! use scale_survey::{QuestionId, SurveyDeclaration, SurveyEngine};
//!
//! # fn main() -> Result<(), scale_survey::SurveyError> {
//! let declaration = SurveyDeclaration::from_json(
//!     r#"{
//!         "questions-per-page": 1,
//!         "questions": [
//!             { "question-id": "q1", "question": "How satisfied are you?", "required": true },
//!             { "question-id": "q2", "question": "Would you recommend us?" }
//!         ]
//!     }"#,
//! )?;
//!
//! let mut engine = SurveyEngine::new(&declaration);
//! engine.record_answer("q1", 4);
//! assert!(engine.can_advance());
//!
//! engine.advance();
//! assert_eq!(engine.visible_question_ids(), vec![QuestionId::new("q2")]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Branching
//!
//! A question may declare logic rules (`next`, or `conditional` with an
//! inclusive answer range). On every "next" action the engine first looks
//! for a matching rule on the visible, answered questions; a valid target
//! suspends pagination and shows that single question. Without a match the
//! survey advances page by page until it completes. Defective rules never
//! fail the survey; they are reported through the injectable
//! [`Diagnostics`] hook and skipped.

// Re-export all types from scale-survey-types
pub use scale_survey_types::*;

mod registry;
pub use registry::QuestionRegistry;

mod engine;
pub use engine::{CloseNotice, Position, SurveyEngine};

mod view;
pub use view::{PageInfo, SurveyView};

mod host;
pub use host::SurveyHost;

// Diagnostics sink for tests, so recovered anomalies can be asserted on
mod test_diagnostics;
pub use test_diagnostics::TestDiagnostics;
