use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{
    BranchRule, DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, Diagnostics, QuestionDeclaration,
    QuestionDescriptor, QuestionId, Warning,
};

/// Ordered collection of question descriptors with O(1) id lookup.
///
/// Built once from the host's declaration; immutable afterwards. Replacing
/// the question set means building a new registry (and resetting the
/// engine, see [`SurveyEngine::reconfigure`](crate::SurveyEngine::reconfigure)).
#[derive(Debug, Clone, Default)]
pub struct QuestionRegistry {
    questions: Vec<QuestionDescriptor>,
    by_id: HashMap<QuestionId, usize>,
}

impl QuestionRegistry {
    /// Build a registry from declared questions.
    ///
    /// Defective declarations degrade instead of failing: a question without
    /// an id stays in the sequence but is unaddressable, a rule with a bad
    /// range or unknown type is dropped, and a duplicate id keeps its first
    /// declaration. Each recovery is reported once through `diagnostics`.
    pub fn build(declarations: &[QuestionDeclaration], diagnostics: &dyn Diagnostics) -> Self {
        let mut questions = Vec::with_capacity(declarations.len());
        let mut by_id = HashMap::new();

        for (index, declaration) in declarations.iter().enumerate() {
            let id = match declaration.question_id.as_deref() {
                Some(id) => {
                    let id = QuestionId::new(id);
                    match by_id.entry(id.clone()) {
                        Entry::Occupied(_) => {
                            diagnostics.warning(Warning::DuplicateQuestionId { id: id.clone() });
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(index);
                        }
                    }
                    Some(id)
                }
                None => {
                    diagnostics.warning(Warning::MissingQuestionId { index });
                    None
                }
            };

            let label = id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("#{index}"));
            let rules = build_rules(declaration, &label, diagnostics);

            let mut question = QuestionDescriptor::new(id, declaration.question.clone())
                .with_required(declaration.required)
                .with_scale(
                    declaration.min.unwrap_or(DEFAULT_SCALE_MIN),
                    declaration.max.unwrap_or(DEFAULT_SCALE_MAX),
                )
                .with_rules(rules);
            if let Some(low) = &declaration.low_score_label {
                question = question.with_low_score_label(low);
            }
            if let Some(high) = &declaration.high_score_label {
                question = question.with_high_score_label(high);
            }
            questions.push(question);
        }

        Self { questions, by_id }
    }

    /// Get a descriptor by id.
    pub fn get(&self, id: &QuestionId) -> Option<&QuestionDescriptor> {
        self.by_id.get(id).map(|&index| &self.questions[index])
    }

    /// Get the declaration-order index of a question.
    pub fn index_of(&self, id: &QuestionId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Check whether a question with the given id exists.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Get all questions in declaration order.
    pub fn all(&self) -> &[QuestionDescriptor] {
        &self.questions
    }

    /// Get the number of questions.
    pub fn count(&self) -> usize {
        self.questions.len()
    }

    /// Check if the registry holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn build_rules(
    declaration: &QuestionDeclaration,
    label: &str,
    diagnostics: &dyn Diagnostics,
) -> Vec<BranchRule> {
    let mut rules = Vec::with_capacity(declaration.logic.len());

    for rule in &declaration.logic {
        let Some(target) = rule.target.as_deref() else {
            diagnostics.warning(Warning::MissingRuleTarget {
                question: label.to_string(),
            });
            continue;
        };
        let target = QuestionId::new(target);

        match rule.kind.as_str() {
            "next" => rules.push(BranchRule::Unconditional { target }),
            "conditional" => {
                let range = rule.range.as_deref().unwrap_or("");
                match parse_range(range) {
                    Some((min, max)) => rules.push(BranchRule::Conditional { min, max, target }),
                    None => diagnostics.warning(Warning::MalformedRange {
                        question: label.to_string(),
                        range: range.to_string(),
                    }),
                }
            }
            other => diagnostics.warning(Warning::UnknownRuleKind {
                question: label.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    rules
}

/// Parse a `"min-max"` range into its inclusive bounds.
fn parse_range(range: &str) -> Option<(i64, i64)> {
    let (min, max) = range.split_once('-')?;
    let min = min.trim().parse().ok()?;
    let max = max.trim().parse().ok()?;
    Some((min, max))
}
