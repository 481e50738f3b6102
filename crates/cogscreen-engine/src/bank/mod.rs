//! The question bank: every scorable question with its domain, weight, and
//! respondent applicability.

mod file;
mod standard;

use std::collections::HashSet;
use std::sync::LazyLock;

use cogscreen_core::models::domain::{Applicability, DomainTag, RespondentRole};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::BankError;
use crate::scoring::{AnswerEntry, AnswerValidationError};

pub use file::CURRENT_BANK_VERSION;

/// A single scorable questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: DomainTag,
    /// Contribution of this item to its domain. Always finite and positive.
    pub weight: f64,
    #[serde(default)]
    pub applicability: Applicability,
}

impl Question {
    pub fn applies_to(&self, role: RespondentRole) -> bool {
        self.applicability.applies_to(role)
    }

    /// Highest weighted score this question can contribute.
    pub fn max_contribution(&self) -> f64 {
        4.0 * self.weight
    }
}

/// An ordered, validated, immutable set of questions.
///
/// Order is canonical: filtering preserves it and findings are reported in
/// it. Sessions borrow the bank, so one bank can back any number of
/// concurrent sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from caller-supplied questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(BankError::DuplicateQuestionId(question.id.clone()));
            }
            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(BankError::InvalidWeight {
                    question_id: question.id.clone(),
                    weight: question.weight,
                });
            }
            if question.text.trim().is_empty() {
                return Err(BankError::EmptyText(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in reference questionnaire.
    pub fn standard() -> &'static QuestionBank {
        static STANDARD: LazyLock<QuestionBank> = LazyLock::new(|| QuestionBank {
            questions: standard::questions(),
        });
        &STANDARD
    }

    /// All questions, in canonical order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions asked of `role`, in canonical order.
    pub fn applicable_questions(&self, role: RespondentRole) -> Vec<&Question> {
        self.applicable(role).collect()
    }

    pub(crate) fn applicable(&self, role: RespondentRole) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.applies_to(role))
    }

    /// Check an externally captured answer set against this bank.
    ///
    /// Reports every entry that names a question not asked of `role` or
    /// carries a value outside the 0–4 scale.
    pub fn validate_answers(
        &self,
        role: RespondentRole,
        entries: &[AnswerEntry],
    ) -> Vec<AnswerValidationError> {
        let mut errors = Vec::new();
        for entry in entries {
            match self.get(&entry.question_id) {
                Some(question) if question.applies_to(role) => {
                    if entry.value > 4 {
                        errors.push(AnswerValidationError {
                            question_id: entry.question_id.clone(),
                            value: entry.value,
                            message: format!(
                                "{}: value {} is outside range [0, 4]",
                                question.id, entry.value
                            ),
                        });
                    }
                }
                Some(question) => errors.push(AnswerValidationError {
                    question_id: entry.question_id.clone(),
                    value: entry.value,
                    message: format!("{}: not asked of {role} respondents", question.id),
                }),
                None => errors.push(AnswerValidationError {
                    question_id: entry.question_id.clone(),
                    value: entry.value,
                    message: format!("{}: unknown question", entry.question_id),
                }),
            }
        }
        errors
    }
}
