use cogscreen_core::models::domain::{DomainTag, RespondentRole};
use thiserror::Error;

/// Failures raised while running a screening session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("answer value {value} for question '{question_id}' is outside the 0-4 scale")]
    InvalidAnswerValue { question_id: String, value: u8 },

    #[error("question '{question_id}' is not part of the {role} questionnaire")]
    UnknownQuestion {
        question_id: String,
        role: RespondentRole,
    },

    #[error("step '{domain}' still has {} unanswered question(s)", unanswered.len())]
    StepIncomplete {
        domain: DomainTag,
        unanswered: Vec<String>,
    },

    #[error("no questions apply to the {0} role; the question bank is misconfigured")]
    EmptyQuestionSet(RespondentRole),

    #[error("session finished after {completed_steps} of {total_steps} steps")]
    SessionIncomplete {
        completed_steps: usize,
        total_steps: usize,
    },
}

impl ScreeningError {
    /// True for errors caused by a broken question bank rather than by the
    /// respondent's input.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(self, ScreeningError::EmptyQuestionSet(_))
    }
}

/// Failures raised while building, loading, or saving a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to access bank file at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("bank_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("bank file is not a JSON object")]
    NotAnObject,

    #[error("question bank is empty")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("question '{question_id}' has invalid weight {weight}; weights must be finite and positive")]
    InvalidWeight { question_id: String, weight: f64 },

    #[error("question '{0}' has no text")]
    EmptyText(String),
}
