//! Step-by-step answer collection for one screening attempt.

use cogscreen_core::models::answer::{AnswerMap, AnswerValue};
use cogscreen_core::models::domain::{DomainTag, RespondentRole};
use cogscreen_core::models::report::Report;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bank::{Question, QuestionBank};
use crate::error::ScreeningError;
use crate::scoring;

/// Externally visible state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    /// The current step still has unanswered questions.
    Collecting,
    /// Every question in the current step is answered.
    StepComplete,
    /// The last step has been advanced past.
    SessionComplete,
}

/// The questions of one domain that apply to the respondent, in bank order.
#[derive(Debug, Clone)]
pub struct Step<'a> {
    domain: DomainTag,
    questions: Vec<&'a Question>,
}

impl<'a> Step<'a> {
    pub fn domain(&self) -> DomainTag {
        self.domain
    }

    pub fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    fn is_answered(&self, answers: &AnswerMap) -> bool {
        self.questions.iter().all(|q| answers.contains_key(&q.id))
    }

    fn unanswered<'s>(&'s self, answers: &'s AnswerMap) -> impl Iterator<Item = &'a Question> + 's {
        self.questions
            .iter()
            .copied()
            .filter(move |q| !answers.contains_key(&q.id))
    }
}

/// A single in-progress screening.
///
/// Owned by exactly one caller. Run concurrent screenings with independent
/// sessions over a shared [`QuestionBank`].
#[derive(Debug, Clone)]
pub struct Session<'a> {
    bank: &'a QuestionBank,
    role: RespondentRole,
    steps: Vec<Step<'a>>,
    answers: AnswerMap,
    /// Index into `steps`; equal to `steps.len()` once the session is complete.
    cursor: usize,
}

impl<'a> Session<'a> {
    /// Begin a screening for `role`, positioned on the first step.
    pub fn start(bank: &'a QuestionBank, role: RespondentRole) -> Result<Self, ScreeningError> {
        let steps: Vec<Step<'a>> = DomainTag::ALL
            .into_iter()
            .filter_map(|domain| {
                let questions: Vec<&'a Question> =
                    bank.applicable(role).filter(|q| q.category == domain).collect();
                (!questions.is_empty()).then_some(Step { domain, questions })
            })
            .collect();

        if steps.is_empty() {
            tracing::error!(role = %role, "no applicable questions for role");
            return Err(ScreeningError::EmptyQuestionSet(role));
        }

        tracing::info!(
            role = %role,
            steps = steps.len(),
            questions = steps.iter().map(|s| s.questions.len()).sum::<usize>(),
            "screening session started"
        );

        Ok(Self {
            bank,
            role,
            steps,
            answers: AnswerMap::new(),
            cursor: 0,
        })
    }

    pub fn role(&self) -> RespondentRole {
        self.role
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    /// Every question this respondent must answer, in step order.
    pub fn questions(&self) -> impl Iterator<Item = &'a Question> + '_ {
        self.steps.iter().flat_map(|s| s.questions.iter().copied())
    }

    /// Record or overwrite the answer to `question_id`.
    ///
    /// Rejected answers leave the session unchanged.
    pub fn record_answer(&mut self, question_id: &str, value: u8) -> Result<(), ScreeningError> {
        let value = AnswerValue::new(value).map_err(|_| {
            tracing::warn!(question_id, value, "rejected out-of-range answer");
            ScreeningError::InvalidAnswerValue {
                question_id: question_id.to_string(),
                value,
            }
        })?;

        let question = self
            .bank
            .get(question_id)
            .filter(|q| q.applies_to(self.role))
            .ok_or_else(|| {
                tracing::warn!(question_id, role = %self.role, "rejected answer to unknown question");
                ScreeningError::UnknownQuestion {
                    question_id: question_id.to_string(),
                    role: self.role,
                }
            })?;

        let previous = self.answers.insert(question.id.clone(), value);
        tracing::debug!(question_id, value = value.get(), ?previous, "answer recorded");
        Ok(())
    }

    pub fn answer(&self, question_id: &str) -> Option<AnswerValue> {
        self.answers.get(question_id).copied()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::SessionComplete
        } else if self.is_current_step_complete() {
            SessionState::StepComplete
        } else {
            SessionState::Collecting
        }
    }

    /// Position of the current step; equals `steps().len()` once complete.
    pub fn current_step_index(&self) -> usize {
        self.cursor
    }

    /// `None` once the session is complete.
    pub fn current_step(&self) -> Option<&Step<'a>> {
        self.steps.get(self.cursor)
    }

    pub fn is_current_step_complete(&self) -> bool {
        self.current_step()
            .is_none_or(|step| step.is_answered(&self.answers))
    }

    /// Ids of the current step's questions still awaiting an answer.
    pub fn unanswered_in_current_step(&self) -> Vec<&'a str> {
        self.current_step()
            .map(|step| step.unanswered(&self.answers).map(|q| q.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// Move to the next step, or complete the session from the last one.
    ///
    /// Advancing a completed session is a no-op.
    pub fn advance(&mut self) -> Result<(), ScreeningError> {
        let Some(step) = self.current_step() else {
            return Ok(());
        };

        let unanswered = self.unanswered_in_current_step();
        if !unanswered.is_empty() {
            tracing::warn!(
                domain = %step.domain,
                unanswered = unanswered.len(),
                "advance refused: step incomplete"
            );
            return Err(ScreeningError::StepIncomplete {
                domain: step.domain,
                unanswered: unanswered.into_iter().map(str::to_string).collect(),
            });
        }

        self.cursor += 1;
        if self.is_complete() {
            tracing::info!(role = %self.role, answers = self.answers.len(), "screening session complete");
        } else {
            tracing::debug!(step = self.cursor, "advanced to next step");
        }
        Ok(())
    }

    /// Move back one step. Answers are kept. A no-op on the first step.
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            tracing::debug!(step = self.cursor, "retreated to previous step");
        }
    }

    /// Steps whose questions are all answered, wherever the cursor is.
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.is_answered(&self.answers))
            .count()
    }

    /// `round(100 * completed / total)`.
    pub fn progress_percent(&self) -> u8 {
        scoring::normalize(self.completed_steps() as f64, self.steps.len() as f64)
    }

    /// Score the session, consuming it.
    pub fn finish(self, student_name: &str) -> Result<Report, ScreeningError> {
        if !self.is_complete() {
            return Err(ScreeningError::SessionIncomplete {
                completed_steps: self.completed_steps(),
                total_steps: self.steps.len(),
            });
        }
        Ok(scoring::score(self.bank, &self.answers, self.role, student_name))
    }
}
