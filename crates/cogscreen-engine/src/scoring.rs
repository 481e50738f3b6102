use std::collections::BTreeMap;

use cogscreen_core::models::answer::AnswerMap;
use cogscreen_core::models::domain::{DomainTag, RespondentRole};
use cogscreen_core::models::report::{DomainScore, Report, RiskLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::bank::QuestionBank;

/// An answer as captured by a hosting application, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    pub question_id: String,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub question_id: String,
    pub value: u8,
    pub message: String,
}

#[derive(Default)]
struct Tally {
    raw: f64,
    max: f64,
    findings: Vec<String>,
}

/// Score a completed answer set, stamping the report with the current time.
pub fn score(
    bank: &QuestionBank,
    answers: &AnswerMap,
    role: RespondentRole,
    student_name: &str,
) -> Report {
    score_at(bank, answers, role, student_name, jiff::Timestamp::now())
}

/// Score a completed answer set with an explicit timestamp.
///
/// Unanswered applicable questions count as zero but still add their full
/// weight to the domain maximum. Answers to questions not asked of `role`
/// are ignored.
pub fn score_at(
    bank: &QuestionBank,
    answers: &AnswerMap,
    role: RespondentRole,
    student_name: &str,
    generated_at: jiff::Timestamp,
) -> Report {
    let mut tallies: BTreeMap<DomainTag, Tally> = DomainTag::ALL
        .into_iter()
        .map(|tag| (tag, Tally::default()))
        .collect();

    for question in bank.applicable(role) {
        let value = answers.get(&question.id).copied().unwrap_or_default();
        let tally = tallies.entry(question.category).or_default();
        tally.raw += value.as_f64() * question.weight;
        tally.max += question.max_contribution();
        if value.is_finding() {
            tally.findings.push(question.text.clone());
        }
    }

    let (pooled_raw, pooled_max) = tallies
        .values()
        .fold((0.0, 0.0), |(raw, max), t| (raw + t.raw, max + t.max));

    let per_domain: BTreeMap<DomainTag, DomainScore> = tallies
        .into_iter()
        .map(|(tag, tally)| {
            let normalized_score = normalize(tally.raw, tally.max);
            let risk_level = RiskLevel::from_score(normalized_score);
            let score = DomainScore {
                raw_score: tally.raw,
                max_score: tally.max,
                normalized_score,
                risk_level,
                risk_label: risk_level.label().to_string(),
                findings: tally.findings,
            };
            (tag, score)
        })
        .collect();

    let report = Report {
        total_score: normalize(pooled_raw, pooled_max),
        per_domain,
        generated_at,
        student_name: student_name.to_string(),
        respondent_role: role,
    };

    tracing::info!(
        role = %role,
        total_score = report.total_score,
        flagged = ?report.flagged_domains(),
        "screening report generated"
    );
    report
}

/// `round(100 * raw / max)`, or 0 when nothing was scorable.
pub fn normalize(raw: f64, max: f64) -> u8 {
    if max > 0.0 {
        (100.0 * raw / max).round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}
