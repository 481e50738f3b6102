use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::domain::{DomainTag, RespondentRole};
use crate::error::CoreError;

/// Standing notice attached to every rendered report.
pub const DISCLAIMER: &str = "This screening indicates a level of risk for educational triage only. \
It is not a diagnosis and does not replace assessment by a qualified professional.";

/// Three-band risk tier derived from a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Lowest normalized score classified as moderate.
    pub const MODERATE_FROM: u8 = 35;
    /// Lowest normalized score classified as high.
    pub const HIGH_FROM: u8 = 65;

    pub fn from_score(normalized: u8) -> Self {
        if normalized >= Self::HIGH_FROM {
            RiskLevel::High
        } else if normalized >= Self::MODERATE_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Moderate => "Moderate risk — follow-up recommended",
            RiskLevel::High => "High risk — support recommended",
        }
    }
}

/// Scores for a single domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub raw_score: f64,
    pub max_score: f64,
    /// 0–100.
    pub normalized_score: u8,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    /// Text of every question in this domain answered "often" or "always",
    /// in bank order.
    pub findings: Vec<String>,
}

impl DomainScore {
    /// Score for a domain with no applicable questions.
    pub fn empty() -> Self {
        Self {
            raw_score: 0.0,
            max_score: 0.0,
            normalized_score: 0,
            risk_level: RiskLevel::Low,
            risk_label: RiskLevel::Low.label().to_string(),
            findings: Vec::new(),
        }
    }

    /// Whether any question in this domain applied to the respondent.
    pub fn is_applicable(&self) -> bool {
        self.max_score > 0.0
    }
}

/// The outcome of one screening. Every domain is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    /// 0–100, pooled across all domains.
    pub total_score: u8,
    pub per_domain: BTreeMap<DomainTag, DomainScore>,
    pub generated_at: jiff::Timestamp,
    pub student_name: String,
    pub respondent_role: RespondentRole,
}

impl Report {
    pub fn domain(&self, tag: DomainTag) -> Option<&DomainScore> {
        self.per_domain.get(&tag)
    }

    /// Tier of the pooled total, using the same bands as the domains.
    pub fn overall_risk(&self) -> RiskLevel {
        RiskLevel::from_score(self.total_score)
    }

    /// Domains at moderate or high risk, in domain order.
    pub fn flagged_domains(&self) -> Vec<DomainTag> {
        self.per_domain
            .iter()
            .filter(|(_, score)| score.risk_level > RiskLevel::Low)
            .map(|(tag, _)| *tag)
            .collect()
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format the report as structured Markdown for export or prompt input.
    pub fn to_structured_input(&self) -> String {
        let mut output = format!("## Screening report: {}\n\n", self.student_name);
        output.push_str(&format!("- Respondent: {}\n", self.respondent_role));
        output.push_str(&format!("- Generated: {}\n", self.generated_at));
        output.push_str(&format!(
            "- Overall: {}/100 ({})\n\n",
            self.total_score,
            self.overall_risk().label()
        ));

        for (tag, score) in &self.per_domain {
            output.push_str(&format!("### {}\n", tag.label()));
            if !score.is_applicable() {
                output.push_str("- Not screened for this respondent\n\n");
                continue;
            }
            output.push_str(&format!(
                "- Score: {}/100 ({})\n",
                score.normalized_score, score.risk_label
            ));
            for finding in &score.findings {
                output.push_str(&format!("- Observed often: {finding}\n"));
            }
            output.push('\n');
        }

        output.push_str("> ");
        output.push_str(DISCLAIMER);
        output.push('\n');
        output
    }
}
