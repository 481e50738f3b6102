use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the six areas a screening covers.
///
/// Declaration order is significant: sessions build their steps in this
/// order and reports list domains in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainTag {
    Attention,
    Reading,
    Writing,
    Math,
    Language,
    MotorSpatial,
}

impl DomainTag {
    pub const ALL: [DomainTag; 6] = [
        DomainTag::Attention,
        DomainTag::Reading,
        DomainTag::Writing,
        DomainTag::Math,
        DomainTag::Language,
        DomainTag::MotorSpatial,
    ];

    /// Wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainTag::Attention => "attention",
            DomainTag::Reading => "reading",
            DomainTag::Writing => "writing",
            DomainTag::Math => "math",
            DomainTag::Language => "language",
            DomainTag::MotorSpatial => "motor_spatial",
        }
    }

    /// Display label shown alongside the domain's results.
    pub fn label(&self) -> &'static str {
        match self {
            DomainTag::Attention => "Attention & Focus",
            DomainTag::Reading => "Reading",
            DomainTag::Writing => "Writing",
            DomainTag::Math => "Mathematics",
            DomainTag::Language => "Language & Communication",
            DomainTag::MotorSpatial => "Motor & Spatial Skills",
        }
    }

    /// Accent colour (hex) used by presentation layers. Not used in scoring.
    pub fn accent(&self) -> &'static str {
        match self {
            DomainTag::Attention => "#f59e0b",
            DomainTag::Reading => "#3b82f6",
            DomainTag::Writing => "#8b5cf6",
            DomainTag::Math => "#10b981",
            DomainTag::Language => "#ec4899",
            DomainTag::MotorSpatial => "#14b8a6",
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainTag::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::UnknownDomain(s.to_string()))
    }
}

/// Who is filling in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RespondentRole {
    Parent,
    Teacher,
}

impl RespondentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RespondentRole::Parent => "parent",
            RespondentRole::Teacher => "teacher",
        }
    }
}

impl fmt::Display for RespondentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RespondentRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(RespondentRole::Parent),
            "teacher" => Ok(RespondentRole::Teacher),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// Which respondents a question is asked of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Applicability {
    ParentOnly,
    TeacherOnly,
    #[default]
    Both,
}

impl Applicability {
    pub fn applies_to(&self, role: RespondentRole) -> bool {
        matches!(
            (self, role),
            (Applicability::Both, _)
                | (Applicability::ParentOnly, RespondentRole::Parent)
                | (Applicability::TeacherOnly, RespondentRole::Teacher)
        )
    }
}
