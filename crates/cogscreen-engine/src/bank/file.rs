use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Question, QuestionBank};
use crate::error::BankError;

/// Current bank file version. Bump this when changing the file shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_BANK_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    /// Missing or 0 = pre-versioned file.
    #[serde(default)]
    bank_version: u32,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Parse and validate a bank from its JSON file representation,
    /// migrating older file versions first.
    pub fn from_json_str(contents: &str) -> Result<Self, BankError> {
        // Parse as raw JSON so migrations run before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("bank_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let file: BankFile = serde_json::from_value(migrated)?;
        QuestionBank::new(file.questions)
    }

    pub fn to_json_string(&self) -> Result<String, BankError> {
        let file = BankFile {
            bank_version: CURRENT_BANK_VERSION,
            questions: self.questions.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Load a bank file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let bank = QuestionBank::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "question bank loaded");
        Ok(bank)
    }

    /// Write the bank to disk at the current file version.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BankError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        let io_err = |source| BankError::Io {
            path: path.display().to_string(),
            source,
        };

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)?;

        tracing::info!(path = %path.display(), questions = self.len(), "question bank saved");
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_BANK_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, BankError> {
    if from_version > CURRENT_BANK_VERSION {
        return Err(BankError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_BANK_VERSION,
        });
    }

    // v0 → v1: every question applied to both roles
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(BankError::NotAnObject)?;
        if let Some(questions) = obj.get_mut("questions").and_then(|q| q.as_array_mut()) {
            for question in questions.iter_mut().filter_map(|q| q.as_object_mut()) {
                question
                    .entry("applicability")
                    .or_insert(serde_json::Value::String("both".to_string()));
            }
        }
        obj.insert(
            "bank_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated question bank v0 → v1 (added applicability)");
    }

    Ok(json)
}
