pub mod docs;

use crate::error::{EcoscoreError, Result};
use crate::types::dimension::Dimension;
use crate::types::evidence::Evidence;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk shape of an assessment file. Each dimension table carries either
/// manual checkbox answers or a narrative with optional document paths;
/// omitted dimensions stay unscored.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentFile {
    pub assessment: AssessmentMeta,
    #[serde(default)]
    pub dimensions: BTreeMap<String, EvidenceSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentMeta {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EvidenceSpec {
    Manual {
        answers: Vec<bool>,
        #[serde(default)]
        notes: Option<String>,
    },
    Narrative {
        narrative: String,
        #[serde(default)]
        documents: Vec<PathBuf>,
    },
}

/// An assessment with evidence normalized for scoring: document text folded
/// into narratives, answer lengths validated against the indicator counts.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub title: String,
    pub evidence: BTreeMap<Dimension, Evidence>,
    /// Intake-level degradations, e.g. skipped documents.
    pub warnings: Vec<String>,
}

impl Assessment {
    pub fn needs_oracle(&self) -> bool {
        self.evidence.values().any(Evidence::is_narrative)
    }
}

pub fn load_assessment(path: &Path) -> Result<Assessment> {
    if !path.exists() {
        return Err(EcoscoreError::AssessmentNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: AssessmentFile = toml::from_str(&content)
        .map_err(|e| EcoscoreError::AssessmentParse(format!("{}: {}", path.display(), e)))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    normalize(file, base_dir)
}

fn normalize(file: AssessmentFile, base_dir: &Path) -> Result<Assessment> {
    let mut evidence = BTreeMap::new();
    let mut warnings = Vec::new();

    for (key, spec) in file.dimensions {
        let Some(dimension) = Dimension::from_id(&key) else {
            return Err(EcoscoreError::AssessmentParse(format!(
                "unknown dimension '{}'; expected one of: {}",
                key,
                Dimension::ALL
                    .iter()
                    .map(|dimension| dimension.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        };
        let normalized = match spec {
            EvidenceSpec::Manual { answers, notes } => {
                let expected = dimension.indicators().len();
                if answers.len() != expected {
                    return Err(EcoscoreError::AssessmentParse(format!(
                        "{}: expected {} answers (one per indicator), found {}",
                        dimension.id(),
                        expected,
                        answers.len()
                    )));
                }
                Evidence::Manual { answers, notes }
            }
            EvidenceSpec::Narrative { narrative, documents } => {
                let mut text = narrative.trim().to_string();
                for document in documents {
                    let resolved = if document.is_absolute() {
                        document
                    } else {
                        base_dir.join(document)
                    };
                    match docs::read_document(&resolved) {
                        Ok(extracted) => {
                            if !text.is_empty() {
                                text.push_str("\n\n");
                            }
                            text.push_str(extracted.trim());
                        }
                        Err(err) => {
                            tracing::warn!("{}: skipping document: {}", dimension.id(), err);
                            warnings.push(format!("{}: skipped document: {}", dimension.id(), err));
                        }
                    }
                }
                if text.is_empty() {
                    return Err(EcoscoreError::AssessmentParse(format!(
                        "{}: narrative evidence is empty and no document text was usable",
                        dimension.id()
                    )));
                }
                Evidence::Narrative { text }
            }
        };
        evidence.insert(dimension, normalized);
    }

    Ok(Assessment {
        title: file.assessment.title,
        evidence,
        warnings,
    })
}
