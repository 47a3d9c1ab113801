use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::batch::BatchReport;
use crate::config::CardConfig;

/// JSON summary of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub config: CardConfig,
    pub cards: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub index: usize,
    pub source: PathBuf,
    pub source_kept: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<PathBuf>,
    pub sha256: String,
}

impl Manifest {
    pub fn new(config: &CardConfig, seed: Option<u64>, report: &BatchReport) -> Self {
        let cards = report
            .items
            .iter()
            .map(|item| ManifestEntry {
                index: item.index,
                source: item.output.source.clone(),
                source_kept: item.output.source_kept,
                pdf: item.output.pdf().map(Path::to_path_buf),
                sha256: item.output.digest.clone(),
            })
            .collect();
        Self {
            generated_at: Utc::now(),
            seed,
            config: config.clone(),
            cards,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create manifest {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
