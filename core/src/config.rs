use crate::tokenizer::TokenizerConfig;
use crate::weighting::Weighting;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Knobs for one pipeline invocation. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub tokenizer: TokenizerConfig,
    pub weighting: Weighting,
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json).context("invalid pipeline config")?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let mut buf = String::new();
        f.read_to_string(&mut buf)?;
        Self::from_json_str(&buf).with_context(|| format!("parsing config {}", path.display()))
    }
}
