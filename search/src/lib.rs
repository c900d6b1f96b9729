use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use vsm::{Pipeline, PipelineConfig, Vocabulary, Weighting};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
pub struct InputDoc {
    pub id: String,
    #[serde(alias = "body")]
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub num_docs: usize,
    /// Documents sharing at least one term with the query.
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: Option<String>,
    pub score: f64,
}

/// Command-line switches layered over a config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tfidf: bool,
    pub smoothed_idf: bool,
    pub case_sensitive: bool,
    pub keep_punctuation: bool,
    pub stopwords: bool,
    pub stem: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if self.tfidf || self.smoothed_idf {
            config.weighting = Weighting::TfIdf { smoothed_idf: self.smoothed_idf };
        }
        if self.case_sensitive {
            config.tokenizer.lowercase = false;
        }
        if self.keep_punctuation {
            config.tokenizer.strip_punctuation = false;
        }
        if self.stopwords {
            config.tokenizer.remove_stopwords = true;
        }
        if self.stem {
            config.tokenizer.stem = true;
        }
        config
    }
}

pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<PipelineConfig> {
    let base = match path {
        Some(p) => PipelineConfig::from_json_file(p)?,
        None => PipelineConfig::default(),
    };
    Ok(overrides.apply(base))
}

/// Load documents from a `.json`, `.jsonl` or `.txt` file, or every such file under a directory.
pub fn load_documents<P: AsRef<Path>>(input: P) -> Result<Vec<InputDoc>> {
    let input_path = input.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_supported(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        anyhow::bail!("input not found: {}", input_path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let before = docs.len();
        match extension(&file) {
            Some("jsonl") => read_jsonl(&file, &mut docs)?,
            Some("txt") => read_lines(&file, &mut docs)?,
            _ => read_json(&file, &mut docs)?,
        }
        tracing::debug!(file = %file.display(), count = docs.len() - before, "loaded documents");
    }
    tracing::info!(num_docs = docs.len(), "ingested documents");
    Ok(docs)
}

fn extension(p: &Path) -> Option<&str> {
    p.extension().and_then(|s| s.to_str())
}

fn is_supported(p: &Path) -> bool {
    matches!(extension(p), Some("json" | "jsonl" | "txt"))
}

fn read_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn read_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => anyhow::bail!("{}: expected a document object or array", file.display()),
    }
    Ok(())
}

/// One document per non-empty line, identified as `<file name>:<line number>`.
fn read_lines(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let text = fs::read_to_string(file)?;
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() { continue; }
        docs.push(InputDoc { id: format!("{}:{}", name, n + 1), text: line.to_string(), title: None });
    }
    Ok(())
}

/// Rank documents against the query and keep the best `k`.
pub fn search(docs: &[InputDoc], query: &str, config: PipelineConfig, k: Option<usize>) -> Result<SearchResponse> {
    let start = Instant::now();
    let pairs: Vec<(usize, &str)> = docs.iter().enumerate().map(|(i, d)| (i, d.text.as_str())).collect();
    let ranked = Pipeline::new(config).rank_texts(&pairs, query)?;
    let total_hits = ranked.iter().filter(|r| r.score > 0.0).count();
    let ranked = match k {
        Some(k) => vsm::top_k(ranked, k),
        None => ranked,
    };

    let results = ranked
        .into_iter()
        .map(|r| {
            let doc = &docs[r.id];
            SearchHit { id: doc.id.clone(), title: doc.title.clone(), score: r.score }
        })
        .collect();
    let elapsed = start.elapsed();
    tracing::info!(total_hits, took_s = elapsed.as_secs_f64(), "search complete");
    Ok(SearchResponse {
        query: query.to_string(),
        took_s: elapsed.as_secs_f64(),
        num_docs: docs.len(),
        total_hits,
        results,
    })
}

/// The joint vocabulary of the documents, without any query.
pub fn vocabulary(docs: &[InputDoc], config: PipelineConfig) -> Result<Vocabulary> {
    let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
    let fitted = Pipeline::new(config).vectorizer().fit_transform(&texts)?;
    Ok(fitted.vocabulary)
}

pub fn render_table(response: &SearchResponse) -> String {
    let id_width = response.results.iter().map(|h| h.id.chars().count()).max().unwrap_or(2).max(2);
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<id_width$}  {:>8}  title", "rank", "id", "score");
    for (i, hit) in response.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<id_width$}  {:>8.4}  {}",
            i + 1,
            hit.id,
            hit.score,
            hit.title.as_deref().unwrap_or("-")
        );
    }
    let _ = writeln!(out, "{} of {} documents matched \"{}\"", response.total_hits, response.num_docs, response.query);
    out
}
