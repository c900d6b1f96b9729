use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search::{load_config, load_documents, render_table, search, vocabulary, Overrides};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a query by cosine similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents by similarity to a query
    Rank {
        /// Input path (file or directory of .json/.jsonl/.txt)
        #[arg(long)]
        input: PathBuf,
        /// Query text
        #[arg(long)]
        query: String,
        /// Number of results to print
        #[arg(long, default_value_t = 10)]
        top_k: usize,
        /// Print every document instead of the top k
        #[arg(long, default_value_t = false, conflicts_with = "top_k")]
        all: bool,
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Print the joint vocabulary of the input documents, one term per line
    Vocab {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// JSON pipeline config; the switches below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Weight terms by tf-idf instead of raw counts
    #[arg(long, default_value_t = false)]
    tfidf: bool,
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df); implies --tfidf
    #[arg(long, default_value_t = false)]
    smoothed_idf: bool,
    #[arg(long, default_value_t = false)]
    case_sensitive: bool,
    /// Split on whitespace only
    #[arg(long, default_value_t = false)]
    keep_punctuation: bool,
    /// Drop English stop words
    #[arg(long, default_value_t = false)]
    stopwords: bool,
    #[arg(long, default_value_t = false)]
    stem: bool,
}

impl PipelineArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            tfidf: self.tfidf,
            smoothed_idf: self.smoothed_idf,
            case_sensitive: self.case_sensitive,
            keep_punctuation: self.keep_punctuation,
            stopwords: self.stopwords,
            stem: self.stem,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { input, query, top_k, all, json, pipeline } => {
            let config = load_config(pipeline.config.as_deref(), &pipeline.overrides())?;
            let docs = load_documents(&input)?;
            let k = if all { None } else { Some(top_k) };
            let response = search(&docs, &query, config, k)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", render_table(&response));
            }
        }
        Commands::Vocab { input, json, pipeline } => {
            let config = load_config(pipeline.config.as_deref(), &pipeline.overrides())?;
            let docs = load_documents(&input)?;
            let vocab = vocabulary(&docs, config)?;
            tracing::info!(num_terms = vocab.len(), "built vocabulary");
            if json {
                println!("{}", serde_json::to_string_pretty(&vocab)?);
            } else {
                for (_, term) in vocab.iter() {
                    println!("{term}");
                }
            }
        }
    }
    Ok(())
}
