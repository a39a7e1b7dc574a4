use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytbrief",
    about = "YouTube video summarizer producing structured analytical briefs",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (reads URLs from stdin if omitted)
    pub url: Option<String>,

    /// Include the timestamped transcript below the summary
    #[arg(short, long)]
    pub transcript: bool,

    /// Preferred caption languages, in priority order
    #[arg(short, long)]
    pub lang: Vec<String>,

    /// Ollama model used for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Seconds between timestamp markers in the formatted transcript
    #[arg(long)]
    pub interval: Option<f64>,

    /// Base URL of the Ollama server
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show fetch details and chosen caption language
    #[arg(short, long)]
    pub verbose: bool,
}
