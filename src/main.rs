use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::Command;

use eyre::{Result, bail};
use log::{debug, error, info, warn};

mod cli;

use cli::Cli;
use ytbrief::session::Session;
use ytbrief::summarize::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL, Summarizer};
use ytbrief::{format, metadata, output, youtube};

/// Marker interval the application passes to the transcript formatter
const APP_INTERVAL: f64 = 65.0;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytbrief.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytbrief")
        .join("logs")
}

fn tool_version(name: &str) -> Option<String> {
    Command::new(name)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .lines()
                .next()
                .unwrap_or("")
                .to_string()
        })
}

fn build_after_help() -> String {
    let ollama = tool_version("ollama");

    let ollama_line = match &ollama {
        Some(v) => format!("  \x1b[32m✅\x1b[0m ollama     {v}"),
        None => "  \x1b[31m❌\x1b[0m ollama     (not found — needed for summary generation)".to_string(),
    };

    let log_path = log_dir().join("ytbrief.log");

    format!(
        "\nREQUIRED TOOLS:\n{ollama_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytbrief::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config, config over built-in defaults
    let langs = if cli.lang.is_empty() { config.langs() } else { cli.lang.clone() };
    let model = cli
        .model
        .clone()
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let ollama_url = cli
        .ollama_url
        .clone()
        .or_else(|| config.ollama_url.clone())
        .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
    let interval = cli.interval.or(config.interval).unwrap_or(APP_INTERVAL);

    if cli.verbose {
        let config_path = ytbrief::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        debug!("Languages: {langs:?}");
        debug!("Model: {model}");
        debug!("Ollama: {ollama_url}");
    }

    // Operator misconfiguration, reported before any URL is read
    let api_key = config.resolve_api_key()?;

    let client = reqwest::Client::new();
    let summarizer = Summarizer::new(&ollama_url, &model);
    let mut session = Session::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL provided\n\nUsage: ytbrief <URL>\n       echo <URL> | ytbrief");
    }

    for url_input in &urls {
        let url = url_input.trim();
        if url.is_empty() {
            continue;
        }

        session.begin(url);

        if let Err(e) = run_once(&client, &summarizer, &api_key, &langs, interval, cli.verbose, &mut session, url).await
        {
            error!("{e}");
            eprintln!("{e}");
        }

        let rendered = output::render_report(&session, cli.transcript);
        if rendered.is_empty() {
            continue;
        }

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Report written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}

/// One summarize action: parse → metadata → transcript → format → generate.
/// Fills the session as results arrive; returns the first terminal error.
#[allow(clippy::too_many_arguments)]
async fn run_once(
    client: &reqwest::Client,
    summarizer: &Summarizer,
    api_key: &str,
    langs: &[String],
    interval: f64,
    verbose: bool,
    session: &mut Session,
    url: &str,
) -> std::result::Result<(), ytbrief::Error> {
    let video_id = ytbrief::parse_video_id(url).ok_or_else(|| ytbrief::Error::InvalidUrl { url: url.to_string() })?;

    // Metadata and transcript fail independently; a metadata miss is
    // reported but does not stop the run
    match metadata::fetch_metadata(client, api_key, &video_id).await {
        Ok(meta) => session.metadata = Some(meta),
        Err(e) => {
            warn!("{e}");
            eprintln!("{e}");
        }
    }

    let transcript = match youtube::fetch_captions(client, &video_id, langs).await {
        Ok(t) => t,
        Err(e) => {
            // metadata and transcript are jointly required for a run
            session.clear();
            return Err(e);
        }
    };

    if verbose {
        eprintln!(
            "Video: {video_id}\nLanguage: {}\nSegments: {}",
            transcript.language,
            transcript.segments.len(),
        );
    }

    let flat_text = format::join_text(&transcript.segments);
    session.transcript = Some(format::bucket_by_time(&transcript.segments, interval));

    let summary = summarizer.generate_summary(&flat_text).await?;
    session.summary = Some(summary);

    Ok(())
}
