use thiserror::Error;

/// Everything that can go wrong during one summarize run. Each variant
/// renders as the one-line message shown to the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("Missing API key: {env_var} is not set and no api_key found in config")]
    ConfigMissing { env_var: &'static str },

    #[error("Failed to fetch video details for {video_id}: {reason}")]
    MetadataFetchFailed { video_id: String, reason: String },

    #[error("Could not retrieve transcript for {video_id}: captions may be disabled or unavailable")]
    TranscriptUnavailable { video_id: String },

    #[error("Summary generation failed: {reason}")]
    GenerationError { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
