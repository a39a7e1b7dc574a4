use log::debug;
use serde::Deserialize;

use crate::VideoMetadata;
use crate::error::Error;

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Fetch title, author, and high-resolution thumbnail via the Data API.
///
/// Fetched once per video ID, read-only afterwards. Every failure mode
/// (HTTP error, unknown video, malformed response) collapses into
/// `MetadataFetchFailed` with the cause in the reason string.
pub async fn fetch_metadata(
    client: &reqwest::Client,
    api_key: &str,
    video_id: &str,
) -> Result<VideoMetadata, Error> {
    let url = format!("https://www.googleapis.com/youtube/v3/videos?part=snippet&id={video_id}&key={api_key}");
    debug!("Fetching video metadata for {video_id}");

    let failed = |reason: String| Error::MetadataFetchFailed {
        video_id: video_id.to_string(),
        reason,
    };

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| failed(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(failed(format!("API returned {status}: {body}")));
    }

    let response: VideoListResponse = resp.json().await.map_err(|e| failed(e.to_string()))?;

    decode_response(response).map_err(failed)
}

fn decode_response(response: VideoListResponse) -> Result<VideoMetadata, String> {
    let item = response
        .items
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| "video not found".to_string())?;

    let thumbnail = item
        .snippet
        .thumbnails
        .high
        .ok_or_else(|| "response missing high-resolution thumbnail".to_string())?;

    Ok(VideoMetadata {
        title: item.snippet.title,
        author: item.snippet.channel_title,
        thumbnail_url: thumbnail.url,
    })
}
