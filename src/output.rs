use crate::VideoMetadata;
use crate::session::Session;

fn render_details(meta: &VideoMetadata) -> String {
    format!(
        "## Video Details\n\n{}\nBy: {}\nThumbnail: {}\n",
        meta.title, meta.author, meta.thumbnail_url
    )
}

/// Render the session as the final report: details header, the brief, and
/// (only when requested) the timestamped transcript. Sections that failed
/// to materialize are simply absent.
pub fn render_report(session: &Session, show_transcript: bool) -> String {
    let mut sections = Vec::new();

    if let Some(ref meta) = session.metadata {
        sections.push(render_details(meta));
    }

    if let Some(ref summary) = session.summary {
        sections.push(format!("## Video Summary\n\n{summary}\n"));

        if show_transcript {
            if let Some(ref transcript) = session.transcript {
                sections.push(format!("## Transcript\n\n{transcript}\n"));
            }
        }
    }

    sections.join("\n---\n\n")
}
