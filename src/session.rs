use crate::VideoMetadata;

/// State for one user's interaction: everything derived from the current
/// URL, cleared whenever the input changes.
#[derive(Debug, Default)]
pub struct Session {
    pub metadata: Option<VideoMetadata>,
    pub summary: Option<String>,
    pub transcript: Option<String>,
    last_url: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run for `url`. A different URL than last time drops all
    /// derived state first; repeating the same URL keeps it.
    pub fn begin(&mut self, url: &str) {
        if url != self.last_url {
            self.clear();
            self.last_url = url.to_string();
        }
    }

    /// Drop all derived state, keeping the last-seen URL.
    pub fn clear(&mut self) {
        self.metadata = None;
        self.summary = None;
        self.transcript = None;
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Session {
        let mut session = Session::new();
        session.begin("https://youtu.be/abc");
        session.metadata = Some(VideoMetadata {
            title: "Title".to_string(),
            author: "Author".to_string(),
            thumbnail_url: "https://example.com/t.jpg".to_string(),
        });
        session.summary = Some("# Brief".to_string());
        session.transcript = Some("[00:00:00] hello".to_string());
        session
    }

    #[test]
    fn test_url_change_clears_derived_state() {
        let mut session = populated();
        session.begin("https://youtu.be/other");
        assert!(session.metadata.is_none());
        assert!(session.summary.is_none());
        assert!(session.transcript.is_none());
        assert_eq!(session.last_url(), "https://youtu.be/other");
    }

    #[test]
    fn test_same_url_keeps_state() {
        let mut session = populated();
        session.begin("https://youtu.be/abc");
        assert!(session.metadata.is_some());
        assert!(session.summary.is_some());
        assert!(session.transcript.is_some());
    }

    #[test]
    fn test_clear_empties_everything_but_url() {
        let mut session = populated();
        session.clear();
        assert!(session.metadata.is_none());
        assert!(session.summary.is_none());
        assert!(session.transcript.is_none());
        assert_eq!(session.last_url(), "https://youtu.be/abc");
    }
}
