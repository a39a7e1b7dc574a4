use crate::Segment;

/// Minimum elapsed time between consecutive timestamp markers
pub const DEFAULT_INTERVAL: f64 = 60.0;

/// Format a start offset in seconds as zero-padded HH:MM:SS.
///
/// Integer truncation, hours unbounded (a 25-hour stream stays 25).
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Join segment texts with single spaces, in input order.
pub fn join_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group segments into timestamped paragraphs.
///
/// A new `[HH:MM:SS]` marker opens a paragraph whenever the time elapsed
/// since the last marker reaches `interval`. The cursor starts at
/// `-interval` so the first segment always opens one, whatever its offset.
pub fn bucket_by_time(segments: &[Segment], interval: f64) -> String {
    let mut output = String::new();
    let mut last_marker = -interval;

    for segment in segments {
        if segment.start - last_marker >= interval {
            output.push_str("\n\n[");
            output.push_str(&format_timestamp(segment.start));
            output.push_str("] ");
            last_marker = segment.start;
        }
        output.push_str(&segment.text);
        output.push(' ');
    }

    output.trim().to_string()
}
