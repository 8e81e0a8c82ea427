use crate::Result;
use crate::diagnostics;
use crate::log::parse_timestamp;

use anyhow::{Context, anyhow};
use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Marker written once the similarity matrix is ready.
pub const SIM_DONE_MARKER: &str = "Finished similarity calculation\n";

/// Marker written when the run completes.
pub const DONE_MARKER: &str = "Done!\n";

/// The three timestamps of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTimes {
    pub start: NaiveDateTime,
    pub sim_done: NaiveDateTime,
    pub done: NaiveDateTime,
}

impl RunTimes {
    /// `done - sim_done` in milliseconds. Sign is kept as is.
    pub fn similarity_to_done_ms(&self) -> f64 {
        let delta = self.done - self.sim_done;
        match delta.num_microseconds() {
            Some(us) => us as f64 / 1000.0,
            None => delta.num_milliseconds() as f64,
        }
    }
}

/// Read a run log from disk and extract its timestamps.
pub fn read_run_times(path: &Path) -> Result<RunTimes> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read run log {}", path.display())))?;
    let times = parse_run_times(&text, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        start = %times.start,
        sim_done = %times.sim_done,
        done = %times.done,
        "parsed run log"
    );
    Ok(times)
}

/// Extract run timestamps from the text of a log. `origin` only labels errors.
///
/// `\r\n` and lone `\r` count as `\n`. Lines keep their newline, so a
/// trailing line without one never matches a marker. The first matching line
/// wins for each marker.
pub fn parse_run_times(text: &str, origin: &str) -> Result<RunTimes> {
    let text = normalize_newlines(text);
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let first = lines.first().ok_or_else(|| {
        anyhow!(diagnostics::error_message(format!("run log {} is empty", origin)))
    })?;
    let start = parse_timestamp(first)
        .with_context(|| diagnostics::error_message(format!("start time in {}:1", origin)))?;

    let sim_done = marker_time(&lines, SIM_DONE_MARKER, origin)?;
    let done = marker_time(&lines, DONE_MARKER, origin)?;

    Ok(RunTimes {
        start,
        sim_done,
        done,
    })
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn marker_time(lines: &[&str], marker: &str, origin: &str) -> Result<NaiveDateTime> {
    let (idx, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.ends_with(marker))
        .ok_or_else(|| {
            anyhow!(diagnostics::error_message(format!(
                "no line ending with {:?} in {}",
                marker, origin
            )))
        })?;

    parse_timestamp(line).with_context(|| {
        diagnostics::error_message(format!("marker time in {}:{}", origin, idx + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    const SAMPLE: &str = "2024-01-02 14:53:14,039 start\n\
                          2024-01-02 14:53:15,100 Finished similarity calculation\n\
                          2024-01-02 14:53:15,600 Done!\n";

    #[test]
    fn extracts_three_timestamps() {
        let times = parse_run_times(SAMPLE, "sample").unwrap();
        assert_eq!(times.start, at(14, 53, 14, 39));
        assert_eq!(times.sim_done, at(14, 53, 15, 100));
        assert_eq!(times.done, at(14, 53, 15, 600));
        assert_eq!(times.similarity_to_done_ms(), 500.0);
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let text = "2024-01-02 10:00:00,000 start\n\
                    2024-01-02 10:00:01,000 Finished similarity calculation\n\
                    2024-01-02 10:00:02,000 Finished similarity calculation\n\
                    2024-01-02 10:00:03,000 Done!\n\
                    2024-01-02 10:00:09,000 Done!\n";
        let times = parse_run_times(text, "dup").unwrap();
        assert_eq!(times.sim_done, at(10, 0, 1, 0));
        assert_eq!(times.done, at(10, 0, 3, 0));
        assert_eq!(times.similarity_to_done_ms(), 2000.0);
    }

    #[test]
    fn negative_duration_is_not_clamped() {
        let text = "2024-01-02 10:00:00,000 start\n\
                    2024-01-02 10:00:00,250 Done!\n\
                    2024-01-02 10:00:01,000 Finished similarity calculation\n";
        let times = parse_run_times(text, "backwards").unwrap();
        assert_eq!(times.similarity_to_done_ms(), -750.0);
    }

    #[test]
    fn marker_must_end_the_line() {
        let text = "2024-01-02 10:00:00,000 start\n\
                    2024-01-02 10:00:01,000 Finished similarity calculation (partial)\n\
                    2024-01-02 10:00:02,000 Done!\n";
        let err = parse_run_times(text, "partial").unwrap_err();
        assert!(format!("{:#}", err).contains("Finished similarity calculation"));
    }

    #[test]
    fn final_line_without_newline_does_not_match() {
        let text = "2024-01-02 10:00:00,000 start\n\
                    2024-01-02 10:00:01,000 Finished similarity calculation\n\
                    2024-01-02 10:00:02,000 Done!";
        let err = parse_run_times(text, "no-eol").unwrap_err();
        assert!(format!("{:#}", err).contains("Done!"));
    }

    #[test]
    fn crlf_log_matches_markers() {
        let text = "2024-01-02 14:53:14,039 start\r\n\
                    2024-01-02 14:53:15,100 Finished similarity calculation\r\n\
                    2024-01-02 14:53:15,600 Done!\r\n";
        let times = parse_run_times(text, "crlf").unwrap();
        assert_eq!(times.sim_done, at(14, 53, 15, 100));
        assert_eq!(times.done, at(14, 53, 15, 600));
        assert_eq!(times.similarity_to_done_ms(), 500.0);
    }

    #[test]
    fn lone_carriage_returns_split_lines() {
        let text = "2024-01-02 10:00:00,000 start\r\
                    2024-01-02 10:00:01,000 Finished similarity calculation\r\
                    2024-01-02 10:00:01,250 Done!\r";
        let times = parse_run_times(text, "cr").unwrap();
        assert_eq!(times.similarity_to_done_ms(), 250.0);
    }

    #[test]
    fn normalize_leaves_plain_text_borrowed() {
        assert!(matches!(normalize_newlines("a\nb\n"), Cow::Borrowed(_)));
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn empty_log_fails() {
        let err = parse_run_times("", "empty").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn bad_first_line_fails() {
        let text = "garbage\n\
                    2024-01-02 10:00:01,000 Finished similarity calculation\n\
                    2024-01-02 10:00:02,000 Done!\n";
        assert!(parse_run_times(text, "garbage").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let times = read_run_times(file.path()).unwrap();
        assert_eq!(times.similarity_to_done_ms(), 500.0);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_run_times(&dir.path().join("log0.txt")).unwrap_err();
        assert!(err.to_string().contains("read run log"));
    }
}
