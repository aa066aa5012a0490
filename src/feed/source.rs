//! Snapshot sources

use crate::consts::cli_consts::LINE_QUEUE_SIZE;
use crate::error::FeedError;
use crate::snapshot::DashboardSnapshot;
use std::io::BufRead;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc;

#[cfg(test)]
use mockall::automock;

/// Anything that can hand the dashboard a stream of snapshots.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SnapshotSource: Send {
    /// Next snapshot, or `Ok(None)` once the source is exhausted.
    async fn next_snapshot(&mut self) -> Result<Option<DashboardSnapshot>, FeedError>;
}

/// Reads one JSON snapshot per line.
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: AsyncBufRead + Unpin + Send> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> SnapshotSource for JsonLinesSource<R> {
    async fn next_snapshot(&mut self) -> Result<Option<DashboardSnapshot>, FeedError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_number += 1;
            if let Some(decoded) = decode_line(&line, self.line_number) {
                return decoded.map(Some);
            }
        }
        Ok(None)
    }
}

/// Reads one JSON snapshot per line from a blocking reader on its own thread.
///
/// A read parked on the thread never holds up the runtime: once this source is
/// dropped the thread exits after its next line, or with the process.
pub struct BlockingLinesSource {
    lines: mpsc::Receiver<std::io::Result<String>>,
    line_number: usize,
}

impl BlockingLinesSource {
    pub fn spawn<R>(reader: R, thread_name: &str) -> Result<Self, FeedError>
    where
        R: BufRead + Send + 'static,
    {
        let (sender, lines) = mpsc::channel(LINE_QUEUE_SIZE);
        std::thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || {
                for line in reader.lines() {
                    let failed = line.is_err();
                    if sender.blocking_send(line).is_err() || failed {
                        break;
                    }
                }
            })?;
        Ok(Self {
            lines,
            line_number: 0,
        })
    }
}

#[async_trait::async_trait]
impl SnapshotSource for BlockingLinesSource {
    async fn next_snapshot(&mut self) -> Result<Option<DashboardSnapshot>, FeedError> {
        while let Some(line) = self.lines.recv().await {
            let line = line?;
            self.line_number += 1;
            if let Some(decoded) = decode_line(&line, self.line_number) {
                return decoded.map(Some);
            }
        }
        Ok(None)
    }
}

/// `None` for a blank line, otherwise the decoded snapshot.
fn decode_line(line: &str, line_number: usize) -> Option<Result<DashboardSnapshot, FeedError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        DashboardSnapshot::from_json(trimmed).map_err(|source| FeedError::Parse {
            line: line_number,
            source,
        }),
    )
}

/// Opens `-` as stdin, anything else as a file path.
pub async fn open_source(input: &str) -> Result<Box<dyn SnapshotSource>, FeedError> {
    if input == "-" {
        let stdin = std::io::BufReader::new(std::io::stdin());
        return Ok(Box::new(BlockingLinesSource::spawn(stdin, "stdin-feed")?));
    }
    let file = tokio::fs::File::open(input).await?;
    Ok(Box::new(JsonLinesSource::new(BufReader::new(file))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Gear;

    #[tokio::test]
    async fn test_reads_snapshots_and_skips_blank_lines() {
        let input: &[u8] = b"{\"speed\": 10}\n\n   \n{\"gear\": \"r\"}\n";
        let mut source = JsonLinesSource::new(input);

        let first = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(first.speed, Some(10.0));
        let second = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(second.gear, Some(Gear::Reverse));
        assert!(source.next_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_bad_line_reports_line_number_and_continues() {
        let input: &[u8] = b"{\"speed\": 1}\nnot json\n{\"speed\": 3}\n";
        let mut source = JsonLinesSource::new(input);

        assert!(source.next_snapshot().await.unwrap().is_some());
        match source.next_snapshot().await {
            Err(FeedError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
        let third = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(third.speed, Some(3.0));
    }

    #[tokio::test]
    async fn test_threaded_reader_decodes_lines() {
        let input = std::io::Cursor::new(b"{\"speed\": 4}\n\n{oops\n{\"gear\": \"n\"}\n".to_vec());
        let mut source = BlockingLinesSource::spawn(input, "test-feed").unwrap();

        let first = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(first.speed, Some(4.0));
        match source.next_snapshot().await {
            Err(FeedError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
        let last = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(last.gear, Some(Gear::Neutral));
        assert!(source.next_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jsonl");
        let result = open_source(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(FeedError::Io(_))));
    }

    #[tokio::test]
    async fn test_opens_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.jsonl");
        std::fs::write(&path, "{\"odometer\": 120}\n").unwrap();

        let mut source = open_source(path.to_str().unwrap()).await.unwrap();
        let snapshot = source.next_snapshot().await.unwrap().unwrap();
        assert_eq!(snapshot.odometer, Some(120.0));
        assert!(source.next_snapshot().await.unwrap().is_none());
    }
}
