//! Reading recordings back.
//!
//! [`ReplayReader`] reads records from any `BufRead` source. The header
//! is read and its version checked on construction.

use std::io::BufRead;

use serde::de::DeserializeOwned;

use crate::error::ReplayError;
use crate::types::{ReplayFrame, ReplayHeader};
use crate::FORMAT_VERSION;

/// Reads a recording from a line-oriented stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`. Blank lines are skipped.
pub struct ReplayReader<R: BufRead> {
    reader: R,
    header: ReplayHeader,
    line: String,
    line_no: u64,
    frames_read: u64,
}

impl<R: BufRead> ReplayReader<R> {
    /// Open a recording, reading and validating the header.
    pub fn open(reader: R) -> Result<Self, ReplayError> {
        let mut this = Self {
            reader,
            header: ReplayHeader::new(0, 0.0),
            line: String::new(),
            line_no: 0,
            frames_read: 0,
        };
        let header: ReplayHeader = this.next_record()?.ok_or(ReplayError::MissingHeader)?;
        if header.format_version != FORMAT_VERSION {
            return Err(ReplayError::UnsupportedVersion {
                found: header.format_version,
            });
        }
        this.header = header;
        Ok(this)
    }

    /// The recording header.
    pub fn header(&self) -> &ReplayHeader {
        &self.header
    }

    /// The next frame record, or `None` at end of stream.
    pub fn next_frame(&mut self) -> Result<Option<ReplayFrame>, ReplayError> {
        let frame = self.next_record()?;
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    fn next_record<T: DeserializeOwned>(&mut self) -> Result<Option<T>, ReplayError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text)
                .map(Some)
                .map_err(|source| ReplayError::MalformedRecord {
                    line: self.line_no,
                    source,
                });
        }
    }
}

impl<R: BufRead> Iterator for ReplayReader<R> {
    type Item = Result<ReplayFrame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}
