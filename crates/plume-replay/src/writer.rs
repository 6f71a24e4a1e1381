//! Recording frame hashes as JSON lines.
//!
//! [`ReplayWriter`] streams records to any `Write` sink as JSON lines.
//! The header is written immediately on construction.

use std::io::Write;

use plume_engine::Frame;
use serde::Serialize;

use crate::error::ReplayError;
use crate::hash::frame_hash;
use crate::types::{ReplayFrame, ReplayHeader};

/// Streams a recording into any [`Write`] sink: a `Vec<u8>` in tests,
/// a `BufWriter<File>` when saving sessions to disk.
///
/// # Examples
///
/// ```
/// use plume_replay::{ReplayFrame, ReplayHeader, ReplayReader, ReplayWriter};
///
/// let header = ReplayHeader::new(0xfeed, 60.0);
/// let mut buf = Vec::new();
/// let mut writer = ReplayWriter::new(&mut buf, &header).unwrap();
/// for i in 0..2u64 {
///     let frame = ReplayFrame { time: i as f64 * 900.0, frame_hash: i };
///     writer.write_raw_frame(&frame).unwrap();
/// }
/// assert_eq!(writer.frames_written(), 2);
/// drop(writer);
///
/// let mut reader = ReplayReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.header(), &header);
/// assert_eq!(reader.next_frame().unwrap().unwrap().time, 0.0);
/// assert_eq!(reader.next_frame().unwrap().unwrap().frame_hash, 1);
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct ReplayWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> ReplayWriter<W> {
    /// Wrap `writer` and emit `header` as the first line.
    pub fn new(mut writer: W, header: &ReplayHeader) -> Result<Self, ReplayError> {
        write_line(&mut writer, header)?;
        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Record a frame: hash it and write its time and hash.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<ReplayFrame, ReplayError> {
        let record = ReplayFrame {
            time: frame.time,
            frame_hash: frame_hash(frame),
        };
        self.write_raw_frame(&record)?;
        Ok(record)
    }

    /// Write a pre-built record directly (useful for testing).
    pub fn write_raw_frame(&mut self, frame: &ReplayFrame) -> Result<(), ReplayError> {
        write_line(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReplayError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Unwrap the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<(), ReplayError> {
    serde_json::to_writer(&mut *writer, record)?;
    writer.write_all(b"\n")?;
    Ok(())
}
