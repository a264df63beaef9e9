//! Text and JSON-lines sinks

use super::PostSink;
use crate::error::{Error, Result};
use crate::types::Post;
use std::io::{self, Write};

/// Writes each post's text on its own line
pub struct TextSink<W: Write> {
    writer: W,
    timestamps: bool,
}

impl<W: Write> TextSink<W> {
    /// Create a sink over a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            timestamps: false,
        }
    }

    /// Prefix each line with the post's UTC creation time
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PostSink for TextSink<W> {
    fn consume(&mut self, post: &Post) -> Result<()> {
        let written = match post.created_at_utc().filter(|_| self.timestamps) {
            Some(ts) => writeln!(
                self.writer,
                "{} {}",
                ts.format("%Y-%m-%d %H:%M:%S"),
                post.full_text
            ),
            None => writeln!(self.writer, "{}", post.full_text),
        };
        written.map_err(write_error)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(write_error)
    }
}

/// Writes each post as one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink over a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PostSink for JsonLinesSink<W> {
    fn consume(&mut self, post: &Post) -> Result<()> {
        let mut line = serde_json::to_vec(post)?;
        line.push(b'\n');
        self.writer.write_all(&line).map_err(write_error)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(write_error)
    }
}

/// A closed pipe ends output cleanly; anything else is an I/O error
fn write_error(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::BrokenPipe {
        Error::stream_closed("output closed")
    } else {
        Error::Io(e)
    }
}
