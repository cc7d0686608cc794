//! Plain line formatter - one entry per line, indented by depth

use std::io::{self, Write};

use crate::tree::{DirEntry, TreeOutput};

/// Indentation emitted per depth level.
pub const INDENT: &str = " ";

/// Writes each entry as `INDENT * indent` + display name + newline.
///
/// Lines go straight to the writer; wrap stdout in its default line
/// buffering so partial trees show up even if a later entry fails.
pub struct PlainFormatter<W: Write> {
    writer: W,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush any buffered output.
    pub fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TreeOutput for PlainFormatter<W> {
    fn output_entry(&mut self, entry: &DirEntry, indent: usize) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}{}",
            INDENT.repeat(indent),
            entry.display_name()
        )
    }
}
