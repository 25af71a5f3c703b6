//! Source buffers and the buffer manager.
//!
//! Buffers are registered once and addressed through opaque [`BufferId`]s.
//! The REPL grows a registered buffer in place with [`SourceManager::extend_buffer`]
//! as more interactive input arrives.
use crate::{ByteIndex, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

#[derive(Clone, Debug)]
pub struct SourceText {
    text: String,
    line_starts: Vec<u32>,
}

impl SourceText {
    pub fn new(text: String) -> Self {
        let mut line_starts = Vec::with_capacity(text.len().saturating_div(64).max(32));
        line_starts.push(0u32);
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn slice(&self, span: Span) -> &str {
        let start = span.start.0 as usize;
        let end = span.end.0 as usize;
        &self.text[start..end]
    }

    /// Append more text, keeping the line table consistent.
    pub fn extend(&mut self, more: &str) {
        let base = self.text.len();
        for (i, b) in more.bytes().enumerate() {
            if b == b'\n' {
                self.line_starts.push((base + i + 1) as u32);
            }
        }
        self.text.push_str(more);
    }

    pub fn line_col(&self, byte: u32) -> (u32, u32) {
        let byte = byte.min(self.text.len() as u32);
        let idx = match self.line_starts.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line = idx as u32;
        let line_start = self.line_starts[idx] as usize;
        let mut target = byte as usize;
        while target > line_start && !self.text.is_char_boundary(target) {
            target = target.saturating_sub(1);
        }
        let col = self.text[line_start..target].chars().count() as u32;
        (line, col)
    }
}

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    pub id: BufferId,
    pub name: String,
    pub text: SourceText,
}

impl SourceBuffer {
    pub fn new(id: BufferId, name: impl Into<String>, text: String) -> Self {
        Self {
            id,
            name: name.into(),
            text: SourceText::new(text),
        }
    }

    pub fn end(&self) -> ByteIndex {
        ByteIndex(self.text.len())
    }
}

/// Owner of every registered source buffer in a session.
#[derive(Debug, Default)]
pub struct SourceManager {
    buffers: Vec<SourceBuffer>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_buffer(&mut self, name: impl Into<String>, text: String) -> BufferId {
        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(SourceBuffer::new(id, name, text));
        id
    }

    pub fn buffer(&self, id: BufferId) -> Option<&SourceBuffer> {
        self.buffers.get(id.0 as usize)
    }

    /// Append text to an existing buffer; returns the new end offset.
    pub fn extend_buffer(&mut self, id: BufferId, more: &str) -> Option<ByteIndex> {
        let buf = self.buffers.get_mut(id.0 as usize)?;
        buf.text.extend(more);
        Some(buf.end())
    }
}
