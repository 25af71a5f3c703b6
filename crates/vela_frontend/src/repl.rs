//! Interactive session state.
use vela_syntax::{BufferId, ByteIndex};

/// Bookkeeping for one interactive session: which buffer holds the typed
/// input and how much of it has been consumed so far. The cursor only ever
/// moves forward, and only to complete item boundaries. The context never
/// owns the session's `AstContext`.
#[derive(Clone, Copy, Debug)]
pub struct ReplContext {
    /// Buffer the session appends to.
    pub buffer: BufferId,
    /// Consumption cursor: everything before this offset has been parsed
    /// and merged into the unit.
    pub offset: ByteIndex,
    /// Number of append calls made on this context.
    pub chunks: u32,
}

impl ReplContext {
    pub fn new(buffer: BufferId) -> Self {
        Self {
            buffer,
            offset: ByteIndex(0),
            chunks: 0,
        }
    }

    /// Abandon unconsumed input up to `end`. Driver policy after a hard
    /// parse error: the rejected tail will not be retried.
    pub fn skip_to(&mut self, end: ByteIndex) {
        if end.0 > self.offset.0 {
            self.offset = end;
        }
    }
}
