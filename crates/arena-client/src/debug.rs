//! Debug channel to the app's overlay
//!
//! Commands are wrapped in `ClientMessage::DebugMessage`, written in full
//! and flushed before `send` returns, so the wire order always matches the
//! call order.

use arena_core::{ClientMessage, DebugCommand, GameModel, Result, Wire};
use std::io::{Read, Write};
use std::marker::PhantomData;
use tracing::trace;

/// Writer for debug commands over an exclusively owned sink
pub struct DebugChannel<G: GameModel, W: Write> {
    sink: W,
    _game: PhantomData<fn() -> G>,
}

impl<G: GameModel, W: Write> DebugChannel<G, W> {
    /// Wrap an already open sink
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            _game: PhantomData,
        }
    }

    /// Send one debug command and flush it out
    pub fn send(&mut self, command: DebugCommand<G>) -> Result<()> {
        self.write_message(&ClientMessage::DebugMessage { command })
    }

    pub(crate) fn write_message(&mut self, message: &ClientMessage<G>) -> Result<()> {
        trace!("[client→server] {}", message.kind());
        message.write_to(&mut self.sink)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Give the sink back
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Debug access handed to a strategy during a callback
///
/// Borrows the session's stream halves for the duration of the callback.
pub struct DebugInterface<'a, G: GameModel> {
    channel: DebugChannel<G, &'a mut dyn Write>,
    reader: &'a mut dyn Read,
}

impl<'a, G: GameModel> DebugInterface<'a, G> {
    pub fn new(writer: &'a mut dyn Write, reader: &'a mut dyn Read) -> Self {
        Self {
            channel: DebugChannel::new(writer),
            reader,
        }
    }

    /// Send a debug command
    pub fn send(&mut self, command: DebugCommand<G>) -> Result<()> {
        self.channel.send(command)
    }

    /// Draw one debug item
    pub fn add(&mut self, data: G::DebugData) -> Result<()> {
        self.send(DebugCommand::Add { data })
    }

    /// Clear the debug overlay
    pub fn clear(&mut self) -> Result<()> {
        self.send(DebugCommand::Clear)
    }

    /// Ask the app for its current debug state and wait for the reply
    pub fn get_state(&mut self) -> Result<G::DebugState> {
        self.channel.write_message(&ClientMessage::RequestDebugState)?;
        G::DebugState::read_from(&mut *self.reader)
    }
}
