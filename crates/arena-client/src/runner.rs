//! Client session against the game server
//!
//! The session is one blocking request/reply loop on a single thread. Each
//! server message is answered before the next one is read.

use crate::config::ClientConfig;
use crate::debug::DebugInterface;
use crate::strategy::Strategy;
use arena_core::{ClientMessage, GameModel, Result, ServerMessage, Wire};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::net::TcpStream;
use tracing::{debug, info, warn};

/// Counters reported when the server finishes the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of `GetAction` requests answered
    pub actions: u64,
    /// Number of debug updates completed
    pub debug_updates: u64,
}

/// Drives a strategy over one server connection
pub struct Runner<G: GameModel, R: BufRead, W: Write> {
    reader: R,
    writer: W,
    _game: PhantomData<fn() -> G>,
}

impl<G: GameModel> Runner<G, BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Connect to the server and authenticate with the configured token
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        info!("Connecting to game server at {}", config.address());
        let stream = TcpStream::connect((config.host.as_str(), config.port))?;
        stream.set_nodelay(true)?;
        let stream_clone = stream.try_clone()?;
        let reader = BufReader::new(stream);
        let writer = BufWriter::new(stream_clone);
        let runner = Self::handshake(reader, writer, &config.token)?;
        info!("Connected to {}", config.address());
        Ok(runner)
    }
}

impl<G: GameModel, R: BufRead, W: Write> Runner<G, R, W> {
    /// Wrap an already authenticated stream pair
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            _game: PhantomData,
        }
    }

    /// Send the token over a fresh stream pair, then wrap it
    pub fn handshake(reader: R, mut writer: W, token: &str) -> Result<Self> {
        token.to_owned().write_to(&mut writer)?;
        writer.flush()?;
        debug!("Sent token ({} bytes)", token.len());
        Ok(Self::new(reader, writer))
    }

    /// Serve server requests until `Finish`
    pub fn run<S: Strategy<G> + ?Sized>(mut self, strategy: &mut S) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        match self.serve(strategy, &mut summary) {
            Ok(()) => {
                info!(
                    "Game finished after {} actions, {} debug updates",
                    summary.actions, summary.debug_updates
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(
                    "Session aborted after {} actions, {} debug updates: {}",
                    summary.actions, summary.debug_updates, e
                );
                Err(e)
            }
        }
    }

    fn serve<S: Strategy<G> + ?Sized>(
        &mut self,
        strategy: &mut S,
        summary: &mut RunSummary,
    ) -> Result<()> {
        loop {
            let message = ServerMessage::<G>::read_from(&mut self.reader)?;
            debug!("[server→client] {}", message.kind());
            match message {
                ServerMessage::GetAction { player_view } => {
                    let action = {
                        let mut debug = DebugInterface::new(&mut self.writer, &mut self.reader);
                        strategy.get_action(&player_view, &mut debug)?
                    };
                    self.send(&ClientMessage::ActionMessage { action })?;
                    summary.actions += 1;
                }
                ServerMessage::DebugUpdate { player_view } => {
                    {
                        let mut debug = DebugInterface::new(&mut self.writer, &mut self.reader);
                        strategy.debug_update(&player_view, &mut debug)?;
                    }
                    self.send(&ClientMessage::DebugUpdateDone)?;
                    summary.debug_updates += 1;
                }
                ServerMessage::Finish => {
                    strategy.finish();
                    return Ok(());
                }
            }
        }
    }

    fn send(&mut self, message: &ClientMessage<G>) -> Result<()> {
        debug!("[client→server] {}", message.kind());
        message.write_to(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
