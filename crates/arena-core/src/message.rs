//! Protocol messages exchanged with the game server
//!
//! Every message starts with an `i32` tag naming its kind, so client and
//! server can share one stream in each direction.

use crate::error::{ArenaError, Result};
use crate::game::GameModel;
use crate::wire::{Wire, read_tag, write_tag};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

/// Wire discriminants for each message kind
pub mod tag {
    pub const DEBUG_COMMAND_ADD: i32 = 0;
    pub const DEBUG_COMMAND_CLEAR: i32 = 1;

    pub const CLIENT_DEBUG_MESSAGE: i32 = 0;
    pub const CLIENT_ACTION_MESSAGE: i32 = 1;
    pub const CLIENT_DEBUG_UPDATE_DONE: i32 = 2;
    pub const CLIENT_REQUEST_DEBUG_STATE: i32 = 3;

    pub const SERVER_GET_ACTION: i32 = 0;
    pub const SERVER_FINISH: i32 = 1;
    pub const SERVER_DEBUG_UPDATE: i32 = 2;
}

/// Debug overlay command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum DebugCommand<G: GameModel> {
    /// Draw a debug item
    Add { data: G::DebugData },
    /// Clear everything drawn so far
    Clear,
}

impl<G: GameModel> Wire for DebugCommand<G> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            DebugCommand::Add { data } => {
                write_tag(writer, tag::DEBUG_COMMAND_ADD)?;
                data.write_to(writer)
            }
            DebugCommand::Clear => write_tag(writer, tag::DEBUG_COMMAND_CLEAR),
        }
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match read_tag(reader)? {
            tag::DEBUG_COMMAND_ADD => Ok(DebugCommand::Add {
                data: G::DebugData::read_from(reader)?,
            }),
            tag::DEBUG_COMMAND_CLEAR => Ok(DebugCommand::Clear),
            other => Err(ArenaError::UnexpectedTag {
                type_name: "DebugCommand",
                tag: other,
            }),
        }
    }
}

/// Message sent from client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum ClientMessage<G: GameModel> {
    /// Ask the app to perform a debug command
    DebugMessage { command: DebugCommand<G> },
    /// Reply to `ServerMessage::GetAction`
    ActionMessage { action: G::Action },
    /// Signifies the end of a debug update
    DebugUpdateDone,
    /// Request debug state from the app
    RequestDebugState,
}

impl<G: GameModel> ClientMessage<G> {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::DebugMessage { .. } => "debug_message",
            ClientMessage::ActionMessage { .. } => "action_message",
            ClientMessage::DebugUpdateDone => "debug_update_done",
            ClientMessage::RequestDebugState => "request_debug_state",
        }
    }
}

impl<G: GameModel> Wire for ClientMessage<G> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            ClientMessage::DebugMessage { command } => {
                write_tag(writer, tag::CLIENT_DEBUG_MESSAGE)?;
                command.write_to(writer)
            }
            ClientMessage::ActionMessage { action } => {
                write_tag(writer, tag::CLIENT_ACTION_MESSAGE)?;
                action.write_to(writer)
            }
            ClientMessage::DebugUpdateDone => write_tag(writer, tag::CLIENT_DEBUG_UPDATE_DONE),
            ClientMessage::RequestDebugState => write_tag(writer, tag::CLIENT_REQUEST_DEBUG_STATE),
        }
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match read_tag(reader)? {
            tag::CLIENT_DEBUG_MESSAGE => Ok(ClientMessage::DebugMessage {
                command: DebugCommand::read_from(reader)?,
            }),
            tag::CLIENT_ACTION_MESSAGE => Ok(ClientMessage::ActionMessage {
                action: G::Action::read_from(reader)?,
            }),
            tag::CLIENT_DEBUG_UPDATE_DONE => Ok(ClientMessage::DebugUpdateDone),
            tag::CLIENT_REQUEST_DEBUG_STATE => Ok(ClientMessage::RequestDebugState),
            other => Err(ArenaError::UnexpectedTag {
                type_name: "ClientMessage",
                tag: other,
            }),
        }
    }
}

/// Message sent from server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum ServerMessage<G: GameModel> {
    /// Get action for next tick
    GetAction { player_view: G::PlayerView },
    /// Signifies end of the game
    Finish,
    /// Debug update
    DebugUpdate { player_view: G::PlayerView },
}

impl<G: GameModel> ServerMessage<G> {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::GetAction { .. } => "get_action",
            ServerMessage::Finish => "finish",
            ServerMessage::DebugUpdate { .. } => "debug_update",
        }
    }
}

impl<G: GameModel> Wire for ServerMessage<G> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            ServerMessage::GetAction { player_view } => {
                write_tag(writer, tag::SERVER_GET_ACTION)?;
                player_view.write_to(writer)
            }
            ServerMessage::Finish => write_tag(writer, tag::SERVER_FINISH),
            ServerMessage::DebugUpdate { player_view } => {
                write_tag(writer, tag::SERVER_DEBUG_UPDATE)?;
                player_view.write_to(writer)
            }
        }
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match read_tag(reader)? {
            tag::SERVER_GET_ACTION => Ok(ServerMessage::GetAction {
                player_view: G::PlayerView::read_from(reader)?,
            }),
            tag::SERVER_FINISH => Ok(ServerMessage::Finish),
            tag::SERVER_DEBUG_UPDATE => Ok(ServerMessage::DebugUpdate {
                player_view: G::PlayerView::read_from(reader)?,
            }),
            other => Err(ArenaError::UnexpectedTag {
                type_name: "ServerMessage",
                tag: other,
            }),
        }
    }
}
