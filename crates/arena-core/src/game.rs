//! Game model binding

use crate::wire::Wire;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Bound shared by every type a game model exchanges with the server
pub trait ModelType:
    Wire + Serialize + DeserializeOwned + Debug + Clone + PartialEq + Send + 'static
{
}

impl<T> ModelType for T where
    T: Wire + Serialize + DeserializeOwned + Debug + Clone + PartialEq + Send + 'static
{
}

/// Types a particular game plugs into the protocol
///
/// Implement this on a marker type to get `ClientMessage`, `ServerMessage`
/// and `DebugCommand` for that game.
pub trait GameModel: Debug + Clone + PartialEq + Send + 'static {
    /// What the server shows a player each turn
    type PlayerView: ModelType;
    /// The player's reply to a turn
    type Action: ModelType;
    /// One item drawn on the debug overlay
    type DebugData: ModelType;
    /// Debug state the app reports back on request
    type DebugState: ModelType;
}
