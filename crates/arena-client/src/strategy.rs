//! Strategy trait implemented by contestants

use crate::debug::DebugInterface;
use arena_core::{GameModel, Result};

/// Per-turn decision logic driven by the runner
///
/// Returning an error from any callback ends the session.
pub trait Strategy<G: GameModel> {
    /// Decide the action for the current tick
    fn get_action(
        &mut self,
        player_view: &G::PlayerView,
        debug: &mut DebugInterface<'_, G>,
    ) -> Result<G::Action>;

    /// Redraw debug output while the app is paused
    fn debug_update(
        &mut self,
        _player_view: &G::PlayerView,
        _debug: &mut DebugInterface<'_, G>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once when the server ends the game
    fn finish(&mut self) {}
}

impl<G: GameModel, S: Strategy<G> + ?Sized> Strategy<G> for Box<S> {
    fn get_action(
        &mut self,
        player_view: &G::PlayerView,
        debug: &mut DebugInterface<'_, G>,
    ) -> Result<G::Action> {
        (**self).get_action(player_view, debug)
    }

    fn debug_update(
        &mut self,
        player_view: &G::PlayerView,
        debug: &mut DebugInterface<'_, G>,
    ) -> Result<()> {
        (**self).debug_update(player_view, debug)
    }

    fn finish(&mut self) {
        (**self).finish()
    }
}
