use crate::model::{Action, DemoGame, PlayerView};
use arena_client::{DebugInterface, Strategy};
use arena_core::{ArenaError, DebugCommand, Result};

#[derive(Default)]
pub struct MyStrategy {}

impl MyStrategy {
    pub fn new() -> Self {
        Self {}
    }
}

impl Strategy<DemoGame> for MyStrategy {
    fn get_action(
        &mut self,
        _player_view: &PlayerView,
        _debug: &mut DebugInterface<'_, DemoGame>,
    ) -> Result<Action> {
        Err(ArenaError::NotImplemented("get_action"))
    }

    fn debug_update(
        &mut self,
        _player_view: &PlayerView,
        debug: &mut DebugInterface<'_, DemoGame>,
    ) -> Result<()> {
        debug.send(DebugCommand::Clear)?;
        debug.get_state()?;
        Ok(())
    }
}
