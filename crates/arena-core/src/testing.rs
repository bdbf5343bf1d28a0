use crate::game::GameModel;

/// Minimal model over primitive types
#[derive(Debug, Clone, PartialEq)]
pub struct TestGame;

impl GameModel for TestGame {
    type PlayerView = i32;
    type Action = i32;
    type DebugData = String;
    type DebugState = Vec<String>;
}
