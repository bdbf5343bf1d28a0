//! Model types for the bundled demo game
//!
//! A game's SDK normally ships its own generated model. These types stand
//! in for one so the binary has something concrete to run against.

use arena_core::wire::{read_tag, write_tag};
use arena_core::{ArenaError, GameModel, Result, Wire};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read, Write};

/// Marker binding the demo types to the protocol
#[derive(Debug, Clone, PartialEq)]
pub struct DemoGame;

impl GameModel for DemoGame {
    type PlayerView = PlayerView;
    type Action = Action;
    type DebugData = DebugData;
    type DebugState = DebugState;
}

/// 2D vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Wire for Vec2 {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.x.write_to(writer)?;
        self.y.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            x: f64::read_from(reader)?,
            y: f64::read_from(reader)?,
        })
    }
}

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Wire for Color {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.r.write_to(writer)?;
        self.g.write_to(writer)?;
        self.b.write_to(writer)?;
        self.a.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            r: f32::read_from(reader)?,
            g: f32::read_from(reader)?,
            b: f32::read_from(reader)?,
            a: f32::read_from(reader)?,
        })
    }
}

/// A unit on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i32,
    pub player_id: i32,
    pub health: i32,
    pub position: Vec2,
}

impl Wire for Unit {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.id.write_to(writer)?;
        self.player_id.write_to(writer)?;
        self.health.write_to(writer)?;
        self.position.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            id: i32::read_from(reader)?,
            player_id: i32::read_from(reader)?,
            health: i32::read_from(reader)?,
            position: Vec2::read_from(reader)?,
        })
    }
}

/// Everything the player sees on a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub my_id: i32,
    pub current_tick: i32,
    pub max_tick_count: i32,
    pub units: Vec<Unit>,
}

impl PlayerView {
    /// Units owned by the viewing player
    pub fn my_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |unit| unit.player_id == self.my_id)
    }
}

impl Wire for PlayerView {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.my_id.write_to(writer)?;
        self.current_tick.write_to(writer)?;
        self.max_tick_count.write_to(writer)?;
        self.units.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            my_id: i32::read_from(reader)?,
            current_tick: i32::read_from(reader)?,
            max_tick_count: i32::read_from(reader)?,
            units: Vec::read_from(reader)?,
        })
    }
}

/// Move targets keyed by unit id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub move_targets: HashMap<i32, Vec2>,
}

impl Wire for Action {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.move_targets.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            move_targets: HashMap::read_from(reader)?,
        })
    }
}

/// Item drawn on the debug overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DebugData {
    /// Text in the log panel
    Log { text: String },
    /// Dot at a world position
    Point { position: Vec2, color: Color },
    /// Line between two world positions
    Segment { from: Vec2, to: Vec2, color: Color },
}

const DEBUG_DATA_LOG: i32 = 0;
const DEBUG_DATA_POINT: i32 = 1;
const DEBUG_DATA_SEGMENT: i32 = 2;

impl Wire for DebugData {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            DebugData::Log { text } => {
                write_tag(writer, DEBUG_DATA_LOG)?;
                text.write_to(writer)
            }
            DebugData::Point { position, color } => {
                write_tag(writer, DEBUG_DATA_POINT)?;
                position.write_to(writer)?;
                color.write_to(writer)
            }
            DebugData::Segment { from, to, color } => {
                write_tag(writer, DEBUG_DATA_SEGMENT)?;
                from.write_to(writer)?;
                to.write_to(writer)?;
                color.write_to(writer)
            }
        }
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        match read_tag(reader)? {
            DEBUG_DATA_LOG => Ok(DebugData::Log {
                text: String::read_from(reader)?,
            }),
            DEBUG_DATA_POINT => Ok(DebugData::Point {
                position: Vec2::read_from(reader)?,
                color: Color::read_from(reader)?,
            }),
            DEBUG_DATA_SEGMENT => Ok(DebugData::Segment {
                from: Vec2::read_from(reader)?,
                to: Vec2::read_from(reader)?,
                color: Color::read_from(reader)?,
            }),
            other => Err(ArenaError::UnexpectedTag {
                type_name: "DebugData",
                tag: other,
            }),
        }
    }
}

/// Input state of the app's debug view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugState {
    pub pressed_keys: Vec<String>,
    pub cursor_world_position: Vec2,
    pub locked_player_id: Option<i32>,
}

impl Wire for DebugState {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.pressed_keys.write_to(writer)?;
        self.cursor_world_position.write_to(writer)?;
        self.locked_player_id.write_to(writer)
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            pressed_keys: Vec::read_from(reader)?,
            cursor_world_position: Vec2::read_from(reader)?,
            locked_player_id: Option::read_from(reader)?,
        })
    }
}
