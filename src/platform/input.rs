//! Keyboard to population command mapping

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::PopulationCommand;

/// Map a key transition to a population command
///
/// Up spawns, Down despawns. Both fire on press and on auto-repeat (winit
/// delivers repeats as `Pressed`); releases and other keys map to nothing.
pub fn command_for_key(key: PhysicalKey, state: ElementState) -> Option<PopulationCommand> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(PopulationCommand::Spawn),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(PopulationCommand::Despawn),
        _ => None,
    }
}
