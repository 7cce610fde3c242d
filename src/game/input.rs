use macroquad::prelude::*;

use crate::game::command::Direction;
use crate::game::engine::Game;

/// What a recognized key press maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Steer(Direction),
    TogglePause,
}

/// Physical keys for one player, plus an optional pause toggle.
#[derive(Clone, Copy, Debug)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub pause: Option<KeyCode>,
}

impl KeyBindings {
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            pause: Some(KeyCode::Space),
        }
    }

    pub fn wasd() -> Self {
        Self {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            pause: None,
        }
    }

    /// Pure key -> action mapping; anything unbound resolves to `None`.
    pub fn resolve(self, key: KeyCode) -> Option<Action> {
        if self.pause == Some(key) {
            return Some(Action::TogglePause);
        }
        if key == self.up {
            Some(Action::Steer(Direction::Up))
        } else if key == self.down {
            Some(Action::Steer(Direction::Down))
        } else if key == self.left {
            Some(Action::Steer(Direction::Left))
        } else if key == self.right {
            Some(Action::Steer(Direction::Right))
        } else {
            None
        }
    }
}

/// Binding tables by player index. The WASD table only exists with a second
/// player; in solo games those keys are inert.
pub fn bindings_for(players: usize) -> Vec<KeyBindings> {
    let mut tables = vec![KeyBindings::arrows()];
    if players > 1 {
        tables.push(KeyBindings::wasd());
    }
    tables
}

/// Drains this frame's key presses into the simulation.
pub fn poll(bindings: &[KeyBindings], game: &mut Game) {
    for key in get_keys_pressed() {
        for (player, table) in bindings.iter().enumerate() {
            match table.resolve(key) {
                Some(Action::Steer(direction)) => {
                    game.steer(player, direction);
                    break;
                }
                Some(Action::TogglePause) => {
                    game.toggle_pause();
                    break;
                }
                None => {}
            }
        }
    }
}
