use macroquad::prelude::*;
use serde::Deserialize;

// Grille: nombre de lignes fixe, colonnes dérivées du ratio de la surface.
pub const GRID_ROWS: i32 = 40;

// Tick fixe; le serpent n'avance qu'un tick sur MOVE_EVERY_TICKS (cadence
// "classic snake": l'input est échantillonné plus vite que le mouvement).
pub const TICK_INTERVAL: f32 = 0.05;
pub const MOVE_EVERY_TICKS: u32 = 5;

pub const PLAYER_COUNT: usize = 2;
pub const MAX_PLAYERS: usize = 2;

// Cap the tick backlog so a stalled frame doesn't replay a burst of moves.
pub const TICK_BACKLOG_MAX: f32 = 0.25;

pub const CONFIG_FILE: &str = "snake.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: i32,
    pub players: usize,
    pub tick_interval: f32,
    pub move_every_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            players: PLAYER_COUNT,
            tick_interval: TICK_INTERVAL,
            move_every_ticks: MOVE_EVERY_TICKS,
        }
    }
}

impl GameConfig {
    pub fn clamped(mut self) -> Self {
        self.rows = self.rows.max(8);
        self.players = self.players.clamp(1, MAX_PLAYERS);
        if !(self.tick_interval > 0.0) {
            self.tick_interval = TICK_INTERVAL;
        }
        self.move_every_ticks = self.move_every_ticks.max(1);
        self
    }
}

/// Reads the optional `snake.json` next to the binary. Anything missing or
/// malformed falls back to the defaults.
pub fn load() -> GameConfig {
    match std::fs::read_to_string(CONFIG_FILE) {
        Ok(text) => match serde_json::from_str::<GameConfig>(&text) {
            Ok(cfg) => cfg.clamped(),
            Err(err) => {
                warn!("invalid {}: {}", CONFIG_FILE, err);
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    }
}
