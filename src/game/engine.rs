use macroquad::prelude::*;

use crate::game::command::Direction;
use crate::game::grid::{Cell, Grid};
use crate::game::player::{Player, Segment};

pub type EatHook = Box<dyn FnMut()>;

/// The whole simulation: players, mice and the tick scheduler state.
pub struct Game {
    grid: Grid,
    players: Vec<Player>,
    mice: Vec<Cell>,
    sub_tick: u32,
    move_every_ticks: u32,
    ticks: u64,
    running: bool,
    sequence: u64,
    on_eat: Option<EatHook>,
}

impl Game {
    /// Player 0 starts in the top-left corner heading right; a second player
    /// starts in the opposite corner heading left.
    pub fn new(grid: Grid, players: usize, move_every_ticks: u32) -> Self {
        let mut game = Self {
            grid,
            players: Vec::new(),
            mice: Vec::new(),
            sub_tick: 0,
            move_every_ticks: move_every_ticks.max(1),
            ticks: 0,
            running: true,
            sequence: 0,
            on_eat: None,
        };
        game.players
            .push(Player::new(Segment::new(Cell::new(0, 0), Direction::Right)));
        if players > 1 {
            game.players.push(Player::new(Segment::new(
                Cell::new(grid.cols - 1, grid.rows - 1),
                Direction::Left,
            )));
        }
        game
    }

    /// Registers the hook fired synchronously on every consumption.
    pub fn on_eat(&mut self, hook: EatHook) {
        self.on_eat = Some(hook);
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn mice(&self) -> &[Cell] {
        &self.mice
    }

    pub fn running(&self) -> bool {
        self.running
    }

    #[allow(dead_code)]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn toggle_pause(&mut self) {
        self.running = !self.running;
        for (i, player) in self.players.iter().enumerate() {
            info!("player {}: snake {:?}", i, player.snake);
            info!("player {}: cmds {:?}", i, player.commands);
        }
    }

    /// Routes a heading request to one player; out-of-range indices are
    /// ignored.
    pub fn steer(&mut self, player: usize, direction: Direction) {
        if let Some(p) = self.players.get_mut(player) {
            p.steer(direction, &mut self.sequence);
        }
    }

    /// One scheduler tick. Movement only happens every `move_every_ticks`
    /// ticks; the ticks in between just keep input sampling ahead of the
    /// movement cadence.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.ticks += 1;
        self.sub_tick += 1;
        if self.sub_tick < self.move_every_ticks {
            return;
        }
        self.sub_tick = 0;

        self.move_step();
        self.eat_step();
        self.respawn_step();
    }

    /// Advances every segment head to tail. The head is checked right after
    /// its own move, against the trailing segments' pre-move cells; a wall or
    /// body hit resets that player alone.
    fn move_step(&mut self) {
        let grid = self.grid;
        for player in &mut self.players {
            let len = player.snake.len();
            for i in 0..len {
                let direction = player.snake[i].direction;
                player.snake[i].point = direction.advance(player.snake[i].point);
                let is_tail = i + 1 == len;
                player.commands.apply_to(&mut player.snake[i], is_tail);

                if i == 0 {
                    let head = player.snake[0].point;
                    let out = !grid.contains(head);
                    let bitten = player.snake[1..].iter().any(|s| s.point == head);
                    if out || bitten {
                        player.reset();
                        break;
                    }
                }
            }
        }
    }

    fn eat_step(&mut self) {
        for player in &mut self.players {
            let head = player.snake[0].point;
            let mut i = 0;
            while i < self.mice.len() {
                if self.mice[i] == head {
                    debug!("eat: {:?}", self.mice[i]);
                    self.mice.swap_remove(i);
                    player.grow();
                    info!("grow: {} segments", player.snake.len());
                    if let Some(hook) = self.on_eat.as_mut() {
                        hook();
                    }
                    continue;
                }
                i += 1;
            }
        }
    }

    /// Keeps one mouse per player slot. Spawn cells are not checked against
    /// snake bodies: a mouse under a body is legitimate and gets eaten in
    /// passing.
    fn respawn_step(&mut self) {
        while self.mice.len() < self.players.len() {
            self.mice.push(self.grid.random_cell());
        }
        debug_assert!(
            self.mice.len() <= self.players.len(),
            "mouse quota exceeded"
        );
    }
}
