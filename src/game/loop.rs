use std::cell::RefCell;
use std::rc::Rc;

use macroquad::prelude::*;

use crate::config;
use crate::game::engine::Game;
use crate::game::grid::Grid;
use crate::game::{input, render};

pub async fn run(solo: bool) {
    let mut cfg = config::load();
    if solo {
        cfg.players = 1;
    }

    macroquad::rand::srand((get_time() * 1_000_000.0) as u64);

    // The lattice is fixed at startup from the surface aspect ratio.
    let grid = Grid::new(cfg.rows, screen_width(), screen_height());
    info!("grid: {}x{}, players: {}", grid.cols, grid.rows, cfg.players);

    let mut game = Game::new(grid, cfg.players, cfg.move_every_ticks);

    let eaten = Rc::new(RefCell::new(0u32));
    {
        let counter = Rc::clone(&eaten);
        game.on_eat(Box::new(move || *counter.borrow_mut() += 1));
    }

    let bindings = input::bindings_for(cfg.players);

    let mut backlog = 0.0f32;
    loop {
        input::poll(&bindings, &mut game);

        // Fixed-interval ticks drained on one thread: each pass runs to
        // completion before the frame renders.
        backlog = (backlog + get_frame_time()).min(config::TICK_BACKLOG_MAX);
        while backlog >= cfg.tick_interval {
            backlog -= cfg.tick_interval;
            game.tick();
        }

        clear_background(Color::from_rgba(12, 14, 20, 255));
        render::draw(&game, *eaten.borrow());

        next_frame().await;
    }
}
