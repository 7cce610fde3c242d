use macroquad::prelude::*;

use crate::game::engine::Game;
use crate::game::grid::Cell;

// Body/head pairs per player, mouse grey: the classic palette.
const BODY_COLORS: [Color; 2] = [
    Color::new(0.96, 0.46, 1.00, 1.00),
    Color::new(0.28, 0.90, 0.26, 1.00),
];
const HEAD_COLORS: [Color; 2] = [RED, GREEN];
const MOUSE_COLOR: Color = Color::new(0.36, 0.36, 0.33, 1.00);
const HUD_TEXT: Color = Color::new(1.00, 1.00, 1.00, 0.70);

/// Draws one frame from the engine's read-only state. All pixel math happens
/// here; the simulation only ever sees lattice cells.
pub fn draw(game: &Game, eaten: u32) {
    draw_mice(game);
    draw_snakes(game);
    draw_hud(game, eaten);
}

fn draw_cell_circle(game: &Game, cell: Cell, color: Color) {
    let grid = game.grid();
    if !grid.contains(cell) {
        // off-lattice cells are never drawn
        return;
    }
    let circle = grid.cell_rect(cell).inner_circle();
    draw_circle(circle.point.x, circle.point.y, circle.radius, color);
}

fn draw_mice(game: &Game) {
    for &mouse in game.mice() {
        draw_cell_circle(game, mouse, MOUSE_COLOR);
    }
}

fn draw_snakes(game: &Game) {
    for (p, player) in game.players().iter().enumerate() {
        let body = BODY_COLORS[p % BODY_COLORS.len()];
        let head = HEAD_COLORS[p % HEAD_COLORS.len()];
        for (i, segment) in player.snake.iter().enumerate() {
            let color = if i == 0 { head } else { body };
            draw_cell_circle(game, segment.point, color);
        }
        draw_length_label(game, player.head().point, player.snake.len());
    }
}

/// The snake's length rides on its head cell, sized to the cell's inner
/// circle.
fn draw_length_label(game: &Game, cell: Cell, len: usize) {
    let grid = game.grid();
    if !grid.contains(cell) {
        return;
    }
    let rect = grid.cell_rect(cell);
    let center = rect.center();
    let font_size = rect.inner_circle().radius;
    let text = len.to_string();
    let dims = measure_text(&text, None, font_size as u16, 1.0);
    draw_text(
        &text,
        center.x - dims.width * 0.5,
        center.y + dims.height * 0.5,
        font_size,
        BLUE,
    );
}

fn draw_hud(game: &Game, eaten: u32) {
    draw_text(&format!("FPS: {}", get_fps()), 12.0, 22.0, 18.0, HUD_TEXT);
    draw_text(&format!("Eaten: {}", eaten), 12.0, 44.0, 18.0, HUD_TEXT);

    if !game.running() {
        let title = "PAUSED";
        let mt = measure_text(title, None, 48, 1.0);
        draw_text(
            title,
            (screen_width() - mt.width) * 0.5,
            screen_height() * 0.45,
            48.0,
            WHITE,
        );
    }
}
