use macroquad::prelude::*;

mod config;
mod game;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Grid".to_owned(),
        window_width: 1024,
        window_height: 768,
        ..Default::default()
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let solo = matches!(args.next().as_deref(), Some("solo"));
    macroquad::Window::from_config(window_conf(), game::r#loop::run(solo));
}
