use macroquad::prelude::Conf;

use snak_view::{config, game};

fn window_conf() -> Conf {
    Conf {
        window_title: "snak viewer".to_owned(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        ..Default::default()
    }
}

fn main() {
    init_tracing();

    let server_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_owned());

    macroquad::Window::from_config(window_conf(), game::r#loop::run(server_url));
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
