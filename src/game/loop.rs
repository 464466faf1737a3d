use macroquad::prelude::*;

use crate::config;
use crate::net::client::ViewerClient;
use crate::net::messages::Command;
use crate::view::grid::GridSurface;
use crate::view::palette::PaintColor;
use crate::view::session::SessionController;
use crate::view::snapshot::Cell;

fn to_screen_color(color: PaintColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

fn pressed_commands() -> Vec<Command> {
    let mut commands = Vec::new();
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::K) {
        commands.push(Command::Up);
    }
    if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::J) {
        commands.push(Command::Down);
    }
    if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::H) {
        commands.push(Command::Left);
    }
    if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::L) {
        commands.push(Command::Right);
    }
    if is_key_pressed(KeyCode::Space) {
        commands.push(Command::Start);
    }
    commands
}

fn draw_grid(grid: &GridSurface) {
    let width = grid.width() as f32;
    let height = grid.height() as f32;
    if width == 0.0 || height == 0.0 {
        return;
    }

    let cell = (screen_width() / width)
        .min(screen_height() / height)
        .min(config::CELL_PX);
    let origin_x = (screen_width() - cell * width) * 0.5;
    let origin_y = (screen_height() - cell * height) * 0.5;

    draw_rectangle_lines(
        origin_x - 2.0,
        origin_y - 2.0,
        cell * width + 4.0,
        cell * height + 4.0,
        2.0,
        Color::from_rgba(255, 255, 255, 40),
    );

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(color) = grid.color_at(Cell::new(x, y)) else {
                continue;
            };
            draw_rectangle(
                origin_x + x as f32 * cell + config::CELL_GAP_PX,
                origin_y + y as f32 * cell + config::CELL_GAP_PX,
                cell - 2.0 * config::CELL_GAP_PX,
                cell - 2.0 * config::CELL_GAP_PX,
                to_screen_color(color),
            );
        }
    }
}

/// The viewer's frame loop. Owns the session and the connection for the
/// window's lifetime; both are dropped together when the window closes.
pub async fn run(server_url: String) {
    let mut client = ViewerClient::connect(server_url);
    let mut session = SessionController::new();

    loop {
        // Apply every message that arrived since the last frame, in order.
        while let Some(raw) = client.try_recv() {
            session.handle_message(&raw);
        }

        for command in pressed_commands() {
            client.send(command);
        }

        clear_background(Color::from_rgba(12, 14, 20, 255));

        match session.grid() {
            Some(grid) => draw_grid(grid),
            None => {
                draw_text(
                    "Waiting for the game to start...",
                    24.0,
                    48.0,
                    28.0,
                    WHITE,
                );
                draw_text(
                    "arrows / hjkl to steer, space to start",
                    24.0,
                    80.0,
                    20.0,
                    GRAY,
                );
            }
        }

        next_frame().await;
    }
}
