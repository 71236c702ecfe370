//! A 16x16 grid of colored tiles, each a fill-only rectangle.

use trazo::{Color, Point, Rectangle, Shape, Window};

/// Spreads a tile index over hue-ish RGB values.
fn tile_color(x: u8, y: u8) -> Color {
    Color::rgb(x * 17, y * 17, 255 - x * 8 - y * 8)
}

fn main() -> Result<(), trazo::Error> {
    env_logger::init();

    let mut window = Window::new(Point::new(200.0, 200.0), 320, 320, "color grid");

    for x in 0..16u8 {
        for y in 0..16u8 {
            let mut tile =
                Rectangle::new(Point::new(x as f32 * 20.0, y as f32 * 20.0), 20.0, 20.0);
            tile.set_fill_color(tile_color(x, y));
            tile.set_color(Color::INVISIBLE);
            window.attach(tile);
        }
    }

    trazo::run(window)
}
