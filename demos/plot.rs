//! Coordinate axes with a sine plot, plus a sampler of the other shapes.

use trazo::{
    Arrow, Axis, Circle, Color, FunctionPlot, Image, Line, LineStyle, Orientation, Point,
    RoundedRectangle, Shape, Stroke, Text, Window,
};

fn main() -> Result<(), trazo::Error> {
    env_logger::init();

    let mut window = Window::new(Point::new(100.0, 100.0), 600, 400, "function plotting");

    let mut x_axis = Axis::new(
        Orientation::Horizontal,
        Point::new(20.0, 300.0),
        560.0,
        10,
        "1 == 80 pixels",
    )?;
    x_axis.set_color(Color::DARK_GREEN);
    window.attach(x_axis);

    let mut y_axis = Axis::new(Orientation::Vertical, Point::new(300.0, 380.0), 360.0, 10, "y")?;
    y_axis.set_color(Color::DARK_GREEN);
    window.attach(y_axis);

    let mut sine = FunctionPlot::new(
        f64::sin,
        -3.5,
        3.5,
        Point::new(300.0, 200.0),
        400,
        80.0,
        80.0,
    )?;
    sine.set_color(Color::BLUE);
    window.attach(sine);

    let mut caption = Text::new(Point::new(24.0, 40.0), "y = sin(x)");
    caption.set_font_size(18.0);
    caption.set_color(Color::DARK_BLUE);
    window.attach(caption);

    let mut pointer = Arrow::new(Point::new(480.0, 80.0), Point::new(385.0, 125.0));
    pointer.set_fill_color(Color::RED);
    pointer.set_color(Color::RED);
    window.attach(pointer);

    let mut dashed = Line::new(Point::new(20.0, 120.0), Point::new(580.0, 120.0));
    dashed.set_stroke(Stroke::new(1.0, Color::GRAY).with_style(LineStyle::Dash));
    window.attach(dashed);

    let mut badge = RoundedRectangle::new(Point::new(470.0, 330.0), 110.0, 50.0);
    badge.set_fill_color(Color::LIGHT_GRAY);
    window.attach(badge);

    let mut dot = Circle::new(Point::new(300.0, 200.0), 4.0);
    dot.set_fill_color(Color::RED);
    dot.set_color(Color::INVISIBLE);
    window.attach(dot);

    // A bad path shows up as the crossed placeholder box with a label.
    window.attach(Image::open(Point::new(30.0, 330.0), "missing.jpg"));

    trazo::run(window)
}
