//! Scene-assembly tests: build shape scenes through the public API, record
//! them with a `Painter`, and check the recorded frame. No window or GPU is
//! involved.

use trazo::{
    Arrow, Axis, Bitmap, Circle, Color, DrawCommand, FunctionPlot, Image, Line, LineStyle,
    MarkedPolyline, Orientation, Painter, Point, Polygon, Rectangle, Shape, Stroke, Window,
};

/// A 16x16 grid of fill-only tiles renders as one merged mesh of quads.
#[test]
fn color_grid_scene() {
    let mut window = Window::new(Point::new(0.0, 0.0), 320, 320, "grid");

    for x in 0..16 {
        for y in 0..16 {
            let mut tile = Rectangle::new(Point::new(x as f32 * 20.0, y as f32 * 20.0), 20.0, 20.0);
            tile.set_fill_color(Color::rgb(x * 16, y * 16, 128));
            tile.set_color(Color::INVISIBLE);
            window.attach(tile);
        }
    }
    assert_eq!(window.shape_count(), 256);

    let mut painter = Painter::new((320.0, 320.0));
    window.draw_shapes(&mut painter);
    let frame = painter.into_frame();

    // 256 quads, two triangles each, merged into a single mesh command.
    assert_eq!(frame.index_count(), 256 * 6);
    assert_eq!(frame.commands().len(), 1);
    assert!(matches!(frame.commands()[0], DrawCommand::Mesh { .. }));
}

/// An axes-and-plot scene records geometry for every part and text for the
/// axis labels, the marks and the caption.
#[test]
fn function_plot_scene() {
    let mut window = Window::new(Point::new(100.0, 100.0), 600, 400, "sine");

    let x_axis = Axis::new(
        Orientation::Horizontal,
        Point::new(20.0, 300.0),
        560.0,
        10,
        "x",
    )
    .unwrap();
    let y_axis = Axis::new(
        Orientation::Vertical,
        Point::new(300.0, 380.0),
        360.0,
        10,
        "y",
    )
    .unwrap();
    window.attach(x_axis);
    window.attach(y_axis);

    let mut sine = FunctionPlot::new(
        f64::sin,
        -3.14,
        3.14,
        Point::new(300.0, 200.0),
        200,
        80.0,
        80.0,
    )
    .unwrap();
    sine.set_color(Color::BLUE);
    window.attach(sine);

    let mut samples = MarkedPolyline::new("x");
    for i in 0..4 {
        samples.add(Point::new(50.0 + 20.0 * i as f32, 100.0));
    }
    window.attach(samples);

    let mut pointer = Arrow::new(Point::new(500.0, 100.0), Point::new(380.0, 180.0));
    pointer.set_fill_color(Color::RED);
    window.attach(pointer);

    window.attach(trazo::Text::new(Point::new(20.0, 30.0), "y = sin(x)"));

    let mut painter = Painter::new((600.0, 400.0));
    window.draw_shapes(&mut painter);
    let frame = painter.into_frame();

    assert!(frame.index_count() > 0);
    // Two axis labels, four marks, one caption.
    assert_eq!(frame.texts().len(), 7);
    let captions: Vec<&str> = frame.texts().iter().map(|t| t.content.as_str()).collect();
    assert!(captions.contains(&"x"));
    assert!(captions.contains(&"y"));
    assert!(captions.contains(&"y = sin(x)"));
}

/// Shapes drawn after an image still end up above it: the command order in
/// the frame matches the attach order.
#[test]
fn images_interleave_with_shapes_in_attach_order() {
    let mut window = Window::new(Point::new(0.0, 0.0), 200, 200, "layers");

    window.attach(Rectangle::new(Point::new(0.0, 0.0), 200.0, 200.0));

    let bitmap = Bitmap::from_rgba(vec![200; 4 * 4 * 4], 4, 4);
    window.attach(Image::from_bitmap(Point::new(50.0, 50.0), bitmap.clone()));
    window.attach(Image::from_bitmap(Point::new(100.0, 100.0), bitmap));

    window.attach(Circle::new(Point::new(100.0, 100.0), 30.0));

    let mut painter = Painter::new((200.0, 200.0));
    window.draw_shapes(&mut painter);
    let frame = painter.into_frame();

    let kinds: Vec<&str> = frame
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Mesh { .. } => "mesh",
            DrawCommand::Image(_) => "image",
        })
        .collect();
    assert_eq!(kinds, ["mesh", "image", "image", "mesh"]);

    // Both images come from the same bitmap, so they share a texture id.
    let ids: Vec<u64> = frame
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Image(image) => Some(image.bitmap_id()),
            _ => None,
        })
        .collect();
    assert_eq!(ids[0], ids[1]);
}

/// A missing image file draws the crossed placeholder box and its error
/// label instead of failing.
#[test]
fn missing_image_scene_still_renders() {
    let mut window = Window::new(Point::new(0.0, 0.0), 200, 200, "broken");
    let image = Image::open(Point::new(20.0, 20.0), "no/such/file.gif");
    assert!(image.is_placeholder());
    window.attach(image);

    let mut painter = Painter::new((200.0, 200.0));
    window.draw_shapes(&mut painter);
    let frame = painter.into_frame();

    assert!(frame.index_count() > 0, "the placeholder box is geometry");
    assert_eq!(frame.texts().len(), 1);
    assert!(frame.texts()[0].content.contains("cannot open"));
}

/// Dashed and dotted lines tessellate into several sub-segments while a
/// fill-less polygon contributes outline geometry only.
#[test]
fn line_styles_and_polygons() {
    let mut window = Window::new(Point::new(0.0, 0.0), 400, 400, "styles");

    let mut dashed = Line::new(Point::new(0.0, 10.0), Point::new(390.0, 10.0));
    dashed.set_stroke(Stroke::new(2.0, Color::BLACK).with_style(LineStyle::DashDot));
    window.attach(dashed);

    let mut triangle = Polygon::new();
    triangle.add(Point::new(50.0, 350.0)).unwrap();
    triangle.add(Point::new(350.0, 350.0)).unwrap();
    triangle.add(Point::new(200.0, 120.0)).unwrap();
    window.attach(triangle);

    let mut painter = Painter::new((400.0, 400.0));
    window.draw_shapes(&mut painter);
    let frame = painter.into_frame();

    // Many dashes -> many more vertices than the 4 a solid segment needs.
    assert!(frame.vertex_count() > 40);
    assert!(frame.texts().is_empty());
}

/// Attribute edits through the window are visible in the next recording,
/// mirroring a redraw after mutation.
#[test]
fn mutate_then_redraw() {
    let mut window = Window::new(Point::new(0.0, 0.0), 100, 100, "mutate");
    let id = window.attach(Line::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0)));

    let mut before = Painter::new((100.0, 100.0));
    window.draw_shapes(&mut before);
    let count_before = before.frame().vertex_count();

    window.shape_mut(id).unwrap().set_color(Color::INVISIBLE);
    let mut after = Painter::new((100.0, 100.0));
    window.draw_shapes(&mut after);

    assert!(count_before > 0);
    assert_eq!(after.frame().vertex_count(), 0);
}
