//! The apple: fixed canvas size, colors, and the ordered list of shapes.

use image::Rgb;

use crate::canvas::{BoundingBox, Canvas, Point, Shape};

/// Canvas width in pixels.
pub const WIDTH: u32 = 200;

/// Canvas height in pixels.
pub const HEIGHT: u32 = 250;

/// Canvas background.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Green body with a darker rim.
pub const BODY: Shape = Shape::Ellipse {
    bounds: BoundingBox::new(30, 60, 170, 190),
    fill: Rgb([0, 150, 0]),
    outline: Some(Rgb([0, 100, 0])),
};

/// Leaf on top of the body.
pub const LEAF: Shape = Shape::Triangle {
    vertices: [Point::new(90, 50), Point::new(110, 30), Point::new(120, 60)],
    fill: Rgb([34, 139, 34]),
};

/// Pale highlight on the upper left of the body.
pub const HIGHLIGHT: Shape = Shape::Ellipse {
    bounds: BoundingBox::new(80, 70, 100, 90),
    fill: Rgb([220, 255, 220]),
    outline: None,
};

/// Shapes in painting order. Each one is composited over the ones before it,
/// so the body must stay first.
pub const APPLE: [(&str, Shape); 3] = [("body", BODY), ("leaf", LEAF), ("highlight", HIGHLIGHT)];

/// Paint the apple onto a fresh canvas.
#[must_use]
pub fn render(verbose: bool) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    if verbose {
        eprintln!("Canvas: {}x{}", canvas.width(), canvas.height());
    }

    for (name, shape) in &APPLE {
        if verbose {
            eprintln!("Drawing {name}: {shape:?}");
        }
        canvas.draw(shape);
    }

    canvas
}
