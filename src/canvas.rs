//! In-memory RGB canvas with the scan conversion the apple needs.
//!
//! Coordinates are integer pixels with the origin at the top-left corner.
//! Anything that falls outside the canvas is clipped.

use image::{Rgb, RgbImage};

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle an ellipse is inscribed within. `right` and `bottom` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost column.
    pub left: i32,
    /// Topmost row.
    pub top: i32,
    /// Rightmost column.
    pub right: i32,
    /// Bottom row.
    pub bottom: i32,
}

impl BoundingBox {
    /// Create a bounding box from its two corners.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
}

/// A filled primitive that can be drawn onto a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Ellipse inscribed in `bounds`, with an optional one-pixel outline.
    Ellipse {
        /// Bounding box of the ellipse.
        bounds: BoundingBox,
        /// Interior color.
        fill: Rgb<u8>,
        /// Outline color; `None` fills right up to the edge.
        outline: Option<Rgb<u8>>,
    },
    /// Filled triangle. Vertex winding does not matter.
    Triangle {
        /// The three corners.
        vertices: [Point; 3],
        /// Interior color.
        fill: Rgb<u8>,
    },
}

/// A fixed-size RGB bitmap.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled entirely with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self { pixels: RgbImage::from_pixel(width, height, background) }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying pixel buffer.
    #[must_use]
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Draw a shape on top of whatever is already on the canvas.
    pub fn draw(&mut self, shape: &Shape) {
        match *shape {
            Shape::Ellipse { bounds, fill, outline } => self.fill_ellipse(bounds, fill, outline),
            Shape::Triangle { vertices, fill } => self.fill_triangle(vertices, fill),
        }
    }

    /// Fill the ellipse inscribed in `bounds`.
    ///
    /// With an outline, the outermost one-pixel ring of the ellipse takes the
    /// outline color.
    pub fn fill_ellipse(&mut self, bounds: BoundingBox, fill: Rgb<u8>, outline: Option<Rgb<u8>>) {
        let cx = f64::from(bounds.left + bounds.right) / 2.0;
        let cy = f64::from(bounds.top + bounds.bottom) / 2.0;
        let a = f64::from(bounds.right - bounds.left + 1) / 2.0;
        let b = f64::from(bounds.bottom - bounds.top + 1) / 2.0;

        for y in self.clip_rows(bounds.top, bounds.bottom) {
            for x in self.clip_columns(bounds.left, bounds.right) {
                let (px, py) = (f64::from(x) - cx, f64::from(y) - cy);
                if !inside_ellipse(px, py, a, b) {
                    continue;
                }
                let color = match outline {
                    Some(ring) if !inside_ellipse(px, py, a - 1.0, b - 1.0) => ring,
                    _ => fill,
                };
                self.set(x, y, color);
            }
        }
    }

    /// Fill a triangle, edges included. Degenerate triangles draw nothing.
    pub fn fill_triangle(&mut self, vertices: [Point; 3], fill: Rgb<u8>) {
        let [v0, v1, v2] = vertices;
        if edge(v0, v1, v2) == 0 {
            return;
        }

        let min_x = v0.x.min(v1.x).min(v2.x);
        let max_x = v0.x.max(v1.x).max(v2.x);
        let min_y = v0.y.min(v1.y).min(v2.y);
        let max_y = v0.y.max(v1.y).max(v2.y);

        for y in self.clip_rows(min_y, max_y) {
            for x in self.clip_columns(min_x, max_x) {
                let p = Point::new(x, y);
                let w = [edge(v1, v2, p), edge(v2, v0, p), edge(v0, v1, p)];
                if w.iter().all(|&e| e >= 0) || w.iter().all(|&e| e <= 0) {
                    self.set(x, y, fill);
                }
            }
        }
    }

    fn clip_columns(&self, from: i32, to: i32) -> std::ops::RangeInclusive<i32> {
        from.max(0)..=to.min(last_index(self.pixels.width()))
    }

    fn clip_rows(&self, from: i32, to: i32) -> std::ops::RangeInclusive<i32> {
        from.max(0)..=to.min(last_index(self.pixels.height()))
    }

    fn set(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.pixels.width() && y < self.pixels.height() {
                self.pixels.put_pixel(x, y, color);
            }
        }
    }
}

/// Index of the last pixel along an axis of `len` pixels, or -1 when empty.
fn last_index(len: u32) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n - 1)
}

fn inside_ellipse(dx: f64, dy: f64, a: f64, b: f64) -> bool {
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    (dx / a).powi(2) + (dy / b).powi(2) <= 1.0
}

/// Twice the signed area of triangle `(a, b, p)`.
fn edge(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    (i64::from(b.x) - ax) * (i64::from(p.y) - ay) - (i64::from(b.y) - ay) * (i64::from(p.x) - ax)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn at(canvas: &Canvas, x: u32, y: u32) -> Rgb<u8> {
        *canvas.as_image().get_pixel(x, y)
    }

    #[test]
    fn new_canvas_is_uniform() {
        let canvas = Canvas::new(4, 3, WHITE);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.as_image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn ellipse_without_outline() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.fill_ellipse(BoundingBox::new(2, 2, 12, 12), RED, None);
        assert_eq!(at(&canvas, 7, 7), RED);
        assert_eq!(at(&canvas, 2, 7), RED);
        assert_eq!(at(&canvas, 2, 2), WHITE);
        assert_eq!(at(&canvas, 13, 7), WHITE);
    }

    #[test]
    fn ellipse_outline_ring() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.fill_ellipse(BoundingBox::new(2, 2, 12, 12), RED, Some(BLUE));
        assert_eq!(at(&canvas, 2, 7), BLUE);
        assert_eq!(at(&canvas, 12, 7), BLUE);
        assert_eq!(at(&canvas, 7, 2), BLUE);
        assert_eq!(at(&canvas, 3, 7), RED);
        assert_eq!(at(&canvas, 7, 7), RED);
    }

    #[test]
    fn ellipse_clipped_at_edges() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_ellipse(BoundingBox::new(-10, -10, 5, 5), RED, None);
        assert_eq!(at(&canvas, 0, 0), RED);
        assert_eq!(at(&canvas, 9, 9), WHITE);
    }

    #[test]
    fn ellipse_entirely_off_canvas() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_ellipse(BoundingBox::new(50, 50, 60, 60), RED, Some(BLUE));
        assert!(canvas.as_image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn triangle_fills_interior_and_edges() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        let tri = [Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)];
        canvas.fill_triangle(tri, RED);
        assert_eq!(at(&canvas, 2, 2), RED);
        assert_eq!(at(&canvas, 0, 0), RED);
        assert_eq!(at(&canvas, 5, 5), RED);
        assert_eq!(at(&canvas, 6, 6), WHITE);
    }

    #[test]
    fn triangle_winding_does_not_matter() {
        let cw = [Point::new(1, 1), Point::new(15, 4), Point::new(6, 17)];
        let ccw = [cw[0], cw[2], cw[1]];

        let mut a = Canvas::new(20, 20, WHITE);
        a.fill_triangle(cw, RED);
        let mut b = Canvas::new(20, 20, WHITE);
        b.fill_triangle(ccw, RED);

        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
        assert_eq!(at(&a, 7, 7), RED);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_triangle([Point::new(0, 0), Point::new(4, 4), Point::new(8, 8)], RED);
        assert!(canvas.as_image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn later_shapes_paint_over_earlier_ones() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.draw(&Shape::Ellipse {
            bounds: BoundingBox::new(0, 0, 9, 9),
            fill: RED,
            outline: None,
        });
        canvas.draw(&Shape::Triangle {
            vertices: [Point::new(3, 3), Point::new(6, 3), Point::new(3, 6)],
            fill: BLUE,
        });
        assert_eq!(at(&canvas, 4, 4), BLUE);
        assert_eq!(at(&canvas, 5, 7), RED);
    }
}
