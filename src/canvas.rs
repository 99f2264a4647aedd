//! Contains the Canvas struct, which describes the integral plane the
//! chaos game is drawn on, with an origin at 0,0.  Unlike the
//! Mandelbrot family there's no second, complex plane to map into:
//! the polygon is built directly in pixel space, so a point only
//! needs to be truncated to find its pixel.
use num::Complex;

/// Describes the x, y of a pixel on the canvas.  Column first, then
/// row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub usize, pub usize);

/// We don't need a Point, as a single Complex number is a Point.  The
/// real part is x, the imaginary part is y.
pub type Point = Complex<f64>;

/// Describes the width and height of the integral plane.  All values
/// are assumed to be non-negative integers, so the lower-left-hand
/// corner is not included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Canvas {
    /// Constructor.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas { width, height }
    }

    /// The total number of pixels on the canvas.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the canvas has no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The middle of the canvas, in point space.
    pub fn center(&self) -> Point {
        Complex::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Given a point, truncate it to the pixel underneath it.  The
    /// bounds are inclusive on both ends, so a point sitting exactly
    /// on the right or bottom edge still maps to a pixel (one that
    /// the framebuffer itself doesn't store; see
    /// `Framebuffer::mark_pixel`).
    pub fn point_to_pixel(&self, point: &Point) -> Option<Pixel> {
        if point.re < 0.0
            || point.re > (self.width as f64)
            || point.im < 0.0
            || point.im > (self.height as f64)
        {
            return None;
        }
        Some(Pixel(point.re as usize, point.im as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_to_pixel_truncates() {
        let canvas = Canvas::new(5, 5);
        assert_eq!(canvas.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(0, 0)));
        assert_eq!(canvas.point_to_pixel(&Complex::new(2.9, 2.1)), Some(Pixel(2, 2)));
        assert_eq!(canvas.point_to_pixel(&Complex::new(4.99, 0.5)), Some(Pixel(4, 0)));
    }

    #[test]
    fn point_to_pixel_is_inclusive_on_far_edges() {
        let canvas = Canvas::new(800, 800);
        assert_eq!(
            canvas.point_to_pixel(&Complex::new(800.0, 800.0)),
            Some(Pixel(800, 800))
        );
    }

    #[test]
    fn point_to_pixel_rejects_outside_points() {
        let canvas = Canvas::new(800, 600);
        assert_eq!(canvas.point_to_pixel(&Complex::new(-0.01, 10.0)), None);
        assert_eq!(canvas.point_to_pixel(&Complex::new(10.0, -0.01)), None);
        assert_eq!(canvas.point_to_pixel(&Complex::new(800.01, 10.0)), None);
        assert_eq!(canvas.point_to_pixel(&Complex::new(10.0, 600.01)), None);
    }

    #[test]
    fn empty_canvases_are_empty() {
        assert!(Canvas::new(0, 10).is_empty());
        assert!(Canvas::new(10, 0).is_empty());
        assert!(!Canvas::new(1, 1).is_empty());
        assert_eq!(Canvas::new(800, 600).len(), 480_000);
    }
}
