// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The regular polygon whose corners the chaos game jumps toward.

use canvas::{Canvas, Point};
use num::Complex;

/// Gap, in pixels, between the circumscribing circle and the left and
/// right edges of the canvas.
pub const MARGIN: f64 = 10.0;

/// Lays `sides` vertices evenly around a circle centered on the
/// canvas, with a radius of half the canvas width less the margin.
/// Angles are measured from the y axis: vertex 0 sits at 180 degrees,
/// on the vertical line through the center, and each following vertex
/// is 360/n degrees further on.
///
/// One- and two-sided "polygons" come back as one or two points; they
/// make for a dull picture but nothing breaks.  Zero sides gives an
/// empty polygon.
pub fn build_polygon(canvas: &Canvas, sides: usize) -> Vec<Point> {
    let delta_angle = 360.0 / (sides as f64);
    let radius = (canvas.width as f64) / 2.0 - MARGIN;
    let center = canvas.center();

    (0..sides)
        .map(|i| {
            let angle = (180.0 + (i as f64) * delta_angle).to_radians();
            Complex::new(
                center.re + radius * angle.sin(),
                center.im + radius * angle.cos(),
            )
        })
        .collect()
}
