// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chaos game itself.
//!
//! Three points wander around the canvas, one per color channel.  On
//! every step a vertex of the polygon is chosen, and each point moves
//! toward it by the contraction ratio plus a little channel-specific
//! jitter.  The jitter is what keeps the three channels from drawing
//! exactly the same picture: the red plane barely wobbles, the blue
//! plane wobbles four times as much, and where they disagree the image
//! picks up color.

use canvas::{Canvas, Pixel, Point};
use error::{Error, Result};
use framebuffer::{Channel, Framebuffer};
use num::Complex;
use rand::Rng;
use selector::VertexSelector;

/// Upper bound of the random amount added to the ratio, per channel.
pub const CHANNEL_JITTER: [f64; 3] = [0.02, 0.04, 0.08];

/// A wandering point and how much it wobbles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Where the point is now.
    pub point: Point,
    /// The jitter drawn each step is uniform in `[0, jitter)`.
    pub jitter: f64,
}

/// What one step produced: for each channel, the pixel to brighten,
/// if the point landed on the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Step(pub [Option<Pixel>; 3]);

impl Step {
    /// The paint events of this step, in channel order.
    pub fn paints<'a>(&'a self) -> impl Iterator<Item = (Pixel, Channel)> + 'a {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(c, pixel)| pixel.map(|p| (p, Channel::ALL[c])))
    }
}

/// Owns everything a run needs: the polygon, the ratio, the three
/// trajectories and the source of randomness.  Nothing in here changes
/// shape once built; only the trajectory points move.
pub struct ChaosGame<R: Rng> {
    canvas: Canvas,
    polygon: Vec<Point>,
    ratio: f64,
    trajectories: [Trajectory; 3],
    selector: VertexSelector,
    rng: R,
}

impl<R: Rng> ChaosGame<R> {
    /// Requires a canvas, the polygon to play on, the contraction ratio,
    /// and the random number generator.  The trajectories start at
    /// random whole-pixel positions anywhere on the canvas, edges
    /// included.
    pub fn new(canvas: Canvas, polygon: Vec<Point>, ratio: f64, mut rng: R) -> Result<Self> {
        if polygon.is_empty() {
            return Err(Error::InvalidConfig(
                "The polygon needs at least one vertex.".to_string(),
            ));
        }
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "The ratio must lie strictly between 0 and 1, got {}.",
                ratio
            )));
        }

        let xs: Vec<usize> = (0..3).map(|_| rng.gen_range(0, canvas.width + 1)).collect();
        let ys: Vec<usize> = (0..3).map(|_| rng.gen_range(0, canvas.height + 1)).collect();
        let mut trajectories = [Trajectory {
            point: Complex::new(0.0, 0.0),
            jitter: 0.0,
        }; 3];
        for (c, trajectory) in trajectories.iter_mut().enumerate() {
            trajectory.point = Complex::new(xs[c] as f64, ys[c] as f64);
            trajectory.jitter = CHANNEL_JITTER[c];
        }

        Ok(ChaosGame {
            canvas,
            polygon,
            ratio,
            trajectories,
            selector: VertexSelector::unbounded(),
            rng,
        })
    }

    /// Replace the vertex selector, e.g. with one that caps its retries.
    pub fn with_selector(mut self, selector: VertexSelector) -> Self {
        self.selector = selector;
        self
    }

    /// The canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The polygon's vertices.
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// The contraction ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The three trajectories, in channel order.
    pub fn trajectories(&self) -> &[Trajectory; 3] {
        &self.trajectories
    }

    /// Advance all three points once.  The vertex is shared; the jitter
    /// is not.
    pub fn step(&mut self) -> Step {
        let vertex = self.polygon[self.selector.next_index(&mut self.rng, self.polygon.len())];
        let mut step = Step::default();
        for (c, trajectory) in self.trajectories.iter_mut().enumerate() {
            let jitter = self.rng.gen::<f64>() * trajectory.jitter;
            trajectory.point += (vertex - trajectory.point) * (self.ratio + jitter);
            step.0[c] = self.canvas.point_to_pixel(&trajectory.point);
        }
        step
    }

    /// Run `steps` steps, painting everything they produce.
    pub fn advance(&mut self, framebuffer: &mut Framebuffer, steps: u64) {
        for _ in 0..steps {
            for (pixel, channel) in self.step().paints() {
                framebuffer.mark_pixel(pixel, channel);
            }
        }
    }
}
