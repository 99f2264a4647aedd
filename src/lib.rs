#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Chaos game renderer
//!
//! The chaos game is about the simplest way there is to draw a
//! fractal.  Take a regular polygon and a point anywhere inside it.
//! Pick a corner of the polygon at random and move the point some
//! fixed fraction of the way toward it; plot where it lands; repeat.
//! For a triangle and a ratio of one half, the points that get plotted
//! trace out the Sierpinski triangle.  Other polygons need other
//! ratios, and there's a closed form for the ratio at which the copies
//! of the polygon just touch (see `ratio::optimal_ratio`).
//!
//! Rather than plotting one point, this renderer runs three at once,
//! one per color channel, and each one adds a different amount of
//! random wobble to the ratio.  Every visit brightens its channel of
//! the pixel a little, so the picture builds up like a long exposure,
//! and the places where the three channels disagree come out colored.

extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate image;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod framebuffer;
pub mod polygon;
pub mod ratio;
pub mod render;
pub mod selector;

pub use canvas::{Canvas, Pixel, Point};
pub use config::{Config, RatioMode};
pub use engine::{ChaosGame, Step, Trajectory};
pub use error::{Error, Result};
pub use framebuffer::{Channel, Framebuffer};
pub use polygon::build_polygon;
pub use ratio::optimal_ratio;
pub use render::{run, Frontend, HeadlessFrontend};
pub use selector::VertexSelector;
