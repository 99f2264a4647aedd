// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Run parameters, and the checks they have to pass before the loop
//! is allowed to start.  Once a run begins the engine never sees a bad
//! value.

use canvas::Canvas;
use engine::ChaosGame;
use error::{Error, Result};
use polygon::build_polygon;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratio::optimal_ratio;
use selector::VertexSelector;
use std::path::PathBuf;
use std::str::FromStr;

/// Given a string and a separator, returns the two values separated by
/// the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// How the contraction ratio is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RatioMode {
    /// Use this ratio as given.
    Fixed(f64),
    /// Work out the optimal ratio for the polygon.
    Optimal,
}

impl RatioMode {
    /// The ratio to use for a polygon with `sides` sides.
    pub fn resolve(self, sides: usize) -> Result<f64> {
        match self {
            RatioMode::Fixed(r) => Ok(r),
            RatioMode::Optimal => optimal_ratio(sides),
        }
    }
}

impl FromStr for RatioMode {
    type Err = Error;

    /// Either the word `optimal`, or a number strictly between 0 and 1.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("optimal") {
            return Ok(RatioMode::Optimal);
        }
        match f64::from_str(s) {
            Ok(r) if r > 0.0 && r < 1.0 => Ok(RatioMode::Fixed(r)),
            Ok(r) => Err(Error::InvalidConfig(format!(
                "Ratio must lie strictly between 0 and 1, got {}",
                r
            ))),
            Err(_) => Err(Error::InvalidConfig(format!(
                "Ratio must be a number or 'optimal', got '{}'",
                s
            ))),
        }
    }
}

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Number of polygon vertices.
    pub sides: usize,
    /// How to pick the contraction ratio.
    pub ratio: RatioMode,
    /// Seed for the random number generator.  None seeds from the
    /// operating system.
    pub seed: Option<u64>,
    /// How many steps to run before stopping.
    pub steps: u64,
    /// Present the framebuffer every this many steps.
    pub flush_every: u64,
    /// Where the finished image goes.
    pub output: PathBuf,
    /// Upper bound on vertex redraws per step.  None never gives up.
    pub retry_cap: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800,
            height: 800,
            sides: 3,
            ratio: RatioMode::Optimal,
            seed: None,
            steps: 1_000_000,
            flush_every: 5000,
            output: PathBuf::from("simulation.jpg"),
            retry_cap: None,
        }
    }
}

impl Config {
    /// Check everything that can be checked without running.
    pub fn validate(&self) -> Result<()> {
        if self.sides == 0 {
            return Err(Error::InvalidConfig(
                "The polygon needs at least one side.".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "Canvas size {}x{} has no area.",
                self.width, self.height
            )));
        }
        // The image encoder takes u32 sides, and the engine draws start
        // points from [0, side + 1).
        let max_side = u32::MAX as usize;
        if self.width > max_side
            || self.height > max_side
            || self.width.checked_add(1).is_none()
            || self.height.checked_add(1).is_none()
            || self.width.checked_mul(self.height).is_none()
        {
            return Err(Error::InvalidConfig(format!(
                "Canvas size {}x{} is too large.",
                self.width, self.height
            )));
        }
        if self.steps == 0 {
            return Err(Error::InvalidConfig(
                "Step count must be at least 1.".to_string(),
            ));
        }
        if self.flush_every == 0 {
            return Err(Error::InvalidConfig(
                "Flush interval must be at least 1.".to_string(),
            ));
        }
        if let RatioMode::Fixed(r) = self.ratio {
            if !(r > 0.0 && r < 1.0) {
                return Err(Error::InvalidConfig(format!(
                    "Ratio must lie strictly between 0 and 1, got {}",
                    r
                )));
            }
        }
        Ok(())
    }

    /// The canvas described by the width and height.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// The contraction ratio this configuration asks for.
    pub fn ratio(&self) -> Result<f64> {
        self.ratio.resolve(self.sides)
    }

    /// Validate, then build the engine, seeded as configured.
    pub fn game(&self) -> Result<ChaosGame<StdRng>> {
        self.validate()?;
        let ratio = self.ratio()?;
        let canvas = self.canvas();
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selector = match self.retry_cap {
            Some(cap) => VertexSelector::with_retry_cap(cap),
            None => VertexSelector::unbounded(),
        };
        Ok(ChaosGame::new(canvas, build_polygon(&canvas, self.sides), ratio, rng)?
            .with_selector(selector))
    }
}
