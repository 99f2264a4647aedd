// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The contraction ratio for which the copies of the polygon that the
//! chaos game produces just touch, without gaps and without overlap.

use error::{Error, Result};
use std::f64::consts::PI;

/// The optimal ratio is
///
/// ```text
/// r = (1 + 2a) / (2 + 2a)
/// ```
///
/// where `a` is the sum of `cos(i(π - θ))` for `i` in `1..=n/4`, and
/// `θ = (n - 2)π/n` is the interior angle of the polygon.  For the
/// triangle there is nothing to sum and the answer is one half.
///
/// Fewer than three sides has no interior angle worth speaking of and
/// is refused.
pub fn optimal_ratio(sides: usize) -> Result<f64> {
    if sides <= 2 {
        return Err(Error::InvalidArgument(format!(
            "Number of sides must be greater than 2, got {}.",
            sides
        )));
    }

    let n = sides as f64;
    let theta = (n - 2.0) * PI / n;
    let protruding = sides / 4;

    let a: f64 = (1..=protruding)
        .map(|i| ((i as f64) * (PI - theta)).cos())
        .sum();
    Ok((1.0 + 2.0 * a) / (2.0 + 2.0 * a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_fewer_than_three_sides() {
        for sides in 0..3 {
            match optimal_ratio(sides) {
                Err(Error::InvalidArgument(_)) => {}
                other => panic!("{} sides gave {:?}", sides, other),
            }
        }
    }

    #[test]
    fn always_strictly_between_zero_and_one() {
        for sides in 3..=100 {
            let r = optimal_ratio(sides).unwrap();
            assert!(r > 0.0 && r < 1.0, "{} sides gave {}", sides, r);
        }
    }

    #[test]
    fn triangle_and_square_are_one_half() {
        assert_eq!(optimal_ratio(3).unwrap(), 0.5);
        assert!((optimal_ratio(4).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn hexagon_is_two_thirds() {
        // cos(60°) = 1/2, so r = 2 / 3.
        assert!((optimal_ratio(6).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn pentagon_matches_the_golden_ratio_form() {
        // cos(72°) = (√5 - 1) / 4
        let a = (5.0_f64.sqrt() - 1.0) / 4.0;
        let expected = (1.0 + 2.0 * a) / (2.0 + 2.0 * a);
        assert!((optimal_ratio(5).unwrap() - expected).abs() < 1e-12);
    }
}
