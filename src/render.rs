// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The loop that drives the chaos game.  It steps the engine, paints
//! the results, shows the framebuffer every so often, and stops when
//! the frontend says so.

use engine::ChaosGame;
use framebuffer::Framebuffer;
use rand::Rng;

/// Whatever is watching the render: a window, a terminal, a test.
pub trait Frontend {
    /// Called every `flush_every` steps, and once more when the loop
    /// ends on a step that wasn't already presented.
    fn present(&mut self, framebuffer: &Framebuffer, step: u64);

    /// Polled after every step.  Returning true ends the run.
    fn quit_requested(&mut self, step: u64) -> bool;
}

/// Run until the frontend asks to quit.  Returns the number of steps
/// taken.  Stopping between any two steps leaves the framebuffer
/// consistent.
pub fn run<R, F>(
    game: &mut ChaosGame<R>,
    framebuffer: &mut Framebuffer,
    frontend: &mut F,
    flush_every: u64,
) -> u64
where
    R: Rng,
    F: Frontend + ?Sized,
{
    let flush_every = flush_every.max(1);
    info!(
        "running chaos game on {} vertices with ratio {}",
        game.polygon().len(),
        game.ratio()
    );

    let mut step: u64 = 0;
    loop {
        step += 1;
        for (pixel, channel) in game.step().paints() {
            framebuffer.mark_pixel(pixel, channel);
        }

        if step % flush_every == 0 {
            debug!("flush at step {}", step);
            frontend.present(framebuffer, step);
        }

        if frontend.quit_requested(step) {
            break;
        }
    }

    if step % flush_every != 0 {
        frontend.present(framebuffer, step);
    }
    info!(
        "stopped after {} steps, {} pixels lit",
        step,
        framebuffer.lit_pixels()
    );
    step
}

/// A frontend with no display.  It quits after a fixed number of steps
/// and reports progress to the log each time it's shown the picture.
#[derive(Clone, Debug)]
pub struct HeadlessFrontend {
    limit: u64,
    presented: usize,
}

impl HeadlessFrontend {
    /// Stop after `limit` steps.
    pub fn new(limit: u64) -> Self {
        HeadlessFrontend {
            limit,
            presented: 0,
        }
    }

    /// How many times the framebuffer has been presented.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Frontend for HeadlessFrontend {
    fn present(&mut self, framebuffer: &Framebuffer, step: u64) {
        self.presented += 1;
        info!(
            "step {} of {}: {} pixels lit",
            step,
            self.limit,
            framebuffer.lit_pixels()
        );
    }

    fn quit_requested(&mut self, step: u64) -> bool {
        step >= self.limit
    }
}
