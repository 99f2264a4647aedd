// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel store the chaos game paints into.  Each pixel holds
//! three 8-bit color planes, and each plane only ever gets brighter.

use canvas::{Canvas, Pixel};
use error::{Error, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use num::clamp;
use std::path::Path;

/// How much a single visit brightens a channel.
pub const INCREMENT: u16 = 4;

/// One of the three color planes.  Each has its own trajectory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Plane 0.
    Red,
    /// Plane 1.
    Green,
    /// Plane 2.
    Blue,
}

impl Channel {
    /// All three channels, in plane order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The plane offset of this channel within a pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A width x height grid of RGB pixels, black to start with.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    canvas: Canvas,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    /// A black framebuffer the size of the canvas.
    pub fn new(canvas: Canvas) -> Self {
        Framebuffer {
            canvas,
            pixels: vec![[0, 0, 0]; canvas.len()],
        }
    }

    /// The canvas this framebuffer covers.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn offset(&self, pixel: Pixel) -> Option<usize> {
        if pixel.0 < self.canvas.width && pixel.1 < self.canvas.height {
            Some(pixel.1 * self.canvas.width + pixel.0)
        } else {
            None
        }
    }

    /// Brighten one channel of one pixel by `INCREMENT`, saturating at
    /// 255.  The other two channels are left alone.
    ///
    /// Callers hand in pixels that passed the canvas's inclusive bounds
    /// check.  That check admits the column just past the right edge and
    /// the row just past the bottom; there's no storage there, so those
    /// paints fall off the edge.
    pub fn mark_pixel(&mut self, pixel: Pixel, channel: Channel) {
        if let Some(offset) = self.offset(pixel) {
            let plane = &mut self.pixels[offset][channel.index()];
            *plane = clamp(u16::from(*plane) + INCREMENT, 0, 255) as u8;
        }
    }

    /// The three channel values of a pixel, or black off the edge.
    pub fn get(&self, pixel: Pixel) -> [u8; 3] {
        match self.offset(pixel) {
            Some(offset) => self.pixels[offset],
            None => [0, 0, 0],
        }
    }

    /// The number of pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != [0, 0, 0]).count()
    }

    /// Copy the framebuffer into an image.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.canvas.width as u32, self.canvas.height as u32, |x, y| {
            Rgb(self.get(Pixel(x as usize, y as usize)))
        })
    }

    /// Write the framebuffer to a file.  The format follows the file's
    /// extension.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;
        info!("wrote {}", path.display());
        Ok(())
    }
}
