// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type for everything that can go wrong before or
//! after the render loop.  Nothing inside a single step can fail.

use std::io;

/// Result alias used throughout the crate.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Everything the renderer can complain about.
#[derive(Debug, Fail)]
pub enum Error {
    /// A calculation was asked for a value it has no answer for, such
    /// as the optimal ratio of a polygon with fewer than three sides.
    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The run parameters were rejected before the loop started.
    #[fail(display = "Invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// The framebuffer could not be written out.
    #[fail(display = "Could not export image: {}", _0)]
    Export(String),

    /// Reading from or writing to the console failed.
    #[fail(display = "IO error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
