use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur constructing or reading a raster
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("invalid raster dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} raster")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),
}

/// An RGB color. Parses from and renders as a `#rrggbb` hex literal,
/// which is also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = RasterError;

    /// Accepts six hex digits with an optional leading `#`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RasterError::InvalidColor(s.to_owned()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| RasterError::InvalidColor(s.to_owned()))
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(de::Error::custom)
    }
}

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One absolute-position color assignment. Tools emit these in ordered
/// batches; later edits to the same coordinate win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelEdit {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl PixelEdit {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// An immutable width x height grid of colors. Every mutation goes through
/// [`Raster::draw`], which returns a new raster and leaves the original
/// untouched, so rasters can be shared and stacked for undo freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Create a raster filled uniformly with `color`.
    pub fn empty(width: i32, height: i32, color: Color) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Read the color at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Color, RasterError> {
        if !self.in_bounds(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[(x + y * self.width) as usize])
    }

    /// Apply a batch of edits, returning a new raster of the same
    /// dimensions. Edits are applied in order, so later edits to the same
    /// coordinate overwrite earlier ones. Out-of-bounds edits are silently
    /// skipped: the tools never produce them, and skipping keeps the
    /// primitive total for callers that clip elsewhere.
    pub fn draw(&self, batch: &[PixelEdit]) -> Raster {
        let mut pixels = self.pixels.clone();
        for edit in batch {
            if self.in_bounds(edit.x, edit.y) {
                pixels[(edit.x + edit.y * self.width) as usize] = edit.color;
            }
        }
        Raster {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Iterate all pixels in row-major order together with their coordinates.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &color)| {
            let i = i as i32;
            (i % self.width, i / self.width, color)
        })
    }

    /// Rebuild a raster from a row-major pixel buffer.
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Color>) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 || pixels.len() != (width * height) as usize {
            return Err(RasterError::InvalidDimension { width, height });
        }
        Ok(Self { width, height, pixels })
    }
}
