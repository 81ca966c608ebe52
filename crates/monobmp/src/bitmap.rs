/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use core::ops::Index;

/// A decoded monochrome image.
///
/// Pixels are stored row-major, one byte per pixel holding `0` or `1`.
/// Row 0 is the top of the image and column 0 its left edge, whatever
/// order the rows were stored in the file.
///
/// A rendering surface can index it by `(x, y)`
/// ```
/// use monobmp::DecodedBitmap;
///
/// fn draw(bitmap: &DecodedBitmap, mut set_pixel: impl FnMut(usize, usize, u8)) {
///     for y in 0..bitmap.height() {
///         for x in 0..bitmap.width() {
///             set_pixel(x, y, bitmap[(x, y)]);
///         }
///     }
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedBitmap {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl DecodedBitmap {
    /// `pixels.len()` must be `width * height`
    pub(crate) fn new(width: usize, height: usize, pixels: Vec<u8>) -> DecodedBitmap {
        debug_assert_eq!(pixels.len(), width * height);

        DecodedBitmap {
            width,
            height,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, i.e. the absolute value of the header height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the pixel at column `x` of row `y`,
    /// or `None` if that is outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x])
    }

    /// Return row `y`, `width` pixels long
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunks_exact panics on zero, width is never zero for a decoded image
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Render the bitmap as text, one line per row.
    ///
    /// Each line starts with the row number, set pixels are drawn
    /// as `1` and clear ones as a space
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.height * (self.width + 5));

        for (y, row) in self.rows().enumerate() {
            // writing to a String cannot fail
            let _ = write!(text, "{:03}:", y);
            text.extend(row.iter().map(|&p| if p > 0 { '1' } else { ' ' }));
            text.push('\n');
        }
        text
    }
}

impl Index<(usize, usize)> for DecodedBitmap {
    type Output = u8;

    /// Index by `(x, y)`, panics when out of bounds
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for a {}x{} bitmap",
            self.width,
            self.height
        );
        &self.pixels[y * self.width + x]
    }
}
