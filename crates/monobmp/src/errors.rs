/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use monobmp_core::bytestream::ByteIoError;

use crate::common::BmpCompression;

/// Errors that can occur while decoding a monochrome BMP
///
/// All of them are fatal, the decoder never hands out
/// a partially decoded bitmap
#[non_exhaustive]
pub enum BmpMonoErrors {
    /// The file/bytes do not start with `BM`,
    /// carries the two bytes that were found instead
    BadMagicNumber([u8; 2]),
    /// The information header size is not one of 12, 40, 108 or 124
    UnsupportedHeaderSize(u32),
    /// Bits per pixel is not 1
    UnsupportedPixelDepth(u16),
    /// The compression field is not 0 (uncompressed)
    UnsupportedCompression(u32),
    /// Width is zero or negative
    InvalidWidth(i32),
    /// The stream ended part way through a row
    TruncatedData {
        /// Row (in file order) that could not be completed
        row:      usize,
        /// Bytes needed for the row
        expected: usize,
        /// Bytes actually read
        found:    usize
    },
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    IoErrors(ByteIoError)
}

impl Debug for BmpMonoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadMagicNumber(bytes) => {
                writeln!(
                    f,
                    "Unexpected magic number at beginning of BMP file: {:?}, expected BM",
                    bytes
                )
            }
            Self::UnsupportedHeaderSize(size) => {
                writeln!(f, "Unhandled header size: {size}")
            }
            Self::UnsupportedPixelDepth(depth) => {
                writeln!(
                    f,
                    "Only monochrome BMP files are handled, got {depth} bits per pixel"
                )
            }
            Self::UnsupportedCompression(code) => {
                writeln!(
                    f,
                    "Only uncompressed BMP files are handled, got compression {code} ({:?})",
                    BmpCompression::from_u32(*code)
                )
            }
            Self::InvalidWidth(width) => {
                writeln!(f, "Can't handle width: {width}")
            }
            Self::TruncatedData {
                row,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Truncated pixel data at row {row}, expected {expected} bytes but found {found}"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpMonoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpMonoErrors {}

impl From<ByteIoError> for BmpMonoErrors {
    fn from(value: ByteIoError) -> Self {
        BmpMonoErrors::IoErrors(value)
    }
}
