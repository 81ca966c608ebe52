/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

pub(crate) const BITMAPCOREHEADER_SIZE: u32 = 12;
pub(crate) const BITMAPINFOHEADER_SIZE: u32 = 40;
pub(crate) const BITMAPV4HEADER_SIZE: u32 = 108;
pub(crate) const BITMAPV5HEADER_SIZE: u32 = 124;

/// Compression codes found in the information header.
///
/// Only [`BmpCompression::RGB`] (no compression) can be decoded,
/// the rest exist so that errors can name what was found
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    JPEG,
    PNG,
    ALPHABITFIELDS
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            4 => Some(BmpCompression::JPEG),
            5 => Some(BmpCompression::PNG),
            6 => Some(BmpCompression::ALPHABITFIELDS),
            _ => None
        }
    }
}

/// The 14 byte header at the start of every BMP file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FileHeader {
    /// Always `BM` for a header that was accepted
    pub magic:       [u8; 2],
    /// Total file size as recorded in the file, not checked against the stream
    pub file_size:   u32,
    /// Absolute position of the first pixel row
    pub data_offset: u32
}

/// Fields shared by the 40, 108 and 124 byte information headers.
///
/// The V4 and V5 headers carry colour space data after these,
/// which a monochrome decoder has no use for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InfoFields {
    pub width:          i32,
    pub height:         i32,
    pub planes:         u16,
    pub bits_per_pixel: u16,
    pub compression:    u32
}

/// The information header, keyed by its leading size field
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InfoHeader {
    /// `BITMAPCOREHEADER`, 12 bytes, OS/2 and Windows 2.x
    ///
    /// Has no compression field, it is always uncompressed
    Core {
        width:          u16,
        height:         u16,
        planes:         u16,
        bits_per_pixel: u16
    },
    /// `BITMAPINFOHEADER`, 40 bytes
    Info(InfoFields),
    /// `BITMAPV4HEADER`, 108 bytes
    V4(InfoFields),
    /// `BITMAPV5HEADER`, 124 bytes
    V5(InfoFields)
}

impl InfoHeader {
    /// Size of the header in bytes, as stored in the file
    pub const fn size(&self) -> u32 {
        match self {
            InfoHeader::Core { .. } => BITMAPCOREHEADER_SIZE,
            InfoHeader::Info(_) => BITMAPINFOHEADER_SIZE,
            InfoHeader::V4(_) => BITMAPV4HEADER_SIZE,
            InfoHeader::V5(_) => BITMAPV5HEADER_SIZE
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            InfoHeader::Core { .. } => "BITMAPCOREHEADER",
            InfoHeader::Info(_) => "BITMAPINFOHEADER",
            InfoHeader::V4(_) => "BITMAPV4HEADER",
            InfoHeader::V5(_) => "BITMAPV5HEADER"
        }
    }

    /// Number of colour planes, 1 in every valid file
    pub const fn planes(&self) -> u16 {
        match self {
            InfoHeader::Core { planes, .. } => *planes,
            InfoHeader::Info(fields) | InfoHeader::V4(fields) | InfoHeader::V5(fields) => {
                fields.planes
            }
        }
    }

    /// The parts of the header that drive decoding
    pub fn geometry(&self) -> Geometry {
        match *self {
            InfoHeader::Core {
                width,
                height,
                bits_per_pixel,
                ..
            } => Geometry {
                width: i32::from(width),
                height: i32::from(height),
                bits_per_pixel,
                compression: 0
            },
            InfoHeader::Info(fields) | InfoHeader::V4(fields) | InfoHeader::V5(fields) => {
                Geometry {
                    width:          fields.width,
                    height:         fields.height,
                    bits_per_pixel: fields.bits_per_pixel,
                    compression:    fields.compression
                }
            }
        }
    }
}

/// Image geometry and encoding, independent of the header variant
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub width:          i32,
    /// Positive for bottom-up storage, negative for top-down
    pub height:         i32,
    pub bits_per_pixel: u16,
    pub compression:    u32
}

impl Geometry {
    /// Whether the first row in the file is the bottom row of the image
    pub const fn is_bottom_up(&self) -> bool {
        self.height > 0
    }

    /// Number of rows in the image
    pub const fn rows(&self) -> usize {
        self.height.unsigned_abs() as usize
    }
}

/// Everything read before the pixel data
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader
}

impl BmpHeaders {
    pub fn geometry(&self) -> Geometry {
        self.info.geometry()
    }
}

/// A field by field dump of the headers, for debugging
impl Display for BmpHeaders {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let geometry = self.geometry();

        writeln!(
            f,
            "Magic number:  {}{}",
            char::from(self.file.magic[0]),
            char::from(self.file.magic[1])
        )?;
        writeln!(f, "File size:     {}", self.file.file_size)?;
        writeln!(f, "Data offset:   {}", self.file.data_offset)?;
        writeln!(f, "Header Size:   {} ({})", self.info.size(), self.info.name())?;
        writeln!(f, "Width:         {}", geometry.width)?;
        // negative height means rows are stored top to bottom
        writeln!(f, "Height:        {}", geometry.height)?;
        writeln!(f, "Bits/Pixel:    {}", geometry.bits_per_pixel)?;
        writeln!(f, "Compression:   {}", geometry.compression)
    }
}
