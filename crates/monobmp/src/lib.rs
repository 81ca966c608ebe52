/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A monochrome BMP decoder
//!
//! This crate decodes 1 bit per pixel BMP images into a row-major
//! bit matrix, ready to be drawn on a monochrome display.
//!
//! # Features
//! - `no_std` with `alloc` when default features are off
//! - `std`: decode straight from `std::io::Cursor`, `BufReader` and `File`
//! - `log`: trace header fields and warn on odd files through the `log` crate
//!
//! # Supported formats
//! - Uncompressed 1 bit images
//! - `BITMAPCOREHEADER` (12 bytes), `BITMAPINFOHEADER` (40 bytes),
//!   `BITMAPV4HEADER` (108 bytes) and `BITMAPV5HEADER` (124 bytes)
//! - Bottom-up (positive height) and top-down (negative height) storage
//!
//! # Unsupported formats
//! - Any depth other than 1 bit
//! - RLE and every other compression
//!
//! The colour table is not interpreted, pixels come out as `0` or `1`.
//!
//! # Bit order
//! By default the least significant bit of a byte is its leftmost pixel.
//! Files that put the leftmost pixel in the most significant bit can be read by
//! setting [`BitOrder::MsbFirst`](monobmp_core::bit_order::BitOrder) in the
//! decoder options.

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use monobmp_core;

pub use crate::bitmap::DecodedBitmap;
pub use crate::common::{BmpCompression, BmpHeaders, FileHeader, Geometry, InfoFields, InfoHeader};
pub use crate::decoder::{decode_mono_bmp, probe_bmp, BmpMonoDecoder};
pub use crate::errors::BmpMonoErrors;
pub use crate::utils::row_stride;

mod bitmap;
mod common;
mod decoder;
mod errors;
mod utils;
