/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// A monochrome BMP is laid out as
//
// - a 14 byte file header: the magic number ("BM"), file size, 4 reserved
//   bytes and the offset to the pixel data.
// - an information header whose first u32 is its own size. The size is the
//   only thing that tells the versions apart:
//     12  BITMAPCOREHEADER  u16 width, u16 height, u16 planes, u16 bpp
//     40  BITMAPINFOHEADER  i32 width, i32 height, u16 planes, u16 bpp, u32 compression, ...
//     108 BITMAPV4HEADER    same start as the 40 byte header, then masks and colour space
//     124 BITMAPV5HEADER    same start as the 40 byte header, then masks, colour space and profile
// - a colour table, which we ignore since pixels are handed out as 0 or 1.
// - the pixel data at the data offset. Each row is padded to a multiple of
//   4 bytes. A positive height stores the bottom row first, a negative
//   height the top row first.

use alloc::vec;

use monobmp_core::bytestream::{ByteReader, ByteReaderTrait};
use monobmp_core::log::{debug, trace, warn};
use monobmp_core::options::DecoderOptions;

use crate::bitmap::DecodedBitmap;
use crate::common::{
    BmpHeaders, FileHeader, InfoFields, InfoHeader, BITMAPCOREHEADER_SIZE, BITMAPINFOHEADER_SIZE,
    BITMAPV4HEADER_SIZE, BITMAPV5HEADER_SIZE
};
use crate::errors::BmpMonoErrors;
use crate::utils::{expand_bits_to_byte, row_stride};

/// Probe some bytes to see
/// if they consist of a BMP image this crate can parse
///
/// Only the magic bytes and the information header size are checked
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if let Some(&[a, b, c, d]) = bytes.get(14..18) {
                let sz = u32::from_le_bytes([a, b, c, d]);

                return sz == BITMAPCOREHEADER_SIZE
                    || sz == BITMAPINFOHEADER_SIZE
                    || sz == BITMAPV4HEADER_SIZE
                    || sz == BITMAPV5HEADER_SIZE;
            }
        }
    }
    false
}

/// Decode a monochrome BMP from `source` with default options
///
/// This is a shorthand for [`BmpMonoDecoder::new`] followed by
/// [`BmpMonoDecoder::decode`]
pub fn decode_mono_bmp<T: ByteReaderTrait>(source: T) -> Result<DecodedBitmap, BmpMonoErrors> {
    BmpMonoDecoder::new(source).decode()
}

/// A monochrome BMP decoder.
///
/// # Usage
///
/// ## Extracting image metadata
/// ```
/// use monobmp::BmpMonoDecoder;
/// use monobmp_core::bytestream::ByteCursor;
///
/// fn main() -> Result<(), monobmp::BmpMonoErrors> {
///     let mut file = vec![];
///     file.extend_from_slice(b"BM");
///     file.extend_from_slice(&62_u32.to_le_bytes()); // file size
///     file.extend_from_slice(&[0; 4]); // reserved
///     file.extend_from_slice(&62_u32.to_le_bytes()); // data offset
///     file.extend_from_slice(&40_u32.to_le_bytes()); // header size
///     file.extend_from_slice(&2_i32.to_le_bytes()); // width
///     file.extend_from_slice(&2_i32.to_le_bytes()); // height
///     file.extend_from_slice(&1_u16.to_le_bytes()); // planes
///     file.extend_from_slice(&1_u16.to_le_bytes()); // bits per pixel
///     file.resize(62, 0);
///     file.extend_from_slice(&[0x01, 0, 0, 0, 0x02, 0, 0, 0]);
///
///     let mut decoder = BmpMonoDecoder::new(ByteCursor::new(&file));
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w, h) = decoder.dimensions().unwrap();
///     assert_eq!((w, h), (2, 2));
///
///     let bitmap = decoder.decode()?;
///     assert_eq!(bitmap.row(0), Some(&[0, 1][..]));
///     assert_eq!(bitmap.row(1), Some(&[1, 0][..]));
///     Ok(())
/// }
/// ```
pub struct BmpMonoDecoder<T>
where
    T: ByteReaderTrait
{
    bytes:   ByteReader<T>,
    options: DecoderOptions,
    headers: Option<BmpHeaders>
}

impl<T> BmpMonoDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new decoder that reads data from
    /// `data`
    pub fn new(data: T) -> BmpMonoDecoder<T> {
        BmpMonoDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The source from which we will read data from
    /// * `options`:  Specialized options for this decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpMonoDecoder<T> {
        BmpMonoDecoder {
            bytes: ByteReader::new(data),
            options,
            headers: None
        }
    }

    /// Decode and validate the headers stored in the file
    ///
    /// After calling this, [`headers`](Self::headers) and
    /// [`dimensions`](Self::dimensions) return `Some`.
    /// Calling it again does nothing.
    pub fn decode_headers(&mut self) -> Result<(), BmpMonoErrors> {
        self.decoded_headers().map(|_| ())
    }

    fn decoded_headers(&mut self) -> Result<BmpHeaders, BmpMonoErrors> {
        if let Some(headers) = self.headers {
            return Ok(headers);
        }
        let headers = self.read_headers()?;
        self.validate(&headers)?;
        self.headers = Some(headers);

        Ok(headers)
    }

    fn read_headers(&mut self) -> Result<BmpHeaders, BmpMonoErrors> {
        let magic = self.bytes.read_fixed_bytes_or_error::<2>()?;

        if &magic != b"BM" {
            return Err(BmpMonoErrors::BadMagicNumber(magic));
        }
        let file_size = self.bytes.get_u32_le_err()?;
        // reserved
        self.bytes.skip(4)?;
        let data_offset = self.bytes.get_u32_le_err()?;

        let ihsize = self.bytes.get_u32_le_err()?;

        let info = match ihsize {
            BITMAPCOREHEADER_SIZE => InfoHeader::Core {
                width:          self.bytes.get_u16_le_err()?,
                height:         self.bytes.get_u16_le_err()?,
                planes:         self.bytes.get_u16_le_err()?,
                bits_per_pixel: self.bytes.get_u16_le_err()?
            },
            BITMAPINFOHEADER_SIZE => InfoHeader::Info(self.read_info_fields()?),
            // the rest of these headers is skipped by seeking to the data offset
            BITMAPV4HEADER_SIZE => InfoHeader::V4(self.read_info_fields()?),
            BITMAPV5HEADER_SIZE => InfoHeader::V5(self.read_info_fields()?),
            _ => return Err(BmpMonoErrors::UnsupportedHeaderSize(ihsize))
        };
        debug!("Information header: {}", info.name());

        Ok(BmpHeaders {
            file: FileHeader {
                magic,
                file_size,
                data_offset
            },
            info
        })
    }

    fn read_info_fields(&mut self) -> Result<InfoFields, BmpMonoErrors> {
        Ok(InfoFields {
            width:          self.bytes.get_i32_le_err()?,
            height:         self.bytes.get_i32_le_err()?,
            planes:         self.bytes.get_u16_le_err()?,
            bits_per_pixel: self.bytes.get_u16_le_err()?,
            compression:    self.bytes.get_u32_le_err()?
        })
    }

    fn validate(&self, headers: &BmpHeaders) -> Result<(), BmpMonoErrors> {
        let geometry = headers.geometry();

        trace!("File size: {}", headers.file.file_size);
        trace!("Data offset: {}", headers.file.data_offset);
        trace!("Width: {}", geometry.width);
        trace!("Height: {}", geometry.height);
        trace!("Bit depth: {}", geometry.bits_per_pixel);
        trace!("Compression: {}", geometry.compression);

        if geometry.bits_per_pixel != 1 {
            return Err(BmpMonoErrors::UnsupportedPixelDepth(
                geometry.bits_per_pixel
            ));
        }
        if geometry.compression != 0 {
            return Err(BmpMonoErrors::UnsupportedCompression(geometry.compression));
        }
        if geometry.width <= 0 {
            return Err(BmpMonoErrors::InvalidWidth(geometry.width));
        }
        if headers.info.planes() != 1 {
            warn!(
                "Expected a single colour plane, found {}",
                headers.info.planes()
            );
        }

        let width = geometry.width.unsigned_abs() as usize;
        let height = geometry.rows();

        if width > self.options.get_max_width() {
            return Err(BmpMonoErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(BmpMonoErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        Ok(())
    }

    /// Return the headers, or `None` if they haven't been decoded
    /// or were rejected
    pub fn headers(&self) -> Option<&BmpHeaders> {
        self.headers.as_ref()
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height where height is the
    /// number of rows regardless of storage order
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        let geometry = self.headers?.geometry();

        Some((geometry.width.unsigned_abs() as usize, geometry.rows()))
    }

    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Destroy the decoder, returning the source it read from
    pub fn into_inner(self) -> T {
        self.bytes.consume()
    }

    /// Decode the image
    ///
    /// Either the whole bitmap is returned or an error, never a
    /// partially decoded bitmap
    pub fn decode(&mut self) -> Result<DecodedBitmap, BmpMonoErrors> {
        let headers = self.decoded_headers()?;
        let geometry = headers.geometry();

        let width = geometry.width.unsigned_abs() as usize;
        let height = geometry.rows();
        let stride = row_stride(width);

        let size = width
            .checked_mul(height)
            .ok_or(BmpMonoErrors::OverFlowOccurred)?;

        // headers differ in length, the data offset is the only
        // reliable way to find the first row
        self.bytes
            .set_position(u64::from(headers.file.data_offset))?;

        let mut pixels = vec![0_u8; size];
        let mut scanline = vec![0_u8; stride];

        // BMP writes from bottom to top for a positive height, so the
        // first row in the stream is the last row of the output
        let rows_read = if geometry.is_bottom_up() {
            self.decode_rows(pixels.rchunks_exact_mut(width), &mut scanline)?
        } else {
            self.decode_rows(pixels.chunks_exact_mut(width), &mut scanline)?
        };

        if rows_read < height {
            if self.options.get_strict_mode() {
                return Err(BmpMonoErrors::TruncatedData {
                    row:      rows_read,
                    expected: stride,
                    found:    0
                });
            }
            warn!(
                "Pixel data ended after {} of {} rows, remaining rows are left blank",
                rows_read, height
            );
        }

        Ok(DecodedBitmap::new(width, height, pixels))
    }

    /// Fill `rows` in the order they appear in the stream
    ///
    /// Stops early on a clean end of stream and returns the number
    /// of rows filled
    fn decode_rows<'a, I>(&mut self, rows: I, scanline: &mut [u8]) -> Result<usize, BmpMonoErrors>
    where
        I: Iterator<Item = &'a mut [u8]>
    {
        let order = self.options.get_bit_order();
        let mut rows_read = 0;

        for out in rows {
            let found = self.bytes.fill_bytes(scanline)?;

            if found == 0 {
                break;
            }
            if found != scanline.len() {
                return Err(BmpMonoErrors::TruncatedData {
                    row: rows_read,
                    expected: scanline.len(),
                    found
                });
            }
            expand_bits_to_byte(order, scanline, out);
            rows_read += 1;
        }
        Ok(rows_read)
    }
}
