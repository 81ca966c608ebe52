/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, Cursor};

use monobmp::{decode_mono_bmp, BmpMonoDecoder, BmpMonoErrors, InfoHeader};
use monobmp_core::bit_order::BitOrder;
use monobmp_core::bytestream::ByteCursor;
use monobmp_core::options::DecoderOptions;

/// Builds 1 bit BMP files in memory
struct BmpBuilder {
    header_size:    u32,
    width:          i32,
    height:         i32,
    bits_per_pixel: u16,
    compression:    u32,
    /// bytes between the colour table and the pixel data
    gap:            usize,
    rows:           Vec<Vec<u8>>
}

impl BmpBuilder {
    fn new(header_size: u32, width: i32, height: i32) -> BmpBuilder {
        BmpBuilder {
            header_size,
            width,
            height,
            bits_per_pixel: 1,
            compression: 0,
            gap: 0,
            rows: vec![]
        }
    }

    fn bits_per_pixel(mut self, bpp: u16) -> Self {
        self.bits_per_pixel = bpp;
        self
    }

    fn compression(mut self, compression: u32) -> Self {
        self.compression = compression;
        self
    }

    fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Rows in file order, each already padded to the row stride
    fn rows(mut self, rows: &[&[u8]]) -> Self {
        self.rows = rows.iter().map(|r| r.to_vec()).collect();
        self
    }

    fn build(&self) -> Vec<u8> {
        let mut info = Vec::new();
        info.extend_from_slice(&self.header_size.to_le_bytes());

        let palette_entry;
        if self.header_size == 12 {
            info.extend_from_slice(&(self.width as u16).to_le_bytes());
            info.extend_from_slice(&(self.height as u16).to_le_bytes());
            info.extend_from_slice(&1_u16.to_le_bytes());
            info.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
            palette_entry = 3;
        } else {
            info.extend_from_slice(&self.width.to_le_bytes());
            info.extend_from_slice(&self.height.to_le_bytes());
            info.extend_from_slice(&1_u16.to_le_bytes());
            info.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
            info.extend_from_slice(&self.compression.to_le_bytes());
            palette_entry = 4;
        }
        // remaining header fields, zero is fine for all of them
        info.resize(self.header_size as usize, 0);

        let data_offset = 14 + info.len() + 2 * palette_entry + self.gap;
        let pixel_bytes: usize = self.rows.iter().map(|r| r.len()).sum();

        let mut file = Vec::new();
        file.extend_from_slice(b"BM");
        file.extend_from_slice(&((data_offset + pixel_bytes) as u32).to_le_bytes());
        file.extend_from_slice(&[0; 4]);
        file.extend_from_slice(&(data_offset as u32).to_le_bytes());
        file.extend_from_slice(&info);
        // black and white colour table
        file.extend(std::iter::repeat(0x00).take(palette_entry));
        file.extend(std::iter::repeat(0xFF).take(palette_entry));
        file.extend(std::iter::repeat(0xAA).take(self.gap));
        assert_eq!(file.len(), data_offset);

        for row in &self.rows {
            file.extend_from_slice(row);
        }
        file
    }
}

fn decode(file: &[u8]) -> Result<monobmp::DecodedBitmap, BmpMonoErrors> {
    decode_mono_bmp(Cursor::new(file))
}

#[test]
fn two_by_two_bottom_up() {
    let file = BmpBuilder::new(40, 2, 2)
        .rows(&[&[0x01, 0, 0, 0], &[0x02, 0, 0, 0]])
        .build();
    assert_eq!(file.len(), 70);
    assert_eq!(u32::from_le_bytes(file[10..14].try_into().unwrap()), 62);

    let bitmap = decode(&file).unwrap();

    assert_eq!(bitmap.width(), 2);
    assert_eq!(bitmap.height(), 2);
    assert_eq!(bitmap.row(0), Some(&[0, 1][..]));
    assert_eq!(bitmap.row(1), Some(&[1, 0][..]));
}

#[test]
fn every_header_size_decodes() {
    // 10 pixels wide, rows in file order
    let rows: [&[u8]; 3] = [
        &[0b0000_0001, 0b0000_0010, 0, 0],
        &[0b1000_0000, 0b0000_0001, 0, 0],
        &[0xFF, 0xFF, 0xFF, 0xFF]
    ];
    let expected = [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 1]
    ];

    for size in [12, 40, 108, 124] {
        let file = BmpBuilder::new(size, 10, 3).rows(&rows).build();
        let mut decoder = BmpMonoDecoder::new(Cursor::new(&file));
        let bitmap = decoder.decode().unwrap();

        assert_eq!(decoder.headers().unwrap().info.size(), size);
        assert_eq!((bitmap.width(), bitmap.height()), (10, 3));
        for (y, row) in expected.iter().enumerate() {
            assert_eq!(bitmap.row(y), Some(&row[..]), "header {size}, row {y}");
        }
    }
}

#[test]
fn header_variant_follows_size() {
    let cases = [
        (12, "BITMAPCOREHEADER"),
        (40, "BITMAPINFOHEADER"),
        (108, "BITMAPV4HEADER"),
        (124, "BITMAPV5HEADER")
    ];
    for (size, name) in cases {
        let file = BmpBuilder::new(size, 1, 1).rows(&[&[1, 0, 0, 0]]).build();
        let mut decoder = BmpMonoDecoder::new(Cursor::new(&file));
        decoder.decode_headers().unwrap();

        let headers = decoder.headers().unwrap();
        assert_eq!(headers.info.name(), name);
        assert_eq!(
            matches!(headers.info, InfoHeader::Core { .. }),
            size == 12
        );
    }
}

#[test]
fn negative_height_keeps_file_order() {
    let rows: [&[u8]; 3] = [&[0x01, 0, 0, 0], &[0x02, 0, 0, 0], &[0x04, 0, 0, 0]];

    let top_down = decode(&BmpBuilder::new(40, 3, -3).rows(&rows).build()).unwrap();
    let bottom_up = decode(&BmpBuilder::new(40, 3, 3).rows(&rows).build()).unwrap();

    assert_eq!(top_down.height(), 3);
    assert_eq!(top_down.row(0), Some(&[1, 0, 0][..]));
    assert_eq!(top_down.row(2), Some(&[0, 0, 1][..]));

    assert_eq!(bottom_up.row(0), Some(&[0, 0, 1][..]));
    assert_eq!(bottom_up.row(2), Some(&[1, 0, 0][..]));
}

#[test]
fn least_significant_bit_is_first_column() {
    let bitmap = decode(&BmpBuilder::new(40, 8, 1).rows(&[&[0x03, 0, 0, 0]]).build()).unwrap();

    assert_eq!(bitmap.row(0), Some(&[1, 1, 0, 0, 0, 0, 0, 0][..]));
    assert_eq!(bitmap[(0, 0)], 1);
    assert_eq!(bitmap[(2, 0)], 0);
}

#[test]
fn msb_first_option_reverses_bits() {
    let file = BmpBuilder::new(40, 8, 1).rows(&[&[0x03, 0, 0, 0]]).build();
    let options = DecoderOptions::default().set_bit_order(BitOrder::MsbFirst);
    let bitmap = BmpMonoDecoder::new_with_options(Cursor::new(&file), options)
        .decode()
        .unwrap();

    assert_eq!(bitmap.row(0), Some(&[0, 0, 0, 0, 0, 0, 1, 1][..]));
}

#[test]
fn wide_rows_use_padded_stride() {
    // 33 pixels needs 8 bytes per row
    let rows: [&[u8]; 2] = [
        &[0, 0, 0, 0, 0x01, 0xFE, 0xFF, 0xFF],
        &[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF]
    ];
    let bitmap = decode(&BmpBuilder::new(40, 33, -2).rows(&rows).build()).unwrap();

    assert_eq!(bitmap.width(), 33);
    let first = bitmap.row(0).unwrap();
    assert!(first[..32].iter().all(|&p| p == 0));
    assert_eq!(first[32], 1);

    let second = bitmap.row(1).unwrap();
    assert!(second[..32].iter().all(|&p| p == 1));
    assert_eq!(second[32], 0);
}

#[test]
fn bad_magic_stops_after_two_bytes() {
    let mut file = BmpBuilder::new(40, 2, 2).rows(&[&[0; 4], &[0; 4]]).build();
    file[0] = b'P';
    file[1] = b'6';

    let mut decoder = BmpMonoDecoder::new(Cursor::new(&file));
    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, BmpMonoErrors::BadMagicNumber([b'P', b'6'])));
    assert!(decoder.headers().is_none());
    assert_eq!(decoder.into_inner().position(), 2);
}

#[test]
fn unknown_header_size_is_rejected() {
    let mut file = BmpBuilder::new(40, 2, 2).rows(&[&[0; 4], &[0; 4]]).build();
    file[14..18].copy_from_slice(&64_u32.to_le_bytes());

    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::UnsupportedHeaderSize(64))
    ));
}

#[test]
fn eight_bit_depth_is_rejected() {
    let file = BmpBuilder::new(40, 2, 2).bits_per_pixel(8).build();

    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::UnsupportedPixelDepth(8))
    ));
}

#[test]
fn compression_is_rejected() {
    let file = BmpBuilder::new(40, 2, 2).compression(1).build();

    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::UnsupportedCompression(1))
    ));
}

#[test]
fn depth_is_checked_before_compression_and_width() {
    let file = BmpBuilder::new(40, 0, 2)
        .bits_per_pixel(4)
        .compression(2)
        .build();
    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::UnsupportedPixelDepth(4))
    ));

    let file = BmpBuilder::new(40, 0, 2).compression(2).build();
    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::UnsupportedCompression(2))
    ));
}

#[test]
fn non_positive_width_is_rejected() {
    for width in [0, -5] {
        let file = BmpBuilder::new(40, width, 2).build();

        match decode(&file) {
            Err(BmpMonoErrors::InvalidWidth(w)) => assert_eq!(w, width),
            other => panic!("expected InvalidWidth, got {:?}", other.map(|b| b.width()))
        }
    }
}

#[test]
fn partial_row_is_truncated_data() {
    let mut file = BmpBuilder::new(40, 8, 3)
        .rows(&[&[0xFF, 0, 0, 0]])
        .build();
    file.extend_from_slice(&[0xFF, 0x00]);

    assert!(matches!(
        decode(&file),
        Err(BmpMonoErrors::TruncatedData {
            row:      1,
            expected: 4,
            found:    2
        })
    ));
}

#[test]
fn early_end_leaves_blank_rows() {
    // three rows promised, one stored
    let file = BmpBuilder::new(40, 8, 3).rows(&[&[0xFF, 0, 0, 0]]).build();
    let bitmap = decode(&file).unwrap();

    assert_eq!(bitmap.height(), 3);
    // bottom-up, the only stored row is the bottom one
    assert_eq!(bitmap.row(2), Some(&[1; 8][..]));
    assert_eq!(bitmap.row(0), Some(&[0; 8][..]));
    assert_eq!(bitmap.row(1), Some(&[0; 8][..]));
}

#[test]
fn early_end_is_an_error_in_strict_mode() {
    let file = BmpBuilder::new(40, 8, 3).rows(&[&[0xFF, 0, 0, 0]]).build();
    let options = DecoderOptions::default().set_strict_mode(true);

    assert!(matches!(
        BmpMonoDecoder::new_with_options(Cursor::new(&file), options).decode(),
        Err(BmpMonoErrors::TruncatedData {
            row:      1,
            expected: 4,
            found:    0
        })
    ));
}

#[test]
fn data_after_last_row_is_ignored() {
    let file = BmpBuilder::new(40, 2, -1)
        .rows(&[&[0x01, 0, 0, 0], &[0xFF, 0xFF, 0xFF, 0xFF], &[0xFF]])
        .build();
    let bitmap = decode(&file).unwrap();

    assert_eq!(bitmap.height(), 1);
    assert_eq!(bitmap.row(0), Some(&[1, 0][..]));
}

#[test]
fn data_offset_skips_gap() {
    let file = BmpBuilder::new(124, 4, -1)
        .gap(13)
        .rows(&[&[0x05, 0, 0, 0]])
        .build();
    let bitmap = decode(&file).unwrap();

    assert_eq!(bitmap.row(0), Some(&[1, 0, 1, 0][..]));
}

#[test]
fn zero_height_gives_empty_bitmap() {
    let bitmap = decode(&BmpBuilder::new(40, 5, 0).build()).unwrap();

    assert_eq!(bitmap.width(), 5);
    assert_eq!(bitmap.height(), 0);
    assert!(bitmap.pixels().is_empty());
}

#[test]
fn dimension_limits_are_respected() {
    let file = BmpBuilder::new(40, 100, -20).build();

    let options = DecoderOptions::default().set_max_width(64);
    assert!(matches!(
        BmpMonoDecoder::new_with_options(Cursor::new(&file), options).decode(),
        Err(BmpMonoErrors::TooLargeDimensions("width", 64, 100))
    ));

    let options = DecoderOptions::default().set_max_height(10);
    assert!(matches!(
        BmpMonoDecoder::new_with_options(Cursor::new(&file), options).decode(),
        Err(BmpMonoErrors::TooLargeDimensions("height", 10, 20))
    ));
}

#[test]
fn short_header_is_an_io_error() {
    let file = BmpBuilder::new(40, 2, 2).build();

    assert!(matches!(
        decode(&file[..20]),
        Err(BmpMonoErrors::IoErrors(_))
    ));
}

#[test]
fn readers_agree() {
    let file = BmpBuilder::new(108, 12, 2)
        .rows(&[&[0xA5, 0x0F, 0, 0], &[0x5A, 0xF0, 0, 0]])
        .build();

    let from_cursor = decode(&file).unwrap();
    let from_buffered = decode_mono_bmp(BufReader::with_capacity(3, Cursor::new(&file))).unwrap();
    let from_slice = decode_mono_bmp(ByteCursor::new(&file[..])).unwrap();

    assert_eq!(from_cursor, from_buffered);
    assert_eq!(from_cursor, from_slice);
}

#[test]
fn headers_are_available_before_pixels() {
    let file = BmpBuilder::new(40, 7, -4).build();
    let mut decoder = BmpMonoDecoder::new(Cursor::new(&file));

    assert!(decoder.dimensions().is_none());
    decoder.decode_headers().unwrap();
    // second call is a no-op
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((7, 4)));

    let dump = decoder.headers().unwrap().to_string();
    assert!(dump.contains("Width:         7\n"));
    assert!(dump.contains("Height:        -4\n"));
}

#[test]
fn text_dump_of_decoded_rows() {
    let bitmap = decode(&BmpBuilder::new(40, 3, 2).rows(&[&[0x05, 0, 0, 0], &[0x02, 0, 0, 0]]).build())
        .unwrap();

    assert_eq!(bitmap.to_text(), "000: 1 \n001:1 1\n");
}
