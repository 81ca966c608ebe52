/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use monobmp_core::bit_order::BitOrder;

/// Number of bytes one row of a 1 bit image occupies in the file.
///
/// Rows are padded to a multiple of 32 bits.
///
/// ```
/// assert_eq!(monobmp::row_stride(1), 4);
/// assert_eq!(monobmp::row_stride(33), 8);
/// ```
pub const fn row_stride(width: usize) -> usize {
    width.div_ceil(32) * 4
}

/// Expand packed 1 bit pixels in `input` to one byte per pixel (0 or 1) in `out`.
///
/// `out.len()` decides how many pixels are produced, bits in `input`
/// beyond that are padding and are dropped.
pub(crate) fn expand_bits_to_byte(order: BitOrder, input: &[u8], out: &mut [u8]) {
    match order {
        BitOrder::LsbFirst => expand_bits::<false>(input, out),
        BitOrder::MsbFirst => expand_bits::<true>(input, out)
    }
}

#[inline(always)]
fn expand_bits<const MSB_FIRST: bool>(input: &[u8], out: &mut [u8]) {
    let mut in_iter = input.iter();
    let mut out_iter = out.chunks_exact_mut(8);

    // `out_iter` must come before `in_iter` so that `in_iter` is not advanced
    // when `out_iter` is less than 8 bytes long
    (&mut out_iter)
        .zip(&mut in_iter)
        .for_each(|(out_vals, in_val)| {
            let in_val = if MSB_FIRST {
                in_val.reverse_bits()
            } else {
                *in_val
            };
            for (pos, out_val) in out_vals.iter_mut().enumerate() {
                *out_val = (in_val >> pos) & 0x01;
            }
        });

    // the last byte of a row whose width is not a multiple of 8
    if let Some(in_val) = in_iter.next() {
        let order = if MSB_FIRST {
            BitOrder::MsbFirst
        } else {
            BitOrder::LsbFirst
        };
        out_iter
            .into_remainder()
            .iter_mut()
            .enumerate()
            .for_each(|(pos, out_val)| {
                *out_val = (in_val >> order.shift(pos)) & 0x01;
            });
    }
}

#[cfg(test)]
mod tests {
    use monobmp_core::bit_order::BitOrder;

    use super::{expand_bits_to_byte, row_stride};

    #[test]
    fn stride_is_padded_to_four_bytes() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(32), 4);
        assert_eq!(row_stride(33), 8);
        assert_eq!(row_stride(128), 16);
        assert_eq!(row_stride(0), 0);
    }

    #[test]
    fn lowest_bit_is_first_column() {
        let mut out = [9_u8; 8];
        expand_bits_to_byte(BitOrder::LsbFirst, &[0x03], &mut out);

        assert_eq!(out, [1, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn msb_first_mirrors_each_byte() {
        let mut out = [9_u8; 8];
        expand_bits_to_byte(BitOrder::MsbFirst, &[0x03], &mut out);

        assert_eq!(out, [0, 0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn padding_bits_are_dropped() {
        // 11 pixels spread over two bytes plus two padding bytes
        let row = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut out = [0_u8; 11];
        expand_bits_to_byte(BitOrder::LsbFirst, &row, &mut out);
        assert_eq!(out, [1; 11]);

        let row = [0x00, 0b0000_0101, 0xFF, 0xFF];
        expand_bits_to_byte(BitOrder::LsbFirst, &row, &mut out);
        assert_eq!(out, [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1]);

        expand_bits_to_byte(BitOrder::MsbFirst, &row, &mut out);
        assert_eq!(out, [0; 11]);
    }
}
