/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! Options are set with consuming builders and read back with getters
//! ```
//! use monobmp_core::bit_order::BitOrder;
//! use monobmp_core::options::DecoderOptions;
//!
//! let options = DecoderOptions::default()
//!     .set_max_width(128)
//!     .set_strict_mode(true)
//!     .set_bit_order(BitOrder::MsbFirst);
//!
//! assert_eq!(options.get_max_width(), 128);
//! assert!(options.get_strict_mode());
//! ```

use crate::bit_order::BitOrder;

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat recoverable oddities as errors
    ///
    /// - Default value: false
    strict_mode: bool,
    /// How the pixels within one byte are ordered
    ///
    /// - Default value: `BitOrder::LsbFirst`
    bit_order:   BitOrder
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false,
            bit_order:   BitOrder::LsbFirst
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject recoverable errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Get the order of pixels within a packed byte
    pub const fn get_bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// In strict mode a stream that ends before every row was read
    /// is an error instead of a warning
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set the order in which pixels are packed within a byte
    pub fn set_bit_order(mut self, order: BitOrder) -> Self {
        self.bit_order = order;
        self
    }
}
