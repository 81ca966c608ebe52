/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit ordering of packed 1-bit pixels

/// The order in which the eight pixels packed into a byte
/// are laid out from left to right
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BitOrder {
    /// The least significant bit holds the leftmost pixel,
    /// i.e. column `8k + i` is `(byte >> i) & 1`
    #[default]
    LsbFirst,
    /// The most significant bit holds the leftmost pixel,
    /// i.e. column `8k + i` is `(byte >> (7 - i)) & 1`
    MsbFirst
}

impl BitOrder {
    /// Return the shift that moves the pixel at `position` (`0..8`)
    /// within a byte into bit zero
    #[inline(always)]
    pub const fn shift(self, position: usize) -> usize {
        match self {
            BitOrder::LsbFirst => position,
            BitOrder::MsbFirst => 7 - position
        }
    }
}
