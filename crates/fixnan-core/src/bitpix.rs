/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! FITS sample types

use core::fmt::{Display, Formatter};

/// The on-disk representation of a FITS sample, as declared by
/// the `BITPIX` keyword.
///
/// Positive values are two's complement integers (except 8, which is unsigned),
/// negative values are IEEE-754 floats.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitPix {
    /// `BITPIX = 8`, unsigned byte
    U8,
    /// `BITPIX = 16`, signed 16 bit integer
    I16,
    /// `BITPIX = 32`, signed 32 bit integer
    I32,
    /// `BITPIX = 64`, signed 64 bit integer
    I64,
    /// `BITPIX = -32`, single precision float
    F32,
    /// `BITPIX = -64`, double precision float
    F64
}

impl BitPix {
    /// The value of the `BITPIX` keyword
    ///
    /// ```
    /// use fixnan_core::bitpix::BitPix;
    /// assert_eq!(BitPix::F64.value(), -64);
    /// assert_eq!(BitPix::U8.value(), 8);
    /// ```
    pub const fn value(self) -> i64 {
        match self {
            Self::U8 => 8,
            Self::I16 => 16,
            Self::I32 => 32,
            Self::I64 => 64,
            Self::F32 => -32,
            Self::F64 => -64
        }
    }
}

impl Display for BitPix {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.value())
    }
}
