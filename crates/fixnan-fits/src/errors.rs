/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use fitsio::errors::Error as FitsioError;

/// CFITSIO status numbers for the conditions detected here
const FILE_NOT_CREATED: i32 = 105;
const WRITE_ERROR: i32 = 106;
const END_OF_FILE: i32 = 107;
const READ_ERROR: i32 = 108;
const BAD_NAXIS: i32 = 212;
const BAD_NAXES: i32 = 213;
const NOT_IMAGE: i32 = 233;
const BAD_ROW_NUM: i32 = 307;
const BAD_ELEM_NUM: i32 = 308;

/// Status carried by a library error, `fallback` when it has none
fn library_status(err: &FitsioError, fallback: i32) -> i32 {
    match err {
        FitsioError::Fits(err) => err.status,
        FitsioError::ExistingFile(_) => FILE_NOT_CREATED,
        _ => fallback
    }
}

/// Errors reading a FITS image
pub enum FitsDecodeErrors {
    /// The primary HDU holds no image
    NotAnImage,
    /// `NAXIS` or one of the `NAXISn` describe something other than a 2D image
    UnsupportedDimensions(String),
    /// Too large dimensions for a given dimension
    TooLargeDimensions(&'static str, usize, usize),
    /// `width * height` does not fit in memory addresses
    TooManySamples(usize, usize),
    /// All rows of the image have been read
    NoMoreRows(usize),
    /// CFITSIO or fitsio reported a failure
    Library(FitsioError)
}

impl FitsDecodeErrors {
    /// Status number this error is reported with.
    ///
    /// Library errors keep the status CFITSIO gave them, the others
    /// use the number CFITSIO has for the same condition.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::NotAnImage => NOT_IMAGE,
            Self::UnsupportedDimensions(_) => BAD_NAXIS,
            Self::TooLargeDimensions(..) | Self::TooManySamples(..) => BAD_NAXES,
            Self::NoMoreRows(_) => END_OF_FILE,
            Self::Library(err) => library_status(err, READ_ERROR)
        }
    }
}

impl Debug for FitsDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotAnImage => write!(f, "Primary HDU is not an image"),
            Self::UnsupportedDimensions(reason) => {
                write!(f, "Unsupported image dimensions, {reason}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                write!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::TooManySamples(width, height) => {
                write!(f, "Image of {width} x {height} samples is too large")
            }
            Self::NoMoreRows(height) => {
                write!(f, "All {height} rows have already been read")
            }
            Self::Library(FitsioError::Fits(err)) => write!(f, "{}", err.message),
            Self::Library(err) => write!(f, "{err}")
        }
    }
}

impl From<FitsioError> for FitsDecodeErrors {
    fn from(value: FitsioError) -> Self {
        FitsDecodeErrors::Library(value)
    }
}

impl Display for FitsDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for FitsDecodeErrors {}

/// Errors writing a FITS image
pub enum FitsEncodeErrors {
    /// `width * height` does not fit in memory addresses
    TooManySamples(usize, usize),
    /// A row had a different number of samples than `NAXIS1`, expected, found
    WrongRowWidth(usize, usize),
    /// More rows were written than `NAXIS2`
    TooManyRows(usize),
    /// Fewer rows were written than `NAXIS2` when finishing, expected, found
    IncompleteImage(usize, usize),
    /// CFITSIO or fitsio reported a failure
    Library(FitsioError)
}

impl FitsEncodeErrors {
    /// Status number this error is reported with, see
    /// [`FitsDecodeErrors::status_code`]
    pub fn status_code(&self) -> i32 {
        match self {
            Self::TooManySamples(..) => BAD_NAXES,
            Self::WrongRowWidth(..) => BAD_ELEM_NUM,
            Self::TooManyRows(_) => BAD_ROW_NUM,
            Self::IncompleteImage(..) => END_OF_FILE,
            Self::Library(err) => library_status(err, WRITE_ERROR)
        }
    }
}

impl Debug for FitsEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooManySamples(width, height) => {
                write!(f, "Image of {width} x {height} samples is too large")
            }
            Self::WrongRowWidth(expected, found) => {
                write!(f, "Row has {found} samples but the image width is {expected}")
            }
            Self::TooManyRows(height) => {
                write!(f, "Image only has {height} rows")
            }
            Self::IncompleteImage(expected, found) => {
                write!(f, "Expected {expected} rows but only {found} were written")
            }
            Self::Library(FitsioError::Fits(err)) => write!(f, "{}", err.message),
            Self::Library(err) => write!(f, "{err}")
        }
    }
}

impl From<FitsioError> for FitsEncodeErrors {
    fn from(value: FitsioError) -> Self {
        FitsEncodeErrors::Library(value)
    }
}

impl Display for FitsEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for FitsEncodeErrors {}
