/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::images::ImageType;
use fitsio::FitsFile;
use fixnan_core::bitpix::BitPix;
use fixnan_core::log::{info, trace};
use fixnan_core::options::DecoderOptions;

use crate::errors::FitsDecodeErrors;

/// A FITS primary image read one row at a time
///
/// Rows are returned as physical values, `BZERO + BSCALE * stored`.
/// Integer samples equal to `BLANK` get no special treatment, they are
/// scaled like every other sample.
pub struct FitsSource {
    fits:      FitsFile,
    hdu:       FitsHdu,
    bitpix:    BitPix,
    width:     usize,
    height:    usize,
    rows_read: usize
}

impl FitsSource {
    /// Open an image with default options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fixnan_fits::FitsSource;
    ///
    /// let mut source = FitsSource::open("image.fits").unwrap();
    /// let (width, height) = source.dimensions();
    /// let first_row = source.read_row().unwrap();
    /// assert_eq!(first_row.len(), width);
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<FitsSource, FitsDecodeErrors> {
        Self::open_with_options(path, DecoderOptions::default())
    }

    /// Open an image, refusing dimensions beyond the limits in `options`
    ///
    /// The primary HDU must be an image with two axes. Further axes are
    /// accepted as long as their length is 1.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<FitsSource, FitsDecodeErrors> {
        let mut fits = FitsFile::open(path)?;
        let hdu = fits.primary_hdu()?;

        let (shape, bitpix) = match &hdu.info {
            HduInfo::ImageInfo { shape, image_type } => (shape.clone(), bitpix_of(image_type)),
            _ => return Err(FitsDecodeErrors::NotAnImage)
        };
        let (width, height) = image_axes(&shape)?;

        if width > options.max_width() {
            return Err(FitsDecodeErrors::TooLargeDimensions(
                "width",
                options.max_width(),
                width
            ));
        }
        if height > options.max_height() {
            return Err(FitsDecodeErrors::TooLargeDimensions(
                "height",
                options.max_height(),
                height
            ));
        }
        // rows are addressed with flat sample offsets
        if width.checked_mul(height).is_none() {
            return Err(FitsDecodeErrors::TooManySamples(width, height));
        }

        info!("Width: {}", width);
        info!("Height: {}", height);
        info!("BITPIX: {}", bitpix);

        Ok(FitsSource {
            fits,
            hdu,
            bitpix,
            width,
            height,
            rows_read: 0
        })
    }

    /// Get image dimensions as a tuple of width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The on-disk sample type
    pub const fn bitpix(&self) -> BitPix {
        self.bitpix
    }

    /// Reference pixel of the first two axes, `CRPIX1` and `CRPIX2`
    ///
    /// Either may be absent, images without a world coordinate
    /// system are valid.
    pub fn crpix(&mut self) -> (Option<f64>, Option<f64>) {
        (self.read_float("CRPIX1"), self.read_float("CRPIX2"))
    }

    /// Read a floating point keyword, `None` when absent or not a number
    pub fn read_float(&mut self, keyword: &str) -> Option<f64> {
        self.hdu.read_key::<f64>(&mut self.fits, keyword).ok()
    }

    /// Number of rows handed out so far
    pub const fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Read the next row
    ///
    /// # Errors
    /// - All rows have been read
    /// - CFITSIO failed to read the samples, e.g. the file is truncated
    pub fn read_row(&mut self) -> Result<Vec<f64>, FitsDecodeErrors> {
        if self.rows_read >= self.height {
            return Err(FitsDecodeErrors::NoMoreRows(self.height));
        }
        let start = self.rows_read * self.width;
        let row: Vec<f64> = if self.width == 0 {
            vec![]
        } else {
            self.hdu
                .read_section(&mut self.fits, start, start + self.width)?
        };
        self.rows_read += 1;

        trace!("Read row {} ({} samples)", self.rows_read, row.len());

        Ok(row)
    }

    pub(crate) fn fits_mut(&mut self) -> &mut FitsFile {
        &mut self.fits
    }
}

/// The `BITPIX` of an image type
///
/// CFITSIO reports integers with a `BZERO` offset as their unsigned or
/// signed counterpart, the on-disk width is the same.
fn bitpix_of(image_type: &ImageType) -> BitPix {
    match image_type {
        ImageType::UnsignedByte | ImageType::Byte => BitPix::U8,
        ImageType::Short | ImageType::UnsignedShort => BitPix::I16,
        ImageType::Long | ImageType::UnsignedLong => BitPix::I32,
        ImageType::LongLong => BitPix::I64,
        ImageType::Float => BitPix::F32,
        ImageType::Double => BitPix::F64
    }
}

/// Width and height of an image, given its shape slowest axis first
fn image_axes(shape: &[usize]) -> Result<(usize, usize), FitsDecodeErrors> {
    match shape {
        [extra @ .., height, width] => {
            // `extra` runs from NAXISn down to NAXIS3
            if let Some(pos) = extra.iter().rev().position(|x| *x != 1) {
                let length = extra[extra.len() - 1 - pos];
                let msg = format!(
                    "NAXIS{} is {length}, only the first two axes may be longer than 1",
                    pos + 3
                );
                return Err(FitsDecodeErrors::UnsupportedDimensions(msg));
            }
            Ok((*width, *height))
        }
        _ => {
            let msg = format!("NAXIS is {}, expected a two dimensional image", shape.len());
            Err(FitsDecodeErrors::UnsupportedDimensions(msg))
        }
    }
}
