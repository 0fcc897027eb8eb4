/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use fitsio::hdu::FitsHdu;
use fitsio::images::{ImageDescription, ImageType};
use fitsio::FitsFile;
use fixnan_core::log::{debug, trace};

use crate::errors::FitsEncodeErrors;
use crate::header::copy_cards;
use crate::raw::flush;
use crate::source::FitsSource;

/// A `BITPIX = -64` FITS image written one row at a time
pub struct FitsDestination {
    fits:         FitsFile,
    hdu:          FitsHdu,
    width:        usize,
    height:       usize,
    rows_written: usize
}

impl FitsDestination {
    /// Create an image of `width` by `height` doubles at `path`
    ///
    /// Nothing may exist at `path` yet. Only the header is written here,
    /// samples follow with [`write_row`](Self::write_row).
    pub fn create<P: AsRef<Path>>(
        path: P, width: usize, height: usize
    ) -> Result<FitsDestination, FitsEncodeErrors> {
        if width.checked_mul(height).is_none() {
            return Err(FitsEncodeErrors::TooManySamples(width, height));
        }
        let dimensions = [height, width];
        let description = ImageDescription {
            data_type:  ImageType::Double,
            dimensions: &dimensions
        };
        let mut fits = FitsFile::create(path)
            .with_custom_primary(&description)
            .open()?;
        let hdu = fits.primary_hdu()?;

        Ok(FitsDestination {
            fits,
            hdu,
            width,
            height,
            rows_written: 0
        })
    }

    /// Copy the header of `source`
    ///
    /// Every card is copied except the structural keywords this image
    /// already has and `BSCALE`, `BZERO`, `BLANK`, which do not apply
    /// to the doubles written here. Returns the number of cards copied.
    pub fn copy_header(&mut self, source: &mut FitsSource) -> Result<usize, FitsEncodeErrors> {
        let copied = copy_cards(source.fits_mut(), &mut self.fits)?;
        debug!("Copied {copied} header cards");

        Ok(copied)
    }

    /// Append one row
    ///
    /// # Errors
    /// - `row` does not hold exactly `width` samples
    /// - All rows have already been written
    /// - CFITSIO failed to write the samples
    pub fn write_row(&mut self, row: &[f64]) -> Result<(), FitsEncodeErrors> {
        if row.len() != self.width {
            return Err(FitsEncodeErrors::WrongRowWidth(self.width, row.len()));
        }
        if self.rows_written >= self.height {
            return Err(FitsEncodeErrors::TooManyRows(self.height));
        }
        if !row.is_empty() {
            let start = self.rows_written * self.width;
            self.hdu
                .write_section(&mut self.fits, start, start + self.width, row)?;
        }
        self.rows_written += 1;

        trace!("Wrote row {}", self.rows_written);

        Ok(())
    }

    /// Check every row was written and flush the file
    ///
    /// The file is closed when the returned value is dropped.
    pub fn finish(mut self) -> Result<(), FitsEncodeErrors> {
        if self.rows_written != self.height {
            return Err(FitsEncodeErrors::IncompleteImage(
                self.height,
                self.rows_written
            ));
        }
        flush(&mut self.fits)?;

        Ok(())
    }
}
