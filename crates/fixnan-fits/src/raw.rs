/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header record access through the CFITSIO calls fitsio re-exports
//!
//! fitsio reads and writes one keyword at a time, walking every record
//! of a header needs the raw routines.

use std::ffi::{c_char, c_int};

use fitsio::errors::{Error, FitsError};
use fitsio::sys;
use fitsio::FitsFile;

/// A card and its terminating nul
const CARD_BUFFER: usize = 81;
/// `FLEN_STATUS` of fitsio.h
const STATUS_BUFFER: usize = 31;

fn to_bytes(buffer: &[c_char]) -> Vec<u8> {
    buffer
        .iter()
        .take_while(|x| **x != 0)
        .map(|x| *x as u8)
        .collect()
}

/// Turn a CFITSIO status into a fitsio error carrying its description
fn check(status: c_int) -> Result<(), Error> {
    if status == 0 {
        return Ok(());
    }
    let mut text = [0 as c_char; STATUS_BUFFER];
    // SAFETY: ffgerr writes at most FLEN_STATUS bytes, nul included
    unsafe { sys::ffgerr(status, text.as_mut_ptr()) };

    Err(Error::Fits(FitsError {
        status,
        message: String::from_utf8_lossy(&to_bytes(&text)).to_string()
    }))
}

/// Every record of the current header, `END` excluded
pub(crate) fn read_records(fits: &mut FitsFile) -> Result<Vec<Vec<u8>>, Error> {
    let mut status = 0;
    let mut existing: c_int = 0;
    let mut free: c_int = 0;

    // SAFETY: `fits` is borrowed mutably for the whole call
    unsafe { sys::ffghsp(fits.as_raw(), &mut existing, &mut free, &mut status) };
    check(status)?;

    let mut records = Vec::with_capacity(usize::try_from(existing).unwrap_or_default());

    for position in 1..=existing {
        let mut card = [0 as c_char; CARD_BUFFER];
        // SAFETY: ffgrec writes one card of at most 80 bytes and a nul
        unsafe { sys::ffgrec(fits.as_raw(), position, card.as_mut_ptr(), &mut status) };
        check(status)?;

        records.push(to_bytes(&card));
    }
    Ok(records)
}

/// Append `record` to the current header, before `END`
pub(crate) fn append_record(fits: &mut FitsFile, record: &[u8]) -> Result<(), Error> {
    let mut card: Vec<c_char> = record
        .iter()
        .take(CARD_BUFFER - 1)
        .map(|x| *x as c_char)
        .collect();
    card.push(0);

    let mut status = 0;
    // SAFETY: `card` is nul terminated and outlives the call
    unsafe { sys::ffprec(fits.as_raw(), card.as_ptr(), &mut status) };
    check(status)
}

/// Write buffered header and data to disk
pub(crate) fn flush(fits: &mut FitsFile) -> Result<(), Error> {
    let mut status = 0;
    // SAFETY: `fits` is borrowed mutably for the whole call
    unsafe { sys::ffflus(fits.as_raw(), &mut status) };
    check(status)
}
