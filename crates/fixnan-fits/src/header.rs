/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::HashSet;

use fitsio::errors::Error;
use fitsio::FitsFile;
use fixnan_core::log::trace;

use crate::raw::{append_record, read_records};

/// Keywords a destination never takes from its source
///
/// The structural ones are written when the destination is created,
/// the scaling ones do not apply to stored doubles.
const NOT_INHERITED: [&str; 6] = ["SIMPLE", "BITPIX", "EXTEND", "BSCALE", "BZERO", "BLANK"];

/// Whether a source card with this keyword is copied to the destination
pub(crate) fn is_inherited(keyword: &str) -> bool {
    if NOT_INHERITED.contains(&keyword) {
        return false;
    }
    match keyword.strip_prefix("NAXIS") {
        // NAXIS itself and every NAXISn
        Some(axis) => !axis.bytes().all(|x| x.is_ascii_digit()),
        None => true
    }
}

/// The keyword of a record, its first eight columns
fn keyword(record: &[u8]) -> String {
    let end = record.len().min(8);
    String::from_utf8_lossy(&record[..end]).trim_end().to_string()
}

/// Append the inherited cards of the `source` header to the `destination` one
///
/// Records the destination already holds verbatim, like the standard
/// comments CFITSIO adds on creation, are not repeated.
/// Returns the number of cards copied.
pub(crate) fn copy_cards(source: &mut FitsFile, destination: &mut FitsFile) -> Result<usize, Error> {
    let present: HashSet<Vec<u8>> = read_records(destination)?.into_iter().collect();
    let mut copied = 0;

    for record in read_records(source)? {
        if present.contains(&record) || !is_inherited(&keyword(&record)) {
            trace!("Not copying {}", String::from_utf8_lossy(&record));
            continue;
        }
        append_record(destination, &record)?;
        copied += 1;
    }
    Ok(copied)
}
