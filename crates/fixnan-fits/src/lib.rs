/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row at a time access to FITS primary images
//!
//! A thin layer over [`fitsio`], the CFITSIO bindings. CFITSIO parses
//! headers, converts every `BITPIX` to doubles with `BSCALE`/`BZERO`
//! applied, and lays out the data unit. This crate adds the pieces
//! a row streaming tool needs on top.
//!
//! # Features
//! - [`FitsSource`] hands out one row at a time, so memory use is bounded
//!   by one row regardless of the image size. Dimension limits come from
//!   [`DecoderOptions`](fixnan_core::options::DecoderOptions).
//! - [`FitsDestination`] creates a `BITPIX = -64` image, copies the header of
//!   a source into it and takes rows one at a time.
//! - Errors carry the CFITSIO status number they are reported with.
//!
//! Extensions after the primary HDU are neither read nor written.
#![macro_use]
pub extern crate fixnan_core;
pub use destination::FitsDestination;
pub use errors::{FitsDecodeErrors, FitsEncodeErrors};
pub use source::FitsSource;

mod destination;
mod errors;
mod header;
mod raw;
mod source;
