/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all fixnan libraries
//!
//! This crate provides a set of core routines shared
//! by the FITS adapter, the pixel remapper and the command line
//! app.
//!
//! It currently contains
//!
//! - FITS sample types (`BITPIX`)
//! - Decoder options
//! - Logging macros that compile to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Forward logging macros to the [`log`](https://docs.rs/log) crate
#![forbid(unsafe_code)]
#![macro_use]

pub mod bitpix;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;

#[cfg(feature = "log")]
pub use ::log;
