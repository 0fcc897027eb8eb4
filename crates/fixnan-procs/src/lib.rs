/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel remapping routines
//!
//! This crate holds the per pixel rule used by `fixnan`: NaN samples are
//! replaced by a user supplied value and samples inside user supplied
//! ranges are turned into NaN (or into that same value).
//!
//! The routines work on rows of `f64` and keep running counts, they know
//! nothing about files.
#![forbid(unsafe_code)]

pub mod range;
pub mod remap;
