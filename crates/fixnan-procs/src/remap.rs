/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! NaN substitution and range blanking
//!
//! Every sample goes through the following steps, in order
//!
//! 1. A NaN sample is replaced by the substitute value when one is set.
//! 2. Otherwise the range rules are tried in the order they were added,
//!    the first rule containing the sample turns it into the substitute
//!    value, or into NaN when no substitute is set.
//! 3. Otherwise the sample is left alone.
//!
//! Two counters are kept along the way, `range_count` counts samples
//! caught by a rule and `nan_count` counts samples whose value was
//! replaced, by either step.
use fixnan_core::log::{log_enabled, trace, Level};

use crate::range::RangeRule;

/// Running totals of a remap pass
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RemapCounts {
    /// Samples that fell inside a range rule
    pub range_count: u64,
    /// Samples whose value was replaced
    pub nan_count:   u64
}

/// Per pixel remapping rule
///
/// # Example
/// ```
/// use fixnan_procs::range::RangeRule;
/// use fixnan_procs::remap::{RemapCounts, Remapper};
///
/// let remapper = Remapper::new().add_rule(RangeRule::closed(2.0, 10.0));
/// let mut counts = RemapCounts::default();
///
/// let mut row = [1.0, 2.0, 10.0];
/// remapper.remap_row_in_place(&mut row, &mut counts);
///
/// assert_eq!(row[0], 1.0);
/// assert!(row[1].is_nan() && row[2].is_nan());
/// assert_eq!(counts.range_count, 2);
/// assert_eq!(counts.nan_count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Remapper {
    substitute: Option<f64>,
    rules:      Vec<RangeRule>
}

impl Remapper {
    /// Create a remapper that leaves every sample untouched
    pub fn new() -> Remapper {
        Remapper::default()
    }

    /// Set the value NaN samples and matched samples are replaced with
    #[must_use]
    pub fn set_substitute(mut self, value: f64) -> Self {
        self.substitute = Some(value);
        self
    }

    /// Append a range rule, rules are tried in insertion order
    #[must_use]
    pub fn add_rule(mut self, rule: RangeRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// True when no sample can ever change
    pub fn is_identity(&self) -> bool {
        self.substitute.is_none() && self.rules.is_empty()
    }

    /// Remap a single sample, updating `counts`
    #[inline]
    pub fn remap_pixel(&self, x: f64, counts: &mut RemapCounts) -> f64 {
        if x.is_nan() {
            if let Some(value) = self.substitute {
                counts.nan_count += 1;
                return value;
            }
            // NaN is never inside a rule
            return x;
        }
        if self.rules.iter().any(|rule| rule.contains(x)) {
            counts.range_count += 1;
            counts.nan_count += 1;

            return self.substitute.unwrap_or(f64::NAN);
        }
        x
    }

    /// Remap `input` into `output`
    ///
    /// # Panics
    /// If the two rows differ in length
    pub fn remap_row(&self, input: &[f64], output: &mut [f64], counts: &mut RemapCounts) {
        assert_eq!(
            input.len(),
            output.len(),
            "Input and output rows must have the same length"
        );

        if self.is_identity() {
            output.copy_from_slice(input);
            return;
        }
        let tracing = log_enabled!(Level::Trace);

        for (pos, (out, x)) in output.iter_mut().zip(input.iter()).enumerate() {
            *out = self.remap_pixel(*x, counts);

            if tracing {
                trace!("pixel {pos}: {x} -> {out}");
            }
        }
    }

    /// Remap a row without a second buffer
    pub fn remap_row_in_place(&self, row: &mut [f64], counts: &mut RemapCounts) {
        if self.is_identity() {
            return;
        }
        let tracing = log_enabled!(Level::Trace);

        for (pos, x) in row.iter_mut().enumerate() {
            let old = *x;
            *x = self.remap_pixel(old, counts);

            if tracing {
                trace!("pixel {pos}: {old} -> {x}");
            }
        }
    }
}
