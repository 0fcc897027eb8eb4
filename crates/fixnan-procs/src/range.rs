/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Token standing for an open lower bound
pub const OPEN_LOWER: &str = "min";
/// Token standing for an open upper bound
pub const OPEN_UPPER: &str = "max";

/// An inclusive interval of sample values, possibly open on either side
///
/// Both bounds are inclusive. `None` stands for the `min` (lower) or
/// `max` (upper) token on the command line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeRule {
    lower: Option<f64>,
    upper: Option<f64>
}

/// Errors parsing a range from command line tokens
#[derive(Clone, PartialEq)]
pub enum RangeParseError {
    /// The lower token is neither `min` nor a number
    InvalidLower(String),
    /// The upper token is neither `max` nor a number
    InvalidUpper(String)
}

impl Debug for RangeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeParseError::InvalidLower(_) => {
                write!(f, "min blank value string is not a number")
            }
            RangeParseError::InvalidUpper(_) => {
                write!(f, "max blank value string is not a number")
            }
        }
    }
}

impl Display for RangeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RangeParseError {}

/// Parse a real number command line token
///
/// Leading white space is skipped, everything after it must be part of
/// the number. Used for range bounds and the substitute value alike.
///
/// ```
/// use fixnan_procs::range::parse_real;
///
/// assert_eq!(parse_real("  -1.5e3"), Some(-1500.0));
/// assert_eq!(parse_real("5 "), None);
/// assert_eq!(parse_real("5x"), None);
/// ```
pub fn parse_real(token: &str) -> Option<f64> {
    token.trim_start().parse::<f64>().ok()
}

impl RangeRule {
    /// Match `lower <= x <= upper`
    pub const fn closed(lower: f64, upper: f64) -> RangeRule {
        RangeRule {
            lower: Some(lower),
            upper: Some(upper)
        }
    }

    /// Match `x <= upper`, written `min upper`
    pub const fn at_most(upper: f64) -> RangeRule {
        RangeRule {
            lower: None,
            upper: Some(upper)
        }
    }

    /// Match `x >= lower`, written `lower max`
    pub const fn at_least(lower: f64) -> RangeRule {
        RangeRule {
            lower: Some(lower),
            upper: None
        }
    }

    /// Match every sample that is not NaN, written `min max`
    pub const fn everything() -> RangeRule {
        RangeRule {
            lower: None,
            upper: None
        }
    }

    /// Parse a rule from a pair of command line tokens
    ///
    /// `min` is only accepted as the lower token and `max` only as the
    /// upper one, anything else must be a complete real number.
    ///
    /// # Example
    /// ```
    /// use fixnan_procs::range::RangeRule;
    ///
    /// let rule = RangeRule::from_tokens("min", "5.0").unwrap();
    /// assert_eq!(rule, RangeRule::at_most(5.0));
    ///
    /// assert!(RangeRule::from_tokens("max", "5.0").is_err());
    /// assert!(RangeRule::from_tokens("1", "5x").is_err());
    /// ```
    pub fn from_tokens(lower: &str, upper: &str) -> Result<RangeRule, RangeParseError> {
        let lower = if lower == OPEN_LOWER {
            None
        } else {
            let value =
                parse_real(lower).ok_or_else(|| RangeParseError::InvalidLower(lower.to_string()))?;
            Some(value)
        };
        let upper = if upper == OPEN_UPPER {
            None
        } else {
            let value =
                parse_real(upper).ok_or_else(|| RangeParseError::InvalidUpper(upper.to_string()))?;
            Some(value)
        };
        Ok(RangeRule { lower, upper })
    }

    /// Whether `x` lies inside the rule
    ///
    /// NaN is never inside a rule.
    #[inline(always)]
    pub fn contains(&self, x: f64) -> bool {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => x >= lower && x <= upper,
            // `min upper`: only the upper bound was given
            (None, Some(upper)) => x <= upper,
            // `lower max`: only the lower bound was given
            (Some(lower), None) => x >= lower,
            (None, None) => !x.is_nan()
        }
    }
}

impl Display for RangeRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.lower {
            Some(lower) => write!(f, "{lower}")?,
            None => write!(f, "{OPEN_LOWER}")?
        }
        match self.upper {
            Some(upper) => write!(f, " {upper}"),
            None => write!(f, " {OPEN_UPPER}")
        }
    }
}
