/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use fixnan_procs::range::RangeRule;

use crate::errors::WorkflowErrors;

/// Turn the trailing `minblank maxblank` tokens into range rules
///
/// Tokens are consumed in pairs, a trailing token without a partner
/// is an error.
pub fn parse_ranges<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<RangeRule>, WorkflowErrors> {
    if tokens.len() % 2 != 0 {
        return Err(WorkflowErrors::Arguments(
            "Range values must come in pairs".to_string()
        ));
    }
    let mut rules = Vec::with_capacity(tokens.len() / 2);

    for pair in tokens.chunks_exact(2) {
        rules.push(RangeRule::from_tokens(
            pair[0].as_ref(),
            pair[1].as_ref()
        )?);
    }
    Ok(rules)
}
