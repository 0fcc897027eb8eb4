/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static DEBUG_HELP: &str = "Debug level

0 prints warnings only,
1 adds the arguments, header values and timings,
2 adds per row progress,
3 and above add every converted sample.";

pub static OUTPUT_HELP: &str = "FITS image to write

The image is written with BITPIX = -64, any existing file is removed first.
Use '-' to skip writing and only report how many samples would change.";

pub static RANGES_HELP: &str = "Ranges of values to blank

Given as pairs of bounds, both inclusive. Samples inside any range are
turned into NaN, or into the -v value when one is given.

'min' in place of the lower bound and 'max' in place of the upper
bound leave that side open, so 'min 0' blanks every sample <= 0 and
'min max' blanks every sample that is not already NaN.

Pairs can be repeated, the first range containing a sample wins.";

pub static AFTER_HELP: &str = "On success a status line is printed:

  [struct stat=\"OK\", rangeCount=N, nanCount=M]

rangeCount counts samples that fell inside a range,
nanCount counts samples whose value was replaced.";
