//! File name patterns for split fragment export.
//!
//! A pattern follows the `printf` conventions
//! for a single integer conversion:
//! `%[flags][width]conversion`,
//! where the flags are `0` (pad with zeros) and `-` (align left),
//! and the conversion is one of `d`, `i`, `u` (decimal),
//! `o` (octal), `x` or `X` (hexadecimal).
//! Length modifiers (`h`, `l`, `ll`, `z`) are accepted and ignored.
//! `%%` is a literal percent sign.

use snafu::{ensure, OptionExt, Snafu};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern does not contain an integer conversion
    MissingConversion,
    /// The pattern contains more than one conversion
    MultipleConversions,
    /// The pattern ends in the middle of a conversion
    IncompleteConversion,
    #[snafu(display("Unsupported conversion `%{}`", conversion))]
    UnsupportedConversion { conversion: char },
    #[snafu(display("Field width is too large"))]
    WidthTooLarge,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Radix {
    Decimal,
    Octal,
    LowerHex,
    UpperHex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Conversion {
    zero: bool,
    left: bool,
    width: usize,
    radix: Radix,
}

/// Widths beyond this are rejected.
const MAX_WIDTH: usize = 255;

/// A parsed file name pattern with exactly one integer placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentPattern {
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

impl FromStr for FragmentPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;

        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            let text = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                text.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                text.push('%');
                continue;
            }

            ensure!(conversion.is_none(), MultipleConversionsSnafu);

            let mut zero = false;
            let mut left = false;
            loop {
                match chars.peek() {
                    Some('0') => zero = true,
                    Some('-') => left = true,
                    _ => break,
                }
                chars.next();
            }

            let mut width = 0_usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width * 10 + digit as usize;
                ensure!(width <= MAX_WIDTH, WidthTooLargeSnafu);
                chars.next();
            }

            while let Some('h' | 'l' | 'z') = chars.peek() {
                chars.next();
            }

            let radix = match chars.next().context(IncompleteConversionSnafu)? {
                'd' | 'i' | 'u' => Radix::Decimal,
                'o' => Radix::Octal,
                'x' => Radix::LowerHex,
                'X' => Radix::UpperHex,
                other => return UnsupportedConversionSnafu { conversion: other }.fail(),
            };

            conversion = Some(Conversion {
                // the `-` flag overrides the `0` flag
                zero: zero && !left,
                left,
                width,
                radix,
            });
        }

        Ok(FragmentPattern {
            prefix,
            conversion: conversion.context(MissingConversionSnafu)?,
            suffix,
        })
    }
}

impl FragmentPattern {
    /// Substitute the given index into the pattern.
    pub fn format(&self, index: usize) -> String {
        let Conversion {
            zero,
            left,
            width,
            radix,
        } = self.conversion;

        let mut out = self.prefix.clone();
        // writing into a String does not fail
        let _ = match (radix, left, zero) {
            (Radix::Decimal, true, _) => write!(out, "{:<width$}", index, width = width),
            (Radix::Decimal, false, true) => write!(out, "{:0width$}", index, width = width),
            (Radix::Decimal, false, false) => write!(out, "{:width$}", index, width = width),
            (Radix::Octal, true, _) => write!(out, "{:<width$o}", index, width = width),
            (Radix::Octal, false, true) => write!(out, "{:0width$o}", index, width = width),
            (Radix::Octal, false, false) => write!(out, "{:width$o}", index, width = width),
            (Radix::LowerHex, true, _) => write!(out, "{:<width$x}", index, width = width),
            (Radix::LowerHex, false, true) => write!(out, "{:0width$x}", index, width = width),
            (Radix::LowerHex, false, false) => write!(out, "{:width$x}", index, width = width),
            (Radix::UpperHex, true, _) => write!(out, "{:<width$X}", index, width = width),
            (Radix::UpperHex, false, true) => write!(out, "{:0width$X}", index, width = width),
            (Radix::UpperHex, false, false) => write!(out, "{:width$X}", index, width = width),
        };
        out.push_str(&self.suffix);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{FragmentPattern, PatternError};
    use rstest::rstest;

    #[rstest]
    #[case("%d", 7, "7")]
    #[case("_%03d.jpg", 7, "_007.jpg")]
    #[case("%i", 12, "12")]
    #[case("%u", 0, "0")]
    #[case("-%4d", 42, "-  42")]
    #[case("-%-4d|", 42, "-42  |")]
    #[case("%x", 255, "ff")]
    #[case("%04X", 255, "00FF")]
    #[case("%o", 8, "10")]
    #[case("%ld", 3, "3")]
    #[case("100%%_%02d", 5, "100%_05")]
    #[case("frame%d.j2k", 10, "frame10.j2k")]
    fn format_index(#[case] pattern: &str, #[case] index: usize, #[case] expected: &str) {
        let pattern: FragmentPattern = pattern.parse().unwrap();
        assert_eq!(pattern.format(index), expected);
    }

    #[rstest]
    #[case("frame", PatternError::MissingConversion)]
    #[case("100%%", PatternError::MissingConversion)]
    #[case("%d_%d", PatternError::MultipleConversions)]
    #[case("frame%", PatternError::IncompleteConversion)]
    #[case("frame%05", PatternError::IncompleteConversion)]
    #[case("%s", PatternError::UnsupportedConversion { conversion: 's' })]
    #[case("%f", PatternError::UnsupportedConversion { conversion: 'f' })]
    #[case("%9999d", PatternError::WidthTooLarge)]
    fn bad_patterns(#[case] pattern: &str, #[case] error: PatternError) {
        assert_eq!(pattern.parse::<FragmentPattern>(), Err(error));
    }
}
