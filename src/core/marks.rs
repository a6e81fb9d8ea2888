//! Mark-string parsing and validation.
//!
//! The marks string is a whitespace-separated list of `<obtained>/<actual>`
//! tokens where both numbers are 1..=100 without leading zeros. A leading `-`
//! delimiter on either number is tolerated; the magnitude is taken from the
//! captures.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Mark;

lazy_static! {
    static ref MARK_RE: Regex =
        Regex::new(r"^-?(100|[1-9][0-9]?)/-?(100|[1-9][0-9]?)$").unwrap();
}

/// Parse the marks string into an ordered sequence of mark pairs.
///
/// Fails on the first token that does not match the required pattern,
/// reporting the offending token and its 1-based position. Comparing the
/// produced count against the expected subject count is the caller's job.
pub fn parse_marks(marks: &str) -> Result<Vec<Mark>> {
    marks
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            let caps = MARK_RE.captures(token).ok_or_else(|| Error::MarkFormat {
                token: token.to_string(),
                position: i + 1,
            })?;
            // Captures are digit-only by construction, so parsing cannot fail.
            let obtained: f64 = caps[1].parse().map_err(|_| Error::MarkFormat {
                token: token.to_string(),
                position: i + 1,
            })?;
            let actual: f64 = caps[2].parse().map_err(|_| Error::MarkFormat {
                token: token.to_string(),
                position: i + 1,
            })?;
            Ok(Mark { obtained, actual })
        })
        .collect()
}
