//! EqualizerAPO Parametric Filter Parser
//!
//! Reads the `Filter` lines of an EqualizerAPO export:
//!
//! ```text
//! Filter 1: ON PK Fc 100 Hz Gain 3.0 dB Q 0.70
//! Filter 2: None
//! ```
//!
//! Every other line (preamp, comments, headers) is ignored. The result keeps
//! file order; the position of a line among the qualifying lines decides
//! which band it lands on, not the index written after `Filter`.

use tracing::{debug, warn};

use crate::eq::EQ_SLOTS;
use crate::error::{LineError, ParseError, ParseResult};
use crate::filter::{FilterDef, FilterSlot};

const FILTER_KEYWORD: &str = "Filter";

// Token positions in `<n>: ON <TYPE> Fc <freq> Hz Gain <gain> dB Q <q>`
const TOKEN_INDEX: usize = 0;
const TOKEN_TYPE: usize = 2;
const TOKEN_FREQUENCY: usize = 4;
const TOKEN_GAIN: usize = 7;
const TOKEN_Q: usize = 10;
const MIN_TOKENS: usize = TOKEN_Q + 1;

/// Parse a whole export held in memory.
///
/// A leading UTF-8 byte order mark is dropped so the first line still
/// counts as a filter line.
pub fn parse_str(text: &str) -> ParseResult<Vec<FilterSlot>> {
    parse_lines(text.strip_prefix('\u{FEFF}').unwrap_or(text).lines())
}

/// Parse export lines into at most [`EQ_SLOTS`] filter slots, in file order.
///
/// Every qualifying line is checked against the grammar, including those
/// past the tenth, and the first malformed one fails the whole parse.
pub fn parse_lines<'a, I>(lines: I) -> ParseResult<Vec<FilterSlot>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots = Vec::with_capacity(EQ_SLOTS);
    let mut ignored = 0usize;

    for (i, line) in lines.into_iter().enumerate() {
        if !is_filter_line(line) {
            continue;
        }

        let slot = parse_filter(&normalize(line)).map_err(|reason| ParseError::MalformedLine {
            line_number: i + 1,
            line: line.to_string(),
            reason,
        })?;

        if slots.len() == EQ_SLOTS {
            ignored += 1;
            continue;
        }

        if let FilterSlot::Filled(def) = &slot {
            let position = slots.len() + 1;
            if def.index as usize != position {
                debug!(
                    "Filter declared as #{} is applied to band {} (file order)",
                    def.index, position
                );
            }
        }
        slots.push(slot);
    }

    if ignored > 0 {
        warn!(
            "Ignoring {} filter line(s) beyond the first {}",
            ignored, EQ_SLOTS
        );
    }
    debug!("Parsed {} filter line(s)", slots.len());

    Ok(slots)
}

fn is_filter_line(line: &str) -> bool {
    line.starts_with(FILTER_KEYWORD) && line.contains(':')
}

/// Drop the leading keyword, collapse runs of spaces and trim
fn normalize(line: &str) -> String {
    let body = line.strip_prefix(FILTER_KEYWORD).unwrap_or(line);

    let mut out = String::with_capacity(body.len());
    let mut prev_space = false;
    for c in body.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }

    out.trim().to_string()
}

fn parse_filter(normalized: &str) -> Result<FilterSlot, LineError> {
    let tokens: Vec<&str> = normalized.split(' ').collect();

    if tokens.iter().any(|t| *t == "None") {
        return Ok(FilterSlot::Empty);
    }

    if tokens.len() < MIN_TOKENS {
        return Err(LineError::TooFewTokens {
            expected: MIN_TOKENS,
            found: tokens.len(),
        });
    }

    let index = match tokens[TOKEN_INDEX].replace(':', "").parse::<u32>() {
        Ok(0) | Err(_) => return Err(LineError::InvalidIndex(tokens[TOKEN_INDEX].to_string())),
        Ok(n) => n,
    };

    Ok(FilterSlot::Filled(FilterDef {
        index,
        frequency: parse_number(tokens[TOKEN_FREQUENCY], "frequency")?,
        gain: parse_number(tokens[TOKEN_GAIN], "gain")?,
        q_factor: parse_number(tokens[TOKEN_Q], "Q")?,
        type_code: tokens[TOKEN_TYPE].to_string(),
    }))
}

fn parse_number(token: &str, field: &'static str) -> Result<f64, LineError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LineError::InvalidNumber {
            field,
            token: token.to_string(),
        }),
    }
}
