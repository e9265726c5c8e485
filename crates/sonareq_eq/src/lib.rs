//! SonarEQ EQ - Filter Import Logic
//!
//! This crate turns an EqualizerAPO parametric filter export into the
//! mixer's 10-band parametric EQ, including:
//! - Line parser for `Filter <n>: ON <TYPE> Fc <f> Hz Gain <g> dB Q <q>`
//! - Filter code translation (`PK`, `LSC`, `HSC`)
//! - Merging of imported filters onto an existing or default EQ
//! - The mixer's preset document with its default values
//!
//! # Architecture
//!
//! Everything here is pure: no file or database access. Positions are fixed,
//! band `i` of the EQ always receives the `i`-th filter line of the file.

mod eq;
mod error;
mod filter;
mod parser;
mod presets;

pub use eq::{clamp_q, EqSlot, ParametricEq, DEFAULT_Q, EQ_SLOTS, Q_MAX, Q_MIN};
pub use error::{LineError, ParseError, ParseResult};
pub use filter::{filter_type_name, FilterDef, FilterSlot, FILTER_TYPE_CODES};
pub use parser::{parse_lines, parse_str};
pub use presets::{
    apply_filters_to_json, BoostState, SmartVolume, SonarPreset, SurroundChannel,
    VirtualSurroundChannels,
};
