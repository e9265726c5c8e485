//! Filter Slots and Type Codes
//!
//! EqualizerAPO names filter shapes with short codes (`PK`, `LSC`, `HSC`).
//! The mixer stores the same shapes under its own canonical names.

/// Mapping from EqualizerAPO filter codes to the mixer's filter type names
pub const FILTER_TYPE_CODES: &[(&str, &str)] = &[
    ("LSC", "lowShelving"),
    ("PK", "peakingEQ"),
    ("HSC", "highShelving"),
];

/// Translate a filter code into the mixer's type name.
///
/// Unknown codes map to an empty string instead of an error; the mixer
/// ignores the band type in that case.
pub fn filter_type_name(code: &str) -> &'static str {
    FILTER_TYPE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or("")
}

/// One filter definition read from an export line
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDef {
    /// Index declared in the line (`Filter <index>:`), 1-based
    pub index: u32,
    pub frequency: f64,
    pub gain: f64,
    pub q_factor: f64,
    /// EqualizerAPO filter code, e.g. `PK`
    pub type_code: String,
}

impl FilterDef {
    /// Mixer type name for this filter's code
    pub fn filter_type(&self) -> &'static str {
        filter_type_name(&self.type_code)
    }
}

/// Result of parsing one qualifying line
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSlot {
    /// `Filter <n>: None` - leave the band at this position untouched
    Empty,
    Filled(FilterDef),
}

impl FilterSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterSlot::Empty)
    }

    /// Render the slot back into EqualizerAPO syntax.
    ///
    /// `position` is only used for empty slots, which carry no index.
    pub fn to_line(&self, position: usize) -> String {
        match self {
            FilterSlot::Empty => format!("Filter {}: None", position),
            FilterSlot::Filled(def) => format!(
                "Filter {}: ON {} Fc {} Hz Gain {} dB Q {}",
                def.index, def.type_code, def.frequency, def.gain, def.q_factor
            ),
        }
    }
}
