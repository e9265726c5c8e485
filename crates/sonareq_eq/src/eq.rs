//! 10-Band Parametric Equalizer State
//!
//! The mixer keeps exactly ten bands per preset, stored in JSON as
//! `filter1` .. `filter10`. Here they live in a fixed array indexed 0..9.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterDef, FilterSlot};

/// Number of bands in a parametric EQ
pub const EQ_SLOTS: usize = 10;

/// Lowest Q the mixer accepts
pub const Q_MIN: f64 = 0.5;

/// Highest Q the mixer accepts
pub const Q_MAX: f64 = 10.0;

/// Default band Q (1/sqrt(2))
pub const DEFAULT_Q: f64 = 0.7071;

/// Clamp a Q factor into the mixer's accepted range
pub fn clamp_q(q: f64) -> f64 {
    q.clamp(Q_MIN, Q_MAX)
}

/// Single EQ band as stored by the mixer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqSlot {
    pub enabled: bool,
    pub q_factor: f64,
    pub frequency: f64,
    pub gain: f64,
    #[serde(rename = "type")]
    pub filter_type: String,
}

impl EqSlot {
    /// Flat peaking band at `frequency`
    pub fn peaking(frequency: f64, enabled: bool) -> Self {
        Self {
            enabled,
            q_factor: DEFAULT_Q,
            frequency,
            gain: 0.0,
            filter_type: "peakingEQ".to_string(),
        }
    }

    /// Overwrite this band with an imported filter
    fn apply(&mut self, def: &FilterDef) {
        self.enabled = true;
        self.q_factor = clamp_q(def.q_factor);
        self.gain = def.gain;
        self.frequency = def.frequency;
        self.filter_type = def.filter_type().to_string();
    }
}

/// Complete parametric EQ: master switch plus ten bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParametricEqRepr", into = "ParametricEqRepr")]
pub struct ParametricEq {
    pub enabled: bool,
    pub slots: [EqSlot; EQ_SLOTS],
}

impl Default for ParametricEq {
    fn default() -> Self {
        // (frequency, enabled) for each band of a freshly created preset
        const BANDS: [(f64, bool); EQ_SLOTS] = [
            (35.0, true),
            (120.0, true),
            (1000.0, true),
            (6000.0, true),
            (18000.0, true),
            (1000.0, false),
            (2000.0, false),
            (4000.0, false),
            (8000.0, false),
            (16000.0, false),
        ];

        Self {
            enabled: true,
            slots: core::array::from_fn(|i| EqSlot::peaking(BANDS[i].0, BANDS[i].1)),
        }
    }
}

impl ParametricEq {
    /// Apply imported filters by file order and return the merged state.
    ///
    /// Position `i` of `filters` updates band `i`. Empty entries and bands
    /// past the end of `filters` keep their current values, so a short
    /// import never disables previously configured bands. `self` is left
    /// untouched.
    pub fn merged(&self, filters: &[FilterSlot]) -> Self {
        let mut merged = self.clone();
        for (slot, filter) in merged.slots.iter_mut().zip(filters) {
            if let FilterSlot::Filled(def) = filter {
                slot.apply(def);
            }
        }
        merged
    }

    /// Band at 1-based `position`, matching the `filter<N>` JSON keys
    pub fn slot(&self, position: usize) -> Option<&EqSlot> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }
}

/// JSON layout used by the mixer (`filter1` .. `filter10`)
#[derive(Serialize, Deserialize)]
struct ParametricEqRepr {
    enabled: bool,
    filter1: EqSlot,
    filter2: EqSlot,
    filter3: EqSlot,
    filter4: EqSlot,
    filter5: EqSlot,
    filter6: EqSlot,
    filter7: EqSlot,
    filter8: EqSlot,
    filter9: EqSlot,
    filter10: EqSlot,
}

impl From<ParametricEqRepr> for ParametricEq {
    fn from(r: ParametricEqRepr) -> Self {
        Self {
            enabled: r.enabled,
            slots: [
                r.filter1, r.filter2, r.filter3, r.filter4, r.filter5, r.filter6, r.filter7,
                r.filter8, r.filter9, r.filter10,
            ],
        }
    }
}

impl From<ParametricEq> for ParametricEqRepr {
    fn from(eq: ParametricEq) -> Self {
        let [filter1, filter2, filter3, filter4, filter5, filter6, filter7, filter8, filter9, filter10] =
            eq.slots;
        Self {
            enabled: eq.enabled,
            filter1,
            filter2,
            filter3,
            filter4,
            filter5,
            filter6,
            filter7,
            filter8,
            filter9,
            filter10,
        }
    }
}
