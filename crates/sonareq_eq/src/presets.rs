//! Mixer Preset Document
//!
//! JSON document the mixer stores in the `data` column of a preset. Only the
//! parametric EQ is touched by an import; everything else is carried along.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::eq::ParametricEq;
use crate::filter::FilterSlot;

/// On/off effect with a single amount (bass boost, treble boost, clarity)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostState {
    pub enabled: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartVolume {
    pub enabled: bool,
    pub volume_level: f64,
    pub loudness: String,
}

impl Default for SmartVolume {
    fn default() -> Self {
        Self {
            enabled: false,
            volume_level: 0.0,
            loudness: "balanced".to_string(),
        }
    }
}

/// Placement of one virtual speaker, `position` in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurroundChannel {
    pub position: f64,
    pub gain: f64,
}

impl SurroundChannel {
    const fn at(position: f64) -> Self {
        Self {
            position,
            gain: 0.0,
        }
    }
}

/// 7.1 virtual surround speaker layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSurroundChannels {
    pub front_left: SurroundChannel,
    pub front_right: SurroundChannel,
    pub center: SurroundChannel,
    pub sub_woofer: SurroundChannel,
    pub rear_left: SurroundChannel,
    pub rear_right: SurroundChannel,
    pub side_left: SurroundChannel,
    pub side_right: SurroundChannel,
}

impl Default for VirtualSurroundChannels {
    fn default() -> Self {
        Self {
            front_left: SurroundChannel::at(30.0),
            front_right: SurroundChannel::at(-30.0),
            center: SurroundChannel::at(0.0),
            sub_woofer: SurroundChannel::at(0.0),
            rear_left: SurroundChannel::at(150.0),
            rear_right: SurroundChannel::at(-150.0),
            side_left: SurroundChannel::at(90.0),
            side_right: SurroundChannel::at(-90.0),
        }
    }
}

/// Full preset document
///
/// `Default` yields the document of a freshly created preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarPreset {
    pub bass_boost_state: BoostState,
    pub treble_boost_state: BoostState,
    pub voice_clarity_state: BoostState,
    pub smart_volume: SmartVolume,
    pub general_gain: f64,
    #[serde(rename = "parametricEQ")]
    pub parametric_eq: ParametricEq,
    pub virtual_surround_state: bool,
    pub virtual_surround_channels: VirtualSurroundChannels,
    #[serde(rename = "reverbGainDB")]
    pub reverb_gain_db: f64,
    pub form_factor: String,
    pub global_enable_state: bool,
}

impl Default for SonarPreset {
    fn default() -> Self {
        Self {
            bass_boost_state: BoostState::default(),
            treble_boost_state: BoostState::default(),
            voice_clarity_state: BoostState::default(),
            smart_volume: SmartVolume::default(),
            general_gain: 0.0,
            parametric_eq: ParametricEq::default(),
            virtual_surround_state: false,
            virtual_surround_channels: VirtualSurroundChannels::default(),
            reverb_gain_db: -6.0,
            form_factor: "headphones".to_string(),
            global_enable_state: true,
        }
    }
}

impl SonarPreset {
    /// Replace the parametric EQ with `filters` merged onto it
    pub fn apply_filters(&mut self, filters: &[FilterSlot]) {
        self.parametric_eq = self.parametric_eq.merged(filters);
    }
}

/// Merge `filters` into a stored document held as raw JSON.
///
/// The document must decode as a [`SonarPreset`]. Only the values of the
/// parametric EQ are written back; keys this model does not know about, at
/// any depth, stay as they were.
pub fn apply_filters_to_json(
    document: &mut Value,
    filters: &[FilterSlot],
) -> serde_json::Result<()> {
    let mut preset = SonarPreset::deserialize(&*document)?;
    preset.apply_filters(filters);

    let eq = serde_json::to_value(&preset.parametric_eq)?;
    overlay(&mut document["parametricEQ"], eq);
    Ok(())
}

/// Write every leaf of `patch` into `target`, keeping keys `patch` lacks
fn overlay(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                overlay(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, patch) => *target = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterDef;

    #[test]
    fn test_default_document_values() {
        let doc = SonarPreset::default();
        assert!(!doc.bass_boost_state.enabled);
        assert_eq!(doc.treble_boost_state.value, 0.0);
        assert!(!doc.voice_clarity_state.enabled);
        assert_eq!(doc.smart_volume.loudness, "balanced");
        assert_eq!(doc.smart_volume.volume_level, 0.0);
        assert_eq!(doc.general_gain, 0.0);
        assert!(!doc.virtual_surround_state);
        assert_eq!(doc.reverb_gain_db, -6.0);
        assert_eq!(doc.form_factor, "headphones");
        assert!(doc.global_enable_state);
        assert!(doc.parametric_eq.enabled);
    }

    #[test]
    fn test_default_surround_layout() {
        let ch = VirtualSurroundChannels::default();
        let positions = [
            ch.front_left.position,
            ch.front_right.position,
            ch.center.position,
            ch.sub_woofer.position,
            ch.rear_left.position,
            ch.rear_right.position,
            ch.side_left.position,
            ch.side_right.position,
        ];
        assert_eq!(positions, [30.0, -30.0, 0.0, 0.0, 150.0, -150.0, 90.0, -90.0]);
        assert_eq!(ch.rear_right.gain, 0.0);
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(SonarPreset::default()).unwrap();
        assert_eq!(json["bassBoostState"]["enabled"], false);
        assert_eq!(json["smartVolume"]["volumeLevel"], 0.0);
        assert_eq!(json["parametricEQ"]["filter2"]["frequency"], 120.0);
        assert_eq!(json["virtualSurroundChannels"]["subWoofer"]["position"], 0.0);
        assert_eq!(json["virtualSurroundChannels"]["sideRight"]["position"], -90.0);
        assert_eq!(json["reverbGainDB"], -6.0);
        assert_eq!(json["formFactor"], "headphones");
        assert_eq!(json["globalEnableState"], true);
    }

    fn peaking(index: u32, frequency: f64) -> FilterSlot {
        FilterSlot::Filled(FilterDef {
            index,
            frequency,
            gain: -2.0,
            q_factor: 1.5,
            type_code: "PK".to_string(),
        })
    }

    #[test]
    fn test_json_merge_keeps_nested_unknown_keys() {
        let mut json = serde_json::to_value(SonarPreset::default()).unwrap();
        json["spatialAudio"] = serde_json::json!({ "enabled": true, "mode": "wide" });
        json["smartVolume"]["newKey"] = serde_json::json!(7);
        json["parametricEQ"]["preamp"] = serde_json::json!(-3.0);
        json["parametricEQ"]["filter1"]["slope"] = serde_json::json!(12);
        json["virtualSurroundChannels"]["center"]["delay"] = serde_json::json!(0.5);

        apply_filters_to_json(&mut json, &[peaking(1, 90.0)]).unwrap();

        assert_eq!(json["spatialAudio"]["mode"], "wide");
        assert_eq!(json["smartVolume"]["newKey"], 7);
        assert_eq!(json["parametricEQ"]["preamp"], -3.0);
        assert_eq!(json["parametricEQ"]["filter1"]["slope"], 12);
        assert_eq!(json["virtualSurroundChannels"]["center"]["delay"], 0.5);

        assert_eq!(json["parametricEQ"]["filter1"]["frequency"], 90.0);
        assert_eq!(json["parametricEQ"]["filter1"]["qFactor"], 1.5);
        assert_eq!(json["parametricEQ"]["filter1"]["enabled"], true);
    }

    #[test]
    fn test_json_merge_leaves_other_values_alone() {
        let mut json = serde_json::to_value(SonarPreset::default()).unwrap();
        json["generalGain"] = serde_json::json!(4);
        json["parametricEQ"]["filter2"]["frequency"] = serde_json::json!(150);

        apply_filters_to_json(&mut json, &[peaking(1, 90.0), FilterSlot::Empty]).unwrap();

        assert_eq!(json["generalGain"], 4);
        assert_eq!(json["parametricEQ"]["filter2"]["frequency"], 150.0);
    }

    #[test]
    fn test_json_merge_rejects_wrong_shape() {
        let mut json = serde_json::json!({ "parametricEQ": 5 });
        let before = json.clone();
        assert!(apply_filters_to_json(&mut json, &[peaking(1, 90.0)]).is_err());
        assert_eq!(json, before);
    }

    #[test]
    fn test_apply_filters_only_touches_eq() {
        let mut doc = SonarPreset::default();
        doc.general_gain = 2.5;
        doc.apply_filters(&[FilterSlot::Filled(FilterDef {
            index: 1,
            frequency: 100.0,
            gain: 3.0,
            q_factor: 0.7,
            type_code: "LSC".to_string(),
        })]);

        assert_eq!(doc.general_gain, 2.5);
        assert_eq!(doc.parametric_eq.slots[0].filter_type, "lowShelving");
        assert_eq!(doc.virtual_surround_channels, VirtualSurroundChannels::default());
    }
}
