use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

pub const DEFAULT_VOICE: &str = "rachel";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    pub key: &'static str,
    pub display_name: &'static str,
    pub language: &'static str,
    pub vendor_voice_id: &'static str,
    /// Unlisted presets are accepted for synthesis but not advertised.
    pub listed: bool,
}

const fn preset(
    key: &'static str,
    display_name: &'static str,
    vendor_voice_id: &'static str,
) -> VoicePreset {
    VoicePreset {
        key,
        display_name,
        language: "en",
        vendor_voice_id,
        listed: true,
    }
}

pub static CATALOG: &[VoicePreset] = &[
    preset("rachel", "Rachel (Female, Calm)", "EXAVITQu4vr4xnSDxMaL"),
    preset("adam", "Adam (Male, Deep)", "21m00Tcm4TlvDq8ikWAM"),
    preset("antoni", "Antoni (Male, Warm)", "ErXwobaYiN019PkySvjV"),
    preset("arnold", "Arnold (Male, Crisp)", "VR6AewLTigWG4xSOukaG"),
    preset("domi", "Domi (Female, Strong)", "AZnzlk1XvdvUeBnXmlld"),
    preset("elli", "Elli (Female, Young)", "MF3mGyEYCl7XYWbV9V6O"),
    preset("josh", "Josh (Male, Warm)", "TxGEqnHWrfWFTfGW9XjX"),
    preset("sam", "Sam (Male, Friendly)", "yoZ06aMxZJJ28mfd3POQ"),
    VoicePreset {
        key: "bella",
        display_name: "Bella",
        language: "en",
        vendor_voice_id: "EXAVITQu4vr4xnSDxMaL",
        listed: false,
    },
];

lazy_static! {
    static ref PRESETS_BY_KEY: HashMap<&'static str, &'static VoicePreset> =
        CATALOG.iter().map(|p| (p.key, p)).collect();

    /// Preset used when the requested voice is unknown, keyed by language code.
    static ref LANGUAGE_DEFAULTS: HashMap<&'static str, &'static str> = HashMap::from([
        ("en", "rachel"),
        ("es", "adam"),
        ("fr", "antoni"),
        ("zh", "adam"),
        ("hi", "adam"),
    ]);
}

pub fn find_preset(key: &str) -> Option<&'static VoicePreset> {
    PRESETS_BY_KEY.get(key).copied()
}

pub fn language_default(language: &str) -> Option<&'static str> {
    LANGUAGE_DEFAULTS.get(language).copied()
}

/// Resolve a requested voice and language to a vendor voice id.
///
/// A known voice key always wins. Otherwise the language default is used,
/// and anything left over falls back to rachel. Never fails.
pub fn resolve(voice_key: &str, language: &str) -> &'static str {
    if let Some(preset) = find_preset(voice_key) {
        return preset.vendor_voice_id;
    }

    let key = language_default(language).unwrap_or(DEFAULT_VOICE);

    find_preset(key)
        .or_else(|| find_preset(DEFAULT_VOICE))
        .map(|p| p.vendor_voice_id)
        .unwrap_or(CATALOG[0].vendor_voice_id)
}

/// Voice entry as shown by the list endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

impl From<&VoicePreset> for VoiceInfo {
    fn from(preset: &VoicePreset) -> Self {
        Self {
            id: preset.key.to_string(),
            name: preset.display_name.to_string(),
            language: preset.language.to_string(),
        }
    }
}

pub fn list_voices() -> Vec<VoiceInfo> {
    CATALOG
        .iter()
        .filter(|p| p.listed)
        .map(VoiceInfo::from)
        .collect()
}
