//! Settings message decoding
//!
//! Settings arrive from the companion app as key-value pairs. Every pair is
//! validated here before anything reaches the core, and a batch is applied
//! all-or-nothing.

use heapless::{String, Vec};

use pyrochron_core::{PreferenceKey, Preferences};

/// Maximum pairs in one settings message
pub const MAX_SETTINGS: usize = 4;

/// Maximum length of a text value
pub const MAX_TEXT_LEN: usize = 8;

/// Raw value of a settings pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingValue {
    /// Integer value (booleans are sent as 0 / 1)
    Int(i32),
    /// Native boolean
    Bool(bool),
    /// Text value ("true", "false", "on", "off")
    Text(String<MAX_TEXT_LEN>),
}

/// One settings message
pub type SettingsBatch = Vec<(u32, SettingValue), MAX_SETTINGS>;

/// Settings validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Key is not a known preference identifier
    UnknownKey(u32),
    /// Value cannot be read as a boolean for this key
    InvalidValue(PreferenceKey),
    /// Message carried more pairs than fit in a batch
    TooManyUpdates,
}

impl SettingValue {
    /// Build a text value, truncating anything that cannot be a boolean anyway
    pub fn text(s: &str) -> Self {
        let mut text = String::new();
        for ch in s.chars() {
            if text.push(ch).is_err() {
                break;
            }
        }
        SettingValue::Text(text)
    }

    /// Interpret the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Int(0) => Some(false),
            SettingValue::Int(1) => Some(true),
            SettingValue::Int(_) => None,
            SettingValue::Bool(b) => Some(*b),
            SettingValue::Text(s) => match s.as_str() {
                "true" | "on" => Some(true),
                "false" | "off" => Some(false),
                _ => None,
            },
        }
    }
}

/// Collect pairs into a bounded batch
pub fn batch_from(pairs: &[(u32, SettingValue)]) -> Result<SettingsBatch, SettingsError> {
    let mut batch = SettingsBatch::new();
    for pair in pairs {
        batch
            .push(pair.clone())
            .map_err(|_| SettingsError::TooManyUpdates)?;
    }
    Ok(batch)
}

/// Validate one pair
pub fn decode(key: u32, value: &SettingValue) -> Result<(PreferenceKey, bool), SettingsError> {
    let key = PreferenceKey::from_u32(key).ok_or(SettingsError::UnknownKey(key))?;
    let value = value.as_bool().ok_or(SettingsError::InvalidValue(key))?;
    Ok((key, value))
}

/// Validate a whole batch and apply it
///
/// Nothing is written unless every pair is valid. Returns true if any
/// preference changed.
pub fn apply(prefs: &mut Preferences, pairs: &[(u32, SettingValue)]) -> Result<bool, SettingsError> {
    let mut decoded: Vec<(PreferenceKey, bool), MAX_SETTINGS> = Vec::new();
    for (key, value) in pairs {
        let pair = decode(*key, value)?;
        decoded
            .push(pair)
            .map_err(|_| SettingsError::TooManyUpdates)?;
    }

    let mut changed = false;
    for (key, value) in decoded {
        changed |= prefs.set(key, value);
    }
    Ok(changed)
}
