//! User preferences
//!
//! The core only ever reads these values. Parsing and validating settings
//! messages happens in the host before a preference is written here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named preference identifiers used by settings messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum PreferenceKey {
    /// Fire a burst on every minute tick
    FireOnMinute = 0,
    /// Fire a burst when the phone connection drops
    BluetoothAlert = 1,
}

impl PreferenceKey {
    /// Get the key as its wire identifier
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Look up a key from its wire identifier
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(PreferenceKey::FireOnMinute),
            1 => Some(PreferenceKey::BluetoothAlert),
            _ => None,
        }
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preferences {
    /// Auto-repeat bursts every minute
    pub fire_on_minute: bool,
    /// Alert with a burst when connectivity is lost
    pub bluetooth_alert: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            fire_on_minute: true,
            bluetooth_alert: true,
        }
    }
}

impl Preferences {
    /// Read a preference by key
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::FireOnMinute => self.fire_on_minute,
            PreferenceKey::BluetoothAlert => self.bluetooth_alert,
        }
    }

    /// Write a validated preference, returning true if it changed
    pub fn set(&mut self, key: PreferenceKey, value: bool) -> bool {
        let slot = match key {
            PreferenceKey::FireOnMinute => &mut self.fire_on_minute,
            PreferenceKey::BluetoothAlert => &mut self.bluetooth_alert,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}
