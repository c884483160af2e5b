//! Firework watchface application
//!
//! Glues the animation engine and renderer to the platform:
//! - Event channel fed by the clock, accelerometer, connection and settings services
//! - Settings validation and preference persistence
//! - The async loop that arms frame timers and flushes the display

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod channels;
pub mod config;
pub mod events;
pub mod settings;
pub mod storage;
pub mod tasks;
pub mod watchface;

pub use channels::{burst_running, post_event, APP_EVENTS, BURST_RUNNING};
pub use config::WatchfaceConfig;
pub use events::{AppEvent, ClockTime};
pub use settings::{SettingValue, SettingsBatch, SettingsError};
pub use storage::{PreferenceStore, StorageError};
pub use tasks::{animation_task, boot, run_event, FrameClock};
pub use watchface::{Handled, PendingFrame, Watchface};
