//! Animation control
//!
//! The burst state machine and the controller that drives the particle
//! pool from scheduled frame ticks.

pub mod controller;
pub mod state;

pub use crate::traits::FrameToken;
pub use controller::{AnimationEngine, BurstOutcome, BurstRequest, FrameOutcome};
pub use state::{AnimationState, BurstEvent};
