//! Display abstraction and firework renderer for Pyrochron
//!
//! This crate provides:
//! - `Canvas` trait for pixel displays (monochrome or limited color)
//! - `Color` palette and frame-count color banding
//! - `render_burst` to draw particle trails from an `AnimationEngine`
//! - `Framebuffer`, a 1-bit 144x168 canvas with an obstructable drawable area
//! - Clock text formatting and a scaled digit font for the time layer
//!
//! # Architecture
//!
//! The renderer only reads engine state; it never advances the simulation.
//! Platforms implement `Canvas` for their display and call `render_burst`
//! whenever the engine marks the display dirty.

#![no_std]

pub mod canvas;
pub mod clock;
pub mod color;
pub mod font;
pub mod framebuffer;
pub mod render;

// Re-export key types
pub use canvas::{Canvas, DisplayError};
pub use clock::{format_time, ClockStyle, ClockText};
pub use color::{band_color, Color, ColorMode};
pub use framebuffer::{Framebuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use render::{render_burst, render_frame};
