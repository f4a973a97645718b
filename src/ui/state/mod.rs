//! # UI State Module
//!
//! This module contains the explicit state containers behind each screen.
//! Every piece of mutable UI state lives in one of these structs; rendering
//! code reads them and mutates them through their methods, which keeps the
//! render-on-change contract explicit.
//!
//! ## Module Organization:
//! - `animation` - Sawtooth phase driver for the decorative stripe animations
//! - `home_state` - Home screen state (weight gauge lifecycle)
//! - `body_score_state` - Body Score screen state (selected date, calendar modal)

pub mod animation;
pub mod body_score_state;
pub mod home_state;

pub use animation::*;
pub use body_score_state::*;
pub use home_state::*;
