//! # UI Components Module
//!
//! This module organizes all UI components for the fitness dashboard.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `theme` - Centralized color palette
//! - `gauge` - Semicircular weight gauge (geometry + painting)
//! - `diagonal_pattern` - Animated 45° stripe texture for bars
//! - `score_chart` - Three-bar score history chart
//! - `health_status` - Health verdict card with segmented scale
//! - `info_cards` - Body fat / muscle mass cards on the home screen
//! - `header` - Screen headers and the date/share row
//! - `modals` - Calendar picker and share-failure alert overlays

pub mod diagonal_pattern;
pub mod gauge;
pub mod header;
pub mod health_status;
pub mod info_cards;
pub mod modals;
pub mod score_chart;
pub mod theme;

pub use theme::*;
