//! # Modal Components
//!
//! Overlay surfaces rendered above the active screen.
//!
//! ## Module Organization:
//! - `calendar_picker` - Date-picker modal with backdrop dismissal
//! - `alert` - Share-failure alert dialog

pub mod alert;
pub mod calendar_picker;

pub use calendar_picker::month_grid;
