// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font size fitting for text labels.
//!
//! Given a label, some text and a target box, this crate finds the largest
//! font size (within a configurable range) at which the measured text fits:
//! - **Single-line** labels fit their width; the text is measured unwrapped.
//! - **Multi-line** labels fit their height; the text wraps at the target width.
//!
//! Measurement is delegated to a [`fontfit_text::TextMeasurer`], so the same
//! search runs against heuristic metrics, Parley, or a browser canvas.
//!
//! ```
//! use fontfit::{FitConfig, Label};
//! use fontfit_text::HeuristicTextMeasurer;
//! use kurbo::Size;
//!
//! let mut label = Label::new("Hello", Size::new(200.0, 40.0));
//! label.apply_fitting_font_size(&FitConfig::new(), &HeuristicTextMeasurer);
//! assert_eq!(label.font_size(), 66.5);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod fit;
mod label;
mod search;
#[cfg(test)]
mod test_measurers;

pub use config::{
    DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SCALE, DEFAULT_TOLERANCE, FitConfig, SizeRange,
};
pub use fit::{FitState, LineMode, multi_line_fit_state, single_line_fit_state};
pub use label::Label;
pub use search::{FitReport, binary_search_font_size};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("fontfit requires either the `std` or `libm` feature");
