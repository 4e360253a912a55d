// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit predicates.
//!
//! A probe fits when its measured extent along the fitted axis lies within
//! `[limit - tolerance, limit]`. The band only extends below the limit: text
//! that overflows is always too big, and text more than `tolerance` short of
//! the limit is too small.

use kurbo::Size;

/// How a label lays out its text, which decides the fitted axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineMode {
    /// Exactly one line; the width is fitted.
    SingleLine,
    /// Wrapped lines; the height is fitted.
    MultiLine,
}

impl LineMode {
    /// Derives the mode from a maximum line count, where `0` means unlimited.
    #[must_use]
    pub fn from_max_lines(max_lines: usize) -> Self {
        if max_lines == 1 {
            Self::SingleLine
        } else {
            Self::MultiLine
        }
    }

    /// The box handed to the measurer for line breaking.
    ///
    /// Single-line text is measured at its natural width; multi-line text
    /// wraps at the target width and grows downward without limit.
    #[must_use]
    pub fn constraint_box(self, target: Size) -> Size {
        match self {
            Self::SingleLine => Size::new(f64::INFINITY, target.height),
            Self::MultiLine => Size::new(target.width, f64::INFINITY),
        }
    }

    /// Classifies a measured rectangle against the target.
    #[must_use]
    pub fn classify(self, rect: Size, target: Size, tolerance: f64) -> FitState {
        match self {
            Self::SingleLine => single_line_fit_state(rect, target, tolerance),
            Self::MultiLine => multi_line_fit_state(rect, target, tolerance),
        }
    }
}

/// Outcome of comparing one probe against the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FitState {
    /// The measured extent lies in the fit band.
    Fit,
    /// The measured extent overflows the target.
    TooBig,
    /// The measured extent falls short of the fit band.
    TooSmall,
}

/// Width-based classification used for single-line text.
#[must_use]
pub fn single_line_fit_state(rect: Size, target: Size, tolerance: f64) -> FitState {
    band_state(rect.width, target.width, tolerance)
}

/// Height-based classification used for multi-line text.
#[must_use]
pub fn multi_line_fit_state(rect: Size, target: Size, tolerance: f64) -> FitState {
    band_state(rect.height, target.height, tolerance)
}

fn band_state(measured: f64, limit: f64, tolerance: f64) -> FitState {
    if measured > limit {
        FitState::TooBig
    } else if measured <= limit && measured >= limit - tolerance {
        FitState::Fit
    } else {
        FitState::TooSmall
    }
}
