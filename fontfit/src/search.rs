// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font size search.
//!
//! Each step probes the midpoint of the remaining interval and classifies the
//! measured text against the target:
//! - `Fit`: the midpoint is returned immediately.
//! - `TooBig`: the upper bound drops by one font size unit (not to the midpoint).
//! - `TooSmall`: the lower bound moves to one unit above the midpoint.
//!
//! When the interval collapses (`max <= min`) the upper bound is accepted.
//! Every non-fitting step shrinks the interval by at least one unit, so the
//! number of probes is bounded by the width of the initial range.

use fontfit_text::{TextExtent, TextMeasurer, TextStyle};
use kurbo::Size;

use crate::config::SizeRange;
use crate::fit::{FitState, LineMode};

/// Result of a font size search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitReport {
    /// The chosen font size.
    pub font_size: f64,
    /// Classification of the last probe, or `None` if nothing was measured.
    ///
    /// Anything other than [`FitState::Fit`] means the search ran out of
    /// range and `font_size` is a boundary value.
    pub state: Option<FitState>,
    /// Number of measurement calls made.
    pub probes: usize,
}

impl FitReport {
    /// A report for a search that never measured anything.
    #[must_use]
    pub fn unmeasured(font_size: f64) -> Self {
        Self {
            font_size,
            state: None,
            probes: 0,
        }
    }

    /// Returns `true` if the chosen size was classified as fitting.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.state == Some(FitState::Fit)
    }
}

/// Searches `range` for a font size at which `text` fits `target`.
///
/// `text` is measured with `style` (only the font size is replaced) inside
/// `constraint`, and classified with `mode`'s predicate using a fit band of
/// `tolerance` units. The returned size always lies in `range`.
pub fn binary_search_font_size(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    range: SizeRange,
    target: Size,
    constraint: Size,
    mode: LineMode,
    tolerance: f64,
) -> FitReport {
    let constraint = TextExtent::new(constraint.width, constraint.height);
    let mut min = range.min;
    let mut max = range.max;
    let mut probes = 0;
    let mut state = None;

    while min.is_finite() && max.is_finite() && max > min {
        let mid = 0.5 * (min + max);
        let extent = measurer.measure(text, &style.with_font_size(mid), constraint);
        let rect = Size::new(extent.width, extent.height);
        let probe = mode.classify(rect, target, tolerance);
        probes += 1;
        state = Some(probe);
        log::trace!(
            "probe {probes}: font size {mid} in [{min}, {max}] measured {}x{} -> {probe:?}",
            rect.width,
            rect.height
        );

        let (next_min, next_max) = match probe {
            FitState::Fit => {
                log::debug!("font size {mid} fits {target:?} after {probes} probes");
                return FitReport {
                    font_size: mid,
                    state,
                    probes,
                };
            }
            FitState::TooBig => (min, max - 1.0),
            FitState::TooSmall => (mid + 1.0, max),
        };
        if next_min == min && next_max == max {
            // A unit step is below float resolution at this magnitude.
            break;
        }
        min = next_min;
        max = next_max;
    }

    let font_size = range.clamp(max);
    log::debug!(
        "no exact fit for {target:?} after {probes} probes, settling on font size {font_size}"
    );
    FitReport {
        font_size,
        state,
        probes,
    }
}
