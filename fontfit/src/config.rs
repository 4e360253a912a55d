// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit configuration.
//!
//! Every option has a documented default, and invalid values (NaN, infinities,
//! out-of-domain numbers) are replaced by that default when the option is set.
//! A [`FitConfig`] therefore never holds an invalid value, and the search never
//! has to second-guess its inputs.

use kurbo::Size;

/// Default upper bound of the font size search.
pub const DEFAULT_MAX_FONT_SIZE: f64 = 100.0;

/// Default ratio between the lower and upper bound of the search.
pub const DEFAULT_MIN_FONT_SCALE: f64 = 0.1;

/// Default width of the fit band, in layout units.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Options for a font size fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    max_font_size: f64,
    min_font_scale: f64,
    target_size: Option<Size>,
    tolerance: f64,
}

impl FitConfig {
    /// Creates a config with every option at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            min_font_scale: DEFAULT_MIN_FONT_SCALE,
            target_size: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Builds a config from optional values, defaulting absent or invalid ones.
    #[must_use]
    pub fn from_options(
        max_font_size: Option<f64>,
        min_font_scale: Option<f64>,
        target_size: Option<Size>,
    ) -> Self {
        let mut config = Self::new();
        if let Some(max_font_size) = max_font_size {
            config = config.with_max_font_size(max_font_size);
        }
        if let Some(min_font_scale) = min_font_scale {
            config = config.with_min_font_scale(min_font_scale);
        }
        if let Some(target_size) = target_size {
            config = config.with_target_size(target_size);
        }
        config
    }

    /// Sets the largest font size considered.
    ///
    /// Non-finite and non-positive values select [`DEFAULT_MAX_FONT_SIZE`].
    #[must_use]
    pub fn with_max_font_size(mut self, max_font_size: f64) -> Self {
        self.max_font_size = if max_font_size.is_finite() && max_font_size > 0.0 {
            max_font_size
        } else {
            DEFAULT_MAX_FONT_SIZE
        };
        self
    }

    /// Sets the smallest font size considered, as a fraction of the maximum.
    ///
    /// Values outside `(0, 1]` (and NaN) select [`DEFAULT_MIN_FONT_SCALE`].
    #[must_use]
    pub fn with_min_font_scale(mut self, min_font_scale: f64) -> Self {
        self.min_font_scale = if min_font_scale > 0.0 && min_font_scale <= 1.0 {
            min_font_scale
        } else {
            DEFAULT_MIN_FONT_SCALE
        };
        self
    }

    /// Sets the box the text has to fit in.
    ///
    /// Without a target, the label's own bounds are used. A size with a
    /// negative or non-finite component clears the target.
    #[must_use]
    pub fn with_target_size(mut self, target_size: Size) -> Self {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        self.target_size =
            (valid(target_size.width) && valid(target_size.height)).then_some(target_size);
        self
    }

    /// Sets the width of the fit band.
    ///
    /// Non-finite and negative values select [`DEFAULT_TOLERANCE`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance.is_finite() && tolerance >= 0.0 {
            tolerance
        } else {
            DEFAULT_TOLERANCE
        };
        self
    }

    /// The largest font size considered.
    #[must_use]
    pub fn max_font_size(&self) -> f64 {
        self.max_font_size
    }

    /// The smallest font size considered, as a fraction of the maximum.
    #[must_use]
    pub fn min_font_scale(&self) -> f64 {
        self.min_font_scale
    }

    /// The explicit target box, if any.
    #[must_use]
    pub fn target_size(&self) -> Option<Size> {
        self.target_size
    }

    /// The width of the fit band.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The closed range of font sizes this config searches.
    #[must_use]
    pub fn size_range(&self) -> SizeRange {
        SizeRange::new(self.max_font_size * self.min_font_scale, self.max_font_size)
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A closed range of font sizes, `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRange {
    /// Smallest font size.
    pub min: f64,
    /// Largest font size.
    pub max: f64,
}

impl SizeRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `font_size` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, font_size: f64) -> bool {
        self.min <= font_size && font_size <= self.max
    }

    /// Clamps `font_size` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics: an inverted range yields `max`.
    #[must_use]
    pub fn clamp(&self, font_size: f64) -> f64 {
        font_size.max(self.min).min(self.max)
    }
}
