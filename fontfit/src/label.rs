// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labels: the text containers whose font size gets fitted.

use alloc::string::String;

use fontfit_text::{TextMeasurer, TextStyle};
use kurbo::Size;
use peniko::Brush;

use crate::config::FitConfig;
use crate::fit::LineMode;
use crate::search::{FitReport, binary_search_font_size};

/// A text label with a font, paint and layout bounds.
#[derive(Clone, Debug)]
pub struct Label {
    /// Text content (unshaped).
    pub text: String,
    /// Font and text attributes. Fitting only ever changes `style.font_size`.
    pub style: TextStyle,
    /// Fill paint.
    pub fill: Brush,
    /// Current layout bounds; the default fitting target.
    pub bounds: Size,
    /// Maximum number of lines, `0` for unlimited.
    pub max_lines: usize,
}

impl Label {
    /// Creates a single-line label with default styling.
    pub fn new(text: impl Into<String>, bounds: Size) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            fill: Brush::default(),
            bounds,
            max_lines: 1,
        }
    }

    /// Sets the text style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the maximum number of lines (`0` for unlimited).
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// The current font size.
    pub fn font_size(&self) -> f64 {
        self.style.font_size
    }

    /// Whether the label fits its width (single line) or its height.
    pub fn line_mode(&self) -> LineMode {
        LineMode::from_max_lines(self.max_lines)
    }

    /// Returns the font size at which `text` fits this label.
    ///
    /// Empty text returns the current font size without measuring anything.
    pub fn font_size_that_fits(
        &self,
        text: &str,
        config: &FitConfig,
        measurer: &dyn TextMeasurer,
    ) -> f64 {
        self.fit_report(text, config, measurer).font_size
    }

    /// Like [`Label::font_size_that_fits`], but returns the whole search report.
    pub fn fit_report(
        &self,
        text: &str,
        config: &FitConfig,
        measurer: &dyn TextMeasurer,
    ) -> FitReport {
        if text.is_empty() {
            log::debug!("empty text, keeping font size {}", self.style.font_size);
            return FitReport::unmeasured(self.style.font_size);
        }

        let mode = self.line_mode();
        let target = config.target_size().unwrap_or(self.bounds);
        binary_search_font_size(
            measurer,
            text,
            &self.style,
            config.size_range(),
            target,
            mode.constraint_box(target),
            mode,
            config.tolerance(),
        )
    }

    /// Fits the label's own text and stores the result as its font size.
    ///
    /// Does nothing when the label has no text.
    pub fn apply_fitting_font_size(&mut self, config: &FitConfig, measurer: &dyn TextMeasurer) {
        if self.text.is_empty() {
            return;
        }
        let report = self.fit_report(&self.text, config, measurer);
        self.style.font_size = report.font_size;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use std::vec::Vec;

    use fontfit_text::{FontFamily, FontWeight, HeuristicTextMeasurer, TextExtent};
    use peniko::Color;

    use super::*;
    use crate::fit::FitState;
    use crate::test_measurers::CountingMeasurer;

    #[test]
    fn empty_text_keeps_font_size_without_measuring() {
        let measurer = CountingMeasurer::new(HeuristicTextMeasurer);
        let label = Label::new("", Size::new(200.0, 40.0)).with_font_size(23.0);
        for config in [
            FitConfig::new(),
            FitConfig::from_options(Some(f64::NAN), Some(f64::NAN), Some(Size::ZERO)),
            FitConfig::new().with_max_font_size(5.0),
        ] {
            assert_eq!(label.font_size_that_fits("", &config, &measurer), 23.0);
        }
        assert_eq!(measurer.calls(), 0);
    }

    #[test]
    fn nan_options_behave_like_defaults() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("Hello", Size::new(200.0, 40.0));

        let defaults = label.fit_report("Hello", &FitConfig::new(), &measurer);
        let nan_max = label.fit_report(
            "Hello",
            &FitConfig::new().with_max_font_size(f64::NAN),
            &measurer,
        );
        let explicit_max = label.fit_report(
            "Hello",
            &FitConfig::new().with_max_font_size(100.0),
            &measurer,
        );
        let nan_scale = label.fit_report(
            "Hello",
            &FitConfig::new().with_min_font_scale(f64::NAN),
            &measurer,
        );
        let explicit_scale = label.fit_report(
            "Hello",
            &FitConfig::new().with_min_font_scale(0.1),
            &measurer,
        );

        assert_eq!(nan_max, defaults);
        assert_eq!(explicit_max, defaults);
        assert_eq!(nan_scale, defaults);
        assert_eq!(explicit_scale, defaults);
    }

    #[test]
    fn target_defaults_to_label_bounds() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("Hello", Size::new(200.0, 40.0));
        let from_bounds = label.font_size_that_fits("Hello", &FitConfig::new(), &measurer);
        let explicit = label.font_size_that_fits(
            "Hello",
            &FitConfig::new().with_target_size(Size::new(200.0, 40.0)),
            &measurer,
        );
        assert_eq!(from_bounds, 66.5);
        assert_eq!(from_bounds, explicit);
    }

    #[test]
    fn single_line_fit_lands_in_band() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("", Size::ZERO);
        for width in [120.0, 175.0, 200.0, 260.0] {
            let config = FitConfig::new().with_target_size(Size::new(width, 40.0));
            let report = label.fit_report("Hello", &config, &measurer);
            assert_eq!(report.state, Some(FitState::Fit), "width {width}");

            let rect = measurer.measure(
                "Hello",
                &label.style.with_font_size(report.font_size),
                TextExtent::UNBOUNDED,
            );
            assert!(
                rect.width <= width && rect.width >= width - 10.0,
                "{} outside band for {width}",
                rect.width
            );
        }
    }

    #[test]
    fn shrinking_target_never_grows_font() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("Hello", Size::ZERO);
        let sizes: Vec<f64> = (10..=30)
            .rev()
            .map(|i| {
                let config = FitConfig::new().with_target_size(Size::new(f64::from(i) * 10.0, 40.0));
                label.font_size_that_fits("Hello", &config, &measurer)
            })
            .collect();
        for pair in sizes.windows(2) {
            assert!(pair[1] <= pair[0], "{} grew to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn multi_line_fits_height() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("alpha beta gamma", Size::new(40.0, 60.0)).with_max_lines(0);
        assert_eq!(label.line_mode(), LineMode::MultiLine);

        let report = label.fit_report(&label.text, &FitConfig::new(), &measurer);
        assert_eq!(report.font_size, 20.0);
        assert!(report.fits());

        let rect = measurer.measure(
            &label.text,
            &label.style.with_font_size(report.font_size),
            TextExtent::new(40.0, f64::INFINITY),
        );
        assert!((50.0..=60.0).contains(&rect.height), "height {}", rect.height);
    }

    #[test]
    fn multi_line_wraps_text_without_spaces() {
        let measurer = HeuristicTextMeasurer;
        let label = Label::new("日本語のテキストです", Size::new(60.0, 80.0)).with_max_lines(0);

        let report = label.fit_report(&label.text, &FitConfig::new(), &measurer);
        // Four ideographs per 60-unit line, three lines of 25.
        assert_eq!(report.font_size, 25.0);
        assert!(report.fits());

        let rect = measurer.measure(
            &label.text,
            &label.style.with_font_size(report.font_size),
            TextExtent::new(60.0, f64::INFINITY),
        );
        assert!(rect.width <= 60.0, "width {}", rect.width);
        assert!((70.0..=80.0).contains(&rect.height), "height {}", rect.height);
    }

    #[test]
    fn apply_only_changes_font_size() {
        let style = TextStyle::new(12.0)
            .with_font_family(FontFamily::Named(Arc::from("Inter")))
            .with_font_weight(FontWeight::BOLD)
            .with_letter_spacing(1.5);
        let fill = Color::from_rgba8(200, 10, 10, 255);
        let mut label = Label::new("Hello", Size::new(200.0, 40.0))
            .with_style(style.clone())
            .with_fill(fill);

        let expected = label.font_size_that_fits("Hello", &FitConfig::new(), &HeuristicTextMeasurer);
        label.apply_fitting_font_size(&FitConfig::new(), &HeuristicTextMeasurer);

        assert_eq!(label.font_size(), expected);
        assert_ne!(label.font_size(), 12.0);
        assert_eq!(label.style, style.with_font_size(expected));
        assert_eq!(label.fill, Brush::from(fill));
    }

    #[test]
    fn apply_without_text_is_a_no_op() {
        let measurer = CountingMeasurer::new(HeuristicTextMeasurer);
        let mut label = Label::new("", Size::new(200.0, 40.0)).with_font_size(14.0);
        label.apply_fitting_font_size(&FitConfig::new(), &measurer);
        assert_eq!(label.font_size(), 14.0);
        assert_eq!(measurer.calls(), 0);
    }
}
