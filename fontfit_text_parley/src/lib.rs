// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`fontfit_text::TextMeasurer`] using Parley, enabling
//! shaping-aware font fitting for single-line and wrapped labels.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use fontfit_text::{FontFamily, FontStyle, TextExtent, TextMeasurer, TextStyle};
use parley::style::{
    FontFamily as ParleyFontFamily, FontStack, GenericFamily, LineHeight, StyleProperty,
};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// A [`TextMeasurer`] backed by Parley.
///
/// A finite constraint width is passed to Parley as the maximum line advance,
/// so multi-line labels are measured with the same wrapping they render with.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer.
    ///
    /// Uses Parley's default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements returned by this
    /// measurer are scaled back into logical coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn parley_font_stack<'a>(family: &'a FontFamily) -> FontStack<'a> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    /// Converts a logical length to `f32`, mapping non-finite and negative
    /// values to zero and saturating at `f32::MAX`.
    fn to_f32(value: f64) -> f32 {
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, constraint: TextExtent) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }

        let scale = self.display_scale.max(1.0e-6);

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::to_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));
        builder.push_default(StyleProperty::LetterSpacing(Self::to_f32(
            style.letter_spacing,
        )));
        builder.push_default(StyleProperty::LineHeight(LineHeight::FontSizeRelative(
            Self::to_f32(style.line_height),
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        let max_advance = constraint
            .width
            .is_finite()
            .then(|| Self::to_f32(constraint.width) * scale);
        layout.break_all_lines(max_advance);
        layout.align(max_advance, Alignment::Start, AlignmentOptions::default());

        // Line boxes are `line_height` em tall, matching the other measurers.
        let (width, height) = layout.lines().fold((0.0_f64, 0.0_f64), |(w, h), line| {
            let m = line.metrics();
            (w.max(f64::from(m.advance)), h + f64::from(m.line_height))
        });

        TextExtent {
            width: width / f64::from(scale),
            height: height / f64::from(scale),
        }
    }
}
