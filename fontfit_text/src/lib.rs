// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for font fitting.
//!
//! Fitting a label's font size to a box is a search over candidate sizes, and
//! every candidate has to be measured. `FontFit` keeps shaping and glyph layout
//! downstream, so the search depends only on a tiny measurement interface.
//!
//! This crate is intentionally:
//! - small (its only dependency is `unicode-linebreak` for wrapping),
//! - `no_std`-friendly (it uses `alloc` for owned font family names and wrapped
//!   lines), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use unicode_linebreak::{BreakOpportunity, linebreaks};

/// A minimal text measurement interface used by the font fitter.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure the bounding box needed to render `text` with `style`.
    ///
    /// `constraint` controls line breaking: a finite width wraps lines at
    /// Unicode line break opportunities, an infinite width only takes mandatory
    /// breaks such as `\n`. The constraint
    /// height is advisory and never clips the result.
    ///
    /// Results must be deterministic for fixed inputs.
    fn measure(&self, text: &str, style: &TextStyle, constraint: TextExtent) -> TextExtent;
}

/// A width/height pair in the label's coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl TextExtent {
    /// An extent with no limit on either axis.
    pub const UNBOUNDED: Self = Self {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    /// Creates an extent.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Text styling inputs relevant to measurement.
///
/// Only `font_size` is varied by the font fitter; everything else is carried
/// through unchanged from the label being fitted.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the label's coordinate system (typically points).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
    /// Extra advance added after every character, in layout units.
    pub letter_spacing: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            letter_spacing: 0.0,
            line_height: 1.0,
        }
    }

    /// Returns a copy of this style with a different font size.
    #[must_use]
    pub fn with_font_size(&self, font_size: f64) -> Self {
        Self {
            font_size,
            ..self.clone()
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Sets the extra per-character advance.
    #[must_use]
    pub fn with_letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Sets the line height multiplier.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(17.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Splits `text` into lines at Unicode line break opportunities (UAX #14), so
/// that no line is wider than `max_width` according to `width_of`.
///
/// Mandatory breaks (`\n`, `\r\n`, U+2028, ...) always end a line. Allowed
/// breaks (after spaces, tabs and hyphens, between CJK ideographs, ...) are
/// taken greedily once the line would overflow. A chunk without an allowed
/// break that is wider than `max_width` still gets a line of its own. When
/// `max_width` is not finite, only mandatory breaks apply.
///
/// Trailing whitespace is trimmed from every line before it is measured.
pub fn wrap_lines<'a>(
    text: &'a str,
    max_width: f64,
    mut width_of: impl FnMut(&str) -> f64,
) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut last_break: Option<usize> = None;

    for (pos, opportunity) in linebreaks(text) {
        if max_width.is_finite()
            && let Some(wrap_at) = last_break
            && width_of(text[line_start..pos].trim_end()) > max_width
        {
            lines.push(text[line_start..wrap_at].trim_end());
            line_start = wrap_at;
        }

        match opportunity {
            BreakOpportunity::Mandatory => {
                lines.push(text[line_start..pos].trim_end());
                line_start = pos;
                last_break = None;
            }
            BreakOpportunity::Allowed => last_break = Some(pos),
        }
    }

    if lines.is_empty() {
        lines.push("");
    }
    lines
}

/// A tiny heuristic text measurer suitable for demos, tests and early layout.
///
/// It assumes an average glyph advance of ~0.6em (plus letter spacing) and a
/// line height of `line_height` em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    fn line_width(line: &str, style: &TextStyle) -> f64 {
        let chars = line.chars().count() as f64;
        0.6 * style.font_size * chars + style.letter_spacing * chars
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, constraint: TextExtent) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }

        let lines = wrap_lines(text, constraint.width, |line| {
            Self::line_width(line, style)
        });
        let width = lines
            .iter()
            .map(|line| Self::line_width(line, style))
            .fold(0.0, f64::max);
        let height = lines.len() as f64 * style.line_height * style.font_size;
        TextExtent {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}
