// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM text measurement adapter.
//!
//! This crate provides a [`fontfit_text::TextMeasurer`] implementation for
//! `wasm32-*` targets using HTML Canvas `measureText` for line widths and
//! [`fontfit_text::wrap_lines`] for wrapping.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds fall back to a heuristic measurer.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::{format, string::String};
use fontfit_text::{HeuristicTextMeasurer, TextExtent, TextMeasurer, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls back
/// to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    fn css_font(style: &TextStyle) -> String {
        let family = style.font_family.as_css_family();
        let weight = style.font_weight.0;
        let font_style = match style.font_style {
            fontfit_text::FontStyle::Normal => "normal",
            fontfit_text::FontStyle::Italic => "italic",
            fontfit_text::FontStyle::Oblique => "oblique",
        };
        format!("{font_style} {weight} {}px {family}", style.font_size)
    }

    /// Creates a web measurer using an offscreen canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("fontfit_text_web: missing window"))?;
        let document = window.document().ok_or_else(|| {
            wasm_bindgen::JsValue::from_str("fontfit_text_web: missing document")
        })?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| {
                wasm_bindgen::JsValue::from_str("fontfit_text_web: missing 2d context")
            })?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a web measurer that uses an existing canvas 2D context.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(target_arch = "wasm32")]
    fn line_width(&self, line: &str, style: &TextStyle) -> Option<f64> {
        let metrics = self.ctx.measure_text(line).ok()?;
        let spacing = style.letter_spacing * line.chars().count() as f64;
        Some(metrics.width() + spacing)
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, constraint: TextExtent) -> TextExtent {
        #[cfg(target_arch = "wasm32")]
        {
            if text.is_empty() {
                return TextExtent::default();
            }
            self.ctx.set_font(&Self::css_font(style));

            // A failed `measureText` anywhere in the text invalidates the whole
            // measurement, so the heuristic is used for all of it.
            let mut failed = false;
            let mut width_of = |line: &str| {
                self.line_width(line, style).unwrap_or_else(|| {
                    failed = true;
                    0.0
                })
            };
            let lines = fontfit_text::wrap_lines(text, constraint.width, &mut width_of);
            let width = lines.iter().map(|line| width_of(line)).fold(0.0, f64::max);
            if failed {
                return HeuristicTextMeasurer.measure(text, style, constraint);
            }

            let height = lines.len() as f64 * style.line_height * style.font_size;
            TextExtent {
                width: width.max(0.0),
                height: height.max(0.0),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style, constraint)
    }
}
