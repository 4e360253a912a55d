// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo binary for `fontfit`.
//!
//! Fits a few labels and prints the chosen sizes. Run with
//! `RUST_LOG=fontfit=trace` to watch the probes.

use fontfit::{FitConfig, Label};
use fontfit_text::{FontWeight, TextMeasurer, TextStyle};
use kurbo::Size;
use peniko::Color;

fn main() {
    env_logger::init();

    let measurer = demo_measurer();

    let mut labels = vec![
        Label::new("Hello", Size::new(200.0, 40.0)),
        Label::new("A considerably longer headline", Size::new(200.0, 40.0)),
        Label::new("alpha beta gamma", Size::new(40.0, 60.0)).with_max_lines(0),
        Label::new(
            "Wrapped body copy that should fill a small card without overflowing it",
            Size::new(160.0, 120.0),
        )
        .with_max_lines(0)
        .with_style(TextStyle::new(12.0).with_line_height(1.2))
        .with_fill(Color::from_rgba8(30, 30, 30, 255)),
        Label::new("Bold title", Size::new(300.0, 60.0))
            .with_style(TextStyle::new(12.0).with_font_weight(FontWeight::BOLD)),
        Label::new("", Size::new(100.0, 20.0)),
    ];

    let config = FitConfig::new();
    for label in &mut labels {
        let report = label.fit_report(&label.text, &config, measurer.as_ref());
        label.style.font_size = report.font_size;
        println!(
            "{:?} in {}x{} ({:?}): font size {:.2} after {} probes ({:?})",
            label.text,
            label.bounds.width,
            label.bounds.height,
            label.line_mode(),
            label.font_size(),
            report.probes,
            report.state,
        );
    }

    let tight = FitConfig::new()
        .with_max_font_size(30.0)
        .with_min_font_scale(0.5)
        .with_target_size(Size::new(120.0, 30.0));
    let probe = Label::new("", Size::ZERO);
    let size = probe.font_size_that_fits("Limited range", &tight, measurer.as_ref());
    println!("\"Limited range\" with max 30 and scale 0.5: font size {size:.2}");
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(fontfit_text_parley::ParleyTextMeasurer::new())
    }
    #[cfg(not(feature = "parley"))]
    {
        Box::new(fontfit_text::HeuristicTextMeasurer)
    }
}
