// Copyright 2025 the FontFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurers used by the unit tests.

use core::cell::Cell;

use fontfit_text::{TextExtent, TextMeasurer, TextStyle};

/// Wraps a measurer and counts how often it is called.
#[derive(Debug)]
pub(crate) struct CountingMeasurer<M> {
    inner: M,
    calls: Cell<usize>,
}

impl<M> CountingMeasurer<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<M: TextMeasurer> TextMeasurer for CountingMeasurer<M> {
    fn measure(&self, text: &str, style: &TextStyle, constraint: TextExtent) -> TextExtent {
        self.calls.set(self.calls.get() + 1);
        self.inner.measure(text, style, constraint)
    }
}

/// Reports the same extent for every input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedMeasurer(pub(crate) TextExtent);

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, _text: &str, _style: &TextStyle, _constraint: TextExtent) -> TextExtent {
        self.0
    }
}
