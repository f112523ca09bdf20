//! Test support utilities - only compiled in test builds.

use core::cell::Cell;

use crate::values::formatting::{FloatPrecision, ValueFormatting};
use crate::values::item::ValueChanged;

/// Words holding their own address, starting at `first`.
pub fn counting_words<const N: usize>(first: u16) -> [u16; N] {
    let mut words = [0u16; N];
    for (i, word) in words.iter_mut().enumerate() {
        *word = first.wrapping_add(i as u16);
    }
    words
}

/// Formatting whose primary float rules print round-trip precision.
pub fn round_trip_formatting() -> ValueFormatting {
    ValueFormatting::builder()
        .precision(FloatPrecision::ROUND_TRIP)
        .build()
        .expect("round-trip precision is valid")
}

/// Observer that counts notifications and keeps the last one.
pub struct Recorder<T: Copy> {
    pub count: Cell<usize>,
    pub last: Cell<Option<ValueChanged<T>>>,
}

impl<T: Copy> Recorder<T> {
    pub fn new() -> Self {
        Self {
            count: Cell::new(0),
            last: Cell::new(None),
        }
    }

    /// Closure observer borrowing this recorder.
    pub fn observer(&self) -> impl FnMut(&ValueChanged<T>) + '_ {
        move |change| {
            self.count.set(self.count.get() + 1);
            self.last.set(Some(*change));
        }
    }
}
