use core::cell::RefCell;

use critical_section::Mutex;

use crate::values::buffer::{RegisterBuffer, RegisterView};
use crate::values::error::RegisterError;

/// Register words shared between an interrupt context and the main loop.
///
/// Access goes through closures that run inside a critical section, so the
/// words can live in a `static`.
///
/// # Panics
///
/// Calling [`with_buffer`](Self::with_buffer) or [`with_view`](Self::with_view)
/// again from inside one of their closures panics.
pub struct SharedRegisters<const N: usize> {
    words: Mutex<RefCell<[u16; N]>>,
    offset: u16,
}

impl<const N: usize> SharedRegisters<N> {
    /// Zeroed words, the first at address `offset`.
    pub const fn new(offset: u16) -> Self {
        Self::from_words([0; N], offset)
    }

    pub const fn from_words(words: [u16; N], offset: u16) -> Self {
        Self {
            words: Mutex::new(RefCell::new(words)),
            offset,
        }
    }

    #[inline]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&RegisterView<'_>) -> R) -> R {
        critical_section::with(|cs| {
            let words = self.words.borrow_ref(cs);
            let view = RegisterView::with_offset(&words[..], self.offset);
            f(&view)
        })
    }

    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut RegisterBuffer<'_>) -> R) -> R {
        critical_section::with(|cs| {
            let mut words = self.words.borrow_ref_mut(cs);
            let mut buffer = RegisterBuffer::with_offset(&mut words[..], self.offset);
            f(&mut buffer)
        })
    }

    /// Copies `src` to the words starting at `address`.
    pub fn load(&self, address: u16, src: &[u16]) -> Result<(), RegisterError> {
        self.with_buffer(|buffer| buffer.try_write_words(address, src))
    }

    /// Copy of all words.
    pub fn snapshot(&self) -> [u16; N] {
        critical_section::with(|cs| *self.words.borrow_ref(cs))
    }
}

impl<const N: usize> Default for SharedRegisters<N> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::buffer::RegisterWrite;
    use crate::values::types::Endianness;

    static REGISTERS: SharedRegisters<8> = SharedRegisters::new(0x40);

    #[test]
    fn static_registers() {
        REGISTERS
            .with_buffer(|buffer| buffer.try_set_f32(0x40, 1.4, Endianness::Big))
            .unwrap();
        let value = REGISTERS.with_view(|view| view.try_get_f32(0x40, Endianness::Big));
        assert_eq!(value, Ok(1.4));
        assert_eq!(REGISTERS.snapshot()[..2], [0x3FB3, 0x3333]);
    }

    #[test]
    fn load_checks_bounds() {
        let shared = SharedRegisters::<4>::from_words([1, 2, 3, 4], 10);
        assert_eq!(shared.offset(), 10);
        shared.load(12, &[7, 8]).unwrap();
        assert_eq!(shared.snapshot(), [1, 2, 7, 8]);
        assert_eq!(
            shared.load(13, &[7, 8]),
            Err(RegisterError::OutOfRange { address: 13, count: 2 })
        );
        assert_eq!(shared.snapshot(), [1, 2, 7, 8]);
    }

    #[test]
    fn buffer_is_usable_as_trait_object() {
        let shared = SharedRegisters::<2>::default();
        shared.with_buffer(|buffer| {
            let writer: &mut dyn RegisterWrite = buffer;
            writer.try_set_wide(0, 0xDEAD_BEEF, Endianness::Little).unwrap();
        });
        assert_eq!(shared.snapshot(), [0xBEEF, 0xDEAD]);
    }
}
