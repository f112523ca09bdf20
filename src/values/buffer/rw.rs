use super::macros::{
    impl_buffer_common, impl_buffer_ro, impl_buffer_wo, impl_get_primitive, impl_get_primitives,
    impl_set_primitive, impl_set_primitives,
};
use super::ro::RegisterView;
use crate::values::error::RegisterError;
use crate::values::helpers::{combine_words, split_words, word_span};
use crate::values::types::Endianness;

/// Read-write register buffer.
///
/// Mutably borrows caller-owned words whose first element sits at `offset`.
/// Failed writes leave every word unchanged.
#[derive(Debug)]
pub struct RegisterBuffer<'a> {
    words: &'a mut [u16],
    offset: u16,
}

impl<'a> RegisterBuffer<'a> {
    #[inline]
    pub fn new(words: &'a mut [u16]) -> Self {
        Self::with_offset(words, 0)
    }

    /// Buffer whose first word has address `offset`.
    #[inline]
    pub fn with_offset(words: &'a mut [u16], offset: u16) -> Self {
        Self { words, offset }
    }

    /// Read-only view of the same words.
    #[inline]
    pub fn as_view(&self) -> RegisterView<'_> {
        RegisterView::with_offset(&*self.words, self.offset)
    }

    impl_buffer_common!();
    impl_buffer_ro!();
    impl_buffer_wo!();
}

impl super::RegisterRead for RegisterBuffer<'_> {
    #[inline]
    fn try_get_word(&self, address: u16) -> Result<u16, RegisterError> {
        RegisterBuffer::try_get_word(self, address)
    }

    #[inline]
    fn try_get_wide(&self, address: u16, endianness: Endianness) -> Result<u32, RegisterError> {
        RegisterBuffer::try_get_wide(self, address, endianness)
    }
}

impl super::RegisterWrite for RegisterBuffer<'_> {
    #[inline]
    fn try_set_word(&mut self, address: u16, value: u16) -> Result<(), RegisterError> {
        RegisterBuffer::try_set_word(self, address, value)
    }

    #[inline]
    fn try_set_wide(
        &mut self,
        address: u16,
        value: u32,
        endianness: Endianness,
    ) -> Result<(), RegisterError> {
        RegisterBuffer::try_set_wide(self, address, value, endianness)
    }
}
