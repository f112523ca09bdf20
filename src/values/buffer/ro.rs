use super::macros::{impl_buffer_common, impl_buffer_ro, impl_get_primitive, impl_get_primitives};
use crate::values::error::RegisterError;
use crate::values::helpers::{combine_words, word_span};
use crate::values::types::Endianness;

/// Read-only register view.
///
/// Wraps borrowed words whose first element sits at `offset`. Every access is
/// bounds checked against the translated address.
#[derive(Debug, Clone, Copy)]
pub struct RegisterView<'a> {
    words: &'a [u16],
    offset: u16,
}

impl<'a> RegisterView<'a> {
    #[inline]
    pub fn new(words: &'a [u16]) -> Self {
        Self::with_offset(words, 0)
    }

    /// View whose first word has address `offset`.
    #[inline]
    pub fn with_offset(words: &'a [u16], offset: u16) -> Self {
        Self { words, offset }
    }

    impl_buffer_common!();
    impl_buffer_ro!();
}

impl super::RegisterRead for RegisterView<'_> {
    #[inline]
    fn try_get_word(&self, address: u16) -> Result<u16, RegisterError> {
        RegisterView::try_get_word(self, address)
    }

    #[inline]
    fn try_get_wide(&self, address: u16, endianness: Endianness) -> Result<u32, RegisterError> {
        RegisterView::try_get_wide(self, address, endianness)
    }
}
