/// Generates a typed getter for a single primitive type.
macro_rules! impl_get_primitive {
    // Single word types - no word order
    ($type:ident, word, |$w:ident| $conv:expr) => {
        paste::paste! {
            #[doc = "Reads the word at `address` as `" $type "`."]
            #[inline]
            pub fn [<try_get_ $type>](&self, address: u16) -> Result<$type, RegisterError> {
                let $w = self.try_get_word(address)?;
                Ok($conv)
            }
        }
    };
    // Two word types - explicit word order
    ($type:ident, wide, |$w:ident| $conv:expr) => {
        paste::paste! {
            #[doc = "Reads the word pair at `address` as `" $type "`."]
            #[inline]
            pub fn [<try_get_ $type>](
                &self,
                address: u16,
                endianness: Endianness,
            ) -> Result<$type, RegisterError> {
                let $w = self.try_get_wide(address, endianness)?;
                Ok($conv)
            }
        }
    };
}

/// Generates typed getters for the register-sized primitives.
macro_rules! impl_get_primitives {
    () => {
        impl_get_primitive!(u16, word, |w| w);
        impl_get_primitive!(i16, word, |w| w as i16);
        impl_get_primitive!(u32, wide, |w| w);
        impl_get_primitive!(i32, wide, |w| w as i32);
        impl_get_primitive!(f32, wide, |w| f32::from_bits(w));
    };
}

/// Generates a typed setter for a single primitive type.
macro_rules! impl_set_primitive {
    ($type:ident, word, |$v:ident| $conv:expr) => {
        paste::paste! {
            #[doc = "Writes `" $type "` to the word at `address`."]
            #[inline]
            pub fn [<try_set_ $type>](&mut self, address: u16, $v: $type) -> Result<(), RegisterError> {
                self.try_set_word(address, $conv)
            }
        }
    };
    ($type:ident, wide, |$v:ident| $conv:expr) => {
        paste::paste! {
            #[doc = "Writes `" $type "` to the word pair at `address`."]
            #[inline]
            pub fn [<try_set_ $type>](
                &mut self,
                address: u16,
                $v: $type,
                endianness: Endianness,
            ) -> Result<(), RegisterError> {
                self.try_set_wide(address, $conv, endianness)
            }
        }
    };
}

/// Generates typed setters for the register-sized primitives.
macro_rules! impl_set_primitives {
    () => {
        impl_set_primitive!(u16, word, |v| v);
        impl_set_primitive!(i16, word, |v| v as u16);
        impl_set_primitive!(u32, wide, |v| v);
        impl_set_primitive!(i32, wide, |v| v as u32);
        impl_set_primitive!(f32, wide, |v| v.to_bits());
    };
}

/// Generates common buffer methods (len, is_empty, offset, words).
macro_rules! impl_buffer_common {
    () => {
        /// Number of words in the buffer.
        #[inline]
        pub fn len(&self) -> usize {
            self.words.len()
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            self.words.is_empty()
        }

        /// Address of the first word.
        #[inline]
        pub fn offset(&self) -> u16 {
            self.offset
        }

        /// Underlying words, first word at `offset`.
        #[inline]
        pub fn words(&self) -> &[u16] {
            &*self.words
        }
    };
}

/// Generates read methods (word, wide, ranges, typed getters).
macro_rules! impl_buffer_ro {
    () => {
        /// Reads the word at `address`.
        #[inline]
        pub fn try_get_word(&self, address: u16) -> Result<u16, RegisterError> {
            let (start, _) = word_span(address, self.offset, 1, self.words.len())?;
            Ok(self.words[start])
        }

        /// Reads the 32-bit value stored in the words at `address` and `address + 1`.
        #[inline]
        pub fn try_get_wide(&self, address: u16, endianness: Endianness) -> Result<u32, RegisterError> {
            let (start, _) = word_span(address, self.offset, 2, self.words.len())?;
            Ok(combine_words(self.words[start], self.words[start + 1], endianness))
        }

        /// Copies `dest.len()` words starting at `address`.
        pub fn try_read_words(&self, address: u16, dest: &mut [u16]) -> Result<(), RegisterError> {
            let (start, end) = word_span(address, self.offset, dest.len(), self.words.len())?;
            dest.copy_from_slice(&self.words[start..end]);
            Ok(())
        }

        impl_get_primitives!();
    };
}

/// Generates write methods (word, wide, ranges, fill, typed setters).
macro_rules! impl_buffer_wo {
    () => {
        /// Writes the word at `address`.
        #[inline]
        pub fn try_set_word(&mut self, address: u16, value: u16) -> Result<(), RegisterError> {
            let (start, _) = word_span(address, self.offset, 1, self.words.len())?;
            self.words[start] = value;
            Ok(())
        }

        /// Writes a 32-bit value to the words at `address` and `address + 1`.
        ///
        /// Nothing is written when either word is out of range.
        #[inline]
        pub fn try_set_wide(
            &mut self,
            address: u16,
            value: u32,
            endianness: Endianness,
        ) -> Result<(), RegisterError> {
            let (start, end) = word_span(address, self.offset, 2, self.words.len())?;
            self.words[start..end].copy_from_slice(&split_words(value, endianness));
            Ok(())
        }

        /// Copies `src` into the words starting at `address`.
        pub fn try_write_words(&mut self, address: u16, src: &[u16]) -> Result<(), RegisterError> {
            let (start, end) = word_span(address, self.offset, src.len(), self.words.len())?;
            self.words[start..end].copy_from_slice(src);
            Ok(())
        }

        /// Fills every word with `value`.
        #[inline]
        pub fn fill(&mut self, value: u16) {
            self.words.fill(value);
        }

        impl_set_primitives!();
    };
}

pub(super) use impl_buffer_common;
pub(super) use impl_buffer_ro;
pub(super) use impl_buffer_wo;
pub(super) use impl_get_primitive;
pub(super) use impl_get_primitives;
pub(super) use impl_set_primitive;
pub(super) use impl_set_primitives;
