//! A `no_std`, no-alloc engine for typed register values.
//!
//! This crate converts raw 16-bit storage words into strongly-typed numeric values,
//! renders them as decimal, hexadecimal or binary text, parses user text back into
//! values, and composes 32-bit values from word pairs under an explicit word order.
//!
//! # Features
//!
//! - **Zero heap allocation** - formatted text lives in fixed-capacity strings
//! - **Monomorphized numeric dispatch** - no runtime type registry on hot paths
//! - **Rule-based formatting** - primary and alternate rules per type and radix
//! - **Bounds-checked buffers** - offset-relocatable views over caller-owned words
//! - **Typed data items** - one word or two words per value, same API
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  text   ┌──────────────────────────┐  words  ┌────────────────┐
//! │   UI / codec     │────────▶│  TypedDataItem<T, L>     │────────▶│ RegisterBuffer │
//! │                  │◀────────│  FormattedValue<T>       │◀────────│ (&mut [u16])   │
//! │                  │         │  ValueFormatting rules   │         │                │
//! └──────────────────┘         └──────────────────────────┘         └────────────────┘
//! ```
//!
//! - **Formatting** resolves a rule per (type, representation) and falls back to the
//!   condensed alternate rule when the output would exceed the caller's ceiling
//! - **Parsing** strips the registered affixes and honors the empty-input policy
//! - **Items** read and write their words through the buffer passed on each call
//!
//! # Example
//!
//! ```rust,no_run
//! use register_values::prelude::*;
//!
//! let mut words = [0u16; 64];
//! let mut buffer = RegisterBuffer::new(&mut words);
//!
//! let mut item = VirtualDataItem::<f32>::with_options(0x10, 0, FormatOptions::DECIMAL);
//! item.parse("1234.567", None).unwrap();
//! item.write_to(&mut buffer, Endianness::Big).unwrap();
//!
//! assert_eq!(buffer.try_get_word(0x10), Ok(0x449A));
//! assert_eq!(buffer.try_get_word(0x11), Ok(0x5225));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

pub mod values;

pub mod prelude {
    pub use crate::values::prelude::*;
}
