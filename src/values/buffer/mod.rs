//! Offset-relocatable views over caller-owned register words.

mod macros;
mod ro;
mod rw;

pub use ro::RegisterView;
pub use rw::RegisterBuffer;

use crate::values::error::RegisterError;
use crate::values::types::Endianness;

/// Read access to register words by address.
pub trait RegisterRead {
    fn try_get_word(&self, address: u16) -> Result<u16, RegisterError>;

    fn try_get_wide(&self, address: u16, endianness: Endianness) -> Result<u32, RegisterError>;
}

/// Write access to register words by address.
pub trait RegisterWrite {
    fn try_set_word(&mut self, address: u16, value: u16) -> Result<(), RegisterError>;

    fn try_set_wide(
        &mut self,
        address: u16,
        value: u32,
        endianness: Endianness,
    ) -> Result<(), RegisterError>;
}
