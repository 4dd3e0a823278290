//! Straightforward serialisation of PDF objects, no compression and no
//! pretty printing.

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod name;
pub(crate) mod object;
pub(crate) mod string;

pub use string::write_hex_string;

pub struct SimpleEncoder;
