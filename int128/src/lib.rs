//! 128-bit unsigned ([`U128`]) and two's-complement signed ([`I128`])
//! integers stored as two 64-bit limbs.
//!
//! Plain operators wrap and never fail (division by zero yields zero); the
//! `safe_*` methods report [`ArithError`] instead.

pub mod bits;
pub mod convert;
pub mod div;
pub mod error;
pub mod int;
pub mod limb;
mod macros;
pub mod math;
pub mod safe;
pub mod uint;

pub use div::DivStrategy;
pub use error::{ArithError, SafeResult};
pub use int::I128;
pub use uint::U128;
