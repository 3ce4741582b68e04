//! An inline optional value container.
//!
//! [`Optional<T>`] holds zero or one `T` without allocating. Next to the
//! usual presence queries it offers checked access ([`Optional::value`],
//! failing with [`BadOptionalAccess`]), unchecked `unsafe` access, and
//! assignment that reuses the stored value instead of dropping and
//! rebuilding it.
#![no_std]

#[cfg(test)]
extern crate std;

#[macro_use]
mod log;

mod error;
mod optional;

pub use error::BadOptionalAccess;
pub use optional::Optional::{self, *};

#[cfg(feature = "aliases")]
pub type Opt<T> = Optional<T>;
