pub mod error;

pub use error::AddressError;
