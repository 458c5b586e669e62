//! Message prefix (source) types.

mod serialize;
mod types;

pub use self::types::Prefix;
