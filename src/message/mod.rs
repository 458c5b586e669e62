pub mod escape;
mod nom_parser;
mod parse;
pub(crate) mod serialize;
pub mod tags;
mod types;

pub use self::tags::Tags;
pub use self::types::Message;
