//! Helper functions shared by the resolver, commands and server

mod date;
mod list;

pub use date::*;
pub use list::*;
