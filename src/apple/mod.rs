mod bridge;
mod calendar;
mod parser;
mod script;

pub use bridge::{Bridge, OsaScript};
#[cfg(test)]
pub(crate) use calendar::testing;
pub use calendar::{Calendar, EventChanges, NewEvent};
