// In-memory roster: person records, free-text parsing, and list upkeep.

pub mod parse;
pub mod person;
pub mod store;

pub use parse::parse_names;
pub use person::{IdGenerator, Person, PersonId};
pub use store::Roster;
