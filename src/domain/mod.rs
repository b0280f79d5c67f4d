pub mod entry;

pub use entry::{DEFAULT_STATUS, Entry, NewEntry};
