//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the engine against the loaded records. Commands return whether the
//! query was valid so the binary can pick an exit code.

pub mod records;
pub mod search;
pub mod suggest;
pub mod validate;

pub use records::load_records;
pub use search::execute as search;
pub use suggest::execute as suggest;
pub use validate::execute as validate;
