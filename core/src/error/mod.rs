#[allow(clippy::module_inception)]
pub mod error;

pub mod distribute;
pub mod roster;
pub mod table;

pub use distribute::{DistributeError, MatchError};
pub use error::CliError;
pub use roster::RosterError;
pub use table::TableError;
