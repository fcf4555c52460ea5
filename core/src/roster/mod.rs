mod model;
mod sheet;

pub use model::{Roster, StudentRow};
pub use sheet::load_grid;
