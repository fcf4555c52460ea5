mod distributor;
mod matcher;

pub use distributor::{DistributeOptions, DistributeSummary, Distributor};
pub use matcher::{resolve_assignments, FolderAssignment};
