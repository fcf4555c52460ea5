pub mod cli;
pub mod convert;
pub mod distribute;
