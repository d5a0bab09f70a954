pub mod letter;
pub mod report;
pub mod snapshot;
pub mod writer;
