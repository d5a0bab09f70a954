pub mod collection;
pub mod donor;
