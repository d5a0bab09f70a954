//! Donor tracking: donation histories, thank-you letters and ranked reports,
//! persisted as a single JSON snapshot.

pub mod app;
pub mod cli;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod worker;

pub use domain::{collection::DonorCollection, donor::Donor};
