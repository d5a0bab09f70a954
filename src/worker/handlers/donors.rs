use crate::{common::error::Result, domain::collection::DonorCollection};

/// One donor name per line, in storage order.
pub fn list(collection: &DonorCollection) -> String {
    collection
        .donors()
        .iter()
        .map(|d| format!("{}\n", d.name()))
        .collect()
}

pub fn rename(collection: &mut DonorCollection, from: &str, to: &str) -> Result<String> {
    collection.rename_donor(from, to)?;
    Ok(format!("Renamed {from} to {to}\n"))
}

pub fn report(collection: &DonorCollection) -> String {
    collection.get_donor_report()
}
