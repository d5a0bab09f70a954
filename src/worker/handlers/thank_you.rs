use crate::{
    common::{error::Result, money::Money},
    domain::collection::DonorCollection,
};

/// Records a donation, creating the donor on first gift, and returns the letter.
pub fn handle(collection: &mut DonorCollection, name: &str, amount: Money) -> Result<String> {
    let donor = collection.record_donation(name, amount)?;
    DonorCollection::send_letter(donor)
}
