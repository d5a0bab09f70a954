use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    common::{
        error::{AppError, Result},
        money::Money,
    },
    domain::donor::Donor,
    io::{letter, report, snapshot, writer},
};

/// All known donors, keyed by name and kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct DonorCollection {
    donors: Vec<Donor>,
    index: HashMap<String, usize>,
}

impl DonorCollection {
    pub fn new() -> Self {
        Self {
            donors: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a collection keyed by each donor's name. When two donors share a
    /// name the later one wins and takes over the earlier one's position.
    pub fn from_donors<I>(donors: I) -> Self
    where
        I: IntoIterator<Item = Donor>,
    {
        let mut collection = Self::new();
        for donor in donors {
            let name = donor.name().to_string();
            collection.insert(name, donor);
        }
        collection
    }

    fn insert(&mut self, name: String, donor: Donor) -> &mut Donor {
        let slot = match self.index.get(&name) {
            Some(&slot) => {
                self.donors[slot] = donor;
                slot
            }
            None => {
                self.donors.push(donor);
                let slot = self.donors.len() - 1;
                self.index.insert(name, slot);
                slot
            }
        };
        &mut self.donors[slot]
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    /// Donors in storage order.
    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn get_donor(&self, name: &str) -> Option<&Donor> {
        tracing::debug!(donor = %name, "looking up donor");
        self.index.get(name).map(|&slot| &self.donors[slot])
    }

    pub fn get_donor_mut(&mut self, name: &str) -> Option<&mut Donor> {
        self.index.get(name).map(|&slot| &mut self.donors[slot])
    }

    /// Stores a fresh donor with no donations under `name`.
    ///
    /// An existing donor of the same name is replaced and its history is
    /// lost. Use [`get_or_add_donor`](Self::get_or_add_donor) to keep it.
    pub fn add_donor(&mut self, name: &str) -> &mut Donor {
        if self.index.contains_key(name) {
            tracing::warn!(donor = %name, "replacing existing donor and its donations");
        } else {
            tracing::info!(donor = %name, "adding donor");
        }
        self.insert(name.to_string(), Donor::new(name))
    }

    pub fn get_or_add_donor(&mut self, name: &str) -> &mut Donor {
        match self.index.get(name) {
            Some(&slot) => &mut self.donors[slot],
            None => self.add_donor(name),
        }
    }

    /// Records a gift for `name`, adding the donor if needed. A rejected
    /// amount leaves the collection unchanged.
    pub fn record_donation(&mut self, name: &str, amount: Money) -> Result<&Donor> {
        if let Some(&slot) = self.index.get(name) {
            self.donors[slot].add_donation(amount)?;
            return Ok(&self.donors[slot]);
        }
        let donor = Donor::with_donations(name, [amount])?;
        tracing::info!(donor = %name, %amount, "adding donor with first donation");
        Ok(&*self.insert(name.to_string(), donor))
    }

    /// Renames a donor and re-keys it, keeping its position and history.
    pub fn rename_donor(&mut self, old: &str, new: &str) -> Result<()> {
        let Some(&slot) = self.index.get(old) else {
            return Err(AppError::DonorNotFound {
                name: old.to_string(),
            });
        };
        if old == new {
            return Ok(());
        }
        if self.index.contains_key(new) {
            return Err(AppError::DuplicateDonor {
                name: new.to_string(),
            });
        }
        self.index.remove(old);
        self.donors[slot].set_name(new);
        self.index.insert(new.to_string(), slot);
        tracing::info!(from = %old, to = %new, "donor renamed");
        Ok(())
    }

    /// Donors by descending total. Donors with equal totals stay adjacent and
    /// keep their storage order.
    pub fn ranked(&self) -> Vec<&Donor> {
        let mut ranked: Vec<&Donor> = self.donors.iter().collect();
        ranked.sort_by(|a, b| b.total_donations().cmp(&a.total_donations()));
        ranked
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        snapshot::write_snapshot(BufWriter::new(file), &self.donors)?;
        tracing::info!(path = %path.display(), donors = self.len(), "snapshot saved");
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AppError::SnapshotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_donors(snapshot::read_snapshot(BufReader::new(file))?);
        tracing::info!(path = %path.display(), donors = collection.len(), "snapshot loaded");
        Ok(collection)
    }

    pub fn send_letter(donor: &Donor) -> Result<String> {
        tracing::info!(donor = %donor.name(), "generating thank you letter");
        letter::render_letter(donor)
    }

    pub fn get_donor_report(&self) -> String {
        tracing::info!(donors = self.len(), "generating donor report");
        report::render_report(self.ranked())
    }

    pub fn write_letters(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        letter::write_letters(dir.as_ref(), &self.donors)
    }

    /// Writes the CSV donor summary in report order.
    pub fn write_summary<W: Write>(&self, out: W) -> Result<()> {
        writer::write_summary(out, self.ranked())?;
        Ok(())
    }
}
