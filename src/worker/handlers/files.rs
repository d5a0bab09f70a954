use std::{fs::File, io::BufWriter, path::Path};

use crate::{common::error::Result, domain::collection::DonorCollection};

/// Writes letters for every donor with a gift and lists the files written.
pub fn letters(collection: &DonorCollection, dir: &Path) -> Result<String> {
    let written = collection.write_letters(dir)?;
    let mut out = format!("Wrote {} letter(s) to {}\n", written.len(), dir.display());
    for path in written {
        out.push_str(&format!("  {}\n", path.display()));
    }
    Ok(out)
}

pub fn export(collection: &DonorCollection, path: &Path) -> Result<String> {
    let file = File::create(path)?;
    collection.write_summary(BufWriter::new(file))?;
    Ok(format!(
        "Exported {} donor(s) to {}\n",
        collection.len(),
        path.display()
    ))
}
