use std::{io::Write, path::Path};

use crate::{
    cli::Cli,
    common::error::Result,
    config::Config,
    domain::collection::DonorCollection,
    worker::processor::Processor,
};

/// Loads the snapshot, or starts empty when it does not exist yet.
fn load_collection(path: &Path) -> Result<DonorCollection> {
    match DonorCollection::load_from_file(path) {
        Ok(collection) => Ok(collection),
        Err(e) if e.is_missing_snapshot() => {
            tracing::info!(path = %path.display(), "no snapshot yet, starting empty");
            Ok(DonorCollection::new())
        }
        Err(e) => Err(e),
    }
}

pub fn run<W: Write>(cli: Cli, mut out: W) -> Result<()> {
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(snapshot) = cli.snapshot {
        config.storage.snapshot_path = snapshot;
        config.validate()?;
    }
    let snapshot_path = config.storage.snapshot_path.clone();

    let mut collection = load_collection(&snapshot_path)?;
    let mut processor = Processor::new();

    let event = cli.command.into_event(&config);
    let mutates = event.mutates();
    let output = processor.process(&mut collection, event)?;

    // Snapshot is written before any output.
    if mutates && config.storage.autosave {
        collection.save_to_file(&snapshot_path)?;
    }

    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
