use std::path::PathBuf;

use crate::common::money::Money;

/// A request sent from the command line to the worker for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailroomEvent {
    ThankYou { name: String, amount: Money },
    Report,
    List,
    Rename { from: String, to: String },
    Letters { dir: PathBuf },
    Export { path: PathBuf },
}

impl MailroomEvent {
    /// Whether processing this event changes the donor collection.
    pub fn mutates(&self) -> bool {
        matches!(self, Self::ThankYou { .. } | Self::Rename { .. })
    }
}
