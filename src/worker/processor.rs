use crate::{
    common::{error::Result, event::MailroomEvent},
    domain::collection::DonorCollection,
    worker::handlers::{donors, files, thank_you},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Applies one event and returns the text to show the user.
    pub fn process(
        &mut self,
        collection: &mut DonorCollection,
        event: MailroomEvent,
    ) -> Result<String> {
        tracing::debug!(?event, "processing event");
        match event {
            MailroomEvent::ThankYou { name, amount } => {
                thank_you::handle(collection, &name, amount)
            }
            MailroomEvent::Report => Ok(donors::report(collection)),
            MailroomEvent::List => Ok(donors::list(collection)),
            MailroomEvent::Rename { from, to } => donors::rename(collection, &from, &to),
            MailroomEvent::Letters { dir } => files::letters(collection, &dir),
            MailroomEvent::Export { path } => files::export(collection, &path),
        }
    }
}
