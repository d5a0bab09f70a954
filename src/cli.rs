//! Command-line interface for the `mailroom` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    common::{event::MailroomEvent, money::Money},
    config::Config,
    logging::Verbosity,
};

/// mailroom - track donors, thank them, and report on their gifts
#[derive(Debug, Parser)]
#[command(name = "mailroom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Donor snapshot to use instead of the configured one
    #[arg(short, long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a donation and print the thank-you letter
    ThankYou {
        /// Donor name; a new donor is created on their first gift
        name: String,
        /// Donation amount, e.g. 25.50
        amount: Money,
    },

    /// Print donors ranked by total given
    Report,

    /// Print all donor names
    List,

    /// Rename a donor, keeping their history
    Rename { from: String, to: String },

    /// Write a thank-you letter file for every donor
    Letters {
        /// Output directory (defaults to storage.letters_dir)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write a CSV summary of all donors
    Export {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

impl Command {
    pub fn into_event(self, config: &Config) -> MailroomEvent {
        match self {
            Command::ThankYou { name, amount } => MailroomEvent::ThankYou { name, amount },
            Command::Report => MailroomEvent::Report,
            Command::List => MailroomEvent::List,
            Command::Rename { from, to } => MailroomEvent::Rename { from, to },
            Command::Letters { dir } => MailroomEvent::Letters {
                dir: dir.unwrap_or_else(|| config.storage.letters_dir.clone()),
            },
            Command::Export { path } => MailroomEvent::Export { path },
        }
    }
}
