//! CLI definitions for the `gramin` binary.

pub mod chat;
pub mod emergency;
pub mod locate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gramin",
    about = "Health companion for rural settings: symptom chat, facility locator, emergency lines",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON where supported
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Talk to the health assistant
    Chat,

    /// Find nearby hospitals, health centers, and clinics
    Locate {
        /// Latitude to search around (skips the location provider)
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude to search around
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Show the emergency dial directory
    Emergency,
}
