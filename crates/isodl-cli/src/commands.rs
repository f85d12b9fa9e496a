//! Commands enum.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List distribution families
    Families,

    /// List the distributions of a family
    Distros {
        /// Family key (e.g. "debian-based")
        family: String,
    },

    /// Show a distribution's configuration
    Show {
        /// Family key
        family: String,
        /// Distribution key (e.g. "debian")
        distro: String,
    },

    /// Resolve download URLs for one or more versions
    Resolve {
        /// Family key
        family: String,
        /// Distribution key
        distro: String,
        /// Versions to resolve; all configured versions when omitted
        #[arg(conflicts_with = "all")]
        versions: Vec<String>,
        /// Resolve every configured version
        #[arg(long)]
        all: bool,
        /// Print the resolved items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog and report incomplete distributions
    Check,

    /// Show where the catalog is loaded from
    Source,
}
