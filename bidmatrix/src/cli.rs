// bidmatrix/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bidmatrix")]
#[command(about = "RFP requirement extraction and vendor proposal scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (holds bidmatrix.yaml and the evaluation matrix)
    #[arg(long, global = true, default_value = ".", env = "BIDMATRIX_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// More logs on stderr (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📋 Extracts requirements from an RFP and creates the evaluation matrix
    Analyze {
        /// RFP document (.pdf, .txt or .md)
        rfp: PathBuf,

        /// Also print the start of the extracted text
        #[arg(long, default_value = "false")]
        preview: bool,
    },

    /// 🏷️  Scores a vendor proposal and adds it to the matrix
    Score {
        /// Proposal document (.pdf, .txt or .md)
        proposal: PathBuf,

        /// Column name for this vendor (re-using a name overwrites its column)
        #[arg(long, short)]
        vendor: String,
    },

    /// 📊 Prints the evaluation matrix
    Show,

    /// 💾 Writes a copy of the evaluation matrix as CSV
    Export {
        /// Destination file
        #[arg(long, short)]
        output: PathBuf,
    },
}
