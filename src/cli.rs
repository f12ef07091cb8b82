use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "copview")]
#[command(about = "Game map to COP spreadsheet / C2 layer export tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the game map as an xlsx table
    Table {
        /// Input game map JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Output workbook (default: "COP View.xlsx")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the game map as an XML layer document
    Layer {
        /// Input game map JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Layer kind (situation/plan)
        #[arg(short, long, default_value = "situation")]
        kind: LayerKind,

        /// Output file (default: LandPower.slf / LandPower.spl)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerKind {
    #[default]
    Situation,
    Plan,
}

impl std::str::FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "situation" | "slf" => Ok(LayerKind::Situation),
            "plan" | "spl" => Ok(LayerKind::Plan),
            _ => Err(format!("Unknown layer kind: {}. Use situation or plan", s)),
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Situation => write!(f, "situation"),
            LayerKind::Plan => write!(f, "plan"),
        }
    }
}
