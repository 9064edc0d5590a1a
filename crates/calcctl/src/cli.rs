//! Command-line argument parsing
//!
//! Calculator inputs are taken as raw strings and validated by the page
//! forms, so a missing or malformed value is reported the same way the
//! form would report it (and nothing is sent).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// India Tools - free calculators from the command line
#[derive(Parser, Debug)]
#[command(name = "calcctl")]
#[command(about = "India Tools - Free Calculators & Tools", long_about = None)]
#[command(version = env!("CALCCTL_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Calculation server base URL (overrides the config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Path to config file; must exist (overrides $INDIA_TOOLS_CONFIG and defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand (if not provided, shows the landing page)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Browse the tool catalog
    List {
        /// Case-insensitive match on name, description or keyword
        #[arg(long, default_value = "")]
        search: String,

        /// All, Personal, Education, Business or Finance
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Open a page by path, e.g. `/` or `/tools/gst`
    Open { path: String },

    /// Age Calculator
    Age {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        dob: String,
    },

    /// CGPA to Percentage
    Cgpa {
        #[arg(long, default_value = "")]
        cgpa: String,

        /// default, VTU, Mumbai, Anna, AKTU or PTU
        #[arg(long, default_value = "default")]
        university: String,
    },

    /// GST Calculator
    Gst {
        #[arg(long, default_value = "")]
        amount: String,

        /// GST slab in percent
        #[arg(long, default_value = "18", value_parser = ["5", "12", "18", "28"])]
        rate: String,
    },

    /// EMI Calculator
    Emi {
        /// Loan amount
        #[arg(long, default_value = "")]
        principal: String,

        /// Annual interest rate in percent
        #[arg(long, default_value = "")]
        annual_rate: String,

        /// Loan tenure in months
        #[arg(long, default_value = "")]
        tenure_months: String,
    },

    /// Check that the calculation server is up
    Status,
}

impl Commands {
    /// Name recorded in the invocation log
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Open { .. } => "open",
            Commands::Age { .. } => "age",
            Commands::Cgpa { .. } => "cgpa",
            Commands::Gst { .. } => "gst",
            Commands::Emi { .. } => "emi",
            Commands::Status => "status",
        }
    }
}
