use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spring-source-generator")]
#[command(version, about = "Generate Spring/JPA sources from database catalog metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sources for a comma-separated list of tables or views
    Generate {
        /// Table/view names, each optionally DATABASE.NAME-qualified
        tables: String,

        /// Root package of the generated classes
        #[arg(short, long, default_value = "com.example")]
        root_package: String,

        /// Also generate transfer objects
        #[arg(long)]
        dto: bool,

        /// Also generate service and repository stubs
        #[arg(long)]
        service_repository: bool,

        /// Database used for unqualified names
        #[arg(short, long)]
        database: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,

        /// Write a single .java or .zip payload instead of a source tree
        #[arg(long)]
        archive: bool,
    },

    /// Generate sources from a TOML request file
    FromRequest {
        /// Request file (tableNames, rootPackage, generateDto, generateServiceRepository)
        request_file: PathBuf,

        /// Database used for unqualified names
        #[arg(short, long)]
        database: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,

        /// Write a single .java or .zip payload instead of a source tree
        #[arg(long)]
        archive: bool,
    },

    /// List the tables known to the fixture catalog
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
