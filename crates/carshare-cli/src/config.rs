//! Command line configuration

use std::path::PathBuf;

use carshare_core::logging_facility::Profile;
use clap::{Parser, ValueEnum};

pub const DEFAULT_DATABASE_NAME: &str = "carsharing";
pub const DEFAULT_DATA_DIR: &str = "db";

/// Single-dash spelling accepted for compatibility with older launch scripts
const LEGACY_DATABASE_FLAG: &str = "-databaseFileName";
const DATABASE_FLAG: &str = "--database-file-name";

#[derive(Debug, Parser)]
#[command(name = "carshare")]
#[command(about = "Car sharing - rent cars from companies at the console", long_about = None)]
pub struct Cli {
    /// Database file name, without extension
    #[arg(long, default_value = DEFAULT_DATABASE_NAME)]
    pub database_file_name: String,

    /// Directory holding the database files
    #[arg(long, env = "CARSHARE_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[arg(long, env = "CARSHARE_LOG_PROFILE", value_enum, default_value_t = LogProfile::Development)]
    pub log_profile: LogProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            database_file_name: DEFAULT_DATABASE_NAME.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_profile: LogProfile::Development,
        }
    }
}

impl Cli {
    /// Location of the database file; a blank name means the default one
    pub fn database_path(&self) -> PathBuf {
        let name = match self.database_file_name.trim() {
            "" => DEFAULT_DATABASE_NAME,
            name => name,
        };
        self.data_dir.join(format!("{}.db", name))
    }
}

/// Parse the process arguments, accepting the legacy database flag
pub fn parse<I>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    Cli::try_parse_from(args.into_iter().map(|arg| {
        if arg == LEGACY_DATABASE_FLAG {
            DATABASE_FLAG.to_string()
        } else {
            arg
        }
    }))
}
