use clap::Parser;
use log::LevelFilter;
use planner::DEFAULT_PLANNER_URL;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Plans a batch of transit trips against a local trip planner and writes the results to CSV
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct BootstrapConfig {
    /// CSV file with the columns trip_id, source_lat, source_lon, dest_lat, dest_lon,
    /// arrive_by_time and arrive_by_date
    #[clap(env("TRIPBATCH_INPUT"))]
    pub input: PathBuf,
    #[clap(short('o'), long("output-dir"), env("TRIPBATCH_OUTPUT_DIR"), default_value_os = ".")]
    pub output_dir: PathBuf,
    /// Number of parallel workers [default: number of available processing units]
    #[clap(short('w'), long("workers"), env("TRIPBATCH_WORKERS"))]
    pub workers: Option<NonZeroUsize>,
    #[clap(short('u'), long("planner-url"), env("TRIPBATCH_PLANNER_URL"), default_value = DEFAULT_PLANNER_URL)]
    pub planner_url: String,
    #[clap(short('l'), long("log-level"), env("TRIPBATCH_LOG_LEVEL"), default_value_t, value_enum)]
    pub log_level: LogLevel,
}

impl BootstrapConfig {
    pub fn read() -> Self {
        BootstrapConfig::parse()
    }
}


#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
