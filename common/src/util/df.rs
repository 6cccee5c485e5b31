use crate::types::record::ResultRecord;
use crate::util::distance::MAX_WALK_DISTANCE;
use polars::df;
use polars::error::{PolarsError, PolarsResult};
use polars::frame::DataFrame;
use polars::io::SerWriter;
use polars::prelude::CsvWriter;
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

pub const COL_TRIP_ID: &str = "Trip ID";
pub const COL_DURATION: &str = "Duration (min)";
pub const COL_WALK_TIME: &str = "Walking Time (min)";
pub const COL_TRANSIT_TIME: &str = "Transit Time (min)";
pub const COL_TRANSFERS: &str = "Transfers";
pub const COL_MESSAGE: &str = "Message";

/// The walking distance header doubles as documentation of the walking limit the batch ran with
pub fn walk_distance_column() -> String {
    format!("Walking Distance (Mi)/ MAX: {:1.1} (Mi)", MAX_WALK_DISTANCE.miles())
}

/// Builds the output table. Rows keep the order of `records`, absent values become nulls.
pub fn records_to_frame(records: &[ResultRecord]) -> PolarsResult<DataFrame> {
    df![
        COL_TRIP_ID => records.iter().map(|r| r.trip_id.0).collect::<Vec<_>>(),
        COL_DURATION => records.iter().map(|r| r.duration_min).collect::<Vec<_>>(),
        COL_WALK_TIME => records.iter().map(|r| r.walk_time_min).collect::<Vec<_>>(),
        COL_TRANSIT_TIME => records.iter().map(|r| r.transit_time_min).collect::<Vec<_>>(),
        walk_distance_column() => records.iter().map(|r| r.walk_distance_mi).collect::<Vec<_>>(),
        COL_TRANSFERS => records.iter().map(|r| r.transfers).collect::<Vec<_>>(),
        COL_MESSAGE => records.iter().map(|r| r.message.as_str()).collect::<Vec<_>>(),
    ]
}

pub fn write_csv(path: PathBuf, mut df: DataFrame) -> Result<(), PolarsError> {
    let mut file = prepare_file(path)?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;

    Ok(())
}

fn prepare_file(
    path: PathBuf,
) -> Result<File, std::io::Error> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(path)?;

    Ok(file)
}
