use crate::types::range::IndexRange;
use crate::types::TripId;
use log::debug;
use polars::datatypes::DataType;
use polars::error::PolarsError;
use polars::frame::DataFrame;
use polars::prelude::{col, IntoLazy, LazyCsvReader, LazyFileListReader, LazyFrame};
use std::fmt;
use std::fmt::Display;
use std::path::Path;

pub const TRIP_ID: &str = "trip_id";
pub const SOURCE_LAT: &str = "source_lat";
pub const SOURCE_LON: &str = "source_lon";
pub const DEST_LAT: &str = "dest_lat";
pub const DEST_LON: &str = "dest_lon";
pub const ARRIVE_BY_TIME: &str = "arrive_by_time";
pub const ARRIVE_BY_DATE: &str = "arrive_by_date";

/// Columns every input table has to provide. Their names are what matters, the order in the file
/// doesn't. After loading, the table holds them in exactly this order.
pub const INPUT_COLUMNS: [&str; 7] = [
    TRIP_ID, SOURCE_LAT, SOURCE_LON, DEST_LAT, DEST_LON, ARRIVE_BY_TIME, ARRIVE_BY_DATE,
];

/// A single trip to plan. Time and date are handed to the planner as they are, so whatever format
/// the planner understands works here too.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub trip_id: TripId,
    pub source_lat: f64,
    pub source_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
    pub arrive_by_time: String,
    pub arrive_by_date: String,
}

/// The complete batch of trips, read once and then shared read-only between workers. Cloning is
/// cheap, since the underlying columns are reference counted.
#[derive(Debug, Clone)]
pub struct InputTable {
    frame: DataFrame,
}

impl InputTable {
    pub fn read_csv(path: &Path) -> Result<Self, ExtractError> {
        // Read everything as text first, so that the casts below decide the types and not the
        // schema inference of the reader
        let frame = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?;

        let table = Self::from_lazy(frame)?;
        debug!(target: "input", "Read {} rows from {path:?}", table.height());

        Ok(table)
    }

    pub fn from_frame(frame: DataFrame) -> Result<Self, ExtractError> {
        Self::from_lazy(frame.lazy())
    }

    fn from_lazy(frame: LazyFrame) -> Result<Self, ExtractError> {
        let frame = frame
            .select([
                col(TRIP_ID).strict_cast(DataType::Int64),
                col(SOURCE_LAT).strict_cast(DataType::Float64),
                col(SOURCE_LON).strict_cast(DataType::Float64),
                col(DEST_LAT).strict_cast(DataType::Float64),
                col(DEST_LON).strict_cast(DataType::Float64),
                col(ARRIVE_BY_TIME).cast(DataType::String),
                col(ARRIVE_BY_DATE).cast(DataType::String),
            ])
            .collect()?;

        Ok(Self { frame })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Extracts the rows at the positions of `range`, in order.
    pub fn rows(&self, range: IndexRange) -> Result<Vec<InputRow>, ExtractError> {
        if range.is_empty() {
            return Ok(vec![]);
        }

        let slice = self.frame.slice(range.start as i64, range.len());

        let trip_ids = slice.column(TRIP_ID)?.i64()?;
        let source_lats = slice.column(SOURCE_LAT)?.f64()?;
        let source_lons = slice.column(SOURCE_LON)?.f64()?;
        let dest_lats = slice.column(DEST_LAT)?.f64()?;
        let dest_lons = slice.column(DEST_LON)?.f64()?;
        let times = slice.column(ARRIVE_BY_TIME)?.str()?;
        let dates = slice.column(ARRIVE_BY_DATE)?.str()?;

        (0..slice.height())
            .map(|i| {
                let row = range.start + i;
                Ok(InputRow {
                    trip_id: TripId(required(trip_ids.get(i), TRIP_ID, row)?),
                    source_lat: required(source_lats.get(i), SOURCE_LAT, row)?,
                    source_lon: required(source_lons.get(i), SOURCE_LON, row)?,
                    dest_lat: required(dest_lats.get(i), DEST_LAT, row)?,
                    dest_lon: required(dest_lons.get(i), DEST_LON, row)?,
                    arrive_by_time: required(times.get(i), ARRIVE_BY_TIME, row)?.to_string(),
                    arrive_by_date: required(dates.get(i), ARRIVE_BY_DATE, row)?.to_string(),
                })
            })
            .collect()
    }
}

fn required<T>(value: Option<T>, column: &'static str, row: usize) -> Result<T, ExtractError> {
    value.ok_or(ExtractError::NullValue { column, row })
}

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    Polars(#[from] PolarsError),
    NullValue { column: &'static str, row: usize },
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtractError::Polars(err) => write!(f, "{}", err),
            ExtractError::NullValue { column, row } => {
                write!(f, "Missing value in column '{}' at row {}", column, row)
            }
        }
    }
}
