pub mod driver;
pub mod observer;
pub mod partition;
pub mod worker;

use common::types::input::ExtractError;
use planner::{MapError, PlannerError};
use polars::error::PolarsError;
use std::fmt;
use std::fmt::Display;

pub use driver::{host_parallelism, output_file_name, Driver};
pub use observer::{BatchObserver, LogObserver};
pub use worker::WorkerId;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    Extract(#[from] ExtractError),
    Planner(#[from] PlannerError),
    Map(#[from] MapError),
    Join(#[from] tokio::task::JoinError),
    Polars(#[from] PolarsError),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let err: &dyn Display = match self {
            DispatchError::Extract(err) => err,
            DispatchError::Planner(err) => err,
            DispatchError::Map(err) => err,
            DispatchError::Join(err) => err,
            DispatchError::Polars(err) => err,
        };
        write!(f, "{}", err)
    }
}
