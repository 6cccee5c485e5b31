pub mod bootstrap_config;
mod batch;

use batch::run_batch;
use bootstrap_config::BootstrapConfig;
use common::types::input::{ExtractError, InputTable};
use common::util::logging;
use dispatch::{host_parallelism, DispatchError, Driver};
use log::{error, info, SetLoggerError};
use planner::{OtpClient, PlannerError};
use std::fmt::{Display, Formatter};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "main", "{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BatchError> {
    let bootstrap_config = BootstrapConfig::read();

    logging::initialize_logging(bootstrap_config.log_level.into())?;

    let table = logging::run_with_spinner("input", "Reading input table", || {
        InputTable::read_csv(&bootstrap_config.input)
    })?;
    info!(target: "main", "Read {} trips from {:?}", table.height(), bootstrap_config.input);

    let planner = OtpClient::new(&bootstrap_config.planner_url)?;
    info!(target: "main", "Using trip planner at {}", planner.plan_url());

    let workers = bootstrap_config.workers.unwrap_or_else(host_parallelism);
    let driver = Driver::new(Arc::new(planner)).with_workers(workers);
    info!(target: "main", "Dispatching on {} workers", driver.workers());

    let path = run_batch(driver, table, &bootstrap_config.output_dir).await?;
    info!(target: "main", "Results written to {:?}", path);

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    Logging(#[from] SetLoggerError),
    Input(#[from] ExtractError),
    Planner(#[from] PlannerError),
    Dispatch(#[from] DispatchError),
}

impl Display for BatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            BatchError::Logging(err) => err,
            BatchError::Input(err) => err,
            BatchError::Planner(err) => err,
            BatchError::Dispatch(err) => err,
        };
        let prefix = match self {
            BatchError::Logging(_) => "Setting up logging",
            BatchError::Input(_) => "Reading input table",
            BatchError::Planner(_) => "Setting up trip planner",
            BatchError::Dispatch(_) => "Running batch",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
