use crate::observer::{BatchObserver, LogObserver};
use crate::partition::partition;
use crate::worker::{self, WorkerId};
use crate::DispatchError;
use chrono::{DateTime, Local};
use common::types::input::InputTable;
use common::types::record::ResultRecord;
use common::util::df::{records_to_frame, write_csv};
use log::{info, warn};
use planner::TripPlanner;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Number of workers to use if none is configured: one per processing unit of the host
pub fn host_parallelism() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or_else(|err| {
        warn!(target: "dispatch", "Unable to determine available parallelism, using one worker: {}", err);
        NonZeroUsize::MIN
    })
}

/// Output files carry the local time of the run in their name, so later runs don't overwrite
/// earlier ones (unless they happen within the same minute).
pub fn output_file_name(now: DateTime<Local>) -> String {
    format!("{}transitTimes.csv", now.format("%Y%m%d-%H%M"))
}

/// Splits the input table into one contiguous range per worker, plans all ranges concurrently and
/// puts the results back together in input order.
pub struct Driver {
    planner: Arc<dyn TripPlanner>,
    observer: Arc<dyn BatchObserver>,
    workers: NonZeroUsize,
}

impl Driver {
    pub fn new(planner: Arc<dyn TripPlanner>) -> Self {
        Self {
            planner,
            observer: Arc::new(LogObserver),
            workers: host_parallelism(),
        }
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn BatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Plans every trip of `table`. The n-th record belongs to the n-th row.
    ///
    /// If any worker fails, the remaining ones are cancelled and the error is returned.
    pub async fn process(&self, table: &InputTable) -> Result<Vec<ResultRecord>, DispatchError> {
        let rows = table.height();
        let ranges = partition(rows, self.workers);
        self.observer.batch_started(rows, &ranges);

        let mut tasks = JoinSet::new();
        for (i, range) in ranges.iter().copied().enumerate() {
            let table = table.clone();
            let planner = self.planner.clone();
            let observer = self.observer.clone();

            tasks.spawn(async move {
                let id = WorkerId(i);
                let records = worker::process(
                    id, range, &table, planner.as_ref(), observer.as_ref(),
                ).await?;
                Ok::<_, DispatchError>((id, records))
            });
        }

        // Workers finish in any order, so their results are slotted by worker index. Returning
        // early drops the join set, which aborts all workers still running.
        let mut partials: Vec<Vec<ResultRecord>> = vec![vec![]; ranges.len()];
        while let Some(joined) = tasks.join_next().await {
            let (id, records) = joined??;
            partials[id.0] = records;
        }

        let records = partials.into_iter().flatten().collect::<Vec<_>>();
        self.observer.batch_finished(records.len());

        Ok(records)
    }

    /// Plans every trip of `table` and writes the results into a new CSV file in `output_dir`.
    /// Nothing is written if the batch fails.
    pub async fn run(&self, table: &InputTable, output_dir: &Path) -> Result<PathBuf, DispatchError> {
        let records = self.process(table).await?;

        let path = output_dir.join(output_file_name(Local::now()));
        write_csv(path.clone(), records_to_frame(&records)?)?;
        info!(target: "dispatch", "Wrote {} results to {path:?}", records.len());

        Ok(path)
    }
}
