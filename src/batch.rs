use common::types::input::InputTable;
use common::types::range::IndexRange;
use common::types::record::ResultRecord;
use common::util::logging;
use dispatch::{BatchObserver, DispatchError, Driver, LogObserver, WorkerId};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Advances a progress bar for every planned trip, next to the usual log output
struct ProgressObserver {
    pb: ProgressBar,
    log: LogObserver,
}

impl BatchObserver for ProgressObserver {
    fn batch_started(&self, rows: usize, ranges: &[IndexRange]) {
        self.log.batch_started(rows, ranges);
    }

    fn row_finished(&self, worker: WorkerId, record: &ResultRecord) {
        self.pb.inc(1);
        self.log.row_finished(worker, record);
    }

    fn range_finished(&self, worker: WorkerId, range: IndexRange) {
        self.log.range_finished(worker, range);
    }

    fn batch_finished(&self, rows: usize) {
        self.log.batch_finished(rows);
    }
}

pub(crate) async fn run_batch(
    driver: Driver,
    table: InputTable,
    output_dir: &Path,
) -> Result<PathBuf, DispatchError> {
    let total = table.height() as u64;

    logging::run_with_pb_async("dispatch", "Planning trips", total, true, |pb| async move {
        let driver = driver.with_observer(Arc::new(ProgressObserver { pb, log: LogObserver }));
        driver.run(&table, output_dir).await
    }).await
}
