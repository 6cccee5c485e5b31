use crate::worker::WorkerId;
use chrono::Local;
use common::types::range::IndexRange;
use common::types::record::ResultRecord;
use log::{debug, info};

/// Receives the lifecycle events of one batch run. Workers call it concurrently.
pub trait BatchObserver: Send + Sync {
    fn batch_started(&self, _rows: usize, _ranges: &[IndexRange]) {}

    fn row_finished(&self, _worker: WorkerId, _record: &ResultRecord) {}

    fn range_finished(&self, _worker: WorkerId, _range: IndexRange) {}

    fn batch_finished(&self, _rows: usize) {}
}

/// Reports progress through the log, stamped with the local wall clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl BatchObserver for LogObserver {
    fn batch_started(&self, rows: usize, ranges: &[IndexRange]) {
        info!(
            target: "dispatch",
            "Starting processing of {} trips on {} workers at {}",
            rows, ranges.len(), Local::now().format("%H%M")
        );
    }

    fn row_finished(&self, worker: WorkerId, record: &ResultRecord) {
        if !record.is_success() {
            debug!(target: "worker", "{}: no plan for trip {} ({})", worker, record.trip_id, record.message);
        }
    }

    fn range_finished(&self, worker: WorkerId, range: IndexRange) {
        info!(
            target: "worker",
            "Range {} done processing at {} by {}",
            range, Local::now().format("%H%M"), worker
        );
    }

    fn batch_finished(&self, rows: usize) {
        info!(
            target: "dispatch",
            "Finished processing of {} trips at {}",
            rows, Local::now().format("%H%M")
        );
    }
}
