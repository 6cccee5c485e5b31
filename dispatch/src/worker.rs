use crate::observer::BatchObserver;
use crate::DispatchError;
use common::types::input::InputTable;
use common::types::range::IndexRange;
use common::types::record::ResultRecord;
use planner::{map_response, query, TripPlanner};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// Plans every trip in `range`, one after another. The records come back in row order.
///
/// A planner that finds no itinerary only produces a record without numbers. Failing to reach the
/// planner or to understand its answer ends the worker with an error.
pub async fn process(
    worker: WorkerId,
    range: IndexRange,
    table: &InputTable,
    planner: &dyn TripPlanner,
    observer: &dyn BatchObserver,
) -> Result<Vec<ResultRecord>, DispatchError> {
    let rows = table.rows(range)?;
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let response = planner.plan(&query::build(&row)).await?;
        let record = map_response(row.trip_id, response)?;

        observer.row_finished(worker, &record);
        records.push(record);
    }

    observer.range_finished(worker, range);

    Ok(records)
}
