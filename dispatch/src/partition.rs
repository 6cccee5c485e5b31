use common::types::range::IndexRange;
use std::num::NonZeroUsize;

/// Splits `[0, row_count)` into one contiguous range per worker. All ranges have the same length,
/// except for the last one, which also takes the remainder. With fewer rows than workers, every
/// range but the last is empty.
pub fn partition(row_count: usize, workers: NonZeroUsize) -> Vec<IndexRange> {
    let workers = workers.get();
    let group = row_count / workers;

    (0..workers)
        .map(|i| {
            let end = if i < workers - 1 { group * (i + 1) } else { row_count };
            IndexRange::new(group * i, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_ranges_cover_all_rows() {
        for row_count in 0..60 {
            for worker_count in 1..12 {
                let ranges = partition(row_count, workers(worker_count));
                assert_eq!(ranges.len(), worker_count);

                // Contiguous, starting at 0 and ending at the row count
                assert_eq!(ranges[0].start, 0);
                assert_eq!(ranges[worker_count - 1].end, row_count);
                for pair in ranges.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }

                let group = row_count / worker_count;
                assert_eq!(ranges[worker_count - 1].len(), row_count - group * (worker_count - 1));
                assert_eq!(ranges.iter().map(IndexRange::len).sum::<usize>(), row_count);
            }
        }
    }

    #[test]
    fn test_remainder_goes_to_last() {
        assert_eq!(
            partition(10, workers(4)),
            vec![
                IndexRange::new(0, 2),
                IndexRange::new(2, 4),
                IndexRange::new(4, 6),
                IndexRange::new(6, 10),
            ]
        );
    }

    #[test]
    fn test_fewer_rows_than_workers() {
        let ranges = partition(3, workers(5));

        assert!(ranges[..4].iter().all(IndexRange::is_empty));
        assert_eq!(ranges[4], IndexRange::new(0, 3));
    }

    #[test]
    fn test_no_rows() {
        assert!(partition(0, workers(3)).iter().all(IndexRange::is_empty));
    }

    #[test]
    fn test_single_worker() {
        assert_eq!(partition(7, workers(1)), vec![IndexRange::new(0, 7)]);
    }
}
