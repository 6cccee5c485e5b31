use crate::types::TripId;

pub const SUCCESS_MESSAGE: &str = "Successful Run";

/// The outcome of planning a single trip. Either all numeric fields are set (the planner found
/// an itinerary) or none of them is, in which case `message` holds the planner's complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub trip_id: TripId,
    pub duration_min: Option<f64>,
    pub walk_time_min: Option<f64>,
    pub transit_time_min: Option<f64>,
    pub walk_distance_mi: Option<f64>,
    pub transfers: Option<i64>,
    pub message: String,
}

impl ResultRecord {
    pub fn success(
        trip_id: TripId,
        duration_min: f64,
        walk_time_min: f64,
        transit_time_min: f64,
        walk_distance_mi: f64,
        transfers: i64,
    ) -> Self {
        Self {
            trip_id,
            duration_min: Some(duration_min),
            walk_time_min: Some(walk_time_min),
            transit_time_min: Some(transit_time_min),
            walk_distance_mi: Some(walk_distance_mi),
            transfers: Some(transfers),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(trip_id: TripId, message: impl Into<String>) -> Self {
        Self {
            trip_id,
            duration_min: None,
            walk_time_min: None,
            transit_time_min: None,
            walk_distance_mi: None,
            transfers: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.duration_min.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_has_no_numbers() {
        let record = ResultRecord::failure(TripId(2), "No trip found.");
        assert!(!record.is_success());
        assert_eq!(record.transfers, None);
        assert_eq!(record.walk_distance_mi, None);
        assert_eq!(record.message, "No trip found.");
    }

    #[test]
    fn test_success_message() {
        let record = ResultRecord::success(TripId(1), 10.0, 2.0, 8.0, 0.25, 1);
        assert!(record.is_success());
        assert_eq!(record.message, SUCCESS_MESSAGE);
    }
}
