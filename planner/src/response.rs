use common::types::record::ResultRecord;
use common::types::TripId;
use common::util::distance::Distance;
use either::Either;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fmt::Display;

/// Number of characters of the planner's error message that end up in the output table
pub const ERROR_MESSAGE_WIDTH: usize = 14;

#[derive(Debug, Deserialize)]
struct PlanResponse {
    plan: Option<Plan>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct Plan {
    itineraries: Vec<Itinerary>,
}

/// Durations are in seconds, distances in meters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Itinerary {
    duration: f64,
    walk_time: f64,
    transit_time: f64,
    walk_distance: f64,
    transfers: i64,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    msg: Option<ErrorMessage>,
}

/// The planner reports its message either as a single string or as a list of strings
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct ErrorMessage {
    #[serde(with = "either::serde_untagged")]
    inner: Either<String, Vec<String>>,
}

impl ErrorMessage {
    fn first(&self) -> Option<&str> {
        match &self.inner {
            Either::Left(msg) => Some(msg.as_str()),
            Either::Right(msgs) => msgs.first().map(String::as_str),
        }
    }
}

/// Turns the planner's answer for one trip into a record. Only the first itinerary counts.
/// A response without a plan is a regular outcome and yields a record without numbers; a
/// response that has neither a plan nor an error message is rejected.
pub fn map_response(trip_id: TripId, response: Value) -> Result<ResultRecord, MapError> {
    let response: PlanResponse = serde_json::from_value(response)?;

    match response {
        PlanResponse { plan: Some(plan), .. } => {
            let itinerary = plan.itineraries.into_iter().next()
                .ok_or(MapError::NoItinerary(trip_id))?;

            Ok(ResultRecord::success(
                trip_id,
                itinerary.duration / 60.0,
                itinerary.walk_time / 60.0,
                itinerary.transit_time / 60.0,
                Distance(itinerary.walk_distance).miles(),
                itinerary.transfers,
            ))
        }
        PlanResponse { error: Some(ServiceError { msg: Some(msg) }), .. } => {
            let msg = msg.first().ok_or(MapError::UnexpectedShape(trip_id))?;

            Ok(ResultRecord::failure(trip_id, truncate(msg, ERROR_MESSAGE_WIDTH)))
        }
        _ => Err(MapError::UnexpectedShape(trip_id)),
    }
}

fn truncate(msg: &str, width: usize) -> String {
    msg.chars().take(width).collect()
}

#[derive(thiserror::Error, Debug)]
pub enum MapError {
    Json(#[from] serde_json::Error),
    NoItinerary(TripId),
    UnexpectedShape(TripId),
}

impl Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapError::Json(err) => write!(f, "Malformed planner response: {}", err),
            MapError::NoItinerary(trip_id) => {
                write!(f, "Planner returned a plan without itineraries for trip {}", trip_id)
            }
            MapError::UnexpectedShape(trip_id) => {
                write!(f, "Planner response for trip {} has neither a plan nor an error message", trip_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn itinerary(duration: f64, walk_distance: f64) -> Value {
        json!({
            "duration": duration,
            "walkTime": 120,
            "transitTime": 480,
            "walkDistance": walk_distance,
            "transfers": 2,
            "legs": [],
        })
    }

    #[test]
    fn test_plan_is_scaled() {
        let response = json!({
            "plan": { "itineraries": [itinerary(600.0, 1609.34)] }
        });

        assert_eq!(
            map_response(TripId(1), response).unwrap(),
            ResultRecord::success(TripId(1), 10.0, 2.0, 8.0, 1.0, 2)
        );
    }

    #[test]
    fn test_first_itinerary_wins() {
        let response = json!({
            "plan": { "itineraries": [itinerary(1200.0, 0.0), itinerary(60.0, 0.0)] }
        });

        let record = map_response(TripId(1), response).unwrap();
        assert_eq!(record.duration_min, Some(20.0));
        assert_eq!(record.walk_distance_mi, Some(0.0));
    }

    #[test]
    fn test_error_list_is_truncated() {
        let response = json!({
            "error": { "msg": ["No trip found because the destination is unreachable", "other"] }
        });

        let record = map_response(TripId(2), response).unwrap();
        assert_eq!(record, ResultRecord::failure(TripId(2), "No trip found "));
        assert_eq!(record.message.chars().count(), ERROR_MESSAGE_WIDTH);
    }

    #[test]
    fn test_error_string_is_truncated() {
        let response = json!({
            "error": {
                "id": 404,
                "msg": "No trip found. There may be no transit service within the maximum specified distance or at the specified time, or your start or end point might not be safely accessible.",
                "message": "PATH_NOT_FOUND",
                "noPath": true
            }
        });

        let record = map_response(TripId(3), response).unwrap();
        assert_eq!(record.message, "No trip found.");
        assert_eq!(record.duration_min, None);
        assert_eq!(record.walk_time_min, None);
        assert_eq!(record.transit_time_min, None);
        assert_eq!(record.walk_distance_mi, None);
        assert_eq!(record.transfers, None);
    }

    #[test]
    fn test_short_error_is_kept() {
        let response = json!({ "error": { "msg": "Too close" } });

        assert_eq!(map_response(TripId(4), response).unwrap().message, "Too close");
    }

    #[test]
    fn test_truncation_counts_characters() {
        assert_eq!(truncate("Keine Verbindung gefunden", 14), "Keine Verbindu");
        assert_eq!(truncate("Überfahrt über Fähre", 14), "Überfahrt über");
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(matches!(
            map_response(TripId(5), json!({ "requestParameters": {} })),
            Err(MapError::UnexpectedShape(TripId(5)))
        ));
        assert!(matches!(
            map_response(TripId(5), json!({ "error": { "id": 500 } })),
            Err(MapError::UnexpectedShape(TripId(5)))
        ));
        assert!(matches!(
            map_response(TripId(5), json!({ "error": { "msg": [] } })),
            Err(MapError::UnexpectedShape(TripId(5)))
        ));
    }

    #[test]
    fn test_empty_itineraries() {
        assert!(matches!(
            map_response(TripId(6), json!({ "plan": { "itineraries": [] } })),
            Err(MapError::NoItinerary(TripId(6)))
        ));
    }

    #[test]
    fn test_malformed_itinerary() {
        let response = json!({ "plan": { "itineraries": [{ "duration": "long" }] } });

        assert!(matches!(map_response(TripId(7), response), Err(MapError::Json(_))));
    }
}
