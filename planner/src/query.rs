use common::types::input::InputRow;
use common::util::distance::MAX_WALK_DISTANCE;
use serde::Serialize;

pub const MODE: &str = "TRANSIT,WALK";
pub const OPTIMIZE: &str = "QUICK";

/// Query parameters of a single `plan` request. Serializes to the parameter names the planner
/// expects, so it can be handed to the HTTP client as query string directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuery {
    pub from_place: String,
    pub to_place: String,
    pub time: String,
    pub date: String,
    pub mode: &'static str,
    pub max_walk_distance: u32,
    pub arrive_by: bool,
    pub optimize: &'static str,
}

impl From<&InputRow> for PlanQuery {
    fn from(row: &InputRow) -> Self {
        Self {
            from_place: format!("{},{}", row.source_lat, row.source_lon),
            to_place: format!("{},{}", row.dest_lat, row.dest_lon),
            time: row.arrive_by_time.clone(),
            date: row.arrive_by_date.clone(),
            mode: MODE,
            max_walk_distance: MAX_WALK_DISTANCE.meters() as u32,
            arrive_by: true,
            optimize: OPTIMIZE,
        }
    }
}

pub fn build(row: &InputRow) -> PlanQuery {
    PlanQuery::from(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::TripId;

    fn row() -> InputRow {
        InputRow {
            trip_id: TripId(7),
            source_lat: 45.5231,
            source_lon: -122.6765,
            dest_lat: 45.4914,
            dest_lon: -122.7,
            arrive_by_time: "8:00am".to_string(),
            arrive_by_date: "not-a-date".to_string(),
        }
    }

    #[test]
    fn test_build_query() {
        assert_eq!(
            build(&row()),
            PlanQuery {
                from_place: "45.5231,-122.6765".to_string(),
                to_place: "45.4914,-122.7".to_string(),
                time: "8:00am".to_string(),
                // Passed through unchecked
                date: "not-a-date".to_string(),
                mode: "TRANSIT,WALK",
                max_walk_distance: 805,
                arrive_by: true,
                optimize: "QUICK",
            }
        );
    }

    #[test]
    fn test_parameter_names() {
        let value = serde_json::to_value(build(&row())).unwrap();
        let mut names = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        names.sort();

        assert_eq!(
            names,
            vec!["arriveBy", "date", "fromPlace", "maxWalkDistance", "mode", "optimize", "time", "toPlace"]
        );
    }
}
