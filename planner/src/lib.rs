pub mod client;
pub mod query;
pub mod response;

pub use client::{OtpClient, PlannerError, TripPlanner, DEFAULT_PLANNER_URL};
pub use query::PlanQuery;
pub use response::{map_response, MapError};
