pub const METERS_PER_MILE: f64 = 1609.34;

/// Walking distance the planner may use per trip. Other values in use were 3220 and 8047.
pub const MAX_WALK_DISTANCE: Distance = Distance(805.0);

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn miles(&self) -> f64 {
        self.0 / METERS_PER_MILE
    }
}
