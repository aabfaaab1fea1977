use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::math::round_to_precision;

use crate::Rounded;

/// A position on the earth's surface in degrees. Ranges are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl Rounded for Point {
    fn rounded(self, precision: i32) -> Self {
        Point {
            longitude: round_to_precision(self.longitude, precision),
            latitude: round_to_precision(self.latitude, precision),
        }
    }
}
