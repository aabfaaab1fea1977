use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::{point::Point, Rounded};

/// Axis-aligned rectangle in longitude/latitude space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_point: Point,
    pub max_point: Point,
}

impl BoundingBox {
    pub fn new(min_point: Point, max_point: Point) -> Self {
        Self {
            min_point,
            max_point,
        }
    }

    /// Box with `half_side_km` kilometers between `point` and each side,
    /// using the WGS-84 radius at the point's latitude.
    ///
    /// Nothing is validated: close to the poles the longitudes grow without
    /// bound (or become NaN), and boxes crossing the antimeridian are not
    /// wrapped.
    pub fn around(point: Point, half_side_km: f64) -> Self {
        let ((min_lat, min_lon), (max_lat, max_lon)) =
            geo::calculate_bounding_box(point.latitude, point.longitude, half_side_km);
        Self {
            min_point: Point::new(min_lon, min_lat),
            max_point: Point::new(max_lon, max_lat),
        }
    }

    /// Whether the point lies inside the box or on one of its edges.
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_point.latitude..=self.max_point.latitude).contains(&point.latitude)
            && (self.min_point.longitude..=self.max_point.longitude)
                .contains(&point.longitude)
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(&other.min_point) && self.contains(&other.max_point)
    }

    pub fn latitude_span(&self) -> f64 {
        self.max_point.latitude - self.min_point.latitude
    }

    pub fn longitude_span(&self) -> f64 {
        self.max_point.longitude - self.min_point.longitude
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_point.longitude + self.max_point.longitude) / 2.0,
            (self.min_point.latitude + self.max_point.latitude) / 2.0,
        )
    }
}

impl Rounded for BoundingBox {
    fn rounded(self, precision: i32) -> Self {
        BoundingBox {
            min_point: self.min_point.rounded(precision),
            max_point: self.max_point.rounded(precision),
        }
    }
}
