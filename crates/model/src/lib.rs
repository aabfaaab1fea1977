pub mod bounding_box;
pub mod point;

pub trait Rounded {
    /// Rounds every coordinate to `precision` decimal places, halves away from
    /// zero.
    fn rounded(self, precision: i32) -> Self;
}
