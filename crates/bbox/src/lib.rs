use config::Command;
use error::CliError;
use model::{bounding_box::BoundingBox, point::Point, Rounded};
use schemars::schema_for;

pub mod config;
pub mod error;

pub const USAGE: &str = "\
Usage: bbox [--precision=N] <latitude> <longitude> <half-side-km>
       bbox --schema

Prints the bounding box around a point (in degrees) as JSON. Each side is
<half-side-km> kilometers away from the point.

Options:
  --precision=N   round coordinates to N decimal places (env: BBOX_PRECISION)
  --schema        print the JSON schema of the output and exit
  -h, --help      print this help and exit";

/// Latitude (in degrees) beyond which the longitude bounds become unusable.
const POLAR_LATITUDE: f64 = 89.0;

/// Executes the command and returns what should be printed to stdout.
pub fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Help => Ok(USAGE.to_owned()),
        Command::Schema => {
            let schema = schema_for!(BoundingBox);
            Ok(serde_json::to_string_pretty(&schema)?)
        }
        Command::BoundingBox {
            point,
            half_side_km,
            precision,
        } => {
            warn_degenerate(&point);
            let bbox = BoundingBox::around(point, half_side_km);
            log::debug!("bounding box around {:?}: {:?}", point, bbox);
            let bbox = match precision {
                Some(precision) => bbox.rounded(precision),
                None => bbox,
            };
            Ok(serde_json::to_string_pretty(&bbox)?)
        }
    }
}

fn warn_degenerate(point: &Point) {
    if point.latitude.abs() > 90.0 {
        log::warn!("latitude {} is outside of [-90, 90]", point.latitude);
    } else if point.latitude.abs() > POLAR_LATITUDE {
        log::warn!(
            "latitude {} is close to a pole, longitude bounds will diverge",
            point.latitude
        );
    }
}
