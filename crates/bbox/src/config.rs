use std::env;

use model::point::Point;

use crate::error::CliError;

/// Decimal places for the output, used when `--precision` is not given.
pub const PRECISION_ENV: &str = "BBOX_PRECISION";

const PRECISION_FLAG: &str = "--precision=";
const POSITIONAL: [&str; 3] = ["latitude", "longitude", "half-side-km"];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Schema,
    BoundingBox {
        point: Point,
        half_side_km: f64,
        precision: Option<i32>,
    },
}

impl Command {
    pub fn from_env() -> Result<Self, CliError> {
        let precision_env = env::var(PRECISION_ENV).ok();
        log::debug!("{}: {:?}", PRECISION_ENV, precision_env);
        let command = Self::parse(env::args().skip(1), precision_env)?;
        log::debug!("parsed command: {:?}", command);
        Ok(command)
    }

    /// Parses the arguments (without the program name). `precision_env` is
    /// only consulted if no `--precision` flag is present. A help flag
    /// anywhere wins over every other argument.
    pub fn parse<I>(args: I, precision_env: Option<String>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let args = args.into_iter().collect::<Vec<_>>();
        if args.iter().any(|arg| arg == "-h" || arg == "--help") {
            return Ok(Command::Help);
        }

        let mut precision = None;
        let mut schema = false;
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--schema" {
                schema = true;
            } else if let Some(value) = arg.strip_prefix(PRECISION_FLAG) {
                precision = Some(parse_precision(value)?);
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownOption(arg));
            } else {
                positional.push(arg);
            }
        }

        if schema {
            return Ok(Command::Schema);
        }
        if positional.len() > POSITIONAL.len() {
            return Err(CliError::TooManyArguments(positional.len()));
        }

        let mut values = [0.0; 3];
        for (i, name) in POSITIONAL.into_iter().enumerate() {
            let value = positional
                .get(i)
                .ok_or(CliError::MissingArgument(name))?;
            values[i] = parse_number(name, value)?;
        }
        let [latitude, longitude, half_side_km] = values;

        let precision = match (precision, precision_env) {
            (Some(precision), _) => Some(precision),
            (None, Some(value)) => Some(parse_precision(&value)?),
            (None, None) => None,
        };

        Ok(Command::BoundingBox {
            point: Point::new(longitude, latitude),
            half_side_km,
            precision,
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_owned(),
    })
}

fn parse_precision(value: &str) -> Result<i32, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidPrecision(value.to_owned()))
}
