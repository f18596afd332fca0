//!
//! Common types shared across the crate
//!
pub use petgraph::graph::{EdgeIndex, NodeIndex};
use std::str::FromStr;

/// integer travel time of a road segment (minutes)
pub type Cost = i64;

///
/// short-hand of `NodeIndex::new`
///
pub fn ni(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

///
/// Weather condition selecting the active travel time of a road.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weather {
    Normal,
    Rain,
    Snow,
    Storm,
}

impl Weather {
    ///
    /// All conditions, in the column order of the data file.
    ///
    pub const ALL: [Weather; 4] = [Weather::Normal, Weather::Rain, Weather::Snow, Weather::Storm];
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Weather::Normal => write!(f, "normal"),
            Weather::Rain => write!(f, "rain"),
            Weather::Snow => write!(f, "snow"),
            Weather::Storm => write!(f, "storm"),
        }
    }
}

///
/// Error (unit type) in from_str of Weather
///
/// The set of conditions is a closed enumeration, unrecognized names
/// are rejected at the boundary.
///
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherParseError;

impl std::fmt::Display for WeatherParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "weather must be one of normal/rain/snow/storm")
    }
}

impl std::error::Error for WeatherParseError {}

impl FromStr for Weather {
    type Err = WeatherParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Weather::Normal),
            "rain" => Ok(Weather::Rain),
            "snow" => Ok(Weather::Snow),
            "storm" => Ok(Weather::Storm),
            _ => Err(WeatherParseError),
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("normal", Weather::Normal)]
    #[test_case("rain", Weather::Rain)]
    #[test_case("snow", Weather::Snow)]
    #[test_case("storm", Weather::Storm)]
    fn weather_from_str(s: &str, w: Weather) {
        assert_eq!(s.parse::<Weather>(), Ok(w));
        assert_eq!(w.to_string(), s);
    }

    #[test]
    fn weather_from_str_strict() {
        assert!("tormenta".parse::<Weather>().is_err());
        assert!("Normal".parse::<Weather>().is_err());
        assert!("".parse::<Weather>().is_err());
    }
}
