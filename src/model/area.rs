use chrono_tz::Tz;
use serde::Deserialize;

/// A remotely managed scan area. Rebuilt from the Drago API on every run,
/// never mutated locally; the timezone is always derived from the location.
#[derive(Debug, Clone)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub location: Coord,
    pub timezone: Tz,
    pub enabled: bool,
    pub workers: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
impl Area {
    pub fn mock(id: i64) -> Area {
        Area {
            id,
            name: format!("area-{id}"),
            location: Coord {
                lat: 52.52,
                lon: 13.405,
            },
            timezone: chrono_tz::UTC,
            enabled: false,
            workers: 1,
        }
    }
}
