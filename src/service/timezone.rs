use crate::{Error, Result};
use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

/// Maps coordinates to IANA timezones. Holds the polygon index, which is
/// expensive to build, so create one resolver per run and share it.
pub struct TimezoneResolver {
    finder: DefaultFinder,
}

impl TimezoneResolver {
    pub fn new() -> TimezoneResolver {
        TimezoneResolver {
            finder: DefaultFinder::new(),
        }
    }

    pub fn resolve(&self, lat: f64, lon: f64) -> Result<Tz> {
        let name = self.finder.get_tz_name(lon, lat);
        if name.is_empty() {
            Err(Error::TimezoneResolution(format!(
                "No timezone found for ({lat}, {lon})",
            )))?;
        }
        name.parse::<Tz>().map_err(|_| {
            Error::TimezoneResolution(format!("Unknown timezone {name} for ({lat}, {lon})"))
        })
    }
}

#[cfg(test)]
mod test {
    use super::TimezoneResolver;
    use crate::Result;
    use chrono_tz::Tz;

    #[test]
    fn resolve_known_zones() -> Result<()> {
        let resolver = TimezoneResolver::new();
        assert_eq!(Tz::Europe__Berlin, resolver.resolve(52.52, 13.405)?);
        assert_eq!(Tz::America__New_York, resolver.resolve(40.7128, -74.0060)?);
        assert_eq!(Tz::Asia__Tokyo, resolver.resolve(35.6764, 139.65)?);
        Ok(())
    }

    #[test]
    fn resolve_is_deterministic() -> Result<()> {
        let resolver = TimezoneResolver::new();
        assert_eq!(
            resolver.resolve(-33.8688, 151.2093)?,
            resolver.resolve(-33.8688, 151.2093)?,
        );
        Ok(())
    }
}
