use anyhow::bail;

/// A place name as reported by a geocoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    /// State, province or country.
    pub region: String,
}

/// Parse a "City, Region" string.
///
/// Splits on the last comma so cities containing commas keep them. A string
/// without a comma is taken as a city with no region.
pub fn parse_location(s: &str) -> anyhow::Result<Location> {
    let s = s.trim();
    if s.is_empty() {
        bail!("Location must not be empty");
    }

    let (city, region) = match s.rsplit_once(',') {
        Some((city, region)) => (city.trim(), region.trim()),
        None => (s, ""),
    };
    if city.is_empty() {
        bail!("Location is missing a city name");
    }

    Ok(Location {
        city: city.to_string(),
        region: region.to_string(),
    })
}
