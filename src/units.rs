use std::collections::HashMap;
use std::sync::LazyLock;

/// Display units and date/time patterns for one region.
///
/// The date patterns are chrono strftime strings; `%Z` renders the zone
/// abbreviation of the forecast's time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitProfile {
    pub degrees: &'static str,
    pub speed: &'static str,
    pub length: &'static str,
    pub precipitation: &'static str,
    /// Full date and time, e.g. "January 2 at 3:04pm EST".
    pub long_date: &'static str,
    /// Time of day only, e.g. "3:04pm EST".
    pub hour: &'static str,
}

static UNIT_PROFILES: LazyLock<HashMap<&'static str, UnitProfile>> = LazyLock::new(|| {
    HashMap::from([
        (
            "us",
            UnitProfile {
                degrees: "°F",
                speed: "mph",
                length: "miles",
                precipitation: "in/hr",
                long_date: "%B %-d at %-I:%M%P %Z",
                hour: "%-I:%M%P %Z",
            },
        ),
        (
            "si",
            UnitProfile {
                degrees: "°C",
                speed: "m/s",
                length: "kilometers",
                precipitation: "mm/h",
                long_date: "%Y-%m-%d %H:%M:%S %Z",
                hour: "%H:%M %Z",
            },
        ),
        (
            "ca",
            UnitProfile {
                degrees: "°C",
                speed: "km/h",
                length: "kilometers",
                precipitation: "mm/h",
                long_date: "%B %-d at %-I:%M%P %Z",
                hour: "%-I:%M%P %Z",
            },
        ),
        // Legacy alias, superseded by "uk2".
        (
            "uk",
            UnitProfile {
                degrees: "°C",
                speed: "mph",
                length: "kilometers",
                precipitation: "mm/h",
                long_date: "%B %-d at %H:%M %Z",
                hour: "%H:%M %Z",
            },
        ),
        (
            "uk2",
            UnitProfile {
                degrees: "°C",
                speed: "mph",
                length: "miles",
                precipitation: "mm/h",
                long_date: "%B %-d at %H:%M %Z",
                hour: "%H:%M %Z",
            },
        ),
    ])
});

/// Look up the unit profile for a region code.
///
/// Unknown codes yield the all-empty profile, so units silently disappear from
/// the output instead of failing.
pub fn lookup(region: &str) -> UnitProfile {
    UNIT_PROFILES.get(region).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_us() {
        let units = lookup("us");
        assert_eq!(units.degrees, "°F");
        assert_eq!(units.speed, "mph");
        assert_eq!(units.length, "miles");
        assert_eq!(units.precipitation, "in/hr");
    }

    #[test]
    fn lookup_si_and_ca_differ_in_speed() {
        assert_eq!(lookup("si").speed, "m/s");
        assert_eq!(lookup("ca").speed, "km/h");
        assert_eq!(lookup("si").degrees, lookup("ca").degrees);
    }

    #[test]
    fn uk_and_uk2_differ_only_in_length() {
        let uk = lookup("uk");
        let uk2 = lookup("uk2");
        assert_eq!(uk.length, "kilometers");
        assert_eq!(uk2.length, "miles");
        assert_eq!(
            UnitProfile {
                length: uk2.length,
                ..uk
            },
            uk2
        );
    }

    #[test]
    fn lookup_unknown_is_empty() {
        let units = lookup("unknown-code");
        assert_eq!(units, UnitProfile::default());
        assert_eq!(units.degrees, "");
        assert_eq!(units.long_date, "");
        assert_eq!(units.hour, "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("US"), UnitProfile::default());
    }
}
