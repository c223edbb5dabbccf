use crate::color::Colorize;

/// A condition glyph and the color tag it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Used for any condition key not in the table.
pub const DEFAULT_ICON: Icon = Icon {
    glyph: "",
    color: "blue",
};

const fn icon(glyph: &'static str, color: &'static str) -> Icon {
    Icon { glyph, color }
}

/// Look up the icon for an already normalized condition key.
fn lookup(key: &str) -> Option<Icon> {
    let icon = match key {
        "clear" => icon("\u{1F31E}", "blue"),                  // BLACK SUN WITH RAYS
        "clearday" => icon("\u{1F31E}", "yellow"),             // BLACK SUN WITH RAYS
        "clearnight" => icon("\u{1F319}", "light_yellow"),     // CRESCENT MOON
        "clouds" => icon("\u{2601}", "blue"),                  // CLOUD
        "cloudy" => icon("\u{2601}", "blue"),                  // CLOUD
        "cloudsnight" => icon("\u{2601}", "light_yellow"),     // CLOUD
        "fog" => icon("\u{1F32B}", "blue"),                    // FOG
        "haze" => icon("\u{1F301}", "blue"),                   // FOGGY
        "hazenight" => icon("\u{1F301}", "light_yellow"),      // FOGGY
        "partlycloudyday" => icon("\u{26C5}", "yellow"),       // SUN BEHIND CLOUD
        "partlycloudynight" => icon("\u{2601}", "light_yellow"), // CLOUD
        "rain" => icon("\u{1F327}", "blue"),                   // CLOUD WITH RAIN
        "sleet" => icon("\u{1F328}", "blue"),                  // CLOUD WITH SNOW
        "snow" => icon("\u{2744}", "white"),                   // SNOWFLAKE
        "thunderstorm" => icon("\u{26C8}", "black"),           // THUNDER CLOUD AND RAIN
        "tornado" => icon("\u{1F32A}", "black"),               // CLOUD WITH TORNADO
        "wind" => icon("\u{1F32C}", "black"),                  // WIND BLOWING FACE
        _ => return None,
    };
    Some(icon)
}

/// Strip the separators providers use inconsistently ("clear-day", "clear_day").
pub fn normalize_key(raw: &str) -> String {
    raw.chars().filter(|&c| c != '-' && c != '_').collect()
}

/// Return the icon for a raw condition key, falling back to [`DEFAULT_ICON`].
pub fn icon_for(raw: &str) -> Icon {
    lookup(&normalize_key(raw)).unwrap_or(DEFAULT_ICON)
}

/// Resolve a raw condition key to a colored glyph ready for display.
///
/// Never fails with the built-in table; the error is kept so callers handle
/// glyph sources that can.
pub fn resolve_icon(raw: &str, colors: &Colorize) -> anyhow::Result<String> {
    let icon = icon_for(raw);
    Ok(colors.color(&format!("[{}]{}", icon.color, icon.glyph)))
}
