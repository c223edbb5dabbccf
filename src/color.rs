use std::sync::LazyLock;

use regex::{Captures, Regex};

const RESET: &str = "\x1b[0m";

/// ANSI SGR code for a bracket tag name, e.g. `[light_yellow]`.
fn sgr_code(name: &str) -> Option<u8> {
    let code = match name {
        "default" => 39,
        "reset" => 0,
        "bold" => 1,
        "dim" => 2,
        "underline" => 4,
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "light_gray" => 37,
        "dark_gray" => 90,
        "light_red" => 91,
        "light_green" => 92,
        "light_yellow" => 93,
        "light_blue" => 94,
        "light_magenta" => 95,
        "light_cyan" => 96,
        "white" => 97,
        _ => return None,
    };
    Some(code)
}

/// Turns bracket-tagged text such as `"[red]Warning"` into terminal output.
///
/// Known tags become ANSI escapes (or vanish when colors are disabled);
/// unknown bracketed text passes through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Colorize {
    /// Strip tags instead of emitting escapes.
    pub disable: bool,
}

impl Colorize {
    pub fn new(enabled: bool) -> Self {
        Colorize { disable: !enabled }
    }

    pub fn color(&self, tagged: &str) -> String {
        static TAG_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\[([a-z_]+)\]").unwrap());

        let mut out = TAG_RE
            .replace_all(tagged, |caps: &Captures| match sgr_code(&caps[1]) {
                Some(_) if self.disable => String::new(),
                Some(code) => format!("\x1b[{code}m"),
                None => caps[0].to_string(),
            })
            .into_owned();
        if !self.disable {
            out.push_str(RESET);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_known_tag() {
        let c = Colorize::new(true);
        assert_eq!(c.color("[red]alert"), "\x1b[31malert\x1b[0m");
        assert_eq!(c.color("[light_yellow]moon"), "\x1b[93mmoon\x1b[0m");
    }

    #[test]
    fn color_disabled_strips_tags() {
        let c = Colorize::new(false);
        assert_eq!(c.color("[white]25%"), "25%");
        assert_eq!(c.color("[cyan]Clear [green]here"), "Clear here");
    }

    #[test]
    fn color_unknown_tag_untouched() {
        let c = Colorize::new(false);
        assert_eq!(c.color("[notacolor]text"), "[notacolor]text");
        assert_eq!(c.color("[Red]text"), "[Red]text");
    }

    #[test]
    fn color_no_tags() {
        assert_eq!(Colorize::new(false).color("plain"), "plain");
        assert_eq!(Colorize::new(true).color("plain"), "plain\x1b[0m");
    }
}
