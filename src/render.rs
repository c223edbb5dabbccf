use std::io::{self, Write};

use chrono_tz::Tz;

use crate::bearing::bearing_label;
use crate::color::Colorize;
use crate::data::{Alert, Forecast, Weather};
use crate::icons::resolve_icon;
use crate::location::Location;
use crate::time::{format_date, format_hour, format_long};
use crate::units::{lookup, UnitProfile};

/// Writes forecasts as color-tagged sentences to an output sink.
pub struct Renderer<W> {
    out: W,
    colors: Colorize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, colors: Colorize) -> Self {
        Renderer { out, colors }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn color(&self, tagged: &str) -> String {
        self.colors.color(tagged)
    }

    /// Write one line per reported measurement of `weather`.
    ///
    /// Zero means "not reported" for every metric except visibility, which the
    /// provider caps at 10 and which is only shown below that.
    pub fn render_common(&mut self, weather: &Weather, units: &UnitProfile) -> io::Result<()> {
        if weather.humidity > 0. {
            let humidity = self.color(&format!("[white]{}%", weather.humidity * 100.));
            if weather.humidity > 0.20 {
                writeln!(self.out, "  Ick! The humidity is {humidity}")?;
            } else {
                writeln!(self.out, "  The humidity is {humidity}")?;
            }
        }

        if weather.precip_intensity > 0. {
            let intensity = self.color(&format!(
                "[white]{} {}",
                weather.precip_intensity, units.precipitation
            ));
            let kind = self.color(&format!("[white]{}", weather.precip_type));
            writeln!(
                self.out,
                "  The precipitation intensity of {kind} is {intensity}"
            )?;
        }

        if weather.precip_probability > 0. {
            let probability = self.color(&format!("[white]{}%", weather.precip_probability * 100.));
            writeln!(self.out, "  The precipitation probability is {probability}")?;
        }

        if weather.nearest_storm_distance > 0. {
            let distance = self.color(&format!(
                "[white]{} {} {}",
                weather.nearest_storm_distance,
                units.length,
                bearing_label(weather.nearest_storm_bearing)
            ));
            writeln!(self.out, "  The nearest storm is {distance} away")?;
        }

        if weather.wind_speed > 0. {
            let wind = self.color(&format!(
                "[white]{} {} {}",
                weather.wind_speed,
                units.speed,
                bearing_label(weather.wind_bearing)
            ));
            writeln!(self.out, "  The wind speed is {wind}")?;
        }

        if weather.cloud_cover > 0. {
            let cloud_cover = self.color(&format!("[white]{}%", weather.cloud_cover * 100.));
            writeln!(self.out, "  The cloud coverage is {cloud_cover}")?;
        }

        if weather.visibility < 10. {
            let visibility =
                self.color(&format!("[white]{} {}", weather.visibility, units.length));
            writeln!(self.out, "  The visibility is {visibility}")?;
        }

        if weather.pressure > 0. {
            let pressure = self.color(&format!("[white]{} mbar", weather.pressure));
            writeln!(self.out, "  The pressure is {pressure}\n")?;
        }

        Ok(())
    }

    fn print_alert(&mut self, alert: &Alert, units: &UnitProfile, tz: Tz) -> io::Result<()> {
        if alert.title.is_empty() && alert.description.is_empty() {
            return Ok(());
        }

        if !alert.title.is_empty() {
            let title = self.color(&format!("[red]{}", alert.title));
            writeln!(self.out, "{title}")?;
        }
        if !alert.description.is_empty() {
            let description = self.color(&format!("[red]{}", alert.description.trim_end()));
            writeln!(self.out, "{description}")?;
        }
        let created = self.color(&format!("[red]Created: {}", format_long(alert.time, units, tz)));
        let expires =
            self.color(&format!("[red]Expires: {}", format_long(alert.expires, units, tz)));
        writeln!(self.out, "\t\t\t{created}")?;
        writeln!(self.out, "\t\t\t{expires}\n")?;
        Ok(())
    }

    /// Print current conditions: icon, summary, temperature, alerts and the
    /// reported measurements.
    pub fn print_current(
        &mut self,
        forecast: &Forecast,
        location: &Location,
        ignore_alerts: bool,
        hide_icon: bool,
    ) -> anyhow::Result<()> {
        let units = lookup(&forecast.flags.units);
        let tz = forecast.time_zone();
        let current = &forecast.currently;

        if !hide_icon {
            let icon = resolve_icon(&current.icon, &self.colors)?;
            writeln!(self.out, "{icon}")?;
        }

        let summary = self.color(&format!("[cyan]{}", current.summary));
        let place = self.color(&format!("[green]{} in {}", location.city, location.region));
        let when = self.color(&format!("[cyan]{}", format_long(current.time, &units, tz)));
        writeln!(
            self.out,
            "\nCurrent weather is {summary} in {place} for {when}"
        )?;

        // Compared as rendered text: values that display the same are the same.
        let temp = self.color(&format!("[magenta]{}{}", current.temperature, units.degrees));
        let feels_like = self.color(&format!(
            "[magenta]{}{}",
            current.apparent_temperature, units.degrees
        ));
        if temp == feels_like {
            writeln!(self.out, "The temperature is {temp}\n")?;
        } else {
            writeln!(
                self.out,
                "The temperature is {temp}, but it feels like {feels_like}\n"
            )?;
        }

        if ignore_alerts {
            tracing::debug!(count = forecast.alerts.len(), "skipping alerts");
        } else {
            for alert in &forecast.alerts {
                self.print_alert(alert, &units, tz)?;
            }
        }

        self.render_common(current, &units)?;
        Ok(())
    }

    /// Print up to `days` days following today. Zero or negative prints nothing.
    ///
    /// Failures while writing a day's measurements are logged and skipped so
    /// the remaining days still print; only the day headers propagate errors.
    pub fn print_daily(&mut self, forecast: &Forecast, days: i32) -> anyhow::Result<()> {
        let units = lookup(&forecast.flags.units);
        let tz = forecast.time_zone();
        let days = usize::try_from(days).unwrap_or(0);

        // Index 0 is today, already covered by the current conditions.
        for day in forecast.daily.data.iter().skip(1).take(days) {
            let date = self.color(&format!("[magenta]{}", format_date(day.time, tz)));
            writeln!(self.out, "{date}")?;

            let temp_max = self.color(&format!("[blue]{}{}", day.temperature_max, units.degrees));
            let temp_min = self.color(&format!("[blue]{}{}", day.temperature_min, units.degrees));
            let feels_max = self.color(&format!(
                "[cyan]{}{}",
                day.apparent_temperature_max, units.degrees
            ));
            let feels_min = self.color(&format!(
                "[cyan]{}{}",
                day.apparent_temperature_min, units.degrees
            ));
            writeln!(
                self.out,
                "The temperature high is {temp_max}, feels like {feels_max} around {},",
                format_hour(day.temperature_max_time, &units, tz)
            )?;
            writeln!(
                self.out,
                "and low is {temp_min}, feels like {feels_min} around {}\n",
                format_hour(day.temperature_min_time, &units, tz)
            )?;

            if let Err(err) = self.render_common(day, &units) {
                tracing::debug!(%err, time = day.time, "failed to write daily measurements");
            }
        }

        Ok(())
    }
}
