/// The subset of the weather payload the status line consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Condition code, e.g. "01d" for clear sky during the day.
    pub icon_code: String,
    /// Current temperature in Celsius.
    pub temperature_c: f64,
}

impl Observation {
    /// Temperature rounded up to the next whole degree.
    pub fn temperature_display(&self) -> i64 {
        self.temperature_c.ceil() as i64
    }
}

/// Render the one-line status bar output: `"<glyph> <temperature>°C"`.
pub fn status_line(glyph: &str, observation: &Observation) -> String {
    format!("{glyph} {}°C", observation.temperature_display())
}
