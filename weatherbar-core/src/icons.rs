use crate::error::IconError;

/// Map an OpenWeatherMap condition code to its status-bar glyph.
///
/// The table is hand-curated for the Nerd Font weather range (U+E300..) and
/// knowingly sparse: several night variants have no entry and fail the
/// lookup. There is no fallback glyph.
pub fn glyph(code: &str) -> Result<&'static str, IconError> {
    lookup(code).ok_or_else(|| IconError::Unknown { code: code.to_string() })
}

fn lookup(code: &str) -> Option<&'static str> {
    let glyph = match code {
        "01d" => "\u{e30d}",     // day-sunny
        "01n" => "\u{e32b}",     // night-clear
        "02d" => "\u{e302}",     // day-cloudy
        "02n" => "\u{e37e}",     // night-alt-partly-cloudy
        "03d" => "\u{e33d}",     // cloud
        "03n" => "\u{e33d}",
        "04d" => "\u{e312}",     // cloudy
        "09" => "\u{e319}",      // showers
        "10d" => "\u{e308}",     // day-rain
        "10n" => "\u{e325}",     // night-alt-rain
        "10d 11d" => "\u{e30f}", // day-storm-showers
        "10n 11n" => "\u{e32a}", // night-alt-storm-showers
        "11" => "\u{e31d}",      // thunderstorm
        "13d" => "\u{e31a}",     // snow
        "13n" => "\u{e31a}",
        "50d" => "\u{e303}",     // day-fog
        "50n" => "\u{e346}",     // night-fog
        _ => return None,
    };

    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_return_their_exact_glyph() {
        assert_eq!(glyph("01d").unwrap(), "\u{e30d}");
        assert_eq!(glyph("01n").unwrap(), "\u{e32b}");
        assert_eq!(glyph("02d").unwrap(), "\u{e302}");
        assert_eq!(glyph("02n").unwrap(), "\u{e37e}");
        assert_eq!(glyph("04d").unwrap(), "\u{e312}");
        assert_eq!(glyph("09").unwrap(), "\u{e319}");
        assert_eq!(glyph("10d").unwrap(), "\u{e308}");
        assert_eq!(glyph("11").unwrap(), "\u{e31d}");
        assert_eq!(glyph("50n").unwrap(), "\u{e346}");
    }

    #[test]
    fn day_and_night_share_a_glyph_where_curated() {
        assert_eq!(glyph("03d").unwrap(), glyph("03n").unwrap());
        assert_eq!(glyph("13d").unwrap(), glyph("13n").unwrap());
    }

    #[test]
    fn absent_codes_fail_the_lookup() {
        // Night variants the table never gained.
        for code in ["04n", "09n", "13"] {
            let err = glyph(code).unwrap_err();
            assert!(err.to_string().contains(code));
        }

        assert!(glyph("no-such-code").is_err());
    }
}
