//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render fractional hours as "02h 15m" (or "+02h 15m" with sign).
pub fn hours_readable(hours: f64, want_sign: bool) -> String {
    let total_m = (hours.abs() * 60.0).round() as i64;
    let h = total_m / 60;
    let m = total_m % 60;

    let sign = if hours > 0.0 && want_sign {
        "+"
    } else if hours < 0.0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, h, m)
}

/// Render an elapsed duration as "HH:MM:SS" for the live session view.
pub fn elapsed_hms(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_render() {
        assert_eq!(hours_readable(1.5, false), "01h 30m");
        assert_eq!(hours_readable(2.25, true), "+02h 15m");
        assert_eq!(hours_readable(-0.5, true), "-00h 30m");
        assert_eq!(hours_readable(0.0, true), "00h 00m");
    }

    #[test]
    fn elapsed_render() {
        assert_eq!(elapsed_hms(5400), "01:30:00");
        assert_eq!(elapsed_hms(-3), "00:00:00");
    }
}
