//! Formatting helpers for chart labels and hover text.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_percent_whole(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(60.0), "60.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn whole_percent_rounds() {
        assert_eq!(format_percent_whole(86.6), "87%");
    }
}
