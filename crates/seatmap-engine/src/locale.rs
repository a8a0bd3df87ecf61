// Display strings the engine hands to the page: seat labels, the
// closest-match notice and translated fixture labels.

use std::fmt;
use std::str::FromStr;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0:?} (expected \"en\" or \"vi\")")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Seat label, or an empty string when the guest has no seat.
    pub fn seat_label(self, seat: Option<u32>) -> String {
        match (self, seat) {
            (_, None) => String::new(),
            (Locale::En, Some(n)) => format!("Seat {n}"),
            (Locale::Vi, Some(n)) => format!("Ghế số {n}"),
        }
    }

    /// Notice shown above an approximate match. `query` is quoted as the
    /// user typed it.
    pub fn closest_match_notice(self, query: &str) -> String {
        match self {
            Locale::En => format!("Showing closest match for \"{query}\""),
            Locale::Vi => format!("Hiển thị kết quả gần nhất cho \"{query}\""),
        }
    }

    /// Translated label for a venue fixture key, if this locale overrides
    /// the default label.
    pub fn fixture_label(self, key: &str) -> Option<&'static str> {
        match self {
            Locale::En => None,
            Locale::Vi => match key {
                "stage" => Some("Sân khấu"),
                "brideGroom" => Some("Cô dâu và Chú rể"),
                "danceFloor" => Some("Sàn nhảy"),
                "cake" => Some("Bánh cưới"),
                "bar" => Some("Quầy bar"),
                "gifts" => Some("Quà tặng"),
                "vipTable" => Some("Bàn VIP"),
                _ => None,
            },
        }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" VI ".parse::<Locale>(), Ok(Locale::Vi));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn seat_labels() {
        assert_eq!(Locale::En.seat_label(Some(3)), "Seat 3");
        assert_eq!(Locale::Vi.seat_label(Some(3)), "Ghế số 3");
        assert_eq!(Locale::Vi.seat_label(None), "");
    }

    #[test]
    fn notice_quotes_the_raw_query() {
        assert_eq!(
            Locale::En.closest_match_notice("ana tran "),
            "Showing closest match for \"ana tran \""
        );
        assert!(Locale::Vi.closest_match_notice("x").starts_with("Hiển thị"));
    }

    #[test]
    fn fixture_labels_only_overridden_in_vietnamese() {
        assert_eq!(Locale::En.fixture_label("stage"), None);
        assert_eq!(Locale::Vi.fixture_label("danceFloor"), Some("Sàn nhảy"));
        assert_eq!(Locale::Vi.fixture_label("unknown"), None);
    }
}
