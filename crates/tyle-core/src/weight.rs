//! Font weights as the host font system sees them

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::TyleError;

/// The weight of a font face.
///
/// Mirrors the platform weight scale from lightest to heaviest. Style
/// resolution only tells apart `Regular`, `Medium`, `Semibold` and `Bold`;
/// the rest still round-trip through the catalog untouched.
///
/// Weights compare and hash by their number, so `Other(700)` is `Bold`.
#[derive(Debug, Clone, Copy, Eq, Default)]
pub enum Weight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
    /// A numeric weight; exact hundred steps behave as the named case
    Other(u16),
}

impl Weight {
    /// Every named weight, lightest first
    pub const NAMED: [Weight; 9] = [
        Weight::UltraLight,
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Medium,
        Weight::Semibold,
        Weight::Bold,
        Weight::Heavy,
        Weight::Black,
    ];

    /// Numeric weight on the 100..900 OpenType scale
    pub const fn to_number(self) -> u16 {
        match self {
            Weight::UltraLight => 100,
            Weight::Thin => 200,
            Weight::Light => 300,
            Weight::Regular => 400,
            Weight::Medium => 500,
            Weight::Semibold => 600,
            Weight::Bold => 700,
            Weight::Heavy => 800,
            Weight::Black => 900,
            Weight::Other(n) => n,
        }
    }

    /// Named case for an exact hundred step, `Other` for anything else
    pub const fn from_number(n: u16) -> Self {
        match n {
            100 => Weight::UltraLight,
            200 => Weight::Thin,
            300 => Weight::Light,
            400 => Weight::Regular,
            500 => Weight::Medium,
            600 => Weight::Semibold,
            700 => Weight::Bold,
            800 => Weight::Heavy,
            900 => Weight::Black,
            n => Weight::Other(n),
        }
    }

    /// The named case for this weight's number, if there is one
    pub const fn canonical(self) -> Self {
        Self::from_number(self.to_number())
    }

    /// Canonical lowercase name, `None` for weights off the hundred steps
    pub const fn name(self) -> Option<&'static str> {
        match self.canonical() {
            Weight::UltraLight => Some("ultralight"),
            Weight::Thin => Some("thin"),
            Weight::Light => Some("light"),
            Weight::Regular => Some("regular"),
            Weight::Medium => Some("medium"),
            Weight::Semibold => Some("semibold"),
            Weight::Bold => Some("bold"),
            Weight::Heavy => Some("heavy"),
            Weight::Black => Some("black"),
            Weight::Other(_) => None,
        }
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.to_number() == other.to_number()
    }
}

impl Hash for Weight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_number().hash(state);
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.to_number()),
        }
    }
}

impl FromStr for Weight {
    type Err = TyleError;

    /// Accepts names in any case, with or without separators
    /// (`SemiBold`, `semi-bold`, `semi_bold`), common aliases, and numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let weight = match key.as_str() {
            "ultralight" | "extralight" => Weight::UltraLight,
            "thin" | "hairline" => Weight::Thin,
            "light" => Weight::Light,
            "regular" | "normal" => Weight::Regular,
            "medium" => Weight::Medium,
            "semibold" | "demibold" => Weight::Semibold,
            "bold" => Weight::Bold,
            "heavy" | "extrabold" | "ultrabold" => Weight::Heavy,
            "black" => Weight::Black,
            _ => match key.parse::<u16>() {
                Ok(n) if (1..=1000).contains(&n) => Weight::from_number(n),
                _ => return Err(TyleError::UnknownWeight(s.to_string())),
            },
        };
        Ok(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_regular() {
        assert_eq!(Weight::default(), Weight::Regular);
    }

    #[test]
    fn test_number_round_trip_for_named() {
        for weight in Weight::NAMED {
            assert_eq!(Weight::from_number(weight.to_number()), weight);
        }
    }

    #[test]
    fn test_off_step_number_is_other() {
        assert_eq!(Weight::from_number(450), Weight::Other(450));
        assert_eq!(Weight::Other(450).to_number(), 450);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("Bold".parse::<Weight>().unwrap(), Weight::Bold);
        assert_eq!("semi-bold".parse::<Weight>().unwrap(), Weight::Semibold);
        assert_eq!("SemiBold".parse::<Weight>().unwrap(), Weight::Semibold);
        assert_eq!("normal".parse::<Weight>().unwrap(), Weight::Regular);
        assert_eq!("extra_bold".parse::<Weight>().unwrap(), Weight::Heavy);
        assert_eq!(" medium ".parse::<Weight>().unwrap(), Weight::Medium);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!("700".parse::<Weight>().unwrap(), Weight::Bold);
        assert_eq!("350".parse::<Weight>().unwrap(), Weight::Other(350));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "boldest", "0", "1001", "x700"] {
            let err = input.parse::<Weight>().unwrap_err();
            assert!(matches!(err, TyleError::UnknownWeight(_)), "{input:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::Semibold.to_string(), "semibold");
        assert_eq!(Weight::Other(550).to_string(), "550");
        assert_eq!(Weight::Other(700).to_string(), "bold");
    }

    #[test]
    fn test_numeric_hundred_step_equals_named() {
        use std::collections::HashSet;

        assert_eq!(Weight::Other(700), Weight::Bold);
        assert_eq!(Weight::Other(500).canonical(), Weight::Medium);
        assert!(matches!(Weight::Other(600).canonical(), Weight::Semibold));
        assert_ne!(Weight::Other(650), Weight::Semibold);

        let set: HashSet<Weight> = [Weight::Bold, Weight::Other(700)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
