//! Locale formatting helpers
//!
//! Pure functions that format numbers, ordinals, decimals and fractions
//! according to a language's locale conventions, backed by ICU locale data.

use crate::Language;
use icu::decimal::input::Decimal;
use icu::decimal::DecimalFormatter;
use icu::plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Fraction-digit bounds for [`format_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatOptions {
    /// Minimum number of fraction digits to keep
    pub min_fraction_digits: u8,
    /// Maximum number of fraction digits to keep (rounding beyond)
    pub max_fraction_digits: u8,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 2,
        }
    }
}

/// Hand-authored Spanish number words for screen-reader output.
///
/// Indexed by the integer value 0..=10.
const SPANISH_NUMBER_WORDS: [&str; 11] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
];

/// Format a number according to the language's locale conventions.
///
/// Grouping and decimal separators follow the locale (`1,234.5` in English,
/// `12.345,5` in Spanish). Defaults to at most two fraction digits with no
/// trailing zeros.
pub fn format_number(language: Language, value: f64, options: Option<NumberFormatOptions>) -> String {
    let options = options.unwrap_or_default();
    let max = options.max_fraction_digits.max(options.min_fraction_digits);
    format_with_digits(language, value, options.min_fraction_digits, max)
}

/// Format a number for screen reader accessibility.
///
/// Spanish integers 0–10 render as number words for clearer pronunciation;
/// any other language or value falls back to [`format_number`].
pub fn format_number_for_screen_reader(language: Language, value: f64) -> String {
    if language == Language::Spanish && value.fract() == 0.0 && (0.0..=10.0).contains(&value) {
        return SPANISH_NUMBER_WORDS[value as usize].to_string();
    }
    format_number(language, value, None)
}

/// Format a number as an ordinal, e.g. `1st`, `2nd`, `3rd`, `11th`.
///
/// The suffix is derived from the language's ordinal plural category, but the
/// suffix table itself is English (st/nd/rd/th) for every language: Spanish
/// ordinals come out as `3th` etc.
pub fn format_ordinal(language: Language, value: i64) -> String {
    let suffix = match ordinal_category(language, value) {
        PluralCategory::One => "st",
        PluralCategory::Two => "nd",
        PluralCategory::Few => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

/// Format a decimal number with a fixed number of fraction digits.
pub fn format_decimal(language: Language, value: f64, decimals: u8) -> String {
    format_with_digits(language, value, decimals, decimals)
}

/// Format a fraction as `numerator/denominator`, each formatted with the
/// default number options.
pub fn format_fraction(language: Language, numerator: f64, denominator: f64) -> String {
    format!(
        "{}/{}",
        format_number(language, numerator, None),
        format_number(language, denominator, None)
    )
}

fn ordinal_category(language: Language, value: i64) -> PluralCategory {
    match PluralRules::try_new(language.icu_locale().into(), PluralRuleType::Ordinal.into()) {
        Ok(rules) => rules.category_for(value),
        Err(_) => PluralCategory::Other,
    }
}

fn format_with_digits(language: Language, value: f64, min: u8, max: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let Ok(formatter) =
        DecimalFormatter::try_new(language.icu_locale().into(), Default::default())
    else {
        return value.to_string();
    };

    // Scale to the maximum precision and round, mirroring a fixed-point view
    // of the f64. Values too large for the fixed-point window pass through.
    let scale = 10f64.powi(i32::from(max));
    let scaled = (value * scale).round();
    if scaled.abs() >= i64::MAX as f64 {
        return value.to_string();
    }

    let mut decimal = Decimal::from(scaled as i64);
    decimal.multiply_pow10(-i16::from(max));
    decimal.trim_end();
    if min > 0 {
        decimal.pad_end(-i16::from(min));
    }

    formatter.format(&decimal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_english_grouping() {
        assert_eq!(format_number(Language::English, 1234.5, None), "1,234.5");
        assert_eq!(format_number(Language::English, 1234567.0, None), "1,234,567");
    }

    #[test]
    fn test_format_number_spanish_grouping() {
        // Spanish uses "." for grouping and "," for decimals
        assert_eq!(format_number(Language::Spanish, 12345.0, None), "12.345");
        assert_eq!(format_number(Language::Spanish, 2.5, None), "2,5");
    }

    #[test]
    fn test_format_number_default_rounds_to_two_digits() {
        assert_eq!(
            format_number(Language::English, std::f64::consts::PI, None),
            "3.14"
        );
        assert_eq!(format_number(Language::English, 2.0, None), "2");
    }

    #[test]
    fn test_format_number_with_options() {
        let options = NumberFormatOptions {
            min_fraction_digits: 2,
            max_fraction_digits: 2,
        };
        assert_eq!(
            format_number(Language::English, 7.0, Some(options)),
            "7.00"
        );

        let options = NumberFormatOptions {
            min_fraction_digits: 0,
            max_fraction_digits: 4,
        };
        assert_eq!(
            format_number(Language::English, 0.12345, Some(options)),
            "0.1235"
        );
    }

    #[test]
    fn test_format_decimal_fixed_precision() {
        assert_eq!(format_decimal(Language::English, 3.5, 2), "3.50");
        assert_eq!(format_decimal(Language::Spanish, 3.5, 2), "3,50");
        assert_eq!(format_decimal(Language::English, 0.125, 2), "0.13");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(Language::English, 1.0, 2.0), "1/2");
        assert_eq!(format_fraction(Language::Spanish, 1.5, 2.0), "1,5/2");
    }

    #[test]
    fn test_format_ordinal_english() {
        assert_eq!(format_ordinal(Language::English, 1), "1st");
        assert_eq!(format_ordinal(Language::English, 2), "2nd");
        assert_eq!(format_ordinal(Language::English, 3), "3rd");
        assert_eq!(format_ordinal(Language::English, 4), "4th");
        assert_eq!(format_ordinal(Language::English, 11), "11th");
        assert_eq!(format_ordinal(Language::English, 12), "12th");
        assert_eq!(format_ordinal(Language::English, 13), "13th");
        assert_eq!(format_ordinal(Language::English, 21), "21st");
        assert_eq!(format_ordinal(Language::English, 102), "102nd");
    }

    #[test]
    fn test_format_ordinal_spanish_keeps_english_suffixes() {
        // Spanish ordinal categories all resolve to "other", so the output
        // keeps the English-style suffix.
        assert_eq!(format_ordinal(Language::Spanish, 1), "1th");
        assert_eq!(format_ordinal(Language::Spanish, 3), "3th");
    }

    #[test]
    fn test_screen_reader_spanish_words() {
        assert_eq!(
            format_number_for_screen_reader(Language::Spanish, 0.0),
            "cero"
        );
        assert_eq!(
            format_number_for_screen_reader(Language::Spanish, 5.0),
            "cinco"
        );
        assert_eq!(
            format_number_for_screen_reader(Language::Spanish, 10.0),
            "diez"
        );
    }

    #[test]
    fn test_screen_reader_fallbacks() {
        // Outside the word table, or not Spanish: regular formatting
        assert_eq!(format_number_for_screen_reader(Language::Spanish, 11.0), "11");
        assert_eq!(format_number_for_screen_reader(Language::Spanish, 2.5), "2,5");
        assert_eq!(format_number_for_screen_reader(Language::English, 5.0), "5");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(format_number(Language::English, f64::NAN, None), "NaN");
        assert_eq!(format_number(Language::English, f64::INFINITY, None), "inf");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_number(Language::English, -1234.5, None), "-1,234.5");
        assert_eq!(format_decimal(Language::English, -0.5, 2), "-0.50");
    }
}
