//! # Barcode Codec
//!
//! Deterministic encoder mapping `{variant, weight, production date}` to a
//! numeric code that an external symbology library renders as a scannable
//! label (CODE128 in the reference front-end).
//!
//! ## Code Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Barcode Number Layout                                │
//! │                                                                         │
//! │      0 1   1 0 0   0 0 5   1 2 3                                        │
//! │      └─┘   └───┘   └───┘   └───┘                                        │
//! │       VV    WWW     DDD     RRR                                         │
//! │       │      │       │       │                                          │
//! │       │      │       │       └── random disambiguator (000-999)         │
//! │       │      │       └── day of year of production date (001-366)       │
//! │       │      └── weight in grams, zero padded (000-999)                 │
//! │       └── variant code from the fixed lookup table                      │
//! │                                                                         │
//! │  Example: Original, 100 g, produced Jan 5 → "01100005" + "123"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding is intentionally absent: sale scanning looks products up by
//! exact string match against stored barcodes, so nothing ever needs to
//! take a code apart again.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

// =============================================================================
// Variants
// =============================================================================

/// The fixed product variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Original,
    Pedas,
    Balado,
    Bbq,
    Keju,
}

impl Variant {
    /// All known variants, in lookup-table order.
    pub const ALL: [Variant; 5] = [
        Variant::Original,
        Variant::Pedas,
        Variant::Balado,
        Variant::Bbq,
        Variant::Keju,
    ];

    /// Two-digit code segment for this variant.
    pub const fn code(&self) -> &'static str {
        match self {
            Variant::Original => "01",
            Variant::Pedas => "02",
            Variant::Balado => "03",
            Variant::Bbq => "04",
            Variant::Keju => "05",
        }
    }

    /// Display label, as it appears in product names.
    pub const fn label(&self) -> &'static str {
        match self {
            Variant::Original => "Original",
            Variant::Pedas => "Pedas",
            Variant::Balado => "Balado",
            Variant::Bbq => "BBQ",
            Variant::Keju => "Keju",
        }
    }

    /// Looks a variant up by its display label. Case-sensitive, matching
    /// the fixed table of the reference generator.
    pub fn from_label(label: &str) -> Option<Variant> {
        Variant::ALL.iter().copied().find(|v| v.label() == label)
    }
}

/// Returns the two-digit code for a variant label.
///
/// Unknown labels silently map to `"00"`. That is the codec's documented
/// failure mode: labels for unlisted variants still encode and print, they
/// just share the catch-all variant segment.
pub fn variant_code(label: &str) -> &'static str {
    Variant::from_label(label).map_or("00", |v| v.code())
}

// =============================================================================
// Encoding
// =============================================================================

/// Deterministically encodes the 8-digit `VVWWWDDD` prefix plus the given
/// 3-digit suffix.
///
/// - `weight_grams` fills a 3-digit field; values above 999 clamp to 999
///   (same silent-fallback spirit as the variant segment)
/// - the day-of-year segment is the 1-based ordinal of `production_date`
/// - `suffix` is taken modulo 1000
pub fn encode(variant_label: &str, weight_grams: u32, production_date: NaiveDate, suffix: u16) -> String {
    let weight = weight_grams.min(999);
    let day_of_year = production_date.ordinal();
    format!(
        "{}{:03}{:03}{:03}",
        variant_code(variant_label),
        weight,
        day_of_year,
        suffix % 1000
    )
}

/// Encodes a barcode with a fresh random disambiguator suffix.
///
/// Two batches generated for the same variant, weight and date still get
/// distinct codes (with probability 999/1000); the suffix carries no
/// meaning beyond uniqueness.
pub fn generate(variant_label: &str, weight_grams: u32, production_date: NaiveDate) -> String {
    let suffix = rand::thread_rng().gen_range(0..1000u16);
    encode(variant_label, weight_grams, production_date, suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_variant_codes() {
        assert_eq!(variant_code("Original"), "01");
        assert_eq!(variant_code("Pedas"), "02");
        assert_eq!(variant_code("Balado"), "03");
        assert_eq!(variant_code("BBQ"), "04");
        assert_eq!(variant_code("Keju"), "05");
    }

    #[test]
    fn test_unknown_variant_falls_back_silently() {
        assert_eq!(variant_code("Rendang"), "00");
        assert_eq!(variant_code(""), "00");
        // Lookup is case-sensitive, like the fixed table it mirrors.
        assert_eq!(variant_code("original"), "00");
    }

    #[test]
    fn test_encode_segments() {
        // Jan 5 is day-of-year 5.
        let code = encode("Original", 100, date(2026, 1, 5), 123);
        assert_eq!(code, "01100005123");
        assert_eq!(&code[0..2], "01");
        assert_eq!(&code[2..5], "100");
        assert_eq!(&code[5..8], "005");
        assert_eq!(&code[8..11], "123");
    }

    #[test]
    fn test_encode_day_of_year() {
        assert_eq!(&encode("Pedas", 200, date(2026, 1, 1), 0)[5..8], "001");
        assert_eq!(&encode("Pedas", 200, date(2026, 12, 31), 0)[5..8], "365");
        // Leap year.
        assert_eq!(&encode("Pedas", 200, date(2024, 12, 31), 0)[5..8], "366");
    }

    #[test]
    fn test_encode_pads_and_clamps() {
        assert_eq!(&encode("Keju", 50, date(2026, 3, 1), 7)[2..5], "050");
        assert_eq!(&encode("Keju", 5, date(2026, 3, 1), 7)[8..11], "007");
        // 3-digit field clamps oversized weights instead of overflowing.
        assert_eq!(&encode("Keju", 1500, date(2026, 3, 1), 7)[2..5], "999");
        assert_eq!(&encode("Keju", 50, date(2026, 3, 1), 1007)[8..11], "007");
    }

    #[test]
    fn test_generate_shape() {
        let code = generate("Balado", 250, date(2026, 6, 15));
        assert_eq!(code.len(), 11);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        // Deterministic prefix, random suffix.
        assert_eq!(&code[0..8], &encode("Balado", 250, date(2026, 6, 15), 0)[0..8]);
    }

    #[test]
    fn test_variant_roundtrip() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_label(v.label()), Some(v));
            assert_eq!(variant_code(v.label()), v.code());
        }
        assert_eq!(Variant::from_label("Gurih"), None);
    }
}
