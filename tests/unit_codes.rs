//! Shape and distribution tests for the public generators.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use recordcode::{
    make_bill_code, make_code, make_session_code, make_sku_from_name, pad, random_digits,
    random_string, to_slug, yyyymmdd, Codegen,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()
}

#[test]
fn random_string_matches_alphabet_for_all_lengths() {
    let re = Regex::new("^[a-z0-9]*$").unwrap();
    for len in 0..64 {
        let s = random_string(len);
        assert_eq!(s.len(), len);
        assert!(re.is_match(&s), "{s:?}");
    }
}

#[test]
fn random_digits_match_alphabet_for_all_lengths() {
    let re = Regex::new("^[0-9]*$").unwrap();
    for len in 0..64 {
        let s = random_digits(len);
        assert_eq!(s.len(), len);
        assert!(re.is_match(&s), "{s:?}");
    }
}

#[test]
fn random_digits_are_roughly_uniform() {
    let mut gen = Codegen::with_source(StdRng::seed_from_u64(2025));
    let digits = gen.random_digits(100_000);

    let mut counts = [0usize; 10];
    for c in digits.bytes() {
        counts[usize::from(c - b'0')] += 1;
    }

    // Expected 10_000 each; 5 sigma is about 475.
    for (digit, count) in counts.iter().enumerate() {
        assert!(
            (9_500..=10_500).contains(count),
            "digit {digit} drawn {count} times"
        );
    }
}

#[test]
fn formatter_examples() {
    assert_eq!(pad(5, 2), "05");
    assert_eq!(pad(123, 2), "123");
    assert_eq!(to_slug("Café Pho"), "cafe-pho");
    assert_eq!(to_slug(""), "");
    assert_eq!(yyyymmdd(&date()), "20251022");
}

#[test]
fn bill_and_session_codes_match_shape() {
    let bill = Regex::new(r"^BILL-\d{8}-\d{4}$").unwrap();
    let session = Regex::new(r"^SES-\d{8}-[A-Z0-9]{4}$").unwrap();
    for _ in 0..200 {
        assert!(bill.is_match(&make_bill_code(&date())));
        assert!(session.is_match(&make_session_code(&date())));
    }
}

#[test]
fn generic_code_matches_shape() {
    let re = Regex::new("^INV-[A-Z0-9]{9}$").unwrap();
    for _ in 0..200 {
        assert!(re.is_match(&make_code("inv", 9)));
    }
}

#[test]
fn sku_fallback_for_empty_name() {
    let sku = make_sku_from_name("", 12);
    assert_eq!(sku.len(), 12);
    assert!(Regex::new("^SKU[A-Z0-9]{9}$").unwrap().is_match(&sku));
}

#[test]
fn sku_length_is_exact() {
    for max in 6..=24 {
        for name in ["Café Pho", "", "ab", "Mì Quảng đặc biệt", "***"] {
            let sku = make_sku_from_name(name, max);
            assert_eq!(sku.len(), max, "{name:?} at {max}: {sku}");
            assert!(sku.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn codes_rarely_repeat() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(make_code("CODE", 10)), "duplicate code generated");
    }
}
