use chrono::Datelike;
use unicode_normalization::UnicodeNormalization;

/// Render `value` zero-padded to at least `width` characters.
///
/// Longer values are never truncated. Negative values keep the sign in
/// front of the padding (`-5` at width 3 is `-05`).
pub fn pad(value: i64, width: usize) -> String {
    format!("{value:0width$}")
}

/// Turn arbitrary text into a lowercase, hyphen-delimited slug.
///
/// Text is decomposed (NFD) and combining diacritical marks are dropped, so
/// `"Café"` becomes `"cafe"`. Every run of characters other than ASCII
/// letters and digits collapses into a single `-`, and hyphens never lead
/// or trail. Input without any ASCII alphanumerics yields `""`.
pub fn to_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut separator = false;

    for c in text.nfd().filter(|c| !is_combining_diacritic(*c)) {
        if c.is_ascii_alphanumeric() {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            separator = true;
        }
    }

    slug
}

/// Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Format a calendar date as `YYYYMMDD`.
///
/// The date's own calendar fields are used; pass `chrono::Local::now()` to
/// format in the process's local time zone rather than UTC.
pub fn yyyymmdd<D: Datelike>(date: &D) -> String {
    format!(
        "{}{}{}",
        date.year(),
        pad(i64::from(date.month()), 2),
        pad(i64::from(date.day()), 2)
    )
}
