//! Case folding and collation helpers for names.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string for case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use clubroster_domain::common::fold_case;
///
/// assert_eq!(fold_case("Art Club"), "art club");
/// ```
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Returns true if both strings are equal ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

/// Builds the primary collation key: decomposed, combining marks stripped, lowercased.
fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares two names the way a human-facing list sorts them.
///
/// Accents and case only break ties; `"éclair"` sorts next to `"eclair"`,
/// not after `"zebra"`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use clubroster_domain::common::collate;
///
/// assert_eq!(collate("art club", "Book Club"), Ordering::Less);
/// assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
