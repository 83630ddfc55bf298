//! Text matching and ordering for names and labels.
//!
//! Both sides are normalized before comparing so that precomposed and
//! decomposed Vietnamese input behave the same.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-insensitive substring search.
///
/// Returns `true` if:
/// - The filter is empty (matches everything), or
/// - The text contains the filter (case-insensitive)
///
/// # Example
///
/// ```
/// use roster_core::collate::matches_search;
///
/// assert!(matches_search("Nguyễn An", ""));
/// assert!(matches_search("Nguyễn An", "nguyễn"));
/// assert!(matches_search("Nguyễn An", "AN"));
/// assert!(!matches_search("Nguyễn An", "Bình"));
/// ```
pub fn matches_search(text: &str, filter: &str) -> bool {
    filter.is_empty() || fold_case(text).contains(&fold_case(filter))
}

/// Ordering that approximates a locale-aware string compare.
///
/// Base letters decide first, then accents, then case. At the case level
/// lowercase sorts before uppercase.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
}

fn fold_case(text: &str) -> String {
    lowercase(text).collect()
}

fn lowercase(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfc().flat_map(char::to_lowercase)
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_stroke)
}

/// Letters with a stroke have no canonical decomposition, so NFD leaves
/// them alone. Fold them onto their base letter here.
fn fold_stroke(c: char) -> char {
    match c {
        'đ' | 'ð' => 'd',
        'ł' => 'l',
        'ø' => 'o',
        'ħ' => 'h',
        'ŧ' => 't',
        'ƀ' => 'b',
        'ɨ' => 'i',
        'ʉ' => 'u',
        other => other,
    }
}

/// `false` for lowercase characters so they sort first.
fn case_key(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.nfc().map(|c| !c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_handles_decomposed_input() {
        let decomposed: String = "nguyễn".nfd().collect();
        assert!(matches_search("Nguyễn An", &decomposed));
    }

    #[test]
    fn accents_are_secondary() {
        // Code point order would put "Ánh" after every ASCII name.
        assert_eq!(compare_text("Ánh", "Bình"), Ordering::Less);
        assert_eq!(compare_text("an", "ấn"), Ordering::Less);
        assert_eq!(compare_text("Lê", "Le"), Ordering::Greater);
    }

    #[test]
    fn stroke_letters_sort_with_their_base() {
        assert_eq!(compare_text("Đặng An", "Hoàng An"), Ordering::Less);
        assert_eq!(compare_text("Đỗ Vy", "Vũ An"), Ordering::Less);
        assert_eq!(compare_text("Đỗ Vy", "Zed"), Ordering::Less);
        assert_eq!(compare_text("Bùi Nam", "Đặng An"), Ordering::Less);
        // Same base letters, the stroke only breaks the tie.
        assert_eq!(compare_text("Do", "Đo"), Ordering::Less);
        assert_eq!(compare_text("Łukasz", "Marek"), Ordering::Less);
    }

    #[test]
    fn case_is_tertiary() {
        assert_eq!(compare_text("an", "An"), Ordering::Less);
        assert_eq!(compare_text("an", "Bo"), Ordering::Less);
        assert_eq!(compare_text("Hr", "Hr"), Ordering::Equal);
        assert_eq!(compare_text("élan", "Élan"), Ordering::Less);
        assert_eq!(compare_text("đinh", "Đinh"), Ordering::Less);
        assert_eq!(compare_text("ωμέγα", "Ωμέγα"), Ordering::Less);
    }
}
