use pokedex_types::{Entity, SortKey};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary collation key: decomposed, diacritics dropped, lowercased.
///
/// Approximates a locale compare at primary strength, so `Flabébé` sorts
/// next to `flabebe` rather than after `z`.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tiebreak for names with the same collation key: lowercase before uppercase,
/// then accented after plain (`abra` < `Abra`, `flabebe` < `flabébé`).
fn tiebreak_key(name: &str) -> String {
    name.chars()
        .flat_map(|c| {
            let swapped: Vec<char> = if c.is_lowercase() {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            swapped
        })
        .collect()
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| tiebreak_key(a).cmp(&tiebreak_key(b)))
}

/// Stage 2: stable sort. Equal keys keep their input order.
pub fn sort_entities(entities: &mut [&Entity], key: SortKey) {
    match key {
        SortKey::ById => entities.sort_by(|a, b| a.id.cmp(&b.id)),
        SortKey::ByName => {
            entities.sort_by_cached_key(|e| (collation_key(&e.name), tiebreak_key(&e.name)))
        }
        SortKey::ByHp => entities.sort_by(|a, b| b.hp().cmp(&a.hp())),
        SortKey::ByAttack => entities.sort_by(|a, b| b.attack().cmp(&a.attack())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_key_folds_case_and_accents() {
        assert_eq!(collation_key("Flabébé"), "flabebe");
        assert_eq!(collation_key("NIDORAN"), "nidoran");
    }

    #[test]
    fn test_compare_names_orders_accented_with_plain() {
        let mut names = vec!["zubat", "Flabébé", "abra", "flaaffy"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["abra", "flaaffy", "Flabébé", "zubat"]);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase() {
        assert_eq!(compare_names("abra", "Abra"), Ordering::Less);
        assert_eq!(compare_names("Abra", "abra"), Ordering::Greater);
        assert_eq!(compare_names("abra", "abra"), Ordering::Equal);

        let mut names = vec!["Eevee", "abra", "eevee", "Abra"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["abra", "Abra", "eevee", "Eevee"]);
    }
}
