use pokedex_engine::{
    PAGE_SIZE_START, ViewMemo, ViewParameters, derive, derive_view, filter_entities,
};
use pokedex_testing::{EntityBuilder, entity, numbered_catalog, sample_catalog};
use pokedex_types::{Entity, SortKey};

fn names(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_search_and_type_are_conjunctive() {
    let mut catalog = sample_catalog();
    catalog.push(entity(900, "charcadet", &["ghost"], 40, 50));

    let params = ViewParameters::new().search("char").of_type("fire");
    let view = derive(&catalog, &params);

    assert_eq!(names(&view), vec!["charmander", "charmeleon", "charizard"]);
    assert!(
        view.iter()
            .all(|e| e.name.to_lowercase().contains("char") && e.has_type("fire"))
    );
}

#[test]
fn test_search_is_case_insensitive_both_ways() {
    let catalog = vec![
        entity(1, "Mr-Mime", &["psychic"], 40, 45),
        entity(2, "mime-jr", &["psychic"], 20, 25),
    ];

    let view = derive(&catalog, &ViewParameters::new().search("MIME"));
    assert_eq!(view.len(), 2);
}

#[test]
fn test_empty_search_with_all_types_keeps_everything() {
    let catalog = sample_catalog();
    let filtered = filter_entities(&catalog, "", "all");
    assert_eq!(filtered.len(), catalog.len());
}

#[test]
fn test_unknown_type_yields_empty_view() {
    let view = derive_view(&sample_catalog(), &ViewParameters::new().of_type("shadow"));
    assert!(view.is_empty());
    assert_eq!(view.filtered_count, 0);
    assert!(!view.has_more);
}

#[test]
fn test_sort_by_id_ascending() {
    let mut catalog = sample_catalog();
    catalog.reverse();

    let view = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ById));
    let ids: Vec<u32> = view.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![1, 4, 5, 6, 7, 25, 35, 63, 131, 143, 147, 149]);
}

#[test]
fn test_sort_by_name_uses_folded_collation() {
    let catalog = vec![
        entity(669, "Flabébé", &["fairy"], 44, 38),
        entity(26, "raichu", &["electric"], 60, 90),
        entity(180, "flaaffy", &["electric"], 70, 55),
        entity(41, "zubat", &["poison", "flying"], 40, 45),
        entity(63, "abra", &["psychic"], 25, 20),
    ];

    let view = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByName));
    assert_eq!(
        names(&view),
        vec!["abra", "flaaffy", "Flabébé", "raichu", "zubat"]
    );
}

#[test]
fn test_sort_by_hp_and_attack_descending() {
    let catalog = sample_catalog();

    let by_hp = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByHp));
    assert_eq!(names(&by_hp)[..3], ["snorlax", "lapras", "dragonite"]);

    let by_attack = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByAttack));
    assert_eq!(names(&by_attack)[..3], ["dragonite", "snorlax", "lapras"]);
    assert_eq!(by_attack.last().map(|e| e.name.as_str()), Some("abra"));
}

#[test]
fn test_equal_keys_keep_catalog_order() {
    let catalog = vec![
        entity(10, "tie-c", &["normal"], 50, 70),
        entity(2, "tie-a", &["normal"], 50, 70),
        entity(7, "tie-b", &["normal"], 50, 70),
        entity(3, "strong", &["normal"], 90, 90),
    ];

    let by_hp = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByHp));
    assert_eq!(names(&by_hp), vec!["strong", "tie-c", "tie-a", "tie-b"]);

    let by_attack = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByAttack));
    assert_eq!(names(&by_attack), vec!["strong", "tie-c", "tie-a", "tie-b"]);
}

#[test]
fn test_equal_names_keep_catalog_order() {
    let catalog = vec![
        entity(132, "ditto", &["normal"], 48, 48),
        entity(63, "abra", &["psychic"], 25, 20),
        entity(51, "ditto", &["normal"], 48, 48),
        entity(12, "ditto", &["normal"], 48, 48),
    ];

    let by_name = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByName));
    let ids: Vec<u32> = by_name.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![63, 132, 51, 12]);
}

#[test]
fn test_hp_and_attack_read_fixed_slots() {
    let catalog = vec![
        EntityBuilder::new(1, "glass-cannon")
            .stats([10, 200, 5, 5, 5, 5])
            .build(),
        EntityBuilder::new(2, "wall").stats([200, 10, 5, 5, 5, 5]).build(),
    ];

    let by_hp = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByHp));
    assert_eq!(names(&by_hp), vec!["wall", "glass-cannon"]);

    let by_attack = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByAttack));
    assert_eq!(names(&by_attack), vec!["glass-cannon", "wall"]);
}

#[test]
fn test_pagination_caps_at_page_size() {
    let catalog = numbered_catalog(45);

    let first = derive_view(&catalog, &ViewParameters::new());
    assert_eq!(first.len(), PAGE_SIZE_START);
    assert_eq!(first.filtered_count, 45);
    assert!(first.has_more);

    let mut params = ViewParameters::new();
    params.load_more();
    params.load_more();
    let all = derive_view(&catalog, &params);
    assert_eq!(all.len(), 45);
    assert!(!all.has_more);
}

#[test]
fn test_page_is_prefix_of_sorted_filter() {
    let catalog = numbered_catalog(30);
    let params = ViewParameters::new().sorted_by(SortKey::ByName).page_size(5);

    let view = derive(&catalog, &params);
    assert_eq!(
        names(&view),
        vec![
            "creature-001",
            "creature-002",
            "creature-003",
            "creature-004",
            "creature-005"
        ]
    );
}

#[test]
fn test_single_result_flag() {
    let view = derive_view(&sample_catalog(), &ViewParameters::new().search("pika"));
    assert!(view.is_single_result());
    assert_eq!(view.entities[0].name, "pikachu");
}

#[test]
fn test_derive_does_not_mutate_catalog() {
    let catalog = sample_catalog();
    let before = catalog.clone();

    let _ = derive(&catalog, &ViewParameters::new().sorted_by(SortKey::ByHp));
    assert_eq!(catalog, before);
}

#[test]
fn test_memo_recomputes_on_change_only() {
    let catalog = sample_catalog();
    let mut memo = ViewMemo::new();
    let params = ViewParameters::new();

    let first = memo.get(1, &catalog, &params).clone();
    let again = memo.get(1, &catalog, &params).clone();
    assert_eq!(first, again);
    assert_eq!(memo.recomputations(), 1);

    let fire = params.clone().of_type("fire");
    assert_eq!(memo.get(1, &catalog, &fire).len(), 3);
    assert_eq!(memo.recomputations(), 2);

    let shorter = &catalog[..4];
    assert_eq!(memo.get(2, shorter, &fire).len(), 3);
    assert_eq!(memo.recomputations(), 3);

    memo.get(2, shorter, &fire);
    assert_eq!(memo.recomputations(), 3);
}
