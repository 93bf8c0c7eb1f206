use insta::assert_json_snapshot;
use pokedex::presentation::presenters::{
    present_catalog_page, present_entity_detail, present_favorite_toggle, present_type_list,
};
use pokedex_runtime::{Controller, Event, FetchedCatalog};
use pokedex_store::MemoryStore;
use pokedex_testing::{EntityBuilder, sample_catalog};
use pokedex_types::{EntityId, SortKey};
use serde_json::json;

fn loaded() -> Controller<MemoryStore> {
    let mut controller = Controller::with_seed(MemoryStore::new(), 1);
    let ticket = controller.retry_fetch();
    controller.complete_fetch(
        ticket,
        Ok(FetchedCatalog {
            entities: sample_catalog(),
            dropped: 1,
        }),
    );
    controller
}

#[test]
fn test_catalog_page_json() {
    let mut controller = loaded();
    controller.toggle_favorite(EntityId::new(6).unwrap());
    controller.apply(Event::SetSearchTerm("char".to_string()));
    controller.apply(Event::SelectType("fire".to_string()));
    controller.apply(Event::SetSortKey(SortKey::ByHp));

    assert_json_snapshot!(present_catalog_page(&mut controller), @r#"
    {
      "content": {
        "status": "ready",
        "search_term": "char",
        "selected_type": "fire",
        "sort_key": "hp",
        "page_size": 20,
        "filtered_count": 3,
        "has_more": false,
        "favorites_count": 1,
        "theme": "dark",
        "dropped": 1,
        "entries": [
          {
            "id": 6,
            "name": "charizard",
            "types": [
              "fire",
              "flying"
            ],
            "hp": 78,
            "attack": 84,
            "is_favorite": true
          },
          {
            "id": 5,
            "name": "charmeleon",
            "types": [
              "fire"
            ],
            "hp": 58,
            "attack": 64,
            "is_favorite": false
          },
          {
            "id": 4,
            "name": "charmander",
            "types": [
              "fire"
            ],
            "hp": 39,
            "attack": 52,
            "is_favorite": false
          }
        ]
      }
    }
    "#);
}

#[test]
fn test_empty_match_warns() {
    let mut controller = loaded();
    controller.apply(Event::SetSearchTerm("mew".to_string()));

    let result = present_catalog_page(&mut controller);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["badge"]["level"], "warning");
    assert_eq!(value["content"]["filtered_count"], 0);
    assert_eq!(value["suggestions"][0]["command"], "clear");
}

#[test]
fn test_type_list_json() {
    let mut controller = loaded();
    controller.apply(Event::SelectType("water".to_string()));

    assert_json_snapshot!(present_type_list(&controller), @r#"
    {
      "content": {
        "selected_type": "water",
        "show_more": false,
        "types": [
          {
            "name": "all",
            "glyph": "⚡",
            "selected": false
          },
          {
            "name": "fire",
            "glyph": "🔥",
            "selected": false
          },
          {
            "name": "water",
            "glyph": "💧",
            "selected": true
          },
          {
            "name": "grass",
            "glyph": "🌿",
            "selected": false
          },
          {
            "name": "electric",
            "glyph": "⚡",
            "selected": false
          }
        ]
      },
      "suggestions": [
        {
          "description": "More types",
          "command": "pokedex types --more"
        }
      ]
    }
    "#);
}

#[test]
fn test_favorite_toggle_badges() {
    let mut controller = loaded();
    let pikachu = EntityId::new(25).unwrap();

    controller.toggle_favorite(pikachu);
    assert_json_snapshot!(present_favorite_toggle(pikachu, controller.favorites()), @r##"
    {
      "badge": {
        "level": "success",
        "label": "#025 added to favorites"
      },
      "content": {
        "id": 25,
        "is_favorite": true,
        "favorites_count": 1
      }
    }
    "##);

    controller.toggle_favorite(pikachu);
    let removed = present_favorite_toggle(pikachu, controller.favorites());
    assert_eq!(removed.badge.unwrap().label, "#025 removed from favorites");
}

#[test]
fn test_entity_detail_units() {
    let bulbasaur = EntityBuilder::new(1, "bulbasaur")
        .types(&["grass", "poison"])
        .stats([45, 49, 49, 65, 65, 45])
        .abilities(&["overgrow", "chlorophyll"])
        .size(7, 69)
        .sprite("https://img.example/1.png")
        .build();

    let value = serde_json::to_value(present_entity_detail(&bulbasaur, true)).unwrap();
    let content = &value["content"];

    assert_eq!(content["height_m"], json!(0.7));
    assert_eq!(content["weight_kg"], json!(6.9));
    assert_eq!(content["is_favorite"], json!(true));
    assert_eq!(content["abilities"], json!(["overgrow", "chlorophyll"]));
    assert_eq!(content["sprite_url"], json!("https://img.example/1.png"));
    assert_eq!(content["stats"][0]["name"], json!("hp"));
    assert_eq!(content["stats"][0]["percent"], json!(45.0 / 255.0 * 100.0));
    assert_eq!(content["stats"][3]["name"], json!("special-attack"));
    assert_eq!(content["stats"][3]["base_value"], json!(65));
    assert!(value.get("badge").is_none());
}

#[test]
fn test_entity_detail_without_sprite_uses_placeholder() {
    let bare = EntityBuilder::new(132, "ditto").build();

    let result = present_entity_detail(&bare, false);

    assert!(!result.content.sprite_url.is_empty());
    assert!(!result.content.is_favorite);
}
