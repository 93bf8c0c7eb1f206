use pokedex_runtime::{CatalogState, ErrorKind, FetchStatus, FetchedCatalog, fetch_catalog};
use pokedex_testing::{FixedConnectivity, MockCatalogSource, entity, numbered_catalog};
use std::time::Duration;

fn three() -> Vec<pokedex_types::Entity> {
    vec![
        entity(1, "bulbasaur", &["grass"], 45, 49),
        entity(4, "charmander", &["fire"], 39, 52),
        entity(7, "squirtle", &["water"], 44, 48),
    ]
}

fn names(entities: &[pokedex_types::Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.name.as_str()).collect()
}

#[tokio::test]
async fn test_all_details_succeed() {
    let source = MockCatalogSource::new(three());
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();

    assert_eq!(names(&fetched.entities), vec!["bulbasaur", "charmander", "squirtle"]);
    assert_eq!(fetched.dropped, 0);

    let mut state = CatalogState::new();
    let ticket = state.begin_fetch();
    assert!(state.complete_fetch(ticket, Ok(fetched)));
    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.len(), 3);
    assert!(state.error_message().is_none());
}

#[tokio::test]
async fn test_failed_detail_is_dropped_silently() {
    let source = MockCatalogSource::new(three()).failing_detail("charmander");
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();

    assert_eq!(names(&fetched.entities), vec!["bulbasaur", "squirtle"]);
    assert_eq!(fetched.dropped, 1);
    assert_eq!(source.detail_calls(), 3);

    let mut state = CatalogState::new();
    let ticket = state.begin_fetch();
    state.complete_fetch(ticket, Ok(fetched));
    assert_eq!(state.status(), FetchStatus::Ready);
    assert!(state.error_message().is_none());
    assert_eq!(state.dropped(), 1);
}

#[tokio::test]
async fn test_list_failure_aborts_cycle() {
    let source = MockCatalogSource::new(three()).failing_list(500);
    let online = FixedConnectivity::online();

    let err = fetch_catalog(&source, &online, 151).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ListFetchFailed);
    assert_eq!(source.detail_calls(), 0);

    let mut state = CatalogState::new();
    let ticket = state.begin_fetch();
    state.complete_fetch(ticket, Err(err));
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.is_empty());
    assert_eq!(state.error_message(), Some("Failed to fetch Pokemon list"));
    assert!(state.can_retry());
}

#[tokio::test]
async fn test_offline_issues_no_requests() {
    let source = MockCatalogSource::new(three());
    let offline = FixedConnectivity::offline();

    let err = fetch_catalog(&source, &offline, 151).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Offline);
    assert_eq!(offline.probes(), 1);
    assert_eq!(source.list_calls(), 0);
    assert_eq!(source.detail_calls(), 0);
}

#[tokio::test]
async fn test_every_detail_failing_is_an_empty_success() {
    let source = MockCatalogSource::new(three())
        .failing_detail("bulbasaur")
        .failing_detail("charmander")
        .failing_detail("squirtle");
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();
    assert!(fetched.entities.is_empty());
    assert_eq!(fetched.dropped, 3);

    let mut state = CatalogState::new();
    let ticket = state.begin_fetch();
    state.complete_fetch(ticket, Ok(fetched));
    assert_eq!(state.status(), FetchStatus::Ready);
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_page_limit_caps_reference_list() {
    let source = MockCatalogSource::new(numbered_catalog(30));
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 10).await.unwrap();
    assert_eq!(fetched.entities.len(), 10);
    assert_eq!(source.detail_calls(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_details_are_fetched_concurrently() {
    let source =
        MockCatalogSource::new(numbered_catalog(8)).with_uniform_delay(Duration::from_millis(100));
    let online = FixedConnectivity::online();

    let started = tokio::time::Instant::now();
    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(fetched.entities.len(), 8);
    assert_eq!(source.peak_in_flight(), 8);
    // Bounded by the slowest request, not the sum of all eight.
    assert!(elapsed < Duration::from_millis(200), "took {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_result_order_follows_references_not_completion() {
    let source = MockCatalogSource::new(three())
        .with_delay("bulbasaur", Duration::from_millis(300))
        .with_delay("charmander", Duration::from_millis(200))
        .with_delay("squirtle", Duration::from_millis(100));
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();

    assert_eq!(
        source.completion_order(),
        vec!["squirtle", "charmander", "bulbasaur"]
    );
    assert_eq!(names(&fetched.entities), vec!["bulbasaur", "charmander", "squirtle"]);
}

#[tokio::test(start_paused = true)]
async fn test_slow_failure_does_not_abort_siblings() {
    let source = MockCatalogSource::new(three())
        .failing_detail("bulbasaur")
        .with_delay("squirtle", Duration::from_millis(500));
    let online = FixedConnectivity::online();

    let fetched = fetch_catalog(&source, &online, 151).await.unwrap();

    assert_eq!(names(&fetched.entities), vec!["charmander", "squirtle"]);
}

#[test]
fn test_failed_cycle_keeps_previous_catalog() {
    let mut state = CatalogState::new();
    let first = state.begin_fetch();
    state.complete_fetch(
        first,
        Ok(FetchedCatalog {
            entities: three(),
            dropped: 0,
        }),
    );
    let version = state.version();

    let second = state.begin_fetch();
    assert_eq!(state.status(), FetchStatus::Loading);
    state.complete_fetch(second, Err(pokedex_runtime::FetchError::offline()));

    assert_eq!(state.status(), FetchStatus::Error);
    assert_eq!(state.len(), 3);
    assert_eq!(state.version(), version);
    assert!(state.error_message().unwrap().contains("offline"));
}

#[test]
fn test_latest_cycle_wins() {
    let mut state = CatalogState::new();
    let stale = state.begin_fetch();
    let latest = state.begin_fetch();

    assert!(state.complete_fetch(
        latest,
        Ok(FetchedCatalog {
            entities: three(),
            dropped: 0,
        })
    ));
    assert!(!state.complete_fetch(stale, Err(pokedex_runtime::FetchError::offline())));

    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.len(), 3);
}

#[test]
fn test_duplicate_ids_keep_first_occurrence() {
    let mut state = CatalogState::new();
    let ticket = state.begin_fetch();
    state.complete_fetch(
        ticket,
        Ok(FetchedCatalog {
            entities: vec![
                entity(1, "bulbasaur", &["grass"], 45, 49),
                entity(1, "bulbasaur-copy", &["grass"], 45, 49),
                entity(4, "charmander", &["fire"], 39, 52),
            ],
            dropped: 0,
        }),
    );

    assert_eq!(names(state.entities()), vec!["bulbasaur", "charmander"]);
}
