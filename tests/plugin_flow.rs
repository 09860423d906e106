use countryscope::infrastructure::STORAGE_FILE_NAME;
use countryscope::storage::FAVORITES_KEY;
use countryscope::ui::{render_to_string, Body};
use countryscope::{handle_event, initialize, Action, AppState, Config, Event, LoadState, ViewMode};

const BODY: &[u8] = br#"[
    {"name": {"common": "Peru", "official": "Republic of Peru"}, "cca3": "PER", "region": "Americas",
     "population": 33715471, "capital": ["Lima"], "borders": ["BOL", "CHL"]},
    {"name": {"common": "France", "official": "French Republic"}, "cca3": "FRA", "region": "Europe",
     "population": 67391582, "capital": ["Paris"]},
    {"name": {"common": "Chile", "official": "Republic of Chile"}, "cca3": "CHL", "region": "Americas",
     "population": 19116209, "borders": ["PER"]},
    {"name": {"common": "Bolivia", "official": "Plurinational State of Bolivia"}, "cca3": "BOL",
     "region": "Americas", "population": 11673029, "borders": ["PER", "CHL"]}
]"#;

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    }
}

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut actions = vec![];
    for event in events {
        let (_, mut emitted) = handle_event(state, event).unwrap();
        actions.append(&mut emitted);
    }
    actions
}

fn loaded(config: &Config) -> AppState {
    let mut state = initialize(config);
    send(
        &mut state,
        &[
            Event::PermissionsGranted,
            Event::CountriesFetched {
                status: 200,
                body: BODY.to_vec(),
            },
        ],
    );
    state
}

#[test]
fn test_fetch_is_requested_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config_in(&dir));

    let actions = send(&mut state, &[Event::PermissionsGranted, Event::PermissionsGranted]);
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::FetchCountries(request) => assert!(request.url.starts_with("https://restcountries.com/")),
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    {
        let mut state = loaded(&config);
        send(&mut state, &[Event::KeyDown, Event::ToggleFavorite]);
        assert!(state.favorites.is_favorite("FRA"));
    }

    let raw = std::fs::read_to_string(dir.path().join(STORAGE_FILE_NAME)).unwrap();
    assert!(raw.contains(FAVORITES_KEY));

    // No fetch after the restart: favorites render from storage alone.
    let mut state = initialize(&config);
    assert_eq!(state.load_state, LoadState::Loading);
    send(&mut state, &[Event::ToggleView]);
    assert_eq!(state.view_mode, ViewMode::Favorites);

    let vm = state.compute_viewmodel(24, 120);
    let names: Vec<&str> = vm.body.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["France"]);
    assert!(render_to_string(&state, 24, 120).contains("France"));
}

#[test]
fn test_dark_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut state = initialize(&config);
    assert!(!state.dark_mode);
    send(&mut state, &[Event::ToggleDarkMode]);
    drop(state);

    let state = initialize(&config);
    assert!(state.dark_mode);
    assert_eq!(state.theme().name, "catppuccin-mocha");
}

#[test]
fn test_failed_fetch_keeps_favorites_view() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    {
        let mut state = loaded(&config);
        send(&mut state, &[Event::ToggleFavorite]);
    }

    let mut state = initialize(&config);
    send(
        &mut state,
        &[
            Event::PermissionsGranted,
            Event::CountriesFetched {
                status: 500,
                body: vec![],
            },
        ],
    );
    assert!(matches!(state.load_state, LoadState::Failed(_)));
    assert!(matches!(state.compute_viewmodel(24, 120).body, Body::Failed(_)));

    // A late success does not replace the failure.
    send(
        &mut state,
        &[Event::CountriesFetched {
            status: 200,
            body: BODY.to_vec(),
        }],
    );
    assert!(state.countries.is_empty());

    send(&mut state, &[Event::ToggleView]);
    assert_eq!(state.visible_len(), 1);

    // The favorite is not in the (empty) loaded list, so toggling removes it.
    send(&mut state, &[Event::ToggleFavorite]);
    assert!(state.favorites.is_empty());
}

#[test]
fn test_search_region_and_sort_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = loaded(&config_in(&dir));

    send(&mut state, &[Event::SearchMode, Event::Char('R')]);
    assert_eq!(state.filtered, vec!["PER".to_string(), "FRA".to_string()]);

    send(&mut state, &[Event::ExitSearch, Event::NextRegion]);
    assert_eq!(state.query.region, "Americas");
    assert_eq!(state.filtered, vec!["PER".to_string()]);

    send(&mut state, &[Event::ClearFilters, Event::CycleSort]);
    assert_eq!(
        state.filtered,
        vec!["BOL".to_string(), "CHL".to_string(), "PER".to_string(), "FRA".to_string()]
    );
}

#[test]
fn test_detail_overlay_resolves_borders() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = loaded(&config_in(&dir));

    send(&mut state, &[Event::OpenDetails]);
    let detail = state.compute_viewmodel(30, 120).detail.unwrap();
    assert_eq!(detail.title, "Peru");
    assert_eq!(detail.borders, vec!["Bolivia".to_string(), "Chile".to_string()]);

    // q closes the overlay before it closes the plugin.
    assert!(send(&mut state, &[Event::CloseFocus]).is_empty());
    assert!(state.detail.is_none());
    assert_eq!(send(&mut state, &[Event::CloseFocus]), vec![Action::CloseFocus]);
}
