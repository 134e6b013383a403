use std::fs;

use wargame_viewer::core::{
    MapLibrary, MapParseError, MapSession, Scene, ScreenSize, Terrain, ViewerError,
};

const SCREEN: ScreenSize = ScreenSize::new(800.0, 600.0);

#[test]
fn empty_directory_is_seeded_with_default_maps() {
    let dir = tempfile::tempdir().unwrap();
    let maps_dir = dir.path().join("maps");
    let library = MapLibrary::new(&maps_dir);

    let stems = library.list().unwrap();
    assert_eq!(
        stems,
        vec!["desert_oasis", "grande_bataille", "ile_centrale", "plaines_forets"]
    );
    assert!(maps_dir.join("plaines_forets.json").is_file());

    let big = library.load("grande_bataille").unwrap();
    assert_eq!((big.width(), big.height()), (40, 30));
    assert_eq!(big.get(20, 10), Some(&Terrain::Water));
    assert_eq!(big.get(0, 0), Some(&Terrain::Mountain));
    assert_eq!(big.get(7, 10), Some(&Terrain::Forest));
    assert_eq!(big.get(1, 28), Some(&Terrain::Desert));
    assert_eq!(big.get(1, 10), Some(&Terrain::Plains));
}

#[test]
fn default_files_are_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let library = MapLibrary::new(dir.path());
    library.list().unwrap();

    let text = fs::read_to_string(dir.path().join("ile_centrale.json")).unwrap();
    assert!(text.starts_with("{\n  \""));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["width"], 20);
    assert_eq!(value["height"], 15);
    assert_eq!(value["terrain"].as_array().unwrap().len(), 15);
}

#[test]
fn existing_maps_are_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tiny.json"),
        r#"{"name":"Tiny","width":1,"height":1,"terrain":[["water"]]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a map").unwrap();

    let library = MapLibrary::new(dir.path());
    assert_eq!(library.list().unwrap(), vec!["tiny"]);
}

#[test]
fn missing_map_leaves_session_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = MapSession::open(MapLibrary::new(dir.path()), 50.0).unwrap();
    session.load("plaines_forets", SCREEN).unwrap();
    session.transform_mut().pan_by(13.0, -4.0);
    let before_view = session.viewport();
    let before_selected = session.selected();

    let err = session.load("nope", SCREEN).unwrap_err();
    assert!(matches!(err, ViewerError::MapNotFound { ref stem, .. } if stem == "nope"));
    assert_eq!(session.viewport(), before_view);
    assert_eq!(session.selected(), before_selected);
    assert_eq!(session.grid().map(|g| g.name()), Some("Plaines et Forêts"));
}

#[test]
fn malformed_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("short_row.json"),
        r#"{"name":"Bad","width":2,"height":2,"terrain":[["grass","grass"],["water"]]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("few_rows.json"),
        r#"{"name":"Bad","width":1,"height":2,"terrain":[["grass"]]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let library = MapLibrary::new(dir.path());
    match library.load("short_row") {
        Err(ViewerError::MapParse {
            source: MapParseError::RowLength { row, expected, found },
            ..
        }) => assert_eq!((row, expected, found), (1, 2, 1)),
        other => panic!("unexpected: {other:?}"),
    }
    match library.load("few_rows") {
        Err(ViewerError::MapParse {
            source: MapParseError::RowCount { expected, found },
            ..
        }) => assert_eq!((expected, found), (2, 1)),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(
        library.load("broken"),
        Err(ViewerError::MapParse {
            source: MapParseError::Json(_),
            ..
        })
    ));
}

#[test]
fn parse_failure_keeps_previous_map() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a_good.json"),
        r#"{"name":"Good","width":1,"height":1,"terrain":[["grass"]]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("b_bad.json"), "[]").unwrap();

    let mut session = MapSession::open(MapLibrary::new(dir.path()), 50.0).unwrap();
    session.select(0, SCREEN).unwrap();
    assert!(session.select_next(SCREEN).is_err());
    assert_eq!(session.selected(), Some(0));
    assert_eq!(session.grid().map(|g| g.name()), Some("Good"));
}

#[test]
fn unknown_labels_load_as_unknown_terrain() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("odd.json"),
        r#"{"name":"Odd","width":2,"height":1,"terrain":[["lava","Grass"]]}"#,
    )
    .unwrap();

    let grid = MapLibrary::new(dir.path()).load("odd").unwrap();
    assert_eq!(grid.get(0, 0), Some(&Terrain::Unknown("lava".to_string())));
    assert_eq!(grid.get(1, 0).map(|t| t.color().to_string()), Some("#FFFFFF".to_string()));
}

#[test]
fn loading_centers_the_map() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = MapSession::open(MapLibrary::new(dir.path()), 50.0).unwrap();
    session.load("plaines_forets", SCREEN).unwrap();
    // 20x15 tiles of 50px = 1000x750 on an 800x600 screen.
    assert_eq!(session.viewport().pan_x, -100.0);
    assert_eq!(session.viewport().pan_y, -75.0);
    assert_eq!(session.viewport().zoom, 1.0);
}

#[test]
fn listing_a_file_path_fails_and_keeps_session_empty() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("maps");
    fs::write(&not_a_dir, "plain file").unwrap();

    assert!(MapSession::open(MapLibrary::new(&not_a_dir), 50.0).is_err());

    let mut session = MapSession::new(MapLibrary::new(&not_a_dir), 50.0);
    assert!(matches!(
        session.refresh(),
        Err(ViewerError::MapParse {
            source: MapParseError::Io(_),
            ..
        })
    ));
    assert!(session.available().is_empty());
    assert!(session.select_next(SCREEN).is_ok());
    assert_eq!(session.grid(), None);
}

#[test]
fn cursor_advances_over_failed_loads() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a_bad.json"), "{ nope").unwrap();
    fs::write(dir.path().join("b_bad.json"), "[]").unwrap();
    fs::write(
        dir.path().join("c_good.json"),
        r#"{"name":"Good","width":1,"height":1,"terrain":[["grass"]]}"#,
    )
    .unwrap();

    let mut session = MapSession::open(MapLibrary::new(dir.path()), 50.0).unwrap();
    assert!(session.select_next(SCREEN).is_err());
    assert_eq!((session.cursor(), session.selected()), (Some(0), None));
    assert!(session.select_next(SCREEN).is_err());
    assert_eq!((session.cursor(), session.selected()), (Some(1), None));
    session.select_next(SCREEN).unwrap();
    assert_eq!(session.selected_stem(), Some("c_good"));

    // Backwards from the loaded map hits `b_bad`; the loaded map stays.
    assert!(session.select_prev(SCREEN).is_err());
    assert_eq!((session.cursor(), session.selected()), (Some(1), Some(2)));
    assert_eq!(session.grid().map(|g| g.name()), Some("Good"));
}
