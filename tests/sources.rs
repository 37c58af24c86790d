use std::path::Path;
use trackfit::detect::{SourceRegistry, TrackSource};
use trackfit::error::TrackfitError;
use trackfit::types::Dimension;

#[test]
fn registry_resolves_builtin_sources() {
    let registry = SourceRegistry::new();
    assert_eq!(registry.aliases(), vec!["precomputed", "synthetic"]);
    assert!(registry.get("precomputed").is_ok());
    assert!(registry.get("synthetic").is_ok());
}

#[test]
fn unknown_source_names_fail_at_lookup() {
    let registry = SourceRegistry::new();
    let err = registry.get("camera0").unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
    assert!(err.to_string().contains("synthetic"));
}

#[test]
fn precomputed_source_loads_fixture_detections() {
    let source = SourceRegistry::new().get("precomputed").unwrap();
    let tracks = source
        .extract(Some(Path::new("tests/data/detections.json")))
        .unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].len(), 6);

    let rows = tracks[0].series(Dimension::Row).unwrap();
    assert_eq!(rows.time(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(rows.values(), &[10.0, 12.0, 14.0, 16.0, 18.0, 20.0]);

    let cols = tracks[1].series(Dimension::Col).unwrap();
    assert_eq!(cols.values(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
}

#[test]
fn ragged_frames_truncate_to_the_common_instances() {
    let source = SourceRegistry::new().get("precomputed").unwrap();
    let tracks = source
        .extract(Some(Path::new("tests/data/detections_ragged.json")))
        .unwrap();

    // Frame 1 only saw two detections, so the third instance is dropped.
    assert_eq!(tracks.len(), 2);
    let rows = tracks[1].series(Dimension::Row).unwrap();
    assert_eq!(rows.values(), &[50.0, 55.0, 60.0]);
}

#[test]
fn empty_detection_files_are_data_loading_errors() {
    let source = SourceRegistry::new().get("precomputed").unwrap();
    let err = source
        .extract(Some(Path::new("tests/data/detections_empty.json")))
        .unwrap_err();
    assert!(matches!(err, TrackfitError::DataLoading(_)));
}

#[test]
fn precomputed_requires_an_input_path() {
    let source = SourceRegistry::new().get("precomputed").unwrap();
    let err = source.extract(None).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}

#[test]
fn synthetic_source_generates_a_ballistic_track() {
    let source = SourceRegistry::new().get("synthetic").unwrap();
    let tracks = source.extract(None).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].len(), 60);

    // Constant second difference on rows (acceleration), constant first
    // difference on cols (drift).
    let rows = tracks[0].series(Dimension::Row).unwrap();
    let r = rows.values();
    for i in 2..r.len() {
        let second_diff = (r[i] - r[i - 1]) - (r[i - 1] - r[i - 2]);
        assert!((second_diff - 0.5).abs() < 1e-9);
    }

    let cols = tracks[0].series(Dimension::Col).unwrap();
    let c = cols.values();
    for i in 1..c.len() {
        assert!((c[i] - c[i - 1] - 3.0).abs() < 1e-9);
    }
}
