//! End-to-end tests for the batch exporter.

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use icongen::{
    export_batch, render_icon, ExportOutcome, IconError, IconPalette, IconRole, SizeSpec,
    ICON_SIZES,
};

#[test]
fn full_batch_writes_the_documented_fifteen_files() {
    let dir = tempdir().unwrap();
    let palette = IconPalette::signal_calc();

    let report = export_batch(&ICON_SIZES, &palette, dir.path()).unwrap();

    assert_eq!(report.written_count(), 15);
    assert_eq!(report.failed_count(), 0);

    let mut found: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    found.sort();

    let mut expected: Vec<String> = ICON_SIZES.iter().map(|s| s.filename()).collect();
    expected.sort();

    assert_eq!(found, expected);
}

#[test]
fn written_files_decode_to_square_rgba_images_of_the_declared_edge() {
    let dir = tempdir().unwrap();
    let palette = IconPalette::signal_calc();

    export_batch(&ICON_SIZES, &palette, dir.path()).unwrap();

    for spec in &ICON_SIZES {
        let img = image::open(dir.path().join(spec.filename()))
            .unwrap()
            .to_rgba8();
        assert_eq!(
            (img.width(), img.height()),
            (spec.edge, spec.edge),
            "{}",
            spec.name
        );
        // The rounded corner keeps the alpha channel meaningful.
        assert_eq!(img.get_pixel(0, 0).0[3], 0, "{}", spec.name);
    }
}

#[test]
fn one_unencodable_spec_does_not_stop_the_rest() {
    let dir = tempdir().unwrap();
    let palette = IconPalette::signal_calc();
    let specs = [
        SizeSpec::new("before_32x32", 32, IconRole::Device),
        SizeSpec::new("broken_0x0", 0, IconRole::Device),
        SizeSpec::new("after_48x48", 48, IconRole::Device),
    ];

    let report = export_batch(&specs, &palette, dir.path()).unwrap();

    assert_eq!(report.written_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert!(dir.path().join("before_32x32.png").exists());
    assert!(dir.path().join("after_48x48.png").exists());
    assert!(!dir.path().join("broken_0x0.png").exists());

    match &report.outcomes[1] {
        ExportOutcome::Failed { name, error, .. } => {
            assert_eq!(*name, "broken_0x0");
            assert!(matches!(error, IconError::Encode { .. }));
        }
        other => panic!("expected the middle spec to fail, got {:?}", other),
    }
}

#[test]
fn rerun_overwrites_existing_files() {
    let dir = tempdir().unwrap();
    let palette = IconPalette::signal_calc();
    let specs = [SizeSpec::new("again_24x24", 24, IconRole::Spotlight)];
    let path = dir.path().join("again_24x24.png");

    std::fs::write(&path, b"stale contents").unwrap();
    export_batch(&specs, &palette, dir.path()).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (24, 24));
}

#[test]
fn directory_creation_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let squatter = dir.path().join("AppIcons");
    std::fs::write(&squatter, b"a file, not a directory").unwrap();

    let result = export_batch(&ICON_SIZES, &IconPalette::signal_calc(), &squatter);

    match result {
        Err(IconError::Io { path, .. }) => assert_eq!(path, squatter),
        other => panic!("expected a fatal IO error, got {:?}", other),
    }
}

#[test]
fn rendering_the_same_edge_twice_is_pixel_identical() {
    let palette = IconPalette::signal_calc();
    for edge in [20, 76, 167] {
        let a = render_icon(edge, &palette);
        let b = render_icon(edge, &palette);
        assert_eq!(a.as_raw(), b.as_raw(), "edge {}", edge);
    }
}
