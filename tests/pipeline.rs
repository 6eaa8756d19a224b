use std::fs;
use std::path::{Path, PathBuf};

use lankamap::{
    Config, Format, Pipeline, SkipReason, read_districts_from_json_file, write_districts_to_file,
    write_preview_to_svg_file,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn builtin_pipeline() -> Pipeline {
    Pipeline::new(Config::builtin().unwrap()).unwrap()
}

#[test]
fn converts_western_province() {
    let config = Config::builtin().unwrap();
    let metro_tags = config.tables.tiers[0].tags.clone();
    let conversion = Pipeline::new(config).unwrap().run_file(&fixture("western.geojson")).unwrap();

    assert!(conversion.is_clean());
    let ids: Vec<_> = conversion.districts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["colombo", "gampaha", "kalutara"]);

    let colombo = conversion.districts.get_by_id("colombo").unwrap();
    assert_eq!(colombo.name, "Colombo");
    assert_eq!(colombo.province, "Western");
    assert_eq!(colombo.population, 2_324_349);
    assert!(colombo.is_featured);
    assert_eq!(colombo.tags, metro_tags);
    assert!(colombo.path_data.starts_with('M') && colombo.path_data.ends_with('Z'));
    assert_eq!(colombo.path_data.matches('M').count(), 1);

    let kalutara = conversion.districts.get_by_id("kalutara").unwrap();
    assert_eq!(kalutara.path_data.matches('M').count(), 2);
    assert_eq!(kalutara.path_data.matches('Z').count(), 2);

    assert_eq!(conversion.districts.by_province("Western").count(), 3);
}

#[test]
fn centers_stay_on_canvas() {
    let pipeline = builtin_pipeline();
    let canvas = pipeline.config().canvas;
    let conversion = pipeline.run_file(&fixture("western.geojson")).unwrap();
    for district in &conversion.districts {
        let (x, y) = (district.center.x as f64, district.center.y as f64);
        assert!(x >= canvas.padding && x <= canvas.width - canvas.padding, "{}: x={x}", district.id);
        assert!(y >= canvas.padding && y <= canvas.height - canvas.padding, "{}: y={y}", district.id);
    }
}

#[test]
fn bad_features_are_skipped() {
    let conversion = builtin_pipeline().run_file(&fixture("mixed.geojson")).unwrap();

    let ids: Vec<_> = conversion.districts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["galle"]);

    let reasons: Vec<_> = conversion.skipped.iter().map(|s| (s.index, s.reason.clone())).collect();
    assert_eq!(reasons, vec![
        (1, SkipReason::Unmapped("Colombo".into())),
        (2, SkipReason::MissingName),
        (3, SkipReason::EmptyPath { id: "matara".into(), geometry: "Point".into() }),
        (4, SkipReason::EmptyPath { id: "jaffna".into(), geometry: "Polygon".into() }),
        (5, SkipReason::EmptyPath { id: "matale".into(), geometry: "MultiPolygon".into() }),
        (6, SkipReason::EmptyPath { id: "badulla".into(), geometry: "invalid Polygon".into() }),
        (7, SkipReason::DuplicateId("galle".into())),
    ]);
    assert!(!conversion.is_clean());
}

#[test]
fn json_artifact_round_trips_and_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let (first, second) = (dir.path().join("a.json"), dir.path().join("b.json"));

    let conversion = builtin_pipeline().run_file(&fixture("western.geojson")).unwrap();
    write_districts_to_file(&first, &conversion.districts, Format::Json).unwrap();

    let again = builtin_pipeline().run_file(&fixture("western.geojson")).unwrap();
    write_districts_to_file(&second, &again.districts, Format::Json).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(read_districts_from_json_file(&first).unwrap(), conversion.districts);
}

#[test]
fn typescript_artifact_lists_every_district() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("districts.ts");

    let conversion = builtin_pipeline().run_file(&fixture("western.geojson")).unwrap();
    write_districts_to_file(&path, &conversion.districts, Format::from_path(&path)).unwrap();

    let module = fs::read_to_string(&path).unwrap();
    for id in ["colombo", "gampaha", "kalutara"] {
        assert!(module.contains(&format!(r#""id": "{id}""#)), "missing {id}");
    }
    assert!(module.contains("export function getFeaturedDistricts()"));
}

#[test]
fn preview_renders_every_district() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.svg");

    let pipeline = builtin_pipeline();
    let conversion = pipeline.run_file(&fixture("western.geojson")).unwrap();
    write_preview_to_svg_file(&path, &conversion.districts, &pipeline.config().canvas, &conversion.bounds).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(svg.contains("Kalutara"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn disabling_simplification_keeps_every_vertex() {
    let mut config = Config::builtin().unwrap();
    config.canvas.simplify = false;
    let conversion = Pipeline::new(config).unwrap().run_file(&fixture("western.geojson")).unwrap();
    let gampaha = conversion.districts.get_by_id("gampaha").unwrap();
    // Five ring positions: one M and four L commands.
    assert_eq!(gampaha.path_data.matches('L').count(), 4);
}

#[test]
fn missing_input_is_an_error() {
    let err = builtin_pipeline().run_file(&fixture("does-not-exist.geojson")).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.geojson"));
}
