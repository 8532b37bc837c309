//! End-to-end batch conversion tests: real files in, real descriptors out.

use std::path::{Path, PathBuf};

use base64::Engine;
use pretty_assertions::assert_eq;
use spritebake_cli::batch::{run_batch, BatchOptions};
use spritebake_cli::input::collect_inputs;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

fn quiet() -> BatchOptions {
    BatchOptions {
        jobs: 0,
        pretty: false,
        quiet: true,
    }
}

/// Writes a solid RGBA PNG of the given size.
fn write_png(path: &Path, width: u32, height: u32) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    let mut data = vec![0u8; (width * height * 4) as usize];
    for pixel in data.chunks_mut(4) {
        pixel.copy_from_slice(&[200, 40, 40, 255]);
    }
    writer.write_image_data(&data).unwrap();
}

/// Writes the canonical one-layer, one-tag export next to its sheet image.
fn write_cat_export(dir: &Path, name: &str, image: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(
        &path,
        format!(
            r#"{{
                "frames": {{
                    "cat static 0": {{
                        "frame": {{ "x": 0, "y": 0, "w": 50, "h": 50 }},
                        "duration": 100
                    }}
                }},
                "meta": {{
                    "app": "http://www.aseprite.org/",
                    "version": "1.2.21-dev",
                    "image": "{image}",
                    "size": {{ "w": 100, "h": 100 }},
                    "layers": [{{ "name": "cat" }}],
                    "frameTags": [
                        {{ "name": "static", "from": 0, "to": 0, "direction": "forward" }}
                    ]
                }}
            }}"#
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_single_file_conversion() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_png(&input_dir.path().join("cat.png"), 100, 100);
    let input = write_cat_export(input_dir.path(), "cat.json", "cat.png");

    let summary = run_batch(&[input], out_dir.path(), &quiet()).unwrap();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 0);

    let text = std::fs::read_to_string(out_dir.path().join("cat.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    let frame = &doc["sprites"]["cat"]["static"]["frames"][0];
    assert_eq!(frame["uv"]["x"], 0.0);
    assert_eq!(frame["uv"]["w"], 0.5);
    assert_eq!(frame["uv"]["h"], 0.5);
    assert_eq!(frame["delay"], 100);
    assert_eq!(doc["sprites"]["cat"]["static"]["direction"], "forward");
    assert_eq!(doc["meta"]["origin"], "http://www.aseprite.org/");
    assert_eq!(doc["meta"]["version"], "1.2.21-dev");
}

#[test]
fn test_embedded_sheet_round_trips() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_png(&input_dir.path().join("cat.png"), 100, 100);
    let input = write_cat_export(input_dir.path(), "cat.json", "cat.png");

    run_batch(&[input], out_dir.path(), &quiet()).unwrap();

    let text = std::fs::read_to_string(out_dir.path().join("cat.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    let uri = doc["spritesheet"].as_str().unwrap();
    assert!(uri.starts_with(DATA_URI_PREFIX));

    let payload = base64::engine::general_purpose::STANDARD
        .decode(&uri[DATA_URI_PREFIX.len()..])
        .unwrap();
    let sheet = image::load_from_memory(&payload).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (100, 100));
    assert_eq!(sheet.get_pixel(0, 0).0, [200, 40, 40, 255]);
}

#[test]
fn test_missing_frame_surfaces_as_warning() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_png(&input_dir.path().join("cat.png"), 100, 100);

    // Tag spans two frames but only index 0 exists.
    let input = input_dir.path().join("cat.json");
    std::fs::write(
        &input,
        r#"{
            "frames": {
                "cat blink 0": {
                    "frame": { "x": 0, "y": 0, "w": 50, "h": 50 },
                    "duration": 100
                }
            },
            "meta": {
                "image": "cat.png",
                "size": { "w": 100, "h": 100 },
                "layers": [{ "name": "cat" }],
                "frameTags": [
                    { "name": "blink", "from": 0, "to": 1, "direction": "forward" }
                ]
            }
        }"#,
    )
    .unwrap();

    let summary = run_batch(&[input], out_dir.path(), &quiet()).unwrap();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.results[0].warnings.len(), 1);
    assert_eq!(summary.results[0].warnings[0].code, "W002");

    let text = std::fs::read_to_string(out_dir.path().join("cat.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    // The layer survives as an empty mapping; the clip is gone entirely.
    assert_eq!(doc["sprites"]["cat"], serde_json::json!({}));
}

#[test]
fn test_failures_are_isolated_per_file() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_png(&input_dir.path().join("good.png"), 16, 16);

    let good = input_dir.path().join("good.json");
    std::fs::write(
        &good,
        r#"{
            "frames": {},
            "meta": {
                "image": "good.png",
                "size": { "w": 16, "h": 16 },
                "layers": [],
                "frameTags": []
            }
        }"#,
    )
    .unwrap();
    // References an image that does not exist.
    let bad = write_cat_export(input_dir.path(), "bad.json", "nope.png");

    let summary = run_batch(&[bad, good], out_dir.path(), &quiet()).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);

    let failed = summary.results.iter().find(|r| !r.success).unwrap();
    assert_eq!(failed.error.as_ref().unwrap().code, "CLI_004");
    assert!(out_dir.path().join("good.json").exists());
    assert!(!out_dir.path().join("bad.json").exists());
}

#[test]
fn test_unparsable_input_reports_parse_error() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("broken.json");
    std::fs::write(&input, "{ not json").unwrap();

    let summary = run_batch(&[input], out_dir.path(), &quiet()).unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(
        summary.results[0].error.as_ref().unwrap().code,
        "CLI_002"
    );
}

#[test]
fn test_directory_scan_to_batch() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_png(&input_dir.path().join("a.png"), 8, 8);
    write_png(&input_dir.path().join("b.png"), 8, 8);
    write_cat_export(input_dir.path(), "a.json", "a.png");
    write_cat_export(input_dir.path(), "b.json", "b.png");

    let files = collect_inputs(&[], Some(input_dir.path())).unwrap();
    let summary = run_batch(
        &files,
        out_dir.path(),
        &BatchOptions {
            jobs: 2,
            pretty: true,
            quiet: true,
        },
    )
    .unwrap();

    assert_eq!(summary.converted, 2);
    assert!(out_dir.path().join("a.json").exists());
    assert!(out_dir.path().join("b.json").exists());
}
