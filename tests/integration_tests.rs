use clap::Parser;
use colorcraft::{
    CliConfig, ExtractionPipeline, HarmonyPipeline, BaseColor, LocalStorage, PaletteEngine,
    PaletteStore,
};
use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

fn cli(args: &[&str]) -> CliConfig {
    let mut argv = vec!["colorcraft"];
    argv.extend_from_slice(args);
    CliConfig::parse_from(argv)
}

/// Left half red, right half dark navy.
fn write_two_tone_png(path: &Path) {
    let image = RgbaImage::from_fn(40, 40, |x, _| {
        if x < 20 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([10, 10, 60, 255])
        }
    });
    image.save(path).unwrap();
}

#[tokio::test]
async fn test_end_to_end_extraction_from_png() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("two-tone.png");
    write_two_tone_png(&image_path);

    let output_dir = temp_dir.path().join("out");
    let data_dir = temp_dir.path().join("data");
    let output = output_dir.to_str().unwrap();
    let data = data_dir.to_str().unwrap();

    let config = cli(&[
        "--output-path",
        output,
        "--data-dir",
        data,
        "--save",
        "extract",
        image_path.to_str().unwrap(),
    ]);

    let store = PaletteStore::new(LocalStorage::new(data));
    let pipeline = ExtractionPipeline::new(store, LocalStorage::new(output), config, &image_path);
    let result = PaletteEngine::new(pipeline).run().await.unwrap();

    assert_eq!(result.output_path, output);
    let tags: Vec<&str> = result.palettes.iter().map(|p| p.harmony.as_str()).collect();
    assert_eq!(tags[0], "extracted");
    assert!(tags.contains(&"dominant"));
    assert!(tags.contains(&"vibrant"));
    assert!(tags.contains(&"dark"));

    let extracted = &result.palettes[0];
    let hexes: Vec<&str> = extracted.colors.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(hexes.len(), 2);
    assert!(hexes.contains(&"#ff0000"));
    assert!(hexes.contains(&"#0a0a3c"));

    // Default CSS export, one file per palette
    let css = std::fs::read_to_string(output_dir.join("extracted-palette.css")).unwrap();
    assert!(css.contains("--color-1: #"));
    assert!(output_dir.join("dominant-palette.css").exists());

    // Every palette was saved, and ids never collide
    let saved = PaletteStore::new(LocalStorage::new(data)).list().await;
    assert_eq!(saved.len(), result.palettes.len());
    let mut ids: Vec<&str> = saved.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), saved.len());
}

#[tokio::test]
async fn test_extraction_of_transparent_image_yields_no_palettes() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("clear.png");
    RgbaImage::from_pixel(16, 16, Rgba([200, 10, 10, 0]))
        .save(&image_path)
        .unwrap();

    let output = temp_dir.path().join("out");
    let config = cli(&["--output-path", output.to_str().unwrap(), "extract", "unused.png"]);
    let store = PaletteStore::new(LocalStorage::new(temp_dir.path().join("data")));
    let pipeline = ExtractionPipeline::new(store, LocalStorage::new(&output), config, &image_path);

    let result = PaletteEngine::new(pipeline).run().await.unwrap();
    assert!(result.palettes.is_empty());
}

#[tokio::test]
async fn test_extraction_rejects_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("notes.txt");
    std::fs::write(&text_path, "not an image").unwrap();

    let config = cli(&["extract", "notes.txt"]);
    let store = PaletteStore::new(LocalStorage::new(temp_dir.path()));
    let pipeline =
        ExtractionPipeline::new(store, LocalStorage::new(temp_dir.path()), config, &text_path);

    let err = PaletteEngine::new(pipeline).run().await.unwrap_err();
    assert!(err.to_string().contains("txt"));
}

#[tokio::test]
async fn test_harmony_scss_export_and_saved_collection() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    let data_dir = temp_dir.path().join("data");

    let config = cli(&[
        "--output-path",
        output_dir.to_str().unwrap(),
        "--format",
        "scss",
        "--save",
        "harmony",
        "--base",
        "#ff0000",
        "--scheme",
        "triadic",
    ]);

    let store = PaletteStore::new(LocalStorage::new(&data_dir));
    let pipeline = HarmonyPipeline::new(
        store,
        LocalStorage::new(&output_dir),
        config,
        BaseColor::Hex("#ff0000".to_string()),
        "triadic",
    )
    .with_name("Primary Trio");

    let result = PaletteEngine::new(pipeline).run().await.unwrap();
    assert_eq!(result.palettes.len(), 1);

    let scss = std::fs::read_to_string(output_dir.join("primary-trio.scss")).unwrap();
    assert_eq!(
        scss,
        "$color-1: #ff0000;\n$color-2: #00ff00;\n$color-3: #0000ff;"
    );

    let saved = PaletteStore::new(LocalStorage::new(&data_dir)).list().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Primary Trio");
    assert_eq!(saved[0].harmony, "triadic");
}

#[tokio::test]
async fn test_harmony_from_image_base() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("red.png");
    RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]))
        .save(&image_path)
        .unwrap();

    let output_dir = temp_dir.path().join("out");
    let config = cli(&[
        "--output-path",
        output_dir.to_str().unwrap(),
        "--format",
        "txt",
        "harmony",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    let store = PaletteStore::new(LocalStorage::new(temp_dir.path().join("data")));
    let pipeline = HarmonyPipeline::new(
        store,
        LocalStorage::new(&output_dir),
        config,
        BaseColor::Image(image_path.clone()),
        "complementary",
    );

    let result = PaletteEngine::new(pipeline).run().await.unwrap();
    let hexes: Vec<&str> = result.palettes[0].colors.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(hexes, vec!["#ff0000", "#00ffff"]);

    let text = std::fs::read_to_string(output_dir.join("complementary-palette.txt")).unwrap();
    assert_eq!(text, "#ff0000\n#00ffff");
}

#[tokio::test]
async fn test_palette_name_cannot_leave_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");

    let config = cli(&[
        "--output-path",
        output_dir.to_str().unwrap(),
        "harmony",
        "--base",
        "#3366cc",
    ]);
    let store = PaletteStore::new(LocalStorage::new(temp_dir.path().join("data")));
    let pipeline = HarmonyPipeline::new(
        store,
        LocalStorage::new(&output_dir),
        config,
        BaseColor::Hex("#3366cc".to_string()),
        "complementary",
    )
    .with_name("../escaped");

    PaletteEngine::new(pipeline).run().await.unwrap();

    assert!(!temp_dir.path().join("escaped.css").exists());
    assert!(output_dir.join("-escaped.css").exists());
    let written: Vec<_> = std::fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(written.len(), 1);
}
