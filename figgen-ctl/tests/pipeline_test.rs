//! End-to-end pipeline run against the bundled templates.
//!
//! The document comes from a snapshot file, so no network is involved.

use std::fs;
use std::path::{Path, PathBuf};

use figgen_client::{KeywordSet, NodeKind};
use figgen_ctl::{GenerateConfig, Pipeline, SourceSettings};
use serde_json::json;

fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../templates")
}

fn button_document(name: &str, radius: f64) -> serde_json::Value {
    json!({
        "name": "Design System",
        "lastModified": "2024-01-01T00:00:00Z",
        "document": {
            "id": "0:0", "name": "Document", "type": "DOCUMENT",
            "children": [{
                "id": "0:1", "name": "Buttons", "type": "CANVAS",
                "children": [{
                    "id": "1:1", "name": name, "type": "COMPONENT",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 100, "height": 50 },
                    "children": [
                        { "id": "1:2", "name": "background", "type": "RECTANGLE",
                          "strokeWeight": 2,
                          "fills": [{ "type": "SOLID", "color": { "r": 0.2, "g": 0.4, "b": 0.8, "a": 1 } }],
                          "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0, "a": 1 } }] },
                        { "id": "1:3", "name": "buttonShape", "type": "VECTOR",
                          "rectangleCornerRadii": [radius, radius, radius, radius] },
                        { "id": "1:4", "name": "label", "type": "TEXT", "characters": "Submit",
                          "style": { "fontPostScriptName": "Roboto-Bold", "fontSize": 14 },
                          "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }],
                          "absoluteBoundingBox": { "x": 10, "y": 15, "width": 70, "height": 20 } }
                    ]
                }]
            }]
        }
    })
}

fn snapshot_config(work: &Path, document: serde_json::Value) -> GenerateConfig {
    let snapshot = work.join("input.json");
    fs::write(&snapshot, document.to_string()).unwrap();
    GenerateConfig {
        source: SourceSettings::Snapshot(snapshot),
        template_dir: bundled_templates(),
        output_dir: work.join("generated"),
        keywords: KeywordSet::new(["textButton"]).unwrap(),
        node_kind: NodeKind::Component,
        write_snapshot: true,
    }
}

fn component_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}

#[tokio::test]
async fn test_text_button_end_to_end() {
    let work = tempfile::tempdir().unwrap();
    let config = snapshot_config(work.path(), button_document("textButton_primary", 8.0));

    let report = Pipeline::new(config).unwrap().run().await.unwrap();

    let out = work.path().join("generated");
    let components = component_files(&out.join("components"));
    assert_eq!(components, vec![out.join("components/TextButton.swift")]);
    assert_eq!(report.components, components);

    let rendered = fs::read_to_string(&components[0]).unwrap();
    assert!(rendered.contains("struct TextButton: View"));
    assert!(rendered.contains(r#"title: "Submit""#));
    assert!(rendered.contains(r#"font: .custom("Roboto-Bold", size: 14"#));
    assert!(rendered.contains("borderWidth: 2"));
    assert!(rendered.contains("cornerRadius: 8"));
    assert!(rendered.contains("EdgeInsets(top: 15"));
    assert!(rendered.contains("leading: 10"));
    assert!(rendered.contains("bottom: 15"));
    assert!(rendered.contains("trailing: 20"));

    assert!(out.join("models/ButtonConfig.swift").is_file());
    assert!(out.join("figma.json").is_file());
}

#[tokio::test]
async fn test_sentinel_radius_renders_zero() {
    let work = tempfile::tempdir().unwrap();
    let config = snapshot_config(work.path(), button_document("textButton_primary", 150000.0));

    Pipeline::new(config).unwrap().run().await.unwrap();

    let rendered =
        fs::read_to_string(work.path().join("generated/components/TextButton.swift")).unwrap();
    assert!(rendered.contains("cornerRadius: 0,"));
}

#[tokio::test]
async fn test_snapshot_round_trips_through_second_run() {
    let work = tempfile::tempdir().unwrap();
    let config = snapshot_config(work.path(), button_document("textButton_primary", 8.0));
    Pipeline::new(config.clone()).unwrap().run().await.unwrap();

    // Feed the persisted document back in as the source.
    let persisted = work.path().join("generated/figma.json");
    let second = GenerateConfig {
        source: SourceSettings::Snapshot(persisted.clone()),
        ..config
    };
    let report = Pipeline::new(second).unwrap().run().await.unwrap();
    assert_eq!(report.components.len(), 1);
    assert!(persisted.is_file());
}

#[tokio::test]
async fn test_unmatched_document_renders_nothing() {
    let work = tempfile::tempdir().unwrap();
    let config = snapshot_config(work.path(), button_document("iconButton_primary", 8.0));

    let report = Pipeline::new(config).unwrap().run().await.unwrap();
    assert_eq!(report.matched_nodes, 0);
    assert!(report.components.is_empty());
    assert!(component_files(&work.path().join("generated/components")).is_empty());
}

#[tokio::test]
async fn test_title_is_escaped_for_swift() {
    let work = tempfile::tempdir().unwrap();
    let mut document = button_document("textButton_primary", 8.0);
    document["document"]["children"][0]["children"][0]["children"][2]["characters"] =
        json!("Say \"hi\"\nnow \\o/");
    let config = snapshot_config(work.path(), document);

    Pipeline::new(config).unwrap().run().await.unwrap();

    let rendered =
        fs::read_to_string(work.path().join("generated/components/TextButton.swift")).unwrap();
    assert!(rendered.contains(r#"title: "Say \"hi\"\nnow \\o/","#));
}
