//! Index tests (Markdown documents → tag index → serialized output)

use super::fixture_path;
use adr_babel::registry::FormatRegistry;
use adr_parser::adr::{IndexBuilder, SourceDocument, TagIndex};
use std::fs;
use std::path::PathBuf;

fn load_fixture_dir(name: &str) -> Vec<SourceDocument> {
    let registry = FormatRegistry::with_defaults();
    let mut paths: Vec<PathBuf> = fs::read_dir(fixture_path(name))
        .expect("fixture dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let source = fs::read_to_string(&path).expect("fixture readable");
            let events = registry.tokenize(&source, "markdown").expect("tokenize");
            let name = path.file_name().expect("file name").to_owned();
            SourceDocument::new(PathBuf::from(name), events)
        })
        .collect()
}

fn build(docs: &[(&str, &str)]) -> TagIndex {
    let registry = FormatRegistry::with_defaults();
    let documents = docs
        .iter()
        .map(|(path, md)| SourceDocument::new(*path, registry.tokenize(md, "markdown").unwrap()));
    IndexBuilder::default().build(documents).expect("valid documents")
}

#[test]
fn test_fixture_directory_index() {
    let index = IndexBuilder::default()
        .build(load_fixture_dir("adr"))
        .expect("fixtures are valid");

    assert_eq!(index.tags(), ["process", "tooling"]);
    assert_eq!(index.get("process").unwrap().indexes(), [1, 2]);
    assert_eq!(index.get("tooling").unwrap().indexes(), [2, 3]);

    let tooling = index.get("tooling").unwrap();
    assert_eq!(tooling.records[1].heading, "Publish an index of ADRs *by tag*");
    assert_eq!(tooling.records[1].meta.status, "Partially Implemented");
    assert_eq!(tooling.records[0].meta.authors, ["Ana Silva", "Bo Chen"]);
}

#[test]
fn test_index_is_stable_across_runs() {
    let first = IndexBuilder::default().build(load_fixture_dir("adr")).unwrap();
    let second = IndexBuilder::default().build(load_fixture_dir("adr")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let index = build(&[
        (
            "a.md",
            "# Alpha\n\n| k | v |\n|---|---|\n| Index | 2 |\n| Date | 2024-01-02 |\n\
             | Author | Ana |\n| Status | Approved |\n| Tags | x |\n",
        ),
        (
            "b.md",
            "# Beta\n\n| k | v |\n|---|---|\n| Index | 1 |\n| Date | 2024-01-01 |\n\
             | Author | Bo |\n| Status | Rejected |\n| Tags | x |\n",
        ),
    ]);

    let json = FormatRegistry::with_defaults()
        .serialize(&index, "json")
        .unwrap();
    insta::assert_snapshot!(json.trim_end(), @r###"
    [
      {
        "tag": "x",
        "records": [
          {
            "heading": "Beta",
            "meta": {
              "index": 1,
              "authors": [
                "Bo"
              ],
              "date": "2024-01-01",
              "status": "Rejected",
              "tags": [
                "x"
              ],
              "path": "b.md"
            }
          },
          {
            "heading": "Alpha",
            "meta": {
              "index": 2,
              "authors": [
                "Ana"
              ],
              "date": "2024-01-02",
              "status": "Approved",
              "tags": [
                "x"
              ],
              "path": "a.md"
            }
          }
        ]
      }
    ]
    "###);
}

#[test]
fn test_yaml_output_has_same_shape() {
    let index = build(&[(
        "a.md",
        "# Alpha\n\n| k | v |\n|---|---|\n| Index | 2 |\n| Date | 2024-01-02 |\n\
         | Author | Ana |\n| Status | Approved |\n| Tags | x, y |\n",
    )]);

    let yaml = FormatRegistry::with_defaults()
        .serialize(&index, "yaml")
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let groups = value.as_sequence().expect("top level list");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["tag"].as_str(), Some("x"));
    assert_eq!(groups[1]["tag"].as_str(), Some("y"));
    assert_eq!(
        groups[1]["records"][0]["meta"]["index"].as_u64(),
        Some(2)
    );
}
