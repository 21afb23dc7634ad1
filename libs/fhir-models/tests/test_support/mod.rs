#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use cobalt_models::r4::{FhirR4Parser, FhirResource};
use serde_json::Value;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("r4")
}

/// Every `*.json` fixture, sorted by file name.
pub fn fixture_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(fixtures_root())
        .expect("fixtures directory missing")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

pub fn load_text(name: &str) -> String {
    let path = fixtures_root().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e))
}

pub fn load_value(name: &str) -> Value {
    serde_json::from_str(&load_text(name)).expect("fixture is not valid JSON")
}

pub fn load_fixture<T: FhirResource>(name: &str) -> T {
    FhirR4Parser::new()
        .to_fhir(&load_text(name))
        .unwrap_or_else(|e| panic!("failed to decode {}: {}", name, e))
}

/// Decodes, re-encodes and compares a fixture structurally.
pub fn assert_round_trip<T: FhirResource>(name: &str) -> T {
    let parser = FhirR4Parser::new();
    let original = load_value(name);
    let resource: T = parser
        .to_fhir_value(&original)
        .unwrap_or_else(|e| panic!("failed to decode {}: {}", name, e));
    let encoded = parser.from_fhir_value(&resource);
    if let Err(err) = cobalt_format::ensure_equivalent(&original, &encoded) {
        panic!("{} did not round-trip: {}", name, err);
    }
    resource
}
