use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::SourceConfig;

const SEED_HEADER: &str = "from,to,status_code,note\n";
const COVERAGE_HEADER: &str = "legacy_path,proposed_new_path,status,status_code,note\n";

fn seed(text: &str) -> LoadedSource {
    let config = SourceConfig::new("seed", "seed.csv", SourceKind::Seed);
    LoadedSource::from_text(config, &format!("{SEED_HEADER}{text}"))
}

fn coverage(text: &str) -> LoadedSource {
    let config = SourceConfig::new("coverage", "coverage.csv", SourceKind::Coverage);
    LoadedSource::from_text(config, &format!("{COVERAGE_HEADER}{text}"))
}

fn merge(sources: &[LoadedSource]) -> MergeOutcome {
    let rewrites = BTreeMap::new();
    merge_sources(sources, PathRewrites::new(&rewrites))
}

#[test]
fn test_sample_scenario() {
    let outcome = merge(&[
        seed("/foo,/bar,301,\n"),
        coverage("/foo,/baz,not-covered,,\n"),
    ]);

    assert_eq!(outcome.table.len(), 1);
    let record = outcome.table.get("/foo").unwrap();
    assert_eq!(record.destination, "/bar");
    assert_eq!(record.status, StatusCode::PERMANENT);
    assert_eq!(record.provenance.as_deref(), Some("seed"));

    assert_eq!(outcome.stats[0].inserted, 1);
    assert_eq!(outcome.stats[1].shadowed, 1);
}

#[test]
fn test_seed_destination_not_normalized() {
    let outcome = merge(&[seed("/a,/no-slash,301,\n")]);
    assert_eq!(outcome.table.get("/a").unwrap().destination, "/no-slash");
}

#[test]
fn test_covered_rows_skipped() {
    let outcome = merge(&[
        seed(""),
        coverage("/kept,/new,not-covered,,\n/served,/served, Covered ,,\n"),
    ]);

    assert!(outcome.table.contains("/kept"));
    assert!(!outcome.table.contains("/served"));
    assert_eq!(outcome.stats[1].covered, 1);
}

#[test]
fn test_coverage_normalization() {
    let outcome = merge(&[coverage(concat!(
        "/a,/about,not-covered,,\n",
        "/b,/feed.xml,not-covered,,\n",
        "/c,https://example.com/x,not-covered,,\n",
        "/d,/search?q=1,not-covered,,\n",
        "/e,/,not-covered,,\n",
    ))]);

    let dest = |source: &str| outcome.table.get(source).unwrap().destination.clone();
    assert_eq!(dest("/a"), "/about/");
    assert_eq!(dest("/b"), "/feed.xml");
    assert_eq!(dest("/c"), "https://example.com/x");
    assert_eq!(dest("/d"), "/search?q=1");
    assert_eq!(dest("/e"), "/");
}

#[test]
fn test_coverage_rewrites() {
    let mut rewrites = BTreeMap::new();
    rewrites.insert("/services.html".to_string(), "/services/consulting".to_string());

    let sources = [coverage("/old-services,/services.html,not-covered,,\n")];
    let outcome = merge_sources(&sources, PathRewrites::new(&rewrites));

    assert_eq!(
        outcome.table.get("/old-services").unwrap().destination,
        "/services/consulting/"
    );
}

#[test]
fn test_coverage_note_defaults_to_source_name() {
    let outcome = merge(&[coverage("/a,/b/,not-covered,,\n/c,/d/,not-covered,,audit\n")]);
    assert_eq!(outcome.table.get("/a").unwrap().note, "coverage");
    assert_eq!(outcome.table.get("/c").unwrap().note, "audit");
}

#[test]
fn test_empty_source_rows_dropped() {
    let outcome = merge(&[seed(",/orphan/,301,\n/a,/b/,301,\n")]);
    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.stats[0].empty, 1);
    assert_eq!(outcome.stats[0].rows, 2);
}

#[test]
fn test_status_handling() {
    let outcome = merge(&[seed("/a,/x/,,\n/b,/y/,302,\n/c,/z/,200,\n/d,/w/,308.0,\n")]);

    let status = |source: &str| outcome.table.get(source).unwrap().status.as_u16();
    assert_eq!(status("/a"), 301);
    assert_eq!(status("/b"), 302);
    assert_eq!(status("/c"), 301);
    assert_eq!(status("/d"), 308);
    assert_eq!(outcome.stats[0].invalid_status, 1);
}

#[test]
fn test_source_default_status() {
    let mut config = SourceConfig::new("temp", "temp.csv", SourceKind::Seed);
    config.status = Some(StatusCode::TEMPORARY);
    let sources = [LoadedSource::from_text(config, "from,to\n/a,/b/\n")];

    let outcome = merge(&sources);
    assert_eq!(outcome.table.get("/a").unwrap().status, StatusCode::TEMPORARY);
}

#[test]
fn test_ranked_sources() {
    let second = LoadedSource::from_text(
        SourceConfig::new("manual", "manual.csv", SourceKind::Seed),
        "from,to\n/a,/manual/\n/b,/manual/\n",
    );
    let outcome = merge(&[
        seed("/a,/seed/,301,\n"),
        second,
        coverage("/a,/cov/,not-covered,,\n/b,/cov/,not-covered,,\n/c,/cov/,not-covered,,\n"),
    ]);

    let dest = |source: &str| outcome.table.get(source).unwrap().destination.clone();
    assert_eq!(dest("/a"), "/seed/");
    assert_eq!(dest("/b"), "/manual/");
    assert_eq!(dest("/c"), "/cov/");

    let shadowed: Vec<_> = outcome.stats.iter().map(|s| s.shadowed).collect();
    assert_eq!(shadowed, [0, 1, 2]);

    assert_eq!(outcome.stats[1].shadowed_by, BTreeMap::from([("seed".to_string(), 1)]));
    assert_eq!(
        outcome.stats[2].shadowed_by,
        BTreeMap::from([("manual".to_string(), 1), ("seed".to_string(), 1)])
    );
    assert_eq!(outcome.table.get("/b").unwrap().provenance.as_deref(), Some("manual"));
}

#[test]
fn test_unique_sources_any_order() {
    let rows = "/a,/1/,301,\n/b,/2/,301,\n/a,/3/,301,\n/c,/4/,301,\n/b,/5/,301,\n";
    let outcome = merge(&[seed(rows)]);

    let sources: Vec<_> = outcome.table.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, ["/a", "/b", "/c"]);
    assert_eq!(outcome.table.get("/a").unwrap().destination, "/1/");
}

#[test]
fn test_missing_key_columns_reported() {
    let config = SourceConfig::new("legacy", "legacy.csv", SourceKind::Coverage);
    let sources = [LoadedSource::from_text(config, "old,new,status\n/a,/b,not-covered\n")];

    let outcome = merge(&sources);
    assert_eq!(outcome.stats[0].missing_columns, ["legacy_path", "proposed_new_path"]);
    assert_eq!(outcome.stats[0].empty, 1);
    assert!(outcome.table.is_empty());
}

#[test]
fn test_missing_optional_source_counted() {
    let config = SourceConfig {
        required: false,
        ..SourceConfig::new("extra", "extra.csv", SourceKind::Seed)
    };
    let outcome = merge(&[seed("/a,/b/,301,\n"), LoadedSource::new(config, None)]);

    assert_eq!(outcome.table.len(), 1);
    assert!(outcome.stats[1].missing);
}

fn write_inputs(dir: &TempDir) -> MergeConfig {
    let raw = dir.path().join("redirects");
    fs::create_dir_all(&raw).unwrap();
    fs::write(
        raw.join("seed.csv"),
        format!("{SEED_HEADER}/foo,/bar,301,\"renamed, again\"\n/b,/c/,302,\n"),
    )
    .unwrap();
    fs::write(
        raw.join("coverage.csv"),
        format!("{COVERAGE_HEADER}/foo,/baz,not-covered,,\n/old,/new,not-covered,,\n/live,/live,covered,,\n"),
    )
    .unwrap();

    let mut config = MergeConfig::default();
    config.normalize(dir.path());
    config
}

#[test]
fn test_run_merge_writes_artifact() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(&dir);

    let outcome = run_merge(&config).unwrap();
    assert_eq!(outcome.table.len(), 3);

    let written = fs::read_to_string(&config.output).unwrap();
    assert_eq!(
        written,
        concat!(
            "from,to,status_code,note\n",
            "/b,/c/,302,\"\"\n",
            "/foo,/bar,301,\"renamed, again\"\n",
            "/old,/new/,301,\"coverage\"\n",
        )
    );
}

#[test]
fn test_run_merge_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(&dir);

    run_merge(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    run_merge(&config).unwrap();
    let second = fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_run_merge_missing_required_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = MergeConfig::default();
    config.normalize(dir.path());

    let err = run_merge(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MergeError>(),
        Some(MergeError::MissingSource { .. })
    ));
    assert!(!config.output.exists());
}
