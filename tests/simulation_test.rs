//! End-to-end simulation tests.
//!
//! These drive `simulate` through real trace files, covering the config,
//! trace reader, policies and simulator together.

use std::fs;
use std::io::Write;

use pagesim::{
    simulate, write_report, Error, FifoReplacer, LruReplacer, PageId, SimConfig, Simulator,
};
use tempfile::{tempdir, NamedTempFile};

fn trace_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(policy: &str, contents: &str, page_size: i64, memory_size: i64) -> pagesim::SimulationStats {
    let file = trace_file(contents);
    let config = SimConfig::new(policy, file.path(), page_size, memory_size)
        .unwrap()
        .with_seed(1);
    simulate(&config).unwrap()
}

// ============================================================================
// Reference scenarios
// ============================================================================

/// Capacity 4 (256 B / 64 B), FIFO: page 5 replaces page 1 in frame 0.
#[test]
fn test_fifo_repeats_then_evicts() {
    let stats = run("fifo", "1 2 3 4 1 2 3 4 5\n", 64, 256);

    assert_eq!(stats.hits, 4);
    assert_eq!(stats.misses, 5);
    assert_eq!(stats.faults, 5);
    assert_eq!(stats.evictions, 1);

    let mut sim = Simulator::new(4, FifoReplacer::new(4));
    sim.run([1, 2, 3, 4, 1, 2, 3, 4, 5].map(PageId::new));
    assert_eq!(
        sim.table().resident_pages(),
        [5, 2, 3, 4].map(PageId::new).to_vec()
    );
}

/// Capacity 2 (128 B / 64 B), LRU: page 3 replaces page 2, not page 1.
#[test]
fn test_lru_keeps_recent_page() {
    let stats = run("lru", "1 2 1 3", 64, 128);
    assert_eq!((stats.hits, stats.misses, stats.faults), (1, 3, 3));

    let mut sim = Simulator::new(2, LruReplacer::new());
    sim.run([1, 2, 1, 3].map(PageId::new));
    assert_eq!(sim.table().resident_pages(), [1, 3].map(PageId::new).to_vec());
}

/// Capacity 3 is not reachable with the size limits, so exercise random
/// with the smallest table and a single repeated page.
#[test]
fn test_random_repeated_page() {
    let stats = run("random", "1\n1\n1\n", 64, 128);
    assert_eq!((stats.hits, stats.misses, stats.faults), (2, 1, 1));
}

#[test]
fn test_uneven_memory_size_truncates() {
    let config = SimConfig::new("fifo", "unused", 4, 130).unwrap();
    assert_eq!(config.frame_count(), 32);

    // 33 distinct pages into 32 frames: exactly one eviction.
    let trace: String = (0..33).map(|i| format!("{} ", i)).collect();
    let stats = run("fifo", &trace, 4, 130);
    assert_eq!(stats.misses, 33);
    assert_eq!(stats.evictions, 1);
}

// ============================================================================
// Trace handling
// ============================================================================

#[test]
fn test_trace_stops_at_garbage() {
    let stats = run("lru", "1 2 2 end 3 4 5", 64, 128);
    assert_eq!(stats.total_accesses(), 3);
    assert_eq!((stats.hits, stats.misses), (1, 2));
}

#[test]
fn test_empty_trace_file() {
    let stats = run("fifo", "", 64, 128);
    assert_eq!(stats.total_accesses(), 0);
}

#[test]
fn test_missing_trace_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let config = SimConfig::new("lru", &path, 4, 128).unwrap();

    match simulate(&config) {
        Err(Error::TraceOpen { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected TraceOpen, got {:?}", other),
    }
}

#[test]
fn test_trace_file_reused_across_policies() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");
    fs::write(&path, "1 2 3 1 4 1 5 1").unwrap();

    for policy in ["fifo", "lru", "random"] {
        let config = SimConfig::new(policy, &path, 64, 128).unwrap().with_seed(5);
        let stats = simulate(&config).unwrap();
        assert_eq!(stats.total_accesses(), 8, "policy {}", policy);
        assert_eq!(stats.misses, stats.faults, "policy {}", policy);
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_unknown_policy_rejected_before_reading() {
    // A trace of one page repeated would never miss after the first access;
    // the bad name must still be rejected up front.
    let file = trace_file("1 1 1");
    let err = SimConfig::new("optimal", file.path(), 4, 128).unwrap_err();
    assert!(matches!(err, Error::UnknownPolicy(name) if name == "optimal"));
}

#[test]
fn test_size_errors() {
    assert!(matches!(
        SimConfig::new("lru", "t", 128, 1024),
        Err(Error::PageSizeOutOfRange(128))
    ));
    assert!(matches!(
        SimConfig::new("lru", "t", 8, 64),
        Err(Error::MemorySizeOutOfRange(64))
    ));
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_report_after_run() {
    let stats = run("fifo", "1 2 3 4 1 2 3 4 5", 64, 256);
    let mut out = Vec::new();
    write_report(&stats, false, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Page hits: 4\nPage misses: 5\nPage faults: 5\n"
    );
}
