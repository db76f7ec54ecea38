//! Property tests for erasing randomly shaped trees.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use scratchwipe::{CleanOptions, DirectoryEraser, ExecutionMode, LocalFs, MemoryReporter};
use tempfile::tempdir;

use crate::common::*;

/// Relative entries up to four levels deep; a trailing `/` marks a directory.
fn tree_entries() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    let entry = (proptest::collection::vec(segment, 1..=4), any::<bool>()).prop_map(
        |(segments, is_dir)| {
            let joined = segments.join("/");
            if is_dir {
                format!("{joined}/")
            } else {
                format!("{joined}.f")
            }
        },
    );
    proptest::collection::vec(entry, 0..24)
}

fn mode() -> impl Strategy<Value = ExecutionMode> {
    prop_oneof![Just(ExecutionMode::Sequential), Just(ExecutionMode::Concurrent)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any tree is removed completely, root included.
    #[test]
    fn property_tree_is_fully_removed(entries in tree_entries(), mode in mode()) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("scratch");
        let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
        build_tree(&root, &refs);
        let reporter = Arc::new(MemoryReporter::new());

        let report = DirectoryEraser::new(LocalFs::new(), reporter.clone())
            .clean_path(&root, &CleanOptions::new().with_mode(mode))
            .unwrap();

        prop_assert!(report.is_success());
        prop_assert!(report.root_removed());
        prop_assert!(!root.exists());
        prop_assert_eq!(reporter.infos().len(), report.deleted.len());
    }

    /// PROPERTY: each node is deleted at most once, and a directory only
    /// after everything beneath it.
    #[test]
    fn property_children_precede_parents(entries in tree_entries(), mode in mode()) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("scratch");
        let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
        build_tree(&root, &refs);

        let report = DirectoryEraser::new(LocalFs::new(), Arc::new(MemoryReporter::new()))
            .clean_path(&root, &CleanOptions::new().with_mode(mode))
            .unwrap();

        let mut seen: HashSet<PathBuf> = HashSet::new();
        for node in &report.deleted {
            prop_assert!(seen.insert(node.path().to_path_buf()), "deleted twice: {:?}", node);
        }
        for (i, node) in report.deleted.iter().enumerate() {
            for later in &report.deleted[i + 1..] {
                prop_assert!(
                    !later.path().starts_with(node.path()) || later.path() == node.path(),
                    "{:?} deleted after its ancestor {:?}",
                    later,
                    node
                );
            }
        }
        prop_assert_eq!(report.deleted.last().map(|n| n.path()), Some(root.as_path()));
    }

    /// PROPERTY: keep_root empties the directory and keeps it.
    #[test]
    fn property_keep_root_leaves_empty_root(entries in tree_entries(), mode in mode()) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("scratch");
        let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
        build_tree(&root, &refs);

        let report = DirectoryEraser::new(LocalFs::new(), Arc::new(MemoryReporter::new()))
            .clean_path(&root, &CleanOptions::new().with_mode(mode).with_keep_root(true))
            .unwrap();

        prop_assert!(report.is_success());
        prop_assert!(root.is_dir());
        prop_assert_eq!(remaining_entries(&root), 0);
    }
}
