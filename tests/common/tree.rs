//! Scratch tree builders

use std::fs;
use std::path::{Path, PathBuf};

/// Create `entries` under `root`. Entries ending in `/` are directories,
/// everything else is a file (parents created as needed).
pub fn build_tree(root: &Path, entries: &[&str]) {
    fs::create_dir_all(root).unwrap();
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, entry.as_bytes()).unwrap();
        }
    }
}

/// `scratch/` with two subtrees, an empty directory and top-level files
pub fn sample_tree(parent: &Path) -> PathBuf {
    let root = parent.join("scratch");
    build_tree(
        &root,
        &[
            "a/x.txt",
            "a/y.txt",
            "a/deep/z.bin",
            "b/",
            "c/only.log",
            "top.txt",
            "zz.tmp",
        ],
    );
    root
}

/// Number of entries left under `root`, excluding `root` itself
pub fn remaining_entries(root: &Path) -> usize {
    let Ok(entries) = fs::read_dir(root) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() && !path.is_symlink() {
                1 + remaining_entries(&path)
            } else {
                1
            }
        })
        .sum()
}

/// Replace `root` in each message with `<root>` and normalise separators
pub fn relativize(messages: &[String], root: &Path) -> String {
    let root = root.display().to_string();
    messages
        .iter()
        .map(|m| m.replace(&root, "<root>").replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("\n")
}
