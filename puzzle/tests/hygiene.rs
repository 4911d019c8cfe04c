//! Hygiene: coding standards checked at test time.
//!
//! Scans the puzzle crate's production sources (everything under `src/`
//! except `_test.rs` files) for patterns that crash the page or swallow
//! errors. Each pattern has a budget, normally zero. The budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

/// Aborts the wasm instance, which freezes the page mid-drag.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "propagate or log instead" },
    Budget { pattern: ".expect(", max: 0, reason: "propagate or log instead" },
    Budget { pattern: "panic!(", max: 0, reason: "return an error" },
    Budget { pattern: "unreachable!(", max: 0, reason: "make the state unrepresentable" },
    Budget { pattern: "todo!(", max: 0, reason: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "finish the stub" },
];

/// Discards errors without looking at them.
const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, reason: "log the error" },
    Budget { pattern: ".ok()", max: 0, reason: "match and log the error" },
];

const STRUCTURE: &[Budget] = &[Budget {
    pattern: "#[allow(dead_code)]",
    max: 0,
    reason: "delete the code",
}];

struct SourceFile {
    path: String,
    content: String,
}

fn collect(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

fn all_rs_files() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    collect(Path::new("src"), &mut paths);
    paths.sort();
    paths
}

fn is_test_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with("_test.rs")
}

fn production_sources() -> Vec<SourceFile> {
    all_rs_files()
        .into_iter()
        .filter(|p| !is_test_file(p))
        .filter_map(|p| {
            let content = fs::read_to_string(&p).ok()?;
            Some(SourceFile { path: p.to_string_lossy().into_owned(), content })
        })
        .collect()
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({}).\n{listing}",
                budget.pattern, budget.max, budget.reason
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// =============================================================
// Budgets
// =============================================================

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_loss_budgets() {
    check(SILENT_LOSS);
}

#[test]
fn structure_budgets() {
    check(STRUCTURE);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn every_test_file_is_wired_to_its_module() {
    for test_file in all_rs_files().into_iter().filter(|p| is_test_file(p)) {
        let name = test_file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let module = test_file.with_file_name(name.replace("_test.rs", ".rs"));
        let source = fs::read_to_string(&module).unwrap_or_default();
        assert!(
            source.contains(&format!("#[path = \"{name}\"]")),
            "{} is not included from {}",
            test_file.display(),
            module.display()
        );
    }
}
