//! Checks that `tests/unit` mirrors `src` one file per module

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Entry points and module roots carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn modules(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut found = BTreeSet::new();
        let result = rust_files(base, base, &mut found);
        assert!(result.is_ok(), "failed to scan {root}: {result:?}");
        found.retain(|relative| !is_structural(relative));
        found
    }

    #[test]
    fn test_every_source_module_has_unit_tests() {
        let src = modules(SRC);
        let unit = modules(UNIT);

        let missing: Vec<_> = src.difference(&unit).collect();
        assert!(
            missing.is_empty(),
            "source modules without unit tests:\n{}",
            missing
                .iter()
                .map(|m| format!("  - src/{m} -> {UNIT}/{m}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_module() {
        let src = modules(SRC);
        let unit = modules(UNIT);

        let orphaned: Vec<_> = unit.difference(&src).collect();
        assert!(
            orphaned.is_empty(),
            "unit tests without a source module:\n{}",
            orphaned
                .iter()
                .map(|m| format!("  - {UNIT}/{m}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Verified by emptying one unit test file
    #[test]
    fn test_every_unit_test_file_contains_tests() {
        let empty: Vec<_> = modules(UNIT)
            .into_iter()
            .filter(|m| {
                !fs::read_to_string(Path::new(UNIT).join(m))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();

        assert!(empty.is_empty(), "unit test files without #[test]: {empty:?}");
    }
}
