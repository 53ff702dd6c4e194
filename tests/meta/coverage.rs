//! Checks that every source file has a mirrored unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Module wiring and entry points carry no logic of their own
    fn is_wiring(relative_path: &str) -> bool {
        relative_path == "lib.rs"
            || relative_path == "main.rs"
            || relative_path.ends_with("mod.rs")
    }

    fn mirrored_paths(dir: &str) -> BTreeSet<String> {
        let root = Path::new(dir);
        collect_relative_paths(root, root)
            .unwrap_or_else(|error| {
                assert!(!root.exists(), "Failed to read {dir}: {error}");
                BTreeSet::new()
            })
            .into_iter()
            .filter(|path| !is_wiring(path))
            .collect()
    }

    // Every source file needs a unit test file at the mirrored path
    // Verified by adding a source file without a test counterpart
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = mirrored_paths(SRC_DIR);
        let test_paths = mirrored_paths(UNIT_DIR);

        let missing: Vec<String> = src_paths
            .difference(&test_paths)
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Every unit test file needs a source file at the mirrored path
    // Verified by renaming a source file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = mirrored_paths(SRC_DIR);
        let test_paths = mirrored_paths(UNIT_DIR);

        let orphaned: Vec<String> = test_paths
            .difference(&src_paths)
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // Every test file outside the module wiring declares at least one test
    // Verified by emptying a unit test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, &mut files_without_tests) {
            assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative_path);
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(paths)
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if is_wiring(file_name) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
