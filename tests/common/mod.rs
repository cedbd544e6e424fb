//! Test harness shared by every integration test module.
//!
//! Each `tests!` invocation embeds its Lox source directly instead of
//! reading a fixture off disk, since the test source is part of what the
//! test is asserting about. There are three shapes:
//!
//! - `is OK` runs the source in-process and checks the `print`ed output.
//!   The process always exits 0 for these, so there's no need to shell out.
//! - `is ERR` shells out to the built binary and checks the diagnostics
//!   written to stdout for a source that fails scanning, parsing, or
//!   resolving. Those stages never change the process exit status, so the
//!   run is expected to succeed.
//! - `is RUNTIME_ERR` is the same as `is ERR` but for a source that scans,
//!   parses, and resolves cleanly and then fails during interpretation,
//!   which does exit the process with status 70.

#[macro_export]
macro_rules! tests {
    ($name:ident is OK $source:expr $(, $expected:expr)* $(,)?) => {
        #[test]
        fn $name() {
            use rocks_lang::Rocks;

            let mut expected_lines: Vec<&str> = vec![$($expected),*];
            let expected = if expected_lines.is_empty() {
                String::new()
            } else {
                expected_lines.push("");
                expected_lines.join("\n")
            };

            let mut output = Vec::new();
            let mut rocks = Rocks::new(&mut output);
            let had_runtime_error = rocks.run_line($source);
            drop(rocks);

            assert!(!had_runtime_error, "expected {} to run without a runtime error", stringify!($name));
            assert_eq!(expected, std::str::from_utf8(&output).unwrap());
        }
    };

    ($name:ident is ERR $source:expr $(, $expected:expr)+ $(,)?) => {
        $crate::tests!(@spawn $name, $source, [$($expected),+], false);
    };

    ($name:ident is RUNTIME_ERR $source:expr $(, $expected:expr)+ $(,)?) => {
        $crate::tests!(@spawn $name, $source, [$($expected),+], true);
    };

    (@spawn $name:ident, $source:expr, [$($expected:expr),+], $expect_failure:expr) => {
        #[test]
        fn $name() {
            use assert_cmd::Command;

            let expected = vec![$($expected),+].join("\n");

            let mut path = std::env::temp_dir();
            path.push(format!("rocks_test_{}_{}.rocks", module_path!().replace("::", "_"), stringify!($name)));
            std::fs::write(&path, $source).expect("failed to write temp test source");

            let assert = Command::cargo_bin("rocks")
                .unwrap()
                .arg(&path)
                .assert()
                .stdout(format!("{expected}\n"));

            if $expect_failure {
                assert.failure();
            } else {
                assert.success();
            }

            let _ = std::fs::remove_file(&path);
        }
    };
}
