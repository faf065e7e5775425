//! Integration tests for the `fmt` command.

mod common;

use common::{check_stderr, check_stdout, gdvn, temp_file};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn fmt_sorts_and_normalizes() {
    check_stdout(
        &["fmt"],
        Some("{b:2, a:1} // trailing comment\n"),
        expect![[r#"
            {a:1 b:2}
        "#]],
    );
}

#[test]
fn fmt_breaks_lines_at_width() {
    check_stdout(
        &["fmt", "--width", "0"],
        Some("[1 [2] ()]"),
        expect![[r#"
            [
              1
              [
                2
              ]
              ()
            ]
        "#]],
    );
}

#[test]
fn fmt_indent_width() {
    check_stdout(
        &["fmt", "--width", "0", "--indent", "4"],
        Some("(x)"),
        expect![[r#"
            (
                x
            )
        "#]],
    );
}

#[test]
fn fmt_compact_ignores_width() {
    check_stdout(
        &["fmt", "--compact", "--width", "0"],
        Some("[1\n 2\n 3]"),
        expect![[r#"
            [1 2 3]
        "#]],
    );
}

#[test]
fn fmt_large_integers() {
    check_stdout(
        &["fmt"],
        Some("18446744073709551616"),
        expect![[r#"
            0x10000000000000000
        "#]],
    );
    check_stdout(
        &["fmt", "--decimal"],
        Some("0x10000000000000000"),
        expect![[r#"
            18446744073709551616
        "#]],
    );
}

#[test]
fn fmt_reads_file() {
    let file = temp_file("Point{y:2 x:1}");

    gdvn()
        .args(["fmt", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("Point{x:1 y:2}\n");
}

#[test]
fn fmt_syntax_error() {
    check_stderr(
        &["--no-color", "fmt"],
        Some("[1 @]"),
        expect![[r#"
            Error: Unexpected '@' while looking for the start of a value.
               ╭─[ <stdin>:1:4 ]
               │
             1 │ [1 @]
               │    │ 
               │    ╰─ Unexpected '@' while looking for the start of a value.
            ───╯
        "#]],
    );

    gdvn()
        .args(["fmt"])
        .write_stdin("[1 @]")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn fmt_rejects_second_value() {
    gdvn()
        .args(["--no-color", "fmt"])
        .write_stdin("1 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "looking for the end of a file that should only have one value",
        ));
}

#[test]
fn fmt_missing_file() {
    gdvn()
        .args(["fmt", "does-not-exist.gdvn"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: does-not-exist.gdvn: "));
}
