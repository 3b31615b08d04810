use std::error::Error;
use std::ffi::OsString;

use linerun::exec::template::{join_lines, render_args};

type TestResult = Result<(), Box<dyn Error>>;

fn lines(strs: &[&str]) -> Vec<Vec<u8>> {
    strs.iter().map(|s| s.as_bytes().to_vec()).collect()
}

fn template(strs: &[&str]) -> Vec<String> {
    strs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn join_lines_uses_newline_separator_without_trailing_newline() -> TestResult {
    assert_eq!(join_lines(&lines(&[])), b"");
    assert_eq!(join_lines(&lines(&["a"])), b"a");
    assert_eq!(join_lines(&lines(&["a", "b"])), b"a\nb");

    Ok(())
}

#[test]
fn placeholder_is_replaced_with_joined_buffer() -> TestResult {
    let joined = join_lines(&lines(&["a", "b"]));
    let args = render_args(&template(&["-x", "?", "-y"]), &joined);

    assert_eq!(
        args,
        vec![
            OsString::from("-x"),
            OsString::from("a\nb"),
            OsString::from("-y"),
        ]
    );

    Ok(())
}

#[test]
fn every_occurrence_is_replaced_in_every_argument() -> TestResult {
    let args = render_args(&template(&["?", "--pair=?:?"]), b"v");

    assert_eq!(args, vec![OsString::from("v"), OsString::from("--pair=v:v")]);

    Ok(())
}

#[test]
fn arguments_without_placeholder_pass_through_unchanged() -> TestResult {
    let args = render_args(&template(&["--flag", "value"]), b"ignored");

    assert_eq!(args, vec![OsString::from("--flag"), OsString::from("value")]);

    Ok(())
}

#[test]
fn empty_buffer_substitutes_an_empty_string() -> TestResult {
    let joined = join_lines(&lines(&[]));
    let args = render_args(&template(&["?"]), &joined);

    assert_eq!(args, vec![OsString::from("")]);

    Ok(())
}
