use clap::Parser;
use sprout::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("sprout")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "./template");
    assert_eq!(parsed.output_dir, Some(PathBuf::from("./output")));
    assert!(parsed.data.is_empty());
    assert_eq!(parsed.json_indent, "tab");
    assert!(!parsed.stdin);
    assert!(!parsed.verbose);
    assert!(!parsed.skip_hooks_check);
    assert!(!parsed.init_git);
}

#[test]
fn test_output_dir_is_optional() {
    let args = make_args(&["./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, None);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "--skip-hooks-check",
        "--init-git",
        "--stdin",
        "--json-indent",
        "2",
        "--data-file",
        "data.yaml",
        "./template",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.skip_hooks_check);
    assert!(parsed.init_git);
    assert!(parsed.stdin);
    assert_eq!(parsed.json_indent, "2");
    assert_eq!(parsed.data_file, Some(PathBuf::from("data.yaml")));
}

#[test]
fn test_repeated_data() {
    let args = make_args(&["-d", "name=app", "--data", "docker=true", "./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.data, vec!["name=app", "docker=true"]);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-s", "./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
