use clap::Parser;
use kiln::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("kiln")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.template.is_none());
    assert!(!parsed.skip_prompts);
    assert!(!parsed.git);
    assert!(!parsed.run_install);
    assert!(!parsed.license);
    assert!(!parsed.actions);
    assert!(parsed.output_dir.is_none());
}

#[test]
fn test_template_argument() {
    let parsed = Args::try_parse_from(make_args(&["JavaScript"])).unwrap();
    assert_eq!(parsed.template.as_deref(), Some("JavaScript"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--yes",
        "--git",
        "--install",
        "--license",
        "--actions",
        "--verbose",
        "--name",
        "Ada Lovelace",
        "--user-name",
        "ada",
        "--id",
        "@ada/engine",
        "--output-dir",
        "./out",
        "TypeScript",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.skip_prompts);
    assert!(parsed.git);
    assert!(parsed.run_install);
    assert!(parsed.license);
    assert!(parsed.actions);
    assert!(parsed.verbose);
    assert_eq!(parsed.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(parsed.user_name.as_deref(), Some("ada"));
    assert_eq!(parsed.id.as_deref(), Some("@ada/engine"));
    assert_eq!(parsed.output_dir, Some(PathBuf::from("./out")));
    assert_eq!(parsed.template.as_deref(), Some("TypeScript"));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-y", "-g", "-i", "-l", "-a", "-v"])).unwrap();

    assert!(parsed.skip_prompts);
    assert!(parsed.git);
    assert!(parsed.run_install);
    assert!(parsed.license);
    assert!(parsed.actions);
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["TypeScript", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
