use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn setup_greetings(test: &CliTest) -> Result<()> {
    test.write_file("locale/en/translate.csv", r#""greeting","Hello""#)?;
    test.write_file(
        "locale/fr/translate.csv",
        "\"greeting\",\"Bonjour\"\n\"farewell\",\"Au revoir\"\n",
    )
}

#[test]
fn test_export_merges_locales_and_defaults_to_key() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "--locale",
        "en,fr"
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 2 keys for 2 locales to ./translate.csv
      = 1 missing translation defaulted to its key

    ----- stderr -----
    ");

    assert_snapshot!(test.read_file("translate.csv")?, @r#"
    Code (do not modify it),en,fr
    "farewell","farewell","Au revoir"
    "greeting","Hello","Bonjour"
    "#);
    Ok(())
}

#[test]
fn test_export_header_follows_locale_argument_order() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;

    let output = test
        .export_command()
        .args(["--file", "translate.csv", "--source", "locale", "--locale", "fr,en"])
        .output()?;

    assert!(output.status.success());
    let content = test.read_file("translate.csv")?;
    assert_eq!(
        content.lines().next(),
        Some("Code (do not modify it),fr,en")
    );
    Ok(())
}

#[test]
fn test_export_detects_locales_from_directories() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;
    // Dotted directories are not locales.
    test.create_dir("locale/fr.bak")?;
    test.create_dir("out")?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "--destination",
        "out/labels.csv",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 2 keys for 2 locales to out/labels.csv
      = 1 missing translation defaulted to its key

    ----- stderr -----
    ");

    let content = test.read_file("out/labels.csv")?;
    assert_eq!(content.lines().next(), Some("Code (do not modify it),en,fr"));
    assert!(!test.exists("translate.csv"));
    Ok(())
}

#[test]
fn test_export_missing_locale_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "--locale",
        "en,de"
    ]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: The file locale/de/translate.csv could not be opened: No such file or directory (os error 2)
    ");

    // Nothing is written when a source is unreadable.
    assert!(!test.exists("translate.csv"));
    Ok(())
}

#[test]
fn test_export_missing_source_dir_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "missing"
    ]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: The source dir 'missing' could not be found.
    ");
    Ok(())
}

#[test]
fn test_export_unwritable_destination_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "--destination",
        "no/such/dir/out.csv",
    ]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: The destination file (no/such/dir/out.csv) is not writable: directory 'no/such/dir' does not exist.
    ");
    Ok(())
}

#[test]
fn test_export_requires_source() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .export_command()
        .args(["--file", "translate.csv"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--source"));
    Ok(())
}

#[test]
fn test_export_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;
    test.write_file(
        ".labelsyncrc.json",
        r#"{
            "locales": ["fr"],
            "codeHeader": "Key"
        }"#,
    )?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale"
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 2 keys for 1 locale to ./translate.csv

    ----- stderr -----
    ");

    assert_snapshot!(test.read_file("translate.csv")?, @r#"
    Key,fr
    "farewell","Au revoir"
    "greeting","Bonjour"
    "#);
    Ok(())
}

#[test]
fn test_export_cli_locale_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;
    test.write_file(".labelsyncrc.json", r#"{ "locales": ["fr"] }"#)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "--locale",
        "en"
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 1 key for 1 locale to ./translate.csv

    ----- stderr -----
    ");

    let content = test.read_file("translate.csv")?;
    assert_eq!(content.lines().next(), Some("Code (do not modify it),en"));
    Ok(())
}

#[test]
fn test_export_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;
    test.write_file(".labelsyncrc.json", r#"{ "codeHeader": "a,b" }"#)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale"
    ]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid 'codeHeader': "a,b" must not contain commas, quotes or line breaks
    "#);
    Ok(())
}

#[test]
fn test_export_malformed_config_names_the_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;
    test.write_file(".labelsyncrc.json", "{ not json")?;

    let output = test
        .export_command()
        .args(["--file", "translate.csv", "--source", "locale"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
    assert!(stderr.contains(".labelsyncrc.json"));
    Ok(())
}

#[test]
fn test_export_verbose_lists_sources() -> Result<()> {
    let test = CliTest::new()?;
    setup_greetings(&test)?;

    assert_cmd_snapshot!(test.export_command().args([
        "--file",
        "translate.csv",
        "--source",
        "locale",
        "-v"
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      read locale/en/translate.csv
      read locale/fr/translate.csv
    ✓ Exported 2 keys for 2 locales to ./translate.csv
      = 1 missing translation defaulted to its key

    ----- stderr -----
    Note: No .labelsyncrc.json found, using default configuration
    ");
    Ok(())
}
