use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18nlintrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".i18nlintrc.json").exists());
    insta::assert_snapshot!(test.read_file(".i18nlintrc.json")?, @r#"
    {
      "checkId": true,
      "checkText": true,
      "checkAttributes": true,
      "ignoreAttributes": [],
      "includes": [
        "src"
      ],
      "ignores": [],
      "extensions": [
        "html"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nlintrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .i18nlintrc.json already exists
    ");

    assert_eq!(test.read_file(".i18nlintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_usable() -> Result<()> {
    let test = CliTest::with_file("src/app.html", "<p>Hello</p>")?;
    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Each element containing text node should have an i18n attribute  i18n-missing-text
     --> ./src/app.html:1:1
      |
    1 | <p>Hello</p>
      | ^^^
      = fix: insert `i18n`

    ✘ 1 problems (1 error, 0 warnings)
    help: 1 issue(s) can be fixed with i18n-lint fix --apply

    ----- stderr -----
    ");

    Ok(())
}
