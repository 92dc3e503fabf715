use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/app.component.html",
        r#"<h1 i18n="@@appTitle">My App</h1>
<img src="logo.png" width="120" alt="Logo" i18n-alt="@@logoAlt">
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 template file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_text_and_attribute() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<div title="Hello">Hi</div>"#)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Attribute "title" has no i18n attribute  i18n-missing-attribute
     --> ./src/app.html:1:1
      |
    1 | <div title="Hello">Hi</div>
      | ^^^^^^^^^^^^^^^^^^^
      = fix: insert `i18n-title`
      = help: Add the attribute name "title" to the "ignoreAttributes" option

    error: Each element containing text node should have an i18n attribute  i18n-missing-text
     --> ./src/app.html:1:1
      |
    1 | <div title="Hello">Hi</div>
      | ^^^^^^^^^^^^^^^^^^^
      = fix: insert `i18n`

    ✘ 2 problems (2 errors, 0 warnings)
    help: 2 issue(s) can be fixed with i18n-lint fix --apply

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_warnings_only_succeed() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<p i18n="Intro text">Welcome</p>"#)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: Missing custom message identifier  i18n-missing-id
     --> ./src/app.html:1:1
      |
    1 | <p i18n="Intro text">Welcome</p>
      | ^^^^^^^^^^^^^^^^^^^^^

    ✘ 1 problems (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_options() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<div title="Hello">Hi</div>"#)?;
    test.write_file(
        ".i18nlintrc.json",
        r#"{ "ignoreAttributes": ["title"], "checkText": false }"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 template file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_cli_overrides() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.html",
        "<div i18n title=\"Hello\">Hi</div>\n<input placeholder=\"Name\">\n",
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--no-check-id", "--ignore-attribute", "title"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Attribute "placeholder" has no i18n attribute  i18n-missing-attribute
     --> ./src/app.html:2:1
      |
    2 | <input placeholder="Name">
      | ^^^^^^^^^^^^^^^^^^^^^^^^^^
      = fix: insert `i18n-placeholder`
      = help: Add the attribute name "placeholder" to the "ignoreAttributes" option

    ✘ 1 problems (1 error, 0 warnings)
    help: 1 issue(s) can be fixed with i18n-lint fix --apply

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_explicit_paths() -> Result<()> {
    let test = CliTest::with_file("src/app.html", "<p>Included</p>")?;
    test.write_file("other/page.html", "<p>Elsewhere</p>")?;

    let mut cmd = test.check_command();
    cmd.arg("other");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Each element containing text node should have an i18n attribute  i18n-missing-text
     --> ./other/page.html:1:1
      |
    1 | <p>Elsewhere</p>
      | ^^^
      = fix: insert `i18n`

    ✘ 1 problems (1 error, 0 warnings)
    help: 1 issue(s) can be fixed with i18n-lint fix --apply

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_ignores_and_extensions() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<p i18n="@@ok">Fine</p>"#)?;
    test.write_file("src/legacy/old.html", "<p>Old</p>")?;
    test.write_file("src/notes.txt", "<p>Not a template</p>")?;
    test.write_file(".i18nlintrc.json", r#"{ "ignores": ["**/legacy/**"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 template file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_control_flow_blocks() -> Result<()> {
    let test = CliTest::with_file(
        "src/list.html",
        r#"@if (items.length) {
  <ul>
    @for (item of items; track item.id) {
      <li>{{ item.name }}</li>
    }
  </ul>
} @else {
  <p>No items</p>
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Each element containing text node should have an i18n attribute  i18n-missing-text
     --> ./src/list.html:4:7
      |
    4 |       <li>{{ item.name }}</li>
      |       ^^^^
      = fix: insert `i18n`

    error: Each element containing text node should have an i18n attribute  i18n-missing-text
     --> ./src/list.html:8:3
      |
    8 |   <p>No items</p>
      |   ^^^
      = fix: insert `i18n`

    ✘ 2 problems (2 errors, 0 warnings)
    help: 2 issue(s) can be fixed with i18n-lint fix --apply

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.html", "<div><span>Text</div>")?;
    test.write_file("src/ok.html", r#"<p i18n="@@ok">Fine</p>"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: unexpected closing tag </div> at 1:16, expected </span>  parse-error
     --> ./src/broken.html

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/app.html", "<p>Hi</p>")?;
    test.write_file(".i18nlintrc.json", r#"{ "extensions": [".html"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid extension in 'extensions': ".html" (use "html", not ".html")
    "#);

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<button title="Save">Save</button>"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "filesChecked": 1,
      "errorCount": 2,
      "warningCount": 0,
      "issues": [
        {
          "rule": "i18n-missing-attribute",
          "severity": "error",
          "message": "Attribute \"title\" has no i18n attribute",
          "file": "./src/app.html",
          "line": 1,
          "column": 1,
          "endLine": 1,
          "endColumn": 22,
          "attribute": "title",
          "fix": {
            "edit": {
              "start": 7,
              "end": 7,
              "newText": " i18n-title"
            }
          },
          "suggestion": {
            "kind": "i18n-suggest-ignore",
            "label": "Add the attribute name \"title\" to the \"ignoreAttributes\" option",
            "fix": null
          }
        },
        {
          "rule": "i18n-missing-text",
          "severity": "error",
          "message": "Each element containing text node should have an i18n attribute",
          "file": "./src/app.html",
          "line": 1,
          "column": 1,
          "endLine": 1,
          "endColumn": 22,
          "fix": {
            "edit": {
              "start": 7,
              "end": 7,
              "newText": " i18n"
            }
          }
        }
      ]
    }

    ----- stderr -----
    "#);

    Ok(())
}
