use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const PROFILE: &str = r#"<h2 title="Profile">Your profile</h2>
<p i18n="@@intro">Welcome back</p>
"#;

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = CliTest::with_file("src/profile.html", PROFILE)?;

    assert_cmd_snapshot!(test.fix_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
      --> ./src/profile.html:1:1
         |
       1 | <h2 title="Profile">Your profile</h2>
         | ^
      + <h2 i18n-title title="Profile">Your profile</h2>

      --> ./src/profile.html:1:1
         |
       1 | <h2 title="Profile">Your profile</h2>
         | ^
      + <h2 i18n title="Profile">Your profile</h2>

    Would apply 2 fix(es) in 1 file(s).
    Run with --apply to apply these fixes.

    ----- stderr -----
    "#);

    // Dry run never touches the file
    assert_eq!(test.read_file("src/profile.html")?, PROFILE);

    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = CliTest::with_file("src/profile.html", PROFILE)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Applied 2 fix(es) in 1 file(s).

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("src/profile.html")?,
        r#"<h2 i18n-title i18n title="Profile">Your profile</h2>
<p i18n="@@intro">Welcome back</p>
"#
    );

    // Markers are in place, only the ids are left to the author
    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: Missing custom message identifier on attribute "title"  i18n-missing-id-on-attribute
     --> ./src/profile.html:1:1
      |
    1 | <h2 i18n-title i18n title="Profile">Your profile</h2>
      | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^

    warning: Missing custom message identifier  i18n-missing-id
     --> ./src/profile.html:1:1
      |
    1 | <h2 i18n-title i18n title="Profile">Your profile</h2>
      | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^

    ✘ 2 problems (0 errors, 2 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_fix_apply_twice() -> Result<()> {
    let test = CliTest::with_file("src/card.html", "<div>\n  <span>Label</span>\n</div>\n")?;

    let mut first = test.fix_command();
    first.arg("--apply");
    assert_cmd_snapshot!(first, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Applied 1 fix(es) in 1 file(s).

    ----- stderr -----
    ");
    let fixed = test.read_file("src/card.html")?;
    assert_eq!(fixed, "<div>\n  <span i18n>Label</span>\n</div>\n");

    // The marker without an id can only be completed by hand
    let mut second = test.fix_command();
    second.arg("--apply");
    assert_cmd_snapshot!(second, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No automatic fixes available.
    Note: 1 issue(s) need manual attention (run i18n-lint check for details).

    ----- stderr -----
    ");
    assert_eq!(test.read_file("src/card.html")?, fixed);

    Ok(())
}

#[test]
fn test_fix_clean_project() -> Result<()> {
    let test = CliTest::with_file("src/app.html", r#"<p i18n="@@hello">Hello</p>"#)?;

    assert_cmd_snapshot!(test.fix_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 template file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fix_with_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/ok.html", "<p>Hello</p>")?;
    test.write_file("src/broken.html", "<p>Unclosed")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----
    Applied 1 fix(es) in 1 file(s).

    ----- stderr -----
    warning: 1 file(s) could not be parsed (run i18n-lint check for details)
    ");

    // Parseable files are still fixed
    assert_eq!(test.read_file("src/ok.html")?, "<p i18n>Hello</p>");
    assert_eq!(test.read_file("src/broken.html")?, "<p>Unclosed");

    Ok(())
}
