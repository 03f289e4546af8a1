use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, catalog_body, run};

const GREETING_JS: &str = "// greeting\n\nvar a = gettext(\"Hello\");\n\n\n\n\n\nalert(gettext(\"Hello\"));\n";

#[test]
fn test_extract_sources_writes_catalog() -> Result<()> {
    let test = CliTest::with_file("static/app.js", GREETING_JS)?;
    test.write_file(
        "templates/form.html",
        "<form>\n  <button>{{ _(\"Save\") }}</button>\n  {{ _plural(\"%(n)s file\", \"%(n)s files\", count) }}\n</form>\n",
    )?;

    let result = run(test
        .extract_command()
        .args(["templates", "static/app.js", "-o", "locale/messages.pot"]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("3 messages written from 2 files -> locale/messages.pot"));

    let catalog = test.read_file("locale/messages.pot")?;
    assert!(catalog.starts_with("msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: PACKAGE VERSION\\n\"\n"));
    assert_eq!(
        catalog_body(&catalog),
        r#"#: templates/form.html:2
msgid "Save"
msgstr ""

#: templates/form.html:3
msgid "%(n)s file"
msgid_plural "%(n)s files"
msgstr[0] ""
msgstr[1] ""

#: static/app.js:3
#: static/app.js:9
msgid "Hello"
msgstr ""
"#
    );

    Ok(())
}

#[test]
fn test_default_output_path() -> Result<()> {
    let test = CliTest::with_file("app.js", "ngettext('1 item', '{n} items');\n")?;

    let result = run(test.extract_command().arg("app.js"))?;

    assert_eq!(result.code, Some(0));
    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"1 item\"\nmsgid_plural \"{n} items\"\n"));

    Ok(())
}

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file("app.js", "gettext('Stdout only');\n")?;

    let result = run(test.extract_command().args(["app.js", "--stdout"]))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.starts_with("msgid \"\"\n"));
    assert_eq!(
        catalog_body(&result.stdout),
        "#: app.js:1\nmsgid \"Stdout only\"\nmsgstr \"\"\n"
    );
    assert!(result.stderr.contains("1 message extracted from 1 file"));
    assert!(!test.root().join("messages.pot").exists());

    Ok(())
}

#[test]
fn test_unsupported_extension_aborts_before_output() -> Result<()> {
    let test = CliTest::with_file("app.js", "gettext('Never written');\n")?;
    test.write_file("style.css", "body {}\n")?;

    let result = run(test.extract_command().args(["app.js", "style.css"]))?;

    assert_eq!(result.code, Some(2));
    assert_eq!(
        result.stderr,
        "Error: No extraction method defined for extension .css (style.css)\n"
    );
    assert!(!test.root().join("messages.pot").exists());

    Ok(())
}

#[test]
fn test_directory_skips_unsupported_files() -> Result<()> {
    let test = CliTest::with_file("static/app.js", "gettext('Scripted');\n")?;
    test.write_file("static/site.css", "body {}\n")?;
    test.write_file("static/logo.svg", "<svg/>\n")?;

    let result = run(test.extract_command().arg("static"))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("1 message written from 1 file"));

    Ok(())
}

#[test]
fn test_invalid_calls_are_reported() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "gettext('Kept');\nvar label = gettext(name);\nngettext('alone');\n",
    )?;

    let result = run(test.extract_command().arg("app.js"))?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stderr
            .contains("error: Cannot localize non-literal at app.js:2  invalid-call\n  --> app.js:2:13\n")
    );
    assert!(
        result
            .stderr
            .contains("error: Incomplete ngettext call at app.js:3  invalid-call\n")
    );
    assert!(result.stderr.contains("✘ 2 problems (2 errors, 0 warnings)"));

    let catalog = test.read_file("messages.pot")?;
    assert_eq!(
        catalog_body(&catalog),
        "#: app.js:1\nmsgid \"Kept\"\nmsgstr \"\"\n"
    );

    Ok(())
}

#[test]
fn test_parse_error_keeps_other_files() -> Result<()> {
    let test = CliTest::with_file("a.js", "gettext('From a');\n")?;
    test.write_file("b.js", "gettext('From b');\nfunction (\n")?;
    test.write_file("c.html", "{{ _(\"From c\") }}\n")?;

    let result = run(test.extract_command().args(["a.js", "b.js", "c.html"]))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("error: Error while parsing b.js  parse-error"));

    let catalog = test.read_file("messages.pot")?;
    let body = catalog_body(&catalog);
    assert!(body.contains("msgid \"From a\""));
    assert!(!body.contains("msgid \"From b\""));
    assert!(body.contains("msgid \"From c\""));

    Ok(())
}

#[test]
fn test_plural_conflict_is_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "ngettext('file', 'files');\nngettext('file', 'documents');\n",
    )?;

    let result = run(test.extract_command().arg("app.js"))?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("warning: Conflicting plural form for \"file\" at app.js:2  plural-conflict\n")
    );
    assert!(
        result
            .stderr
            .contains("= note: kept plural \"files\", ignored plural \"documents\"")
    );
    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("#: app.js:1\n#: app.js:2\nmsgid \"file\"\nmsgid_plural \"files\"\n"));

    Ok(())
}

#[test]
fn test_config_targets() -> Result<()> {
    let test = CliTest::with_file(
        ".potgenrc.json",
        r#"{
  "targets": {
    "locale/site.pot": ["templates"],
    "locale/admin.pot": ["admin/*.js"]
  },
  "ignores": ["**/vendor/**"]
}"#,
    )?;
    test.write_file("templates/index.html", "<h1>{{ _(\"Welcome\") }}</h1>\n")?;
    test.write_file("templates/vendor/widget.html", "{{ _(\"Vendored\") }}\n")?;
    test.write_file("admin/panel.js", "gettext('Dashboard');\n")?;

    let result = run(&mut test.extract_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_eq!(
        catalog_body(&test.read_file("locale/site.pot")?),
        "#: templates/index.html:1\nmsgid \"Welcome\"\nmsgstr \"\"\n"
    );
    assert_eq!(
        catalog_body(&test.read_file("locale/admin.pot")?),
        "#: admin/panel.js:1\nmsgid \"Dashboard\"\nmsgstr \"\"\n"
    );

    let site = result.stdout.find("locale/site.pot").unwrap();
    let admin = result.stdout.find("locale/admin.pot").unwrap();
    assert!(site < admin);

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_file(
        ".potgenrc.json",
        r#"{ "targets": { "messages.pot": ["static"] } }"#,
    )?;
    test.write_file("static/app.js", "gettext('Nested run');\n")?;

    let result = run(test
        .extract_command()
        .current_dir(test.root().join("static")))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("#: static/app.js:1\n"));

    Ok(())
}

#[test]
fn test_no_sources_and_no_targets() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.extract_command())?;

    assert_eq!(result.code, Some(2));
    assert_eq!(
        result.stderr,
        "Error: No sources given and no targets configured in .potgenrc.json\n"
    );

    Ok(())
}

#[test]
fn test_missing_source_path() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.extract_command().arg("templates"))?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Source path does not exist:"));

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::with_file("project/app.js", "gettext('Rooted');\n")?;

    let result = run(test
        .extract_command()
        .args(["app.js", "--root", "project"]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    let catalog = test.read_file("project/messages.pot")?;
    assert!(catalog.contains("#: app.js:1\n"));

    Ok(())
}

#[test]
fn test_escaping_in_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        r#"gettext("Say \"hi\"\nto C:\\temp");"#,
    )?;

    let result = run(test.extract_command().args(["app.js", "--stdout"]))?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains(r#"msgid "Say \"hi\"\nto C:\\temp""#)
    );

    Ok(())
}
