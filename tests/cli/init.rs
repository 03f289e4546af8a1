use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("targets").is_some_and(Value::is_object),
        "Config should have a 'targets' object"
    );
    assert!(
        parsed.get("templateExtensions").is_some(),
        "Config should have 'templateExtensions' field"
    );
    assert!(
        parsed.get("scriptExtensions").is_some(),
        "Config should have 'scriptExtensions' field"
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created"));
    assert!(test.root().join(".potgenrc.json").exists());

    let content = test.read_file(".potgenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".potgenrc.json", "{}")?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("error: .potgenrc.json already exists"));
    assert_eq!(test.read_file(".potgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("templates/index.html", "<h1>{{ _(\"Home\") }}</h1>\n")?;
    test.write_file("static/js/app.js", "gettext('Loaded');\n")?;

    let result = run(&mut test.extract_command())?;
    assert_eq!(
        result.code,
        Some(0),
        "Extract should work with initialized config. stderr: {}",
        result.stderr
    );

    let catalog = test.read_file("locale/messages.pot")?;
    assert!(catalog.contains("#: templates/index.html:1\nmsgid \"Home\""));
    assert!(catalog.contains("#: static/js/app.js:1\nmsgid \"Loaded\""));

    Ok(())
}
