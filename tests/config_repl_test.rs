use anyhow::Result;
use domain_cart::app::repl;
use domain_cart::utils::validation::Validate;
use domain_cart::{build_oracle, CartEngine, ConfigProvider, TomlConfig};
use tempfile::TempDir;

/// Loads an offline configuration from disk and drives the command loop with it.
#[tokio::test]
async fn test_toml_config_drives_command_loop() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("cart.toml");

    let config_content = r#"
[cart]
max_domains = 2

[oracle]
type = "static"
unavailable = ["taken.com"]
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let oracle = build_oracle(&config.oracle())?;
    let mut engine = CartEngine::new(oracle, config.max_domains());

    let script = "\
add taken.com
add b.xyz
add a.com
check foo.net
remove-unavailable
keep-best
purchase
copy
";
    let mut output = Vec::new();
    repl::run(&mut engine, script.as_bytes(), &mut output).await?;
    let output = String::from_utf8(output)?;

    assert!(output.contains("Number of Cart items exceeded. Remove 1 domains to proceed to purchase"));
    assert!(output.contains("[warning] Improper domain - must end with .com, .app, or .xyz"));
    assert!(output.contains("[info] Cart Optimized"));
    assert!(output.contains("[success] Success: Customer can successfully purchase"));
    assert!(output.contains("b.xyz, a.com"));
    assert!(engine.session().purchase_enabled());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_and_clear_messages() -> Result<()> {
    let config = TomlConfig::from_toml_str("[oracle]\ntype = \"static\"\n")?;
    let mut engine = CartEngine::new(build_oracle(&config.oracle())?, config.max_domains());

    let script = "add a.com\nadd A.COM\ndelete A.com\nclear\nadd a.com\nclear\nlist\n";
    let mut output = Vec::new();
    repl::run(&mut engine, script.as_bytes(), &mut output).await?;
    let output = String::from_utf8(output)?;

    assert!(output.contains("[warning] Already existing in cart"));
    assert!(output.contains("[info] Cart is empty"));
    assert!(output.contains("[info] Cart cleared"));
    assert!(output.contains("Add 12 more domains to proceed to purchase"));
    assert!(engine.session().cart().is_empty());

    Ok(())
}
