use clap::Parser;
use domain_cart::app::{command::HELP, repl};
use domain_cart::utils::{logger, validation::Validate};
use domain_cart::{build_oracle, CartEngine, CartError, CliConfig, ConfigProvider, TomlConfig};
use tokio::io::BufReader;

// 依 --config 決定使用 TOML 或命令列設定，並先完成驗證
fn load_settings(cli: &CliConfig) -> Result<(Box<dyn ConfigProvider>, bool), CartError> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            let verbose = cli.verbose || config.verbose();
            Ok((Box::new(config), verbose))
        }
        None => {
            cli.validate()?;
            Ok((Box::new(cli.clone()), cli.verbose))
        }
    }
}

fn fail(e: &CartError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let (settings, verbose) = match load_settings(&cli) {
        Ok(loaded) => loaded,
        Err(e) => fail(&e),
    };

    // 初始化日誌
    if cli.json_logs || settings.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting domain-cart");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let oracle = match build_oracle(&settings.oracle()) {
        Ok(oracle) => oracle,
        Err(e) => {
            tracing::error!("❌ Could not set up the availability oracle: {}", e);
            fail(&e);
        }
    };

    let mut engine = CartEngine::new(oracle, settings.max_domains());
    println!(
        "Domain cart ready. Capacity: {} domains.",
        engine.session().max_domains()
    );
    println!("{}", HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    if let Err(e) = repl::run(&mut engine, stdin, &mut stdout).await {
        tracing::error!("❌ Command loop stopped: {}", e);
        fail(&e);
    }

    tracing::info!(
        "Leaving with {} domains in cart",
        engine.session().cart().len()
    );
    Ok(())
}
