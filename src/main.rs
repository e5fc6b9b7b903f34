use cc_verify::utils::{logger, validation::Validate};
use cc_verify::{CardError, CliConfig, LuhnValidator, Session};
use clap::Parser;
use std::io;

fn exit_with(e: &CardError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        logger::init_cli_logger(cli.verbose, None);
        exit_with(&e);
    }

    // 設定檔要先讀，日誌等級可能寫在裡面
    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            exit_with(&e);
        }
    };
    logger::init_cli_logger(cli.verbose, file.as_ref().and_then(|f| f.log_level()));

    let config = cli.resolve(file.as_ref());
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    tracing::debug!("Session config: {:?}", config);

    let session = Session::new(LuhnValidator, config);
    let stdin = io::stdin();

    match session.run(stdin.lock(), io::stdout(), io::stderr()) {
        Ok(summary) => {
            tracing::info!("✅ Verified after {} attempt(s)", summary.attempts);
        }
        Err(e) => exit_with(&e),
    }
}
