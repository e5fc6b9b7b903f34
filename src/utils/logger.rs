use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so the prompt and verdict lines on stdout stay untouched.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = match (verbose, level) {
        (true, _) => "cc_verify=debug".to_string(),
        (false, Some(level)) => format!("cc_verify={}", level),
        (false, None) => "cc_verify=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 重複初始化時（例如測試）忽略錯誤
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
