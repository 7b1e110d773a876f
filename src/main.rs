//! Gallery Scraper - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gallery_scraper::{
    cli::Args,
    config::{parse_target_url, validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_download_stats, print_error, print_info,
        print_warning,
    },
    scrape_page,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let error = Error::Argument(e.render().to_string());
            print_error(&error.to_string());
            return ExitCode::from(exit_codes::ARGUMENT_ERROR as u8);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Argument(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::ARGUMENT_ERROR as u8)
                }
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::Regex(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Fetch(_) | Error::Parse(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::PAGE_ERROR as u8)
                }
                Error::Directory(_) | Error::Staging(_) | Error::Scan(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Validate the target before anything touches the network
    let url = parse_target_url(&args.url)?;

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    print_config_summary(
        url.as_str(),
        &config.scrape.image_host_pattern,
        &config.storage.store_dir.display().to_string(),
    );

    let cwd = std::env::current_dir()?;
    let state = scrape_page(&config, &url, &cwd, args.quiet).await?;

    print_download_stats(&state);

    Ok(())
}
