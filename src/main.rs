use brand_onboarding::{cli, client, config, error, template, upload};
use brand_onboarding_common::template::header_fields;
use clap::Parser;
use cli::{Cli, Commands};
use client::UploadClient;
use config::Config;
use error::{OnboardError, Result};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "brand_onboarding=debug,brand_onboard=debug"
    } else {
        "brand_onboarding=info,brand_onboard=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => {}
        // 画面に表示済み
        Err(e @ OnboardError::Upload(_)) => std::process::exit(e.exit_code()),
        Err(e) => {
            eprintln!("✖ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Upload { file, output } => {
            println!("📤 brand-onboard - CSVアップロード\n");

            let path = match file {
                Some(path) => path,
                None => prompt_file_path()?,
            };

            let server = config.resolve_server(cli.server.as_deref());
            let client = UploadClient::new(&server, &config)?;
            println!("- 送信先: {}", client.url());

            upload::run_upload(
                &client,
                &path,
                output.as_deref(),
                ProgressBar::new_spinner(),
                &mut std::io::stdout(),
            )
            .await?;
        }

        Commands::Template { output, stdout } => {
            if stdout {
                print!("{}", brand_onboarding_common::TEMPLATE_CSV);
            } else {
                let path = template::write_template(output.as_deref())?;
                println!("✔ テンプレートを出力: {}", path.display());
                println!("  列: {}", header_fields().join(", "));
            }
        }

        Commands::Config { set_server, show } => {
            let mut config = config;

            if let Some(url) = set_server {
                config.set_server(url)?;
                println!("✔ 接続先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  接続先: {}", config.resolve_server(cli.server.as_deref()));
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "なし".into())
                );
            }
        }
    }

    Ok(())
}

fn prompt_file_path() -> Result<PathBuf> {
    let input: String = dialoguer::Input::new()
        .with_prompt("CSVファイルのパス")
        .interact_text()
        .map_err(|e| OnboardError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(input.trim()))
}
