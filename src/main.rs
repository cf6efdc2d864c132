use anyhow::{Context, Result};
use clap::Parser;
use interview_client::{cli, config, interview, transport};
use cli::{Cli, Commands};
use config::Config;
use interview_common::{InterviewClient, SessionId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transport::{fresh_session_id, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Run { name, output } => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            println!("🎤 interview-client - 面接\n");
            tracing::info!(%base_url, "starting interview");

            let report_dir = output.unwrap_or_else(|| config.report_dir.clone());
            let mut client = InterviewClient::new(HttpTransport::new(base_url), fresh_session_id);

            let result = interview::run_interactive_interview(&mut client, name, &report_dir).await;
            if let Some(session_id) = client.controller().session_id() {
                tracing::debug!(%session_id, "session");
            }
            result.context("面接を継続できませんでした")?;

            println!("\n✅ 終了");
        }

        Commands::Report { session_id, output } => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            let report_dir = output.unwrap_or_else(|| config.report_dir.clone());
            let transport = HttpTransport::new(base_url);

            let path = interview::download_session_report(
                &transport,
                SessionId::new(session_id.clone()),
                &report_dir,
            )
            .await
            .with_context(|| format!("セッション {} のレポート取得に失敗しました", session_id))?;
            println!("✔ レポートを保存: {}", path.display());
        }

        Commands::Config { set_base_url, set_report_dir, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.base_url = config::normalize_base_url(&url)?;
                changed = true;
            }

            if let Some(dir) = set_report_dir {
                config.report_dir = dir;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  URL: {}", config.base_url);
                println!("  レポート保存先: {}", config.report_dir.display());
                if let Ok(url) = std::env::var(config::BASE_URL_ENV) {
                    println!("  ({} = {})", config::BASE_URL_ENV, url);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
