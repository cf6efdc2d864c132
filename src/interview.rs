//! 対話式面接モジュール
//!
//! 名前入力 → 設問ごとに回答入力 → 完了後にレポートを必要な回数だけ取得。

use crate::error::Result;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use interview_common::{
    InterviewClient, InterviewTransport, ReportRequest, SessionId, ViewState, REPORT_FILE_NAME,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// 対話式で面接を進める
pub async fn run_interactive_interview<T: InterviewTransport>(
    client: &mut InterviewClient<T>,
    name: Option<String>,
    report_dir: &Path,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("お名前（空欄なら Candidate）")
            .allow_empty(true)
            .interact_text()?,
    };

    let view = client.start(&name).await?;
    if let Some(intro) = &view.intro {
        println!("{}\n", intro);
    }

    let bar = progress_bar();
    while !client.view().is_complete() {
        let view = client.view();
        update_progress(&bar, view);

        let Some(card) = view.question.clone() else {
            break;
        };

        let answer: String = bar.suspend(|| {
            println!("\n{}", card.heading());
            println!("{}", card.text);
            Input::<String>::new()
                .with_prompt("回答")
                .allow_empty(true)
                .interact_text()
        })?;

        client.submit_answer(&answer).await?;
    }
    update_progress(&bar, client.view());
    bar.finish();

    let Some(panel) = client.view().completion.clone() else {
        return Ok(());
    };
    println!("\n{}", panel.message);

    let mut prompt = panel.download_label;
    let mut default_yes = true;
    while Confirm::new()
        .with_prompt(prompt.as_str())
        .default(default_yes)
        .interact()?
    {
        let bytes = client.download_report().await?;
        let path = save_report(report_dir, &bytes)?;
        println!("✔ レポートを保存: {}", path.display());

        prompt = "もう一度ダウンロードしますか？".to_string();
        default_yes = false;
    }

    Ok(())
}

/// 完了済みセッションのレポートを取得して保存
pub async fn download_session_report<T: InterviewTransport>(
    transport: &T,
    session_id: SessionId,
    report_dir: &Path,
) -> Result<PathBuf> {
    let bytes = transport
        .download_report(&ReportRequest { session_id })
        .await?;
    save_report(report_dir, &bytes)
}

/// レポートPDFを保存（ファイル名は常に Excel_Report.pdf、既存は上書き）
pub fn save_report(report_dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(report_dir)?;
    let path = report_dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), size = bytes.len(), "report saved");
    Ok(path)
}

/// 進捗バーの位置（表示用。NaN/∞ は0、範囲外はバーの端に寄せる）
pub fn bar_position(percent: f64) -> u64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) as u64
    } else {
        0
    }
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    bar
}

fn update_progress(bar: &ProgressBar, view: &ViewState) {
    bar.set_position(bar_position(view.progress_percent));
    bar.set_message(view.progress_width());
}
