use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "interview-client")]
#[command(about = "AI面接サービスの対話クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 面接サービスのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 面接を開始して設問に回答
    Run {
        /// 候補者名（省略時は入力を求める。空なら "Candidate"）
        #[arg(short, long)]
        name: Option<String>,

        /// レポート保存先フォルダ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 完了済みセッションのレポートを再取得
    Report {
        /// セッションID
        #[arg(short, long, required = true)]
        session_id: String,

        /// レポート保存先フォルダ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 面接サービスのURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// レポート保存先フォルダを設定
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
