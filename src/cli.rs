use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brand-onboard")]
#[command(about = "ブランド一括登録CSVアップロードツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先サーバー（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVファイルをアップロードして行ごとの結果を表示
    Upload {
        /// CSVファイル（省略時は対話入力）
        file: Option<PathBuf>,

        /// 行ごとの結果をJSONで保存
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// CSVテンプレートを出力
    Template {
        /// 出力ファイル（デフォルト: ./brand_template.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ファイルではなく標準出力に出す
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// 設定管理
    Config {
        /// 接続先サーバーを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
