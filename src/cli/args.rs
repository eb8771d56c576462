// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use multab_domain::Limits;

use super::{
    parsers::{parse_limit, parse_span},
    value_enum::CliOutputFormat,
};

/// Top-level CLI arguments parsed via clap.
///
/// The four range values are taken as strings so that missing or non-numeric
/// input is reported by range validation rather than by clap.
#[derive(Parser, Debug)]
#[command(
    name = "multab",
    version = crate::VERSION,
    about = "範囲指定の掛け算表を検証して出力します",
    allow_negative_numbers = true
)]
pub struct Args {
    /// 行の開始値
    #[arg(value_name = "ROW_START", conflicts_with = "interactive")]
    pub row_start: Option<String>,

    /// 行の終了値
    #[arg(value_name = "ROW_END")]
    pub row_end: Option<String>,

    /// 列の開始値
    #[arg(value_name = "COLUMN_START")]
    pub column_start: Option<String>,

    /// 列の終了値
    #[arg(value_name = "COLUMN_END")]
    pub column_end: Option<String>,

    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 各値の下限
    #[arg(long, value_parser = parse_limit, default_value_t = Limits::DEFAULT_MIN, help_heading = "検証")]
    pub min: i32,

    /// 各値の上限
    #[arg(long, value_parser = parse_limit, default_value_t = Limits::DEFAULT_MAX, help_heading = "検証")]
    pub max: i32,

    /// 終了値 - 開始値 の最大幅
    #[arg(long, value_parser = parse_span, default_value_t = Limits::DEFAULT_MAX_SPAN, help_heading = "検証")]
    pub max_span: u32,

    /// 標準入力から "行開始 行終了 列開始 列終了" を1行ずつ読み込む
    #[arg(short, long, help_heading = "動作")]
    pub interactive: bool,

    /// ログ出力を詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
