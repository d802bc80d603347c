use anyhow::Result;
use clap::Parser;

use signer_pipeline::{
    cli::{execute_run, render_summary, Cli},
    services::init_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.debug)?;

    // 固定チェーンを実行し、最終値と経過秒数を出力
    match execute_run(&cli).await {
        Ok(summary) => {
            println!("{}", render_summary(&summary, cli.format)?);
        }
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}
