use anyhow::Result;
use aoc_helper::cli::{self, Cli};
use aoc_helper::{logger, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    if let Some(root) = cli.root.clone() {
        config.workspace_root = root;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    cli::run(cli.command, config).await?;

    Ok(())
}
