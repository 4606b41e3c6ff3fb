use anyhow::Result;
use clap::Parser;

use verso::cli::{Cli, Commands};
use verso::config::init_config;
use verso::runtime::modes::{run_config_gen, run_server};
use verso::system::logging::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::ConfigGen { output, force } => run_config_gen(&output, force),
        Commands::Serve => {
            // 配置缺失时在绑定端口之前退出
            let config = init_config(&cli.config)?;
            let _guard = init_logging(&config.logging)?;
            tracing::info!("Verso API v{} starting", env!("CARGO_PKG_VERSION"));
            run_server(&config).await
        }
    }
}
