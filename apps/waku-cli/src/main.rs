use clap::Parser;
use log::{info, LevelFilter};

use crate::cli::{Cli, Commands};
use crate::cmd::keys::KeysCommand;
use crate::cmd::store::StoreCommand;

mod cli;
mod cmd;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let conf = config::load(cli.config_file.as_deref())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl-c received, shutting down");
            Ok(())
        }

        res = run(cli.command, conf) => res,
    }
}

async fn run(command: Commands, conf: config::WakuCliConf) -> anyhow::Result<()> {
    match command {
        Commands::Store(StoreCommand::Query(args)) => cmd::store::query::run_cmd(args, conf).await,
        Commands::Keys(KeysCommand::Generate(args)) => cmd::keys::generate::run_cmd(args),
    }
}
