use crate::cmd::keys::KeysCommand;
use crate::cmd::store::StoreCommand;

#[derive(Debug, Clone, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (toml, json, json5 or yaml)
    #[arg(short = 'C', long, global = true, env = "WAKU_CONFIG_FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    Store(StoreCommand),
    #[command(subcommand)]
    Keys(KeysCommand),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use clap::Parser;

    use crate::cmd::store::StoreQueryCmd;

    use super::*;

    #[test]
    fn test_parse_store_query() {
        // When
        let cli = Cli::try_parse_from([
            "waku",
            "store",
            "query",
            "--peer",
            "/ip4/127.0.0.1/tcp/60000/p2p/16Uiu2HAmVFXtAfSj4EiR7mL2KvL4EE2wztuQgUSBoj2Jx2KeXFLN",
            "--content-topic",
            "/toy-chat/2/huilong/proto",
            "--content-topic",
            "/toy-chat/2/other/proto",
            "--page-size",
            "20",
            "--backward",
            "--limit",
            "50",
        ])
        .unwrap();

        // Then
        assert_matches!(
            cli.command,
            Commands::Store(StoreCommand::Query(StoreQueryCmd {
                content_topics,
                page_size: Some(20),
                backward: true,
                limit: Some(50),
                ..
            })) if content_topics.len() == 2
        );
    }

    #[test]
    fn test_parse_keys_generate() {
        // When
        let cli = Cli::try_parse_from(["waku", "keys", "generate"]).unwrap();

        // Then
        assert_matches!(cli.command, Commands::Keys(KeysCommand::Generate(_)));
    }
}
