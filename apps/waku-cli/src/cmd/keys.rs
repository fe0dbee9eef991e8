pub use generate::KeysGenerateCmd;

pub(crate) mod generate;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum KeysCommand {
    /// Generate a symmetric key and a secp256k1 key pair for payload encryption
    Generate(KeysGenerateCmd),
}
