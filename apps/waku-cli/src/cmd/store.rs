pub use query::StoreQueryCmd;

pub(crate) mod query;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum StoreCommand {
    /// Query the message history of a store node
    Query(StoreQueryCmd),
}
