pub mod catalog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod parser;
pub mod reconcile;
pub mod schema;
pub mod seed;
pub mod stats;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands, SeedArgs, SeedStep};
pub use config::Config;
pub use ui::{LogUi, Phase, SilentUi, Ui, UiApp};
