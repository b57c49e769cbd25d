use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lavka")]
#[command(author, version, about = "Telegram shopping bot with a per-user cart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling
    Run,

    /// Load the menu file and check it can be served by the bot
    CheckCatalog {
        /// Menu file to check (defaults to CATALOG_PATH, then the built-in menu)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the menu the bot would serve
    PrintCatalog {
        /// Menu file to print (defaults to CATALOG_PATH, then the built-in menu)
        #[arg(short, long)]
        path: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
