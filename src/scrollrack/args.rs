use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollrack")]
#[command(about = "Keep your card collections in order", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collections in the library
    #[command(alias = "ls")]
    List,

    /// Create an empty collection
    #[command(alias = "n")]
    New {
        /// Name of the collection (or a path ending in .csv)
        name: String,
    },

    /// Print a collection as a table
    #[command(alias = "v")]
    Show {
        name: String,

        /// Column to sort the view by (not saved)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Only show rows where COLUMN contains TEXT (e.g. rarity=M)
        #[arg(short = 'w', long = "where", value_name = "COLUMN=TEXT")]
        filter: Option<String>,
    },

    /// Sort a collection and save it
    Sort {
        name: String,

        /// Column to sort by: name, cost, set, rarity, mv, color, released
        #[arg(short, long)]
        by: String,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Search the card database
    #[command(alias = "s")]
    Search {
        /// Query in Scryfall syntax (e.g. "t:goblin lang:en")
        query: String,

        /// Stop after this many cards (defaults to the max-cards setting)
        #[arg(short, long)]
        max: Option<usize>,

        /// Save the results to the library under this name
        #[arg(long, value_name = "NAME")]
        save_as: Option<String>,
    },

    /// Append every card of SOURCE to TARGET
    Add { target: String, source: String },

    /// Copy matching cards from SOURCE to the end of TARGET
    #[command(alias = "cp")]
    Copy {
        source: String,
        target: String,

        /// Rows where COLUMN contains TEXT (e.g. name=goblin)
        #[arg(short = 'w', long = "where", value_name = "COLUMN=TEXT")]
        filter: String,
    },

    /// Move matching cards from SOURCE to the end of TARGET
    #[command(alias = "mv")]
    Move {
        source: String,
        target: String,

        /// Rows where COLUMN contains TEXT (e.g. name=goblin)
        #[arg(short = 'w', long = "where", value_name = "COLUMN=TEXT")]
        filter: String,
    },

    /// Remove matching cards from a collection
    #[command(alias = "rm")]
    Drop {
        name: String,

        /// Rows where COLUMN contains TEXT (e.g. name=goblin)
        #[arg(short = 'w', long = "where", value_name = "COLUMN=TEXT")]
        filter: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (library-dir, max-cards, request-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
