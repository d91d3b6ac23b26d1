use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snipz")]
#[command(about = "Store, run, and manage small named shell snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a snippet through the host shell
    #[command(alias = "r")]
    Run {
        /// Name of the snippet
        name: String,

        /// Arguments forwarded to the script as $1, $2, ...
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print a snippet's content
    #[command(alias = "p")]
    Print {
        /// Name of the snippet
        name: String,
    },

    /// Copy a snippet to the system clipboard
    #[command(alias = "c")]
    Copy {
        /// Name of the snippet
        name: String,
    },

    /// Open a snippet in the editor (creates it if missing)
    #[command(alias = "e")]
    Edit {
        /// Name of the snippet
        name: String,
    },

    /// Delete a snippet
    #[command(alias = "d")]
    Delete {
        /// Name of the snippet
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    #[command(alias = "cfg")]
    Config {
        /// Configuration key (e.g., editor)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    // A bare snippet name (legacy direct invocation): create it if missing,
    // otherwise present the action menu.
    #[command(external_subcommand)]
    Direct(Vec<String>),
}
