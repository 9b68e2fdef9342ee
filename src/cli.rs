use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "booking-nav")]
#[command(about = "Navigation chrome for the booking client", long_about = None)]
pub struct NavApp {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List navigation entries
    Items {
        /// Filter patterns (regex on id or label)
        patterns: Vec<String>,
        /// Entry to mark as active
        #[arg(long)]
        active: Option<String>,
    },
    /// Find entries matching a pattern (fuzzy)
    Resolve {
        /// Part of an id or label
        pattern: String,
    },
    /// Replay UI events through the navigation state
    Simulate {
        /// Active entry before the first event
        #[arg(long)]
        active: Option<String>,
        /// Events: enter, leave, toggle, select:<id>, menu:<id>
        #[arg(required = true)]
        events: Vec<String>,
    },
    /// Pick an entry interactively
    Pick {
        /// Entry to mark as active
        #[arg(long)]
        active: Option<String>,
    },
    /// Launch the navigation shell
    Gui {
        /// Name shown in the profile section
        #[arg(long)]
        user_name: Option<String>,
        /// Role shown under the name
        #[arg(long)]
        user_role: Option<String>,
        /// Entry active at startup
        #[arg(long)]
        active: Option<String>,
    },
    /// Print version
    Version,
}
