//! # Docflow CLI (`dfl`)
//!
//! Console front end for the docflow core. Every command opens the store
//! from the `--file` path, calls one core operation, and renders the
//! result; no workflow logic lives here.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dfl add <title>` | Create a document in Draft status |
//! | `dfl list` | Show all documents, sorted by id |
//! | `dfl set-status <id> <status>` | Apply a lifecycle transition |
//! | `dfl history <id>` | Print a document's audit trail |
//! | `dfl find <status>` | Find documents by current status |
//!
//! ## Examples
//!
//! ```bash
//! dfl add "Quarterly report" --description "Q3 numbers"
//! dfl set-status 1 review --comment "sent to finance"
//! dfl set-status 1 approved
//! dfl history 1
//! dfl find approved --file ./team/documents.json
//! ```

mod add;
mod find;
mod history;
mod list;
mod set_status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docflow_core::{DocumentStatus, FileStore, LoadOutcome, DEFAULT_STORE_FILE};

/// Docflow CLI — track documents through a fixed approval lifecycle
/// (draft → review → approved/rejected → archived).
///
/// State lives in a single human-readable JSON file, selected with the
/// global `--file` flag.
#[derive(Parser)]
#[command(
    name = "dfl",
    about = "Docflow — track documents through a fixed approval lifecycle",
    version,
    long_about = "Docflow tracks documents through a fixed approval lifecycle \
    (draft, review, approved, rejected, archived), keeping a per-document audit \
    trail of every transition. State persists to a single human-readable JSON \
    file that is rewritten on every change."
)]
struct Cli {
    /// Path to the JSON backing file.
    ///
    /// Created on the first change if it does not exist. A malformed file
    /// is not fatal: the store starts empty and the file is rewritten on
    /// the next change.
    #[arg(long, global = true, default_value = DEFAULT_STORE_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a new document in Draft status.
    ///
    /// The title must not be empty. The new document gets the next free
    /// id and a creation entry in its audit trail.
    Add {
        /// Document title.
        title: String,

        /// Free-form description.
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List all documents, sorted by id.
    List,

    /// Change a document's status, appending to its audit trail.
    ///
    /// Any status can be set from any other — the workflow enforces no
    /// transition order, and setting the current status again still
    /// records an entry.
    SetStatus {
        /// Document id.
        id: u64,

        /// New status: draft, review, approved, rejected, or archived.
        status: DocumentStatus,

        /// Comment recorded alongside the transition.
        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Show a document's audit trail.
    History {
        /// Document id.
        id: u64,
    },

    /// Find documents by current status.
    Find {
        /// Status to match: draft, review, approved, rejected, or archived.
        status: DocumentStatus,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut store = FileStore::open(&cli.file);
    if store.load_outcome() == LoadOutcome::Recovered {
        eprintln!(
            "warning: could not read {}; starting with an empty store",
            cli.file.display()
        );
    }

    match cli.command {
        Commands::Add { title, description } => add::run_add(&mut store, &title, &description)?,
        Commands::List => list::run_list(&store),
        Commands::SetStatus {
            id,
            status,
            comment,
        } => set_status::run_set_status(&mut store, id, status, &comment)?,
        Commands::History { id } => history::run_history(&store, id)?,
        Commands::Find { status } => find::run_find(&store, status),
    }

    Ok(())
}
