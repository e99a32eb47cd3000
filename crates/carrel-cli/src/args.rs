//! Command-line argument definitions using clap
//!
//! CLI argument structures wrap the core parameter types: clap-specific
//! concerns (flags, help text, value parsing) live here, and each wrapper
//! converts into its interface-agnostic `carrel_core::params` counterpart via
//! `From`, keeping the core free of CLI framework derives.

use std::path::PathBuf;

use carrel_core::params::{CreateClass, DeleteClass, Id, SetDocumentStatus, UpdateClass};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Main command-line interface for the Carrel study tracker
///
/// Carrel keeps your PDFs and study progress in one local database: register
/// documents, group them into classes, and toggle each one between to-study
/// and done while the per-class progress counters stay in sync.
#[derive(Parser)]
#[command(version, about, name = "carrel")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/carrel/carrel.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Carrel CLI
///
/// The CLI is organized into two command categories:
/// - `class`: Operations for managing classes (create, list, update, delete)
/// - `doc`: Operations for managing documents within classes
#[derive(Subcommand)]
pub enum Commands {
    /// Manage classes
    #[command(alias = "c")]
    Class {
        #[command(subcommand)]
        command: ClassCommands,
    },
    /// Manage documents
    #[command(alias = "d")]
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
}

/// Create a new class
#[derive(ClapArgs)]
pub struct CreateClassArgs {
    /// Name of the class
    pub name: String,
    /// Pin the class for display priority
    #[arg(long)]
    pub pinned: bool,
}

impl From<CreateClassArgs> for CreateClass {
    fn from(val: CreateClassArgs) -> Self {
        CreateClass {
            name: val.name,
            is_pinned: val.pinned,
        }
    }
}

/// List all classes
///
/// Classes are shown pinned-first, then alphabetically by name.
#[derive(ClapArgs)]
pub struct ListClassesArgs {
    /// Show only pinned classes
    #[arg(long)]
    pub pinned: bool,
}

/// Show details of a specific class, including its documents
#[derive(ClapArgs)]
pub struct ShowClassArgs {
    /// ID of the class to display
    #[arg(help = "Unique identifier of the class to show details for")]
    pub id: u64,
}

impl From<ShowClassArgs> for Id {
    fn from(val: ShowClassArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a class's name or pin flag
#[derive(ClapArgs)]
pub struct UpdateClassArgs {
    /// ID of the class to update
    pub id: u64,
    /// New name for the class
    #[arg(short, long)]
    pub name: Option<String>,
    /// Pin the class
    #[arg(long, conflicts_with = "unpin")]
    pub pin: bool,
    /// Unpin the class
    #[arg(long)]
    pub unpin: bool,
}

impl From<UpdateClassArgs> for UpdateClass {
    fn from(val: UpdateClassArgs) -> Self {
        let is_pinned = if val.pin {
            Some(true)
        } else if val.unpin {
            Some(false)
        } else {
            None
        };

        UpdateClass {
            id: val.id,
            name: val.name,
            is_pinned,
        }
    }
}

/// Delete a class permanently
///
/// Deleting a class also deletes every document in it.
#[derive(ClapArgs)]
pub struct DeleteClassArgs {
    /// ID of the class to delete
    #[arg(help = "Unique identifier of the class to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental cascade deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteClassArgs> for DeleteClass {
    fn from(val: DeleteClassArgs) -> Self {
        DeleteClass {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ClassCommands {
    /// Create a new class
    #[command(alias = "c")]
    Create(CreateClassArgs),
    /// List all classes
    #[command(aliases = ["l", "ls"])]
    List(ListClassesArgs),
    /// Show details of a specific class
    #[command(alias = "s")]
    Show(ShowClassArgs),
    /// Update a class's name or pin flag
    #[command(alias = "u")]
    Update(UpdateClassArgs),
    /// Delete a class permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteClassArgs),
}

/// Add a PDF file as a new document
///
/// Reads the file's bytes and metadata; the document starts as to-study.
#[derive(ClapArgs)]
pub struct AddDocArgs {
    /// Path to the PDF file to add
    pub file: PathBuf,
    /// Class to associate the document with
    #[arg(short, long)]
    pub class: Option<u64>,
}

/// List documents
#[derive(ClapArgs)]
pub struct ListDocsArgs {
    /// Only documents belonging to this class
    #[arg(short, long)]
    pub class: Option<u64>,
    /// Only documents with this status
    #[arg(short, long)]
    pub status: Option<DocumentStatusArg>,
}

/// Show details of a specific document
#[derive(ClapArgs)]
pub struct ShowDocArgs {
    /// ID of the document to display
    pub id: u64,
}

impl From<ShowDocArgs> for Id {
    fn from(val: ShowDocArgs) -> Self {
        Id { id: val.id }
    }
}

/// Set a document's study status
#[derive(ClapArgs)]
pub struct DocStatusArgs {
    /// ID of the document to update
    pub id: u64,
    /// New status for the document
    pub status: DocumentStatusArg,
}

impl From<DocStatusArgs> for SetDocumentStatus {
    fn from(val: DocStatusArgs) -> Self {
        SetDocumentStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Delete a document
#[derive(ClapArgs)]
pub struct DeleteDocArgs {
    /// ID of the document to delete
    pub id: u64,
}

impl From<DeleteDocArgs> for Id {
    fn from(val: DeleteDocArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Add a PDF file as a new document
    #[command(alias = "a")]
    Add(AddDocArgs),
    /// List documents
    #[command(aliases = ["l", "ls"])]
    List(ListDocsArgs),
    /// Show details of a specific document
    #[command(alias = "s")]
    Show(ShowDocArgs),
    /// Set a document's study status
    #[command(alias = "st")]
    Status(DocStatusArgs),
    /// Delete a document
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteDocArgs),
}

/// Command-line argument representation of document status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DocumentStatusArg {
    /// Mark document as to-study
    ToStudy,
    /// Mark document as done
    Done,
}

impl std::fmt::Display for DocumentStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatusArg::ToStudy => write!(f, "to-study"),
            DocumentStatusArg::Done => write!(f, "done"),
        }
    }
}
