//! Command handlers bridging parsed arguments to the core tracker.

use anyhow::{Context, Result};
use carrel_core::{
    params::{AddDocument, Id},
    Tracker,
};
use jiff::Timestamp;

use crate::args::{ClassCommands, DocCommands, DocumentStatusArg, ListDocsArgs};

/// Command dispatcher holding the tracker instance.
pub struct Cli {
    tracker: Tracker,
}

impl Cli {
    /// Create a new command dispatcher.
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// Handle a `class` subcommand.
    pub async fn handle_class_command(&self, command: ClassCommands) -> Result<()> {
        match command {
            ClassCommands::Create(args) => {
                let class = self.tracker.add_class(&args.into()).await?;
                print!("Created class:\n\n{class}");
            }
            ClassCommands::List(args) => {
                self.list_classes(args.pinned).await?;
            }
            ClassCommands::Show(args) => {
                let params: Id = args.into();
                match self.tracker.get_class(&params).await? {
                    Some(class) => {
                        let documents = self.tracker.get_documents_for_class(&params).await?;
                        print!("{class}\n{documents}");
                    }
                    None => println!("Class {} not found.", params.id),
                }
            }
            ClassCommands::Update(args) => {
                let params = args.into();
                self.tracker.update_class(&params).await?;
                match self.tracker.get_class(&Id { id: params.id }).await? {
                    Some(class) => print!("Updated class:\n\n{class}"),
                    None => println!("Class {} not found.", params.id),
                }
            }
            ClassCommands::Delete(args) => {
                match self.tracker.delete_class(&args.into()).await? {
                    Some((class, removed)) => {
                        println!(
                            "Deleted class '{}' and {} document(s).",
                            class.name, removed
                        );
                    }
                    None => println!("Class not found."),
                }
            }
        }
        Ok(())
    }

    /// Handle a `doc` subcommand.
    pub async fn handle_doc_command(&self, command: DocCommands) -> Result<()> {
        match command {
            DocCommands::Add(args) => {
                let params = read_document(&args.file, args.class)?;
                let document = self.tracker.add_document(&params).await?;
                print!("Added document:\n\n{document}");
            }
            DocCommands::List(args) => {
                self.list_documents(args).await?;
            }
            DocCommands::Show(args) => {
                let params: Id = args.into();
                match self.tracker.get_document(&params).await? {
                    Some(document) => print!("{document}"),
                    None => println!("Document {} not found.", params.id),
                }
            }
            DocCommands::Status(args) => {
                let params = args.into();
                self.tracker.set_document_status(&params).await?;
                println!("Document {} is now {}.", params.id, params.status);
            }
            DocCommands::Delete(args) => {
                let params: Id = args.into();
                self.tracker.delete_document(&params).await?;
                println!("Deleted document {}.", params.id);
            }
        }
        Ok(())
    }

    /// List classes pinned-first, optionally restricted to pinned ones.
    pub async fn list_classes(&self, pinned_only: bool) -> Result<()> {
        let mut classes = self.tracker.get_classes().await?;

        if pinned_only {
            classes = carrel_core::Classes(classes.into_iter().filter(|c| c.is_pinned).collect());
        }
        classes.sort_for_display();

        print!("{classes}");
        Ok(())
    }

    async fn list_documents(&self, args: ListDocsArgs) -> Result<()> {
        let documents = match args.class {
            Some(class_id) => {
                self.tracker
                    .get_documents_for_class(&Id { id: class_id })
                    .await?
            }
            None => self.tracker.get_documents().await?,
        };

        let documents = match args.status {
            Some(status) => {
                let wanted = match status {
                    DocumentStatusArg::ToStudy => carrel_core::DocumentStatus::ToStudy,
                    DocumentStatusArg::Done => carrel_core::DocumentStatus::Done,
                };
                carrel_core::Documents(
                    documents.into_iter().filter(|d| d.status == wanted).collect(),
                )
            }
            None => documents,
        };

        print!("{documents}");
        Ok(())
    }
}

/// Read a PDF file into an AddDocument parameter set.
fn read_document(path: &std::path::Path, class_id: Option<u64>) -> Result<AddDocument> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read file '{}'", path.display()))?;
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for '{}'", path.display()))?;

    let last_modified = metadata
        .modified()
        .ok()
        .and_then(|mtime| Timestamp::try_from(mtime).ok())
        .unwrap_or_else(Timestamp::now);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(AddDocument {
        name,
        size: content.len() as u64,
        last_modified,
        content,
        class_id,
    })
}
