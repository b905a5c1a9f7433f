mod cat_file;
mod hash_object;
mod init;
mod ls_tree;
mod write_tree;

use std::env;
use std::fs;

use anyhow::{Context, Result};

use cat_file::cat_file;
use hash_object::hash_object;
use init::init;
use ls_tree::ls_tree;
use write_tree::write_tree;

use crate::Constants;
use crate::args::Command;
use crate::store::Store;

/// Calls the corresponding function to perform every command variant.
///
/// # Return
///
/// The success message
///
/// # Errors
///
/// This function will fail if any of the executed commands return an error.
pub fn execute_command(command: &Command) -> Result<String> {
    let work_dir = env::current_dir().context("could not get current directory")?;
    let repository = work_dir.join(Constants::REPOSITORY_FOLDER_NAME);

    if !fs::exists(&repository)? {
        if let Command::Init = command {
            // Only command that can be executed without a repository already existing
            return init(&repository);
        }
        return Ok("Folder is not a git repository".into());
    }

    let store = Store::open(&repository);
    match command {
        Command::Init => init(&repository), // always returns an "already a git repository"
        Command::HashObject { write, file } => hash_object(&store, file, *write),
        Command::CatFile { pretty, hash } => cat_file(&store, hash, *pretty),
        Command::WriteTree => write_tree(&store, &work_dir),
        Command::LsTree { name_only, hash } => ls_tree(&store, hash, *name_only),
    }
}
