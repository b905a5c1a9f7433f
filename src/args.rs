use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Contains the commands passed to the program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// A list of subcommands the program can perform
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates a new repository
    Init,

    /// Computes the blob address for a file's content
    HashObject {
        /// Writes the blob to the object store instead of only computing its address
        #[arg(short = 'w')]
        write: bool,
        /// File whose content will be hashed
        file: PathBuf,
    },

    /// Shows the payload of the object with the specified address
    CatFile {
        /// Pretty-prints the object's payload
        #[arg(short = 'p')]
        pretty: bool,
        /// Address of the object to show
        hash: String,
    },

    /// Writes the working directory as a recursively hashed tree object
    WriteTree,

    /// Lists the immediate entries of a tree object
    LsTree {
        /// Shows only entry names
        #[arg(long)]
        name_only: bool,
        /// Address of the tree to list
        hash: String,
    },
}
