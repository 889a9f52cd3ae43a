use anyhow::Result;
use clap::{Parser, Subcommand};
use nit::areas::repository::Repository;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "nit",
    version = "0.1.0",
    about = "A minimal content-addressable object store",
    long_about = "A minimal content-addressable object store reproducing the core \
    of a version-control object model: immutable, hash-identified blobs, trees \
    and commits, stored compressed under a two-level directory layout.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new object store",
        long_about = "This command creates the store skeleton (objects/, refs/ and the HEAD \
        pointer) in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the store root")]
        path: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the store. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file's content as a blob and can write it to \
        the object database. It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the entries of a tree object",
        long_about = "This command lists the entries of a tree object, one per line, \
        in their stored (canonical) order."
    )]
    LsTree {
        #[arg(long, help = "Print only entry names")]
        name_only: bool,
        #[arg(index = 1, help = "The tree SHA to list")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Build tree objects from the working directory",
        long_about = "This command recursively turns files into blob objects and \
        directories into tree objects, then prints the root tree SHA."
    )]
    WriteTree {
        #[arg(index = 1, help = "Subtree to build instead of the whole directory")]
        path: Option<String>,
    },
    #[command(
        name = "commit-tree",
        about = "Create a commit object from a tree SHA",
        long_about = "This command assembles a commit object referencing an existing tree, \
        with an optional parent commit, and prints the new commit SHA."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree SHA to commit")]
        tree: String,
        #[arg(short, long, help = "The parent commit SHA")]
        parent: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(long, help = "Verify that the tree and parent exist in the database")]
        verify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::CatFile { sha } => {
            let mut repository = repository_at_pwd()?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let mut repository = repository_at_pwd()?;

            repository.hash_object(file, *write)?
        }
        Commands::LsTree { name_only, sha } => {
            let mut repository = repository_at_pwd()?;

            repository.ls_tree(sha, *name_only)?
        }
        Commands::WriteTree { path } => {
            let mut repository = repository_at_pwd()?;

            repository.write_tree(path.as_deref().map(Path::new))?;
        }
        Commands::CommitTree {
            tree,
            parent,
            message,
            verify,
        } => {
            let mut repository = repository_at_pwd()?;

            repository.commit_tree(tree, parent.as_deref(), message, *verify)?;
        }
    }

    Ok(())
}

fn repository_at_pwd() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}
