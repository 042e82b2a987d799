use anyhow::Result;
use clap::{Parser, Subcommand};
use kommito::areas::remote::GitCliFetcher;
use kommito::areas::repository::Repository;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KOMMITO_LOG";

#[derive(Parser)]
#[command(
    name = "kommito",
    version = "0.1.0",
    about = "A minimal local version control system",
    long_about = "Kommito snapshots the files of a working directory into content-addressed \
    storage, keeps named branches, restores the working directory and merges the files \
    of two branches.",
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
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage a file, or every top-level file with '.'",
        long_about = "This command stores the content of a file as a blob and appends it to the index. \
        Passing '.' stages every regular top-level file of the working directory."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage, or '.'")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the index into a new commit and points HEAD at it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit HEAD points at")]
    Log,
    #[command(
        name = "status",
        about = "Show staged, modified and untracked files"
    )]
    Status,
    #[command(
        name = "clone",
        about = "Clone a Kommito repository or import a Git remote",
        long_about = "This command copies a local Kommito repository into the destination. \
        Sources starting with 'http' or 'git@' are fetched with git and committed as a new repository."
    )]
    Clone {
        #[arg(index = 1, help = "The source repository path or URL")]
        source: String,
        #[arg(index = 2, help = "The destination directory")]
        destination: String,
    },
    #[command(name = "branch", about = "List, create, switch or delete branches")]
    Branch {
        #[command(subcommand)]
        command: BranchCommands,
    },
    #[command(
        name = "checkout",
        about = "Restore the working directory for a branch or commit"
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit hash")]
        target: String,
    },
    #[command(
        name = "merge",
        about = "Merge the files of a branch into the working directory"
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints a stored blob or commit. \
        It requires the object type and the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(index = 1, help = "The object type (blob or commit)")]
        object_type: String,
        #[arg(index = 2, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file and can write it to the object database as a blob. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

#[derive(Subcommand)]
enum BranchCommands {
    #[command(name = "list", about = "List all branches")]
    List,
    #[command(name = "create", about = "Create a branch from the current HEAD")]
    Create {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "switch", about = "Point HEAD at a branch")]
    Switch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "delete", about = "Delete a branch")]
    Delete {
        #[arg(index = 1)]
        name: String,
    },
}

fn is_remote_source(source: &str) -> bool {
    source.starts_with("http") || source.starts_with("git@")
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    match path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout())),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => open_repository(path.as_deref())?.init()?,
        Commands::Add { path } => {
            open_repository(None)?.add(path)?;
        }
        Commands::Commit { message } => {
            open_repository(None)?.commit(message)?;
        }
        Commands::Log => {
            open_repository(None)?.log()?;
        }
        Commands::Status => {
            open_repository(None)?.status()?;
        }
        Commands::Clone {
            source,
            destination,
        } => {
            let repository = open_repository(Some(destination))?;

            if is_remote_source(source) {
                repository.clone_remote(source, &GitCliFetcher::default())?;
            } else {
                repository.clone_local(Path::new(source))?;
            }
        }
        Commands::Branch { command } => {
            let repository = open_repository(None)?;

            match command {
                BranchCommands::List => {
                    repository.list_branches()?;
                }
                BranchCommands::Create { name } => repository.create_branch(name)?,
                BranchCommands::Switch { name } => repository.switch_branch(name)?,
                BranchCommands::Delete { name } => repository.delete_branch(name)?,
            }
        }
        Commands::Checkout { target } => {
            open_repository(None)?.checkout(target)?;
        }
        Commands::Merge { branch } => {
            open_repository(None)?.merge(branch)?;
        }
        Commands::CatFile { object_type, sha } => {
            open_repository(None)?.cat_file(object_type, sha)?
        }
        Commands::HashObject { write, file } => {
            open_repository(None)?.hash_object(file, *write)?;
        }
    }

    Ok(())
}
