use anyhow::Result;
use clap::{Parser, Subcommand};
use groot::areas::repository::Repository;
use groot::artifacts::core::Output;
use groot::commands::porcelain::log::LogOptions;
use tracing_subscriber::EnvFilter;

/// Tracing filter directive, e.g. `GROOT_LOG=debug`
const LOG_ENV: &str = "GROOT_LOG";

#[derive(Parser)]
#[command(
    name = "groot",
    version = "0.1.0",
    about = "A minimal content-addressable version control system",
    long_about = "groot stores file snapshots keyed by their SHA-1, stages them in a flat index \
    and records commits as a parent-linked chain. There are no branches, trees or remotes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
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
        long_about = "This command creates a .groot directory in the current directory or at the specified path. \
        Running it again leaves an existing repository untouched."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of each file and appends it to the index. \
        Staging a path again adds another entry for it."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staged files",
        long_about = "This command records the staged files with the specified message on top of HEAD \
        and clears the index."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists commits from HEAD back to the first commit, newest first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "show",
        about = "Show a commit and its changes",
        long_about = "This command prints every file of a commit and its line diff against the parent commit. \
        Abbreviated hashes are accepted."
    )]
    Show {
        #[arg(index = 1, help = "The commit hash")]
        commit: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the hash of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object hash to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store",
        long_about = "This command prints the object id of a file and can write it to the object store."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

fn current_dir() -> Result<String> {
    Ok(std::env::current_dir()?.to_string_lossy().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => current_dir()?,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { paths } => {
            let mut repository = Repository::new(&current_dir()?, Box::new(std::io::stdout()))?;

            repository.add(paths).await?
        }
        Commands::Commit { message } => {
            let mut repository = Repository::new(&current_dir()?, Box::new(std::io::stdout()))?;

            repository.commit(message.as_str()).await?;
        }
        Commands::Log { oneline } => {
            let output = Output::for_long_output();
            let repository = Repository::new(&current_dir()?, output.writer())?;

            repository.log(&LogOptions { oneline: *oneline })?;
            output.finish()?
        }
        Commands::Show { commit } => {
            let output = Output::for_long_output();
            let repository = Repository::new(&current_dir()?, output.writer())?;

            repository.show(commit)?;
            output.finish()?
        }
        Commands::CatFile { sha } => {
            let mut repository = Repository::new(&current_dir()?, Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let mut repository = Repository::new(&current_dir()?, Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?;
        }
    }

    Ok(())
}
