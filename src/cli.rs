//! Command line options for the gh-forks tool
use crate::client::GithubClient;
use crate::config::Config;
use crate::errors::GhForksError;
use crate::options::{ApiOptions, ForkListFilter, ForkSort};
use crate::repo::{NewFork, Repository};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use futures::{Stream, StreamExt};
use std::path::PathBuf;
use std::pin::Pin;

/// gh-forks - List and create GitHub repository forks
#[derive(Parser, Clone, Debug)]
pub struct GhForksCli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Option<ForksCommand>,

    /// Github token (overrides the environment and the config file)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Operations on the forks resource.
#[derive(Subcommand, Clone, Debug)]
pub enum ForksCommand {
    /// List the forks of a repository
    List {
        /// Repository as `owner/name` or a numeric id
        repo: String,

        /// Sort order (newest, oldest, stargazers, watchers)
        #[arg(short, long)]
        sort: Option<ForkSort>,

        /// Number of items per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Page to start fetching from
        #[arg(long)]
        start_page: Option<u32>,

        /// Maximum number of pages to fetch
        #[arg(long)]
        page_count: Option<u32>,
    },

    /// Fork a repository
    Create {
        /// Repository as `owner/name` or a numeric id
        repo: String,

        /// Organization to fork into
        #[arg(short, long)]
        organization: Option<String>,

        /// Name of the new fork
        #[arg(long)]
        name: Option<String>,

        /// Only fork the default branch
        #[arg(long)]
        default_branch_only: bool,
    },
}

/// Repository argument, parsed from `owner/name` or a numeric id.
enum RepoArg {
    /// Addressed by owner and name.
    Full(String, String),
    /// Addressed by numeric id.
    Id(u64),
}

/// Parse a repository argument.
fn parse_repo(repo: &str) -> Result<RepoArg, GhForksError> {
    if let Ok(id) = repo.parse::<u64>() {
        return Ok(RepoArg::Id(id));
    }
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok(RepoArg::Full(owner.to_string(), name.to_string()))
        }
        _ => Err("Expected `owner/name` or a numeric repository id".into()),
    }
}

/// Run the gh-forks tool with the provided command line options
///
/// # Errors
/// Error if the configuration can't be loaded or the operation fails
pub async fn gh_forks_main() -> Result<(), GhForksError> {
    dotenv().ok();
    let args = GhForksCli::parse();
    env_logger::builder()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .format_target(false)
        .format_timestamp(None)
        .init();
    let mut config = match &args.config {
        Some(path_str) => Config::new_from_path(&PathBuf::from(path_str))?,
        None => Config::try_new()?,
    };
    if args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    let Some(command) = args.command else {
        return Err("No command provided, see --help".into());
    };
    let token = config.resolve_token(args.token.clone())?;
    let forks = GithubClient::new(token).forks();
    match command {
        ForksCommand::List {
            repo,
            sort,
            page_size,
            start_page,
            page_count,
        } => {
            let options = ApiOptions {
                page_size,
                start_page,
                page_count,
            };
            let filter = sort.map(|sort| ForkListFilter { sort: Some(sort) });
            let mut stream: Pin<
                Box<dyn Stream<Item = Result<Repository, GhForksError>> + Send>,
            > = match parse_repo(&repo)? {
                RepoArg::Id(id) => Box::pin(forks.list_by_id(id, filter.as_ref(), options)?),
                RepoArg::Full(owner, name) => {
                    Box::pin(forks.list(&owner, &name, filter.as_ref(), options)?)
                }
            };
            let mut count: usize = 0;
            while let Some(fork) = stream.next().await {
                let fork = fork?;
                println!("{}", fork.full_name);
                count += 1;
            }
            println!("{count} forks");
        }
        ForksCommand::Create {
            repo,
            organization,
            name,
            default_branch_only,
        } => {
            let new_fork = NewFork {
                organization,
                name,
                default_branch_only: default_branch_only.then_some(true),
            };
            let created = match parse_repo(&repo)? {
                RepoArg::Id(id) => forks.create_by_id(id, &new_fork).await?,
                RepoArg::Full(owner, repo_name) => {
                    forks.create(&owner, &repo_name, &new_fork).await?
                }
            };
            println!("Created fork {}", created.full_name);
        }
    }
    Ok(())
}
