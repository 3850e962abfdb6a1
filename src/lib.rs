//! # gh-forks
//!
//! List and create GitHub repository forks
//!
//! The forks resource is exposed through [`GithubClient::forks`]: list
//! operations return a lazy stream over every page of forks, create
//! operations return the new repository record. Nothing touches the
//! network before the stream or future is consumed.
//!
//! ## Usage
//!
//! ```txt
//! Usage: gh-forks [OPTIONS] [COMMAND]
//!
//! Commands:
//!   list    List the forks of a repository
//!   create  Fork a repository
//!   help    Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -t, --token <TOKEN>     Github token (overrides the environment and the config file)
//!   -c, --config <CONFIG>   Custom configuration file path
//!       --show-config-path  Show the current config path
//!   -v, --verbose...        Verbose mode (-v, -vv, -vvv)
//!   -h, --help              Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod connection;
pub(crate) mod errors;
pub(crate) mod forks;
pub(crate) mod options;
pub(crate) mod repo;
pub(crate) mod transport;

pub mod urls;

pub use cli::{gh_forks_main, ForksCommand, GhForksCli};
pub use client::GithubClient;
pub use config::{Config, ConfigData, GithubConfig};
pub use connection::Connection;
pub use errors::GhForksError;
pub use forks::{ForksApi, ForksClient};
pub use options::{ApiOptions, ForkListFilter, ForkSort};
pub use repo::{NewFork, RepoOwner, Repository};
pub use transport::{HttpTransport, Transport, TransportFuture};
