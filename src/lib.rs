//! Jobpath - studio pipeline path resolution
//!
//! Every job on disk carries a `config.yml` describing how its folders and
//! files are laid out, as templates of `<token>` placeholders. This crate
//! turns those templates into concrete paths and file names, reads and bumps
//! `_v###` version markers, and derives publish names from working files.
//!
//! ```
//! use jobpath::{JobConfig, Resolver, TokenMap};
//!
//! let config = JobConfig::from_yaml("globals:\n  company: acme\n").unwrap();
//! let resolver = Resolver::new("/jobs/j1", config);
//! let tokens = TokenMap::from([("spot".to_string(), "S01".to_string())]);
//!
//! let path = resolver.get_path("<job_path>/<company>/<spot>", &tokens, None).unwrap();
//! assert_eq!(path, format!("{0}jobs{0}j1{0}acme{0}S01", std::path::MAIN_SEPARATOR));
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod navigate;
pub mod project;
pub mod publish;
pub mod resolver;
pub mod session;
pub mod token;
pub mod version;

pub use config::{Globals, JobConfig, SoftwareConfig};
pub use error::{JobpathError, Result};
pub use publish::create_pub_name;
pub use resolver::Resolver;
pub use session::{RecentStore, SessionContext, SessionToken};
pub use token::TokenMap;
pub use version::{VersionUp, get_version_int, get_version_str, increment_version, version_up};
