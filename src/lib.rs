//! secrets-action - Load AWS Secrets Manager secrets into GitHub Actions jobs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Main step: fetch and inject
//! │   ├── cleanup       # Post step: blank injected variables
//! │   └── output        # Terminal and annotation output
//! └── core/             # Core library components
//!     ├── alias         # `[alias,]locator` entries
//!     ├── naming        # Variable name sanitizing
//!     ├── resolve       # Prefix wildcard expansion
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait and fetch
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory store
//!     ├── inject        # JSON flattening into variables
//!     ├── sink/         # Variable destinations
//!     │   ├── actions   # GitHub Actions workflow commands
//!     │   └── memory    # In-memory sink
//!     ├── cleanup       # Cleanup list and post-job cleanup
//!     ├── pipeline      # Main-step orchestration
//!     └── config        # Run settings
//! ```
//!
//! # Features
//!
//! - Prefix searches (`prod/*`) with optional aliases
//! - JSON secrets flattened into one variable per key
//! - Every value masked before it is written
//! - Injected variables tracked and removed by the post step

pub mod cli;
pub mod core;
pub mod error;
