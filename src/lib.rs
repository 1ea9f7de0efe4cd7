//! esboot - bootstrap launcher for OpenSearch-backed applications.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Provision the Python environment
//! │   ├── endpoint      # Resolve and print the cluster endpoint
//! │   ├── run           # Launch the app with ELASTICSEARCH_URL injected
//! │   ├── templates     # Index template management
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # esboot.toml management
//!     ├── proc          # External command invocation
//!     ├── python        # Virtualenv + dependency install
//!     ├── secret        # Kubernetes secret fetch & decode
//!     ├── properties    # key = value line extraction
//!     ├── launch        # Process spawn with injected environment
//!     ├── opensearch    # curl-driven cluster channel
//!     └── templates     # Template details, update, copy, smoke test
//! ```
//!
//! # Features
//!
//! - Python environment provisioning from a dependency manifest
//! - Endpoint discovery from a Kubernetes secret's properties blob
//! - Environment injection and application launch
//! - Index template resharding with smoke-test verification

pub mod cli;
pub mod core;
pub mod error;
