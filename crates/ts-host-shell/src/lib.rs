//! # Taxonomy Sort Host Shell
//!
//! Thin adapter between a host CMS and the term ordering core. The host
//! delivers events by hook name; the shell decides whether the hook is
//! registered for the request context and calls the matching core
//! operation. Presentation hooks (script enqueue, inline style) live here
//! because they are host glue, not ordering logic.

pub mod config;
pub mod hooks;
pub mod presentation;
pub mod serve;
pub mod shell;
pub mod store;

pub use config::{load_config, ShellConfig, StoreBackend};
pub use hooks::{registered_hooks, HookName, HostContext};
pub use serve::serve_lines;
pub use shell::{HostEvent, HostRequest, HostResponse, TaxonomySortShell};
pub use store::ShellStore;
