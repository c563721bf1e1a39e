//! Host hook registration.
//!
//! Which host hooks the component listens to in each request context.
//! Admin requests get the listing filter, the order-submission endpoint and
//! the presentation hooks; public requests only the listing filter. The
//! teardown hook is active in both contexts.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_term_ordering::ListingContext;

/// Host request context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostContext {
    Admin,
    Public,
}

impl From<HostContext> for ListingContext {
    fn from(context: HostContext) -> Self {
        match context {
            HostContext::Admin => ListingContext::Admin,
            HostContext::Public => ListingContext::Public,
        }
    }
}

/// Host hooks the component attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookName {
    /// Terms retrieved filter
    GetTerms,
    /// Order-submission AJAX action
    SubmitOrder,
    /// Admin script enqueue
    EnqueueScripts,
    /// Admin inline styles
    PrintStyles,
    /// Component uninstall
    Uninstall,
}

impl HookName {
    /// Name the host dispatches under.
    pub fn host_name(&self) -> &'static str {
        match self {
            HookName::GetTerms => "get_terms",
            HookName::SubmitOrder => "wp_ajax_get_inline_boxes",
            HookName::EnqueueScripts => "admin_enqueue_scripts",
            HookName::PrintStyles => "admin_print_styles",
            HookName::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_name())
    }
}

/// Hooks active for a request in `context`.
pub fn registered_hooks(context: HostContext) -> Vec<HookName> {
    match context {
        HostContext::Admin => vec![
            HookName::EnqueueScripts,
            HookName::PrintStyles,
            HookName::SubmitOrder,
            HookName::GetTerms,
            HookName::Uninstall,
        ],
        HostContext::Public => vec![HookName::GetTerms, HookName::Uninstall],
    }
}

pub fn is_registered(context: HostContext, hook: HookName) -> bool {
    registered_hooks(context).contains(&hook)
}
