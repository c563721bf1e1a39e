//! # Taxonomy Sort Shell
//!
//! Adapter that wraps the term ordering handler and exposes it under host
//! hook names. The host hands over one event per request; the shell checks
//! the hook is registered for the request context and delegates.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use ts_term_ordering::{
    OrderStore, Principal, SortConfig, SubmitOrderRequest, SubmittedRows, TeardownOutcome, Term,
    TermOrderingHandler,
};

use crate::hooks::{is_registered, HookName, HostContext};
use crate::presentation::{admin_scripts, admin_styles, ScriptEnqueue};

/// Event delivered by the host, tagged by hook name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "hook")]
pub enum HostEvent {
    /// Terms were retrieved and may be rewritten
    #[serde(rename = "get_terms")]
    TermsRetrieved { terms: Vec<Term> },

    /// Administrator submitted a new order
    #[serde(rename = "wp_ajax_get_inline_boxes")]
    OrderSubmitted {
        #[serde(default)]
        principal: Principal,
        #[serde(default)]
        rows: SubmittedRows,
    },

    /// Component is being uninstalled
    #[serde(rename = "uninstall")]
    Uninstall {
        #[serde(default)]
        principal: Principal,
    },

    /// Admin page is enqueueing scripts
    #[serde(rename = "admin_enqueue_scripts")]
    EnqueueScripts { screen: String },

    /// Admin page is printing styles
    #[serde(rename = "admin_print_styles")]
    PrintStyles,
}

impl HostEvent {
    pub fn hook(&self) -> HookName {
        match self {
            HostEvent::TermsRetrieved { .. } => HookName::GetTerms,
            HostEvent::OrderSubmitted { .. } => HookName::SubmitOrder,
            HostEvent::Uninstall { .. } => HookName::Uninstall,
            HostEvent::EnqueueScripts { .. } => HookName::EnqueueScripts,
            HostEvent::PrintStyles => HookName::PrintStyles,
        }
    }
}

/// One request from the host: context plus event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRequest {
    pub context: HostContext,
    pub event: HostEvent,
}

/// What the shell hands back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostResponse {
    /// Rewritten listing
    Terms { terms: Vec<Term> },
    /// Request handled; nothing to return
    Empty,
    /// Request refused
    Rejected { error: String },
    /// Teardown result
    Teardown { outcome: TeardownOutcome },
    /// Scripts to enqueue
    Scripts { scripts: Vec<ScriptEnqueue> },
    /// Inline style markup
    Styles { markup: String },
    /// Hook not registered for the request context
    NotRegistered { hook: String },
}

/// Taxonomy Sort shell - wraps the term ordering handler.
pub struct TaxonomySortShell<S: OrderStore> {
    handler: TermOrderingHandler<S>,
    plugin_url: String,
}

impl<S: OrderStore> TaxonomySortShell<S> {
    /// Create a shell with default ordering config.
    pub fn new(store: Arc<S>, plugin_url: impl Into<String>) -> Self {
        Self::with_config(store, SortConfig::default(), plugin_url)
    }

    /// Create with custom ordering config.
    pub fn with_config(store: Arc<S>, config: SortConfig, plugin_url: impl Into<String>) -> Self {
        Self {
            handler: TermOrderingHandler::with_config(store, config),
            plugin_url: plugin_url.into(),
        }
    }

    pub fn handler(&self) -> &TermOrderingHandler<S> {
        &self.handler
    }

    /// Dispatch one host request.
    pub fn dispatch(&self, request: HostRequest) -> HostResponse {
        let HostRequest { context, event } = request;
        let hook = event.hook();

        if !is_registered(context, hook) {
            debug!("[ts-shell] Hook {} not registered for {:?}", hook, context);
            return HostResponse::NotRegistered {
                hook: hook.host_name().to_string(),
            };
        }

        match event {
            HostEvent::TermsRetrieved { terms } => HostResponse::Terms {
                terms: self.handler.handle_terms_retrieved(context.into(), terms),
            },
            HostEvent::OrderSubmitted { principal, rows } => {
                let response = self
                    .handler
                    .handle_submit_order(&principal, SubmitOrderRequest { rows });
                if response.success {
                    HostResponse::Empty
                } else {
                    let error = response
                        .error
                        .unwrap_or_else(|| "order submission failed".to_string());
                    warn!("[ts-shell] Order submission rejected: {}", error);
                    HostResponse::Rejected { error }
                }
            }
            HostEvent::Uninstall { principal } => {
                let outcome = self.handler.handle_teardown(&principal);
                info!("[ts-shell] Uninstall handled: {:?}", outcome);
                HostResponse::Teardown { outcome }
            }
            HostEvent::EnqueueScripts { screen } => HostResponse::Scripts {
                scripts: admin_scripts(&screen, &self.plugin_url),
            },
            HostEvent::PrintStyles => HostResponse::Styles {
                markup: admin_styles(),
            },
        }
    }
}
