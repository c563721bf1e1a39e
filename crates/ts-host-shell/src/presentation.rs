//! Admin presentation hook points: script enqueue and inline style.

use serde::{Deserialize, Serialize};

/// Admin screen base the drag-and-drop script is limited to.
pub const TERMS_SCREEN: &str = "edit-tags";

pub const SCRIPT_HANDLE: &str = "thetaxonomysort";
pub const SCRIPT_FILE: &str = "the-taxonomy-sort.js";

/// Show the drag cursor on term rows.
pub const ADMIN_STYLE: &str = ".wp-list-table.tags td { cursor: move; }";

/// One script the host should enqueue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEnqueue {
    pub handle: String,
    /// `None` for scripts the host already registers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default)]
    pub deps: Vec<String>,
}

/// Scripts for an admin screen; empty unless it is the terms screen.
pub fn admin_scripts(screen_base: &str, plugin_url: &str) -> Vec<ScriptEnqueue> {
    if screen_base != TERMS_SCREEN {
        return vec![];
    }

    vec![
        ScriptEnqueue {
            handle: "jquery".to_string(),
            src: None,
            deps: vec![],
        },
        ScriptEnqueue {
            handle: SCRIPT_HANDLE.to_string(),
            src: Some(format!("{}/{}", plugin_url.trim_end_matches('/'), SCRIPT_FILE)),
            deps: vec!["jquery".to_string(), "jquery-ui-sortable".to_string()],
        },
    ]
}

/// Inline style block for admin pages.
pub fn admin_styles() -> String {
    format!("<style>{ADMIN_STYLE}</style>")
}
