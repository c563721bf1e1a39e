//! # Integration Test Flows
//!
//! Drives `TaxonomySortShell` the way a host would: JSON lines in, JSON
//! lines out, with ranks persisted through `FileOrderStore`.
//!
//! ## Flows Tested:
//!
//! 1. **Submit → List**: an admin order is visible on the next listing
//! 2. **Restart**: ranks survive reopening the file store
//! 3. **Uninstall**: purge only with the plugin capability
//! 4. **Concurrent admins**: per-term last write wins

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;
    use std::thread;

    use serde_json::{json, Value};
    use tempfile::TempDir;

    use ts_host_shell::{
        serve_lines, HostContext, HostEvent, HostRequest, HostResponse, ShellConfig, ShellStore,
        StoreBackend, TaxonomySortShell,
    };
    use ts_term_ordering::{
        Capability, FileOrderStore, OrderStore, Principal, SubmitOrderRequest, TeardownOutcome,
        Term, TermId,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PLUGIN_URL: &str = "/wp-content/plugins/the-taxonomy-sort";

    fn file_config(path: &Path) -> ShellConfig {
        ShellConfig {
            store: StoreBackend::File {
                path: path.to_path_buf(),
            },
            ..ShellConfig::default()
        }
    }

    fn open_shell(config: &ShellConfig) -> TaxonomySortShell<ShellStore> {
        let store = ShellStore::open(config).unwrap();
        TaxonomySortShell::with_config(Arc::new(store), config.sort.clone(), PLUGIN_URL)
    }

    fn listing() -> Vec<Term> {
        vec![
            Term::new(1, "Apples"),
            Term::new(2, "Bananas"),
            Term::new(3, "Cherries"),
            Term::new(4, "Dates"),
        ]
    }

    fn names(response: &HostResponse) -> Vec<String> {
        match response {
            HostResponse::Terms { terms } => terms.iter().map(|t| t.name().to_string()).collect(),
            other => panic!("expected terms response, got {:?}", other),
        }
    }

    fn list(shell: &TaxonomySortShell<ShellStore>, context: HostContext) -> Vec<String> {
        names(&shell.dispatch(HostRequest {
            context,
            event: HostEvent::TermsRetrieved { terms: listing() },
        }))
    }

    fn submit(shell: &TaxonomySortShell<ShellStore>, rows: &[&str]) -> HostResponse {
        shell.dispatch(HostRequest {
            context: HostContext::Admin,
            event: HostEvent::OrderSubmitted {
                principal: Principal::user(1),
                rows: SubmitOrderRequest::from_rows(rows.iter().copied()).rows,
            },
        })
    }

    fn run_lines(shell: &TaxonomySortShell<ShellStore>, lines: &[Value]) -> Vec<Value> {
        let input: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        let mut output = Vec::new();
        let handled = serve_lines(shell, input.as_bytes(), &mut output).unwrap();
        assert_eq!(handled, lines.len());

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: SUBMIT → LIST
    // =============================================================================

    #[test]
    fn test_submitted_order_applies_to_both_contexts() {
        let dir = TempDir::new().unwrap();
        let shell = open_shell(&file_config(&dir.path().join("ranks.json")));

        assert_eq!(submit(&shell, &["3", "", "1"]), HostResponse::Empty);

        // Ranked 3 then 1; unranked 2 and 4 keep their retrieval order
        let expected = vec!["Cherries", "Apples", "Bananas", "Dates"];
        assert_eq!(list(&shell, HostContext::Admin), expected);
        assert_eq!(list(&shell, HostContext::Public), expected);
    }

    #[test]
    fn test_resubmission_replaces_ranks_of_submitted_terms() {
        let dir = TempDir::new().unwrap();
        let shell = open_shell(&file_config(&dir.path().join("ranks.json")));

        submit(&shell, &["4", "3", "2", "1"]);
        submit(&shell, &["1", "2"]);

        // Ranks are now 1:1, 2:2, 3:2, 4:1; ties keep retrieval order
        assert_eq!(
            list(&shell, HostContext::Admin),
            vec!["Apples", "Dates", "Bananas", "Cherries"]
        );
    }

    #[test]
    fn test_json_lines_round_trip() {
        let dir = TempDir::new().unwrap();
        let shell = open_shell(&file_config(&dir.path().join("ranks.json")));

        let responses = run_lines(
            &shell,
            &[
                json!({
                    "context": "admin",
                    "event": {
                        "hook": "wp_ajax_get_inline_boxes",
                        "principal": { "user_id": 7 },
                        "rows": { "0": "", "1": "2", "2": "4" }
                    }
                }),
                json!({
                    "context": "public",
                    "event": {
                        "hook": "get_terms",
                        "terms": [
                            { "term_id": 4, "name": "Dates" },
                            { "name": "Uncategorized" },
                            { "term_id": 2, "name": "Bananas" }
                        ]
                    }
                }),
                json!({
                    "context": "public",
                    "event": { "hook": "admin_print_styles" }
                }),
            ],
        );

        assert_eq!(responses[0]["kind"], "empty");

        let listed: Vec<&str> = responses[1]["terms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(listed, vec!["Bananas", "Dates", "Uncategorized"]);

        assert_eq!(responses[2]["kind"], "not_registered");
        assert_eq!(responses[2]["hook"], "admin_print_styles");
    }

    #[test]
    fn test_listing_returns_host_records_unchanged_but_reordered() {
        let dir = TempDir::new().unwrap();
        let shell = open_shell(&file_config(&dir.path().join("ranks.json")));
        submit(&shell, &["2"]);

        let first = json!({
            "term_id": 1,
            "name": "A",
            "parent": 4,
            "count": 9,
            "term_taxonomy_id": 11,
            "description": "d"
        });
        let second = json!({
            "term_id": 2,
            "name": "B",
            "slug": "b",
            "taxonomy": "category",
            "parent": 0,
            "filter": "raw"
        });

        let responses = run_lines(
            &shell,
            &[json!({
                "context": "admin",
                "event": { "hook": "get_terms", "terms": [first.clone(), second.clone()] }
            })],
        );

        assert_eq!(responses[0]["terms"], json!([second, first]));
    }

    #[test]
    fn test_keyed_rows_with_equal_positions_rank_both_terms() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranks.json");
        let shell = open_shell(&file_config(&path));

        let responses = run_lines(
            &shell,
            &[json!({
                "context": "admin",
                "event": {
                    "hook": "wp_ajax_get_inline_boxes",
                    "principal": { "user_id": 1 },
                    "rows": { "1": "5", "01": "7" }
                }
            })],
        );

        assert_eq!(responses[0]["kind"], "empty");
        let reopened = FileOrderStore::open(&path, "thets_order").unwrap();
        assert_eq!(reopened.get_rank(TermId(5)).unwrap(), Some(2));
        assert_eq!(reopened.get_rank(TermId(7)).unwrap(), Some(2));
    }

    // =============================================================================
    // INTEGRATION TESTS: PERSISTENCE ACROSS RESTARTS
    // =============================================================================

    #[test]
    fn test_ranks_survive_shell_restart() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir.path().join("nested").join("ranks.json"));

        {
            let shell = open_shell(&config);
            submit(&shell, &["2", "1"]);
        }

        let shell = open_shell(&config);
        assert_eq!(
            list(&shell, HostContext::Public),
            vec!["Bananas", "Apples", "Cherries", "Dates"]
        );
    }

    #[test]
    fn test_store_file_holds_one_based_ranks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranks.json");
        let shell = open_shell(&file_config(&path));

        submit(&shell, &["", "5", "", "7"]);

        let reopened = FileOrderStore::open(&path, "thets_order").unwrap();
        assert_eq!(reopened.get_rank(TermId(5)).unwrap(), Some(2));
        assert_eq!(reopened.get_rank(TermId(7)).unwrap(), Some(4));
        assert_eq!(reopened.get_rank(TermId(1)).unwrap(), None);
    }

    // =============================================================================
    // INTEGRATION TESTS: UNINSTALL
    // =============================================================================

    #[test]
    fn test_uninstall_without_capability_keeps_ranks() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir.path().join("ranks.json"));
        let shell = open_shell(&config);
        submit(&shell, &["2", "1"]);

        let response = shell.dispatch(HostRequest {
            context: HostContext::Admin,
            event: HostEvent::Uninstall {
                principal: Principal::user(3).with_capability(Capability::ManageCategories),
            },
        });

        assert_eq!(
            response,
            HostResponse::Teardown {
                outcome: TeardownOutcome::Skipped
            }
        );
        assert_eq!(list(&shell, HostContext::Admin)[0], "Bananas");
    }

    #[test]
    fn test_uninstall_purges_and_persists() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir.path().join("ranks.json"));

        {
            let shell = open_shell(&config);
            submit(&shell, &["4", "3", "2"]);

            let response = shell.dispatch(HostRequest {
                context: HostContext::Admin,
                event: HostEvent::Uninstall {
                    principal: Principal::user(1).with_capability(Capability::ActivatePlugins),
                },
            });
            assert_eq!(
                response,
                HostResponse::Teardown {
                    outcome: TeardownOutcome::Purged { removed: 3 }
                }
            );
        }

        let shell = open_shell(&config);
        assert_eq!(
            list(&shell, HostContext::Public),
            vec!["Apples", "Bananas", "Cherries", "Dates"]
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: CONCURRENT ADMINS
    // =============================================================================

    #[test]
    fn test_concurrent_submissions_last_write_wins_per_term() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranks.json");
        let shell = Arc::new(open_shell(&file_config(&path)));

        let handles: Vec<_> = (0..8u64)
            .map(|admin| {
                let shell = Arc::clone(&shell);
                thread::spawn(move || {
                    let rows = if admin % 2 == 0 {
                        vec!["1", "2", "3", "4"]
                    } else {
                        vec!["4", "3", "2", "1"]
                    };
                    let response = shell.dispatch(HostRequest {
                        context: HostContext::Admin,
                        event: HostEvent::OrderSubmitted {
                            principal: Principal::user(admin + 1),
                            rows: SubmitOrderRequest::from_rows(rows).rows,
                        },
                    });
                    assert_eq!(response, HostResponse::Empty);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every term ends with a rank one of the admins wrote for it
        let reopened = FileOrderStore::open(&path, "thets_order").unwrap();
        for (term, forward, backward) in [(1, 1, 4), (2, 2, 3), (3, 3, 2), (4, 4, 1)] {
            let rank = reopened.get_rank(TermId(term)).unwrap().unwrap();
            assert!(
                rank == forward || rank == backward,
                "term {} has rank {}",
                term,
                rank
            );
        }

        // Listing is still complete whatever interleaving won
        let mut listed = list(&shell, HostContext::Admin);
        listed.sort();
        assert_eq!(listed, vec!["Apples", "Bananas", "Cherries", "Dates"]);
    }
}
