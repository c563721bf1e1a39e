//! JSON-lines request loop.
//!
//! One `HostRequest` per input line, one `HostResponse` per output line.
//! A malformed line yields a `rejected` response and the loop continues.

use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use ts_term_ordering::OrderStore;

use crate::shell::{HostRequest, HostResponse, TaxonomySortShell};

/// Serve requests until `reader` is exhausted. Returns the number handled.
pub fn serve_lines<S, R, W>(
    shell: &TaxonomySortShell<S>,
    reader: R,
    mut writer: W,
) -> io::Result<usize>
where
    S: OrderStore,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<HostRequest>(&line) {
            Ok(request) => {
                debug!("[ts-shell] Line {}: {}", line_no + 1, request.event.hook());
                shell.dispatch(request)
            }
            Err(e) => {
                warn!("[ts-shell] Malformed request on line {}: {}", line_no + 1, e);
                HostResponse::Rejected {
                    error: format!("malformed request: {e}"),
                }
            }
        };

        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        handled += 1;
    }

    Ok(handled)
}
