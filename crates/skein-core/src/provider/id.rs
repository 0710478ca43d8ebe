use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process sequence for run identifiers.
static RUN_SEQ: AtomicU64 = AtomicU64::new(1);

fn next_seq() -> u64 {
    RUN_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Build the run id used as taskvisor task name and as the report key.
///
/// Format: `{provider}-{slot}-{seq:x}`.
pub fn make_run_id(provider: &str, slot: &str) -> String {
    format!("{provider}-{slot}-{seq:x}", seq = next_seq())
}
