use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

const PAGE_SIZE_BYTES: u64 = 4096;

/// Process counters exposed on `/metrics`.
pub(crate) struct Metrics {
    started: Instant,
    requests: AtomicU64,
    errors: AtomicU64,
    upstream_errors: AtomicU64,
}

impl Metrics {
    pub(crate) fn new() -> Self {
        Self {
            started: Instant::now(),
            requests: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            upstream_errors: AtomicU64::new(0),
        }
    }

    pub(crate) fn request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn upstream_error(&self) {
        self.upstream_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        push_metric(
            &mut out,
            "dashgate_requests_total",
            "counter",
            "HTTP requests handled.",
            self.requests.load(Ordering::Relaxed),
        );
        push_metric(
            &mut out,
            "dashgate_errors_total",
            "counter",
            "HTTP responses with a 5xx status.",
            self.errors.load(Ordering::Relaxed),
        );
        push_metric(
            &mut out,
            "dashgate_upstream_errors_total",
            "counter",
            "Failed calls to the upstream API.",
            self.upstream_errors.load(Ordering::Relaxed),
        );
        push_metric(
            &mut out,
            "dashgate_uptime_seconds",
            "gauge",
            "Seconds since the server started.",
            self.started.elapsed().as_secs(),
        );
        push_metric(
            &mut out,
            "dashgate_memory_resident_bytes",
            "gauge",
            "Resident set size of the process.",
            resident_memory_bytes(),
        );
        out
    }
}

fn push_metric(out: &mut String, name: &str, kind: &str, help: &str, value: u64) {
    out.push_str(&format!("# HELP {name} {help}\n# TYPE {name} {kind}\n{name} {value}\n"));
}

// Linux only; other platforms report 0.
fn resident_memory_bytes() -> u64 {
    std::fs::read_to_string("/proc/self/statm")
        .ok()
        .and_then(|s| s.split_whitespace().nth(1)?.parse::<u64>().ok())
        .map(|pages| pages * PAGE_SIZE_BYTES)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_server/metrics_tests.rs"]
mod tests;
