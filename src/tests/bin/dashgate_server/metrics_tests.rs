use super::*;

#[test]
fn exposition_lists_every_counter_with_help_and_type() {
    let metrics = Metrics::new();
    metrics.request();
    metrics.request();
    metrics.error();
    metrics.upstream_error();

    let text = metrics.render();
    assert!(text.contains("# TYPE dashgate_requests_total counter\ndashgate_requests_total 2\n"));
    assert!(text.contains("dashgate_errors_total 1\n"));
    assert!(text.contains("dashgate_upstream_errors_total 1\n"));
    assert!(text.contains("# TYPE dashgate_uptime_seconds gauge"));
    assert!(text.contains("dashgate_memory_resident_bytes "));
    for line in text.lines().filter(|l| !l.starts_with('#')) {
        let value = line.rsplit(' ').next().expect("value");
        value.parse::<u64>().expect("numeric sample");
    }
}
