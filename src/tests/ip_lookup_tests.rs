use super::FakeResolver;
use crate::ip_lookup::{IpIntel, IpLookupError, IpReport};
use std::sync::Arc;

fn create_test_intel() -> IpIntel {
    IpIntel::new(Arc::new(FakeResolver::with(&[
        ("8.8.8.8", "dns.google"),
        ("2001:4860:4860::8888", "dns.google"),
        ("127.0.0.1", "localhost"),
    ])))
}

#[tokio::test]
async fn test_resolved_address_is_active() {
    let intel = create_test_intel();
    let report = intel.report("8.8.8.8").await;

    assert_eq!(report, IpReport::active("8.8.8.8", "dns.google".to_string()));
    assert_eq!(report.status, "active");
}

#[tokio::test]
async fn test_ipv6_address_is_resolved() {
    let intel = create_test_intel();
    let report = intel.report("2001:4860:4860::8888").await;
    assert_eq!(report.hostname.as_deref(), Some("dns.google"));
}

#[tokio::test]
async fn test_unresolved_address_is_labelled_reachable() {
    let intel = create_test_intel();
    let report = intel.report("10.0.0.1").await;

    assert_eq!(report.ip, "10.0.0.1");
    assert_eq!(report.hostname, None);
    assert_eq!(report.status, "reachable");
}

#[tokio::test]
async fn test_hostname_is_resolved_then_reversed() {
    let intel = create_test_intel();

    let report = intel.report("localhost").await;
    assert_eq!(report, IpReport::active("localhost", "localhost".to_string()));

    // First forward address is the one reversed
    let report = intel.report("dns.google").await;
    assert_eq!(report.ip, "dns.google");
    assert_eq!(report.hostname.as_deref(), Some("dns.google"));
    assert_eq!(report.status, "active");
}

#[tokio::test]
async fn test_unknown_hostname_is_labelled_reachable() {
    let intel = create_test_intel();

    assert!(matches!(
        intel.lookup("not-an-ip").await,
        Err(IpLookupError::NoAddress(host)) if host == "not-an-ip"
    ));

    let report = intel.report("not-an-ip").await;
    assert_eq!(report.status, "reachable");
    assert_eq!(report.hostname, None);
}

#[tokio::test]
async fn test_empty_input_is_labelled_invalid() {
    let intel = create_test_intel();
    assert!(matches!(
        intel.lookup("").await,
        Err(IpLookupError::NoAddress(_))
    ));
    assert_eq!(intel.report("").await.status, "invalid");
    assert_eq!(IpReport::unresolved("").status, "invalid");
}

#[test]
fn test_unresolved_report_omits_hostname() {
    let json = serde_json::to_value(IpReport::unresolved("10.0.0.1")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"ip": "10.0.0.1", "status": "reachable"})
    );
}
