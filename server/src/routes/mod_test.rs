use campus_events::routes::table::{self, ROUTE_TABLE};
use leptos_axum::generate_route_list;

fn router_paths() -> Vec<String> {
    generate_route_list(campus_events::app::App).iter().map(|listing| listing.path().to_owned()).collect()
}

#[tokio::test]
async fn every_router_path_has_an_access_declaration() {
    let paths = router_paths();
    assert!(!paths.is_empty());
    for path in &paths {
        assert!(table::lookup(path).is_some(), "router path {path} is missing from ROUTE_TABLE");
    }
}

#[tokio::test]
async fn every_access_declaration_is_routed() {
    let paths = router_paths();
    for entry in ROUTE_TABLE {
        assert!(
            paths.iter().any(|path| table::matches(entry.pattern, path)),
            "ROUTE_TABLE pattern {} has no matching router path",
            entry.pattern
        );
    }
}
