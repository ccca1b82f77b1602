use super::*;

#[test]
fn default_tab_is_overview() {
    assert_eq!(AdminTab::default(), AdminTab::Overview);
}

#[test]
fn tabs_listed_in_display_order() {
    let labels: Vec<&str> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Overview", "User Management", "Analytics", "Settings"]);
}

#[test]
fn tab_ids_are_unique() {
    let mut ids: Vec<&str> = AdminTab::ALL.iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), AdminTab::ALL.len());
}
