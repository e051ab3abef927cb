///
/// settings_section_test.rs
///
/// End-to-end checks of the settings section glue: the static route
/// table wired to a view registry the way the navigation shell
/// consumes them.
///

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use settings_console::{menu_entries, settings_routes, PermissionCheck, View, ViewRegistry};

struct ShellView {
    name: String,
}

impl View for ShellView {
    fn name(&self) -> &str { &self.name }
    fn render(&self) -> String { format!("view:{}", self.name) }
}

struct GroupChecker {
    group: &'static str,
    objects: Vec<&'static str>,
}

impl PermissionCheck for GroupChecker {
    fn allows(&self, group: &str, object: &str) -> bool {
        group == self.group && self.objects.contains(&object)
    }
}

fn shell_registry(constructed: Arc<AtomicUsize>) -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    let root = settings_routes();

    let mut keys: Vec<String> = vec![root.view.clone()];
    keys.extend(root.children.iter().map(|c| c.view.clone()));

    for key in keys {
        let counter = Arc::clone(&constructed);
        let name = key.clone();
        registry.register(key, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(ShellView { name: name.clone() })
        });
    }
    registry
}

#[test]
fn every_route_has_a_registered_view() {
    let registry = shell_registry(Arc::new(AtomicUsize::new(0)));
    let root = settings_routes();

    assert!(registry.is_registered(&root.view));
    for child in &root.children {
        assert!(registry.is_registered(&child.view), "missing view for {}", child.path);
    }
}

#[test]
fn views_are_constructed_only_on_navigation() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let registry = shell_registry(Arc::clone(&constructed));

    // Registration alone builds nothing
    assert_eq!(constructed.load(Ordering::SeqCst), 0);

    // Navigating to one route builds exactly that view
    let audit = settings_routes().children.iter()
        .find(|c| c.path == "audit")
        .expect("audit route present");
    let view = registry.resolve(&audit.view).unwrap();
    assert_eq!(view.render(), "view:settings/audit");
    assert_eq!(constructed.load(Ordering::SeqCst), 1);

    // Returning to the same route reuses the cached view
    let again = registry.resolve(&audit.view).unwrap();
    assert!(Arc::ptr_eq(&view, &again));
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn menu_respects_permission_scope() {
    let root = settings_routes();

    // A cluster-scoped operator sees only cluster-object entries
    let checker = GroupChecker { group: "settings", objects: vec!["cluster"] };
    let menu = menu_entries(root, &checker);

    let names: Vec<&str> = menu.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec![
        "settingsSecret", "settingsImage", "settingsSpacelet", "settingsSonarQube"
    ]);
}

#[test]
fn menu_is_empty_for_foreign_group() {
    let checker = GroupChecker { group: "workspace", objects: vec!["cluster"] };
    assert!(menu_entries(settings_routes(), &checker).is_empty());
}

#[test]
fn table_is_shared_by_reference() {
    let first = settings_routes() as *const _;
    let second = settings_routes() as *const _;
    assert_eq!(first, second);
}
