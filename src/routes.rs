///
/// routes.rs
///
/// Static route table for the settings navigation section.
///
/// A hidden parent entry hosts the shared layout; each child pairs a
/// path segment, a deferred view key and the display/permission
/// metadata the shell uses to render menu items. The table is built
/// once and immutable thereafter.
///

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

/************ RouteError **********************************/
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate route name among siblings: {0}")]
    DuplicateName(String),
    #[error("duplicate route path among siblings: {0}")]
    DuplicatePath(String),
    #[error("no view registered under '{0}'")]
    UnknownView(String),
}

/************ RouteMeta ***********************************/
/* Display and permission metadata for a single menu item.
 * group/object are checked by the external authorization
 * collaborator before the item is shown.
 */
#[derive(Debug, Clone, Serialize)]
pub struct RouteMeta {
    pub title: String,
    pub icon: String,
    pub group: String,
    pub object: String,
}

impl RouteMeta {
    pub fn new(
        title: impl Into<String>, icon: impl Into<String>,
        group: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            group: group.into(),
            object: object.into()
        }
    }
}

/************ RouteEntry **********************************/
/* A single navigable unit. `view` is a key into views::ViewRegistry,
 * resolved on first navigation rather than at table construction.
 * Ordering of `children` is rendering order.
 */
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub view: String,
    pub hidden: bool,
    pub meta: Option<RouteMeta>,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    // A user-visible leaf route carrying menu metadata
    pub fn view_route(
        path: impl Into<String>, name: impl Into<String>,
        view: impl Into<String>, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
            hidden: false,
            meta: Some(meta),
            children: Vec::new()
        }
    }

    // A parent entry hosting children under a shared layout view.
    // Hidden from primary navigation, it exists purely as a mount point.
    pub fn section(
        path: impl Into<String>, view: impl Into<String>,
        children: Vec<RouteEntry>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
            view: view.into(),
            hidden: true,
            meta: None,
            children
        }
    }

    /******** RouteEntry::validate ************************/
    /* Enforces the table invariant: no two siblings share a
     * name or a path, at any depth.
     */
    pub fn validate(&self) -> Result<(), RouteError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for child in &self.children {
            if !names.insert(child.name.as_str()) {
                return Err(RouteError::DuplicateName(child.name.clone()));
            }
            if !paths.insert(child.path.as_str()) {
                return Err(RouteError::DuplicatePath(child.path.clone()));
            }
            child.validate()?;
        }

        Ok(())
    }
}

/************ PermissionCheck *****************************/
/* Seam to the external authorization collaborator deciding
 * menu visibility from the group/object pair.
 */
pub trait PermissionCheck {
    fn allows(&self, group: &str, object: &str) -> bool;
}

/************ menu_entries ********************************/
/* Child entries visible in the primary menu: hidden entries
 * excluded, the rest filtered by permission, order preserved.
 * The hidden parent itself never appears.
 */
pub fn menu_entries<'a>(
    root: &'a RouteEntry, check: &dyn PermissionCheck) -> Vec<&'a RouteEntry> {
    root.children.iter()
        .filter(|entry| !entry.hidden)
        .filter(|entry| match &entry.meta {
            Some(meta) => check.allows(&meta.group, &meta.object),
            None => true
        })
        .collect()
}

/************ settings_routes *****************************/
/* The settings section table. Built on first access, shared by
 * reference afterwards; no mutation API is exposed.
 */
pub fn settings_routes() -> &'static RouteEntry {
    static ROUTES: LazyLock<RouteEntry> = LazyLock::new(build_settings_routes);
    &ROUTES
}

fn build_settings_routes() -> RouteEntry {
    RouteEntry::section("settings", "layout", vec![
        RouteEntry::view_route(
            "secret", "settingsSecret", "settings/secret",
            RouteMeta::new("Secrets", "settings_secret", "settings", "cluster")),
        RouteEntry::view_route(
            "image", "settingsImage", "settings/image_registry",
            RouteMeta::new("Image Registries", "docker", "settings", "cluster")),
        RouteEntry::view_route(
            "spacelet", "settingsSpacelet", "settings/spacelet",
            RouteMeta::new("Spacelet", "spacelet", "settings", "cluster")),
        RouteEntry::view_route(
            "sonarQube", "settingsSonarQube", "settings/sonar_qube",
            RouteMeta::new("SonarQube", "sonar_qube", "settings", "cluster")),
        RouteEntry::view_route(
            "member", "member", "settings/member",
            RouteMeta::new("Members", "member", "settings", "user")),
        RouteEntry::view_route(
            "platform_role", "platform_role", "settings/platform_role",
            RouteMeta::new("Platform Roles", "platform_perm", "settings", "role")),
        RouteEntry::view_route(
            "audit", "platform_audit", "settings/audit",
            RouteMeta::new("Audit Log", "audit", "settings", "role")),
    ])
}
