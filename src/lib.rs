///
/// lib.rs
///
/// settings-console: client glue for the settings section of the
/// platform console. A typed REST client for the SonarQube
/// integration settings resource, and the static route table the
/// navigation shell renders the section from.
///

pub mod core;
pub mod init;
pub mod clients;
pub mod routes;
pub mod views;

pub use crate::clients::{ApiResponse, ResourceId};
pub use crate::clients::sonar_qube::SonarQubeClient;
pub use crate::core::http::{HttpClient, HttpError};
pub use crate::routes::{menu_entries, settings_routes, PermissionCheck, RouteEntry, RouteMeta};
pub use crate::views::{View, ViewRegistry};
