///
/// views.rs
///
/// Registry of named view factories.
///
/// Route entries reference views by key; the factory only runs when
/// the route is first activated, so view code is constructed
/// incrementally rather than eagerly at startup. Resolved views are
/// cached and shared afterwards.
///

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::routes::RouteError;

/************ View ****************************************/
/* Seam to the rendering shell. The shell owns presentation;
 * this layer only hands it a constructed view.
 */
pub trait View: Send + Sync {
    fn name(&self) -> &str;
    fn render(&self) -> String;
}

impl std::fmt::Debug for dyn View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View").field("name", &self.name()).finish()
    }
}

/************ ViewCtor ************************************/
// Constructor from a registered key into a View
pub type ViewCtor = Arc<dyn Fn() -> Arc<dyn View> + Send + Sync>;

/************ ViewRegistry ********************************/
pub struct ViewRegistry {
    ctors: HashMap<String, ViewCtor>,
    resolved: RwLock<HashMap<String, Arc<dyn View>>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            ctors: HashMap::new(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    // Registration stores the factory only; nothing is constructed here
    pub fn register<F>(&mut self, name: impl Into<String>, ctor: F)
    where
        F: Fn() -> Arc<dyn View> + Send + Sync + 'static
    {
        self.ctors.insert(name.into(), Arc::new(ctor));
    }

    /******** ViewRegistry::resolve ***********************/
    /* Returns the view for a key, constructing it on first use.
     * Subsequent resolutions share the cached instance.
     */
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn View>, RouteError> {
        if let Some(view) = self.resolved.read().get(name) {
            return Ok(Arc::clone(view));
        }

        let ctor = self.ctors.get(name)
            .ok_or_else(|| RouteError::UnknownView(name.to_string()))?;

        let mut guard = self.resolved.write();
        // re-check under the write lock, another caller may have resolved
        let view = guard.entry(name.to_string())
            .or_insert_with(|| ctor())
            .clone();
        Ok(view)
    }

    pub fn is_resolved(&self, name: &str) -> bool {
        self.resolved.read().contains_key(name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
