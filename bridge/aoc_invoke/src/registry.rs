//! Module registry: import by path and apply exports by name.
//!
//! Each registered path owns a slot holding an optional initialiser and the
//! loaded module. The slot map sits behind a `RwLock`; each slot has its own
//! lock so initialisers for different modules never wait on each other, and
//! an initialiser runs at most once per successful load.
//!
//! The slot lock is re-entrant: a thread already initialising a module can
//! look at that slot again. An import of the module being initialised is
//! reported as [`InvokeError::CyclicImport`].

use std::borrow::Cow;
use std::cell::RefCell;
use std::path::{Component, Path};
use std::sync::Arc;

use futures::future::FutureExt;
use parking_lot::{ReentrantMutex, RwLock};
use rustc_hash::FxHashMap;

use crate::error::InvokeError;
use crate::module::Module;
use crate::promise::Pending;
use crate::value::Value;

type Initializer = dyn Fn() -> Result<Module, InvokeError> + Send + Sync;

#[derive(Default)]
struct SlotState {
    module: Option<Arc<Module>>,
    initialising: bool,
}

struct Slot {
    init: Option<Box<Initializer>>,
    state: ReentrantMutex<RefCell<SlotState>>,
}

impl Slot {
    fn deferred(init: Box<Initializer>) -> Self {
        Slot {
            init: Some(init),
            state: ReentrantMutex::new(RefCell::new(SlotState::default())),
        }
    }

    fn preloaded(module: Module) -> Self {
        Slot {
            init: None,
            state: ReentrantMutex::new(RefCell::new(SlotState {
                module: Some(Arc::new(module)),
                initialising: false,
            })),
        }
    }

    fn is_loaded(&self) -> bool {
        self.state.lock().borrow().module.is_some()
    }

    fn load(&self, key: &str) -> Result<Arc<Module>, InvokeError> {
        let state = self.state.lock();
        {
            let current = state.borrow();
            if let Some(module) = &current.module {
                return Ok(Arc::clone(module));
            }
            if current.initialising {
                return Err(InvokeError::CyclicImport {
                    module: key.to_string(),
                });
            }
        }

        let Some(init) = &self.init else {
            return Err(InvokeError::ModuleNotFound {
                module: key.to_string(),
            });
        };

        tracing::debug!(module = key, "initialising module");
        state.borrow_mut().initialising = true;
        // No borrow is held across `init`, it may re-enter this slot.
        let result = init();

        let mut current = state.borrow_mut();
        current.initialising = false;
        let module = Arc::new(result?);
        current.module = Some(Arc::clone(&module));
        Ok(module)
    }
}

/// Registry of importable modules keyed by normalised path.
///
/// Shared between tasks by reference; every method takes `&self`.
#[derive(Default)]
pub struct ModuleRegistry {
    slots: RwLock<FxHashMap<String, Arc<Slot>>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module whose initialiser runs on first import.
    ///
    /// Replaces any module previously registered under the same path.
    ///
    /// The initialiser may use the registry. Importing its own path from
    /// inside it fails with [`InvokeError::CyclicImport`]; concurrent
    /// importers on other threads block until it returns.
    pub fn register<F>(&self, path: impl AsRef<Path>, init: F)
    where
        F: Fn() -> Result<Module, InvokeError> + Send + Sync + 'static,
    {
        self.insert(path.as_ref(), Slot::deferred(Box::new(init)));
    }

    /// Register an already constructed module.
    pub fn register_module(&self, path: impl AsRef<Path>, module: Module) {
        self.insert(path.as_ref(), Slot::preloaded(module));
    }

    fn insert(&self, path: &Path, slot: Slot) {
        let key = module_key(path);
        let previous = self.slots.write().insert(key.clone(), Arc::new(slot));
        if previous.is_some() {
            tracing::debug!(module = %key, "replaced registered module");
        }
    }

    pub fn is_registered(&self, path: impl AsRef<Path>) -> bool {
        self.slots.read().contains_key(&module_key(path.as_ref()))
    }

    /// Registered module keys, sorted.
    pub fn modules(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of modules whose initialiser has completed.
    pub fn loaded_count(&self) -> usize {
        // Release the map before touching slots; a running initialiser may
        // be waiting to register.
        let slots: Vec<Arc<Slot>> = self.slots.read().values().cloned().collect();
        slots.iter().filter(|slot| slot.is_loaded()).count()
    }

    /// Load the module registered under `path`.
    ///
    /// Runs the initialiser on first import and caches the result. A failing
    /// initialiser's error is returned unchanged and nothing is cached.
    pub fn import(&self, path: impl AsRef<Path>) -> Result<Arc<Module>, InvokeError> {
        let key = module_key(path.as_ref());
        // Clone the slot out so the map lock is not held while initialising.
        let slot = self.slots.read().get(&key).cloned();
        match slot {
            Some(slot) => slot.load(&key),
            None => Err(InvokeError::ModuleNotFound { module: key }),
        }
    }

    /// Call `function` exported by the module at `module` with `args`.
    ///
    /// The module is imported now; the function runs when the returned future
    /// is first polled. Every failure, including a missing module or export,
    /// is delivered through the future. Errors produced by the function come
    /// back unchanged.
    pub fn apply(&self, module: &str, function: &str, args: Vec<Value>) -> Pending {
        let imported = self.import(module);
        let module = module.to_string();
        let function = function.to_string();

        tracing::trace!(module = %module, function = %function, argc = args.len(), "apply");

        async move {
            let imported = imported?;
            let export = imported.export(&function).ok_or_else(|| {
                InvokeError::NotAFunction {
                    module: module.clone(),
                    name: function.clone(),
                }
            })?;
            match export.call(args) {
                Some(pending) => pending.await,
                None => Err(InvokeError::NotAFunction {
                    module,
                    name: function,
                }),
            }
        }
        .boxed()
    }
}

/// Normalise a module path into a registry key.
///
/// Resolves `.` and `..` lexically and joins components with `/`, so
/// `./a/b/../c.mjs`, `a/c.mjs` and `a//c.mjs` share one key. Leading `..`
/// components of relative paths are kept.
pub fn module_key(path: &Path) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => parts.push(prefix.as_os_str().to_string_lossy()),
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = parts.last().is_some_and(|last| &**last != "..");
                if can_pop {
                    parts.pop();
                } else if !absolute {
                    parts.push(Cow::Borrowed(".."));
                }
            }
            Component::Normal(name) => parts.push(name.to_string_lossy()),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
