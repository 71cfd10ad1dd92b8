//! Modules and their exports.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::promise::{pending_from, IntoPending, Outcome, Pending};
use crate::value::Value;

type NativeFn = dyn Fn(Vec<Value>) -> Pending + Send + Sync;

/// A single export of a module.
#[derive(Clone)]
pub enum Export {
    /// A callable export. Sync functions are stored already wrapped in a
    /// ready future.
    Function(Arc<NativeFn>),
    /// A non-callable export.
    Constant(Value),
}

impl Export {
    pub fn is_callable(&self) -> bool {
        matches!(self, Export::Function(_))
    }

    /// Call the export with positional arguments.
    ///
    /// Returns `None` for constants. The function body runs here; only its
    /// asynchronous part is deferred to the returned future.
    pub fn call(&self, args: Vec<Value>) -> Option<Pending> {
        match self {
            Export::Function(f) => Some(f(args)),
            Export::Constant(_) => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            Export::Constant(value) => Some(value),
            Export::Function(_) => None,
        }
    }
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Function(_) => write!(f, "Function(..)"),
            Export::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
        }
    }
}

/// A loaded module: a name and its exports.
#[derive(Clone, Debug)]
pub struct Module {
    name: String,
    exports: FxHashMap<String, Export>,
}

impl Module {
    pub fn builder(name: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder {
            name: name.into(),
            exports: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn export(&self, name: &str) -> Option<&Export> {
        self.exports.get(name)
    }

    /// Export names, sorted.
    pub fn exports(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.exports.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Builder for [`Module`].
///
/// Later exports with the same name replace earlier ones.
pub struct ModuleBuilder {
    name: String,
    exports: FxHashMap<String, Export>,
}

impl ModuleBuilder {
    /// Add a synchronous function.
    #[must_use]
    pub fn function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Outcome + Send + Sync + 'static,
    {
        let native = move |args: Vec<Value>| f(args).into_pending();
        self.exports
            .insert(name.into(), Export::Function(Arc::new(native)));
        self
    }

    /// Add a function returning a future.
    #[must_use]
    pub fn async_function<F, Fut>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome> + Send + 'static,
    {
        let native = move |args: Vec<Value>| pending_from(f(args));
        self.exports
            .insert(name.into(), Export::Function(Arc::new(native)));
        self
    }

    /// Add a non-callable export.
    #[must_use]
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.exports
            .insert(name.into(), Export::Constant(value.into()));
        self
    }

    pub fn build(self) -> Module {
        Module {
            name: self.name,
            exports: self.exports,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::InvokeError;
    use pretty_assertions::assert_eq;

    fn sample() -> Module {
        Module::builder("sample")
            .function("add", |args| {
                let sum = args.iter().filter_map(Value::as_int).sum::<i64>();
                Ok(Value::Int(sum))
            })
            .async_function("echo", |args| async move {
                Ok(args.into_iter().next().unwrap_or_default())
            })
            .constant("answer", 42_i64)
            .build()
    }

    #[test]
    fn test_exports_are_sorted() {
        let module = sample();
        assert_eq!(module.name(), "sample");
        assert_eq!(module.exports(), vec!["add", "answer", "echo"]);
        assert_eq!(module.len(), 3);
    }

    #[test]
    fn test_callable_and_constant() {
        let module = sample();
        assert!(module.export("add").unwrap().is_callable());
        let answer = module.export("answer").unwrap();
        assert!(!answer.is_callable());
        assert_eq!(answer.as_constant(), Some(&Value::Int(42)));
        assert!(answer.call(vec![]).is_none());
    }

    #[tokio::test]
    async fn test_call_sync_and_async() {
        let module = sample();
        let sum = module
            .export("add")
            .unwrap()
            .call(vec![Value::Int(1), Value::Int(2)])
            .unwrap()
            .await;
        assert_eq!(sum, Ok(Value::Int(3)));

        let echoed = module
            .export("echo")
            .unwrap()
            .call(vec![Value::from("hi")])
            .unwrap()
            .await;
        assert_eq!(echoed, Ok(Value::from("hi")));
    }

    #[test]
    fn test_later_export_replaces_earlier() {
        let module = Module::builder("m")
            .constant("x", 1_i64)
            .function("x", |_| Err(InvokeError::raised("replaced")))
            .build();
        assert_eq!(module.len(), 1);
        assert!(module.export("x").unwrap().is_callable());
    }
}
