//! Namespaced registry of exported values.
//!
//! A [`Registry`] maps dot-separated paths such as
//! `"js_toolbox.personal.compose"` to values. Values are bound through
//! [`Package`] handles that qualify names with their package path. Binding
//! a name twice is an error: [`Registry::register`] fails with
//! [`RegistryError::AlreadyDefined`] instead of silently replacing the value.
//!
//! Package creation and bindings are reported at `tracing::debug!` level.
//!
//! # Examples
//!
//! ```rust
//! use fntoolbox::registry::{Registry, RegistryError};
//!
//! let mut registry = Registry::new();
//! registry.in_package(&["js_toolbox", "personal"], |package| {
//!     package.register("identity", 1)?;
//!     package.register("compose", 2)
//! })?;
//!
//! assert_eq!(registry.lookup("js_toolbox.personal.compose"), Some(&2));
//! assert!(matches!(
//!     registry.register("js_toolbox.personal.compose", 3),
//!     Err(RegistryError::AlreadyDefined { .. })
//! ));
//! # Ok::<(), RegistryError>(())
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "fxhash")]
type EntryMap<V> = rustc_hash::FxHashMap<String, V>;

#[cfg(not(feature = "fxhash"))]
type EntryMap<V> = std::collections::HashMap<String, V>;

const SEPARATOR: char = '.';

/// Errors raised by [`Registry`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The qualified name is already bound.
    #[error("{name} was already defined in {package}")]
    AlreadyDefined {
        /// The simple name.
        name: String,
        /// The package path, `<root>` for the top level.
        package: String,
    },
    /// A name segment is empty or contains the path separator.
    #[error("invalid name {0:?}")]
    InvalidName(String),
}

/// A map from qualified paths to values, organized in packages.
#[derive(Debug, Clone)]
pub struct Registry<V> {
    entries: EntryMap<V>,
    packages: BTreeSet<String>,
}

impl<V> Registry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: EntryMap::default(),
            packages: BTreeSet::new(),
        }
    }

    /// Binds `path` to `value`.
    ///
    /// `path` may be qualified (`"a.b.name"`); its package prefix is created
    /// on the fly.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidName`] when a segment of `path` is empty
    /// - [`RegistryError::AlreadyDefined`] when `path` is already bound
    pub fn register(&mut self, path: &str, value: V) -> Result<(), RegistryError> {
        match path.rsplit_once(SEPARATOR) {
            Some((package, name)) => {
                validate(name)?;
                let segments: Vec<&str> = package.split(SEPARATOR).collect();
                let mut package = self.open(&segments)?;
                package.register(name, value)
            }
            None => self.root().register(path, value),
        }
    }

    /// Opens the top-level package with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for an invalid name.
    pub fn package(&mut self, name: &str) -> Result<Package<'_, V>, RegistryError> {
        self.root().into_package(name)
    }

    /// Opens the nested package at `path` and runs `body` with it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while opening the packages or by `body`.
    pub fn in_package<F>(&mut self, path: &[&str], body: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut Package<'_, V>) -> Result<(), RegistryError>,
    {
        let mut package = self.open(path)?;
        tracing::debug!(package = %package.display_path(), "creating package");
        body(&mut package)?;
        tracing::debug!(package = %package.display_path(), "done creating package");
        Ok(())
    }

    /// Returns the value bound to the qualified `path`.
    pub fn lookup(&self, path: &str) -> Option<&V> {
        self.entries.get(path)
    }

    /// Returns `true` if a package with the qualified `path` was opened.
    pub fn has_package(&self, path: &str) -> bool {
        self.packages.contains(path)
    }

    /// All bound paths, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn root(&mut self) -> Package<'_, V> {
        Package {
            registry: self,
            path: String::new(),
        }
    }

    fn open(&mut self, path: &[&str]) -> Result<Package<'_, V>, RegistryError> {
        path.iter().try_for_each(|segment| validate(segment))?;
        path.iter()
            .try_fold(self.root(), |package, segment| package.into_package(segment))
    }

    fn create_package(&mut self, path: &str) {
        if self.packages.insert(path.to_string()) {
            tracing::debug!(package = path, "created package object");
        }
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle that binds names inside one package of a [`Registry`].
#[derive(Debug)]
pub struct Package<'r, V> {
    registry: &'r mut Registry<V>,
    path: String,
}

impl<V> Package<'_, V> {
    /// The qualified path of this package; empty for the top level.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Binds `name` to `value` in this package.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidName`] when `name` is empty or contains `.`
    /// - [`RegistryError::AlreadyDefined`] when the qualified name is bound
    pub fn register(&mut self, name: &str, value: V) -> Result<(), RegistryError> {
        validate(name)?;
        let qualified = self.qualify(name);
        if self.registry.entries.contains_key(&qualified) {
            return Err(RegistryError::AlreadyDefined {
                name: name.to_string(),
                package: self.display_path().to_string(),
            });
        }
        tracing::debug!(
            name,
            package = %self.display_path(),
            value_type = std::any::type_name::<V>(),
            "bound value"
        );
        self.registry.entries.insert(qualified, value);
        Ok(())
    }

    /// Binds every `(name, value)` pair, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Package::register`].
    pub fn register_all<'n, I>(&mut self, exports: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (&'n str, V)>,
    {
        exports
            .into_iter()
            .try_for_each(|(name, value)| self.register(name, value))
    }

    /// Opens a nested package.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for an invalid name.
    pub fn package(&mut self, name: &str) -> Result<Package<'_, V>, RegistryError> {
        validate(name)?;
        let path = self.qualify(name);
        self.registry.create_package(&path);
        Ok(Package {
            registry: &mut *self.registry,
            path,
        })
    }

    fn into_package(self, name: &str) -> Result<Self, RegistryError> {
        validate(name)?;
        let path = self.qualify(name);
        self.registry.create_package(&path);
        Ok(Self {
            registry: self.registry,
            path,
        })
    }

    fn qualify(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}{SEPARATOR}{name}", self.path)
        }
    }

    fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

fn validate(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() || name.contains(SEPARATOR) {
        Err(RegistryError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}
