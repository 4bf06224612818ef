//! Injectable-Body Merger - sequencing dependency-injected bodies.
//!
//! An *injectable body* pairs an ordered list of dependency names with a body
//! that receives exactly one service per name, in the same order. [`merge`]
//! combines several bodies into one whose dependency list is the
//! concatenation of theirs; running the merged body hands every original body
//! its own contiguous slice of the injected services, strictly in input order.
//!
//! The merger knows nothing about any particular injector: it only routes
//! index ranges over one flat service list, computed once at merge time.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::convert::Infallible;
//! use std::rc::Rc;
//! use fntoolbox::inject::{InjectableBody, merge};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let first_log = Rc::clone(&log);
//! let first = InjectableBody::new(["http"], move |services: &[&str]| {
//!     first_log.borrow_mut().push(services.join("+"));
//!     Ok::<(), Infallible>(())
//! });
//!
//! let second_log = Rc::clone(&log);
//! let second = InjectableBody::new(["scope", "timeout"], move |services: &[&str]| {
//!     second_log.borrow_mut().push(services.join("+"));
//!     Ok(())
//! });
//!
//! let merged = merge([first, second]);
//! assert_eq!(merged.dependencies(), ["http", "scope", "timeout"]);
//!
//! merged.invoke(&["$http", "$scope", "$timeout"]).unwrap();
//! assert_eq!(*log.borrow(), vec!["$http", "$scope+$timeout"]);
//! ```

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use crate::array::slice_view;

/// Errors raised when running an injectable body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InjectionError<E> {
    /// The number of injected services differs from the dependency count.
    #[error("expected {expected} injected services, got {actual}")]
    ArityMismatch {
        /// Number of declared dependencies.
        expected: usize,
        /// Number of services supplied.
        actual: usize,
    },
    /// A body faulted; the original error is carried and displayed unchanged.
    #[error("{0}")]
    Body(E),
}

impl<E> InjectionError<E> {
    /// Returns the body fault, if this is one.
    pub fn into_body(self) -> Option<E> {
        match self {
            Self::Body(error) => Some(error),
            Self::ArityMismatch { .. } => None,
        }
    }
}

type BodyFn<A, E> = dyn Fn(&[A]) -> Result<(), InjectionError<E>>;

/// Dependency names plus the body they are injected into.
pub struct InjectableBody<A, E>
where
    A: 'static,
    E: 'static,
{
    dependencies: Vec<String>,
    body: Rc<BodyFn<A, E>>,
}

impl<A, E> InjectableBody<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Creates a body that receives one service per dependency name.
    ///
    /// The body is trusted to consume exactly `dependencies.len()` services;
    /// [`InjectableBody::invoke`] enforces it at call time.
    pub fn new<N, S, F>(dependencies: N, body: F) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[A]) -> Result<(), E> + 'static,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            body: Rc::new(move |services: &[A]| body(services).map_err(InjectionError::Body)),
        }
    }

    /// The dependency names, in injection order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Number of services the body expects.
    pub fn arity(&self) -> usize {
        self.dependencies.len()
    }

    /// Runs the body with the injected services.
    ///
    /// # Errors
    ///
    /// - [`InjectionError::ArityMismatch`] when `services.len()` differs from
    ///   [`InjectableBody::arity`]; no body runs.
    /// - [`InjectionError::Body`] with the first body fault; later bodies of a
    ///   merged body do not run.
    pub fn invoke(&self, services: &[A]) -> Result<(), InjectionError<E>> {
        if services.len() != self.arity() {
            return Err(InjectionError::ArityMismatch {
                expected: self.arity(),
                actual: services.len(),
            });
        }
        (self.body)(services)
    }
}

impl<A, E> Clone for InjectableBody<A, E>
where
    A: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            dependencies: self.dependencies.clone(),
            body: Rc::clone(&self.body),
        }
    }
}

impl<A, E> fmt::Debug for InjectableBody<A, E>
where
    A: 'static,
    E: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InjectableBody")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// Merges injectable bodies into one that runs them sequentially.
///
/// - The merged dependency list is the concatenation of all input lists, in
///   order; repeated names are kept and routed independently.
/// - The merged body slices the injected services by the boundaries computed
///   here from each input's dependency count, and runs each input body with
///   its slice, in input order. Individual results are discarded.
/// - The first fault aborts the sequence and is returned unchanged.
///
/// Merging no bodies yields a body with no dependencies that does nothing.
pub fn merge<A, E, I>(bodies: I) -> InjectableBody<A, E>
where
    A: 'static,
    E: 'static,
    I: IntoIterator<Item = InjectableBody<A, E>>,
{
    let mut dependencies = Vec::new();
    let mut routes: Vec<(Range<usize>, Rc<BodyFn<A, E>>)> = Vec::new();
    for body in bodies {
        let begin = dependencies.len();
        dependencies.extend(body.dependencies);
        routes.push((begin..dependencies.len(), body.body));
    }
    tracing::trace!(
        bodies = routes.len(),
        dependencies = dependencies.len(),
        "merged injectable bodies"
    );

    let merged: Rc<BodyFn<A, E>> = Rc::new(move |services: &[A]| -> Result<(), InjectionError<E>> {
        for (range, body) in &routes {
            body(slice_view(services, range.start, range.end))?;
        }
        Ok(())
    });
    InjectableBody {
        dependencies,
        body: merged,
    }
}
