//! Capabilities the embedding runtime provides to resolvers.
//!
//! The host owns the set of defined classes and the ordered chain of class
//! resolvers. It calls each resolver with a class name that is referenced but
//! not yet defined and moves on to the next one when a resolver reports
//! [`Resolution::Unresolved`].

use crate::Resolution;

/// One link in a host's class-resolution chain.
pub trait ClassResolver {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Try to define `class` by loading its file. A miss must be a no-op.
    fn resolve_and_load(&mut self, class: &str) -> Resolution;
}

/// The host runtime's class registry.
pub trait ClassHost {
    fn class_exists(&self, class: &str) -> bool;

    /// Append `resolver` to the end of the resolution chain.
    fn register(&mut self, resolver: Box<dyn ClassResolver>);
}

/// A resolver that has been built but not yet registered with a host.
///
/// Registration is the one side effect of setting a resolver up and it
/// cannot be undone, so it is kept as an explicit call.
#[must_use = "a resolver does nothing until it is registered with a host"]
pub struct Registration {
    resolver: Box<dyn ClassResolver>,
}

impl Registration {
    pub fn new(resolver: Box<dyn ClassResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &dyn ClassResolver {
        self.resolver.as_ref()
    }

    pub fn resolver_mut(&mut self) -> &mut dyn ClassResolver {
        self.resolver.as_mut()
    }

    pub fn register<H: ClassHost + ?Sized>(self, host: &mut H) {
        log::debug!("Registering class resolver {}", self.resolver.name());
        host.register(self.resolver);
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("resolver", &self.resolver.name())
            .finish()
    }
}
