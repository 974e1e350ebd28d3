//! Function registry for node construction
//!
//! This module provides the name-keyed, runtime-extensible mapping from
//! function identifiers to node factories. Each factory implements the
//! `NodeFactory` trait and can be registered with `FunctionRegistry`;
//! registration silently overwrites, and resolution is a single
//! case-sensitive lookup. Context-dependent factories receive the optional
//! shared context handle at resolution time and fail when it is absent.

use crate::gptree::functions;
use crate::gptree::node::{Node, SharedContext};
use std::collections::HashMap;
use std::fmt;

/// Error that can occur while resolving a name to a node
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No factory registered under the name
    UnknownFunction(String),
    /// The factory needs a context handle and none was configured
    MissingContext(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownFunction(name) => write!(f, "Unknown function '{name}'"),
            RegistryError::MissingContext(name) => {
                write!(f, "Function '{name}' requires a context object, but none was configured")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Trait for node factories
///
/// A factory produces a fresh node each time its name resolves. Closures of
/// the matching signature implement it automatically, so both closure
/// factories and hand-written factory types register the same way.
pub trait NodeFactory {
    /// Build a fresh node, optionally using the configured context handle.
    fn build(&self, context: Option<&SharedContext>) -> Result<Node, RegistryError>;
}

impl<F> NodeFactory for F
where
    F: Fn(Option<&SharedContext>) -> Result<Node, RegistryError>,
{
    fn build(&self, context: Option<&SharedContext>) -> Result<Node, RegistryError> {
        self(context)
    }
}

/// Registry of node factories keyed by function name
///
/// Provides the single lookup point for turning a function-form identifier
/// into a fresh node. Names can be registered and re-registered at any time
/// between parses.
pub struct FunctionRegistry {
    factories: HashMap<String, Box<dyn NodeFactory>>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FunctionRegistry {
            factories: HashMap::new(),
        }
    }

    /// Create a registry seeded with the built-in function table
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        functions::register_builtins(&mut registry);
        registry
    }

    /// Register a factory under a name
    ///
    /// If a factory with the same name already exists, it will be replaced.
    pub fn register(&mut self, name: impl Into<String>, factory: impl NodeFactory + 'static) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Check if a name is registered
    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Resolve a name to a freshly built node
    ///
    /// A single keyed lookup; no case folding, no fuzzy matching. The context
    /// handle is injected into the factory rather than read from shared
    /// state, so context-dependent entries fail here, at resolution time,
    /// when no context is configured.
    pub fn resolve(
        &self,
        name: &str,
        context: Option<&SharedContext>,
    ) -> Result<Node, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFunction(name.to_string()))?;
        factory.build(context)
    }

    /// List all registered function names (sorted)
    pub fn list_functions(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
