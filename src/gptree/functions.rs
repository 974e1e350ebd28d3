//! Built-in function table
//!
//! Three families of context-free functions (boolean logic, arithmetic and
//! trigonometry, fixed-arity sequencing actions) plus the agent actions,
//! whose factories bind the configured context handle into the node they
//! produce. The tables pair each name with its arity; what a name *means* is
//! the consuming engine's business.

use crate::gptree::node::{FunctionNode, Node, SharedContext};
use crate::gptree::registry::{FunctionRegistry, NodeFactory, RegistryError};
use std::rc::Rc;

/// Boolean-logic operators: name and arity.
pub const BOOLEAN_FUNCTIONS: &[(&str, usize)] = &[
    ("AND", 2),
    ("IFF", 2),
    ("IF", 3),
    ("IMPLIES", 2),
    ("NAND", 2),
    ("NOR", 2),
    ("NOT", 1),
    ("OR", 2),
    ("XOR", 2),
];

/// Arithmetic and trigonometric operators: name and arity.
pub const ARITHMETIC_FUNCTIONS: &[(&str, usize)] = &[
    ("ABS", 1),
    ("ADD", 2),
    ("ACOS", 1),
    ("ASIN", 1),
    ("ATAN", 1),
    ("CVP", 3),
    ("COSEC", 1),
    ("COS", 1),
    ("COT", 1),
    ("CUBE", 1),
    ("EXP", 1),
    ("FACTORIAL", 1),
    ("GT", 2),
    ("COSH", 1),
    ("SINH", 1),
    ("TANH", 1),
    ("INV", 1),
    ("LOG-10", 1),
    ("LN", 1),
    ("LT", 2),
    ("MAX", 2),
    ("MIN", 2),
    ("MOD", 2),
    ("MUL", 2),
    ("POW", 2),
    ("PDIV", 2),
    ("SEC", 1),
    ("SGN", 1),
    ("SIN", 1),
    ("SQUARE", 1),
    ("SQRT", 1),
    ("SUB", 2),
    ("TAN", 1),
];

/// Fixed-arity sequencing actions: name and arity.
pub const SEQUENCE_FUNCTIONS: &[(&str, usize)] = &[("SEQ2", 2), ("SEQ3", 3), ("SEQ4", 4)];

/// Agent actions: name and arity. These require a configured context handle.
pub const AGENT_FUNCTIONS: &[(&str, usize)] = &[
    ("IF-FOOD-AHEAD", 2),
    ("MOVE", 0),
    ("TURN-LEFT", 0),
    ("TURN-RIGHT", 0),
    ("SKIP", 0),
];

/// Factory for a context-free function with a fixed name and arity.
pub struct SimpleFunction {
    name: &'static str,
    arity: usize,
}

impl SimpleFunction {
    pub const fn new(name: &'static str, arity: usize) -> Self {
        SimpleFunction { name, arity }
    }
}

impl NodeFactory for SimpleFunction {
    fn build(&self, _context: Option<&SharedContext>) -> Result<Node, RegistryError> {
        Ok(Node::Function(FunctionNode::new(self.name, self.arity)))
    }
}

/// Factory for an agent action.
///
/// Binds the configured context handle into the produced node and fails with
/// `MissingContext` when none is configured.
pub struct AgentAction {
    name: &'static str,
    arity: usize,
}

impl AgentAction {
    pub const fn new(name: &'static str, arity: usize) -> Self {
        AgentAction { name, arity }
    }
}

impl NodeFactory for AgentAction {
    fn build(&self, context: Option<&SharedContext>) -> Result<Node, RegistryError> {
        match context {
            Some(context) => Ok(Node::Function(FunctionNode::with_context(
                self.name,
                self.arity,
                Rc::clone(context),
            ))),
            None => Err(RegistryError::MissingContext(self.name.to_string())),
        }
    }
}

/// Seed a registry with the complete built-in table.
pub fn register_builtins(registry: &mut FunctionRegistry) {
    let simple = BOOLEAN_FUNCTIONS
        .iter()
        .chain(ARITHMETIC_FUNCTIONS)
        .chain(SEQUENCE_FUNCTIONS);
    for &(name, arity) in simple {
        registry.register(name, SimpleFunction::new(name, arity));
    }
    for &(name, arity) in AGENT_FUNCTIONS {
        registry.register(name, AgentAction::new(name, arity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_resolves_with_its_declared_arity() {
        let registry = FunctionRegistry::with_defaults();
        let context: SharedContext = Rc::new(());

        let all = BOOLEAN_FUNCTIONS
            .iter()
            .chain(ARITHMETIC_FUNCTIONS)
            .chain(SEQUENCE_FUNCTIONS)
            .chain(AGENT_FUNCTIONS);
        for &(name, arity) in all {
            let node = registry.resolve(name, Some(&context)).unwrap();
            assert_eq!(node.label(), name);
            assert_eq!(node.arity(), arity, "arity of {name}");
            assert!(node.children().is_empty());
        }
    }

    #[test]
    fn agent_actions_fail_without_a_context() {
        let registry = FunctionRegistry::with_defaults();

        for &(name, _) in AGENT_FUNCTIONS {
            let err = registry.resolve(name, None).unwrap_err();
            assert_eq!(err, RegistryError::MissingContext(name.to_string()));
        }
    }

    #[test]
    fn agent_actions_carry_the_context_handle() {
        let registry = FunctionRegistry::with_defaults();
        let context: SharedContext = Rc::new(());

        let node = registry.resolve("MOVE", Some(&context)).unwrap();
        let function = node.as_function().unwrap();
        assert!(Rc::ptr_eq(function.context().unwrap(), &context));
    }

    #[test]
    fn simple_functions_ignore_the_context() {
        let registry = FunctionRegistry::with_defaults();
        let context: SharedContext = Rc::new(());

        let node = registry.resolve("ADD", Some(&context)).unwrap();
        assert!(node.as_function().unwrap().context().is_none());
    }
}
