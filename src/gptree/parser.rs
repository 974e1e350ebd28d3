//! Program parser
//!
//! The recursive entry point that turns a program description into a
//! validated node tree. A source string either is a terminal form (no
//! parenthesis anywhere) or a function form: an identifier, an opening
//! parenthesis, a separator-delimited argument list, and a closing
//! parenthesis. Function identifiers resolve through the registry, bare
//! tokens through the terminal chain, and the arity of every resolved node
//! must match its argument count exactly or the whole parse fails.
//!
//! A parser instance owns its registry, variable environment, and optional
//! context handle; all three are shared across every tree the instance
//! produces. The state is `Rc`-based and a parser instance must stay on one
//! thread; use one instance per thread.

pub mod splitter;
pub mod terminal;

use crate::gptree::environment::VariableEnvironment;
use crate::gptree::node::{Node, SharedContext, Variable};
use crate::gptree::registry::{FunctionRegistry, NodeFactory, RegistryError};
use std::fmt;
use std::rc::Rc;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A function-form identifier that is not in the registry
    UnknownFunction(String),
    /// A context-dependent function was parsed before a context was
    /// configured
    MissingContext(String),
    /// A structural mismatch: wrong argument count, an unresolvable
    /// terminal, or a missing closing parenthesis
    MalformedProgram(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownFunction(name) => write!(f, "Unknown function '{name}'"),
            ParseError::MissingContext(name) => {
                write!(f, "Function '{name}' requires a context object, but none was configured")
            }
            ParseError::MalformedProgram(detail) => write!(f, "Malformed program: {detail}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<RegistryError> for ParseError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownFunction(name) => ParseError::UnknownFunction(name),
            RegistryError::MissingContext(name) => ParseError::MissingContext(name),
        }
    }
}

/// Parser for nested function-call program descriptions.
///
/// ```rust-example
/// let mut parser = ProgramParser::new();
/// parser.add_available_variable(Variable::boolean("d0", false));
///
/// let tree = parser.parse("XOR(OR(d0,d0),NOT(d0))")?;
/// assert_eq!(tree.to_string(), "XOR(OR(d0,d0),NOT(d0))");
/// ```
pub struct ProgramParser {
    registry: FunctionRegistry,
    variables: VariableEnvironment,
    context: Option<SharedContext>,
}

impl ProgramParser {
    /// Create a parser seeded with the built-in function table.
    pub fn new() -> Self {
        ProgramParser {
            registry: FunctionRegistry::with_defaults(),
            variables: VariableEnvironment::new(),
            context: None,
        }
    }

    /// Create a parser over a custom registry.
    pub fn with_registry(registry: FunctionRegistry) -> Self {
        ProgramParser {
            registry,
            variables: VariableEnvironment::new(),
            context: None,
        }
    }

    /// Parse a program description into a node tree.
    ///
    /// Failure unwinds the whole parse; no partial tree is ever returned.
    /// Recursion follows the nesting depth of the input, so adversarially
    /// deep programs can exhaust the call stack. The argument substring of a
    /// function form runs from the first `(` to the *last* `)` in the text,
    /// which tolerates trailing characters after the logical closing
    /// parenthesis.
    pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
        self.parse_expr(source)
    }

    /// Absent-input passthrough variant: `None` parses to `Ok(None)` without
    /// a diagnostic.
    pub fn parse_opt(&self, source: Option<&str>) -> Result<Option<Node>, ParseError> {
        source.map(|text| self.parse(text)).transpose()
    }

    fn parse_expr(&self, source: &str) -> Result<Node, ParseError> {
        // No opening bracket anywhere means a terminal form.
        let Some(opening) = source.find('(') else {
            return terminal::resolve_terminal(source, &self.variables).ok_or_else(|| {
                ParseError::MalformedProgram(format!("cannot resolve terminal '{source}'"))
            });
        };

        let identifier = &source[..opening];
        let closing = source
            .rfind(')')
            .filter(|&closing| closing > opening)
            .ok_or_else(|| {
                ParseError::MalformedProgram(format!("no closing parenthesis in '{source}'"))
            })?;
        let args = splitter::split_arguments(&source[opening + 1..closing]);

        let node = self.registry.resolve(identifier, self.context.as_ref())?;
        if node.arity() != args.len() {
            return Err(ParseError::MalformedProgram(format!(
                "'{identifier}' takes {} argument(s), found {}",
                node.arity(),
                args.len()
            )));
        }

        match node {
            Node::Function(mut function) => {
                for arg in &args {
                    function.attach(self.parse_expr(arg)?);
                }
                Ok(Node::Function(function))
            }
            // A factory may produce a terminal; the zero-argument check above
            // already passed, so there is nothing to attach.
            terminal_node => Ok(terminal_node),
        }
    }

    /// Register a factory; an existing entry under the same name is silently
    /// replaced. Visible to every subsequent parse on this instance.
    pub fn register(&mut self, name: impl Into<String>, factory: impl NodeFactory + 'static) {
        self.registry.register(name, factory);
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Replace the available variables.
    pub fn set_available_variables(&mut self, variables: Vec<Rc<Variable>>) {
        self.variables.set_all(variables);
    }

    /// Append an available variable.
    pub fn add_available_variable(&mut self, variable: Rc<Variable>) {
        self.variables.add(variable);
    }

    /// Remove every available variable.
    pub fn clear_available_variables(&mut self) {
        self.variables.clear();
    }

    pub fn variables(&self) -> &VariableEnvironment {
        &self.variables
    }

    /// Configure the shared context handle bound into context-dependent
    /// functions. Must be called before parsing a program that uses them.
    pub fn set_context(&mut self, context: SharedContext) {
        self.context = Some(context);
    }

    pub fn context(&self) -> Option<&SharedContext> {
        self.context.as_ref()
    }
}

impl Default for ProgramParser {
    fn default() -> Self {
        Self::new()
    }
}
