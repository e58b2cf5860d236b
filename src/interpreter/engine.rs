// Execution engine for the operator tour

use crate::interpreter::errors::RuntimeError;
use crate::memory::scope::Scope;
use crate::memory::value::Value;
use crate::program::ast::{Expr, Program, Section, SourceLocation, Stmt};
use crate::terminal::Terminal;

/// The interpreter that executes a program
pub struct Interpreter {
    /// Program to run
    program: Program,

    /// Variable bindings shared by every section
    pub(crate) scope: Scope,

    /// Terminal capturing print output
    terminal: Terminal,

    /// Current source location being executed
    pub(crate) current_location: SourceLocation,

    /// Statements executed so far, loop bodies counted per iteration
    statements_executed: usize,

    /// Whether execution has finished
    finished: bool,
}

impl Interpreter {
    /// Create a new interpreter for the program
    pub fn new(program: Program) -> Self {
        Interpreter {
            program,
            scope: Scope::new(),
            terminal: Terminal::new(),
            current_location: SourceLocation::new(1, 1),
            statements_executed: 0,
            finished: false,
        }
    }

    /// Run every section from start to finish
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let sections = self.program.sections.clone();
        for section in &sections {
            self.run_section(section)?;
        }
        self.finished = true;
        Ok(())
    }

    /// Run a single section against the current bindings
    pub fn run_section(&mut self, section: &Section) -> Result<(), RuntimeError> {
        self.execute_block(&section.body)
    }

    pub(crate) fn execute_block(&mut self, body: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in body {
            self.execute_statement(stmt)?;
        }
        Ok(())
    }

    /// Execute a single statement
    fn execute_statement(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        self.current_location = stmt.location();
        self.statements_executed += 1;

        match stmt {
            Stmt::Assignment { name, value, .. } => self.execute_assignment(name, value),

            Stmt::CompoundAssignment {
                name,
                op,
                value,
                location,
            } => self.execute_compound_assignment(name, op, value, *location),

            Stmt::ForRange {
                var,
                start,
                end,
                body,
                location,
            } => self.execute_for_range(var, start, end, body, *location),

            Stmt::Print { args, location } => self.execute_print(args, *location),
        }
    }

    fn execute_print(
        &mut self,
        args: &[Expr],
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            rendered.push(self.evaluate_expr(arg)?.to_string());
        }
        self.terminal.print_line(rendered.join(" "), location);
        Ok(())
    }

    /// Look up a bound name
    pub(crate) fn lookup_variable(
        &self,
        name: &str,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        self.scope
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
                location,
            })
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Current value bound to `name`
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.scope.get(name)
    }

    pub fn statements_executed(&self) -> usize {
        self.statements_executed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
