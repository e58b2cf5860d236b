//! Programmatic construction of tour programs
//!
//! [`ProgramBuilder`] plays the role a parser would: it produces a
//! [`Program`] and stamps every statement with a [`SourceLocation`]. Lines are
//! numbered in program order starting at 1, so a runtime error points at the
//! N-th statement of the listing. Loop bodies are numbered after their loop
//! header.
//!
//! ```
//! use optour::program::builder::*;
//! use optour::program::ast::BinOp;
//!
//! let program = ProgramBuilder::new()
//!     .section("arithmetic", |b| {
//!         b.assign("a", int(10));
//!         b.labeled("Addition:", binary(BinOp::Add, var("a"), int(3)));
//!     })
//!     .build();
//!
//! assert_eq!(program.statement_count(), 2);
//! ```

use crate::program::ast::{BinOp, Expr, Program, Section, SourceLocation, Stmt, UnOp};

pub fn int(n: i64) -> Expr {
    Expr::IntLiteral(n)
}

pub fn float(x: f64) -> Expr {
    Expr::FloatLiteral(x)
}

pub fn boolean(b: bool) -> Expr {
    Expr::BoolLiteral(b)
}

pub fn string(s: &str) -> Expr {
    Expr::StringLiteral(s.to_string())
}

pub fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn unary(op: UnOp, operand: Expr) -> Expr {
    Expr::UnaryOp {
        op,
        operand: Box::new(operand),
    }
}

pub fn and(left: Expr, right: Expr) -> Expr {
    binary(BinOp::And, left, right)
}

pub fn or(left: Expr, right: Expr) -> Expr {
    binary(BinOp::Or, left, right)
}

pub fn not(operand: Expr) -> Expr {
    unary(UnOp::Not, operand)
}

/// Builds a [`Program`] section by section
#[derive(Debug)]
pub struct ProgramBuilder {
    program: Program,
    next_line: usize,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        ProgramBuilder {
            program: Program::default(),
            next_line: 1,
        }
    }

    pub fn section(mut self, title: &str, build: impl FnOnce(&mut BlockBuilder<'_>)) -> Self {
        let mut block = BlockBuilder {
            stmts: Vec::new(),
            next_line: &mut self.next_line,
        };
        build(&mut block);
        let body = block.stmts;
        self.program.sections.push(Section {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends statements to a section or loop body
#[derive(Debug)]
pub struct BlockBuilder<'a> {
    stmts: Vec<Stmt>,
    next_line: &'a mut usize,
}

impl BlockBuilder<'_> {
    fn location(&mut self) -> SourceLocation {
        let location = SourceLocation::new(*self.next_line, 1);
        *self.next_line += 1;
        location
    }

    pub fn assign(&mut self, name: &str, value: Expr) -> &mut Self {
        let location = self.location();
        self.stmts.push(Stmt::Assignment {
            name: name.to_string(),
            value,
            location,
        });
        self
    }

    pub fn compound_assign(&mut self, name: &str, op: BinOp, value: Expr) -> &mut Self {
        let location = self.location();
        self.stmts.push(Stmt::CompoundAssignment {
            name: name.to_string(),
            op,
            value,
            location,
        });
        self
    }

    pub fn print(&mut self, args: Vec<Expr>) -> &mut Self {
        let location = self.location();
        self.stmts.push(Stmt::Print { args, location });
        self
    }

    /// `print("<label>", value)`: renders as `<label> <value>`
    pub fn labeled(&mut self, label: &str, value: Expr) -> &mut Self {
        self.print(vec![string(label), value])
    }

    pub fn for_range(
        &mut self,
        var: &str,
        start: Expr,
        end: Expr,
        build: impl FnOnce(&mut BlockBuilder<'_>),
    ) -> &mut Self {
        let location = self.location();
        let mut inner = BlockBuilder {
            stmts: Vec::new(),
            next_line: &mut *self.next_line,
        };
        build(&mut inner);
        let body = inner.stmts;
        self.stmts.push(Stmt::ForRange {
            var: var.to_string(),
            start,
            end,
            body,
            location,
        });
        self
    }
}
