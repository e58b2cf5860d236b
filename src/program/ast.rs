// AST definitions for the operator tour

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    FloorDiv,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitShl,
    BitShr,
}

impl BinOp {
    /// Operator spelling as it appears in source
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::FloorDiv => "//",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::BitShl => "<<",
            BinOp::BitShr => ">>",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,    // -x
    Not,    // not x
    BitNot, // ~x
}

impl UnOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "not",
            UnOp::BitNot => "~",
        }
    }
}

/// Expressions. Locations live on the enclosing statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    StringLiteral(String),
    Variable(String),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
    },
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name = value`
    Assignment {
        name: String,
        value: Expr,
        location: SourceLocation,
    },

    /// `name op= value`
    CompoundAssignment {
        name: String,
        op: BinOp,
        value: Expr,
        location: SourceLocation,
    },

    /// `for var in range(start, end): body`
    ForRange {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
        location: SourceLocation,
    },

    /// Print every argument separated by a single space
    Print {
        args: Vec<Expr>,
        location: SourceLocation,
    },
}

impl Stmt {
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Assignment { location, .. }
            | Stmt::CompoundAssignment { location, .. }
            | Stmt::ForRange { location, .. }
            | Stmt::Print { location, .. } => *location,
        }
    }
}

/// A titled group of statements
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: Vec<Stmt>,
}

/// Program root: sections run in order against one shared scope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub sections: Vec<Section>,
}

impl Program {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Total number of statements, loop bodies included
    pub fn statement_count(&self) -> usize {
        fn count(body: &[Stmt]) -> usize {
            body.iter()
                .map(|stmt| match stmt {
                    Stmt::ForRange { body, .. } => 1 + count(body),
                    _ => 1,
                })
                .sum()
        }
        self.sections.iter().map(|s| count(&s.body)).sum()
    }
}
