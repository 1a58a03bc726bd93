//! Owned syntax tree consumed by the metric calculators.
//!
//! The external parser (see [`crate::parser`]) lowers a tree-sitter CST into
//! these tagged-union nodes once per file; every calculator then walks the
//! tree read-only. Keeping an owned tree decouples the engine from parser
//! lifetimes and makes evaluation order explicit.

use serde::Serialize;

/// The kind of loop statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// Classic `for (init; cond; update)` loop.
    For,
    /// Enhanced `for (T x : xs)` loop.
    ForEach,
    /// `while` loop.
    While,
    /// `do { } while` loop.
    DoWhile,
}

/// Binary operators that the calculators care about.
///
/// Operators outside this set are lowered as [`BinaryOp::Other`] with their
/// source text preserved for Halstead counting.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// Short-circuit `&&`.
    And,
    /// Short-circuit `||`.
    Or,
    /// Any other operator, with its source text (`==`, `<`, `>>`, ...).
    Other(String),
}

impl BinaryOp {
    /// The operator's source text, used as a Halstead operator token.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::And => "&&",
            Self::Or => "||",
            Self::Other(t) => t,
        }
    }
}

/// Literal values. Only the distinctions the estimator needs are kept
/// (integer/float twos for the divide-and-conquer check); everything else
/// carries its raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal (raw text without quotes).
    Str(String),
    /// Character literal.
    Char(String),
    /// `true` / `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl Literal {
    /// Token text for Halstead operand counting.
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(s) => format!("\"{s}\""),
            Self::Char(c) => format!("'{c}'"),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_owned(),
        }
    }
}

/// One `case`/`default` arm of a switch statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// Whether this arm is the `default` label.
    pub is_default: bool,
    /// Statements in the arm.
    pub body: Vec<Node>,
}

/// A `catch` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// Declared exception type name.
    pub type_name: String,
    /// Handler body.
    pub body: Vec<Node>,
}

/// A statement or expression node.
///
/// Statements and expressions share one enum: the calculators never need the
/// distinction, and Java expression-statements blur it anyway.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `if` statement with optional else branch.
    If {
        /// Condition expression.
        cond: Box<Node>,
        /// `then` branch statements.
        then_branch: Vec<Node>,
        /// `else` branch statements (empty when absent).
        else_branch: Vec<Node>,
    },
    /// Any of the four loop statements.
    Loop {
        /// Loop flavor.
        kind: LoopKind,
        /// Header expressions (init/condition/update or iterable).
        header: Vec<Node>,
        /// Loop body.
        body: Vec<Node>,
    },
    /// `switch` statement.
    Switch {
        /// Scrutinee expression.
        scrutinee: Box<Node>,
        /// Case arms.
        cases: Vec<SwitchCase>,
    },
    /// `try`/`catch`/`finally`.
    Try {
        /// Guarded body.
        body: Vec<Node>,
        /// Catch clauses.
        catches: Vec<CatchClause>,
        /// Finally block (empty when absent).
        finally: Vec<Node>,
    },
    /// Ternary conditional `c ? a : b`.
    Ternary {
        /// Condition.
        cond: Box<Node>,
        /// Value when true.
        then_expr: Box<Node>,
        /// Value when false.
        else_expr: Box<Node>,
    },
    /// Binary expression.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Node>,
        /// Right operand.
        rhs: Box<Node>,
    },
    /// Unary expression; `op` is the source token (`!`, `-`, `++`, ...).
    Unary {
        /// Operator token.
        op: String,
        /// Operand.
        operand: Box<Node>,
    },
    /// Assignment, simple or compound. A compound assignment carries the
    /// underlying arithmetic operator so `x /= 2` participates in the
    /// divide-and-conquer check.
    Assign {
        /// `Some` for compound assignments (`+=`, `/=`, ...).
        op: Option<BinaryOp>,
        /// Assignment target.
        target: Box<Node>,
        /// Assigned value.
        value: Box<Node>,
    },
    /// Method invocation.
    Call {
        /// Receiver expression; `None` for unqualified calls.
        receiver: Option<Box<Node>>,
        /// Method name.
        name: String,
        /// Argument expressions.
        args: Vec<Node>,
    },
    /// `new T(...)`.
    New {
        /// Constructed type name.
        type_name: String,
        /// Constructor arguments.
        args: Vec<Node>,
    },
    /// Field access `recv.field`.
    FieldAccess {
        /// Receiver expression.
        receiver: Box<Node>,
        /// Field name.
        name: String,
    },
    /// Array indexing `a[i]`.
    ArrayIndex {
        /// Array expression.
        array: Box<Node>,
        /// Index expression.
        index: Box<Node>,
    },
    /// Cast `(T) e`.
    Cast {
        /// Target type name.
        type_name: String,
        /// Casted expression.
        expr: Box<Node>,
    },
    /// `e instanceof T`.
    InstanceOf {
        /// Tested expression.
        expr: Box<Node>,
        /// Tested type name.
        type_name: String,
    },
    /// Lambda expression; the body is kept for traversal.
    Lambda {
        /// Lambda body statements/expression.
        body: Vec<Node>,
    },
    /// Literal value.
    Literal(Literal),
    /// Plain identifier.
    Identifier(String),
    /// `this`.
    This,
    /// `super`.
    Super,
    /// `return`, with optional value.
    Return(Option<Box<Node>>),
    /// `throw`.
    Throw(Box<Node>),
    /// `break`.
    Break,
    /// `continue`.
    Continue,
    /// `{ ... }` block.
    Block(Vec<Node>),
    /// Local variable declaration.
    LocalVar {
        /// Variable name.
        name: String,
        /// Declared type name.
        type_name: String,
        /// Initializer, when present.
        init: Option<Box<Node>>,
    },
}

impl Node {
    /// Child nodes in source order. Drives the generic walkers so each
    /// calculator only matches the variants it cares about.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::If {
                cond,
                then_branch,
                else_branch,
            } => std::iter::once(&**cond)
                .chain(then_branch)
                .chain(else_branch)
                .collect(),
            Self::Loop { header, body, .. } => header.iter().chain(body).collect(),
            Self::Switch { scrutinee, cases } => std::iter::once(&**scrutinee)
                .chain(cases.iter().flat_map(|c| c.body.iter()))
                .collect(),
            Self::Try {
                body,
                catches,
                finally,
            } => body
                .iter()
                .chain(catches.iter().flat_map(|c| c.body.iter()))
                .chain(finally)
                .collect(),
            Self::Ternary {
                cond,
                then_expr,
                else_expr,
            } => vec![&**cond, &**then_expr, &**else_expr],
            Self::Binary { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            Self::Unary { operand, .. } => vec![&**operand],
            Self::Assign { target, value, .. } => vec![&**target, &**value],
            Self::Call { receiver, args, .. } => receiver
                .iter()
                .map(|r| &**r)
                .chain(args.iter())
                .collect(),
            Self::New { args, .. } => args.iter().collect(),
            Self::FieldAccess { receiver, .. } => vec![&**receiver],
            Self::ArrayIndex { array, index } => vec![&**array, &**index],
            Self::Cast { expr, .. } => vec![&**expr],
            Self::InstanceOf { expr, .. } => vec![&**expr],
            Self::Lambda { body } | Self::Block(body) => body.iter().collect(),
            Self::Return(value) => value.iter().map(|v| &**v).collect(),
            Self::Throw(expr) => vec![&**expr],
            Self::LocalVar { init, .. } => init.iter().map(|i| &**i).collect(),
            Self::Literal(_)
            | Self::Identifier(_)
            | Self::This
            | Self::Super
            | Self::Break
            | Self::Continue => Vec::new(),
        }
    }

    /// Compact textual rendering of a receiver expression, used to build
    /// `receiver.method` response-set strings and coupling names.
    /// Identifier chains render exactly; anything more complex collapses
    /// into a stable placeholder.
    #[must_use]
    pub fn receiver_text(&self) -> String {
        match self {
            Self::Identifier(name) => name.clone(),
            Self::This => "this".to_owned(),
            Self::Super => "super".to_owned(),
            Self::FieldAccess { receiver, name } => {
                format!("{}.{}", receiver.receiver_text(), name)
            }
            Self::Call { name, .. } => format!("{name}()"),
            Self::New { type_name, .. } => format!("new {type_name}"),
            Self::Literal(lit) => lit.token(),
            _ => "<expr>".to_owned(),
        }
    }

    /// Whether this expression is `this` or `super` (directly).
    #[must_use]
    pub fn is_self_reference(&self) -> bool {
        matches!(self, Self::This | Self::Super)
    }
}

/// A method (or constructor) parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Declared type name.
    pub type_name: String,
}

/// Name, arity and extent of a method. Derived once per method during
/// lowering; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSignature {
    /// Method name.
    pub name: String,
    /// Number of declared parameters.
    pub param_count: usize,
    /// 1-indexed first line.
    pub start_line: usize,
    /// 1-indexed last line.
    pub end_line: usize,
}

impl MethodSignature {
    /// Source lines spanned by the method, never reported as zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// A method declaration with its lowered body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Declared parameters.
    pub params: Vec<Param>,
    /// Return type name; `None` for constructors and `void`.
    pub return_type: Option<String>,
    /// Lowered body statements.
    pub body: Vec<Node>,
    /// 1-indexed first line.
    pub start_line: usize,
    /// 1-indexed last line.
    pub end_line: usize,
}

impl MethodDecl {
    /// The immutable signature of this method.
    #[must_use]
    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            param_count: self.params.len(),
            start_line: self.start_line,
            end_line: self.end_line,
        }
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type name.
    pub type_name: String,
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Class name.
    pub name: String,
    /// Direct superclass name from `extends`, when present.
    pub superclass: Option<String>,
    /// Implemented interface names.
    pub interfaces: Vec<String>,
    /// Whether this declaration is an interface.
    pub is_interface: bool,
    /// Declared fields.
    pub fields: Vec<FieldDecl>,
    /// Declared methods and constructors.
    pub methods: Vec<MethodDecl>,
    /// 1-indexed declaration line.
    pub line: usize,
}

/// The lowered contents of one source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    /// Top-level (and nested, flattened) class declarations.
    pub classes: Vec<ClassDecl>,
}

impl CompilationUnit {
    /// All methods across all classes, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = (&ClassDecl, &MethodDecl)> {
        self.classes
            .iter()
            .flat_map(|c| c.methods.iter().map(move |m| (c, m)))
    }
}

/// Strips generic arguments and array suffixes from a type name:
/// `List<Foo>[]` becomes `List`.
#[must_use]
pub fn base_type_name(type_name: &str) -> &str {
    let end = type_name
        .find(['<', '['])
        .unwrap_or(type_name.len());
    type_name[..end].trim()
}

/// Walks `node` and its subtree in depth-first pre-order, calling `f` on
/// every node.
pub fn walk<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    f(node);
    for child in node.children() {
        walk(child, f);
    }
}

/// Walks every statement of a method body.
pub fn walk_body<'a>(body: &'a [Node], f: &mut impl FnMut(&'a Node)) {
    for node in body {
        walk(node, f);
    }
}
