use crate::syntax::{CompilationUnit, MethodDecl, Node};
use compact_str::{CompactString, ToCompactString};
use rustc_hash::FxHashSet;

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
/// Metrics calculated using Halstead's Complexity Measures.
pub struct HalsteadMetrics {
    /// N1: Total number of operators.
    pub h1: usize,
    /// N2: Total number of operands.
    pub h2: usize,
    /// n1: Number of distinct operators.
    pub n1: usize,
    /// n2: Number of distinct operands.
    pub n2: usize,
    /// Halstead Program Vocabulary (n1 + n2).
    pub vocabulary: f64,
    /// Halstead Program Length (N1 + N2).
    pub length: f64,
    /// Halstead Volume (Length * log2(Vocabulary)).
    pub volume: f64,
    /// Halstead Difficulty ((n1 / 2) * (N2 / n2)).
    pub difficulty: f64,
    /// Halstead Effort (Difficulty * Volume).
    pub effort: f64,
    /// Estimated implementation time (Effort / 18).
    pub time: f64,
    /// Estimated number of delivered bugs (Volume / 3000).
    pub bugs: f64,
}

/// Calculates Halstead metrics for one method body.
#[must_use]
pub fn analyze_method(method: &MethodDecl) -> HalsteadMetrics {
    let mut visitor = HalsteadVisitor::new();
    for param in &method.params {
        visitor.add_operand(&param.name);
    }
    for node in &method.body {
        visitor.visit_node(node);
    }
    visitor.calculate_metrics()
}

/// Calculates Halstead metrics for each method in a unit, keyed by
/// `Class.method`.
#[must_use]
pub fn analyze_unit(unit: &CompilationUnit) -> Vec<(String, HalsteadMetrics)> {
    unit.methods()
        .map(|(class, method)| {
            (
                format!("{}.{}", class.name, method.name),
                analyze_method(method),
            )
        })
        .collect()
}

struct HalsteadVisitor {
    operators: FxHashSet<CompactString>,
    operands: FxHashSet<CompactString>,
    total_operators: usize,
    total_operands: usize,
}

impl HalsteadVisitor {
    fn new() -> Self {
        Self {
            operators: FxHashSet::default(),
            operands: FxHashSet::default(),
            total_operators: 0,
            total_operands: 0,
        }
    }

    fn add_operator(&mut self, op: &str) {
        self.operators.insert(op.to_compact_string());
        self.total_operators += 1;
    }

    fn add_operand(&mut self, op: &str) {
        self.operands.insert(op.to_compact_string());
        self.total_operands += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn calculate_metrics(&self) -> HalsteadMetrics {
        let n1 = self.operators.len() as f64;
        let n2 = self.operands.len() as f64;
        let n1_total = self.total_operators as f64;
        let n2_total = self.total_operands as f64;

        let vocabulary = n1 + n2;
        let length = n1_total + n2_total;
        let volume = if vocabulary > 0.0 {
            length * vocabulary.log2()
        } else {
            0.0
        };
        let difficulty = if n2 > 0.0 {
            (n1 / 2.0) * (n2_total / n2)
        } else {
            0.0
        };
        let effort = difficulty * volume;
        let time = effort / 18.0;
        let bugs = volume / 3000.0;

        HalsteadMetrics {
            h1: self.total_operators,
            h2: self.total_operands,
            n1: self.operators.len(),
            n2: self.operands.len(),
            vocabulary,
            length,
            volume,
            difficulty,
            effort,
            time,
            bugs,
        }
    }

    fn visit_body(&mut self, body: &[Node]) {
        for node in body {
            self.visit_node(node);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.add_operator("if");
                self.visit_node(cond);
                self.visit_body(then_branch);
                if !else_branch.is_empty() {
                    self.add_operator("else");
                    self.visit_body(else_branch);
                }
            }
            Node::Loop { kind, header, body } => {
                self.add_operator(match kind {
                    crate::syntax::LoopKind::For | crate::syntax::LoopKind::ForEach => "for",
                    crate::syntax::LoopKind::While => "while",
                    crate::syntax::LoopKind::DoWhile => "do",
                });
                self.visit_body(header);
                self.visit_body(body);
            }
            Node::Switch { scrutinee, cases } => {
                self.add_operator("switch");
                self.visit_node(scrutinee);
                for case in cases {
                    self.add_operator(if case.is_default { "default" } else { "case" });
                    self.visit_body(&case.body);
                }
            }
            Node::Try {
                body,
                catches,
                finally,
            } => {
                self.add_operator("try");
                self.visit_body(body);
                for catch in catches {
                    self.add_operator("catch");
                    self.add_operand(&catch.type_name);
                    self.visit_body(&catch.body);
                }
                if !finally.is_empty() {
                    self.add_operator("finally");
                    self.visit_body(finally);
                }
            }
            Node::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                self.add_operator("?:");
                self.visit_node(cond);
                self.visit_node(then_expr);
                self.visit_node(else_expr);
            }
            Node::Binary { op, lhs, rhs } => {
                self.add_operator(op.token());
                self.visit_node(lhs);
                self.visit_node(rhs);
            }
            Node::Unary { op, operand } => {
                self.add_operator(op);
                self.visit_node(operand);
            }
            Node::Assign { op, target, value } => {
                match op {
                    Some(compound) => self.add_operator(&format!("{}=", compound.token())),
                    None => self.add_operator("="),
                }
                self.visit_node(target);
                self.visit_node(value);
            }
            Node::Call {
                receiver,
                name,
                args,
            } => {
                // The call itself is an operator; the callee name is an operand
                self.add_operator("()");
                self.add_operand(name);
                if let Some(recv) = receiver {
                    self.visit_node(recv);
                }
                self.visit_body(args);
            }
            Node::New { type_name, args } => {
                self.add_operator("new");
                self.add_operand(type_name);
                self.visit_body(args);
            }
            Node::FieldAccess { receiver, name } => {
                self.add_operator(".");
                self.visit_node(receiver);
                self.add_operand(name);
            }
            Node::ArrayIndex { array, index } => {
                self.add_operator("[]");
                self.visit_node(array);
                self.visit_node(index);
            }
            Node::Cast { type_name, expr } => {
                self.add_operator("(cast)");
                self.add_operand(type_name);
                self.visit_node(expr);
            }
            Node::InstanceOf { expr, type_name } => {
                self.add_operator("instanceof");
                self.visit_node(expr);
                self.add_operand(type_name);
            }
            Node::Lambda { body } => {
                self.add_operator("->");
                self.visit_body(body);
            }
            Node::Literal(lit) => self.add_operand(&lit.token()),
            Node::Identifier(name) => self.add_operand(name),
            Node::This => self.add_operand("this"),
            Node::Super => self.add_operand("super"),
            Node::Return(value) => {
                self.add_operator("return");
                if let Some(v) = value {
                    self.visit_node(v);
                }
            }
            Node::Throw(expr) => {
                self.add_operator("throw");
                self.visit_node(expr);
            }
            Node::Break => self.add_operator("break"),
            Node::Continue => self.add_operator("continue"),
            Node::Block(body) => self.visit_body(body),
            Node::LocalVar {
                name,
                type_name,
                init,
            } => {
                self.add_operand(name);
                if !type_name.is_empty() {
                    self.add_operand(type_name);
                }
                if let Some(value) = init {
                    self.add_operator("=");
                    self.visit_node(value);
                }
            }
        }
    }
}
