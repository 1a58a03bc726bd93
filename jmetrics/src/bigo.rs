//! Heuristic algorithmic-complexity (Big-O) estimation.
//!
//! Estimates a growth class per method from loop nesting, recursion shape
//! and collection/stream call chains. The estimator is deliberately
//! approximate: it recognizes patterns, it does not prove bounds. All
//! triggered rules contribute to the reason string and the dominant class
//! wins.

use crate::constants::{LINEAR_OPS, LOG_OPS, SORT_OPS, STREAM_START_OPS, STRING_OPS};
use crate::syntax::{BinaryOp, ClassDecl, CompilationUnit, Literal, LoopKind, MethodDecl, Node};
use serde::Serialize;
use smallvec::SmallVec;
use std::path::{Path, PathBuf};

/// Asymptotic growth-rate bucket, ordered by dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BigO {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n²)
    Quadratic,
    /// O(n³)
    Cubic,
    /// O(2ⁿ)
    Exponential,
}

impl std::fmt::Display for BigO {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
            Self::Cubic => "O(n^3)",
            Self::Exponential => "O(2^n)",
        };
        f.write_str(label)
    }
}

impl BigO {
    /// The class of a loop nest `depth` levels deep. Anything past three
    /// levels stays cubic; the reason string calls it out instead.
    #[must_use]
    pub fn from_loop_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Constant,
            1 => Self::Linear,
            2 => Self::Quadratic,
            _ => Self::Cubic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One above-constant complexity estimate for a method.
pub struct ComplexityInfo {
    /// File the method lives in.
    pub file: PathBuf,
    /// `Class.method` label.
    pub method: String,
    /// 1-indexed line of the method declaration.
    pub line: usize,
    /// Dominant inferred class.
    pub class: BigO,
    /// Deepest observed loop nesting.
    pub nested_depth: usize,
    /// Human-readable accumulation of every triggered rule.
    pub reason: String,
}

/// Estimates the complexity of every method in a unit. Methods that stay
/// O(1) produce nothing.
#[must_use]
pub fn analyze_unit(unit: &CompilationUnit, file: &Path) -> Vec<ComplexityInfo> {
    let mut infos = Vec::new();
    for class in &unit.classes {
        for method in &class.methods {
            if let Some(info) = estimate(method, class, file) {
                infos.push(info);
            }
        }
    }
    infos
}

/// Estimates one method. Returns `None` when no rule fires above O(1).
///
/// Running the estimator twice over the same body yields the same result;
/// the walk carries no state between calls.
#[must_use]
pub fn estimate(method: &MethodDecl, class: &ClassDecl, file: &Path) -> Option<ComplexityInfo> {
    let mut acc = Accumulator::default();
    let mut walker = Walker {
        method_name: &method.name,
        method_arity: method.params.len(),
        acc: &mut acc,
    };
    for node in &method.body {
        walker.visit(node);
    }

    let mut candidates: Vec<(BigO, String)> = Vec::new();

    // Rule 1: loop nesting
    match acc.max_depth {
        0 => {}
        1 => {
            if acc.top_level_loops > 1 {
                candidates.push((
                    BigO::Linear,
                    format!(
                        "{} sequential loops (still O(n))",
                        acc.top_level_loops
                    ),
                ));
            } else {
                candidates.push((BigO::Linear, "single loop".to_owned()));
            }
        }
        2 => candidates.push((BigO::Quadratic, "nested loops (depth 2)".to_owned())),
        3 => candidates.push((BigO::Cubic, "nested loops (depth 3)".to_owned())),
        d => candidates.push((
            BigO::Cubic,
            format!("deeply nested loops (depth {d})"),
        )),
    }

    // Rule 2: recursion arity, with the divide-and-conquer heuristic.
    // The heuristic is a division by 2 anywhere in the body plus any
    // conditional; it stays intentionally loose.
    let divide_and_conquer = acc.divides_by_two && acc.has_conditional;
    match acc.recursive_calls {
        0 => {}
        1 => {
            if divide_and_conquer {
                candidates.push((
                    BigO::Logarithmic,
                    "divide-and-conquer recursion".to_owned(),
                ));
            } else {
                candidates.push((BigO::Linear, "single recursion".to_owned()));
            }
        }
        2 => {
            if divide_and_conquer {
                candidates.push((
                    BigO::Logarithmic,
                    "divide-and-conquer recursion".to_owned(),
                ));
            } else {
                candidates.push((BigO::Exponential, "binary recursion".to_owned()));
            }
        }
        k => candidates.push((
            BigO::Exponential,
            format!("multiple recursion ({k} recursive calls)"),
        )),
    }

    // Rule 3: collection/stream operations
    if acc.flat_map {
        candidates.push((BigO::Quadratic, "flatMap flattening (O(n*m))".to_owned()));
    }
    if acc.sort_in_loop {
        candidates.push((BigO::Quadratic, "sort inside loop".to_owned()));
    } else if acc.sort_call {
        candidates.push((BigO::Linearithmic, "sort operation".to_owned()));
    }
    if acc.log_in_loop {
        candidates.push((
            BigO::Linearithmic,
            "logarithmic lookup inside loop".to_owned(),
        ));
    } else if acc.log_call {
        candidates.push((BigO::Logarithmic, "logarithmic lookup".to_owned()));
    }

    // Rule 4: composition of loops with stream pipelines
    if acc.linear_op_in_loop {
        let combined = BigO::from_loop_depth(acc.max_depth + 1);
        candidates.push((
            combined,
            "linear collection operation inside loop".to_owned(),
        ));
    }
    if acc.stream_start_in_loop {
        candidates.push((BigO::Quadratic, "stream started inside loop".to_owned()));
    }
    if acc.string_op_in_loop {
        let combined = BigO::from_loop_depth(acc.max_depth + 1);
        candidates.push((combined, "string operation inside loop".to_owned()));
    }
    if acc.linear_op_outside_loop && acc.max_depth == 0 {
        candidates.push((BigO::Linear, "stream pipeline".to_owned()));
    }

    let class_estimate = candidates
        .iter()
        .map(|(c, _)| *c)
        .max()
        .unwrap_or(BigO::Constant);
    if class_estimate <= BigO::Constant {
        return None;
    }

    let reason = candidates
        .iter()
        .map(|(_, r)| r.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    Some(ComplexityInfo {
        file: file.to_path_buf(),
        method: format!("{}.{}", class.name, method.name),
        line: method.start_line,
        class: class_estimate,
        nested_depth: acc.max_depth,
        reason,
    })
}

/// Everything the single pass over the body collects. Counts, depth and
/// flags only; classification happens afterwards so the walk stays simple.
#[derive(Debug, Default)]
struct Accumulator {
    loop_stack: SmallVec<[LoopKind; 8]>,
    max_depth: usize,
    top_level_loops: usize,
    recursive_calls: usize,
    divides_by_two: bool,
    has_conditional: bool,
    sort_call: bool,
    sort_in_loop: bool,
    log_call: bool,
    log_in_loop: bool,
    flat_map: bool,
    linear_op_in_loop: bool,
    linear_op_outside_loop: bool,
    string_op_in_loop: bool,
    stream_start_in_loop: bool,
}

impl Accumulator {
    fn depth(&self) -> usize {
        self.loop_stack.len()
    }

    fn in_loop(&self) -> bool {
        !self.loop_stack.is_empty()
    }
}

struct Walker<'a> {
    method_name: &'a str,
    method_arity: usize,
    acc: &'a mut Accumulator,
}

impl Walker<'_> {
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Loop { kind, header, body } => {
                if self.acc.loop_stack.is_empty() {
                    self.acc.top_level_loops += 1;
                }
                for h in header {
                    self.visit(h);
                }
                self.acc.loop_stack.push(*kind);
                self.acc.max_depth = self.acc.max_depth.max(self.acc.depth());
                for n in body {
                    self.visit(n);
                }
                self.acc.loop_stack.pop();
            }
            Node::If { .. } | Node::Ternary { .. } | Node::Switch { .. } => {
                self.acc.has_conditional = true;
                self.visit_children(node);
            }
            Node::Binary { op, rhs, .. } => {
                if matches!(op, BinaryOp::Div) && is_two(rhs) {
                    self.acc.divides_by_two = true;
                }
                self.visit_children(node);
            }
            Node::Assign { op, value, .. } => {
                if matches!(op, Some(BinaryOp::Div)) && is_two(value) {
                    self.acc.divides_by_two = true;
                }
                self.visit_children(node);
            }
            Node::Call {
                receiver,
                name,
                args,
            } => {
                self.classify_call(receiver.as_deref(), name, args.len());
                self.visit_children(node);
            }
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: &Node) {
        for child in node.children() {
            self.visit(child);
        }
    }

    fn classify_call(&mut self, receiver: Option<&Node>, name: &str, arity: usize) {
        // Recursive self-call: same name, same arity, unqualified or
        // through `this`
        let self_call = receiver.is_none() || receiver.is_some_and(Node::is_self_reference);
        if self_call && name == self.method_name && arity == self.method_arity {
            self.acc.recursive_calls += 1;
        }

        let in_loop = self.acc.in_loop();
        if name == "flatMap" {
            self.acc.flat_map = true;
        }
        if SORT_OPS().contains(name) {
            self.acc.sort_call = true;
            if in_loop {
                self.acc.sort_in_loop = true;
            }
        }
        if LOG_OPS().contains(name) {
            self.acc.log_call = true;
            if in_loop {
                self.acc.log_in_loop = true;
            }
        }
        if LINEAR_OPS().contains(name) {
            if in_loop {
                self.acc.linear_op_in_loop = true;
            } else {
                self.acc.linear_op_outside_loop = true;
            }
        }
        if STRING_OPS().contains(name) && in_loop {
            self.acc.string_op_in_loop = true;
        }
        if STREAM_START_OPS().contains(name) && in_loop {
            self.acc.stream_start_in_loop = true;
        }
    }
}

/// Matches the integer 2 or the float 2.0 (the divide-and-conquer divisor).
fn is_two(node: &Node) -> bool {
    match node {
        Node::Literal(Literal::Int(2)) => true,
        Node::Literal(Literal::Float(f)) => (*f - 2.0).abs() < f64::EPSILON,
        _ => false,
    }
}
