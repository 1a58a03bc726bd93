use crate::metrics::cc_rank;
use crate::syntax::{BinaryOp, ClassDecl, CompilationUnit, MethodDecl, Node};

#[derive(Debug, Clone, PartialEq)]
/// A finding related to Cyclomatic Complexity.
pub struct ComplexityFinding {
    /// Name of the method, qualified with its class (`Class.method`).
    pub name: String,
    /// The calculated cyclomatic complexity score.
    pub complexity: usize,
    /// The complexity rank (A-F).
    pub rank: char,
    /// The line number where the method starts.
    pub line: usize,
}

/// Calculates the cyclomatic complexity of one method body.
///
/// Starts at 1 and adds 1 for each `if`, loop (all four kinds), non-default
/// `switch` case, `catch` clause, ternary conditional, and short-circuit
/// `&&`/`||` operator. Pure function of the subtree; never returns 0.
#[must_use]
pub fn cyclomatic(method: &MethodDecl) -> usize {
    let mut counter = DecisionCounter { complexity: 1 };
    counter.visit_body(&method.body);
    counter.complexity
}

/// Lists per-method complexity findings for every class in a unit.
#[must_use]
pub fn analyze_unit(unit: &CompilationUnit) -> Vec<ComplexityFinding> {
    let mut findings = Vec::new();
    for class in &unit.classes {
        collect_class(class, &mut findings);
    }
    findings
}

/// Parses `code` and lists per-method complexity findings.
///
/// Files that fail to parse yield no findings, mirroring how the analyzer
/// skips unparseable files.
#[must_use]
pub fn analyze_complexity(code: &str) -> Vec<ComplexityFinding> {
    crate::parser::parse_source(code)
        .map(|unit| analyze_unit(&unit))
        .unwrap_or_default()
}

fn collect_class(class: &ClassDecl, findings: &mut Vec<ComplexityFinding>) {
    for method in &class.methods {
        let complexity = cyclomatic(method);
        findings.push(ComplexityFinding {
            name: format!("{}.{}", class.name, method.name),
            complexity,
            rank: cc_rank(complexity),
            line: method.start_line,
        });
    }
}

/// Accumulator for decision points. Walks the whole subtree explicitly so
/// evaluation order is unambiguous.
struct DecisionCounter {
    complexity: usize,
}

impl DecisionCounter {
    fn visit_body(&mut self, body: &[Node]) {
        for node in body {
            self.visit_node(node);
        }
    }

    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::If { .. } | Node::Ternary { .. } => self.complexity += 1,
            Node::Loop { .. } => self.complexity += 1,
            Node::Switch { cases, .. } => {
                // Each labelled case is a branch; `default` is the fall-through
                self.complexity += cases.iter().filter(|c| !c.is_default).count();
            }
            Node::Try { catches, .. } => self.complexity += catches.len(),
            Node::Binary { op, .. } => {
                if matches!(op, BinaryOp::And | BinaryOp::Or) {
                    self.complexity += 1;
                }
            }
            _ => {}
        }
        for child in node.children() {
            self.visit_node(child);
        }
    }
}
