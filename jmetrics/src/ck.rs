//! Chidamber-Kemerer object-oriented design metrics.
//!
//! Operates per compilation unit: a first pass builds the inheritance graph
//! as two plain adjacency maps (classes across files may reference parents
//! that are not loaded, so names, not references, are the node identity),
//! then a second pass computes the six metrics per non-interface class.

use crate::complexity::cyclomatic;
use crate::constants::{COMMON_TYPES, MAX_INHERITANCE_DEPTH};
use crate::syntax::{base_type_name, ClassDecl, CompilationUnit, MethodDecl, Node};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Metric thresholds used by the quality predicates.
pub const WMC_THRESHOLD: usize = 30;
/// Depth-of-inheritance threshold.
pub const DIT_THRESHOLD: usize = 5;
/// Number-of-children threshold.
pub const NOC_THRESHOLD: usize = 10;
/// Coupling threshold.
pub const CBO_THRESHOLD: usize = 10;
/// Response-set threshold.
pub const RFC_THRESHOLD: usize = 50;
/// Cohesion threshold.
pub const LCOM_THRESHOLD: usize = 50;

/// Points deducted from the quality score per violated threshold.
const QUALITY_PENALTY: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// The six CK metrics for one class. Write-once during computation.
pub struct ClassMetrics {
    /// Class name.
    pub class_name: String,
    /// 1-indexed declaration line.
    pub line: usize,
    /// Weighted Methods per Class: sum of method cyclomatic complexities.
    pub wmc: usize,
    /// Depth of Inheritance Tree.
    pub dit: usize,
    /// Number of Children.
    pub noc: usize,
    /// Coupling Between Objects.
    pub cbo: usize,
    /// Response For a Class.
    pub rfc: usize,
    /// Lack of Cohesion in Methods (P - Q, clamped at 0).
    pub lcom: usize,
}

impl ClassMetrics {
    /// WMC, LCOM and CBO all past their thresholds at once.
    #[must_use]
    pub fn is_god_class(&self) -> bool {
        self.wmc > WMC_THRESHOLD && self.lcom > LCOM_THRESHOLD && self.cbo > CBO_THRESHOLD
    }

    /// CBO past its threshold.
    #[must_use]
    pub fn is_highly_coupled(&self) -> bool {
        self.cbo > CBO_THRESHOLD
    }

    /// LCOM past its threshold.
    #[must_use]
    pub fn has_low_cohesion(&self) -> bool {
        self.lcom > LCOM_THRESHOLD
    }

    /// DIT past its threshold.
    #[must_use]
    pub fn has_deep_inheritance(&self) -> bool {
        self.dit > DIT_THRESHOLD
    }

    /// NOC past its threshold.
    #[must_use]
    pub fn has_many_children(&self) -> bool {
        self.noc > NOC_THRESHOLD
    }

    /// RFC past its threshold.
    #[must_use]
    pub fn has_large_response_set(&self) -> bool {
        self.rfc > RFC_THRESHOLD
    }

    /// 100 minus 15 per violated threshold, floored at 0.
    #[must_use]
    pub fn quality_score(&self) -> usize {
        let violations = usize::from(self.wmc > WMC_THRESHOLD)
            + usize::from(self.dit > DIT_THRESHOLD)
            + usize::from(self.noc > NOC_THRESHOLD)
            + usize::from(self.cbo > CBO_THRESHOLD)
            + usize::from(self.rfc > RFC_THRESHOLD)
            + usize::from(self.lcom > LCOM_THRESHOLD);
        100_usize.saturating_sub(violations * QUALITY_PENALTY)
    }
}

/// Inheritance adjacency built in a pre-pass over all declarations.
#[derive(Debug, Default)]
pub struct InheritanceGraph {
    /// Class name to its direct parent name.
    parent_of: FxHashMap<String, String>,
    /// Class name to the set of classes extending it.
    children_of: FxHashMap<String, FxHashSet<String>>,
}

impl InheritanceGraph {
    /// Builds the graph from every declaration in the unit.
    #[must_use]
    pub fn from_unit(unit: &CompilationUnit) -> Self {
        let mut graph = Self::default();
        for class in &unit.classes {
            if let Some(parent) = &class.superclass {
                graph
                    .parent_of
                    .insert(class.name.clone(), parent.clone());
                graph
                    .children_of
                    .entry(parent.clone())
                    .or_default()
                    .insert(class.name.clone());
            }
        }
        graph
    }

    /// Number of `extends` hops from `class_name` to its ultimate ancestor.
    /// A visited set guards against cyclic input and the walk is capped, so
    /// the result is always in `0..=MAX_INHERITANCE_DEPTH`.
    #[must_use]
    pub fn depth_of(&self, class_name: &str) -> usize {
        let mut depth = 0;
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut current = class_name;
        visited.insert(current);
        while let Some(parent) = self.parent_of.get(current) {
            depth += 1;
            if depth >= MAX_INHERITANCE_DEPTH || !visited.insert(parent) {
                return depth.min(MAX_INHERITANCE_DEPTH);
            }
            current = parent;
        }
        depth
    }

    /// Number of classes whose direct parent is `class_name`.
    #[must_use]
    pub fn children_count(&self, class_name: &str) -> usize {
        self.children_of.get(class_name).map_or(0, FxHashSet::len)
    }
}

/// Computes CK metrics for every non-interface class in the unit.
#[must_use]
pub fn analyze_unit(unit: &CompilationUnit) -> Vec<ClassMetrics> {
    let graph = InheritanceGraph::from_unit(unit);
    unit.classes
        .iter()
        .filter(|c| !c.is_interface)
        .map(|c| analyze_class(c, &graph))
        .collect()
}

/// Computes CK metrics for one class against a prebuilt inheritance graph.
#[must_use]
pub fn analyze_class(class: &ClassDecl, graph: &InheritanceGraph) -> ClassMetrics {
    ClassMetrics {
        class_name: class.name.clone(),
        line: class.line,
        wmc: class.methods.iter().map(cyclomatic).sum::<usize>(),
        dit: graph.depth_of(&class.name),
        noc: graph.children_count(&class.name),
        cbo: coupling(class),
        rfc: response_set(class),
        lcom: lack_of_cohesion(class),
    }
}

/// CBO: distinct external names this class talks to. Counts non-`this`/
/// `super` call and field-access receivers plus declared types in field,
/// parameter and return positions, excluding the class itself and common
/// platform types.
fn coupling(class: &ClassDecl) -> usize {
    let mut referenced: FxHashSet<String> = FxHashSet::default();

    let mut add = |name: &str| {
        let base = base_type_name(name);
        if !base.is_empty() && base != class.name && !COMMON_TYPES().contains(base) {
            referenced.insert(base.to_owned());
        }
    };

    for field in &class.fields {
        add(&field.type_name);
    }
    for method in &class.methods {
        for param in &method.params {
            add(&param.type_name);
        }
        if let Some(ret) = &method.return_type {
            add(ret);
        }
        crate::syntax::walk_body(&method.body, &mut |node| match node {
            Node::Call {
                receiver: Some(recv),
                ..
            }
            | Node::FieldAccess { receiver: recv, .. } => {
                if !recv.is_self_reference() {
                    add(&recv.receiver_text());
                }
            }
            _ => {}
        });
    }
    referenced.len()
}

/// RFC: the class's own methods plus every distinct external message it
/// can send, as `receiver.method` strings.
fn response_set(class: &ClassDecl) -> usize {
    let mut responses: FxHashSet<String> = FxHashSet::default();
    for method in &class.methods {
        responses.insert(method.name.clone());
    }
    for method in &class.methods {
        crate::syntax::walk_body(&method.body, &mut |node| {
            if let Node::Call {
                receiver: Some(recv),
                name,
                ..
            } = node
            {
                if !recv.is_self_reference() {
                    responses.insert(format!("{}.{}", recv.receiver_text(), name));
                }
            }
        });
    }
    responses.len()
}

/// LCOM: for each unordered method pair, disjoint field-usage sets bump P,
/// overlapping sets bump Q; the metric is max(0, P - Q). Fewer than two
/// methods always scores 0.
fn lack_of_cohesion(class: &ClassDecl) -> usize {
    if class.methods.len() < 2 {
        return 0;
    }

    let declared: FxHashSet<&str> = class.fields.iter().map(|f| f.name.as_str()).collect();
    let usages: Vec<FxHashSet<String>> = class
        .methods
        .iter()
        .map(|m| fields_used(m, &declared))
        .collect();

    let mut disjoint = 0_usize;
    let mut shared = 0_usize;
    for i in 0..usages.len() {
        for j in (i + 1)..usages.len() {
            if usages[i].is_disjoint(&usages[j]) {
                disjoint += 1;
            } else {
                shared += 1;
            }
        }
    }
    disjoint.saturating_sub(shared)
}

/// Fields a method touches: `this.x` accesses always count; a bare
/// identifier counts when it matches a declared field (name-matching
/// heuristic, shadowing locals are accepted noise).
fn fields_used(method: &MethodDecl, declared: &FxHashSet<&str>) -> FxHashSet<String> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    crate::syntax::walk_body(&method.body, &mut |node| match node {
        Node::FieldAccess { receiver, name } => {
            if receiver.is_self_reference() {
                used.insert(name.clone());
            }
        }
        Node::Identifier(name) => {
            if declared.contains(name.as_str()) {
                used.insert(name.clone());
            }
        }
        _ => {}
    });
    used
}
