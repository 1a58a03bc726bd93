//! Lowering from the external tree-sitter CST into the owned syntax tree.
//!
//! tree-sitter is the parsing boundary: everything downstream of this module
//! works on [`crate::syntax`] values and never sees a CST node. Files that
//! fail to parse produce a diagnostic list (with line locations where the
//! grammar reported them) instead of a tree; the orchestrator skips such
//! files and keeps going.

use crate::syntax::{
    BinaryOp, CatchClause, ClassDecl, CompilationUnit, FieldDecl, Literal, LoopKind, MethodDecl,
    Node, Param, SwitchCase,
};
use tree_sitter::Node as TsNode;

/// A problem location reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-indexed line of the problem.
    pub line: usize,
    /// 0-indexed column of the problem.
    pub column: usize,
    /// Short description ("syntax error", "missing ';'", ...).
    pub message: String,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Parses one Java source file into a lowered compilation unit.
///
/// # Errors
///
/// Returns the parser's diagnostics when the source does not parse cleanly.
/// A tree containing any error or missing node is rejected wholesale; the
/// engine never analyzes partially-parsed files.
pub fn parse_source(source: &str) -> Result<CompilationUnit, Vec<ParseDiagnostic>> {
    let mut parser = tree_sitter::Parser::new();
    if parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .is_err()
    {
        return Err(vec![ParseDiagnostic {
            line: 1,
            column: 0,
            message: "incompatible Java grammar version".to_owned(),
        }]);
    }

    let Some(tree) = parser.parse(source, None) else {
        return Err(vec![ParseDiagnostic {
            line: 1,
            column: 0,
            message: "parser produced no tree".to_owned(),
        }]);
    };

    let root = tree.root_node();
    if root.has_error() {
        return Err(collect_diagnostics(root));
    }

    let lowerer = Lowerer { src: source };
    Ok(lowerer.lower_program(root))
}

/// Collects ERROR and MISSING nodes with their positions.
fn collect_diagnostics(root: TsNode<'_>) -> Vec<ParseDiagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() {
            diagnostics.push(ParseDiagnostic {
                line: node.start_position().row + 1,
                column: node.start_position().column,
                message: "syntax error".to_owned(),
            });
            continue;
        }
        if node.is_missing() {
            diagnostics.push(ParseDiagnostic {
                line: node.start_position().row + 1,
                column: node.start_position().column,
                message: format!("missing {}", node.kind()),
            });
            continue;
        }
        if node.has_error() {
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }
    }
    if diagnostics.is_empty() {
        diagnostics.push(ParseDiagnostic {
            line: root.start_position().row + 1,
            column: 0,
            message: "syntax error".to_owned(),
        });
    }
    diagnostics
}

struct Lowerer<'a> {
    src: &'a str,
}

impl Lowerer<'_> {
    fn text(&self, node: TsNode<'_>) -> String {
        node.utf8_text(self.src.as_bytes())
            .unwrap_or_default()
            .to_owned()
    }

    fn line(node: TsNode<'_>) -> usize {
        node.start_position().row + 1
    }

    fn lower_program(&self, root: TsNode<'_>) -> CompilationUnit {
        let mut unit = CompilationUnit::default();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            self.lower_type_decl(child, &mut unit.classes);
        }
        unit
    }

    /// Lowers a class/interface/enum declaration, flattening nested type
    /// declarations into the unit's class list.
    fn lower_type_decl(&self, node: TsNode<'_>, out: &mut Vec<ClassDecl>) {
        match node.kind() {
            "class_declaration" | "enum_declaration" => {
                self.lower_class(node, false, out);
            }
            "interface_declaration" => {
                self.lower_class(node, true, out);
            }
            _ => {}
        }
    }

    fn lower_class(&self, node: TsNode<'_>, is_interface: bool, out: &mut Vec<ClassDecl>) {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n))
            .unwrap_or_default();
        if name.is_empty() {
            return;
        }

        let superclass = node.child_by_field_name("superclass").and_then(|sc| {
            // `superclass` wraps the `extends` keyword and a type
            let mut cursor = sc.walk();
            let x = sc.named_children(&mut cursor)
                .next()
                .map(|t| self.text(t));
            x
        });

        let mut interfaces = Vec::new();
        if let Some(itf) = node.child_by_field_name("interfaces") {
            let mut cursor = itf.walk();
            for list in itf.named_children(&mut cursor) {
                if list.kind() == "type_list" {
                    let mut inner = list.walk();
                    for ty in list.named_children(&mut inner) {
                        interfaces.push(self.text(ty));
                    }
                }
            }
        }

        let mut decl = ClassDecl {
            name,
            superclass,
            interfaces,
            is_interface,
            fields: Vec::new(),
            methods: Vec::new(),
            line: Self::line(node),
        };

        // Nested declarations land after their enclosing class so the
        // file's first class stays first in the unit
        let mut nested = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            self.lower_class_body(body, &mut decl, &mut nested);
        }
        out.push(decl);
        out.append(&mut nested);
    }

    fn lower_class_body(&self, body: TsNode<'_>, decl: &mut ClassDecl, out: &mut Vec<ClassDecl>) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    self.lower_field(member, &mut decl.fields);
                }
                "method_declaration" | "constructor_declaration" => {
                    decl.methods.push(self.lower_method(member));
                }
                "class_declaration" | "interface_declaration" | "enum_declaration" => {
                    self.lower_type_decl(member, out);
                }
                // Enums keep their members one level deeper
                "enum_body_declarations" => {
                    self.lower_class_body(member, decl, out);
                }
                _ => {}
            }
        }
    }

    fn lower_field(&self, node: TsNode<'_>, out: &mut Vec<FieldDecl>) {
        let type_name = node
            .child_by_field_name("type")
            .map(|t| self.text(t))
            .unwrap_or_default();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                if let Some(name) = child.child_by_field_name("name") {
                    out.push(FieldDecl {
                        name: self.text(name),
                        type_name: type_name.clone(),
                    });
                }
            }
        }
    }

    fn lower_method(&self, node: TsNode<'_>) -> MethodDecl {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n))
            .unwrap_or_default();
        let return_type = node
            .child_by_field_name("type")
            .map(|t| self.text(t))
            .filter(|t| t != "void");

        let mut params = Vec::new();
        if let Some(list) = node.child_by_field_name("parameters") {
            let mut cursor = list.walk();
            for p in list.named_children(&mut cursor) {
                if matches!(p.kind(), "formal_parameter" | "spread_parameter") {
                    let type_name = p
                        .child_by_field_name("type")
                        .map(|t| self.text(t))
                        .unwrap_or_default();
                    let pname = p
                        .child_by_field_name("name")
                        .map_or_else(|| self.text(p), |n| self.text(n));
                    params.push(Param {
                        name: pname,
                        type_name,
                    });
                }
            }
        }

        let body = node
            .child_by_field_name("body")
            .map(|b| self.lower_block(b))
            .unwrap_or_default();

        MethodDecl {
            name,
            params,
            return_type,
            body,
            start_line: Self::line(node),
            end_line: node.end_position().row + 1,
        }
    }

    fn lower_block(&self, node: TsNode<'_>) -> Vec<Node> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.lower_stmt(child, &mut out);
        }
        out
    }

    /// Lowers one statement into `out`. A declaration with several
    /// declarators contributes several nodes.
    #[allow(clippy::too_many_lines)]
    fn lower_stmt(&self, node: TsNode<'_>, out: &mut Vec<Node>) {
        match node.kind() {
            "block" => out.push(Node::Block(self.lower_block(node))),
            "local_variable_declaration" => {
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t))
                    .unwrap_or_default();
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() == "variable_declarator" {
                        let name = child
                            .child_by_field_name("name")
                            .map(|n| self.text(n))
                            .unwrap_or_default();
                        let init = child
                            .child_by_field_name("value")
                            .map(|v| Box::new(self.lower_expr(v)));
                        out.push(Node::LocalVar {
                            name,
                            type_name: type_name.clone(),
                            init,
                        });
                    }
                }
            }
            "expression_statement" => {
                if let Some(expr) = node.named_child(0) {
                    out.push(self.lower_expr(expr));
                }
            }
            "if_statement" => {
                let cond = node
                    .child_by_field_name("condition")
                    .map_or(Node::Literal(Literal::Bool(true)), |c| self.lower_expr(c));
                let mut then_branch = Vec::new();
                if let Some(cons) = node.child_by_field_name("consequence") {
                    self.lower_stmt(cons, &mut then_branch);
                }
                let mut else_branch = Vec::new();
                if let Some(alt) = node.child_by_field_name("alternative") {
                    self.lower_stmt(alt, &mut else_branch);
                }
                out.push(Node::If {
                    cond: Box::new(cond),
                    then_branch,
                    else_branch,
                });
            }
            "while_statement" => {
                let header = node
                    .child_by_field_name("condition")
                    .map(|c| vec![self.lower_expr(c)])
                    .unwrap_or_default();
                let mut body = Vec::new();
                if let Some(b) = node.child_by_field_name("body") {
                    self.lower_stmt(b, &mut body);
                }
                out.push(Node::Loop {
                    kind: LoopKind::While,
                    header,
                    body,
                });
            }
            "do_statement" => {
                let header = node
                    .child_by_field_name("condition")
                    .map(|c| vec![self.lower_expr(c)])
                    .unwrap_or_default();
                let mut body = Vec::new();
                if let Some(b) = node.child_by_field_name("body") {
                    self.lower_stmt(b, &mut body);
                }
                out.push(Node::Loop {
                    kind: LoopKind::DoWhile,
                    header,
                    body,
                });
            }
            "for_statement" => {
                let mut header = Vec::new();
                if let Some(init) = node.child_by_field_name("init") {
                    self.lower_stmt(init, &mut header);
                }
                if let Some(cond) = node.child_by_field_name("condition") {
                    header.push(self.lower_expr(cond));
                }
                if let Some(update) = node.child_by_field_name("update") {
                    header.push(self.lower_expr(update));
                }
                let mut body = Vec::new();
                if let Some(b) = node.child_by_field_name("body") {
                    self.lower_stmt(b, &mut body);
                }
                out.push(Node::Loop {
                    kind: LoopKind::For,
                    header,
                    body,
                });
            }
            "enhanced_for_statement" => {
                let mut header = Vec::new();
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or_default();
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t))
                    .unwrap_or_default();
                header.push(Node::LocalVar {
                    name,
                    type_name,
                    init: None,
                });
                if let Some(value) = node.child_by_field_name("value") {
                    header.push(self.lower_expr(value));
                }
                let mut body = Vec::new();
                if let Some(b) = node.child_by_field_name("body") {
                    self.lower_stmt(b, &mut body);
                }
                out.push(Node::Loop {
                    kind: LoopKind::ForEach,
                    header,
                    body,
                });
            }
            "switch_expression" | "switch_statement" => {
                out.push(self.lower_switch(node));
            }
            "try_statement" | "try_with_resources_statement" => {
                let body = node
                    .child_by_field_name("body")
                    .map(|b| self.lower_block(b))
                    .unwrap_or_default();
                let mut catches = Vec::new();
                let mut finally = Vec::new();
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    match child.kind() {
                        "catch_clause" => {
                            let type_name = child
                                .child_by_field_name("parameter")
                                .or_else(|| find_child(child, "catch_formal_parameter"))
                                .and_then(|p| find_child(p, "catch_type"))
                                .map(|t| self.text(t))
                                .unwrap_or_default();
                            let cbody = child
                                .child_by_field_name("body")
                                .map(|b| self.lower_block(b))
                                .unwrap_or_default();
                            catches.push(CatchClause {
                                type_name,
                                body: cbody,
                            });
                        }
                        "finally_clause" => {
                            if let Some(block) = find_child(child, "block") {
                                finally = self.lower_block(block);
                            }
                        }
                        _ => {}
                    }
                }
                out.push(Node::Try {
                    body,
                    catches,
                    finally,
                });
            }
            "return_statement" => {
                let value = node.named_child(0).map(|v| Box::new(self.lower_expr(v)));
                out.push(Node::Return(value));
            }
            "throw_statement" => {
                if let Some(expr) = node.named_child(0) {
                    out.push(Node::Throw(Box::new(self.lower_expr(expr))));
                }
            }
            "yield_statement" => {
                let value = node.named_child(0).map(|v| Box::new(self.lower_expr(v)));
                out.push(Node::Return(value));
            }
            "break_statement" => out.push(Node::Break),
            "continue_statement" => out.push(Node::Continue),
            "labeled_statement" | "synchronized_statement" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if matches!(child.kind(), "block") {
                        out.push(Node::Block(self.lower_block(child)));
                    } else {
                        self.lower_stmt(child, out);
                    }
                }
            }
            "assert_statement" => {
                let mut cursor = node.walk();
                let exprs: Vec<Node> = node
                    .named_children(&mut cursor)
                    .map(|c| self.lower_expr(c))
                    .collect();
                out.push(Node::Block(exprs));
            }
            // Local type declarations inside method bodies are skipped;
            // their metrics surface when the class itself is visited.
            "class_declaration" | "interface_declaration" | "enum_declaration" => {}
            ";" | "line_comment" | "block_comment" => {}
            _ => out.push(self.lower_expr(node)),
        }
    }

    fn lower_switch(&self, node: TsNode<'_>) -> Node {
        let scrutinee = node
            .child_by_field_name("condition")
            .map_or(Node::Literal(Literal::Null), |c| self.lower_expr(c));
        let mut cases = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for group in body.named_children(&mut cursor) {
                match group.kind() {
                    "switch_block_statement_group" | "switch_rule" => {
                        let mut is_default = false;
                        let mut case_body = Vec::new();
                        let mut inner = group.walk();
                        for part in group.named_children(&mut inner) {
                            if part.kind() == "switch_label" {
                                if self.text(part).starts_with("default") {
                                    is_default = true;
                                }
                            } else {
                                self.lower_stmt(part, &mut case_body);
                            }
                        }
                        cases.push(SwitchCase {
                            is_default,
                            body: case_body,
                        });
                    }
                    _ => {}
                }
            }
        }
        Node::Switch {
            scrutinee: Box::new(scrutinee),
            cases,
        }
    }

    #[allow(clippy::too_many_lines)]
    fn lower_expr(&self, node: TsNode<'_>) -> Node {
        match node.kind() {
            "binary_expression" => {
                let op = node
                    .child_by_field_name("operator")
                    .map(|o| self.text(o))
                    .unwrap_or_default();
                let op = match op.as_str() {
                    "+" => BinaryOp::Add,
                    "-" => BinaryOp::Sub,
                    "*" => BinaryOp::Mul,
                    "/" => BinaryOp::Div,
                    "%" => BinaryOp::Rem,
                    "&&" => BinaryOp::And,
                    "||" => BinaryOp::Or,
                    other => BinaryOp::Other(other.to_owned()),
                };
                let lhs = node
                    .child_by_field_name("left")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                let rhs = node
                    .child_by_field_name("right")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                Node::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                }
            }
            "unary_expression" => {
                let op = node
                    .child_by_field_name("operator")
                    .map(|o| self.text(o))
                    .unwrap_or_default();
                let operand = node
                    .child_by_field_name("operand")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                Node::Unary {
                    op,
                    operand: Box::new(operand),
                }
            }
            "update_expression" => {
                // `i++` / `--i`: the operator is the unnamed `++`/`--` child
                let mut op = String::new();
                for i in 0..node.child_count() {
                    if let Some(child) = node.child(i) {
                        if matches!(child.kind(), "++" | "--") {
                            op = child.kind().to_owned();
                        }
                    }
                }
                let operand = node
                    .named_child(0)
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                Node::Unary {
                    op,
                    operand: Box::new(operand),
                }
            }
            "assignment_expression" => {
                let op_text = node
                    .child_by_field_name("operator")
                    .map(|o| self.text(o))
                    .unwrap_or_default();
                let op = match op_text.as_str() {
                    "=" => None,
                    "+=" => Some(BinaryOp::Add),
                    "-=" => Some(BinaryOp::Sub),
                    "*=" => Some(BinaryOp::Mul),
                    "/=" => Some(BinaryOp::Div),
                    "%=" => Some(BinaryOp::Rem),
                    other => Some(BinaryOp::Other(other.to_owned())),
                };
                let target = node
                    .child_by_field_name("left")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                let value = node
                    .child_by_field_name("right")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                Node::Assign {
                    op,
                    target: Box::new(target),
                    value: Box::new(value),
                }
            }
            "ternary_expression" | "conditional_expression" => {
                let cond = node
                    .child_by_field_name("condition")
                    .map_or(Node::Literal(Literal::Bool(true)), |n| self.lower_expr(n));
                let then_expr = node
                    .child_by_field_name("consequence")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                let else_expr = node
                    .child_by_field_name("alternative")
                    .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n));
                Node::Ternary {
                    cond: Box::new(cond),
                    then_expr: Box::new(then_expr),
                    else_expr: Box::new(else_expr),
                }
            }
            "method_invocation" => {
                let receiver = node
                    .child_by_field_name("object")
                    .map(|o| Box::new(self.lower_expr(o)));
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or_default();
                let args = node
                    .child_by_field_name("arguments")
                    .map(|a| self.lower_args(a))
                    .unwrap_or_default();
                Node::Call {
                    receiver,
                    name,
                    args,
                }
            }
            "object_creation_expression" => {
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t))
                    .unwrap_or_default();
                let args = node
                    .child_by_field_name("arguments")
                    .map(|a| self.lower_args(a))
                    .unwrap_or_default();
                Node::New { type_name, args }
            }
            "array_creation_expression" => {
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t))
                    .unwrap_or_default();
                let mut cursor = node.walk();
                let args = node
                    .named_children(&mut cursor)
                    .filter(|c| c.kind() == "dimensions_expr")
                    .map(|c| self.lower_expr(c))
                    .collect();
                Node::New { type_name, args }
            }
            "dimensions_expr" => node
                .named_child(0)
                .map_or(Node::Literal(Literal::Null), |n| self.lower_expr(n)),
            "field_access" => {
                let receiver = node
                    .child_by_field_name("object")
                    .map_or(Node::This, |o| self.lower_expr(o));
                let name = node
                    .child_by_field_name("field")
                    .map(|f| self.text(f))
                    .unwrap_or_default();
                Node::FieldAccess {
                    receiver: Box::new(receiver),
                    name,
                }
            }
            "array_access" => {
                let array = node
                    .child_by_field_name("array")
                    .map_or(Node::Literal(Literal::Null), |a| self.lower_expr(a));
                let index = node
                    .child_by_field_name("index")
                    .map_or(Node::Literal(Literal::Null), |i| self.lower_expr(i));
                Node::ArrayIndex {
                    array: Box::new(array),
                    index: Box::new(index),
                }
            }
            "cast_expression" => {
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t))
                    .unwrap_or_default();
                let expr = node
                    .child_by_field_name("value")
                    .map_or(Node::Literal(Literal::Null), |v| self.lower_expr(v));
                Node::Cast {
                    type_name,
                    expr: Box::new(expr),
                }
            }
            "instanceof_expression" => {
                let expr = node
                    .child_by_field_name("left")
                    .map_or(Node::Literal(Literal::Null), |l| self.lower_expr(l));
                let type_name = node
                    .child_by_field_name("right")
                    .map(|r| self.text(r))
                    .unwrap_or_default();
                Node::InstanceOf {
                    expr: Box::new(expr),
                    type_name,
                }
            }
            "lambda_expression" => {
                let mut body = Vec::new();
                if let Some(b) = node.child_by_field_name("body") {
                    if b.kind() == "block" {
                        body = self.lower_block(b);
                    } else {
                        body.push(self.lower_expr(b));
                    }
                }
                Node::Lambda { body }
            }
            "parenthesized_expression" | "condition" => node
                .named_child(0)
                .map_or(Node::Literal(Literal::Null), |inner| {
                    self.lower_expr(inner)
                }),
            "identifier" => Node::Identifier(self.text(node)),
            "this" => Node::This,
            "super" => Node::Super,
            "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal" => {
                let text = self.text(node);
                Node::Literal(Literal::Int(parse_java_int(&text)))
            }
            "decimal_floating_point_literal" | "hex_floating_point_literal" => {
                let text = self.text(node);
                Node::Literal(Literal::Float(parse_java_float(&text)))
            }
            "string_literal" => {
                let text = self.text(node);
                Node::Literal(Literal::Str(
                    text.trim_matches('"').to_owned(),
                ))
            }
            "character_literal" => {
                let text = self.text(node);
                Node::Literal(Literal::Char(text.trim_matches('\'').to_owned()))
            }
            "true" => Node::Literal(Literal::Bool(true)),
            "false" => Node::Literal(Literal::Bool(false)),
            "null_literal" => Node::Literal(Literal::Null),
            "class_literal" | "method_reference" | "type_identifier" | "scoped_identifier" => {
                Node::Identifier(self.text(node))
            }
            "switch_expression" => self.lower_switch(node),
            "array_initializer" | "argument_list" => Node::Block(self.lower_args(node)),
            _ => {
                // Unknown composite: keep its children reachable for the
                // walkers; unknown leaf: treat its text as an operand.
                if node.named_child_count() > 0 {
                    let mut cursor = node.walk();
                    let children = node
                        .named_children(&mut cursor)
                        .map(|c| self.lower_expr(c))
                        .collect();
                    Node::Block(children)
                } else {
                    Node::Identifier(self.text(node))
                }
            }
        }
    }

    fn lower_args(&self, list: TsNode<'_>) -> Vec<Node> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .map(|a| self.lower_expr(a))
            .collect()
    }
}

fn find_child<'t>(node: TsNode<'t>, kind: &str) -> Option<TsNode<'t>> {
    let mut cursor = node.walk();
    let x = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    x
}

/// Parses a Java integer literal, tolerating underscores and `l`/`L`
/// suffixes. Unparseable values fall back to 0; the calculators only care
/// about the value 2.
fn parse_java_int(text: &str) -> i64 {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .trim_end_matches(['l', 'L'])
        .to_owned();
    if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).unwrap_or(0)
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).unwrap_or(0)
    } else {
        cleaned.parse().unwrap_or(0)
    }
}

/// Parses a Java float literal, tolerating `f`/`F`/`d`/`D` suffixes.
fn parse_java_float(text: &str) -> f64 {
    text.chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .trim_end_matches(['f', 'F', 'd', 'D'])
        .parse()
        .unwrap_or(0.0)
}
