//! Deep structural equality over syntax trees.
//!
//! The comparator walks two trees in lock-step and decides equality
//! attribute-by-attribute: variant tags must match, then the comment channel,
//! then every attribute of the shared variant, recursing through child nodes
//! and sequences. Instance identity is only used as a short-circuit — a
//! shared `Arc` subtree is equal to itself without being re-walked — never as
//! a requirement, so a freshly built copy of a tree compares equal to the
//! original.
//!
//! The walk is a pure function over its two inputs: no mutation, no state,
//! no locking. Callers own the trees and must not mutate them concurrently
//! with a comparison. Stack use grows with tree depth.

use std::sync::Arc;

use tracing::trace;

use crate::ast::{Node, NodeBase, NodeVector};

/// Compares two optional node references for structural equality.
///
/// Absent compares equal to absent and unequal to any present node; two
/// present nodes are equal iff they are the same instance or every attribute
/// matches recursively.
///
/// # Examples
/// ```
/// use java_ast::{Node, equals};
///
/// let a = Node::integer_literal("1");
/// let b = Node::integer_literal("1");
/// let c = Node::integer_literal("01");
/// assert!(equals(Some(&a), Some(&b)));
/// assert!(!equals(Some(&a), Some(&c)));
/// assert!(equals(None, None));
/// assert!(!equals(Some(&a), None));
/// ```
pub fn equals(n1: Option<&Arc<Node>>, n2: Option<&Arc<Node>>) -> bool {
    let result = opt_node_equals(n1, n2);
    trace!(result, "structural equality check");
    result
}

/// Equality between two nodes known to be present.
pub(crate) fn node_equals(n1: &Node, n2: &Node) -> bool {
    if std::ptr::eq(n1, n2) {
        return true;
    }
    if n1.kind() != n2.kind() {
        return false;
    }
    if !common_equality(n1.base(), n2.base()) {
        return false;
    }
    variant_equals(n1, n2)
}

/// Equality that applies to each kind of node: the attached comment, then
/// the orphan-comment sequence. Order matters for orphan comments.
fn common_equality(b1: &NodeBase, b2: &NodeBase) -> bool {
    opt_node_equals(b1.comment(), b2.comment())
        && nodes_equals(b1.orphan_comments(), b2.orphan_comments())
}

fn arc_equals(n1: &Arc<Node>, n2: &Arc<Node>) -> bool {
    Arc::ptr_eq(n1, n2) || node_equals(n1, n2)
}

fn opt_node_equals(n1: Option<&Arc<Node>>, n2: Option<&Arc<Node>>) -> bool {
    match (n1, n2) {
        (Some(a), Some(b)) => arc_equals(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// The one canonical ordered-sequence equality: equal length and every
/// index-aligned pair node-equal, stopping at the first mismatch. No
/// reordering tolerance.
fn nodes_equals(v1: &NodeVector, v2: &NodeVector) -> bool {
    if v1.len() != v2.len() {
        return false;
    }
    v1.iter().zip(v2.iter()).all(|(a, b)| arc_equals(a, b))
}

/// An absent sequence is not the same as a present-but-empty one.
fn opt_nodes_equals(v1: Option<&NodeVector>, v2: Option<&NodeVector>) -> bool {
    match (v1, v2) {
        (Some(a), Some(b)) => nodes_equals(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Per-variant attribute comparison. Only reached once the entry point has
/// established that both nodes carry the same variant tag, so the trailing
/// arm can never match a same-variant pair.
fn variant_equals(n1: &Node, n2: &Node) -> bool {
    match (n1, n2) {
        (
            Node::CompilationUnit { package_declaration: p1, imports: i1, types: t1, .. },
            Node::CompilationUnit { package_declaration: p2, imports: i2, types: t2, .. },
        ) => {
            nodes_equals(i1, i2)
                && opt_node_equals(p1.as_ref(), p2.as_ref())
                && nodes_equals(t1, t2)
        }
        (
            Node::PackageDeclaration { annotations: a1, name: n1, .. },
            Node::PackageDeclaration { annotations: a2, name: n2, .. },
        ) => nodes_equals(a1, a2) && arc_equals(n1, n2),
        (
            Node::ImportDeclaration { name: n1, is_static: s1, is_asterisk: w1, .. },
            Node::ImportDeclaration { name: n2, is_static: s2, is_asterisk: w2, .. },
        ) => w1 == w2 && s1 == s2 && arc_equals(n1, n2),
        (
            Node::ClassOrInterfaceDeclaration {
                modifiers: m1,
                annotations: a1,
                is_interface: i1,
                name: n1,
                type_parameters: tp1,
                extended_types: ext1,
                implemented_types: imp1,
                members: mem1,
                ..
            },
            Node::ClassOrInterfaceDeclaration {
                modifiers: m2,
                annotations: a2,
                is_interface: i2,
                name: n2,
                type_parameters: tp2,
                extended_types: ext2,
                implemented_types: imp2,
                members: mem2,
                ..
            },
        ) => {
            nodes_equals(ext1, ext2)
                && nodes_equals(imp1, imp2)
                && i1 == i2
                && nodes_equals(tp1, tp2)
                && nodes_equals(mem1, mem2)
                && m1 == m2
                && arc_equals(n1, n2)
                && nodes_equals(a1, a2)
        }
        (
            Node::EnumDeclaration {
                modifiers: m1,
                annotations: a1,
                name: n1,
                implemented_types: imp1,
                entries: e1,
                members: mem1,
                ..
            },
            Node::EnumDeclaration {
                modifiers: m2,
                annotations: a2,
                name: n2,
                implemented_types: imp2,
                entries: e2,
                members: mem2,
                ..
            },
        ) => {
            nodes_equals(e1, e2)
                && nodes_equals(imp1, imp2)
                && nodes_equals(mem1, mem2)
                && m1 == m2
                && arc_equals(n1, n2)
                && nodes_equals(a1, a2)
        }
        (
            Node::EnumConstantDeclaration {
                annotations: a1, name: n1, arguments: arg1, class_body: cb1, ..
            },
            Node::EnumConstantDeclaration {
                annotations: a2, name: n2, arguments: arg2, class_body: cb2, ..
            },
        ) => {
            nodes_equals(arg1, arg2)
                && nodes_equals(cb1, cb2)
                && arc_equals(n1, n2)
                && nodes_equals(a1, a2)
        }
        (
            Node::AnnotationDeclaration {
                modifiers: m1, annotations: a1, name: n1, members: mem1, ..
            },
            Node::AnnotationDeclaration {
                modifiers: m2, annotations: a2, name: n2, members: mem2, ..
            },
        ) => {
            nodes_equals(mem1, mem2) && m1 == m2 && arc_equals(n1, n2) && nodes_equals(a1, a2)
        }
        (
            Node::AnnotationMemberDeclaration {
                modifiers: m1,
                annotations: a1,
                ty: t1,
                name: n1,
                default_value: d1,
                ..
            },
            Node::AnnotationMemberDeclaration {
                modifiers: m2,
                annotations: a2,
                ty: t2,
                name: n2,
                default_value: d2,
                ..
            },
        ) => {
            opt_node_equals(d1.as_ref(), d2.as_ref())
                && m1 == m2
                && arc_equals(n1, n2)
                && arc_equals(t1, t2)
                && nodes_equals(a1, a2)
        }
        (
            Node::FieldDeclaration { modifiers: m1, annotations: a1, variables: v1, .. },
            Node::FieldDeclaration { modifiers: m2, annotations: a2, variables: v2, .. },
        ) => m1 == m2 && nodes_equals(v1, v2) && nodes_equals(a1, a2),
        (
            Node::VariableDeclarator { ty: t1, name: n1, initializer: i1, .. },
            Node::VariableDeclarator { ty: t2, name: n2, initializer: i2, .. },
        ) => {
            opt_node_equals(i1.as_ref(), i2.as_ref())
                && arc_equals(n1, n2)
                && arc_equals(t1, t2)
        }
        (
            Node::ConstructorDeclaration {
                modifiers: m1,
                annotations: a1,
                type_parameters: tp1,
                name: n1,
                parameters: p1,
                thrown_exceptions: th1,
                body: b1,
                ..
            },
            Node::ConstructorDeclaration {
                modifiers: m2,
                annotations: a2,
                type_parameters: tp2,
                name: n2,
                parameters: p2,
                thrown_exceptions: th2,
                body: b2,
                ..
            },
        ) => {
            arc_equals(b1, b2)
                && m1 == m2
                && arc_equals(n1, n2)
                && nodes_equals(p1, p2)
                && nodes_equals(th1, th2)
                && nodes_equals(tp1, tp2)
                && nodes_equals(a1, a2)
        }
        (
            Node::MethodDeclaration {
                modifiers: m1,
                annotations: a1,
                type_parameters: tp1,
                ty: t1,
                name: n1,
                parameters: p1,
                thrown_exceptions: th1,
                body: b1,
                is_default: d1,
                ..
            },
            Node::MethodDeclaration {
                modifiers: m2,
                annotations: a2,
                type_parameters: tp2,
                ty: t2,
                name: n2,
                parameters: p2,
                thrown_exceptions: th2,
                body: b2,
                is_default: d2,
                ..
            },
        ) => {
            opt_node_equals(b1.as_ref(), b2.as_ref())
                && d1 == d2
                && m1 == m2
                && arc_equals(n1, n2)
                && nodes_equals(p1, p2)
                && nodes_equals(th1, th2)
                && arc_equals(t1, t2)
                && nodes_equals(tp1, tp2)
                && nodes_equals(a1, a2)
        }
        (
            Node::Parameter {
                modifiers: m1, annotations: a1, ty: t1, is_var_args: v1, name: n1, ..
            },
            Node::Parameter {
                modifiers: m2, annotations: a2, ty: t2, is_var_args: v2, name: n2, ..
            },
        ) => {
            nodes_equals(a1, a2)
                && v1 == v2
                && m1 == m2
                && arc_equals(n1, n2)
                && arc_equals(t1, t2)
        }
        (
            Node::EmptyMemberDeclaration { annotations: a1, .. },
            Node::EmptyMemberDeclaration { annotations: a2, .. },
        ) => nodes_equals(a1, a2),
        (
            Node::InitializerDeclaration { annotations: a1, is_static: s1, body: b1, .. },
            Node::InitializerDeclaration { annotations: a2, is_static: s2, body: b2, .. },
        ) => arc_equals(b1, b2) && s1 == s2 && nodes_equals(a1, a2),
        (
            Node::TypeParameter { name: n1, type_bound: tb1, annotations: a1, .. },
            Node::TypeParameter { name: n2, type_bound: tb2, annotations: a2, .. },
        ) => arc_equals(n1, n2) && nodes_equals(tb1, tb2) && nodes_equals(a1, a2),
        (Node::LineComment { content: c1, .. }, Node::LineComment { content: c2, .. }) => c1 == c2,
        (Node::BlockComment { content: c1, .. }, Node::BlockComment { content: c2, .. }) => {
            c1 == c2
        }
        (Node::JavadocComment { content: c1, .. }, Node::JavadocComment { content: c2, .. }) => {
            c1 == c2
        }
        (
            Node::ClassOrInterfaceType {
                scope: s1, name: n1, type_arguments: ta1, annotations: a1, ..
            },
            Node::ClassOrInterfaceType {
                scope: s2, name: n2, type_arguments: ta2, annotations: a2, ..
            },
        ) => {
            arc_equals(n1, n2)
                && opt_node_equals(s1.as_ref(), s2.as_ref())
                && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
                && nodes_equals(a1, a2)
        }
        (
            Node::PrimitiveType { kind: k1, annotations: a1, .. },
            Node::PrimitiveType { kind: k2, annotations: a2, .. },
        ) => k1 == k2 && nodes_equals(a1, a2),
        (
            Node::ArrayType { component_type: c1, annotations: a1, .. },
            Node::ArrayType { component_type: c2, annotations: a2, .. },
        ) => arc_equals(c1, c2) && nodes_equals(a1, a2),
        (
            Node::ArrayCreationLevel { dimension: d1, annotations: a1, .. },
            Node::ArrayCreationLevel { dimension: d2, annotations: a2, .. },
        ) => nodes_equals(a1, a2) && opt_node_equals(d1.as_ref(), d2.as_ref()),
        (
            Node::IntersectionType { elements: e1, annotations: a1, .. },
            Node::IntersectionType { elements: e2, annotations: a2, .. },
        ) => nodes_equals(e1, e2) && nodes_equals(a1, a2),
        (
            Node::UnionType { elements: e1, annotations: a1, .. },
            Node::UnionType { elements: e2, annotations: a2, .. },
        ) => nodes_equals(e1, e2) && nodes_equals(a1, a2),
        (Node::VoidType { annotations: a1, .. }, Node::VoidType { annotations: a2, .. }) => {
            nodes_equals(a1, a2)
        }
        (
            Node::WildcardType { extended_type: e1, super_type: s1, annotations: a1, .. },
            Node::WildcardType { extended_type: e2, super_type: s2, annotations: a2, .. },
        ) => {
            opt_node_equals(e1.as_ref(), e2.as_ref())
                && opt_node_equals(s1.as_ref(), s2.as_ref())
                && nodes_equals(a1, a2)
        }
        (Node::UnknownType { annotations: a1, .. }, Node::UnknownType { annotations: a2, .. }) => {
            nodes_equals(a1, a2)
        }
        (
            Node::ArrayAccessExpr { name: n1, index: i1, .. },
            Node::ArrayAccessExpr { name: n2, index: i2, .. },
        ) => arc_equals(i1, i2) && arc_equals(n1, n2),
        (
            Node::ArrayCreationExpr { element_type: e1, levels: l1, initializer: i1, .. },
            Node::ArrayCreationExpr { element_type: e2, levels: l2, initializer: i2, .. },
        ) => {
            arc_equals(e1, e2)
                && opt_node_equals(i1.as_ref(), i2.as_ref())
                && nodes_equals(l1, l2)
        }
        (
            Node::ArrayInitializerExpr { values: v1, .. },
            Node::ArrayInitializerExpr { values: v2, .. },
        ) => nodes_equals(v1, v2),
        (
            Node::AssignExpr { target: t1, operator: o1, value: v1, .. },
            Node::AssignExpr { target: t2, operator: o2, value: v2, .. },
        ) => o1 == o2 && arc_equals(t1, t2) && arc_equals(v1, v2),
        (
            Node::BinaryExpr { left: l1, operator: o1, right: r1, .. },
            Node::BinaryExpr { left: l2, operator: o2, right: r2, .. },
        ) => arc_equals(l1, l2) && o1 == o2 && arc_equals(r1, r2),
        (
            Node::CastExpr { ty: t1, expression: e1, .. },
            Node::CastExpr { ty: t2, expression: e2, .. },
        ) => arc_equals(e1, e2) && arc_equals(t1, t2),
        (Node::ClassExpr { ty: t1, .. }, Node::ClassExpr { ty: t2, .. }) => arc_equals(t1, t2),
        (
            Node::ConditionalExpr { condition: c1, then_expr: t1, else_expr: e1, .. },
            Node::ConditionalExpr { condition: c2, then_expr: t2, else_expr: e2, .. },
        ) => arc_equals(c1, c2) && arc_equals(e1, e2) && arc_equals(t1, t2),
        (Node::EnclosedExpr { inner: i1, .. }, Node::EnclosedExpr { inner: i2, .. }) => {
            opt_node_equals(i1.as_ref(), i2.as_ref())
        }
        (
            Node::FieldAccessExpr { scope: s1, type_arguments: ta1, name: n1, .. },
            Node::FieldAccessExpr { scope: s2, type_arguments: ta2, name: n2, .. },
        ) => {
            arc_equals(n1, n2)
                && opt_node_equals(s1.as_ref(), s2.as_ref())
                && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
        }
        (
            Node::InstanceOfExpr { expression: e1, ty: t1, .. },
            Node::InstanceOfExpr { expression: e2, ty: t2, .. },
        ) => arc_equals(e1, e2) && arc_equals(t1, t2),
        (
            Node::StringLiteralExpr { value: v1, .. },
            Node::StringLiteralExpr { value: v2, .. },
        ) => v1 == v2,
        (
            Node::IntegerLiteralExpr { value: v1, .. },
            Node::IntegerLiteralExpr { value: v2, .. },
        ) => v1 == v2,
        (Node::LongLiteralExpr { value: v1, .. }, Node::LongLiteralExpr { value: v2, .. }) => {
            v1 == v2
        }
        (Node::CharLiteralExpr { value: v1, .. }, Node::CharLiteralExpr { value: v2, .. }) => {
            v1 == v2
        }
        (
            Node::DoubleLiteralExpr { value: v1, .. },
            Node::DoubleLiteralExpr { value: v2, .. },
        ) => v1 == v2,
        (
            Node::BooleanLiteralExpr { value: v1, .. },
            Node::BooleanLiteralExpr { value: v2, .. },
        ) => v1 == v2,
        (Node::NullLiteralExpr { .. }, Node::NullLiteralExpr { .. }) => true,
        (
            Node::MethodCallExpr {
                scope: s1, type_arguments: ta1, name: n1, arguments: arg1, ..
            },
            Node::MethodCallExpr {
                scope: s2, type_arguments: ta2, name: n2, arguments: arg2, ..
            },
        ) => {
            nodes_equals(arg1, arg2)
                && arc_equals(n1, n2)
                && opt_node_equals(s1.as_ref(), s2.as_ref())
                && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
        }
        (Node::NameExpr { name: n1, .. }, Node::NameExpr { name: n2, .. }) => arc_equals(n1, n2),
        (
            Node::ObjectCreationExpr {
                scope: s1,
                ty: t1,
                type_arguments: ta1,
                arguments: arg1,
                anonymous_class_body: acb1,
                ..
            },
            Node::ObjectCreationExpr {
                scope: s2,
                ty: t2,
                type_arguments: ta2,
                arguments: arg2,
                anonymous_class_body: acb2,
                ..
            },
        ) => {
            opt_nodes_equals(acb1.as_ref(), acb2.as_ref())
                && nodes_equals(arg1, arg2)
                && opt_node_equals(s1.as_ref(), s2.as_ref())
                && arc_equals(t1, t2)
                && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
        }
        (
            Node::Name { qualifier: q1, identifier: i1, .. },
            Node::Name { qualifier: q2, identifier: i2, .. },
        ) => i1 == i2 && opt_node_equals(q1.as_ref(), q2.as_ref()),
        (
            Node::SimpleName { identifier: i1, .. },
            Node::SimpleName { identifier: i2, .. },
        ) => i1 == i2,
        (Node::ThisExpr { class_expr: c1, .. }, Node::ThisExpr { class_expr: c2, .. }) => {
            opt_node_equals(c1.as_ref(), c2.as_ref())
        }
        (Node::SuperExpr { class_expr: c1, .. }, Node::SuperExpr { class_expr: c2, .. }) => {
            opt_node_equals(c1.as_ref(), c2.as_ref())
        }
        (
            Node::UnaryExpr { expression: e1, operator: o1, .. },
            Node::UnaryExpr { expression: e2, operator: o2, .. },
        ) => arc_equals(e1, e2) && o1 == o2,
        (
            Node::VariableDeclarationExpr {
                modifiers: m1, annotations: a1, variables: v1, ..
            },
            Node::VariableDeclarationExpr {
                modifiers: m2, annotations: a2, variables: v2, ..
            },
        ) => nodes_equals(a1, a2) && m1 == m2 && nodes_equals(v1, v2),
        (
            Node::MarkerAnnotationExpr { name: n1, .. },
            Node::MarkerAnnotationExpr { name: n2, .. },
        ) => arc_equals(n1, n2),
        (
            Node::SingleMemberAnnotationExpr { name: n1, member_value: v1, .. },
            Node::SingleMemberAnnotationExpr { name: n2, member_value: v2, .. },
        ) => arc_equals(v1, v2) && arc_equals(n1, n2),
        (
            Node::NormalAnnotationExpr { name: n1, pairs: p1, .. },
            Node::NormalAnnotationExpr { name: n2, pairs: p2, .. },
        ) => nodes_equals(p1, p2) && arc_equals(n1, n2),
        (
            Node::MemberValuePair { name: n1, value: v1, .. },
            Node::MemberValuePair { name: n2, value: v2, .. },
        ) => arc_equals(n1, n2) && arc_equals(v1, v2),
        (
            Node::LambdaExpr { parameters: p1, body: b1, is_enclosing_parameters: e1, .. },
            Node::LambdaExpr { parameters: p2, body: b2, is_enclosing_parameters: e2, .. },
        ) => arc_equals(b1, b2) && e1 == e2 && nodes_equals(p1, p2),
        (
            Node::MethodReferenceExpr {
                scope: s1, type_arguments: ta1, identifier: i1, ..
            },
            Node::MethodReferenceExpr {
                scope: s2, type_arguments: ta2, identifier: i2, ..
            },
        ) => {
            i1 == i2 && arc_equals(s1, s2) && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
        }
        (Node::TypeExpr { ty: t1, .. }, Node::TypeExpr { ty: t2, .. }) => arc_equals(t1, t2),
        (
            Node::ExplicitConstructorInvocationStmt {
                type_arguments: ta1, is_this: t1, expression: e1, arguments: arg1, ..
            },
            Node::ExplicitConstructorInvocationStmt {
                type_arguments: ta2, is_this: t2, expression: e2, arguments: arg2, ..
            },
        ) => {
            nodes_equals(arg1, arg2)
                && opt_node_equals(e1.as_ref(), e2.as_ref())
                && t1 == t2
                && opt_nodes_equals(ta1.as_ref(), ta2.as_ref())
        }
        (
            Node::LocalClassDeclarationStmt { class_declaration: c1, .. },
            Node::LocalClassDeclarationStmt { class_declaration: c2, .. },
        ) => arc_equals(c1, c2),
        (
            Node::AssertStmt { check: c1, message: m1, .. },
            Node::AssertStmt { check: c2, message: m2, .. },
        ) => arc_equals(c1, c2) && opt_node_equals(m1.as_ref(), m2.as_ref()),
        (Node::BlockStmt { statements: s1, .. }, Node::BlockStmt { statements: s2, .. }) => {
            nodes_equals(s1, s2)
        }
        (
            Node::LabeledStmt { label: l1, statement: s1, .. },
            Node::LabeledStmt { label: l2, statement: s2, .. },
        ) => arc_equals(l1, l2) && arc_equals(s1, s2),
        (Node::EmptyStmt { .. }, Node::EmptyStmt { .. }) => true,
        (
            Node::ExpressionStmt { expression: e1, .. },
            Node::ExpressionStmt { expression: e2, .. },
        ) => arc_equals(e1, e2),
        (
            Node::SwitchStmt { selector: s1, entries: e1, .. },
            Node::SwitchStmt { selector: s2, entries: e2, .. },
        ) => nodes_equals(e1, e2) && arc_equals(s1, s2),
        (
            Node::SwitchEntryStmt { label: l1, statements: s1, .. },
            Node::SwitchEntryStmt { label: l2, statements: s2, .. },
        ) => opt_node_equals(l1.as_ref(), l2.as_ref()) && nodes_equals(s1, s2),
        (Node::BreakStmt { label: l1, .. }, Node::BreakStmt { label: l2, .. }) => {
            opt_node_equals(l1.as_ref(), l2.as_ref())
        }
        (Node::ContinueStmt { label: l1, .. }, Node::ContinueStmt { label: l2, .. }) => {
            opt_node_equals(l1.as_ref(), l2.as_ref())
        }
        (Node::ReturnStmt { expression: e1, .. }, Node::ReturnStmt { expression: e2, .. }) => {
            opt_node_equals(e1.as_ref(), e2.as_ref())
        }
        (
            Node::IfStmt { condition: c1, then_stmt: t1, else_stmt: e1, .. },
            Node::IfStmt { condition: c2, then_stmt: t2, else_stmt: e2, .. },
        ) => {
            arc_equals(c1, c2)
                && opt_node_equals(e1.as_ref(), e2.as_ref())
                && arc_equals(t1, t2)
        }
        (
            Node::WhileStmt { condition: c1, body: b1, .. },
            Node::WhileStmt { condition: c2, body: b2, .. },
        ) => arc_equals(b1, b2) && arc_equals(c1, c2),
        (
            Node::DoStmt { body: b1, condition: c1, .. },
            Node::DoStmt { body: b2, condition: c2, .. },
        ) => arc_equals(b1, b2) && arc_equals(c1, c2),
        (
            Node::ForeachStmt { variable: v1, iterable: i1, body: b1, .. },
            Node::ForeachStmt { variable: v2, iterable: i2, body: b2, .. },
        ) => arc_equals(b1, b2) && arc_equals(i1, i2) && arc_equals(v1, v2),
        (
            Node::ForStmt { initialization: i1, compare: c1, update: u1, body: b1, .. },
            Node::ForStmt { initialization: i2, compare: c2, update: u2, body: b2, .. },
        ) => {
            arc_equals(b1, b2)
                && opt_node_equals(c1.as_ref(), c2.as_ref())
                && nodes_equals(i1, i2)
                && nodes_equals(u1, u2)
        }
        (Node::ThrowStmt { expression: e1, .. }, Node::ThrowStmt { expression: e2, .. }) => {
            arc_equals(e1, e2)
        }
        (
            Node::SynchronizedStmt { expression: e1, body: b1, .. },
            Node::SynchronizedStmt { expression: e2, body: b2, .. },
        ) => arc_equals(b1, b2) && arc_equals(e1, e2),
        (
            Node::TryStmt {
                resources: r1, try_block: t1, catch_clauses: c1, finally_block: f1, ..
            },
            Node::TryStmt {
                resources: r2, try_block: t2, catch_clauses: c2, finally_block: f2, ..
            },
        ) => {
            nodes_equals(c1, c2)
                && opt_node_equals(f1.as_ref(), f2.as_ref())
                && nodes_equals(r1, r2)
                && arc_equals(t1, t2)
        }
        (
            Node::CatchClause { parameter: p1, body: b1, .. },
            Node::CatchClause { parameter: p2, body: b2, .. },
        ) => arc_equals(b1, b2) && arc_equals(p1, p2),
        // Different variants: intercepted by the kind guard in node_equals,
        // so this arm only ever sees genuinely mismatched pairs.
        _ => false,
    }
}
