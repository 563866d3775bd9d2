// Shared tree builders and generators for the equality test suites.
#![allow(dead_code)]

use std::sync::Arc;

use quickcheck::{Arbitrary, Gen};

use java_ast::ast::{
    BinaryOperator, Modifiers, Node, NodeBase, UnaryOperator, node_vector,
};

pub fn void_type() -> Arc<Node> {
    Arc::new(Node::VoidType {
        base: NodeBase::default(),
        annotations: node_vector([]),
    })
}

pub fn int_type() -> Arc<Node> {
    Arc::new(Node::PrimitiveType {
        base: NodeBase::default(),
        kind: java_ast::ast::PrimitiveKind::Int,
        annotations: node_vector([]),
    })
}

pub fn method_declaration(
    name: &str,
    parameters: Vec<Arc<Node>>,
    body: Option<Arc<Node>>,
) -> Arc<Node> {
    Arc::new(Node::MethodDeclaration {
        base: NodeBase::default(),
        modifiers: Modifiers::PUBLIC,
        annotations: node_vector([]),
        type_parameters: node_vector([]),
        ty: void_type(),
        name: Node::simple_name(name),
        parameters: node_vector(parameters),
        thrown_exceptions: node_vector([]),
        body,
        is_default: false,
    })
}

pub fn class_declaration(base: NodeBase, name: &str, members: Vec<Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::ClassOrInterfaceDeclaration {
        base,
        modifiers: Modifiers::PUBLIC,
        annotations: node_vector([]),
        is_interface: false,
        name: Node::simple_name(name),
        type_parameters: node_vector([]),
        extended_types: node_vector([]),
        implemented_types: node_vector([]),
        members: node_vector(members),
    })
}

fn copy_base(base: &NodeBase) -> NodeBase {
    let mut copied = NodeBase::new(base.span());
    if let Some(comment) = base.comment() {
        copied = copied.with_comment(deep_copy(comment));
    }
    for orphan in base.orphan_comments().iter() {
        copied = copied.with_orphan_comment(deep_copy(orphan));
    }
    copied
}

fn copy_nodes<'a, I>(nodes: I) -> java_ast::NodeVector
where
    I: IntoIterator<Item = &'a Arc<Node>>,
{
    node_vector(nodes.into_iter().map(deep_copy))
}

/// Rebuilds a tree with fresh instances at every level, so that equality
/// between the copy and the original cannot lean on pointer identity.
///
/// Covers the variants the builders and the generator produce; anything else
/// in a test tree would keep its children shared, which none of the suites
/// rely on.
pub fn deep_copy(node: &Arc<Node>) -> Arc<Node> {
    let base = copy_base(node.base());
    Arc::new(match &**node {
        Node::SimpleName { identifier, .. } => Node::SimpleName {
            base,
            identifier: identifier.clone(),
        },
        Node::Name { qualifier, identifier, .. } => Node::Name {
            base,
            qualifier: qualifier.as_ref().map(deep_copy),
            identifier: identifier.clone(),
        },
        Node::NameExpr { name, .. } => Node::NameExpr {
            base,
            name: deep_copy(name),
        },
        Node::IntegerLiteralExpr { value, .. } => Node::IntegerLiteralExpr {
            base,
            value: value.clone(),
        },
        Node::StringLiteralExpr { value, .. } => Node::StringLiteralExpr {
            base,
            value: value.clone(),
        },
        Node::BooleanLiteralExpr { value, .. } => Node::BooleanLiteralExpr { base, value: *value },
        Node::NullLiteralExpr { .. } => Node::NullLiteralExpr { base },
        Node::LineComment { content, .. } => Node::LineComment {
            base,
            content: content.clone(),
        },
        Node::BlockComment { content, .. } => Node::BlockComment {
            base,
            content: content.clone(),
        },
        Node::JavadocComment { content, .. } => Node::JavadocComment {
            base,
            content: content.clone(),
        },
        Node::BinaryExpr { left, operator, right, .. } => Node::BinaryExpr {
            base,
            left: deep_copy(left),
            operator: *operator,
            right: deep_copy(right),
        },
        Node::UnaryExpr { expression, operator, .. } => Node::UnaryExpr {
            base,
            expression: deep_copy(expression),
            operator: *operator,
        },
        Node::EnclosedExpr { inner, .. } => Node::EnclosedExpr {
            base,
            inner: inner.as_ref().map(deep_copy),
        },
        Node::ConditionalExpr { condition, then_expr, else_expr, .. } => Node::ConditionalExpr {
            base,
            condition: deep_copy(condition),
            then_expr: deep_copy(then_expr),
            else_expr: deep_copy(else_expr),
        },
        Node::MethodCallExpr { scope, type_arguments, name, arguments, .. } => {
            Node::MethodCallExpr {
                base,
                scope: scope.as_ref().map(deep_copy),
                type_arguments: type_arguments.as_ref().map(|args| copy_nodes(args.iter())),
                name: deep_copy(name),
                arguments: copy_nodes(arguments.iter()),
            }
        }
        Node::ExpressionStmt { expression, .. } => Node::ExpressionStmt {
            base,
            expression: deep_copy(expression),
        },
        Node::ReturnStmt { expression, .. } => Node::ReturnStmt {
            base,
            expression: expression.as_ref().map(deep_copy),
        },
        Node::BlockStmt { statements, .. } => Node::BlockStmt {
            base,
            statements: copy_nodes(statements.iter()),
        },
        Node::IfStmt { condition, then_stmt, else_stmt, .. } => Node::IfStmt {
            base,
            condition: deep_copy(condition),
            then_stmt: deep_copy(then_stmt),
            else_stmt: else_stmt.as_ref().map(deep_copy),
        },
        Node::WhileStmt { condition, body, .. } => Node::WhileStmt {
            base,
            condition: deep_copy(condition),
            body: deep_copy(body),
        },
        Node::Parameter { modifiers, annotations, ty, is_var_args, name, .. } => Node::Parameter {
            base,
            modifiers: *modifiers,
            annotations: copy_nodes(annotations.iter()),
            ty: deep_copy(ty),
            is_var_args: *is_var_args,
            name: deep_copy(name),
        },
        Node::PrimitiveType { kind, annotations, .. } => Node::PrimitiveType {
            base,
            kind: *kind,
            annotations: copy_nodes(annotations.iter()),
        },
        Node::VoidType { annotations, .. } => Node::VoidType {
            base,
            annotations: copy_nodes(annotations.iter()),
        },
        Node::ClassOrInterfaceType { scope, name, type_arguments, annotations, .. } => {
            Node::ClassOrInterfaceType {
                base,
                scope: scope.as_ref().map(deep_copy),
                name: deep_copy(name),
                type_arguments: type_arguments.as_ref().map(|args| copy_nodes(args.iter())),
                annotations: copy_nodes(annotations.iter()),
            }
        }
        Node::VariableDeclarator { ty, name, initializer, .. } => Node::VariableDeclarator {
            base,
            ty: deep_copy(ty),
            name: deep_copy(name),
            initializer: initializer.as_ref().map(deep_copy),
        },
        Node::FieldDeclaration { modifiers, annotations, variables, .. } => {
            Node::FieldDeclaration {
                base,
                modifiers: *modifiers,
                annotations: copy_nodes(annotations.iter()),
                variables: copy_nodes(variables.iter()),
            }
        }
        Node::MethodDeclaration {
            modifiers,
            annotations,
            type_parameters,
            ty,
            name,
            parameters,
            thrown_exceptions,
            body,
            is_default,
            ..
        } => Node::MethodDeclaration {
            base,
            modifiers: *modifiers,
            annotations: copy_nodes(annotations.iter()),
            type_parameters: copy_nodes(type_parameters.iter()),
            ty: deep_copy(ty),
            name: deep_copy(name),
            parameters: copy_nodes(parameters.iter()),
            thrown_exceptions: copy_nodes(thrown_exceptions.iter()),
            body: body.as_ref().map(deep_copy),
            is_default: *is_default,
        },
        Node::ClassOrInterfaceDeclaration {
            modifiers,
            annotations,
            is_interface,
            name,
            type_parameters,
            extended_types,
            implemented_types,
            members,
            ..
        } => Node::ClassOrInterfaceDeclaration {
            base,
            modifiers: *modifiers,
            annotations: copy_nodes(annotations.iter()),
            is_interface: *is_interface,
            name: deep_copy(name),
            type_parameters: copy_nodes(type_parameters.iter()),
            extended_types: copy_nodes(extended_types.iter()),
            implemented_types: copy_nodes(implemented_types.iter()),
            members: copy_nodes(members.iter()),
        },
        other => other.clone(),
    })
}

/// A small generated expression tree for property tests.
#[derive(Clone, Debug)]
pub struct ArbExpr(pub Arc<Node>);

impl Arbitrary for ArbExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbExpr(arbitrary_expr(g, 3))
    }
}

const IDENTIFIERS: &[&str] = &["a", "b", "x", "count", "value"];
const INT_TEXTS: &[&str] = &["0", "1", "01", "42", "0x1F"];
const COMMENTS: &[&str] = &[" note", " fixme", " see above"];

fn choose<'a, T>(g: &mut Gen, items: &'a [T]) -> &'a T {
    g.choose(items).expect("choice pool is non-empty")
}

fn arbitrary_operator(g: &mut Gen) -> BinaryOperator {
    *choose(
        g,
        &[
            BinaryOperator::Plus,
            BinaryOperator::Minus,
            BinaryOperator::Multiply,
            BinaryOperator::And,
            BinaryOperator::Equals,
            BinaryOperator::Less,
        ],
    )
}

fn arbitrary_leaf(g: &mut Gen) -> Arc<Node> {
    match choose(g, &[0u8, 1, 2, 3]) {
        0 => Node::integer_literal(*choose(g, INT_TEXTS)),
        1 => Node::string_literal(*choose(g, IDENTIFIERS)),
        2 => Node::boolean_literal(bool::arbitrary(g)),
        _ => Node::name_expr(*choose(g, IDENTIFIERS)),
    }
}

/// Generates an expression of bounded depth. Identifier and literal pools are
/// deliberately small so that independently generated trees collide often
/// enough to exercise the equal-and-unequal paths of the properties.
pub fn arbitrary_expr(g: &mut Gen, depth: usize) -> Arc<Node> {
    if depth == 0 {
        return arbitrary_leaf(g);
    }
    match choose(g, &[0u8, 1, 2, 3, 4, 5]) {
        0 => Node::binary_expr(
            arbitrary_expr(g, depth - 1),
            arbitrary_operator(g),
            arbitrary_expr(g, depth - 1),
        ),
        1 => Arc::new(Node::UnaryExpr {
            base: NodeBase::default(),
            expression: arbitrary_expr(g, depth - 1),
            operator: *choose(g, &[UnaryOperator::Minus, UnaryOperator::LogicalComplement]),
        }),
        2 => Node::enclosed_expr(arbitrary_expr(g, depth - 1)),
        3 => Arc::new(Node::MethodCallExpr {
            base: NodeBase::default(),
            scope: if bool::arbitrary(g) {
                Some(arbitrary_expr(g, depth - 1))
            } else {
                None
            },
            type_arguments: None,
            name: Node::simple_name(*choose(g, IDENTIFIERS)),
            arguments: node_vector((0..*choose(g, &[0usize, 1, 2])).map(|_| {
                arbitrary_expr(g, depth - 1)
            })),
        }),
        4 => {
            // A leaf with a comment attached, so the comment channel takes
            // part in the generated population.
            let base = NodeBase::default().with_comment(Node::line_comment(*choose(g, COMMENTS)));
            Arc::new(Node::BooleanLiteralExpr {
                base,
                value: bool::arbitrary(g),
            })
        }
        _ => arbitrary_leaf(g),
    }
}
