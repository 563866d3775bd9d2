use std::sync::Arc;

use rpds::Vector;

use super::node_types::*;

/// Variant tag of a [`Node`], usable for dispatch without touching attributes.
///
/// Two nodes can only be structurally equal when their kinds match; consumers
/// (de-duplication buckets, dispatch tables) can rely on the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    ClassOrInterfaceDeclaration,
    EnumDeclaration,
    EnumConstantDeclaration,
    AnnotationDeclaration,
    AnnotationMemberDeclaration,
    FieldDeclaration,
    VariableDeclarator,
    ConstructorDeclaration,
    MethodDeclaration,
    Parameter,
    EmptyMemberDeclaration,
    InitializerDeclaration,
    TypeParameter,
    LineComment,
    BlockComment,
    JavadocComment,
    ClassOrInterfaceType,
    PrimitiveType,
    ArrayType,
    ArrayCreationLevel,
    IntersectionType,
    UnionType,
    VoidType,
    WildcardType,
    UnknownType,
    ArrayAccessExpr,
    ArrayCreationExpr,
    ArrayInitializerExpr,
    AssignExpr,
    BinaryExpr,
    CastExpr,
    ClassExpr,
    ConditionalExpr,
    EnclosedExpr,
    FieldAccessExpr,
    InstanceOfExpr,
    StringLiteralExpr,
    IntegerLiteralExpr,
    LongLiteralExpr,
    CharLiteralExpr,
    DoubleLiteralExpr,
    BooleanLiteralExpr,
    NullLiteralExpr,
    MethodCallExpr,
    NameExpr,
    ObjectCreationExpr,
    Name,
    SimpleName,
    ThisExpr,
    SuperExpr,
    UnaryExpr,
    VariableDeclarationExpr,
    MarkerAnnotationExpr,
    SingleMemberAnnotationExpr,
    NormalAnnotationExpr,
    MemberValuePair,
    LambdaExpr,
    MethodReferenceExpr,
    TypeExpr,
    ExplicitConstructorInvocationStmt,
    LocalClassDeclarationStmt,
    AssertStmt,
    BlockStmt,
    LabeledStmt,
    EmptyStmt,
    ExpressionStmt,
    SwitchStmt,
    SwitchEntryStmt,
    BreakStmt,
    ContinueStmt,
    ReturnStmt,
    IfStmt,
    WhileStmt,
    DoStmt,
    ForeachStmt,
    ForStmt,
    ThrowStmt,
    SynchronizedStmt,
    TryStmt,
    CatchClause,
}

impl Node {
    /// Returns the variant tag of the node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::CompilationUnit { .. } => NodeKind::CompilationUnit,
            Node::PackageDeclaration { .. } => NodeKind::PackageDeclaration,
            Node::ImportDeclaration { .. } => NodeKind::ImportDeclaration,
            Node::ClassOrInterfaceDeclaration { .. } => NodeKind::ClassOrInterfaceDeclaration,
            Node::EnumDeclaration { .. } => NodeKind::EnumDeclaration,
            Node::EnumConstantDeclaration { .. } => NodeKind::EnumConstantDeclaration,
            Node::AnnotationDeclaration { .. } => NodeKind::AnnotationDeclaration,
            Node::AnnotationMemberDeclaration { .. } => NodeKind::AnnotationMemberDeclaration,
            Node::FieldDeclaration { .. } => NodeKind::FieldDeclaration,
            Node::VariableDeclarator { .. } => NodeKind::VariableDeclarator,
            Node::ConstructorDeclaration { .. } => NodeKind::ConstructorDeclaration,
            Node::MethodDeclaration { .. } => NodeKind::MethodDeclaration,
            Node::Parameter { .. } => NodeKind::Parameter,
            Node::EmptyMemberDeclaration { .. } => NodeKind::EmptyMemberDeclaration,
            Node::InitializerDeclaration { .. } => NodeKind::InitializerDeclaration,
            Node::TypeParameter { .. } => NodeKind::TypeParameter,
            Node::LineComment { .. } => NodeKind::LineComment,
            Node::BlockComment { .. } => NodeKind::BlockComment,
            Node::JavadocComment { .. } => NodeKind::JavadocComment,
            Node::ClassOrInterfaceType { .. } => NodeKind::ClassOrInterfaceType,
            Node::PrimitiveType { .. } => NodeKind::PrimitiveType,
            Node::ArrayType { .. } => NodeKind::ArrayType,
            Node::ArrayCreationLevel { .. } => NodeKind::ArrayCreationLevel,
            Node::IntersectionType { .. } => NodeKind::IntersectionType,
            Node::UnionType { .. } => NodeKind::UnionType,
            Node::VoidType { .. } => NodeKind::VoidType,
            Node::WildcardType { .. } => NodeKind::WildcardType,
            Node::UnknownType { .. } => NodeKind::UnknownType,
            Node::ArrayAccessExpr { .. } => NodeKind::ArrayAccessExpr,
            Node::ArrayCreationExpr { .. } => NodeKind::ArrayCreationExpr,
            Node::ArrayInitializerExpr { .. } => NodeKind::ArrayInitializerExpr,
            Node::AssignExpr { .. } => NodeKind::AssignExpr,
            Node::BinaryExpr { .. } => NodeKind::BinaryExpr,
            Node::CastExpr { .. } => NodeKind::CastExpr,
            Node::ClassExpr { .. } => NodeKind::ClassExpr,
            Node::ConditionalExpr { .. } => NodeKind::ConditionalExpr,
            Node::EnclosedExpr { .. } => NodeKind::EnclosedExpr,
            Node::FieldAccessExpr { .. } => NodeKind::FieldAccessExpr,
            Node::InstanceOfExpr { .. } => NodeKind::InstanceOfExpr,
            Node::StringLiteralExpr { .. } => NodeKind::StringLiteralExpr,
            Node::IntegerLiteralExpr { .. } => NodeKind::IntegerLiteralExpr,
            Node::LongLiteralExpr { .. } => NodeKind::LongLiteralExpr,
            Node::CharLiteralExpr { .. } => NodeKind::CharLiteralExpr,
            Node::DoubleLiteralExpr { .. } => NodeKind::DoubleLiteralExpr,
            Node::BooleanLiteralExpr { .. } => NodeKind::BooleanLiteralExpr,
            Node::NullLiteralExpr { .. } => NodeKind::NullLiteralExpr,
            Node::MethodCallExpr { .. } => NodeKind::MethodCallExpr,
            Node::NameExpr { .. } => NodeKind::NameExpr,
            Node::ObjectCreationExpr { .. } => NodeKind::ObjectCreationExpr,
            Node::Name { .. } => NodeKind::Name,
            Node::SimpleName { .. } => NodeKind::SimpleName,
            Node::ThisExpr { .. } => NodeKind::ThisExpr,
            Node::SuperExpr { .. } => NodeKind::SuperExpr,
            Node::UnaryExpr { .. } => NodeKind::UnaryExpr,
            Node::VariableDeclarationExpr { .. } => NodeKind::VariableDeclarationExpr,
            Node::MarkerAnnotationExpr { .. } => NodeKind::MarkerAnnotationExpr,
            Node::SingleMemberAnnotationExpr { .. } => NodeKind::SingleMemberAnnotationExpr,
            Node::NormalAnnotationExpr { .. } => NodeKind::NormalAnnotationExpr,
            Node::MemberValuePair { .. } => NodeKind::MemberValuePair,
            Node::LambdaExpr { .. } => NodeKind::LambdaExpr,
            Node::MethodReferenceExpr { .. } => NodeKind::MethodReferenceExpr,
            Node::TypeExpr { .. } => NodeKind::TypeExpr,
            Node::ExplicitConstructorInvocationStmt { .. } => NodeKind::ExplicitConstructorInvocationStmt,
            Node::LocalClassDeclarationStmt { .. } => NodeKind::LocalClassDeclarationStmt,
            Node::AssertStmt { .. } => NodeKind::AssertStmt,
            Node::BlockStmt { .. } => NodeKind::BlockStmt,
            Node::LabeledStmt { .. } => NodeKind::LabeledStmt,
            Node::EmptyStmt { .. } => NodeKind::EmptyStmt,
            Node::ExpressionStmt { .. } => NodeKind::ExpressionStmt,
            Node::SwitchStmt { .. } => NodeKind::SwitchStmt,
            Node::SwitchEntryStmt { .. } => NodeKind::SwitchEntryStmt,
            Node::BreakStmt { .. } => NodeKind::BreakStmt,
            Node::ContinueStmt { .. } => NodeKind::ContinueStmt,
            Node::ReturnStmt { .. } => NodeKind::ReturnStmt,
            Node::IfStmt { .. } => NodeKind::IfStmt,
            Node::WhileStmt { .. } => NodeKind::WhileStmt,
            Node::DoStmt { .. } => NodeKind::DoStmt,
            Node::ForeachStmt { .. } => NodeKind::ForeachStmt,
            Node::ForStmt { .. } => NodeKind::ForStmt,
            Node::ThrowStmt { .. } => NodeKind::ThrowStmt,
            Node::SynchronizedStmt { .. } => NodeKind::SynchronizedStmt,
            Node::TryStmt { .. } => NodeKind::TryStmt,
            Node::CatchClause { .. } => NodeKind::CatchClause,
        }
    }

    /// Returns the cross-cutting attributes of the node.
    pub fn base(&self) -> &NodeBase {
        match self {
            Node::CompilationUnit { base, .. } => base,
            Node::PackageDeclaration { base, .. } => base,
            Node::ImportDeclaration { base, .. } => base,
            Node::ClassOrInterfaceDeclaration { base, .. } => base,
            Node::EnumDeclaration { base, .. } => base,
            Node::EnumConstantDeclaration { base, .. } => base,
            Node::AnnotationDeclaration { base, .. } => base,
            Node::AnnotationMemberDeclaration { base, .. } => base,
            Node::FieldDeclaration { base, .. } => base,
            Node::VariableDeclarator { base, .. } => base,
            Node::ConstructorDeclaration { base, .. } => base,
            Node::MethodDeclaration { base, .. } => base,
            Node::Parameter { base, .. } => base,
            Node::EmptyMemberDeclaration { base, .. } => base,
            Node::InitializerDeclaration { base, .. } => base,
            Node::TypeParameter { base, .. } => base,
            Node::LineComment { base, .. } => base,
            Node::BlockComment { base, .. } => base,
            Node::JavadocComment { base, .. } => base,
            Node::ClassOrInterfaceType { base, .. } => base,
            Node::PrimitiveType { base, .. } => base,
            Node::ArrayType { base, .. } => base,
            Node::ArrayCreationLevel { base, .. } => base,
            Node::IntersectionType { base, .. } => base,
            Node::UnionType { base, .. } => base,
            Node::VoidType { base, .. } => base,
            Node::WildcardType { base, .. } => base,
            Node::UnknownType { base, .. } => base,
            Node::ArrayAccessExpr { base, .. } => base,
            Node::ArrayCreationExpr { base, .. } => base,
            Node::ArrayInitializerExpr { base, .. } => base,
            Node::AssignExpr { base, .. } => base,
            Node::BinaryExpr { base, .. } => base,
            Node::CastExpr { base, .. } => base,
            Node::ClassExpr { base, .. } => base,
            Node::ConditionalExpr { base, .. } => base,
            Node::EnclosedExpr { base, .. } => base,
            Node::FieldAccessExpr { base, .. } => base,
            Node::InstanceOfExpr { base, .. } => base,
            Node::StringLiteralExpr { base, .. } => base,
            Node::IntegerLiteralExpr { base, .. } => base,
            Node::LongLiteralExpr { base, .. } => base,
            Node::CharLiteralExpr { base, .. } => base,
            Node::DoubleLiteralExpr { base, .. } => base,
            Node::BooleanLiteralExpr { base, .. } => base,
            Node::NullLiteralExpr { base, .. } => base,
            Node::MethodCallExpr { base, .. } => base,
            Node::NameExpr { base, .. } => base,
            Node::ObjectCreationExpr { base, .. } => base,
            Node::Name { base, .. } => base,
            Node::SimpleName { base, .. } => base,
            Node::ThisExpr { base, .. } => base,
            Node::SuperExpr { base, .. } => base,
            Node::UnaryExpr { base, .. } => base,
            Node::VariableDeclarationExpr { base, .. } => base,
            Node::MarkerAnnotationExpr { base, .. } => base,
            Node::SingleMemberAnnotationExpr { base, .. } => base,
            Node::NormalAnnotationExpr { base, .. } => base,
            Node::MemberValuePair { base, .. } => base,
            Node::LambdaExpr { base, .. } => base,
            Node::MethodReferenceExpr { base, .. } => base,
            Node::TypeExpr { base, .. } => base,
            Node::ExplicitConstructorInvocationStmt { base, .. } => base,
            Node::LocalClassDeclarationStmt { base, .. } => base,
            Node::AssertStmt { base, .. } => base,
            Node::BlockStmt { base, .. } => base,
            Node::LabeledStmt { base, .. } => base,
            Node::EmptyStmt { base, .. } => base,
            Node::ExpressionStmt { base, .. } => base,
            Node::SwitchStmt { base, .. } => base,
            Node::SwitchEntryStmt { base, .. } => base,
            Node::BreakStmt { base, .. } => base,
            Node::ContinueStmt { base, .. } => base,
            Node::ReturnStmt { base, .. } => base,
            Node::IfStmt { base, .. } => base,
            Node::WhileStmt { base, .. } => base,
            Node::DoStmt { base, .. } => base,
            Node::ForeachStmt { base, .. } => base,
            Node::ForStmt { base, .. } => base,
            Node::ThrowStmt { base, .. } => base,
            Node::SynchronizedStmt { base, .. } => base,
            Node::TryStmt { base, .. } => base,
            Node::CatchClause { base, .. } => base,
        }
    }
}

/// Collects nodes into a [`NodeVector`].
pub fn node_vector<I>(nodes: I) -> NodeVector
where
    I: IntoIterator<Item = Arc<Node>>,
{
    let mut v: NodeVector = Vector::new_with_ptr_kind();
    for node in nodes {
        v = v.push_back(node);
    }
    v
}

// Node factories. These cover the constructs that consumers build by hand
// most often; the remaining variants are constructed literally.
impl Node {
    pub fn simple_name(identifier: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::SimpleName {
            base: NodeBase::default(),
            identifier: identifier.into(),
        })
    }

    pub fn name(qualifier: Option<Arc<Node>>, identifier: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::Name {
            base: NodeBase::default(),
            qualifier,
            identifier: identifier.into(),
        })
    }

    pub fn name_expr(identifier: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::NameExpr {
            base: NodeBase::default(),
            name: Node::simple_name(identifier),
        })
    }

    pub fn line_comment(content: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::LineComment {
            base: NodeBase::default(),
            content: content.into(),
        })
    }

    pub fn block_comment(content: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::BlockComment {
            base: NodeBase::default(),
            content: content.into(),
        })
    }

    pub fn javadoc_comment(content: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::JavadocComment {
            base: NodeBase::default(),
            content: content.into(),
        })
    }

    pub fn string_literal(value: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::StringLiteralExpr {
            base: NodeBase::default(),
            value: value.into(),
        })
    }

    /// Builds an integer literal from its source text (e.g., `"0x1F"`).
    pub fn integer_literal(value: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::IntegerLiteralExpr {
            base: NodeBase::default(),
            value: value.into(),
        })
    }

    pub fn boolean_literal(value: bool) -> Arc<Node> {
        Arc::new(Node::BooleanLiteralExpr {
            base: NodeBase::default(),
            value,
        })
    }

    pub fn binary_expr(left: Arc<Node>, operator: BinaryOperator, right: Arc<Node>) -> Arc<Node> {
        Arc::new(Node::BinaryExpr {
            base: NodeBase::default(),
            left,
            operator,
            right,
        })
    }

    pub fn enclosed_expr(inner: Arc<Node>) -> Arc<Node> {
        Arc::new(Node::EnclosedExpr {
            base: NodeBase::default(),
            inner: Some(inner),
        })
    }

    pub fn expression_stmt(expression: Arc<Node>) -> Arc<Node> {
        Arc::new(Node::ExpressionStmt {
            base: NodeBase::default(),
            expression,
        })
    }

    pub fn block_stmt<I>(statements: I) -> Arc<Node>
    where
        I: IntoIterator<Item = Arc<Node>>,
    {
        Arc::new(Node::BlockStmt {
            base: NodeBase::default(),
            statements: node_vector(statements),
        })
    }

    pub fn class_or_interface_type(name: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::ClassOrInterfaceType {
            base: NodeBase::default(),
            scope: None,
            name: Node::simple_name(name),
            type_arguments: None,
            annotations: node_vector([]),
        })
    }

    pub fn parameter(ty: Arc<Node>, name: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::Parameter {
            base: NodeBase::default(),
            modifiers: Modifiers::empty(),
            annotations: node_vector([]),
            ty,
            is_var_args: false,
            name: Node::simple_name(name),
        })
    }
}

// Structural equality doubles as the `PartialEq` of the tree so that
// `assert_eq!` in consumer tests compares content, not identity.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        crate::eq::node_equals(self, other)
    }
}

impl Eq for Node {}
