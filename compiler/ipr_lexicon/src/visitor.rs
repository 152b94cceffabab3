//! Category dispatch for read-only collaborators (printers, analyzers).

use crate::{
    DeclId, DeclNode, DirectiveId, DirectiveNode, ExprId, ExprNode, Lexicon, NameId, NameNode,
    NodeRef, StmtId, StmtNode, TypeId, TypeNode,
};

/// Per-category callbacks. Every method defaults to doing nothing.
#[allow(unused_variables, reason = "default methods ignore their arguments")]
pub trait Visitor {
    fn visit_name(&mut self, lex: &Lexicon, id: NameId, node: &NameNode) {}
    fn visit_type(&mut self, lex: &Lexicon, id: TypeId, node: &TypeNode) {}
    fn visit_expr(&mut self, lex: &Lexicon, id: ExprId, node: &ExprNode) {}
    fn visit_stmt(&mut self, lex: &Lexicon, id: StmtId, node: &StmtNode) {}
    fn visit_decl(&mut self, lex: &Lexicon, id: DeclId, node: &DeclNode) {}
    fn visit_directive(&mut self, lex: &Lexicon, id: DirectiveId, node: &DirectiveNode) {}
}

impl NodeRef {
    /// Call the `visitor` method matching this node's category.
    pub fn accept<V: Visitor + ?Sized>(self, lex: &Lexicon, visitor: &mut V) {
        match self {
            NodeRef::Name(id) => visitor.visit_name(lex, id, lex.name(id)),
            NodeRef::Type(id) => visitor.visit_type(lex, id, lex.ty(id)),
            NodeRef::Expr(id) => visitor.visit_expr(lex, id, lex.expr(id)),
            NodeRef::Stmt(id) => visitor.visit_stmt(lex, id, lex.stmt(id)),
            NodeRef::Decl(id) => visitor.visit_decl(lex, id, lex.decl(id)),
            NodeRef::Directive(id) => visitor.visit_directive(lex, id, lex.directive(id)),
        }
    }
}
