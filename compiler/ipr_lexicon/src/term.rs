//! Heterogeneous node references.

use crate::{DeclId, DirectiveId, ExprId, NameId, StmtId, TypeId};

/// Template argument: a name, a type or an expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Term {
    Name(NameId),
    Type(TypeId),
    Expr(ExprId),
}

/// Reference to a node of any category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NodeRef {
    Name(NameId),
    Type(TypeId),
    Expr(ExprId),
    Stmt(StmtId),
    Decl(DeclId),
    Directive(DirectiveId),
}

macro_rules! node_ref_from {
    ($($id:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for NodeRef {
                fn from(id: $id) -> Self {
                    NodeRef::$variant(id)
                }
            }
        )*
    };
}

node_ref_from! {
    NameId => Name,
    TypeId => Type,
    ExprId => Expr,
    StmtId => Stmt,
    DeclId => Decl,
    DirectiveId => Directive,
}

impl From<Term> for NodeRef {
    fn from(term: Term) -> Self {
        match term {
            Term::Name(id) => NodeRef::Name(id),
            Term::Type(id) => NodeRef::Type(id),
            Term::Expr(id) => NodeRef::Expr(id),
        }
    }
}

impl From<TypeId> for Term {
    fn from(id: TypeId) -> Self {
        Term::Type(id)
    }
}

impl From<ExprId> for Term {
    fn from(id: ExprId) -> Self {
        Term::Expr(id)
    }
}

impl From<NameId> for Term {
    fn from(id: NameId) -> Self {
        Term::Name(id)
    }
}
