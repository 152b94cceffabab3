//! Expression nodes.
//!
//! Literals are canonical on `(type, spelling)`. The boolean and `nullptr`
//! constants and the `= default` / `= delete` markers are static singletons.
//! Every other expression is fresh.

use ipr_ir::{Category, CategoryGroup, KeyedStore, NodeId, NodeStats, Symbol};

use crate::{DeclId, ExprId, ExprListId, NameId, TypeId};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Plus,
    Negate,
    Not,
    Complement,
    Deref,
    AddressOf,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Spaceship,
    Assign,
    Comma,
    Index,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CastKind {
    /// `T(e)` or `(T)e`.
    Functional,
    Static,
    Dynamic,
    Const,
    Reinterpret,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    Literal {
        ty: TypeId,
        text: Symbol,
    },
    Bool(bool),
    Nullptr,
    DefaultMarker,
    DeleteMarker,
    /// Use of a name, with the declaration it resolved to (if known).
    Id {
        name: NameId,
        decl: Option<DeclId>,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    Call {
        callee: ExprId,
        args: ExprListId,
    },
    Cast {
        kind: CastKind,
        ty: TypeId,
        operand: ExprId,
    },
    Conditional {
        condition: ExprId,
        then: ExprId,
        otherwise: ExprId,
    },
    /// `object.member`, or `object->member` when `arrow` is set.
    Member {
        object: ExprId,
        member: NameId,
        arrow: bool,
    },
    Sizeof(TypeId),
    Alignof(TypeId),
    New {
        ty: TypeId,
        args: Option<ExprListId>,
    },
    Delete {
        operand: ExprId,
        array: bool,
    },
    Paren(ExprId),
    InitializerList(ExprListId),
    Throw(Option<ExprId>),
}

impl ExprKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Literal { .. } => Category::Literal,
            Self::Bool(_) => Category::Bool,
            Self::Nullptr => Category::Nullptr,
            Self::DefaultMarker => Category::DefaultMarker,
            Self::DeleteMarker => Category::DeleteMarker,
            Self::Id { .. } => Category::IdExpr,
            Self::Unary { .. } => Category::Unary,
            Self::Binary { .. } => Category::Binary,
            Self::Call { .. } => Category::Call,
            Self::Cast { .. } => Category::Cast,
            Self::Conditional { .. } => Category::Conditional,
            Self::Member { .. } => Category::Member,
            Self::Sizeof(_) => Category::Sizeof,
            Self::Alignof(_) => Category::Alignof,
            Self::New { .. } => Category::New,
            Self::Delete { .. } => Category::Delete,
            Self::Paren(_) => Category::Paren,
            Self::InitializerList(_) => Category::InitializerList,
            Self::Throw(_) => Category::Throw,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExprNode {
    pub id: NodeId,
    pub kind: ExprKind,
    /// Type of the expression; back-filled at most once.
    pub ty: Option<TypeId>,
}

impl ExprNode {
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

const fn singleton(index: u32, kind: ExprKind, ty: Option<TypeId>) -> ExprNode {
    ExprNode {
        id: NodeId::from_raw(TypeId::BUILTIN_COUNT + index),
        kind,
        ty,
    }
}

/// Expression constants, indexed by `ExprId`.
static SINGLETONS: [ExprNode; ExprId::SINGLETON_COUNT as usize] = [
    singleton(0, ExprKind::Bool(true), Some(TypeId::BOOL)),
    singleton(1, ExprKind::Bool(false), Some(TypeId::BOOL)),
    singleton(2, ExprKind::Nullptr, Some(TypeId::NULLPTR_T)),
    singleton(3, ExprKind::DefaultMarker, None),
    singleton(4, ExprKind::DeleteMarker, None),
];

pub(crate) struct ExprArena {
    nodes: Vec<ExprNode>,
    literals: KeyedStore<(TypeId, Symbol), ExprId>,
    lists: Vec<Box<[ExprId]>>,
}

impl ExprArena {
    /// Arena whose literal table already maps the spellings of the constant
    /// singletons to them.
    pub(crate) fn new() -> Self {
        let mut literals = KeyedStore::new();
        for (ty, word, id) in [
            (TypeId::BOOL, "true", ExprId::TRUE),
            (TypeId::BOOL, "false", ExprId::FALSE),
            (TypeId::NULLPTR_T, "nullptr", ExprId::NULLPTR),
        ] {
            let _ = literals.get_or_insert_with(&(ty, ipr_ir::StringPool::word(word)), || id);
        }
        ExprArena {
            nodes: Vec::new(),
            literals,
            lists: Vec::new(),
        }
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    pub(crate) fn get(&self, id: ExprId) -> &ExprNode {
        if id.is_singleton() {
            return &SINGLETONS[id.index()];
        }
        match id.index().checked_sub(ExprId::FIRST_DYNAMIC as usize) {
            Some(index) => &self.nodes[index],
            None => panic!("{id:?} is in the reserved expression range"),
        }
    }

    /// Mutable access for back-filling. Singletons are immutable.
    pub(crate) fn get_mut(&mut self, id: ExprId) -> Option<&mut ExprNode> {
        let index = id.index().checked_sub(ExprId::FIRST_DYNAMIC as usize)?;
        self.nodes.get_mut(index)
    }

    fn push(
        nodes: &mut Vec<ExprNode>,
        stats: &mut NodeStats,
        kind: ExprKind,
        ty: Option<TypeId>,
    ) -> ExprId {
        let id = ExprId::from_index(nodes.len() + ExprId::FIRST_DYNAMIC as usize);
        nodes.push(ExprNode {
            id: stats.record(kind.category()),
            kind,
            ty,
        });
        id
    }

    /// The unique literal of type `ty` spelled `text`. Literals know their
    /// type from the start.
    pub(crate) fn literal(&mut self, stats: &mut NodeStats, ty: TypeId, text: Symbol) -> ExprId {
        let nodes = &mut self.nodes;
        let (id, fresh) = self.literals.get_or_insert_with(&(ty, text), || {
            Self::push(nodes, stats, ExprKind::Literal { ty, text }, Some(ty))
        });
        stats.record_lookup(CategoryGroup::Expr, fresh);
        if fresh {
            tracing::trace!(?id, ?ty, "new literal");
        }
        id
    }

    pub(crate) fn fresh(
        &mut self,
        stats: &mut NodeStats,
        kind: ExprKind,
        ty: Option<TypeId>,
    ) -> ExprId {
        let id = Self::push(&mut self.nodes, stats, kind, ty);
        tracing::trace!(?id, category = %kind.category(), "new expression");
        id
    }

    pub(crate) fn push_list(&mut self, exprs: &[ExprId]) -> ExprListId {
        let id = ExprListId::from_index(self.lists.len());
        self.lists.push(exprs.into());
        id
    }

    pub(crate) fn list(&self, id: ExprListId) -> &[ExprId] {
        &self.lists[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipr_ir::StringPool;
    use pretty_assertions::assert_eq;

    #[test]
    fn singletons_are_static() {
        let arena = ExprArena::new();
        let t = arena.get(ExprId::TRUE);
        assert_eq!(t.kind, ExprKind::Bool(true));
        assert_eq!(t.ty, Some(TypeId::BOOL));
        assert!(t.id.is_static());
        assert_eq!(arena.get(ExprId::DELETE).category(), Category::DeleteMarker);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn constant_spellings_resolve_to_singletons() {
        let mut arena = ExprArena::new();
        let mut stats = NodeStats::new();
        let t = arena.literal(&mut stats, TypeId::BOOL, StringPool::word("true"));
        let n = arena.literal(&mut stats, TypeId::NULLPTR_T, StringPool::word("nullptr"));
        assert_eq!(t, ExprId::TRUE);
        assert_eq!(n, ExprId::NULLPTR);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn literals_are_canonical_per_type() {
        let mut strings = StringPool::new();
        let mut arena = ExprArena::new();
        let mut stats = NodeStats::new();
        let one = strings.intern("1");
        let a = arena.literal(&mut stats, TypeId::INT, one);
        let b = arena.literal(&mut stats, TypeId::INT, one);
        let c = arena.literal(&mut stats, TypeId::LONG, one);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(arena.get(a).ty, Some(TypeId::INT));
    }

    #[test]
    fn other_expressions_are_fresh() {
        let mut arena = ExprArena::new();
        let mut stats = NodeStats::new();
        let a = arena.fresh(&mut stats, ExprKind::Paren(ExprId::TRUE), None);
        let b = arena.fresh(&mut stats, ExprKind::Paren(ExprId::TRUE), None);
        assert_ne!(a, b);
        assert_eq!(arena.get(a).ty, None);
        assert!(arena.get_mut(ExprId::TRUE).is_none());
    }

    #[test]
    fn expression_lists_keep_order() {
        let mut arena = ExprArena::new();
        let list = arena.push_list(&[ExprId::FALSE, ExprId::TRUE]);
        assert_eq!(arena.list(list), &[ExprId::FALSE, ExprId::TRUE]);
    }
}
