//! Statement nodes. Statements are never shared.

use ipr_ir::{Category, NodeId, NodeStats};

use crate::{DeclId, ExprId, NameId, RegionId, StmtId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StmtKind {
    Expr(ExprId),
    Labeled {
        label: NameId,
        stmt: StmtId,
    },
    /// Compound statement; `body` grows through `Lexicon::append_to_block`.
    Block {
        region: RegionId,
        body: Vec<StmtId>,
    },
    If {
        condition: ExprId,
        then: StmtId,
        otherwise: Option<StmtId>,
    },
    Switch {
        condition: ExprId,
        body: StmtId,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    Do {
        body: StmtId,
        condition: ExprId,
    },
    For {
        init: Option<StmtId>,
        condition: Option<ExprId>,
        increment: Option<ExprId>,
        body: StmtId,
    },
    /// Range-based for.
    ForIn {
        variable: DeclId,
        sequence: ExprId,
        body: StmtId,
    },
    Break,
    Continue,
    Goto(NameId),
    Return(Option<ExprId>),
    Decl(DeclId),
}

impl StmtKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Expr(_) => Category::ExprStmt,
            Self::Labeled { .. } => Category::Labeled,
            Self::Block { .. } => Category::Block,
            Self::If { .. } => Category::If,
            Self::Switch { .. } => Category::Switch,
            Self::While { .. } => Category::While,
            Self::Do { .. } => Category::Do,
            Self::For { .. } => Category::For,
            Self::ForIn { .. } => Category::ForIn,
            Self::Break => Category::Break,
            Self::Continue => Category::Continue,
            Self::Goto(_) => Category::Goto,
            Self::Return(_) => Category::Return,
            Self::Decl(_) => Category::DeclStmt,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StmtNode {
    pub id: NodeId,
    pub kind: StmtKind,
}

impl StmtNode {
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

pub(crate) struct StmtArena {
    nodes: Vec<StmtNode>,
}

impl StmtArena {
    pub(crate) fn new() -> Self {
        StmtArena { nodes: Vec::new() }
    }

    pub(crate) fn get(&self, id: StmtId) -> &StmtNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: StmtId) -> &mut StmtNode {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn push(&mut self, stats: &mut NodeStats, kind: StmtKind) -> StmtId {
        let id = StmtId::from_index(self.nodes.len());
        tracing::trace!(?id, category = %kind.category(), "new statement");
        self.nodes.push(StmtNode {
            id: stats.record(kind.category()),
            kind,
        });
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
