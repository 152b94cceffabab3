//! Factories for statements, directives and regions.

use ipr_ir::Symbol;

use crate::{
    DeclId, DirectiveId, DirectiveKind, DirectiveNode, ExprId, Lexicon, NameId, RegionId,
    RegionOwner, ReprError, StmtId, StmtKind, TypeId, TypeKind,
};

impl Lexicon {
    // === Regions ===

    /// A new region nested in `parent`. Its owner is set separately with
    /// [`Lexicon::set_region_owner`].
    pub fn make_subregion(&mut self, parent: RegionId) -> RegionId {
        self.new_region(Some(parent))
    }

    /// Record the construct that introduces `region`. Allowed once.
    pub fn set_region_owner(
        &mut self,
        region: RegionId,
        owner: RegionOwner,
    ) -> Result<(), ReprError> {
        self.regions.adopt(region, owner)
    }

    // === Statements ===

    fn stmt_of(&mut self, kind: StmtKind) -> StmtId {
        self.stmts.push(&mut self.stats, kind)
    }

    pub fn make_expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt_of(StmtKind::Expr(expr))
    }

    pub fn make_labeled(&mut self, label: NameId, stmt: StmtId) -> StmtId {
        self.stmt_of(StmtKind::Labeled { label, stmt })
    }

    /// An empty block whose region is nested in `parent` and owned by the
    /// block.
    pub fn make_block(&mut self, parent: RegionId) -> StmtId {
        let region = self.new_region(Some(parent));
        let block = self.stmt_of(StmtKind::Block {
            region,
            body: Vec::new(),
        });
        // A region made a moment ago has no owner yet.
        let _ = self.regions.adopt(region, RegionOwner::Stmt(block));
        block
    }

    /// Append `stmt` to the body of `block`.
    pub fn append_to_block(&mut self, block: StmtId, stmt: StmtId) -> Result<(), ReprError> {
        match &mut self.stmts.get_mut(block).kind {
            StmtKind::Block { body, .. } => {
                body.push(stmt);
                Ok(())
            }
            _ => Err(ReprError::NotABlock(block)),
        }
    }

    /// Region of a block statement.
    pub fn block_region(&self, block: StmtId) -> Result<RegionId, ReprError> {
        match self.stmt(block).kind {
            StmtKind::Block { region, .. } => Ok(region),
            _ => Err(ReprError::NotABlock(block)),
        }
    }

    pub fn make_if(
        &mut self,
        condition: ExprId,
        then: StmtId,
        otherwise: Option<StmtId>,
    ) -> StmtId {
        self.stmt_of(StmtKind::If {
            condition,
            then,
            otherwise,
        })
    }

    pub fn make_switch(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        self.stmt_of(StmtKind::Switch { condition, body })
    }

    pub fn make_while(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        self.stmt_of(StmtKind::While { condition, body })
    }

    pub fn make_do(&mut self, body: StmtId, condition: ExprId) -> StmtId {
        self.stmt_of(StmtKind::Do { body, condition })
    }

    pub fn make_for(
        &mut self,
        init: Option<StmtId>,
        condition: Option<ExprId>,
        increment: Option<ExprId>,
        body: StmtId,
    ) -> StmtId {
        self.stmt_of(StmtKind::For {
            init,
            condition,
            increment,
            body,
        })
    }

    /// Range-based for over `sequence`, binding `variable`.
    pub fn make_for_in(&mut self, variable: DeclId, sequence: ExprId, body: StmtId) -> StmtId {
        self.stmt_of(StmtKind::ForIn {
            variable,
            sequence,
            body,
        })
    }

    pub fn make_break(&mut self) -> StmtId {
        self.stmt_of(StmtKind::Break)
    }

    pub fn make_continue(&mut self) -> StmtId {
        self.stmt_of(StmtKind::Continue)
    }

    pub fn make_goto(&mut self, label: NameId) -> StmtId {
        self.stmt_of(StmtKind::Goto(label))
    }

    pub fn make_return(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt_of(StmtKind::Return(value))
    }

    pub fn make_decl_stmt(&mut self, decl: DeclId) -> StmtId {
        self.stmt_of(StmtKind::Decl(decl))
    }

    // === Directives ===

    fn directive_of(&mut self, region: RegionId, kind: DirectiveKind) -> DirectiveId {
        let id = DirectiveId::from_index(self.directives.len());
        self.directives.push(DirectiveNode {
            id: self.stats.record(kind.category()),
            region,
            kind,
        });
        self.regions.push_directive(region, id);
        tracing::trace!(?id, ?region, category = %kind.category(), "new directive");
        id
    }

    /// `using namespace nominated;` in `region`.
    pub fn make_using_directive(
        &mut self,
        region: RegionId,
        nominated: TypeId,
    ) -> Result<DirectiveId, ReprError> {
        if !matches!(self.ty(nominated).kind, TypeKind::Namespace { .. }) {
            return Err(ReprError::NotANamespace(nominated));
        }
        Ok(self.directive_of(region, DirectiveKind::UsingDirective { nominated }))
    }

    pub fn make_using_declaration(&mut self, region: RegionId, name: NameId) -> DirectiveId {
        self.directive_of(region, DirectiveKind::UsingDeclaration { name })
    }

    pub fn make_static_assert(
        &mut self,
        region: RegionId,
        condition: ExprId,
        message: Option<Symbol>,
    ) -> DirectiveId {
        self.directive_of(region, DirectiveKind::StaticAssert { condition, message })
    }

    pub fn make_asm(&mut self, region: RegionId, text: Symbol) -> DirectiveId {
        self.directive_of(region, DirectiveKind::Asm(text))
    }

    pub fn make_pragma(&mut self, region: RegionId, text: Symbol) -> DirectiveId {
        self.directive_of(region, DirectiveKind::Pragma(text))
    }
}
