//! The representation root.
//!
//! `Lexicon` owns the string pool, every node arena, the region tree and the
//! scope table. Construction lives in submodules:
//! - `construct`: strings, names, types and expressions
//! - `statements`: statements, directives and regions
//! - `declare`: declarations and their back-filled fields

mod construct;
mod declare;
mod statements;

use ipr_ir::{Category, CategoryGroup, NodeStats, StringLookup, StringPool, Symbol};

use crate::decl::DeclArena;
use crate::expr::ExprArena;
use crate::name::NameArena;
use crate::region::RegionTable;
use crate::scope::ScopeTable;
use crate::stmt::StmtArena;
use crate::types::TypeArena;
use crate::{
    ChainId, DeclId, DeclNode, DirectiveId, DirectiveNode, ExprId, ExprListId, ExprNode,
    LexiconConfig, NameId, NameNode, NodeRef, Overload, OverloadId, Region, RegionId, RegionOwner,
    ReprError, Scope, ScopeId, StmtId, StmtNode, Term, TermListId, TypeId, TypeKind, TypeListId,
    TypeNode,
};

/// One program representation.
///
/// Handles returned by a `Lexicon` are plain indices: they stay valid as long
/// as the `Lexicon` lives and mean nothing to any other `Lexicon`.
pub struct Lexicon {
    config: LexiconConfig,
    pub(crate) strings: StringPool,
    pub(crate) stats: NodeStats,
    pub(crate) names: NameArena,
    pub(crate) types: TypeArena,
    pub(crate) exprs: ExprArena,
    pub(crate) stmts: StmtArena,
    pub(crate) decls: DeclArena,
    pub(crate) directives: Vec<DirectiveNode>,
    pub(crate) regions: RegionTable,
    pub(crate) scopes: ScopeTable,
    global_namespace: TypeId,
}

/// Write a back-filled field, failing if it was already written.
fn fill_once<T>(
    slot: &mut Option<T>,
    value: T,
    field: &'static str,
    node: NodeRef,
) -> Result<(), ReprError> {
    if slot.is_some() {
        return Err(ReprError::AlreadySet { field, node });
    }
    *slot = Some(value);
    Ok(())
}

impl Lexicon {
    pub fn new() -> Self {
        Self::with_config(LexiconConfig::default())
    }

    /// A representation holding only the global region and the global
    /// namespace that owns it.
    pub fn with_config(config: LexiconConfig) -> Self {
        let mut lex = Lexicon {
            strings: StringPool::with_config(&config.arena),
            stats: NodeStats::new(),
            names: NameArena::new(),
            types: TypeArena::new(),
            exprs: ExprArena::new(),
            stmts: StmtArena::new(),
            decls: DeclArena::new(),
            directives: Vec::new(),
            regions: RegionTable::new(),
            scopes: ScopeTable::new(),
            global_namespace: TypeId::VOID,
            config,
        };
        let region = lex.new_region(None);
        debug_assert_eq!(region, RegionId::GLOBAL);
        lex.global_namespace = lex.new_scoped_type(region, |region| TypeKind::Namespace { region });
        lex
    }

    fn new_region(&mut self, parent: Option<RegionId>) -> RegionId {
        let id = self.regions.next_id();
        let scope = self.scopes.new_scope(id);
        self.regions.push(parent, scope)
    }

    /// A fresh user-defined type that owns a new region.
    fn new_scoped_type(
        &mut self,
        region: RegionId,
        kind: impl FnOnce(RegionId) -> TypeKind,
    ) -> TypeId {
        let ty = self.types.fresh(&mut self.stats, kind(region));
        // A region made a moment ago has no owner yet.
        let _ = self.regions.adopt(region, RegionOwner::Type(ty));
        ty
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    // === Node access ===

    /// # Panics
    /// Panics if `id` was not issued by this `Lexicon`. The same holds for
    /// every accessor below.
    pub fn name(&self, id: NameId) -> &NameNode {
        self.names.get(id)
    }

    pub fn ty(&self, id: TypeId) -> &TypeNode {
        self.types.get(id)
    }

    pub fn expr(&self, id: ExprId) -> &ExprNode {
        self.exprs.get(id)
    }

    pub fn stmt(&self, id: StmtId) -> &StmtNode {
        self.stmts.get(id)
    }

    pub fn decl(&self, id: DeclId) -> &DeclNode {
        self.decls.get(id)
    }

    pub fn directive(&self, id: DirectiveId) -> &DirectiveNode {
        &self.directives[id.index()]
    }

    /// Category of any node.
    pub fn category(&self, node: NodeRef) -> Category {
        match node {
            NodeRef::Name(id) => self.name(id).category(),
            NodeRef::Type(id) => self.ty(id).category(),
            NodeRef::Expr(id) => self.expr(id).category(),
            NodeRef::Stmt(id) => self.stmt(id).category(),
            NodeRef::Decl(id) => self.decl(id).category(),
            NodeRef::Directive(id) => self.directive(id).category(),
        }
    }

    // === Sequences ===

    pub fn type_list(&self, id: TypeListId) -> &[TypeId] {
        self.types.list(id)
    }

    pub fn term_list(&self, id: TermListId) -> &[Term] {
        self.names.terms(id)
    }

    pub fn expr_list(&self, id: ExprListId) -> &[ExprId] {
        self.exprs.list(id)
    }

    /// Declarations of one chain, master first.
    pub fn chain(&self, id: ChainId) -> &[DeclId] {
        self.decls.chain(id)
    }

    /// Specializations of a primary template, in declaration order.
    pub fn specializations(&self, primary: DeclId) -> &[DeclId] {
        self.decls.specializations(self.decl(primary).master())
    }

    /// Direct base classes of a class type, in declaration order.
    pub fn bases(&self, class: TypeId) -> &[TypeId] {
        self.types.bases(class)
    }

    // === Regions and scopes ===

    pub fn region(&self, id: RegionId) -> Region<'_> {
        Region::new(self, id)
    }

    pub fn global_region(&self) -> Region<'_> {
        self.region(RegionId::GLOBAL)
    }

    /// The namespace type that owns the global region.
    pub fn global_namespace(&self) -> TypeId {
        self.global_namespace
    }

    pub fn scope(&self, id: ScopeId) -> Scope<'_> {
        Scope::new(self, id)
    }

    pub fn overload(&self, id: OverloadId) -> Overload<'_> {
        Overload::new(self, id)
    }

    // === Strings and bookkeeping ===

    /// Bytes of an interned string.
    pub fn text(&self, symbol: Symbol) -> &[u8] {
        self.strings.lookup(symbol)
    }

    /// Text of an interned string, if it is valid UTF-8.
    pub fn text_str(&self, symbol: Symbol) -> Option<&str> {
        self.strings.lookup_str(symbol)
    }

    pub fn strings(&self) -> &StringPool {
        &self.strings
    }

    pub fn stats(&self) -> &NodeStats {
        &self.stats
    }

    /// Nodes allocated in the arena of `group`. Static singletons are not
    /// counted.
    pub fn arena_len(&self, group: CategoryGroup) -> usize {
        match group {
            CategoryGroup::Name => self.names.len(),
            CategoryGroup::Type => self.types.len(),
            CategoryGroup::Expr => self.exprs.len(),
            CategoryGroup::Stmt => self.stmts.len(),
            CategoryGroup::Decl => self.decls.len(),
            CategoryGroup::Directive => self.directives.len(),
        }
    }

    /// Number of regions, the global one included.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl StringLookup for Lexicon {
    fn lookup(&self, symbol: Symbol) -> &[u8] {
        self.strings.lookup(symbol)
    }
}

#[cfg(test)]
mod tests;
