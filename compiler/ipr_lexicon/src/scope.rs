//! Scopes and overload sets.
//!
//! A scope maps each name to at most one overload set; an overload set maps
//! each type to exactly one declaration chain. Within one scope, the pair
//! (name, type) therefore identifies a single chain.

use ipr_ir::KeyedStore;

use crate::{ChainId, DeclId, Lexicon, NameId, OverloadId, Region, RegionId, ScopeId, TypeId};

pub(crate) struct ScopeData {
    region: RegionId,
    /// Declarations in the order they were made.
    members: Vec<DeclId>,
    overloads: KeyedStore<NameId, OverloadId>,
}

pub(crate) struct OverloadData {
    name: NameId,
    scope: ScopeId,
    entries: KeyedStore<TypeId, ChainId>,
}

pub(crate) struct ScopeTable {
    scopes: Vec<ScopeData>,
    overloads: Vec<OverloadData>,
}

impl ScopeTable {
    pub(crate) fn new() -> Self {
        ScopeTable {
            scopes: Vec::new(),
            overloads: Vec::new(),
        }
    }

    pub(crate) fn new_scope(&mut self, region: RegionId) -> ScopeId {
        let id = ScopeId::from_index(self.scopes.len());
        self.scopes.push(ScopeData {
            region,
            members: Vec::new(),
            overloads: KeyedStore::new(),
        });
        id
    }

    pub(crate) fn find_chain(&self, scope: ScopeId, name: NameId, ty: TypeId) -> Option<ChainId> {
        let overload = self.scopes[scope.index()].overloads.get(&name)?;
        self.overloads[overload.index()].entries.get(&ty)
    }

    /// Chain for `(name, ty)` in `scope`, creating the overload set and the
    /// chain as needed.
    pub(crate) fn bind(
        &mut self,
        scope: ScopeId,
        name: NameId,
        ty: TypeId,
        new_chain: impl FnOnce() -> ChainId,
    ) -> ChainId {
        let overloads = &mut self.overloads;
        let (overload, _) = self.scopes[scope.index()]
            .overloads
            .get_or_insert_with(&name, || {
                let id = OverloadId::from_index(overloads.len());
                overloads.push(OverloadData {
                    name,
                    scope,
                    entries: KeyedStore::new(),
                });
                id
            });
        let (chain, _) = self.overloads[overload.index()]
            .entries
            .get_or_insert_with(&ty, new_chain);
        chain
    }

    pub(crate) fn push_member(&mut self, scope: ScopeId, decl: DeclId) {
        self.scopes[scope.index()].members.push(decl);
    }
}

/// How a name is bound within one scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BindingState {
    Unbound,
    /// One declaration.
    Declared,
    /// One type, declared more than once.
    Redeclared,
    /// More than one type.
    Overloaded,
}

/// Read-only view of a scope.
#[derive(Copy, Clone)]
pub struct Scope<'a> {
    lex: &'a Lexicon,
    id: ScopeId,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(lex: &'a Lexicon, id: ScopeId) -> Self {
        Scope { lex, id }
    }

    fn data(self) -> &'a ScopeData {
        &self.lex.scopes.scopes[self.id.index()]
    }

    #[inline]
    pub fn id(self) -> ScopeId {
        self.id
    }

    pub fn region(self) -> Region<'a> {
        self.lex.region(self.data().region)
    }

    /// Declarations in the order they were made.
    pub fn members(self) -> &'a [DeclId] {
        &self.data().members
    }

    pub fn len(self) -> usize {
        self.data().members.len()
    }

    pub fn is_empty(self) -> bool {
        self.data().members.is_empty()
    }

    /// Overload set for `name`.
    pub fn lookup(self, name: NameId) -> Option<Overload<'a>> {
        let id = self.data().overloads.get(&name)?;
        Some(Overload { lex: self.lex, id })
    }

    /// Overload sets, ordered by name handle.
    pub fn overloads(self) -> impl Iterator<Item = Overload<'a>> {
        let lex = self.lex;
        self.data()
            .overloads
            .iter()
            .map(move |(_, id)| Overload { lex, id })
    }

    pub fn state(self, name: NameId) -> BindingState {
        let Some(overload) = self.lookup(name) else {
            return BindingState::Unbound;
        };
        let mut chains = overload.entries().map(|(_, chain)| chain.len());
        match (chains.next(), chains.next()) {
            (None, _) => BindingState::Unbound,
            (Some(1), None) => BindingState::Declared,
            (Some(_), None) => BindingState::Redeclared,
            (Some(_), Some(_)) => BindingState::Overloaded,
        }
    }
}

/// Read-only view of an overload set.
#[derive(Copy, Clone)]
pub struct Overload<'a> {
    lex: &'a Lexicon,
    id: OverloadId,
}

impl<'a> Overload<'a> {
    pub(crate) fn new(lex: &'a Lexicon, id: OverloadId) -> Self {
        Overload { lex, id }
    }

    fn data(self) -> &'a OverloadData {
        &self.lex.scopes.overloads[self.id.index()]
    }

    #[inline]
    pub fn id(self) -> OverloadId {
        self.id
    }

    pub fn name(self) -> NameId {
        self.data().name
    }

    pub fn scope(self) -> Scope<'a> {
        Scope::new(self.lex, self.data().scope)
    }

    /// Chain of declarations with type `ty`, master first.
    pub fn lookup(self, ty: TypeId) -> Option<&'a [DeclId]> {
        self.chain_of(ty).map(|chain| self.lex.chain(chain))
    }

    pub fn chain_of(self, ty: TypeId) -> Option<ChainId> {
        self.data().entries.get(&ty)
    }

    /// `(type, chain)` pairs, ordered by type handle.
    pub fn entries(self) -> impl Iterator<Item = (TypeId, &'a [DeclId])> {
        let lex = self.lex;
        self.data()
            .entries
            .iter()
            .map(move |(&ty, chain)| (ty, lex.chain(chain)))
    }

    /// Number of distinct types declared under this name.
    pub fn len(self) -> usize {
        self.data().entries.len()
    }

    pub fn is_empty(self) -> bool {
        self.data().entries.is_empty()
    }
}
