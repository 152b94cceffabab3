//! Lexical regions.
//!
//! Regions nest: every region but the global one has a parent, and the
//! parent chain of any region reaches `RegionId::GLOBAL` in exactly `depth`
//! steps. Each region owns one scope. Its owner (the type, declaration or
//! block statement that introduces it) is recorded once, right after the
//! region is made.

use crate::{
    DeclId, DirectiveId, Lexicon, NameId, NodeRef, Overload, RegionId, ReprError, Scope, ScopeId,
    StmtId, TypeId,
};

/// Construct that introduces a region.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegionOwner {
    /// Class, union, enum or namespace type.
    Type(TypeId),
    /// Function (parameter region) or template (template parameter region).
    Decl(DeclId),
    /// Block statement.
    Stmt(StmtId),
}

impl From<RegionOwner> for NodeRef {
    fn from(owner: RegionOwner) -> Self {
        match owner {
            RegionOwner::Type(id) => NodeRef::Type(id),
            RegionOwner::Decl(id) => NodeRef::Decl(id),
            RegionOwner::Stmt(id) => NodeRef::Stmt(id),
        }
    }
}

pub(crate) struct RegionData {
    parent: Option<RegionId>,
    owner: Option<RegionOwner>,
    scope: ScopeId,
    depth: u32,
    directives: Vec<DirectiveId>,
}

pub(crate) struct RegionTable {
    regions: Vec<RegionData>,
}

impl RegionTable {
    pub(crate) fn new() -> Self {
        RegionTable {
            regions: Vec::new(),
        }
    }

    /// Id the next pushed region will get.
    pub(crate) fn next_id(&self) -> RegionId {
        RegionId::from_index(self.regions.len())
    }

    pub(crate) fn push(&mut self, parent: Option<RegionId>, scope: ScopeId) -> RegionId {
        let id = self.next_id();
        let depth = parent.map_or(0, |parent| self.regions[parent.index()].depth + 1);
        self.regions.push(RegionData {
            parent,
            owner: None,
            scope,
            depth,
            directives: Vec::new(),
        });
        tracing::debug!(region = ?id, ?parent, depth, "new region");
        id
    }

    pub(crate) fn adopt(&mut self, region: RegionId, owner: RegionOwner) -> Result<(), ReprError> {
        let data = &mut self.regions[region.index()];
        match data.owner {
            Some(existing) => Err(ReprError::RegionOwned {
                region,
                owner: existing,
            }),
            None => {
                data.owner = Some(owner);
                Ok(())
            }
        }
    }

    pub(crate) fn push_directive(&mut self, region: RegionId, directive: DirectiveId) {
        self.regions[region.index()].directives.push(directive);
    }

    pub(crate) fn scope_of(&self, region: RegionId) -> ScopeId {
        self.regions[region.index()].scope
    }

    pub(crate) fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Read-only view of a region.
#[derive(Copy, Clone)]
pub struct Region<'a> {
    lex: &'a Lexicon,
    id: RegionId,
}

impl<'a> Region<'a> {
    pub(crate) fn new(lex: &'a Lexicon, id: RegionId) -> Self {
        Region { lex, id }
    }

    fn data(self) -> &'a RegionData {
        &self.lex.regions.regions[self.id.index()]
    }

    #[inline]
    pub fn id(self) -> RegionId {
        self.id
    }

    /// Parent region; `None` only for the global region.
    pub fn enclosing(self) -> Option<Region<'a>> {
        self.data().parent.map(|parent| Region::new(self.lex, parent))
    }

    pub fn owner(self) -> Option<RegionOwner> {
        self.data().owner
    }

    pub fn scope(self) -> Scope<'a> {
        Scope::new(self.lex, self.data().scope)
    }

    /// Number of enclosing regions.
    pub fn depth(self) -> u32 {
        self.data().depth
    }

    pub fn is_global(self) -> bool {
        self.data().parent.is_none()
    }

    /// Enclosing regions, innermost first, ending with the global region.
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            lex: self.lex,
            next: self.data().parent,
        }
    }

    /// Overload set for `name` in this region or the nearest enclosing
    /// region that declares it.
    pub fn lookup(self, name: NameId) -> Option<Overload<'a>> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find_map(|region| region.scope().lookup(name))
    }

    /// Directives in the order they were made.
    pub fn directives(self) -> &'a [DirectiveId] {
        &self.data().directives
    }
}

/// Iterator over enclosing regions. See [`Region::ancestors`].
pub struct Ancestors<'a> {
    lex: &'a Lexicon,
    next: Option<RegionId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Region<'a>> {
        let region = Region::new(self.lex, self.next?);
        self.next = region.data().parent;
        Some(region)
    }
}
