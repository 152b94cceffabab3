//! Name nodes. Every name is canonical.

use ipr_ir::{Category, CategoryGroup, KeyedStore, NodeId, NodeStats, SequenceStore, Slot, Symbol};

use crate::{NameId, Term, TermListId, TypeId};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NameKind {
    Identifier(Symbol),
    /// Operator function name, e.g. `operator+`; holds the operator text.
    Operator(Symbol),
    /// Literal operator suffix, e.g. `operator""_km`.
    Suffix(Symbol),
    /// Conversion function name, e.g. `operator int`.
    Conversion(TypeId),
    /// A type used as a name.
    TypeName(TypeId),
    Constructor(TypeId),
    Destructor(TypeId),
    /// `scope::member`.
    Qualified {
        scope: TypeId,
        member: NameId,
    },
    /// `template<args>`.
    TemplateId {
        template: NameId,
        args: TermListId,
    },
}

impl NameKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Identifier(_) => Category::Identifier,
            Self::Operator(_) => Category::Operator,
            Self::Suffix(_) => Category::Suffix,
            Self::Conversion(_) => Category::Conversion,
            Self::TypeName(_) => Category::TypeName,
            Self::Constructor(_) => Category::Constructor,
            Self::Destructor(_) => Category::Destructor,
            Self::Qualified { .. } => Category::QualifiedName,
            Self::TemplateId { .. } => Category::TemplateId,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NameNode {
    pub id: NodeId,
    pub kind: NameKind,
}

impl NameNode {
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

pub(crate) struct NameArena {
    nodes: Vec<NameNode>,
    canonical: KeyedStore<NameKind, NameId>,
    terms: SequenceStore<Term>,
}

impl NameArena {
    pub(crate) fn new() -> Self {
        NameArena {
            nodes: Vec::new(),
            canonical: KeyedStore::new(),
            terms: SequenceStore::new(),
        }
    }

    pub(crate) fn get(&self, id: NameId) -> &NameNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn canonical(&mut self, stats: &mut NodeStats, kind: NameKind) -> NameId {
        let nodes = &mut self.nodes;
        let (id, fresh) = self.canonical.get_or_insert_with(&kind, || {
            let id = NameId::from_index(nodes.len());
            nodes.push(NameNode {
                id: stats.record(kind.category()),
                kind,
            });
            id
        });
        stats.record_lookup(CategoryGroup::Name, fresh);
        if fresh {
            tracing::trace!(?id, ?kind, "new name");
        }
        id
    }

    pub(crate) fn intern_terms(&mut self, terms: &[Term]) -> TermListId {
        let (slot, _) = self.terms.intern(terms);
        TermListId::from_raw(slot.raw())
    }

    /// Existing template-id naming `template<args>`. Never allocates.
    pub(crate) fn find_template_id(&self, template: NameId, args: &[Term]) -> Option<NameId> {
        let args = TermListId::from_raw(self.terms.find(args)?.raw());
        self.canonical.get(&NameKind::TemplateId { template, args })
    }

    pub(crate) fn terms(&self, id: TermListId) -> &[Term] {
        self.terms.get(Slot::from_raw(id.raw()))
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
