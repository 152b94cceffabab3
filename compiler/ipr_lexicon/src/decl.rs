//! Declaration nodes.
//!
//! A declaration belongs to exactly one chain: all declarations of the same
//! name with the same type in the same scope, in source order. The first
//! element (the master) is the canonical declaration.

use ipr_ir::{Category, NodeId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{ChainId, DeclId, ExprId, NameId, RegionId, Specifiers, StmtId, TermListId, TypeId};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeclKind {
    Var {
        initializer: Option<ExprId>,
    },
    Field {
        initializer: Option<ExprId>,
    },
    Bitfield {
        width: ExprId,
        initializer: Option<ExprId>,
    },
    Parameter {
        position: u32,
        default: Option<ExprId>,
    },
    /// `parameters` is the region holding the parameter declarations.
    Function {
        parameters: RegionId,
        body: Option<StmtId>,
    },
    /// `using name = aliasee;` / `typedef aliasee name;`
    Alias {
        aliasee: Option<TypeId>,
    },
    Enumerator {
        value: Option<ExprId>,
    },
    /// Declares a class, union, enum or namespace; `definition` is the
    /// user-defined type once the body is seen.
    Typedecl {
        definition: Option<TypeId>,
    },
    /// `primary` is the master of the primary template's chain (itself, for
    /// a primary template); `args` is set for specializations only.
    Template {
        parameters: RegionId,
        pattern: Option<DeclId>,
        primary: DeclId,
        args: Option<TermListId>,
    },
}

impl DeclKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Var { .. } => Category::Var,
            Self::Field { .. } => Category::Field,
            Self::Bitfield { .. } => Category::Bitfield,
            Self::Parameter { .. } => Category::Parameter,
            Self::Function { .. } => Category::Function,
            Self::Alias { .. } => Category::Alias,
            Self::Enumerator { .. } => Category::Enumerator,
            Self::Typedecl { .. } => Category::Typedecl,
            Self::Template { .. } => Category::Template,
        }
    }

    /// Initializer-like field: initializer, default argument or enumerator value.
    pub const fn initializer(&self) -> Option<ExprId> {
        match *self {
            Self::Var { initializer }
            | Self::Field { initializer }
            | Self::Bitfield { initializer, .. } => initializer,
            Self::Parameter { default, .. } => default,
            Self::Enumerator { value } => value,
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclNode {
    pub(crate) id: NodeId,
    pub(crate) name: NameId,
    pub(crate) ty: TypeId,
    pub(crate) home: RegionId,
    pub(crate) specifiers: Specifiers,
    pub(crate) chain: ChainId,
    pub(crate) position: u32,
    pub(crate) master: DeclId,
    pub(crate) kind: DeclKind,
}

impl DeclNode {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> NameId {
        self.name
    }

    #[inline]
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    /// Region the declaration was made in.
    #[inline]
    pub fn home(&self) -> RegionId {
        self.home
    }

    #[inline]
    pub fn specifiers(&self) -> Specifiers {
        self.specifiers
    }

    #[inline]
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Index of this declaration in its chain; 0 for the master.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// First declaration of the chain.
    #[inline]
    pub fn master(&self) -> DeclId {
        self.master
    }

    #[inline]
    pub fn is_master(&self) -> bool {
        self.position == 0
    }

    #[inline]
    pub fn kind(&self) -> &DeclKind {
        &self.kind
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

pub(crate) struct DeclArena {
    nodes: Vec<DeclNode>,
    chains: Vec<SmallVec<[DeclId; 2]>>,
    specializations: FxHashMap<DeclId, SmallVec<[DeclId; 4]>>,
}

impl DeclArena {
    pub(crate) fn new() -> Self {
        DeclArena {
            nodes: Vec::new(),
            chains: Vec::new(),
            specializations: FxHashMap::default(),
        }
    }

    pub(crate) fn get(&self, id: DeclId) -> &DeclNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: DeclId) -> &mut DeclNode {
        &mut self.nodes[id.index()]
    }

    /// Id the next pushed declaration will get.
    pub(crate) fn next_id(&self) -> DeclId {
        DeclId::from_index(self.nodes.len())
    }

    pub(crate) fn push(&mut self, node: DeclNode) -> DeclId {
        let id = self.next_id();
        self.nodes.push(node);
        id
    }

    pub(crate) fn new_chain(&mut self) -> ChainId {
        let id = ChainId::from_index(self.chains.len());
        self.chains.push(SmallVec::new());
        id
    }

    /// Append `decl` to `chain`, returning its position.
    pub(crate) fn extend_chain(&mut self, chain: ChainId, decl: DeclId) -> u32 {
        let members = &mut self.chains[chain.index()];
        members.push(decl);
        ipr_ir::to_u32(members.len() - 1, "declaration chain")
    }

    pub(crate) fn chain(&self, chain: ChainId) -> &[DeclId] {
        &self.chains[chain.index()]
    }

    pub(crate) fn add_specialization(&mut self, primary: DeclId, specialization: DeclId) {
        self.specializations
            .entry(primary)
            .or_default()
            .push(specialization);
    }

    pub(crate) fn specializations(&self, primary: DeclId) -> &[DeclId] {
        self.specializations
            .get(&primary)
            .map_or(&[][..], |specs| specs.as_slice())
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
