//! Type nodes.
//!
//! Fundamental types are static and shared by every `Lexicon`. Structural
//! types (pointers, functions, qualified types, ...) are hash-consed on their
//! `TypeKind`. User-defined class, union, enum and namespace types are
//! always fresh: two classes with the same members are still different
//! types.

use ipr_ir::{Category, CategoryGroup, KeyedStore, NodeId, NodeStats, SequenceStore, Slot};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{ExprId, NameId, Qualifiers, RegionId, TypeId, TypeListId};

/// Fundamental (built-in) types, in `TypeId` order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Fundamental {
    Void,
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Wchar,
    Char8,
    Char16,
    Char32,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    NullptrT,
    Auto,
    Ellipsis,
    Typename,
}

impl Fundamental {
    pub const ALL: [Fundamental; TypeId::BUILTIN_COUNT as usize] = [
        Self::Void,
        Self::Bool,
        Self::Char,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::Wchar,
        Self::Char8,
        Self::Char16,
        Self::Char32,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::NullptrT,
        Self::Auto,
        Self::Ellipsis,
        Self::Typename,
    ];

    /// Source spelling.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::Wchar => "wchar_t",
            Self::Char8 => "char8_t",
            Self::Char16 => "char16_t",
            Self::Char32 => "char32_t",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::NullptrT => "decltype(nullptr)",
            Self::Auto => "auto",
            Self::Ellipsis => "...",
            Self::Typename => "typename",
        }
    }

    #[inline]
    pub const fn type_id(self) -> TypeId {
        TypeId::from_raw(self as u32)
    }
}

/// Language linkage of a function type.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Linkage {
    #[default]
    Cxx,
    C,
}

/// Structure of a type. Canonical kinds are their own hash-consing key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TypeKind {
    Builtin(Fundamental),
    Pointer(TypeId),
    Reference(TypeId),
    RvalueReference(TypeId),
    /// `main` is never itself a qualified type.
    Qualified {
        qualifiers: Qualifiers,
        main: TypeId,
    },
    Array {
        element: TypeId,
        bound: Option<ExprId>,
    },
    /// `source` is a product type, `throws` a sum type (empty for `noexcept`).
    Function {
        source: TypeId,
        target: TypeId,
        throws: TypeId,
        linkage: Linkage,
    },
    PointerToMember {
        class: TypeId,
        member: TypeId,
    },
    Product(TypeListId),
    Sum(TypeListId),
    /// Type of a template: parameter product to the templated entity's type.
    Template {
        source: TypeId,
        target: TypeId,
    },
    Decltype(ExprId),
    Named(NameId),
    Class {
        region: RegionId,
    },
    Union {
        region: RegionId,
    },
    /// `underlying` is back-filled at most once.
    Enum {
        region: RegionId,
        underlying: Option<TypeId>,
    },
    Namespace {
        region: RegionId,
    },
}

impl TypeKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::Builtin(_) => Category::Builtin,
            Self::Pointer(_) => Category::Pointer,
            Self::Reference(_) => Category::Reference,
            Self::RvalueReference(_) => Category::RvalueReference,
            Self::Qualified { .. } => Category::QualifiedType,
            Self::Array { .. } => Category::Array,
            Self::Function { .. } => Category::FunctionType,
            Self::PointerToMember { .. } => Category::PointerToMember,
            Self::Product(_) => Category::Product,
            Self::Sum(_) => Category::Sum,
            Self::Template { .. } => Category::TemplateType,
            Self::Decltype(_) => Category::Decltype,
            Self::Named(_) => Category::NamedType,
            Self::Class { .. } => Category::Class,
            Self::Union { .. } => Category::Union,
            Self::Enum { .. } => Category::Enum,
            Self::Namespace { .. } => Category::Namespace,
        }
    }

    /// Region owned by a user-defined type.
    pub const fn region(&self) -> Option<RegionId> {
        match self {
            Self::Class { region }
            | Self::Union { region }
            | Self::Enum { region, .. }
            | Self::Namespace { region } => Some(*region),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TypeNode {
    pub id: NodeId,
    pub kind: TypeKind,
}

impl TypeNode {
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

#[expect(clippy::cast_possible_truncation, reason = "index is below BUILTIN_COUNT")]
const fn builtin_table() -> [TypeNode; TypeId::BUILTIN_COUNT as usize] {
    let mut table = [TypeNode {
        id: NodeId::from_raw(0),
        kind: TypeKind::Builtin(Fundamental::Void),
    }; TypeId::BUILTIN_COUNT as usize];
    let mut i = 0;
    while i < table.len() {
        table[i] = TypeNode {
            id: NodeId::from_raw(i as u32),
            kind: TypeKind::Builtin(Fundamental::ALL[i]),
        };
        i += 1;
    }
    table
}

/// Fundamental type nodes, indexed by `TypeId`.
static BUILTIN_TYPES: [TypeNode; TypeId::BUILTIN_COUNT as usize] = builtin_table();

/// Type storage for one `Lexicon`.
pub(crate) struct TypeArena {
    nodes: Vec<TypeNode>,
    canonical: KeyedStore<TypeKind, TypeId>,
    lists: SequenceStore<TypeId>,
    bases: FxHashMap<TypeId, SmallVec<[TypeId; 2]>>,
}

impl TypeArena {
    pub(crate) fn new() -> Self {
        TypeArena {
            nodes: Vec::new(),
            canonical: KeyedStore::new(),
            lists: SequenceStore::new(),
            bases: FxHashMap::default(),
        }
    }

    /// # Panics
    /// Panics if `id` was not issued by this arena.
    pub(crate) fn get(&self, id: TypeId) -> &TypeNode {
        if id.is_builtin() {
            return &BUILTIN_TYPES[id.index()];
        }
        match id.index().checked_sub(TypeId::FIRST_DYNAMIC as usize) {
            Some(index) => &self.nodes[index],
            None => panic!("{id:?} is in the reserved type range"),
        }
    }

    /// Mutable access for back-filling. Fundamental types are immutable.
    pub(crate) fn get_mut(&mut self, id: TypeId) -> Option<&mut TypeNode> {
        let index = id.index().checked_sub(TypeId::FIRST_DYNAMIC as usize)?;
        self.nodes.get_mut(index)
    }

    fn push(nodes: &mut Vec<TypeNode>, stats: &mut NodeStats, kind: TypeKind) -> TypeId {
        let id = TypeId::from_index(nodes.len() + TypeId::FIRST_DYNAMIC as usize);
        nodes.push(TypeNode {
            id: stats.record(kind.category()),
            kind,
        });
        id
    }

    /// The unique type with structure `kind`.
    pub(crate) fn canonical(&mut self, stats: &mut NodeStats, kind: TypeKind) -> TypeId {
        debug_assert!(kind.category().is_canonical());
        if let TypeKind::Builtin(fundamental) = kind {
            return fundamental.type_id();
        }
        let nodes = &mut self.nodes;
        let (id, fresh) = self
            .canonical
            .get_or_insert_with(&kind, || Self::push(nodes, stats, kind));
        stats.record_lookup(CategoryGroup::Type, fresh);
        if fresh {
            tracing::trace!(?id, ?kind, "new canonical type");
        }
        id
    }

    /// A new type that is never shared.
    pub(crate) fn fresh(&mut self, stats: &mut NodeStats, kind: TypeKind) -> TypeId {
        let id = Self::push(&mut self.nodes, stats, kind);
        tracing::trace!(?id, ?kind, "new type");
        id
    }

    pub(crate) fn intern_list(&mut self, types: &[TypeId]) -> TypeListId {
        let (slot, _) = self.lists.intern(types);
        TypeListId::from_raw(slot.raw())
    }

    pub(crate) fn list(&self, id: TypeListId) -> &[TypeId] {
        self.lists.get(Slot::from_raw(id.raw()))
    }

    pub(crate) fn add_base(&mut self, class: TypeId, base: TypeId) {
        self.bases.entry(class).or_default().push(base);
    }

    pub(crate) fn bases(&self, class: TypeId) -> &[TypeId] {
        self.bases.get(&class).map_or(&[][..], |bases| bases.as_slice())
    }

    /// Number of arena-allocated types.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
