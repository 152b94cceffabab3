//! Directive nodes: using-directives, using-declarations, static
//! assertions, inline assembly and pragmas.

use ipr_ir::{Category, NodeId, Symbol};

use crate::{ExprId, NameId, RegionId, TypeId};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DirectiveKind {
    /// `using namespace N;`
    UsingDirective { nominated: TypeId },
    /// `using N::x;`
    UsingDeclaration { name: NameId },
    StaticAssert {
        condition: ExprId,
        message: Option<Symbol>,
    },
    Asm(Symbol),
    Pragma(Symbol),
}

impl DirectiveKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::UsingDirective { .. } => Category::UsingDirective,
            Self::UsingDeclaration { .. } => Category::UsingDeclaration,
            Self::StaticAssert { .. } => Category::StaticAssert,
            Self::Asm(_) => Category::Asm,
            Self::Pragma(_) => Category::Pragma,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DirectiveNode {
    pub id: NodeId,
    /// Region the directive appears in.
    pub region: RegionId,
    pub kind: DirectiveKind,
}

impl DirectiveNode {
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}
