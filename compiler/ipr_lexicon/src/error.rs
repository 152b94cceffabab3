//! Errors raised while building a representation.

use ipr_ir::{Category, InternError};
use thiserror::Error;

use crate::{DeclId, NameId, NodeRef, RegionId, RegionOwner, Specifiers, StmtId, TypeId};

/// Construction error.
///
/// Every check runs before anything is allocated, so a failed call leaves
/// the `Lexicon` unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReprError {
    #[error("qualified type needs at least one qualifier")]
    EmptyQualifiers,
    #[error("conflicting declaration specifiers: {0:?}")]
    ConflictingSpecifiers(Specifiers),
    /// A back-filled field was written twice.
    #[error("{field} of {node:?} is already set")]
    AlreadySet { field: &'static str, node: NodeRef },
    #[error("{category} nodes have no {field}")]
    NoSuchField {
        field: &'static str,
        category: Category,
    },
    #[error("region {region:?} is already owned by {owner:?}")]
    RegionOwned { region: RegionId, owner: RegionOwner },
    /// Redeclaration of `name` with the same type but a different kind.
    #[error("{name:?} redeclared as {new}, previously declared as {existing}")]
    IncompatibleRedeclaration {
        name: NameId,
        existing: Category,
        new: Category,
    },
    #[error("{0:?} is not a template")]
    NotATemplate(DeclId),
    #[error("{0:?} is not a class type")]
    NotAClass(TypeId),
    /// Not a class, union, enum or namespace type.
    #[error("{0:?} is not a user-defined type")]
    NotAUserType(TypeId),
    #[error("{0:?} is not a namespace type")]
    NotANamespace(TypeId),
    #[error("{0:?} is not an enum type")]
    NotAnEnum(TypeId),
    #[error("{0:?} is not a function declaration")]
    NotAFunction(DeclId),
    #[error("{0:?} is not a block statement")]
    NotABlock(StmtId),
    #[error(transparent)]
    Intern(#[from] InternError),
}
