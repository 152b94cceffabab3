//! Node handles.
//!
//! One `u32` handle type per arena. A handle is only meaningful for the
//! `Lexicon` that issued it.

use ipr_ir::define_index;

define_index! {
    /// Handle to a name node.
    pub struct NameId;
}

define_index! {
    /// Handle to a type node.
    ///
    /// Fundamental types live at fixed indices below `FIRST_DYNAMIC` and are
    /// shared by every `Lexicon`.
    pub struct TypeId;
}

define_index! {
    /// Handle to an expression node.
    pub struct ExprId;
}

define_index! {
    /// Handle to a statement node.
    pub struct StmtId;
}

define_index! {
    /// Handle to a declaration node.
    pub struct DeclId;
}

define_index! {
    /// Handle to a directive node.
    pub struct DirectiveId;
}

define_index! {
    /// Handle to a lexical region.
    pub struct RegionId;
}

define_index! {
    /// Handle to a scope (the declarations of one region).
    pub struct ScopeId;
}

define_index! {
    /// Handle to an overload set (one name within one scope).
    pub struct OverloadId;
}

define_index! {
    /// Handle to a declaration chain (one name and type within one scope).
    pub struct ChainId;
}

define_index! {
    /// Handle to a canonical list of types.
    pub struct TypeListId;
}

define_index! {
    /// Handle to a canonical list of template arguments.
    pub struct TermListId;
}

define_index! {
    /// Handle to an expression list (call arguments, initializers).
    pub struct ExprListId;
}

impl TypeId {
    pub const VOID: TypeId = TypeId::from_raw(0);
    pub const BOOL: TypeId = TypeId::from_raw(1);
    pub const CHAR: TypeId = TypeId::from_raw(2);
    pub const SIGNED_CHAR: TypeId = TypeId::from_raw(3);
    pub const UNSIGNED_CHAR: TypeId = TypeId::from_raw(4);
    pub const WCHAR: TypeId = TypeId::from_raw(5);
    pub const CHAR8: TypeId = TypeId::from_raw(6);
    pub const CHAR16: TypeId = TypeId::from_raw(7);
    pub const CHAR32: TypeId = TypeId::from_raw(8);
    pub const SHORT: TypeId = TypeId::from_raw(9);
    pub const UNSIGNED_SHORT: TypeId = TypeId::from_raw(10);
    pub const INT: TypeId = TypeId::from_raw(11);
    pub const UNSIGNED_INT: TypeId = TypeId::from_raw(12);
    pub const LONG: TypeId = TypeId::from_raw(13);
    pub const UNSIGNED_LONG: TypeId = TypeId::from_raw(14);
    pub const LONG_LONG: TypeId = TypeId::from_raw(15);
    pub const UNSIGNED_LONG_LONG: TypeId = TypeId::from_raw(16);
    pub const FLOAT: TypeId = TypeId::from_raw(17);
    pub const DOUBLE: TypeId = TypeId::from_raw(18);
    pub const LONG_DOUBLE: TypeId = TypeId::from_raw(19);
    pub const NULLPTR_T: TypeId = TypeId::from_raw(20);
    pub const AUTO: TypeId = TypeId::from_raw(21);
    /// The `...` pseudo-type of variadic parameter lists.
    pub const ELLIPSIS: TypeId = TypeId::from_raw(22);
    /// The type of type template parameters.
    pub const TYPENAME: TypeId = TypeId::from_raw(23);

    /// Number of fundamental types.
    pub const BUILTIN_COUNT: u32 = 24;
    /// First index handed out by the type arena.
    pub const FIRST_DYNAMIC: u32 = 32;

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.raw() < Self::BUILTIN_COUNT
    }
}

impl ExprId {
    pub const TRUE: ExprId = ExprId::from_raw(0);
    pub const FALSE: ExprId = ExprId::from_raw(1);
    pub const NULLPTR: ExprId = ExprId::from_raw(2);
    /// The `= default` marker.
    pub const DEFAULT: ExprId = ExprId::from_raw(3);
    /// The `= delete` marker.
    pub const DELETE: ExprId = ExprId::from_raw(4);

    pub const SINGLETON_COUNT: u32 = 5;
    /// First index handed out by the expression arena.
    pub const FIRST_DYNAMIC: u32 = 8;

    #[inline]
    pub const fn is_singleton(self) -> bool {
        self.raw() < Self::SINGLETON_COUNT
    }
}

impl RegionId {
    /// The outermost region, owned by the global namespace.
    pub const GLOBAL: RegionId = RegionId::from_raw(0);
}
