//! Node identity and category tags.
//!
//! Every node of a representation carries a `NodeId` (sequential, unique per
//! representation) and a `Category`. Categories are organized into ranges so
//! the owning group can be recovered with a comparison:
//!
//! - 0-15: Names
//! - 16-47: Types
//! - 48-111: Expressions
//! - 112-143: Statements
//! - 144-175: Declarations
//! - 176-255: Directives

use std::fmt;

crate::define_index! {
    /// Representation-unique node identifier.
    ///
    /// Ids below `FIRST_DYNAMIC` belong to static singletons (fundamental
    /// types, expression constants) shared by every representation.
    pub struct NodeId;
}

impl NodeId {
    /// First id handed out by `NodeStats::record`.
    pub const FIRST_DYNAMIC: u32 = 64;

    #[inline]
    pub const fn is_static(self) -> bool {
        self.raw() < Self::FIRST_DYNAMIC
    }
}

/// Node kind discriminant (u8 = 256 possible kinds).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Category {
    // === Names (0-15) ===
    /// Plain identifier.
    Identifier = 0,
    /// Operator function name.
    Operator = 1,
    /// Literal operator suffix.
    Suffix = 2,
    /// Conversion function name.
    Conversion = 3,
    /// Name spelled by a type.
    TypeName = 4,
    /// Constructor name.
    Constructor = 5,
    /// Destructor name.
    Destructor = 6,
    /// Member name qualified by a scope type.
    QualifiedName = 7,
    /// Template name applied to arguments.
    TemplateId = 8,

    // === Types (16-47) ===
    Builtin = 16,
    Pointer = 17,
    Reference = 18,
    RvalueReference = 19,
    /// cv-qualified type.
    QualifiedType = 20,
    Array = 21,
    FunctionType = 22,
    PointerToMember = 23,
    /// Ordered type list (parameter types).
    Product = 24,
    /// Unordered alternatives (exception specification).
    Sum = 25,
    TemplateType = 26,
    Decltype = 27,
    /// Type referred to only by name.
    NamedType = 28,
    /// User-defined class; never canonical.
    Class = 29,
    Union = 30,
    Enum = 31,
    Namespace = 32,

    // === Expressions (48-111) ===
    Literal = 48,
    Bool = 49,
    Nullptr = 50,
    /// `= default` marker.
    DefaultMarker = 51,
    /// `= delete` marker.
    DeleteMarker = 52,
    IdExpr = 53,
    Unary = 54,
    Binary = 55,
    Call = 56,
    Cast = 57,
    Conditional = 58,
    Member = 59,
    Sizeof = 60,
    Alignof = 61,
    New = 62,
    Delete = 63,
    Paren = 64,
    InitializerList = 65,
    Throw = 66,

    // === Statements (112-143) ===
    ExprStmt = 112,
    Labeled = 113,
    Block = 114,
    If = 115,
    Switch = 116,
    While = 117,
    Do = 118,
    For = 119,
    /// Range-based for.
    ForIn = 120,
    Break = 121,
    Continue = 122,
    Goto = 123,
    Return = 124,
    DeclStmt = 125,

    // === Declarations (144-175) ===
    Var = 144,
    Field = 145,
    Bitfield = 146,
    Parameter = 147,
    Function = 148,
    Alias = 149,
    Enumerator = 150,
    /// Declaration introducing a class, union, enum or namespace.
    Typedecl = 151,
    Template = 152,

    // === Directives (176-255) ===
    UsingDirective = 176,
    UsingDeclaration = 177,
    StaticAssert = 178,
    Asm = 179,
    Pragma = 180,
}

/// Coarse node category: which arena owns the node.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum CategoryGroup {
    Name,
    Type,
    Expr,
    Stmt,
    Decl,
    Directive,
}

impl CategoryGroup {
    pub const COUNT: usize = 6;

    pub const ALL: [CategoryGroup; Self::COUNT] = [
        Self::Name,
        Self::Type,
        Self::Expr,
        Self::Stmt,
        Self::Decl,
        Self::Directive,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Expr => "expr",
            Self::Stmt => "stmt",
            Self::Decl => "decl",
            Self::Directive => "directive",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Category {
    /// Every category, in discriminant order.
    pub const ALL: [Category; 73] = [
        Self::Identifier,
        Self::Operator,
        Self::Suffix,
        Self::Conversion,
        Self::TypeName,
        Self::Constructor,
        Self::Destructor,
        Self::QualifiedName,
        Self::TemplateId,
        Self::Builtin,
        Self::Pointer,
        Self::Reference,
        Self::RvalueReference,
        Self::QualifiedType,
        Self::Array,
        Self::FunctionType,
        Self::PointerToMember,
        Self::Product,
        Self::Sum,
        Self::TemplateType,
        Self::Decltype,
        Self::NamedType,
        Self::Class,
        Self::Union,
        Self::Enum,
        Self::Namespace,
        Self::Literal,
        Self::Bool,
        Self::Nullptr,
        Self::DefaultMarker,
        Self::DeleteMarker,
        Self::IdExpr,
        Self::Unary,
        Self::Binary,
        Self::Call,
        Self::Cast,
        Self::Conditional,
        Self::Member,
        Self::Sizeof,
        Self::Alignof,
        Self::New,
        Self::Delete,
        Self::Paren,
        Self::InitializerList,
        Self::Throw,
        Self::ExprStmt,
        Self::Labeled,
        Self::Block,
        Self::If,
        Self::Switch,
        Self::While,
        Self::Do,
        Self::For,
        Self::ForIn,
        Self::Break,
        Self::Continue,
        Self::Goto,
        Self::Return,
        Self::DeclStmt,
        Self::Var,
        Self::Field,
        Self::Bitfield,
        Self::Parameter,
        Self::Function,
        Self::Alias,
        Self::Enumerator,
        Self::Typedecl,
        Self::Template,
        Self::UsingDirective,
        Self::UsingDeclaration,
        Self::StaticAssert,
        Self::Asm,
        Self::Pragma,
    ];

    /// Arena that owns nodes of this category.
    #[inline]
    pub const fn group(self) -> CategoryGroup {
        match self as u8 {
            0..=15 => CategoryGroup::Name,
            16..=47 => CategoryGroup::Type,
            48..=111 => CategoryGroup::Expr,
            112..=143 => CategoryGroup::Stmt,
            144..=175 => CategoryGroup::Decl,
            _ => CategoryGroup::Directive,
        }
    }

    /// Check if nodes of this category are hash-consed.
    ///
    /// Names, structural types and literals are canonical; user-defined
    /// types and everything below expressions are always fresh.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        match self.group() {
            CategoryGroup::Name => true,
            CategoryGroup::Type => !matches!(
                self,
                Self::Class | Self::Union | Self::Enum | Self::Namespace
            ),
            CategoryGroup::Expr => matches!(self, Self::Literal),
            CategoryGroup::Stmt | CategoryGroup::Decl | CategoryGroup::Directive => false,
        }
    }

    /// Get the name of this category as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Suffix => "suffix",
            Self::Conversion => "conversion",
            Self::TypeName => "type_name",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::QualifiedName => "qualified_name",
            Self::TemplateId => "template_id",
            Self::Builtin => "builtin",
            Self::Pointer => "pointer",
            Self::Reference => "reference",
            Self::RvalueReference => "rvalue_reference",
            Self::QualifiedType => "qualified_type",
            Self::Array => "array",
            Self::FunctionType => "function_type",
            Self::PointerToMember => "pointer_to_member",
            Self::Product => "product",
            Self::Sum => "sum",
            Self::TemplateType => "template_type",
            Self::Decltype => "decltype",
            Self::NamedType => "named_type",
            Self::Class => "class",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Namespace => "namespace",
            Self::Literal => "literal",
            Self::Bool => "bool",
            Self::Nullptr => "nullptr",
            Self::DefaultMarker => "default_marker",
            Self::DeleteMarker => "delete_marker",
            Self::IdExpr => "id_expr",
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::Call => "call",
            Self::Cast => "cast",
            Self::Conditional => "conditional",
            Self::Member => "member",
            Self::Sizeof => "sizeof",
            Self::Alignof => "alignof",
            Self::New => "new",
            Self::Delete => "delete",
            Self::Paren => "paren",
            Self::InitializerList => "initializer_list",
            Self::Throw => "throw",
            Self::ExprStmt => "expr_stmt",
            Self::Labeled => "labeled",
            Self::Block => "block",
            Self::If => "if",
            Self::Switch => "switch",
            Self::While => "while",
            Self::Do => "do",
            Self::For => "for",
            Self::ForIn => "for_in",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Goto => "goto",
            Self::Return => "return",
            Self::DeclStmt => "decl_stmt",
            Self::Var => "var",
            Self::Field => "field",
            Self::Bitfield => "bitfield",
            Self::Parameter => "parameter",
            Self::Function => "function",
            Self::Alias => "alias",
            Self::Enumerator => "enumerator",
            Self::Typedecl => "typedecl",
            Self::Template => "template",
            Self::UsingDirective => "using_directive",
            Self::UsingDeclaration => "using_declaration",
            Self::StaticAssert => "static_assert",
            Self::Asm => "asm",
            Self::Pragma => "pragma",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
