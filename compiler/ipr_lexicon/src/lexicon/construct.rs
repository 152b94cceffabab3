//! Factories for strings, names, types and expressions.
//!
//! Canonical factories (`get_*`) return the existing node when one with the
//! same structure exists. `make_*` factories always allocate.

use ipr_ir::Symbol;

use super::fill_once;
use crate::{
    BinaryOp, CastKind, DeclId, ExprId, ExprKind, Lexicon, Linkage, NameId, NameKind, NodeRef,
    Qualifiers, RegionId, ReprError, Term, TypeId, TypeKind, UnaryOp,
};

impl Lexicon {
    // === Strings ===

    /// Intern `text`.
    ///
    /// # Panics
    /// Panics if the string arena cannot allocate. Use `try_get_string` for
    /// fallible interning.
    pub fn get_string(&mut self, text: &str) -> Symbol {
        self.strings.intern(text)
    }

    /// Intern raw source bytes.
    pub fn try_get_string(&mut self, bytes: &[u8]) -> Result<Symbol, ReprError> {
        Ok(self.strings.try_intern_bytes(bytes)?)
    }

    // === Names ===

    fn name_of(&mut self, kind: NameKind) -> NameId {
        self.names.canonical(&mut self.stats, kind)
    }

    pub fn get_identifier(&mut self, text: Symbol) -> NameId {
        self.name_of(NameKind::Identifier(text))
    }

    /// `operator` followed by `op`, e.g. `+` or `()`.
    pub fn get_operator(&mut self, op: Symbol) -> NameId {
        self.name_of(NameKind::Operator(op))
    }

    /// Literal operator name; `suffix` is the ud-suffix, e.g. `_km`.
    pub fn get_suffix(&mut self, suffix: Symbol) -> NameId {
        self.name_of(NameKind::Suffix(suffix))
    }

    pub fn get_conversion(&mut self, target: TypeId) -> NameId {
        self.name_of(NameKind::Conversion(target))
    }

    pub fn get_type_name(&mut self, ty: TypeId) -> NameId {
        self.name_of(NameKind::TypeName(ty))
    }

    pub fn get_constructor_name(&mut self, class: TypeId) -> NameId {
        self.name_of(NameKind::Constructor(class))
    }

    pub fn get_destructor_name(&mut self, class: TypeId) -> NameId {
        self.name_of(NameKind::Destructor(class))
    }

    pub fn get_qualified_name(&mut self, scope: TypeId, member: NameId) -> NameId {
        self.name_of(NameKind::Qualified { scope, member })
    }

    pub fn get_template_id(&mut self, template: NameId, args: &[Term]) -> NameId {
        let args = self.names.intern_terms(args);
        self.name_of(NameKind::TemplateId { template, args })
    }

    // === Canonical types ===

    fn type_of(&mut self, kind: TypeKind) -> TypeId {
        self.types.canonical(&mut self.stats, kind)
    }

    pub fn get_pointer(&mut self, pointee: TypeId) -> TypeId {
        self.type_of(TypeKind::Pointer(pointee))
    }

    pub fn get_reference(&mut self, referee: TypeId) -> TypeId {
        self.type_of(TypeKind::Reference(referee))
    }

    pub fn get_rvalue_reference(&mut self, referee: TypeId) -> TypeId {
        self.type_of(TypeKind::RvalueReference(referee))
    }

    /// `qualifiers main`. Qualifying a qualified type merges the qualifiers,
    /// so `const (volatile T)` and `volatile (const T)` are the same type.
    pub fn get_qualified(
        &mut self,
        qualifiers: Qualifiers,
        main: TypeId,
    ) -> Result<TypeId, ReprError> {
        if qualifiers.is_empty() {
            return Err(ReprError::EmptyQualifiers);
        }
        let (qualifiers, main) = match self.ty(main).kind {
            TypeKind::Qualified {
                qualifiers: inner,
                main,
            } => (qualifiers | inner, main),
            _ => (qualifiers, main),
        };
        Ok(self.type_of(TypeKind::Qualified { qualifiers, main }))
    }

    /// Array of `element`; `bound` is `None` for `T[]`.
    pub fn get_array(&mut self, element: TypeId, bound: Option<ExprId>) -> TypeId {
        self.type_of(TypeKind::Array { element, bound })
    }

    /// Function type from a parameter product to `target`. `throws` is a
    /// sum type; the empty sum means `noexcept`.
    pub fn get_function(
        &mut self,
        source: TypeId,
        target: TypeId,
        throws: TypeId,
        linkage: Linkage,
    ) -> TypeId {
        self.type_of(TypeKind::Function {
            source,
            target,
            throws,
            linkage,
        })
    }

    pub fn get_pointer_to_member(&mut self, class: TypeId, member: TypeId) -> TypeId {
        self.type_of(TypeKind::PointerToMember { class, member })
    }

    /// Ordered list of types, e.g. a parameter list.
    pub fn get_product(&mut self, types: &[TypeId]) -> TypeId {
        let list = self.types.intern_list(types);
        self.type_of(TypeKind::Product(list))
    }

    /// Set of alternatives; element order does not matter.
    pub fn get_sum(&mut self, types: &[TypeId]) -> TypeId {
        let mut sorted = types.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let list = self.types.intern_list(&sorted);
        self.type_of(TypeKind::Sum(list))
    }

    pub fn get_template_type(&mut self, source: TypeId, target: TypeId) -> TypeId {
        self.type_of(TypeKind::Template { source, target })
    }

    pub fn get_decltype(&mut self, expr: ExprId) -> TypeId {
        self.type_of(TypeKind::Decltype(expr))
    }

    /// Type known only by name, e.g. a dependent type.
    pub fn get_named_type(&mut self, name: NameId) -> TypeId {
        self.type_of(TypeKind::Named(name))
    }

    // === User-defined types ===

    /// A new class type whose member region is nested in `parent`.
    pub fn make_class(&mut self, parent: RegionId) -> TypeId {
        let region = self.new_region(Some(parent));
        self.new_scoped_type(region, |region| TypeKind::Class { region })
    }

    pub fn make_union(&mut self, parent: RegionId) -> TypeId {
        let region = self.new_region(Some(parent));
        self.new_scoped_type(region, |region| TypeKind::Union { region })
    }

    pub fn make_enum(&mut self, parent: RegionId) -> TypeId {
        let region = self.new_region(Some(parent));
        self.new_scoped_type(region, |region| TypeKind::Enum {
            region,
            underlying: None,
        })
    }

    pub fn make_namespace(&mut self, parent: RegionId) -> TypeId {
        let region = self.new_region(Some(parent));
        self.new_scoped_type(region, |region| TypeKind::Namespace { region })
    }

    pub fn set_underlying_type(
        &mut self,
        enum_ty: TypeId,
        underlying: TypeId,
    ) -> Result<(), ReprError> {
        match self.types.get_mut(enum_ty).map(|node| &mut node.kind) {
            Some(TypeKind::Enum {
                underlying: slot, ..
            }) => fill_once(slot, underlying, "underlying type", NodeRef::Type(enum_ty)),
            _ => Err(ReprError::NotAnEnum(enum_ty)),
        }
    }

    /// Record `base` as the next direct base of `class`.
    pub fn add_base(&mut self, class: TypeId, base: TypeId) -> Result<(), ReprError> {
        if !matches!(self.ty(class).kind, TypeKind::Class { .. }) {
            return Err(ReprError::NotAClass(class));
        }
        self.types.add_base(class, base);
        Ok(())
    }

    // === Expressions ===

    /// The literal of type `ty` spelled `text`.
    ///
    /// `true`/`false` of type `bool` and `nullptr` of type `nullptr_t` are
    /// the constants `ExprId::TRUE`, `ExprId::FALSE` and `ExprId::NULLPTR`.
    pub fn get_literal(&mut self, ty: TypeId, text: Symbol) -> ExprId {
        self.exprs.literal(&mut self.stats, ty, text)
    }

    fn expr_of(&mut self, kind: ExprKind, ty: Option<TypeId>) -> ExprId {
        self.exprs.fresh(&mut self.stats, kind, ty)
    }

    /// Use of `name`, optionally already resolved to `decl`.
    pub fn make_id_expr(&mut self, name: NameId, decl: Option<DeclId>) -> ExprId {
        let ty = decl.map(|decl| self.decl(decl).ty());
        self.expr_of(ExprKind::Id { name, decl }, ty)
    }

    pub fn make_unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr_of(ExprKind::Unary { op, operand }, None)
    }

    pub fn make_binary(&mut self, op: BinaryOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.expr_of(ExprKind::Binary { op, lhs, rhs }, None)
    }

    pub fn make_call(&mut self, callee: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.exprs.push_list(args);
        self.expr_of(ExprKind::Call { callee, args }, None)
    }

    /// Cast of `operand` to `ty`; the expression's type is `ty`.
    pub fn make_cast(&mut self, kind: CastKind, ty: TypeId, operand: ExprId) -> ExprId {
        self.expr_of(ExprKind::Cast { kind, ty, operand }, Some(ty))
    }

    pub fn make_conditional(
        &mut self,
        condition: ExprId,
        then: ExprId,
        otherwise: ExprId,
    ) -> ExprId {
        self.expr_of(
            ExprKind::Conditional {
                condition,
                then,
                otherwise,
            },
            None,
        )
    }

    pub fn make_member(&mut self, object: ExprId, member: NameId, arrow: bool) -> ExprId {
        self.expr_of(
            ExprKind::Member {
                object,
                member,
                arrow,
            },
            None,
        )
    }

    pub fn make_sizeof(&mut self, ty: TypeId) -> ExprId {
        self.expr_of(ExprKind::Sizeof(ty), None)
    }

    pub fn make_alignof(&mut self, ty: TypeId) -> ExprId {
        self.expr_of(ExprKind::Alignof(ty), None)
    }

    /// `new ty(args...)`; the expression's type is pointer to `ty`.
    pub fn make_new(&mut self, ty: TypeId, args: Option<&[ExprId]>) -> ExprId {
        let args = args.map(|args| self.exprs.push_list(args));
        let pointer = self.get_pointer(ty);
        self.expr_of(ExprKind::New { ty, args }, Some(pointer))
    }

    pub fn make_delete(&mut self, operand: ExprId, array: bool) -> ExprId {
        self.expr_of(ExprKind::Delete { operand, array }, Some(TypeId::VOID))
    }

    pub fn make_paren(&mut self, inner: ExprId) -> ExprId {
        let ty = self.expr(inner).ty;
        self.expr_of(ExprKind::Paren(inner), ty)
    }

    pub fn make_initializer_list(&mut self, elements: &[ExprId]) -> ExprId {
        let elements = self.exprs.push_list(elements);
        self.expr_of(ExprKind::InitializerList(elements), None)
    }

    /// `throw operand`, or a rethrow when `operand` is `None`.
    pub fn make_throw(&mut self, operand: Option<ExprId>) -> ExprId {
        self.expr_of(ExprKind::Throw(operand), Some(TypeId::VOID))
    }

    /// Back-fill the type of an expression.
    pub fn set_expr_type(&mut self, expr: ExprId, ty: TypeId) -> Result<(), ReprError> {
        let node = NodeRef::Expr(expr);
        match self.exprs.get_mut(expr) {
            Some(slot) => fill_once(&mut slot.ty, ty, "type", node),
            // Singletons are complete from the start.
            None => Err(ReprError::AlreadySet { field: "type", node }),
        }
    }
}
