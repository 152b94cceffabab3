//! Declarations.
//!
//! Every declaration goes through `declare`, which binds it into the scope
//! of its region: the name selects an overload set, the type selects a
//! chain within it, and the declaration is appended to that chain and to
//! the scope's member list.

use ipr_ir::Category;

use super::fill_once;
use crate::{
    DeclId, DeclKind, DeclNode, ExprId, Lexicon, NameId, NodeRef, RegionId, RegionOwner,
    ReprError, Specifiers, StmtId, Term, TypeId, TypeKind,
};

impl Lexicon {
    /// Bind a new declaration of `name` with type `ty` into `region`.
    ///
    /// `make` builds the node payload from the new declaration's id and the
    /// master of the chain it joins (`None` when it starts a new chain). It
    /// may create regions but must not declare anything.
    fn declare(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        specifiers: Specifiers,
        category: Category,
        make: impl FnOnce(&mut Self, DeclId, Option<DeclId>) -> DeclKind,
    ) -> Result<DeclId, ReprError> {
        let specifiers = specifiers.validate()?;
        let scope = self.regions.scope_of(region);
        let master = self.master_of(region, name, ty, category)?;

        let id = self.decls.next_id();
        let kind = make(self, id, master);
        debug_assert_eq!(kind.category(), category);
        debug_assert_eq!(self.decls.next_id(), id);

        let chain = self.scopes.bind(scope, name, ty, || self.decls.new_chain());
        let position = self.decls.extend_chain(chain, id);
        let node = DeclNode {
            id: self.stats.record(category),
            name,
            ty,
            home: region,
            specifiers,
            chain,
            position,
            master: master.unwrap_or(id),
            kind,
        };
        self.decls.push(node);
        self.scopes.push_member(scope, id);

        if position > 0 {
            tracing::debug!(decl = ?id, ?name, ?ty, position, "redeclaration");
        } else {
            tracing::trace!(decl = ?id, ?name, ?ty, %category, "new declaration");
        }
        Ok(id)
    }

    /// Master of the chain a declaration of `name` with type `ty` in
    /// `region` would join, failing if that chain holds another category.
    fn master_of(
        &self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        category: Category,
    ) -> Result<Option<DeclId>, ReprError> {
        let scope = self.regions.scope_of(region);
        let master = self
            .scopes
            .find_chain(scope, name, ty)
            .and_then(|chain| self.decls.chain(chain).first().copied());
        match master.map(|master| self.decl(master).category()) {
            Some(existing) if existing != category => Err(ReprError::IncompatibleRedeclaration {
                name,
                existing,
                new: category,
            }),
            _ => Ok(master),
        }
    }

    // === Entry points ===

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_var(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(region, name, ty, specifiers, Category::Var, |_, _, _| {
            DeclKind::Var { initializer: None }
        })
    }

    /// Non-static data member; `region` is the class's region.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_field(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(region, name, ty, specifiers, Category::Field, |_, _, _| {
            DeclKind::Field { initializer: None }
        })
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_bitfield(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        width: ExprId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(region, name, ty, specifiers, Category::Bitfield, |_, _, _| {
            DeclKind::Bitfield {
                width,
                initializer: None,
            }
        })
    }

    /// Function declaration. Each declaration gets its own parameter region,
    /// nested in `region` and owned by the declaration.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_function(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(region, name, ty, specifiers, Category::Function, |lex, id, _| {
            let parameters = lex.make_subregion(region);
            let _ = lex.regions.adopt(parameters, RegionOwner::Decl(id));
            DeclKind::Function {
                parameters,
                body: None,
            }
        })
    }

    /// Next parameter of `function`, declared in its parameter region.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_parameter(
        &mut self,
        function: DeclId,
        name: NameId,
        ty: TypeId,
    ) -> Result<DeclId, ReprError> {
        let DeclKind::Function { parameters, .. } = self.decl(function).kind else {
            return Err(ReprError::NotAFunction(function));
        };
        let position = self
            .region(parameters)
            .scope()
            .members()
            .iter()
            .filter(|&&member| self.decl(member).category() == Category::Parameter)
            .count();
        let position = ipr_ir::to_u32(position, "parameters");
        self.declare(
            parameters,
            name,
            ty,
            Specifiers::empty(),
            Category::Parameter,
            |_, _, _| DeclKind::Parameter {
                position,
                default: None,
            },
        )
    }

    /// Alias declaration (`using name = ...;`). The aliased type is set with
    /// [`Lexicon::set_aliasee`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_alias(
        &mut self,
        region: RegionId,
        name: NameId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(
            region,
            name,
            TypeId::TYPENAME,
            specifiers,
            Category::Alias,
            |_, _, _| DeclKind::Alias { aliasee: None },
        )
    }

    /// Enumerator of `enum_ty`, declared in the enum's region.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_enumerator(
        &mut self,
        enum_ty: TypeId,
        name: NameId,
        value: Option<ExprId>,
    ) -> Result<DeclId, ReprError> {
        let TypeKind::Enum { region, .. } = self.ty(enum_ty).kind else {
            return Err(ReprError::NotAnEnum(enum_ty));
        };
        self.declare(
            region,
            name,
            enum_ty,
            Specifiers::empty(),
            Category::Enumerator,
            |_, _, _| DeclKind::Enumerator { value },
        )
    }

    /// Declaration of a class, union, enum or namespace named `name`. The
    /// type itself is attached with [`Lexicon::set_type_definition`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_type(
        &mut self,
        region: RegionId,
        name: NameId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(
            region,
            name,
            TypeId::TYPENAME,
            specifiers,
            Category::Typedecl,
            |_, _, _| DeclKind::Typedecl { definition: None },
        )
    }

    /// Primary template. `ty` is normally a template type
    /// (see [`Lexicon::get_template_type`]). The template parameter region
    /// is nested in `region` and owned by the declaration.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_template(
        &mut self,
        region: RegionId,
        name: NameId,
        ty: TypeId,
        specifiers: Specifiers,
    ) -> Result<DeclId, ReprError> {
        self.declare(region, name, ty, specifiers, Category::Template, |lex, id, master| {
            let parameters = lex.make_subregion(region);
            let _ = lex.regions.adopt(parameters, RegionOwner::Decl(id));
            DeclKind::Template {
                parameters,
                pattern: None,
                primary: master.unwrap_or(id),
                args: None,
            }
        })
    }

    /// Specialization of `primary` for `args`.
    ///
    /// `primary` may be any declaration of the template, a specialization
    /// included; the new declaration always specializes the primary
    /// template. It is declared in the primary's home region under the name
    /// `primary<args>`, linked back to the primary's master, and listed in
    /// [`Lexicon::specializations`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_specialization(
        &mut self,
        primary: DeclId,
        args: &[Term],
        ty: TypeId,
    ) -> Result<DeclId, ReprError> {
        let DeclKind::Template {
            primary: primary_master,
            ..
        } = self.decl(primary).kind
        else {
            return Err(ReprError::NotATemplate(primary));
        };
        let master_node = self.decl(primary_master);
        let (template_name, home) = (master_node.name(), master_node.home());
        // Only an existing template-id can already be bound.
        if let Some(name) = self.names.find_template_id(template_name, args) {
            self.master_of(home, name, ty, Category::Template)?;
        }

        let name = self.get_template_id(template_name, args);
        let arg_list = self.names.intern_terms(args);
        let decl = self.declare(
            home,
            name,
            ty,
            Specifiers::empty(),
            Category::Template,
            |lex, id, _| {
                let parameters = lex.make_subregion(home);
                let _ = lex.regions.adopt(parameters, RegionOwner::Decl(id));
                DeclKind::Template {
                    parameters,
                    pattern: None,
                    primary: primary_master,
                    args: Some(arg_list),
                }
            },
        )?;
        if self.decl(decl).is_master() {
            self.decls.add_specialization(primary_master, decl);
        }
        Ok(decl)
    }

    // === Back-filled fields ===

    /// Initializer of a variable, field or bitfield; default argument of a
    /// parameter; value of an enumerator.
    pub fn set_initializer(&mut self, decl: DeclId, init: ExprId) -> Result<(), ReprError> {
        const FIELD: &str = "initializer";
        let node = NodeRef::Decl(decl);
        match &mut self.decls.get_mut(decl).kind {
            DeclKind::Var { initializer }
            | DeclKind::Field { initializer }
            | DeclKind::Bitfield { initializer, .. }
            | DeclKind::Parameter {
                default: initializer,
                ..
            }
            | DeclKind::Enumerator { value: initializer } => {
                fill_once(initializer, init, FIELD, node)
            }
            kind => Err(ReprError::NoSuchField {
                field: FIELD,
                category: kind.category(),
            }),
        }
    }

    pub fn set_aliasee(&mut self, decl: DeclId, ty: TypeId) -> Result<(), ReprError> {
        const FIELD: &str = "aliasee";
        match &mut self.decls.get_mut(decl).kind {
            DeclKind::Alias { aliasee } => fill_once(aliasee, ty, FIELD, NodeRef::Decl(decl)),
            kind => Err(ReprError::NoSuchField {
                field: FIELD,
                category: kind.category(),
            }),
        }
    }

    pub fn set_function_body(&mut self, decl: DeclId, stmt: StmtId) -> Result<(), ReprError> {
        match &mut self.decls.get_mut(decl).kind {
            DeclKind::Function { body, .. } => fill_once(body, stmt, "body", NodeRef::Decl(decl)),
            _ => Err(ReprError::NotAFunction(decl)),
        }
    }

    /// Attach the user-defined type a type declaration introduces.
    pub fn set_type_definition(&mut self, decl: DeclId, ty: TypeId) -> Result<(), ReprError> {
        const FIELD: &str = "definition";
        if self.ty(ty).kind.region().is_none() {
            return Err(ReprError::NotAUserType(ty));
        }
        match &mut self.decls.get_mut(decl).kind {
            DeclKind::Typedecl { definition } => {
                fill_once(definition, ty, FIELD, NodeRef::Decl(decl))
            }
            kind => Err(ReprError::NoSuchField {
                field: FIELD,
                category: kind.category(),
            }),
        }
    }

    /// Declaration a template is a pattern for (the templated class,
    /// function, variable or alias).
    pub fn set_template_pattern(&mut self, decl: DeclId, pattern: DeclId) -> Result<(), ReprError> {
        match &mut self.decls.get_mut(decl).kind {
            DeclKind::Template { pattern: slot, .. } => {
                fill_once(slot, pattern, "pattern", NodeRef::Decl(decl))
            }
            _ => Err(ReprError::NotATemplate(decl)),
        }
    }
}
