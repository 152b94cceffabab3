#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{
    ArenaConfig, BindingState, BinaryOp, DeclKind, ExprKind, Linkage, NameKind, Qualifiers,
    Specifiers, StmtKind, UnaryOp,
};
use pretty_assertions::assert_eq;

fn ident(lex: &mut Lexicon, text: &str) -> NameId {
    let symbol = lex.get_string(text);
    lex.get_identifier(symbol)
}

/// `int (int, int)` with the default linkage, `noexcept`.
fn int_binary_fn(lex: &mut Lexicon) -> TypeId {
    let params = lex.get_product(&[TypeId::INT, TypeId::INT]);
    let nothrow = lex.get_sum(&[]);
    lex.get_function(params, TypeId::INT, nothrow, Linkage::Cxx)
}

// === Construction ===

#[test]
fn new_lexicon_has_global_namespace() {
    let lex = Lexicon::new();
    let global = lex.global_region();
    assert!(global.is_global());
    assert_eq!(global.depth(), 0);
    assert_eq!(global.owner(), Some(RegionOwner::Type(lex.global_namespace())));
    assert_eq!(
        lex.ty(lex.global_namespace()).kind,
        TypeKind::Namespace {
            region: RegionId::GLOBAL
        }
    );
    assert_eq!(lex.region_count(), 1);
    assert_eq!(lex.stats().count(Category::Namespace), 1);
}

#[test]
fn config_is_kept() {
    let config = LexiconConfig::new().with_arena(ArenaConfig::new().with_pool_size(128));
    let lex = Lexicon::with_config(config.clone());
    assert_eq!(lex.config(), &config);
    assert_eq!(lex.config().arena.pool_size(), 128);
}

// === Strings and names ===

#[test]
fn strings_are_interned() {
    let mut lex = Lexicon::new();
    let a = lex.get_string("widget");
    let b = lex.get_string("widget");
    assert_eq!(a, b);
    assert_eq!(lex.text(a), b"widget");
    assert_eq!(lex.text_str(a), Some("widget"));
}

#[test]
fn reserved_words_are_static() {
    let mut lex = Lexicon::new();
    let int = lex.get_string("int");
    assert!(int.is_word());
    assert_eq!(lex.get_string("int"), int);
    assert!(lex.strings().is_empty());
}

#[test]
fn raw_bytes_intern_through_try_get_string() {
    let mut lex = Lexicon::new();
    let sym = lex.try_get_string(&[0xff, b'x']).unwrap();
    assert_eq!(lex.text(sym), &[0xff, b'x']);
    assert_eq!(lex.text_str(sym), None);
}

#[test]
fn names_are_canonical() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    assert_eq!(ident(&mut lex, "x"), x);
    assert_ne!(ident(&mut lex, "y"), x);

    let plus = lex.get_string("+");
    assert_ne!(lex.get_operator(plus), lex.get_identifier(plus));

    let class = lex.make_class(RegionId::GLOBAL);
    assert_ne!(
        lex.get_constructor_name(class),
        lex.get_destructor_name(class)
    );
    let qualified = lex.get_qualified_name(class, x);
    assert_eq!(lex.get_qualified_name(class, x), qualified);
    assert_eq!(
        lex.name(qualified).kind,
        NameKind::Qualified {
            scope: class,
            member: x
        }
    );
    assert_eq!(lex.stats().misses(CategoryGroup::Name), 7);
}

#[test]
fn template_ids_share_argument_lists() {
    let mut lex = Lexicon::new();
    let vector = ident(&mut lex, "vector");
    let a = lex.get_template_id(vector, &[Term::Type(TypeId::INT)]);
    let b = lex.get_template_id(vector, &[Term::Type(TypeId::INT)]);
    let c = lex.get_template_id(vector, &[Term::Type(TypeId::DOUBLE)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    let NameKind::TemplateId { template, args } = lex.name(a).kind else {
        panic!("expected a template-id");
    };
    assert_eq!(template, vector);
    assert_eq!(lex.term_list(args), &[Term::Type(TypeId::INT)]);
}

// === Types ===

#[test]
fn structural_types_are_canonical() {
    let mut lex = Lexicon::new();
    let p = lex.get_pointer(TypeId::INT);
    assert_eq!(lex.get_pointer(TypeId::INT), p);
    let pp = lex.get_pointer(p);
    assert_ne!(pp, p);
    assert_eq!(lex.ty(pp).kind, TypeKind::Pointer(p));
    assert_ne!(lex.get_reference(TypeId::INT), lex.get_rvalue_reference(TypeId::INT));

    assert_eq!(lex.stats().hits(CategoryGroup::Type), 1);
    assert_eq!(lex.stats().misses(CategoryGroup::Type), 4);
}

#[test]
fn builtin_types_are_not_allocated() {
    let mut lex = Lexicon::new();
    let before = lex.arena_len(CategoryGroup::Type);
    assert_eq!(lex.ty(TypeId::INT).category(), Category::Builtin);
    assert_eq!(lex.get_array(TypeId::CHAR, None), lex.get_array(TypeId::CHAR, None));
    assert_eq!(lex.arena_len(CategoryGroup::Type), before + 1);
}

#[test]
fn qualifiers_merge() {
    let mut lex = Lexicon::new();
    let volatile = lex.get_qualified(Qualifiers::VOLATILE, TypeId::INT).unwrap();
    let cv = lex.get_qualified(Qualifiers::CONST, volatile).unwrap();
    let direct = lex
        .get_qualified(Qualifiers::CONST | Qualifiers::VOLATILE, TypeId::INT)
        .unwrap();
    assert_eq!(cv, direct);
    assert_eq!(
        lex.get_qualified(Qualifiers::empty(), TypeId::INT),
        Err(ReprError::EmptyQualifiers)
    );
}

#[test]
fn sums_ignore_order_and_duplicates() {
    let mut lex = Lexicon::new();
    let a = lex.get_sum(&[TypeId::INT, TypeId::BOOL, TypeId::INT]);
    let b = lex.get_sum(&[TypeId::BOOL, TypeId::INT]);
    assert_eq!(a, b);
    let TypeKind::Sum(list) = lex.ty(a).kind else {
        panic!("expected a sum");
    };
    assert_eq!(lex.type_list(list), &[TypeId::BOOL, TypeId::INT]);

    // Products keep their order.
    let ab = lex.get_product(&[TypeId::INT, TypeId::BOOL]);
    let ba = lex.get_product(&[TypeId::BOOL, TypeId::INT]);
    assert_ne!(ab, ba);
}

#[test]
fn function_types_distinguish_linkage() {
    let mut lex = Lexicon::new();
    let f = int_binary_fn(&mut lex);
    assert_eq!(int_binary_fn(&mut lex), f);
    let TypeKind::Function { source, .. } = lex.ty(f).kind else {
        panic!("expected a function type");
    };
    let nothrow = lex.get_sum(&[]);
    let c = lex.get_function(source, TypeId::INT, nothrow, Linkage::C);
    assert_ne!(c, f);
}

#[test]
fn user_defined_types_are_distinct() {
    let mut lex = Lexicon::new();
    let a = lex.make_class(RegionId::GLOBAL);
    let b = lex.make_class(RegionId::GLOBAL);
    assert_ne!(a, b);

    let region = lex.ty(a).kind.region().unwrap();
    let view = lex.region(region);
    assert_eq!(view.owner(), Some(RegionOwner::Type(a)));
    assert_eq!(view.enclosing().map(Region::id), Some(RegionId::GLOBAL));
    assert_eq!(view.depth(), 1);
}

#[test]
fn enum_underlying_type_is_set_once() {
    let mut lex = Lexicon::new();
    let e = lex.make_enum(RegionId::GLOBAL);
    lex.set_underlying_type(e, TypeId::UNSIGNED_CHAR).unwrap();
    assert_eq!(
        lex.set_underlying_type(e, TypeId::INT),
        Err(ReprError::AlreadySet {
            field: "underlying type",
            node: NodeRef::Type(e)
        })
    );
    let class = lex.make_class(RegionId::GLOBAL);
    assert_eq!(
        lex.set_underlying_type(class, TypeId::INT),
        Err(ReprError::NotAnEnum(class))
    );
    assert_eq!(
        lex.set_underlying_type(TypeId::INT, TypeId::INT),
        Err(ReprError::NotAnEnum(TypeId::INT))
    );
}

#[test]
fn bases_keep_declaration_order() {
    let mut lex = Lexicon::new();
    let base1 = lex.make_class(RegionId::GLOBAL);
    let base2 = lex.make_class(RegionId::GLOBAL);
    let derived = lex.make_class(RegionId::GLOBAL);
    lex.add_base(derived, base2).unwrap();
    lex.add_base(derived, base1).unwrap();
    assert_eq!(lex.bases(derived), &[base2, base1]);
    assert!(lex.bases(base1).is_empty());

    let ns = lex.make_namespace(RegionId::GLOBAL);
    assert_eq!(lex.add_base(ns, base1), Err(ReprError::NotAClass(ns)));
}

// === Expressions ===

#[test]
fn literals_are_canonical() {
    let mut lex = Lexicon::new();
    let text = lex.get_string("42");
    let a = lex.get_literal(TypeId::INT, text);
    assert_eq!(lex.get_literal(TypeId::INT, text), a);
    assert_ne!(lex.get_literal(TypeId::LONG, text), a);
    assert_eq!(lex.expr(a).ty, Some(TypeId::INT));
}

#[test]
fn constant_spellings_are_singletons() {
    let mut lex = Lexicon::new();
    let t = lex.get_string("true");
    let f = lex.get_string("false");
    let null = lex.get_string("nullptr");
    assert_eq!(lex.get_literal(TypeId::BOOL, t), ExprId::TRUE);
    assert_eq!(lex.get_literal(TypeId::BOOL, f), ExprId::FALSE);
    assert_eq!(lex.get_literal(TypeId::NULLPTR_T, null), ExprId::NULLPTR);
    assert_eq!(lex.arena_len(CategoryGroup::Expr), 0);
}

#[test]
fn composite_expressions_always_allocate() {
    let mut lex = Lexicon::new();
    let one = lex.get_string("1");
    let one = lex.get_literal(TypeId::INT, one);
    let a = lex.make_unary(UnaryOp::Negate, one);
    let b = lex.make_unary(UnaryOp::Negate, one);
    assert_ne!(a, b);
    let sum = lex.make_binary(BinaryOp::Add, a, b);
    assert_eq!(lex.expr(sum).ty, None);
    assert_eq!(
        lex.expr(sum).kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            lhs: a,
            rhs: b
        }
    );
}

#[test]
fn expression_types_follow_their_operands() {
    let mut lex = Lexicon::new();
    let new = lex.make_new(TypeId::INT, None);
    let pointer = lex.get_pointer(TypeId::INT);
    assert_eq!(lex.expr(new).ty, Some(pointer));
    let paren = lex.make_paren(new);
    assert_eq!(lex.expr(paren).ty, Some(pointer));
    let delete = lex.make_delete(new, false);
    assert_eq!(lex.expr(delete).ty, Some(TypeId::VOID));
}

#[test]
fn call_arguments_are_stored_in_order() {
    let mut lex = Lexicon::new();
    let f = ident(&mut lex, "f");
    let callee = lex.make_id_expr(f, None);
    let call = lex.make_call(callee, &[ExprId::TRUE, ExprId::NULLPTR]);
    let ExprKind::Call { args, .. } = lex.expr(call).kind else {
        panic!("expected a call");
    };
    assert_eq!(lex.expr_list(args), &[ExprId::TRUE, ExprId::NULLPTR]);
}

#[test]
fn expression_type_is_set_once() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let e = lex.make_id_expr(x, None);
    lex.set_expr_type(e, TypeId::INT).unwrap();
    assert_eq!(lex.expr(e).ty, Some(TypeId::INT));
    assert_eq!(
        lex.set_expr_type(e, TypeId::INT),
        Err(ReprError::AlreadySet {
            field: "type",
            node: NodeRef::Expr(e)
        })
    );
    assert!(lex.set_expr_type(ExprId::TRUE, TypeId::INT).is_err());
}

// === Statements and regions ===

#[test]
fn blocks_own_their_region() {
    let mut lex = Lexicon::new();
    let block = lex.make_block(RegionId::GLOBAL);
    let region = lex.block_region(block).unwrap();
    assert_eq!(lex.region(region).owner(), Some(RegionOwner::Stmt(block)));

    let brk = lex.make_break();
    let ret = lex.make_return(None);
    lex.append_to_block(block, brk).unwrap();
    lex.append_to_block(block, ret).unwrap();
    let StmtKind::Block { body, .. } = &lex.stmt(block).kind else {
        panic!("expected a block");
    };
    assert_eq!(body, &vec![brk, ret]);

    assert_eq!(lex.append_to_block(brk, ret), Err(ReprError::NotABlock(brk)));
    assert_eq!(lex.block_region(brk), Err(ReprError::NotABlock(brk)));
}

#[test]
fn region_owner_is_set_once() {
    let mut lex = Lexicon::new();
    let region = lex.make_subregion(RegionId::GLOBAL);
    assert_eq!(lex.region(region).owner(), None);
    let owner = RegionOwner::Type(lex.global_namespace());
    lex.set_region_owner(region, owner).unwrap();
    assert_eq!(
        lex.set_region_owner(region, RegionOwner::Type(TypeId::INT)),
        Err(ReprError::RegionOwned { region, owner })
    );
}

#[test]
fn loops_record_their_parts() {
    let mut lex = Lexicon::new();
    let body = lex.make_continue();
    let w = lex.make_while(ExprId::TRUE, body);
    assert_eq!(
        lex.stmt(w).kind,
        StmtKind::While {
            condition: ExprId::TRUE,
            body
        }
    );
    let f = lex.make_for(None, None, None, body);
    assert_eq!(lex.category(NodeRef::Stmt(f)), Category::For);
    assert_eq!(lex.arena_len(CategoryGroup::Stmt), 3);
}

#[test]
fn directives_are_listed_by_region() {
    let mut lex = Lexicon::new();
    let ns = lex.make_namespace(RegionId::GLOBAL);
    let using = lex.make_using_directive(RegionId::GLOBAL, ns).unwrap();
    let text = lex.get_string("once");
    let pragma = lex.make_pragma(RegionId::GLOBAL, text);
    assert_eq!(lex.global_region().directives(), &[using, pragma]);
    assert_eq!(lex.directive(using).region, RegionId::GLOBAL);
    assert_eq!(
        lex.make_using_directive(RegionId::GLOBAL, TypeId::INT),
        Err(ReprError::NotANamespace(TypeId::INT))
    );
    assert_eq!(lex.global_region().directives().len(), 2);
}

// === Declarations ===

#[test]
fn redeclarations_join_one_chain() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let first = lex
        .declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::EXTERN)
        .unwrap();
    let second = lex
        .declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::empty())
        .unwrap();

    let chain = lex.decl(first).chain();
    assert_eq!(lex.decl(second).chain(), chain);
    assert_eq!(lex.chain(chain), &[first, second]);
    assert_eq!(lex.decl(second).master(), first);
    assert_eq!(lex.decl(second).position(), 1);
    assert!(lex.decl(first).is_master());

    let scope = lex.global_region().scope();
    assert_eq!(scope.members(), &[first, second]);
    assert_eq!(scope.state(x), BindingState::Redeclared);
}

#[test]
fn different_types_overload() {
    let mut lex = Lexicon::new();
    let f = ident(&mut lex, "f");
    let int_fn = int_binary_fn(&mut lex);
    let params = lex.get_product(&[TypeId::DOUBLE]);
    let nothrow = lex.get_sum(&[]);
    let double_fn = lex.get_function(params, TypeId::VOID, nothrow, Linkage::Cxx);

    let a = lex
        .declare_function(RegionId::GLOBAL, f, int_fn, Specifiers::empty())
        .unwrap();
    assert_eq!(lex.global_region().scope().state(f), BindingState::Declared);
    let b = lex
        .declare_function(RegionId::GLOBAL, f, double_fn, Specifiers::INLINE)
        .unwrap();

    let overload = lex.global_region().scope().lookup(f).unwrap();
    assert_eq!(overload.len(), 2);
    assert_eq!(overload.lookup(int_fn), Some(&[a][..]));
    assert_eq!(overload.lookup(double_fn), Some(&[b][..]));
    assert!(lex.decl(a).is_master() && lex.decl(b).is_master());
    assert_eq!(lex.global_region().scope().state(f), BindingState::Overloaded);
}

#[test]
fn incompatible_redeclaration_is_rejected() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    lex.declare_var(RegionId::GLOBAL, x, TypeId::TYPENAME, Specifiers::empty())
        .unwrap();
    let before = lex.arena_len(CategoryGroup::Decl);
    assert_eq!(
        lex.declare_type(RegionId::GLOBAL, x, Specifiers::empty()),
        Err(ReprError::IncompatibleRedeclaration {
            name: x,
            existing: Category::Var,
            new: Category::Typedecl
        })
    );
    assert_eq!(lex.arena_len(CategoryGroup::Decl), before);
}

#[test]
fn conflicting_specifiers_allocate_nothing() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let flags = Specifiers::STATIC | Specifiers::EXTERN;
    assert_eq!(
        lex.declare_var(RegionId::GLOBAL, x, TypeId::INT, flags),
        Err(ReprError::ConflictingSpecifiers(flags))
    );
    assert_eq!(lex.arena_len(CategoryGroup::Decl), 0);
    assert_eq!(lex.global_region().scope().state(x), BindingState::Unbound);
}

#[test]
fn same_name_in_nested_regions_is_separate() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let outer = lex
        .declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::empty())
        .unwrap();
    let block = lex.make_block(RegionId::GLOBAL);
    let region = lex.block_region(block).unwrap();

    let found = lex.region(region).lookup(x).unwrap();
    assert_eq!(found.lookup(TypeId::INT), Some(&[outer][..]));

    let inner = lex
        .declare_var(region, x, TypeId::INT, Specifiers::empty())
        .unwrap();
    assert!(lex.decl(inner).is_master());
    assert_eq!(lex.decl(inner).home(), region);
    let found = lex.region(region).lookup(x).unwrap();
    assert_eq!(found.lookup(TypeId::INT), Some(&[inner][..]));
    assert_eq!(found.scope().id(), lex.region(region).scope().id());
}

#[test]
fn functions_own_a_parameter_region() {
    let mut lex = Lexicon::new();
    let f = ident(&mut lex, "f");
    let a = ident(&mut lex, "a");
    let b = ident(&mut lex, "b");
    let ty = int_binary_fn(&mut lex);
    let func = lex
        .declare_function(RegionId::GLOBAL, f, ty, Specifiers::empty())
        .unwrap();
    let DeclKind::Function { parameters, .. } = *lex.decl(func).kind() else {
        panic!("expected a function");
    };
    assert_eq!(lex.region(parameters).owner(), Some(RegionOwner::Decl(func)));
    assert_eq!(
        lex.region(parameters).enclosing().map(Region::id),
        Some(RegionId::GLOBAL)
    );

    let pa = lex.declare_parameter(func, a, TypeId::INT).unwrap();
    let pb = lex.declare_parameter(func, b, TypeId::INT).unwrap();
    assert_eq!(
        *lex.decl(pb).kind(),
        DeclKind::Parameter {
            position: 1,
            default: None
        }
    );
    assert_eq!(lex.decl(pa).home(), parameters);
    assert_eq!(lex.region(parameters).scope().members(), &[pa, pb]);
    assert_eq!(
        lex.declare_parameter(pa, b, TypeId::INT),
        Err(ReprError::NotAFunction(pa))
    );
}

#[test]
fn enumerators_live_in_their_enum() {
    let mut lex = Lexicon::new();
    let red = ident(&mut lex, "red");
    let color = lex.make_enum(RegionId::GLOBAL);
    let decl = lex.declare_enumerator(color, red, None).unwrap();
    let TypeKind::Enum { region, .. } = lex.ty(color).kind else {
        panic!("expected an enum");
    };
    assert_eq!(lex.decl(decl).home(), region);
    assert_eq!(lex.decl(decl).ty(), color);

    let class = lex.make_class(RegionId::GLOBAL);
    assert_eq!(
        lex.declare_enumerator(class, red, None),
        Err(ReprError::NotAnEnum(class))
    );
}

#[test]
fn type_declarations_take_a_definition() {
    let mut lex = Lexicon::new();
    let s = ident(&mut lex, "S");
    let decl = lex
        .declare_type(RegionId::GLOBAL, s, Specifiers::empty())
        .unwrap();
    assert_eq!(lex.decl(decl).ty(), TypeId::TYPENAME);
    assert_eq!(
        lex.set_type_definition(decl, TypeId::INT),
        Err(ReprError::NotAUserType(TypeId::INT))
    );
    let class = lex.make_class(RegionId::GLOBAL);
    lex.set_type_definition(decl, class).unwrap();
    assert_eq!(
        *lex.decl(decl).kind(),
        DeclKind::Typedecl {
            definition: Some(class)
        }
    );
    assert!(matches!(
        lex.set_type_definition(decl, class),
        Err(ReprError::AlreadySet { .. })
    ));
}

#[test]
fn back_filled_fields_check_the_category() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let f = ident(&mut lex, "f");
    let var = lex
        .declare_var(RegionId::GLOBAL, x, TypeId::BOOL, Specifiers::empty())
        .unwrap();
    lex.set_initializer(var, ExprId::TRUE).unwrap();
    assert_eq!(lex.decl(var).kind().initializer(), Some(ExprId::TRUE));
    assert_eq!(
        lex.set_initializer(var, ExprId::FALSE),
        Err(ReprError::AlreadySet {
            field: "initializer",
            node: NodeRef::Decl(var)
        })
    );

    let ty = int_binary_fn(&mut lex);
    let func = lex
        .declare_function(RegionId::GLOBAL, f, ty, Specifiers::empty())
        .unwrap();
    assert_eq!(
        lex.set_initializer(func, ExprId::TRUE),
        Err(ReprError::NoSuchField {
            field: "initializer",
            category: Category::Function
        })
    );
    assert_eq!(
        lex.set_aliasee(func, TypeId::INT),
        Err(ReprError::NoSuchField {
            field: "aliasee",
            category: Category::Function
        })
    );
    let body = lex.make_block(RegionId::GLOBAL);
    lex.set_function_body(func, body).unwrap();
    assert_eq!(
        lex.set_function_body(var, body),
        Err(ReprError::NotAFunction(var))
    );
}

#[test]
fn aliases_are_typename_declarations() {
    let mut lex = Lexicon::new();
    let size = ident(&mut lex, "size_type");
    let alias = lex
        .declare_alias(RegionId::GLOBAL, size, Specifiers::empty())
        .unwrap();
    lex.set_aliasee(alias, TypeId::UNSIGNED_LONG).unwrap();
    assert_eq!(lex.decl(alias).ty(), TypeId::TYPENAME);
    assert_eq!(
        *lex.decl(alias).kind(),
        DeclKind::Alias {
            aliasee: Some(TypeId::UNSIGNED_LONG)
        }
    );
}

#[test]
fn specializations_link_to_the_primary() {
    let mut lex = Lexicon::new();
    let vector = ident(&mut lex, "vector");
    let pattern_ty = lex.make_class(RegionId::GLOBAL);
    let ty = lex.get_template_type(TypeId::TYPENAME, pattern_ty);
    let primary = lex
        .declare_template(RegionId::GLOBAL, vector, ty, Specifiers::empty())
        .unwrap();
    let redecl = lex
        .declare_template(RegionId::GLOBAL, vector, ty, Specifiers::empty())
        .unwrap();

    let args = [Term::Type(TypeId::BOOL)];
    let vec_bool = lex.declare_specialization(redecl, &args, pattern_ty).unwrap();
    let again = lex.declare_specialization(primary, &args, pattern_ty).unwrap();

    assert_eq!(lex.specializations(primary), &[vec_bool]);
    assert_eq!(lex.specializations(redecl), &[vec_bool]);
    assert_eq!(lex.decl(again).master(), vec_bool);

    let DeclKind::Template {
        primary: linked,
        args: Some(list),
        ..
    } = *lex.decl(vec_bool).kind()
    else {
        panic!("expected a specialization");
    };
    assert_eq!(linked, primary);
    assert_eq!(lex.term_list(list), &args);
    assert_eq!(
        lex.name(lex.decl(vec_bool).name()).kind,
        NameKind::TemplateId {
            template: vector,
            args: list
        }
    );
    assert_eq!(lex.decl(vec_bool).home(), RegionId::GLOBAL);
}

#[test]
fn specializing_a_specialization_targets_the_primary() {
    let mut lex = Lexicon::new();
    let vector = ident(&mut lex, "vector");
    let pattern_ty = lex.make_class(RegionId::GLOBAL);
    let ty = lex.get_template_type(TypeId::TYPENAME, pattern_ty);
    let primary = lex
        .declare_template(RegionId::GLOBAL, vector, ty, Specifiers::empty())
        .unwrap();
    let of_int = lex
        .declare_specialization(primary, &[Term::Type(TypeId::INT)], pattern_ty)
        .unwrap();
    let of_char = lex
        .declare_specialization(of_int, &[Term::Type(TypeId::CHAR)], pattern_ty)
        .unwrap();

    let expected = lex.get_template_id(vector, &[Term::Type(TypeId::CHAR)]);
    assert_eq!(lex.decl(of_char).name(), expected);
    assert_eq!(lex.decl(of_char).home(), RegionId::GLOBAL);
    assert_eq!(lex.specializations(primary), &[of_int, of_char]);
}

#[test]
fn rejected_specialization_leaves_names_untouched() {
    let mut lex = Lexicon::new();
    let vector = ident(&mut lex, "vector");
    let pattern_ty = lex.make_class(RegionId::GLOBAL);
    let ty = lex.get_template_type(TypeId::TYPENAME, pattern_ty);
    let primary = lex
        .declare_template(RegionId::GLOBAL, vector, ty, Specifiers::empty())
        .unwrap();
    let args = [Term::Type(TypeId::INT)];
    let name = lex.get_template_id(vector, &args);
    lex.declare_var(RegionId::GLOBAL, name, pattern_ty, Specifiers::empty())
        .unwrap();

    let hits = lex.stats().hits(CategoryGroup::Name);
    let names = lex.arena_len(CategoryGroup::Name);
    let regions = lex.region_count();
    assert_eq!(
        lex.declare_specialization(primary, &args, pattern_ty),
        Err(ReprError::IncompatibleRedeclaration {
            name,
            existing: Category::Var,
            new: Category::Template
        })
    );
    assert_eq!(lex.stats().hits(CategoryGroup::Name), hits);
    assert_eq!(lex.arena_len(CategoryGroup::Name), names);
    assert_eq!(lex.region_count(), regions);
}

#[test]
fn only_templates_specialize() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    let var = lex
        .declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::empty())
        .unwrap();
    assert_eq!(
        lex.declare_specialization(var, &[Term::Type(TypeId::INT)], TypeId::INT),
        Err(ReprError::NotATemplate(var))
    );
    assert_eq!(
        lex.set_template_pattern(var, var),
        Err(ReprError::NotATemplate(var))
    );
}

#[test]
fn template_pattern_is_set_once() {
    let mut lex = Lexicon::new();
    let t = ident(&mut lex, "T");
    let pattern_ty = lex.make_class(RegionId::GLOBAL);
    let ty = lex.get_template_type(TypeId::TYPENAME, pattern_ty);
    let template = lex
        .declare_template(RegionId::GLOBAL, t, ty, Specifiers::empty())
        .unwrap();
    let DeclKind::Template { parameters, .. } = *lex.decl(template).kind() else {
        panic!("expected a template");
    };
    let pattern = lex.declare_type(parameters, t, Specifiers::empty()).unwrap();
    lex.set_template_pattern(template, pattern).unwrap();
    assert!(lex.set_template_pattern(template, pattern).is_err());
    assert_eq!(
        lex.region(parameters).owner(),
        Some(RegionOwner::Decl(template))
    );
}

#[test]
fn stats_count_every_category() {
    let mut lex = Lexicon::new();
    let x = ident(&mut lex, "x");
    lex.declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::empty())
        .unwrap();
    lex.declare_var(RegionId::GLOBAL, x, TypeId::INT, Specifiers::empty())
        .unwrap();
    let _ = lex.make_break();
    assert_eq!(lex.stats().count(Category::Var), 2);
    assert_eq!(lex.stats().count(Category::Identifier), 1);
    assert_eq!(lex.stats().count(Category::Break), 1);
    assert_eq!(lex.stats().group_count(CategoryGroup::Decl), 2);
    assert_eq!(lex.category(NodeRef::Name(x)), Category::Identifier);
}
