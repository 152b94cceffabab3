//! IPR Lexicon - the program representation
//!
//! A `Lexicon` owns every node of one representation and is the only way to
//! make them. Nodes are grouped by category into arenas and referred to by
//! `u32` handles:
//! - Names (`NameId`): identifiers, operator names, qualified names, template-ids
//! - Types (`TypeId`): fundamental, structural and user-defined types
//! - Expressions (`ExprId`), statements (`StmtId`), declarations (`DeclId`)
//!   and directives (`DirectiveId`)
//!
//! # Canonical nodes
//!
//! Names, structural types, literals and type/term lists are hash-consed:
//! asking twice for "pointer to `int`" returns the same `TypeId`. Comparing
//! handles is comparing structure.
//!
//! # Scopes and regions
//!
//! Declarations are made into a `RegionId`. Each region owns a scope that
//! maps a name to an overload set and an overload set maps a type to a
//! declaration chain (master first, then redeclarations in order).
//!
//! # Tracing
//!
//! Call [`init_tracing`] and set `RUST_LOG=ipr_lexicon=debug` to see region
//! creation and redeclarations, or `trace` for every new node.

mod config;
mod decl;
mod directive;
mod error;
mod expr;
mod flags;
mod ids;
mod lexicon;
mod name;
mod region;
mod scope;
mod stmt;
mod term;
mod types;
mod visitor;

use std::sync::Once;

pub use config::LexiconConfig;
pub use ipr_ir::{ArenaConfig, Category, CategoryGroup, NodeId, NodeStats, StringLookup, Symbol};
pub use decl::{DeclKind, DeclNode};
pub use directive::{DirectiveKind, DirectiveNode};
pub use error::ReprError;
pub use expr::{BinaryOp, CastKind, ExprKind, ExprNode, UnaryOp};
pub use flags::{Qualifiers, Specifiers};
pub use ids::{
    ChainId, DeclId, DirectiveId, ExprId, ExprListId, NameId, OverloadId, RegionId, ScopeId,
    StmtId, TermListId, TypeId, TypeListId,
};
pub use lexicon::Lexicon;
pub use name::{NameKind, NameNode};
pub use region::{Ancestors, Region, RegionOwner};
pub use scope::{BindingState, Overload, Scope};
pub use stmt::{StmtKind, StmtNode};
pub use term::{NodeRef, Term};
pub use types::{Fundamental, Linkage, TypeKind, TypeNode};
pub use visitor::Visitor;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG=ipr_lexicon=debug` to enable debug output.
/// Set `RUST_LOG=ipr_lexicon=trace` for very verbose output.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
