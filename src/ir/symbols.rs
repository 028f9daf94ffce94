//! Function declarations and symbols
//!
//! Every callable declaration known to a compilation run is registered in a
//! `SymbolTable` and referred to by its `FunctionId`. The id is the
//! declaration's identity: two declarations are the same symbol only if their
//! ids are equal, never because they share a name or signature.

use rustc_hash::FxHashMap;

/// Identity handle for a function declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionId(pub u32);

impl FunctionId {
    /// Create a function id from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index of this id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FunctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn{}", self.0)
    }
}

/// A resolved callable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Simple name (last segment of the fully-qualified name)
    pub name: String,
    /// Fully-qualified name, e.g. `lyra.coroutines.intrinsics.intercepted`
    pub fq_name: String,
    /// Number of declared value parameters
    pub param_count: usize,
    /// Whether this is a suspending function
    pub is_suspend: bool,
}

impl FunctionDecl {
    /// Create a declaration from its fully-qualified name.
    pub fn new(fq_name: impl Into<String>, param_count: usize) -> Self {
        let fq_name = fq_name.into();
        let name = fq_name.rsplit('.').next().unwrap_or(&fq_name).to_string();
        Self {
            name,
            fq_name,
            param_count,
            is_suspend: false,
        }
    }

    /// Create a suspending declaration.
    pub fn suspend(fq_name: impl Into<String>, param_count: usize) -> Self {
        Self {
            is_suspend: true,
            ..Self::new(fq_name, param_count)
        }
    }
}

/// Table of function declarations for a compilation run.
///
/// Declarations are stored in an arena; the returned `FunctionId` is stable
/// for the lifetime of the table.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    decls: Vec<FunctionDecl>,
    /// Most recent declaration for each fully-qualified name
    by_fq_name: FxHashMap<String, FunctionId>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration, returning its identity.
    pub fn declare(&mut self, decl: FunctionDecl) -> FunctionId {
        let id = FunctionId(self.decls.len() as u32);
        self.by_fq_name.insert(decl.fq_name.clone(), id);
        self.decls.push(decl);
        id
    }

    /// Resolve an id to its declaration.
    ///
    /// Panics if `id` was not produced by this table.
    pub fn decl(&self, id: FunctionId) -> &FunctionDecl {
        &self.decls[id.0 as usize]
    }

    /// Look up the most recent declaration with the given fully-qualified name.
    pub fn lookup(&self, fq_name: &str) -> Option<FunctionId> {
        self.by_fq_name.get(fq_name).copied()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterate over all declarations with their ids.
    pub fn decls(&self) -> impl Iterator<Item = (FunctionId, &FunctionDecl)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, d)| (FunctionId(i as u32), d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_simple_name() {
        let decl = FunctionDecl::new("lyra.coroutines.intrinsics.intercepted", 0);
        assert_eq!(decl.name, "intercepted");
        assert!(!decl.is_suspend);

        let decl = FunctionDecl::suspend("suspendHere", 1);
        assert_eq!(decl.name, "suspendHere");
        assert_eq!(decl.fq_name, "suspendHere");
        assert!(decl.is_suspend);
    }

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        let id = table.declare(FunctionDecl::new("app.main", 0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.decl(id).fq_name, "app.main");
        assert_eq!(table.lookup("app.main"), Some(id));
        assert_eq!(table.lookup("app.other"), None);
    }

    #[test]
    fn test_same_name_distinct_identities() {
        let mut table = SymbolTable::new();
        let a = table.declare(FunctionDecl::new("app.run", 1));
        let b = table.declare(FunctionDecl::new("app.run", 1));

        // Same name and signature, but two distinct symbols.
        assert_ne!(a, b);
        assert_eq!(table.decl(a), table.decl(b));
    }
}
