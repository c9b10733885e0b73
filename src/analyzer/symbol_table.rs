use std::collections::HashMap;

use super::Type;

#[derive(Clone, Debug, Default)]
struct Scope {
    parent: Option<usize>,
    symbols: HashMap<String, Type>,
}

/// Block-structured scopes kept in an arena; index 0 is the global scope.
/// Popped scopes stay in the arena, only `current` moves back to the parent.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    current: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
            current: 0,
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope {
            parent: Some(self.current),
            symbols: HashMap::new(),
        });
        self.current = self.scopes.len() - 1;
    }

    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }

    /// Number of scopes entered above the global one.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = &self.scopes[self.current];
        while let Some(parent) = scope.parent {
            depth += 1;
            scope = &self.scopes[parent];
        }
        depth
    }

    pub fn is_global(&self) -> bool {
        self.current == 0
    }

    /// Returns `false` if `name` already exists in the innermost scope; the
    /// existing type is kept.
    pub fn declare(&mut self, name: &str, ty: Type) -> bool {
        let symbols = &mut self.scopes[self.current].symbols;
        if symbols.contains_key(name) {
            return false;
        }
        symbols.insert(name.to_string(), ty);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<Type> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            let scope = &self.scopes[i];
            if let Some(ty) = scope.symbols.get(name) {
                return Some(*ty);
            }
            index = scope.parent;
        }
        None
    }
}
