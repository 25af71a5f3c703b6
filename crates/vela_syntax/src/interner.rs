//! Identifier interning.
//!
//! Every name in the AST is a `Symbol`; the interner that resolves it lives
//! on the session context and outlives every translation unit.
use ahash::RandomState;
use hashbrown::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(pub u32);

pub struct Interner {
    map: HashMap<Box<str>, Symbol, RandomState>,
    rev: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            map: HashMap::with_hasher(RandomState::new()),
            rev: Vec::new(),
        }
    }

    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(sym) = self.map.get(s) {
            return *sym;
        }
        let sym = Symbol(self.rev.len() as u32);
        let boxed: Box<str> = s.into();
        self.rev.push(boxed.clone());
        self.map.insert(boxed, sym);
        sym
    }

    pub fn lookup(&self, s: &str) -> Option<Symbol> {
        self.map.get(s).copied()
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.rev[sym.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.rev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rev.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_stable() {
        let mut interner = Interner::new();
        let a = interner.intern("count");
        let b = interner.intern("total");
        let c = interner.intern("count");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), "count");
        assert_eq!(interner.resolve(b), "total");
    }
}
