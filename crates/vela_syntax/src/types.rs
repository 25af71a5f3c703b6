//! Interned types for annotation checking.
use ahash::RandomState;
use hashbrown::HashMap;

use crate::{Interner, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Any,
    Unit,
    Bool,
    Int,
    Float,
    Str,
    Array(TypeId),
    Named(Symbol),
}

pub type TypeId = u32;

pub struct TypeInterner {
    map: HashMap<Type, TypeId, RandomState>,
    rev: Vec<Type>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut this = Self {
            map: HashMap::with_hasher(RandomState::new()),
            rev: Vec::new(),
        };
        // Builtins
        for ty in [
            Type::Any,
            Type::Unit,
            Type::Bool,
            Type::Int,
            Type::Float,
            Type::Str,
        ] {
            this.intern(ty);
        }
        this
    }

    pub fn intern(&mut self, ty: Type) -> TypeId {
        if let Some(id) = self.map.get(&ty).copied() {
            return id;
        }
        let id = self.rev.len() as TypeId;
        self.rev.push(ty);
        self.map.insert(ty, id);
        id
    }

    pub fn get(&self, id: TypeId) -> Type {
        self.rev[id as usize]
    }

    pub fn array(&mut self, elem: TypeId) -> TypeId {
        self.intern(Type::Array(elem))
    }

    pub fn named(&mut self, name: Symbol) -> TypeId {
        self.intern(Type::Named(name))
    }

    pub fn builtin_by_name(&mut self, name: &str) -> Option<TypeId> {
        match name {
            "Any" => Some(self.intern(Type::Any)),
            "Unit" => Some(self.intern(Type::Unit)),
            "Bool" => Some(self.intern(Type::Bool)),
            "Int" => Some(self.intern(Type::Int)),
            "Float" => Some(self.intern(Type::Float)),
            "String" => Some(self.intern(Type::Str)),
            _ => None,
        }
    }

    pub fn name(&self, id: TypeId, symbols: &Interner) -> String {
        match self.get(id) {
            Type::Any => "Any".to_string(),
            Type::Unit => "Unit".to_string(),
            Type::Bool => "Bool".to_string(),
            Type::Int => "Int".to_string(),
            Type::Float => "Float".to_string(),
            Type::Str => "String".to_string(),
            Type::Array(elem) => format!("[{}]", self.name(elem, symbols)),
            Type::Named(sym) => symbols.resolve(sym).to_string(),
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}
