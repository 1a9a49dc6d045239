//! Symbol registry
//!
//! Interns atom, variable and predicate names into a single table. A name
//! belongs to exactly one kind for as long as the table lives, and every
//! request for the same name and kind returns the same handle.

use crate::{Error, Result};
use ahash::AHashMap;
use std::fmt;

/// Handle to an interned name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Position of the name in registration order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The namespace a name is registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Atom,
    Variable,
    Predicate,
}

impl TermKind {
    /// All kinds, in the order registries are listed
    pub const ALL: [TermKind; 3] = [TermKind::Variable, TermKind::Predicate, TermKind::Atom];

    /// Whether `name` is lexically allowed to carry this kind.
    ///
    /// Variables start with an uppercase letter; atoms and predicates start
    /// with anything else (lowercase letter or underscore).
    pub fn accepts(self, name: &str) -> bool {
        match name.chars().next() {
            None => false,
            Some(first) => match self {
                TermKind::Variable => first.is_uppercase(),
                TermKind::Atom | TermKind::Predicate => !first.is_uppercase(),
            },
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Atom => write!(f, "atom"),
            TermKind::Variable => write!(f, "variable"),
            TermKind::Predicate => write!(f, "predicate"),
        }
    }
}

/// An interned term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(Symbol),
    Variable(Symbol),
    Predicate(Symbol),
}

impl Term {
    /// Build the term of the given kind for a symbol
    pub fn new(kind: TermKind, symbol: Symbol) -> Self {
        match kind {
            TermKind::Atom => Term::Atom(symbol),
            TermKind::Variable => Term::Variable(symbol),
            TermKind::Predicate => Term::Predicate(symbol),
        }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Atom(_) => TermKind::Atom,
            Term::Variable(_) => TermKind::Variable,
            Term::Predicate(_) => TermKind::Predicate,
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Term::Atom(symbol) | Term::Variable(symbol) | Term::Predicate(symbol) => *symbol,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    kind: TermKind,
}

/// Registration watermark, used to undo the names a failed statement added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    entries: usize,
    atoms: usize,
}

/// Interning table for every name the interpreter has seen
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<Entry>,
    by_name: AHashMap<String, Symbol>,
    /// Atoms in registration order (the search domain)
    atoms: Vec<Symbol>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name` as `kind`.
    ///
    /// Returns the existing term when the name is already registered under
    /// the same kind, and fails when it is registered under another one.
    pub fn intern(&mut self, name: &str, kind: TermKind) -> Result<Term> {
        if let Some(&symbol) = self.by_name.get(name) {
            let existing = self.entries[symbol.index()].kind;
            if existing != kind {
                return Err(Error::NameKindConflict {
                    name: name.to_string(),
                    existing,
                    requested: kind,
                });
            }
            return Ok(Term::new(kind, symbol));
        }

        if !kind.accepts(name) {
            return Err(Error::InvalidName { name: name.to_string(), kind });
        }

        let symbol = Symbol(self.entries.len() as u32);
        self.entries.push(Entry { name: name.to_string(), kind });
        self.by_name.insert(name.to_string(), symbol);
        if kind == TermKind::Atom {
            self.atoms.push(symbol);
        }
        Ok(Term::new(kind, symbol))
    }

    pub fn atom(&mut self, name: &str) -> Result<Term> {
        self.intern(name, TermKind::Atom)
    }

    pub fn variable(&mut self, name: &str) -> Result<Term> {
        self.intern(name, TermKind::Variable)
    }

    pub fn predicate(&mut self, name: &str) -> Result<Term> {
        self.intern(name, TermKind::Predicate)
    }

    /// Look up an already registered name
    pub fn lookup(&self, name: &str) -> Option<Term> {
        self.by_name
            .get(name)
            .map(|&symbol| Term::new(self.entries[symbol.index()].kind, symbol))
    }

    /// Name behind a symbol
    pub fn name(&self, symbol: Symbol) -> &str {
        self.entries
            .get(symbol.index())
            .map(|entry| entry.name.as_str())
            .unwrap_or("<unknown>")
    }

    /// Every interned atom, in registration order
    pub fn atoms(&self) -> &[Symbol] {
        &self.atoms
    }

    /// Names registered under `kind`, in registration order
    pub fn names(&self, kind: TermKind) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current registration watermark
    pub fn mark(&self) -> Mark {
        Mark { entries: self.entries.len(), atoms: self.atoms.len() }
    }

    /// Forget every name registered after `mark`
    pub fn rollback(&mut self, mark: Mark) {
        if mark.entries >= self.entries.len() {
            return;
        }
        for entry in self.entries.drain(mark.entries..) {
            self.by_name.remove(&entry.name);
        }
        self.atoms.truncate(mark.atoms);
        tracing::debug!(kept = mark.entries, "rolled back symbol registrations");
    }
}
