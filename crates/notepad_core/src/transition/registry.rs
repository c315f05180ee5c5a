//! Notepad registry state and transitions.

use crate::store::records::{DEFAULT_NOTEPAD, REGISTRY_KEY};

/// Ordered notepad names plus the active one.
///
/// # Invariants
/// - `names` is non-empty and duplicate-free.
/// - `active` is always one of `names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
    active: String,
}

/// Action applied to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryAction {
    Create(String),
    Delete(String),
    Select(String),
}

/// Persistence effect required after a registry transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEffect {
    Ignored,
    /// Name list changed; persist it.
    Created,
    /// Name list changed and the removed notepad's notes must be dropped.
    /// The active notepad may have moved and must be reloaded.
    Deleted { removed: String },
    /// Active notepad changed; reload its notes.
    Selected,
}

impl Registry {
    /// Builds a registry, selecting the first name as active.
    ///
    /// Empty input, blank names and duplicates are normalized away so the
    /// invariants hold.
    pub fn new(names: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if is_valid_name(&name) && !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            unique.push(DEFAULT_NOTEPAD.to_string());
        }
        let active = unique[0].clone();
        Self {
            names: unique,
            active,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true while the invariants hold.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn apply(&mut self, action: RegistryAction) -> RegistryEffect {
        match action {
            RegistryAction::Create(name) => {
                if !is_valid_name(&name) || self.contains(&name) {
                    return RegistryEffect::Ignored;
                }
                self.names.push(name);
                RegistryEffect::Created
            }
            RegistryAction::Delete(name) => {
                if self.names.len() <= 1 {
                    return RegistryEffect::Ignored;
                }
                let Some(position) = self.names.iter().position(|existing| *existing == name)
                else {
                    return RegistryEffect::Ignored;
                };
                let removed = self.names.remove(position);
                self.active = self.names[0].clone();
                RegistryEffect::Deleted { removed }
            }
            RegistryAction::Select(name) => {
                if !self.contains(&name) {
                    return RegistryEffect::Ignored;
                }
                self.active = name;
                RegistryEffect::Selected
            }
        }
    }
}

/// Names must be non-empty and must not shadow the registry key itself.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != REGISTRY_KEY
}
