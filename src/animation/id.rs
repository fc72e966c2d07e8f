//! Animation identifiers.

use std::hash::{Hash, Hasher};

use log::error;

/// Stable handle for a registered clip.
///
/// Two ids are equal when their numeric part is equal; the name is carried
/// along for diagnostics and lookups by humans.
#[derive(Debug, Clone)]
pub struct AnimationId {
    pub name: String,
    pub id: u32,
}

impl AnimationId {
    pub fn new(name: Option<&str>, id: u32) -> Self {
        let name = match name {
            Some(name) => name.to_string(),
            None => {
                error!("AnimationId {} created without a name", id);
                String::new()
            }
        };
        Self { name, id }
    }
}

impl PartialEq for AnimationId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnimationId {}

impl Hash for AnimationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Hands out sequential ids starting at 1.
#[derive(Debug)]
pub struct IdProvider {
    next_id: u32,
}

impl Default for IdProvider {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl IdProvider {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn allocate(&mut self, name: Option<&str>) -> AnimationId {
        let id = AnimationId::new(name, self.next_id);
        self.next_id += 1;
        id
    }
}
