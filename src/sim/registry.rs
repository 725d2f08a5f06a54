//! Entity registry
//!
//! Owns every asteroid and projectile. Group membership (update, draw,
//! collision scans) is chosen explicitly when an entity is enrolled, and
//! removal drops it from every group at once. Entries stay sorted by id so
//! iteration order is deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::body::{Circular, CircularBody};
use super::projectile::Projectile;

/// Stable handle to a registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical collections an entity can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Advanced every tick
    Updatable,
    /// Handed to the renderer
    Drawable,
    /// Scanned against the player and projectiles
    Asteroids,
    /// Scanned against asteroids
    Projectiles,
}

/// Membership set fixed at enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Groups {
    pub updatable: bool,
    pub drawable: bool,
    pub asteroids: bool,
    pub projectiles: bool,
}

impl Groups {
    pub const ASTEROID: Groups = Groups {
        updatable: true,
        drawable: true,
        asteroids: true,
        projectiles: false,
    };

    pub const PROJECTILE: Groups = Groups {
        updatable: true,
        drawable: true,
        asteroids: false,
        projectiles: true,
    };

    pub fn contains(&self, group: Group) -> bool {
        match group {
            Group::Updatable => self.updatable,
            Group::Drawable => self.drawable,
            Group::Asteroids => self.asteroids,
            Group::Projectiles => self.projectiles,
        }
    }
}

/// Anything the registry can own
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Asteroid(Asteroid),
    Projectile(Projectile),
}

impl Entity {
    pub fn as_asteroid(&self) -> Option<&Asteroid> {
        match self {
            Entity::Asteroid(a) => Some(a),
            Entity::Projectile(_) => None,
        }
    }

    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            Entity::Projectile(p) => Some(p),
            Entity::Asteroid(_) => None,
        }
    }

    /// Default membership for this kind of entity
    pub fn default_groups(&self) -> Groups {
        match self {
            Entity::Asteroid(_) => Groups::ASTEROID,
            Entity::Projectile(_) => Groups::PROJECTILE,
        }
    }
}

impl Circular for Entity {
    fn body(&self) -> &CircularBody {
        match self {
            Entity::Asteroid(a) => &a.body,
            Entity::Projectile(p) => &p.body,
        }
    }

    fn body_mut(&mut self) -> &mut CircularBody {
        match self {
            Entity::Asteroid(a) => &mut a.body,
            Entity::Projectile(p) => &mut p.body,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: EntityId,
    groups: Groups,
    entity: Entity,
}

/// Sole owner of all live asteroids and projectiles
#[derive(Debug, Clone)]
pub struct Registry {
    /// Sorted by id (ids are handed out in increasing order)
    entries: Vec<Entry>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Take ownership of `entity` and place it in `groups`
    pub fn enroll(&mut self, entity: Entity, groups: Groups) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, groups, entity });
        id
    }

    pub fn enroll_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        self.enroll(Entity::Asteroid(asteroid), Groups::ASTEROID)
    }

    pub fn enroll_projectile(&mut self, projectile: Projectile) -> EntityId {
        self.enroll(Entity::Projectile(projectile), Groups::PROJECTILE)
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }

    /// Remove an entity from every group. Returns it if it was still alive.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).entity)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entries[i].entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let index = self.index_of(id)?;
        Some(&mut self.entries[index].entity)
    }

    pub fn groups_of(&self, id: EntityId) -> Option<Groups> {
        self.index_of(id).map(|i| self.entries[i].groups)
    }

    /// Members of `group`, in id order
    pub fn iter_group(&self, group: Group) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entries
            .iter()
            .filter(move |e| e.groups.contains(group))
            .map(|e| (e.id, &e.entity))
    }

    /// Ids currently in `group`; safe to iterate while enrolling or removing
    pub fn snapshot(&self, group: Group) -> Vec<EntityId> {
        self.iter_group(group).map(|(id, _)| id).collect()
    }

    pub fn count(&self, group: Group) -> usize {
        self.iter_group(group).count()
    }

    pub fn asteroids(&self) -> impl Iterator<Item = (EntityId, &Asteroid)> {
        self.iter_group(Group::Asteroids)
            .filter_map(|(id, e)| e.as_asteroid().map(|a| (id, a)))
    }

    pub fn projectiles(&self) -> impl Iterator<Item = (EntityId, &Projectile)> {
        self.iter_group(Group::Projectiles)
            .filter_map(|(id, e)| e.as_projectile().map(|p| (id, p)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
