//! CustomSet aggregate entity.
//!
//! A custom set is the aggregate root for skills: skills are created,
//! mutated, and removed only through their parent set, which enforces
//! case-insensitive skill-name uniqueness and tag deduplication.
//!
//! # Ownership
//!
//! Every set belongs to exactly one user. The owner filter itself is
//! applied at the repository boundary (`find` takes both owner and set
//! id), so an aggregate in memory is always one the caller may touch.

use super::{SetError, Skill, Tag};
use crate::domain::foundation::{SetId, SkillId, Timestamp, UserId};

/// Custom set aggregate - a named, owner-scoped collection of skills.
///
/// # Invariants
///
/// - `name` is non-empty (stored trimmed)
/// - skill names are unique within the set under case-insensitive,
///   trimmed comparison
/// - `skills` preserves insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSet {
    id: SetId,
    owner_id: UserId,
    name: String,
    skills: Vec<Skill>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CustomSet {
    /// Creates a new empty set.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name trims to empty
    pub fn new(id: SetId, owner_id: UserId, name: &str) -> Result<Self, SetError> {
        let name = Self::validate_name(name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            name,
            skills: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a set from persistence (no validation).
    pub fn reconstitute(
        id: SetId,
        owner_id: UserId,
        name: String,
        skills: Vec<Skill>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            skills,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the set ID.
    pub fn id(&self) -> &SetId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the skills in insertion order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Returns the skill with the given id, if present.
    pub fn skill(&self, skill_id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id() == skill_id)
    }

    /// Returns when the set was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the set was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the set.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name trims to empty
    pub fn rename(&mut self, name: &str) -> Result<(), SetError> {
        self.name = Self::validate_name(name)?;
        self.touch();
        Ok(())
    }

    /// Append a new skill with the given initial vote count and no tags.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name trims to empty
    /// - `Conflict` if a skill with that name (case-insensitive) exists
    pub fn add_skill(&mut self, name: &str, votes: u32) -> Result<SkillId, SetError> {
        if self.skills.iter().any(|s| s.name_matches(name)) {
            return Err(SetError::conflict(format!(
                "A skill named '{}' already exists in this set",
                name.trim()
            )));
        }

        let skill_id = SkillId::new();
        let skill = Skill::new(skill_id, name, votes)?;
        self.skills.push(skill);
        self.touch();
        Ok(skill_id)
    }

    /// Remove exactly the skill with the given id.
    ///
    /// # Errors
    ///
    /// - `SkillNotFound` if no such skill exists in this set
    pub fn remove_skill(&mut self, skill_id: &SkillId) -> Result<Skill, SetError> {
        match self.skills.iter().position(|s| s.id() == skill_id) {
            Some(pos) => {
                let removed = self.skills.remove(pos);
                self.touch();
                Ok(removed)
            }
            None => Err(SetError::skill_not_found(*skill_id)),
        }
    }

    /// Set a skill's vote count to an absolute value.
    ///
    /// # Errors
    ///
    /// - `SkillNotFound` if no such skill exists in this set
    pub fn set_skill_votes(&mut self, skill_id: &SkillId, votes: u32) -> Result<(), SetError> {
        self.skill_mut(skill_id)?.set_votes(votes);
        self.touch();
        Ok(())
    }

    /// Append a normalized tag to a skill.
    ///
    /// # Errors
    ///
    /// - `SkillNotFound` if no such skill exists in this set
    /// - `Conflict` if the tag is already present on the skill
    pub fn add_skill_tag(&mut self, skill_id: &SkillId, tag: Tag) -> Result<(), SetError> {
        self.skill_mut(skill_id)?.add_tag(tag)?;
        self.touch();
        Ok(())
    }

    /// Remove a normalized tag from a skill.
    ///
    /// # Errors
    ///
    /// - `SkillNotFound` if no such skill exists in this set
    /// - `TagNotFound` if the tag is not present on the skill
    pub fn remove_skill_tag(&mut self, skill_id: &SkillId, tag: &Tag) -> Result<(), SetError> {
        self.skill_mut(skill_id)?.remove_tag(tag)?;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn skill_mut(&mut self, skill_id: &SkillId) -> Result<&mut Skill, SetError> {
        self.skills
            .iter_mut()
            .find(|s| s.id() == skill_id)
            .ok_or_else(|| SetError::skill_not_found(*skill_id))
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn validate_name(name: &str) -> Result<String, SetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SetError::validation("name", "Name cannot be empty"));
        }
        Ok(trimmed.to_string())
    }
}
