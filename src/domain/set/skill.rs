//! Skill entity - a named, votable item owned by a custom set.

use serde::{Deserialize, Serialize};

use super::{SetError, Tag};
use crate::domain::foundation::SkillId;

/// A skill inside a custom set.
///
/// Skills never exist outside their parent set and are addressed through
/// it. Names are stored trimmed but keep their original casing; the
/// parent enforces case-insensitive name uniqueness via [`name_matches`].
///
/// [`name_matches`]: Skill::name_matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    id: SkillId,
    name: String,
    votes: u32,
    tags: Vec<Tag>,
}

impl Skill {
    /// Creates a new skill with no tags.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name trims to empty
    pub fn new(id: SkillId, name: &str, votes: u32) -> Result<Self, SetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SetError::validation("name", "Skill name cannot be empty"));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
            votes,
            tags: Vec::new(),
        })
    }

    /// Returns the skill ID.
    pub fn id(&self) -> &SkillId {
        &self.id
    }

    /// Returns the skill name (trimmed, original casing).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current vote count.
    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Returns the normalized tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Case-insensitive name comparison against raw input (trimmed first).
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.trim().to_lowercase()
    }

    /// Sets the vote count to an absolute value.
    pub fn set_votes(&mut self, votes: u32) {
        self.votes = votes;
    }

    /// Checks whether the normalized tag is already present.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Appends a normalized tag.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the tag is already present
    pub fn add_tag(&mut self, tag: Tag) -> Result<(), SetError> {
        if self.has_tag(&tag) {
            return Err(SetError::conflict(format!(
                "Tag '{}' already exists on this skill",
                tag
            )));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Removes a normalized tag.
    ///
    /// # Errors
    ///
    /// - `TagNotFound` if the tag is not present
    pub fn remove_tag(&mut self, tag: &Tag) -> Result<(), SetError> {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                Ok(())
            }
            None => Err(SetError::tag_not_found(tag.as_str())),
        }
    }
}
