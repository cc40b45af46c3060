//! People roster
//!
//! Members join the bill by name; names are trimmed and must be unique
//! case-insensitively. The summary lifecycle status on each person is
//! advanced by the consumer of the summaries (the UI), never by the
//! calculator itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::PersonId;

use crate::error::SplitError;

/// Lifecycle of a member's interaction with the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonStatus {
    /// Still picking items
    #[default]
    Selecting,
    /// Has viewed their summary
    Viewed,
    /// Has pinged the payer that their share is settled
    Pinged,
}

/// A member of the bill-splitting group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub status: PersonStatus,
}

/// Ordered collection of people, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    /// Rebuilds a roster from persisted people
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Members in join order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Consumes the roster, yielding its members
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }

    /// Looks up a member by id
    pub fn person(&self, person_id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == person_id)
    }

    fn person_mut(&mut self, person_id: &PersonId) -> Result<&mut Person, SplitError> {
        self.people
            .iter_mut()
            .find(|p| &p.id == person_id)
            .ok_or(SplitError::PersonNotFound(*person_id))
    }

    /// Adds a member
    ///
    /// # Errors
    ///
    /// - [`SplitError::EmptyPersonName`] when the name trims to nothing
    /// - [`SplitError::DuplicatePersonName`] on a case-insensitive clash
    pub fn add_person(&mut self, name: impl Into<String>) -> Result<PersonId, SplitError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(SplitError::EmptyPersonName);
        }
        let clash = self
            .people
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(trimmed));
        if clash {
            debug!(name = %trimmed, "duplicate person name");
            return Err(SplitError::DuplicatePersonName(trimmed.to_string()));
        }

        let person = Person {
            id: PersonId::new_v7(),
            name: trimmed.to_string(),
            status: PersonStatus::Selecting,
        };
        let id = person.id;
        self.people.push(person);
        Ok(id)
    }

    /// Removes a member
    pub fn remove_person(&mut self, person_id: &PersonId) -> Result<(), SplitError> {
        let position = self
            .people
            .iter()
            .position(|p| &p.id == person_id)
            .ok_or(SplitError::PersonNotFound(*person_id))?;
        self.people.remove(position);
        Ok(())
    }

    /// Records that a member has viewed their summary
    ///
    /// Does not downgrade a member who has already pinged the payer.
    pub fn mark_viewed(&mut self, person_id: &PersonId) -> Result<(), SplitError> {
        let person = self.person_mut(person_id)?;
        if person.status == PersonStatus::Selecting {
            person.status = PersonStatus::Viewed;
        }
        Ok(())
    }

    /// Records that a member has pinged the payer
    pub fn mark_pinged(&mut self, person_id: &PersonId) -> Result<(), SplitError> {
        let person = self.person_mut(person_id)?;
        person.status = PersonStatus::Pinged;
        Ok(())
    }
}
