use crate::core::participant::Participant;
use crate::core::types::Role;

/// An ordered roster of participants for one side of the pairing.
///
/// Row order from the source file is the identity: the participant at
/// index `i` has identifier `i` for the lifetime of the run. Enumeration
/// order is also the tie-break order used by the preference builder, so
/// the roster never reorders its entries.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Which side this roster represents
    pub role: Role,

    /// Participants in file order
    pub participants: Vec<Participant>,
}

impl Roster {
    #[must_use]
    pub fn new(role: Role, participants: Vec<Participant>) -> Self {
        Self { role, participants }
    }

    #[must_use]
    pub fn empty(role: Role) -> Self {
        Self {
            role,
            participants: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    /// Display name for a participant, falling back to the positional
    /// identifier when the roster had no usable name.
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        match self.get(index) {
            Some(p) if !p.name.is_empty() => p.name.clone(),
            _ => format!("{} #{index}", self.role),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }
}
