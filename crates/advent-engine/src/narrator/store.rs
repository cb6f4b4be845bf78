//! Text lookup for messages, locations and objects.

use std::collections::HashMap;

use advent_core::{LocationId, ObjectId};

use super::texts::{LOCATIONS, MESSAGES, OBJECTS};

/// Source of all displayable text.
///
/// Lookups never fail. Unknown ids give a placeholder.
pub trait MessageStore {
    /// A numbered message.
    fn message(&self, id: u16) -> String;

    /// Long or short description of a location.
    fn location_text(&self, loc: LocationId, long: bool) -> String;

    /// Description of an object in a state. State `-1` is the inventory name.
    /// `None` when the state has nothing to say.
    fn object_text(&self, obj: ObjectId, state: i8) -> Option<String>;
}

/// The classic game text, compiled in.
#[derive(Debug, Clone)]
pub struct BuiltinMessages {
    messages: HashMap<u16, &'static str>,
    locations: HashMap<u8, (&'static str, &'static str)>,
    objects: HashMap<(u8, i8), &'static str>,
}

impl BuiltinMessages {
    /// Index the built-in tables.
    pub fn new() -> Self {
        Self {
            messages: MESSAGES.iter().copied().collect(),
            locations: LOCATIONS
                .iter()
                .map(|&(id, long, short)| (id, (long, short)))
                .collect(),
            objects: OBJECTS
                .iter()
                .map(|&(obj, state, text)| ((obj, state), text))
                .collect(),
        }
    }
}

impl Default for BuiltinMessages {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for BuiltinMessages {
    fn message(&self, id: u16) -> String {
        match self.messages.get(&id) {
            Some(text) => (*text).to_string(),
            None => format!("[Message {id} not found]"),
        }
    }

    fn location_text(&self, loc: LocationId, long: bool) -> String {
        match self.locations.get(&loc.raw()) {
            Some((text, short)) if long || short.is_empty() => (*text).to_string(),
            Some((_, short)) => (*short).to_string(),
            None => format!("[Location {loc} description not found]"),
        }
    }

    fn object_text(&self, obj: ObjectId, state: i8) -> Option<String> {
        self.objects
            .get(&(obj.raw(), state))
            .map(|text| (*text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_messages() {
        let store = BuiltinMessages::new();
        assert_eq!(store.message(54), "OK");
        assert_eq!(store.message(999), "[Message 999 not found]");
    }

    #[test]
    fn short_text_falls_back_to_long() {
        let store = BuiltinMessages::new();
        assert_eq!(
            store.location_text(LocationId::BUILDING, false),
            "You're inside building."
        );
        let loc = LocationId::new(12).unwrap();
        assert_eq!(
            store.location_text(loc, false),
            store.location_text(loc, true)
        );
        let unmapped = LocationId::new(60).unwrap();
        assert_eq!(
            store.location_text(unmapped, true),
            "[Location 60 description not found]"
        );
    }

    #[test]
    fn object_states() {
        let store = BuiltinMessages::new();
        assert_eq!(
            store.object_text(ObjectId::LAMP, -1).as_deref(),
            Some("Brass lantern")
        );
        assert_eq!(
            store.object_text(ObjectId::LAMP, 1).as_deref(),
            Some("There is a lamp shining nearby.")
        );
        assert_eq!(store.object_text(ObjectId::MIRROR, 0), None);
    }

    #[test]
    fn every_table_entry_is_unique() {
        let store = BuiltinMessages::new();
        assert_eq!(store.messages.len(), MESSAGES.len());
        assert_eq!(store.locations.len(), LOCATIONS.len());
        assert_eq!(store.objects.len(), OBJECTS.len());
    }
}
