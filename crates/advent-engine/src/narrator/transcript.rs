use advent_core::{LocationId, ObjectId};

use super::store::MessageStore;

/// One thing the game says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A numbered message.
    Message(u16),
    /// A location description.
    Location {
        /// Which location.
        id: LocationId,
        /// Long form rather than short.
        long: bool,
    },
    /// An object in a given state.
    Object {
        /// Which object.
        object: ObjectId,
        /// Display state; `-1` is the inventory name.
        state: i8,
    },
    /// Literal text.
    Text(String),
}

/// Replies collected during a turn, rendered once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    replies: Vec<Reply>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a numbered message.
    pub fn message(&mut self, id: u16) {
        self.replies.push(Reply::Message(id));
    }

    /// Record a location description.
    pub fn location(&mut self, id: LocationId, long: bool) {
        self.replies.push(Reply::Location { id, long });
    }

    /// Record an object description.
    pub fn object(&mut self, object: ObjectId, state: i8) {
        self.replies.push(Reply::Object { object, state });
    }

    /// Record literal text.
    pub fn text(&mut self, text: impl Into<String>) {
        self.replies.push(Reply::Text(text.into()));
    }

    /// Replies recorded so far.
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    /// Number of replies recorded.
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    /// Resolve every reply to text and clear the transcript.
    pub fn render(&mut self, store: &dyn MessageStore) -> Vec<String> {
        self.replies
            .drain(..)
            .filter_map(|reply| match reply {
                Reply::Message(id) => Some(store.message(id)),
                Reply::Location { id, long } => Some(store.location_text(id, long)),
                Reply::Object { object, state } => store.object_text(object, state),
                Reply::Text(text) => Some(text),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::BuiltinMessages;

    #[test]
    fn renders_in_order_and_clears() {
        let mut transcript = Transcript::new();
        transcript.message(54);
        transcript.object(ObjectId::MIRROR, 0);
        transcript.text("hello");
        transcript.location(LocationId::BUILDING, false);
        assert_eq!(transcript.len(), 4);

        let lines = transcript.render(&BuiltinMessages::new());
        assert_eq!(lines, ["OK", "hello", "You're inside building."]);
        assert!(transcript.is_empty());
    }
}
