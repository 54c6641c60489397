use crate::constants::{BOOTSTRAP_TURN_ID, WELCOME_MESSAGE};
use crate::types::{Role, Turn, TurnId, now_millis};

/// Append-only log of turns; the order here is both display and transcript order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageStore {
    turns: Vec<Turn>,
}

impl MessageStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with the greeting every session starts from.
    pub fn with_bootstrap() -> Self {
        Self {
            turns: vec![bootstrap_turn()],
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn position(&self, id: &TurnId) -> Option<usize> {
        self.turns.iter().position(|turn| &turn.id == id)
    }

    pub fn get(&self, id: &TurnId) -> Option<&Turn> {
        self.position(id).map(|idx| &self.turns[idx])
    }
}

pub fn bootstrap_turn() -> Turn {
    Turn {
        id: TurnId::new(BOOTSTRAP_TURN_ID),
        role: Role::Model,
        text: WELCOME_MESSAGE.to_string(),
        attachment: None,
        timestamp: now_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_store_holds_greeting() {
        let store = MessageStore::with_bootstrap();
        assert_eq!(store.len(), 1);
        let first = &store.all()[0];
        assert!(first.is_model());
        assert_eq!(first.id.as_str(), BOOTSTRAP_TURN_ID);
    }

    #[test]
    fn appends_preserve_order_and_lookup() {
        let mut store = MessageStore::empty();
        let a = Turn::user("first", None);
        let b = Turn::model("second");
        store.append(a.clone());
        store.append(b.clone());

        let texts: Vec<_> = store.all().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(store.position(&b.id), Some(1));
        assert_eq!(store.get(&a.id).map(|t| t.role), Some(Role::User));
        assert!(store.get(&TurnId::new("missing")).is_none());
    }
}
