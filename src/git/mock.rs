use std::cell::RefCell;

use crate::error::Result;
use crate::git::IdentityStore;
use crate::identity::Identity;

/// Identity store that keeps what it was given in memory
#[derive(Default)]
pub struct MockIdentityStore {
    written: RefCell<Vec<Identity>>,
}

impl MockIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identities written so far, oldest first
    pub fn written(&self) -> Vec<Identity> {
        self.written.borrow().clone()
    }
}

impl IdentityStore for MockIdentityStore {
    fn set_identity(&self, identity: &Identity) -> Result<()> {
        self.written.borrow_mut().push(identity.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_identity_store() {
        let store = MockIdentityStore::new();
        assert!(store.written().is_empty());

        let identity = Identity {
            name: "a".to_string(),
            email: "a@example.com".to_string(),
        };
        store.set_identity(&identity).unwrap();
        assert_eq!(store.written(), vec![identity]);
    }
}
