use std::cell::RefCell;

use crate::error::Result;
use crate::github::ProfileSource;
use crate::identity::UserProfile;

/// Profile source that always returns the same profile.
pub struct StaticProfileSource {
    profile: UserProfile,
    requests: RefCell<Vec<Option<String>>>,
}

impl StaticProfileSource {
    pub fn new(profile: UserProfile) -> Self {
        StaticProfileSource {
            profile,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Actors that were asked for, in call order.
    pub fn requests(&self) -> Vec<Option<String>> {
        self.requests.borrow().clone()
    }
}

impl ProfileSource for StaticProfileSource {
    fn fetch_profile(&self, actor: Option<&str>) -> Result<UserProfile> {
        self.requests.borrow_mut().push(actor.map(String::from));
        Ok(self.profile.clone())
    }
}
