use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::user::User;

/// Ordered collection of users, as handed to privilege callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Users(Vec<User>);

impl Users {
    pub fn new(users: Vec<User>) -> Self {
        Self(users)
    }

    /// Decode a JSON array of user records, validating each one.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<User> = serde_json::from_str(json)?;
        let users = raw
            .into_iter()
            .map(User::validated)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(users))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(&self, login_name: &str) -> Option<&User> {
        self.0.iter().find(|u| u.login_name == login_name)
    }

    pub fn find_mut(&mut self, login_name: &str) -> Option<&mut User> {
        self.0.iter_mut().find(|u| u.login_name == login_name)
    }

    /// Number of users currently holding system administrator privilege.
    pub fn admin_count(&self) -> usize {
        self.0.iter().filter(|u| u.is_admin()).count()
    }

    pub fn login_names(&self) -> Vec<&str> {
        self.0.iter().map(|u| u.login_name.as_str()).collect()
    }
}

impl From<User> for Users {
    fn from(user: User) -> Self {
        Self(vec![user])
    }
}

impl From<Vec<User>> for Users {
    fn from(users: Vec<User>) -> Self {
        Self(users)
    }
}

impl<'a> IntoIterator for &'a Users {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
