//! Static-directory credential check.
//!
//! A single shared password gates access for everyone; the user directory
//! only selects the display identity, it grants nothing. Both come from
//! configuration and are read-only for the life of the process.

use serde::{Deserialize, Serialize};

/// Identity record from the static directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub username:  String,
  pub full_name: String,
}

/// The static user directory plus the shared password.
#[derive(Debug, Clone)]
pub struct Directory {
  password: String,
  users:    Vec<User>,
}

impl Directory {
  pub fn new(password: impl Into<String>, users: Vec<User>) -> Self {
    Self { password: password.into(), users }
  }

  /// Check a submitted credential pair.
  ///
  /// Fails closed on a password mismatch before any username lookup. On a
  /// match, the username is resolved case-insensitively against the
  /// directory. `None` never distinguishes a wrong password from an unknown
  /// user.
  ///
  /// Note the returned record carries the directory's stored spelling of
  /// the username — vote rows are keyed by that, case-sensitively.
  pub fn verify(&self, username: &str, password: &str) -> Option<&User> {
    if password != self.password {
      return None;
    }
    let wanted = username.to_lowercase();
    self.users.iter().find(|u| u.username.to_lowercase() == wanted)
  }

  /// Every user in the directory.
  pub fn all_users(&self) -> &[User] {
    &self.users
  }
}
