use std::sync::{Mutex, MutexGuard};

use crate::session::Session;

/// Shared application state managed by the Tauri shell. The session lives
/// behind one mutex; commands take the guard only for synchronous reads and
/// writes and never hold it across an await.
pub struct AppState {
  session: Mutex<Session>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      session: Mutex::new(Session::new()),
    }
  }

  pub fn session(&self) -> MutexGuard<'_, Session> {
    self.session.lock().expect("session mutex poisoned")
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}
