//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{MannahCommand, MannahQuery, UsersCommand, UsersQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub mannah: Arc<dyn MannahQuery>,
    pub mannah_command: Arc<dyn MannahCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub mannah: Arc<dyn MannahQuery>,
    pub mannah_command: Arc<dyn MannahCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```ignore
    /// use std::sync::Arc;
    ///
    /// use mannah::domain::{MannahService, UserService};
    /// use mannah::inbound::http::state::{HttpState, HttpStatePorts};
    /// use mannah::test_support::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let users = Arc::new(UserService::new(store.clone()));
    /// let mannah = Arc::new(MannahService::new(store));
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: users.clone(),
    ///     users_command: users,
    ///     mannah: mannah.clone(),
    ///     mannah_command: mannah,
    /// });
    /// let _users = state.users.clone();
    /// ```
    #[must_use]
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_command,
            mannah,
            mannah_command,
        } = ports;
        Self {
            users,
            users_command,
            mannah,
            mannah_command,
        }
    }
}
