//! Builders wiring repositories into services and HTTP state.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{MannahRepository, UserRepository};
use crate::domain::{MannahService, UserService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{DbPool, DieselMannahRepository, DieselUserRepository};

/// Build handler state over any user and mannah repositories.
///
/// Each service instance backs both its query and command port.
#[must_use]
pub fn build_http_state<U, M>(users: Arc<U>, mannah: Arc<M>) -> web::Data<HttpState>
where
    U: UserRepository + 'static,
    M: MannahRepository + 'static,
{
    let users = Arc::new(UserService::new(users));
    let mannah = Arc::new(MannahService::new(mannah));
    web::Data::new(HttpState::new(HttpStatePorts {
        users: users.clone(),
        users_command: users,
        mannah: mannah.clone(),
        mannah_command: mannah,
    }))
}

/// Build handler state backed by the Diesel repositories.
#[must_use]
pub fn build_diesel_http_state(pool: &DbPool) -> web::Data<HttpState> {
    build_http_state(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselMannahRepository::new(pool.clone())),
    )
}
