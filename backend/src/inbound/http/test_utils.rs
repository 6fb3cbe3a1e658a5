//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};

use crate::domain::ports::{MockMannahCommand, MockMannahQuery, MockUsersCommand, MockUsersQuery};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{configure, route_not_found};

/// Mocked driving ports; set expectations before calling [`init_app`].
#[derive(Default)]
pub(crate) struct MockPorts {
    pub users: MockUsersQuery,
    pub users_command: MockUsersCommand,
    pub mannah: MockMannahQuery,
    pub mannah_command: MockMannahCommand,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            users: Arc::new(self.users),
            users_command: Arc::new(self.users_command),
            mannah: Arc::new(self.mannah),
            mannah_command: Arc::new(self.mannah_command),
        })
    }
}

/// Initialise the REST routes over mocked ports.
pub(crate) async fn init_app(
    ports: MockPorts,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure)
            .default_service(web::to(route_not_found)),
    )
    .await
}
