//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST path from the inbound layer together with
//! the domain schemas they reference. The document is served as JSON at
//! `/api-docs/openapi.json` and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Mannah, User};
use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::mannah::MannahRequest;
use crate::inbound::http::users::{DeleteConfirmation, UserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mannah API",
        description = "Users and the notes of thanks they send each other."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::mannah::list_mannah,
        crate::inbound::http::mannah::send_mannah,
        crate::inbound::http::testdata::test_data,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserRequest,
        DeleteConfirmation,
        Mannah,
        MannahRequest,
        Error,
        ErrorCode,
        ProbeStatus
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "mannah", description = "Notes sent between users"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "smoke", description = "Fixed responses for connectivity checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI paths and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", "code")]
    #[case("Error", "message")]
    #[case("User", "email")]
    #[case("Mannah", "fromUser")]
    #[case("Mannah", "toUser")]
    fn schemas_use_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    #[case("/mannah/{userId}")]
    #[case("/testdata")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
