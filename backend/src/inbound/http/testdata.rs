//! Smoke endpoint returning a fixed JSON string.

use actix_web::{get, web};

/// Body returned by `GET /testdata`.
pub const TEST_DATA: &str = "Test Data";

/// Return the JSON string `"Test Data"` without touching the store.
#[utoipa::path(
    get,
    path = "/testdata",
    responses((status = 200, description = "Fixed smoke payload", body = String)),
    tags = ["smoke"],
    operation_id = "testData"
)]
#[get("/testdata")]
pub async fn test_data() -> web::Json<&'static str> {
    web::Json(TEST_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn returns_json_string() {
        let app = actix_test::init_service(App::new().service(test_data)).await;
        let req = actix_test::TestRequest::get().uri("/testdata").to_request();
        let body: String = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, TEST_DATA);
    }
}
