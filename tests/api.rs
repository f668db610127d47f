use chrono::NaiveDate;
use ugent_food::{
    api::{ApiClient, ApiError},
    i18n::Language,
    menu::{MealKind, MealType},
};
use wiremock::{
    matchers::{header_regex, method, path},
    Mock, MockServer, ResponseTemplate,
};

const MENU_JSON: &str = r#"{
    "date": "2026-10-26",
    "open": true,
    "meals": [
        {"kind": "soup", "name": "Carrot soup: 350 ml", "price": "1,00", "type": "side"},
        {"kind": "meat", "name": "Beef stew", "price": "€ 5,60", "type": "main"},
        {"kind": "dessert", "name": "Pudding", "price": "1,20", "type": "main"}
    ],
    "vegetables": ["Carrots"],
    "message": null
}"#;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
}

#[tokio::test]
async fn fetches_and_normalizes_menu() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resto/menu/nl/2026/10/26.json"))
        .and(header_regex("user-agent", r"^ugent-food \(v.+\)$"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MENU_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let menu = client.fetch_menu(monday(), Language::Dutch).await.unwrap();

    assert!(menu.is_open());
    assert_eq!(menu.meals().len(), 3);
    assert_eq!(menu.meals()[0].price(), "€ 1,00");
    assert_eq!(menu.meals()[1].price(), "€ 5,60");
    assert_eq!(menu.meals()[2].kind(), &MealKind::Other("dessert".into()));
    assert_eq!(menu.meals()[2].meal_type(), &MealType::Main);
    assert_eq!(menu.vegetables(), ["Carrots"]);
    assert_eq!(menu.message(), None);
}

#[tokio::test]
async fn missing_menu_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.fetch_menu(monday(), Language::English).await.unwrap_err();

    assert!(matches!(err, ApiError::NoMenuFound(date) if date == monday()));
    assert_eq!(err.to_string(), "No menu found for 26/10/2026.");
}

#[tokio::test]
async fn server_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.fetch_menu(monday(), Language::English).await.unwrap_err();

    assert!(matches!(err, ApiError::Status(503)));
}

#[tokio::test]
async fn malformed_body_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.fetch_menu(monday(), Language::English).await.unwrap_err();

    assert!(matches!(err, ApiError::Request(_)));
}

#[tokio::test]
async fn fetches_sandwiches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resto/sandwiches.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"name": "brie", "ingredients": ["brie", "honing"], "price_small": "€ 2,60", "price_medium": "€ 3,90"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri())).unwrap();
    let sandwiches = client.fetch_sandwiches().await.unwrap();

    assert_eq!(sandwiches.len(), 1);
    assert_eq!(sandwiches[0].name, "brie");
    assert_eq!(sandwiches[0].ingredients, ["brie", "honing"]);
}
