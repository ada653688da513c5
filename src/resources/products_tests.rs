//! Tests for the products router.

use crate::{ShopClient, ShopError};
use crate::models::{InventoryUpdate, NewProduct, ProductListParams, ProductUpdate};
use crate::test_fixtures::{MockClient, RecordingSleeper, page_json, product_json};
use http::Method;
use serde_json::json;
use std::sync::Arc;

fn client(mock: &Arc<MockClient>) -> ShopClient<Arc<MockClient>, RecordingSleeper> {
    ShopClient::with_http_client(Arc::clone(mock), "sk_test")
        .with_base_url("https://api.test/v1")
        .with_sleeper(RecordingSleeper::default())
}

#[tokio::test]
async fn list_sends_only_present_filters() {
    let mock = MockClient::json(200, page_json(vec![product_json()], 1, 1, 20));

    let page = client(&mock)
        .products()
        .list(
            &ProductListParams::new()
                .with_category_id("shoes")
                .with_status("active"),
        )
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(
        req.url.as_str(),
        "https://api.test/v1/products?page=1&limit=20&category_id=shoes&status=active"
    );
    assert!(req.body.is_none());
    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].sku, "SNK-001");
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn get_escapes_the_id() {
    let mock = MockClient::json(200, product_json());

    let product = client(&mock).products().get("p/1").await.unwrap();

    assert_eq!(product.id, "p_1");
    assert_eq!(mock.last_request().url.path(), "/v1/products/p%2F1");
}

#[tokio::test]
async fn dot_ids_are_rejected_before_sending() {
    let mock = MockClient::no_content();
    let shop = client(&mock);

    for id in ["..", ".", ""] {
        let err = shop.products().delete(id).await.unwrap_err();
        assert!(matches!(err, ShopError::InvalidUrl { .. }), "{id:?}");
    }
    let err = shop.products().get("..").await.unwrap_err();
    assert!(matches!(err, ShopError::InvalidUrl { .. }));

    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn dots_inside_an_id_stay_in_one_segment() {
    let mock = MockClient::no_content();

    client(&mock).products().delete("../admin").await.unwrap();

    assert_eq!(
        mock.last_request().url.as_str(),
        "https://api.test/v1/products/..%2Fadmin"
    );
}

#[tokio::test]
async fn create_posts_product_body() {
    let mock = MockClient::json(201, product_json());

    client(&mock)
        .products()
        .create(&NewProduct::new("SNK-001", "Runner", "Shoe", 89.5, "shoes"))
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url.path(), "/v1/products");
    assert_eq!(mock.last_body()["sku"], "SNK-001");
    assert!(mock.last_body().get("compare_at_price").is_none());
}

#[tokio::test]
async fn update_puts_only_set_fields() {
    let mock = MockClient::json(200, product_json());

    client(&mock)
        .products()
        .update("p_1", &ProductUpdate::new().with_name("Runner 2"))
        .await
        .unwrap();

    assert_eq!(mock.last_request().method, Method::PUT);
    assert_eq!(mock.last_body(), json!({"name": "Runner 2"}));
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let mock = MockClient::no_content();

    client(&mock).products().delete("p_1").await.unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.url.path(), "/v1/products/p_1");
}

#[tokio::test]
async fn update_inventory_patches_quantity() {
    let mock = MockClient::no_content();

    client(&mock)
        .products()
        .update_inventory("p_1", 7)
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.url.path(), "/v1/products/p_1/inventory");
    assert_eq!(mock.last_body(), json!({"inventory": 7}));
}

#[tokio::test]
async fn bulk_create_wraps_products_and_decodes_array() {
    let mock = MockClient::json(200, json!([product_json(), product_json()]));

    let created = client(&mock)
        .products()
        .bulk_create(&[
            NewProduct::new("A", "A", "a", 1.0, "c"),
            NewProduct::new("B", "B", "b", 2.0, "c"),
        ])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(mock.last_request().url.path(), "/v1/products/bulk");
    let body = mock.last_body();
    assert_eq!(body["products"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["products"][1]["sku"], "B");
}

#[tokio::test]
async fn bulk_update_inventory_wraps_updates() {
    let mock = MockClient::json(200, json!({"updated": 2}));

    client(&mock)
        .products()
        .bulk_update_inventory(&[InventoryUpdate::new("p_1", 3), InventoryUpdate::new("p_2", 0)])
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.url.path(), "/v1/products/inventory/bulk");
    assert_eq!(
        mock.last_body(),
        json!({"updates": [{"id": "p_1", "quantity": 3}, {"id": "p_2", "quantity": 0}]})
    );
}

#[tokio::test]
async fn malformed_product_is_a_decode_error() {
    let mut body = product_json();
    body["price"] = json!(-5);
    let mock = MockClient::json(200, body);

    let err = client(&mock).products().get("p_1").await.unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn conflict_is_not_retried() {
    let mock = MockClient::json(
        409,
        json!({"code": "invalid_sku", "message": "SKU already exists"}),
    );

    let err = client(&mock)
        .products()
        .create(&NewProduct::new("SNK-001", "Runner", "Shoe", 89.5, "shoes"))
        .await
        .unwrap_err();

    assert_eq!(err.api_error().map(|e| e.code.as_str()), Some("invalid_sku"));
    assert_eq!(mock.calls(), 1);
}
