//! Integration tests against a stubbed inventory service.
//!
//! The service is stood in for by wiremock; every test asserts both the
//! mapped result and (where it matters) the exact wire traffic.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use store_client::{load_catalog, submit_purchase, CatalogScope, StoreClient};
use store_core::selection::Selection;
use store_core::types::{
    Bundle, BundleDraft, CatalogItem, ItemKind, Product, ProductDraft, PurchaseOutcome,
};

fn product(id: &str) -> CatalogItem {
    CatalogItem::Product(Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        price: 10_000,
        stock: 10,
        description: None,
    })
}

fn bundle(id: &str, product_id: &str) -> CatalogItem {
    CatalogItem::Bundle(Bundle {
        id: id.to_string(),
        name: format!("Bundle {}", id),
        price: 25_000,
        stock: 5,
        description: None,
        product_id: product_id.to_string(),
    })
}

// =============================================================================
// Purchase
// =============================================================================

#[tokio::test]
async fn purchase_success_returns_server_settled_total() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalCost": 15000})))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let mut selection = Selection::new();
    selection.toggle(&product("P1"));

    let outcome = submit_purchase(&client, &selection, None).await;
    assert_eq!(outcome, PurchaseOutcome::Success { total_cost: 15000 });
}

#[tokio::test]
async fn purchase_payload_matches_selection_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .and(body_json(json!({
            "products": [{"id": "P1", "quantity": 2}],
            "bundles": [{"id": "B1", "quantity": 3}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalCost": 95000})))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let mut selection = Selection::new();
    selection.toggle(&product("P1"));
    selection.toggle(&bundle("B1", "P1"));
    selection.set_quantity(ItemKind::Product, "P1", "2");
    selection.set_quantity(ItemKind::Bundle, "B1", "3");

    let outcome = submit_purchase(&client, &selection, None).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn anchor_product_is_prepended_with_quantity_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .and(body_json(json!({
            "products": [{"id": "P9", "quantity": 1}],
            "bundles": [{"id": "B1", "quantity": 3}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalCost": 75000})))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let mut selection = Selection::new();
    selection.toggle(&bundle("B1", "P9"));
    selection.set_quantity(ItemKind::Bundle, "B1", "3");

    let outcome = submit_purchase(&client, &selection, Some("P9")).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn server_rejection_message_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Out of stock"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let mut selection = Selection::new();
    selection.toggle(&product("P1"));

    let outcome = submit_purchase(&client, &selection, None).await;
    assert_eq!(
        outcome,
        PurchaseOutcome::Failure {
            message: "Failed to process purchase: Out of stock".to_string()
        }
    );
}

#[tokio::test]
async fn rejection_without_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let mut selection = Selection::new();
    selection.toggle(&product("P1"));

    let outcome = submit_purchase(&client, &selection, None).await;
    assert_eq!(
        outcome,
        PurchaseOutcome::Failure {
            message: "Failed to process purchase".to_string()
        }
    );
}

#[tokio::test]
async fn empty_selection_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalCost": 0})))
        .expect(0)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let outcome = submit_purchase(&client, &Selection::new(), None).await;

    assert_eq!(
        outcome,
        PurchaseOutcome::Failure {
            message: "No bundles/products selected for purchase".to_string()
        }
    );
    // Dropping `server` verifies the expect(0) on the purchase route.
}

// =============================================================================
// Catalog Loading
// =============================================================================

#[tokio::test]
async fn full_catalog_loads_both_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Coffee", "price": 12000, "stock": 9},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bundles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b1", "name": "Coffee + Mug", "price": 20000, "stock": 3, "product_id": "p1"},
        ])))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let catalog = load_catalog(&client, &CatalogScope::Full).await;

    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.bundles.len(), 1);
    assert_eq!(catalog.bundles[0].product_id, "p1");
}

#[tokio::test]
async fn failed_bundle_fetch_degrades_to_empty_without_losing_products() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Coffee", "price": 12000, "stock": 9},
            {"id": "p2", "name": "Tea", "price": 8000, "stock": 4},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bundles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let catalog = load_catalog(&client, &CatalogScope::Full).await;

    assert_eq!(catalog.products.len(), 2);
    assert!(catalog.bundles.is_empty());
}

#[tokio::test]
async fn scoped_catalog_filters_bundles_to_the_anchor_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Coffee", "price": 12000, "stock": 9},
        ])))
        .mount(&server)
        .await;
    // No product-scoped bundle route exists; the client filters /bundles.
    Mock::given(method("GET"))
        .and(path("/bundles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b1", "name": "Coffee + Mug", "price": 20000, "stock": 3, "product_id": "p1"},
            {"id": "b2", "name": "Tea Sampler", "price": 15000, "stock": 7, "product_id": "p2"},
        ])))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let catalog = load_catalog(&client, &CatalogScope::ForProduct("p1".to_string())).await;

    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.products[0].id, "p1");
    assert_eq!(catalog.bundles.len(), 1);
    assert_eq!(catalog.bundles[0].id, "b1");
}

// =============================================================================
// Item Fetch & CRUD
// =============================================================================

#[tokio::test]
async fn get_product_takes_element_zero_of_the_answer_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Coffee", "price": 12000, "stock": 9},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());

    let found = client.get_product("p1").await.unwrap();
    assert_eq!(found.unwrap().name, "Coffee");

    let missing = client.get_product("missing").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn create_product_posts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({
            "name": "Coffee Beans 1kg",
            "price": 120000,
            "stock": 25,
            "description": "Single origin arabica",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = ProductDraft {
        name: "Coffee Beans 1kg".to_string(),
        price: 120000,
        stock: 25,
        description: "Single origin arabica".to_string(),
    };

    client.create_product(&draft).await.unwrap();
}

#[tokio::test]
async fn update_product_puts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/p1"))
        .and(body_json(json!({
            "name": "Coffee Beans 1kg",
            "price": 130000,
            "stock": 20,
            "description": "Single origin arabica",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = ProductDraft {
        name: "Coffee Beans 1kg".to_string(),
        price: 130000,
        stock: 20,
        description: "Single origin arabica".to_string(),
    };

    client.update_product("p1", &draft).await.unwrap();
}

#[tokio::test]
async fn create_bundle_posts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bundles"))
        .and(body_json(json!({
            "name": "Starter Pack",
            "product_id": "p1",
            "price": 150000,
            "stock": 5,
            "description": "Beans plus grinder",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = BundleDraft {
        name: "Starter Pack".to_string(),
        product_id: "p1".to_string(),
        price: 150000,
        stock: 5,
        description: "Beans plus grinder".to_string(),
    };

    client.create_bundle(&draft).await.unwrap();
}

#[tokio::test]
async fn update_bundle_puts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/bundles/b1"))
        .and(body_json(json!({
            "name": "Starter Pack",
            "product_id": "p1",
            "price": 140000,
            "stock": 8,
            "description": "Beans plus grinder",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = BundleDraft {
        name: "Starter Pack".to_string(),
        product_id: "p1".to_string(),
        price: 140000,
        stock: 8,
        description: "Beans plus grinder".to_string(),
    };

    client.update_bundle("b1", &draft).await.unwrap();
}

#[tokio::test]
async fn get_bundle_takes_element_zero_of_the_answer_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bundles/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b1", "name": "Coffee + Mug", "price": 20000, "stock": 3, "product_id": "p1"},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bundles/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());

    let found = client.get_bundle("b1").await.unwrap();
    assert_eq!(found.unwrap().product_id, "p1");

    let missing = client.get_bundle("missing").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn invalid_product_draft_never_reaches_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = ProductDraft {
        name: "".to_string(),
        price: -5,
        stock: 1,
        description: "x".to_string(),
    };

    let err = client.create_product(&draft).await.unwrap_err();
    assert_eq!(err.to_string(), "name is required");
}

#[tokio::test]
async fn invalid_bundle_draft_never_reaches_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/bundles/b1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri());
    let draft = BundleDraft {
        name: "Starter Pack".to_string(),
        product_id: "".to_string(),
        price: 150000,
        stock: 5,
        description: "Beans plus grinder".to_string(),
    };

    let err = client.update_bundle("b1", &draft).await.unwrap_err();
    assert_eq!(err.to_string(), "id is required");
}
