use super::*;
use serde_json::json;
use storefront_sdk::types::{Node, ProductSortKeys, QueryRoot, QueryRootQuery};
use storefront_sdk::{Id, QueryBuilder, ResponseView, StorefrontError};

// ── shop ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn shop_query_sends_expected_document() {
    let (server, client) = setup(json!({
        "shop": {"name": "Test Shop", "currencyCode": "USD"}
    }))
    .await;

    let query = QueryRootQuery::new().shop(|shop| shop.name().currency_code());
    let _ = client.query(&query).await;

    let document = sent_document(&server.received_requests().await.unwrap());
    assert_eq!(document, "query{shop{name,currencyCode}}");
}

#[tokio::test]
async fn shop_query_decodes_typed_values() {
    let (_server, client) = setup(json!({
        "shop": {"name": "Test Shop", "description": null, "currencyCode": "EUR"}
    }))
    .await;

    let query = QueryRootQuery::new().shop(|shop| shop.name().description().currency_code());
    let data = client.query(&query).await.unwrap();
    let shop = QueryRoot::from_object(&data).shop().unwrap();

    assert_eq!(shop.name().unwrap(), "Test Shop");
    assert_eq!(shop.description().unwrap(), None);
    assert_eq!(
        shop.currency_code().unwrap(),
        storefront_sdk::types::CurrencyCode::Eur
    );
}

// ── products connection ─────────────────────────────────────────────────────

#[tokio::test]
async fn products_query_renders_arguments_and_decodes_pagination() {
    let (server, client) = setup(json!({
        "shop": {
            "products": {
                "nodes": [
                    {"id": "gid://shop/Product/1", "title": "Arena Zip Boot", "handle": "arena-zip-boot"},
                    {"id": "gid://shop/Product/2", "title": "Pin Boot", "handle": "pin-boot"},
                ],
                "pageInfo": {"hasNextPage": true, "hasPreviousPage": false},
            },
        },
    }))
    .await;

    let query = QueryRootQuery::new().shop(|shop| {
        shop.products(None, 2, Some(ProductSortKeys::Title), None, |products| {
            products
                .nodes(|product| product.id().title().handle())
                .page_info(|page| page.has_next_page().has_previous_page())
        })
    });
    let data = client.query(&query).await.unwrap();

    let document = sent_document(&server.received_requests().await.unwrap());
    assert_eq!(
        document,
        "query{shop{products(first:2,sortKey:TITLE)\
         {nodes{id,title,handle},pageInfo{hasNextPage,hasPreviousPage}}}}"
    );

    let products = QueryRoot::from_object(&data).shop().unwrap().products().unwrap();
    let nodes = products.nodes().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].handle().unwrap(), "arena-zip-boot");
    assert!(products.page_info().unwrap().has_next_page().unwrap());
    assert!(!products.page_info().unwrap().has_previous_page().unwrap());
}

// ── node interface ──────────────────────────────────────────────────────────

#[tokio::test]
async fn node_checkout_with_aliased_line_items() {
    let (server, client) = setup(json!({
        "node": {
            "__typename": "Checkout",
            "id": "gid://shop/Checkout/abc",
            "lineItems__firstTen": [
                {"id": "gid://shop/CheckoutLineItem/1", "title": "A", "quantity": 1},
                {"id": "gid://shop/CheckoutLineItem/2", "title": "B", "quantity": 2},
            ],
            "lineItems__lastTen": [
                {"id": "gid://shop/CheckoutLineItem/99", "title": "Z", "quantity": 1},
            ],
        },
    }))
    .await;

    let id = Id::new("gid://shop/Checkout/abc");
    let query = QueryRootQuery::new().node(None, &id, |node| {
        node.on_checkout(|checkout| {
            checkout
                .line_items(Some("firstTen"), 10, None, |items| {
                    items.id().title().quantity()
                })
                .line_items(Some("lastTen"), 10, Some("cursor-90"), |items| {
                    items.id().title().quantity()
                })
        })
    });
    let data = client.query(&query).await.unwrap();

    let document = sent_document(&server.received_requests().await.unwrap());
    assert_eq!(
        document,
        "query{node(id:\"gid://shop/Checkout/abc\"){__typename,id,...on Checkout{\
         lineItems__firstTen:lineItems(first:10){id,title,quantity},\
         lineItems__lastTen:lineItems(first:10,after:\"cursor-90\"){id,title,quantity}}}}"
    );

    let root = QueryRoot::from_object(&data);
    match root.node().unwrap() {
        Some(Node::Checkout(checkout)) => {
            let first = checkout.line_items_aliased("firstTen").unwrap();
            let last = checkout.line_items_aliased("lastTen").unwrap();
            assert_eq!(first.len(), 2);
            assert_eq!(last.len(), 1);
            assert_eq!(first[0].title().unwrap(), "A");
            assert_eq!(last[0].title().unwrap(), "Z");
        }
        other => panic!("Expected Checkout node, got {:?}", other),
    }
}

#[tokio::test]
async fn node_unknown_type_decodes_to_placeholder() {
    let (_server, client) = setup(json!({
        "node": {"__typename": "GiftRegistry", "id": "gid://shop/GiftRegistry/7"},
    }))
    .await;

    let id = Id::new("gid://shop/GiftRegistry/7");
    let query = QueryRootQuery::new().node(None, &id, |node| {
        node.on_product(|product| product.title())
    });
    let data = client.query(&query).await.unwrap();

    match QueryRoot::from_object(&data).node().unwrap() {
        Some(Node::Unknown(unknown)) => {
            assert_eq!(unknown.type_name(), "GiftRegistry");
            assert_eq!(
                unknown.id().unwrap().map(|id| id.as_str()),
                Some("gid://shop/GiftRegistry/7")
            );
        }
        other => panic!("Expected Unknown node, got {:?}", other),
    }
}

#[tokio::test]
async fn nodes_query_resolves_each_element_independently() {
    let (_server, client) = setup(json!({
        "nodes": [
            {"__typename": "Product", "id": "gid://shop/Product/1", "title": "Arena Zip Boot"},
            {"__typename": "GiftRegistry", "id": "gid://shop/GiftRegistry/7"},
        ],
    }))
    .await;

    let ids = [
        Id::new("gid://shop/Product/1"),
        Id::new("gid://shop/GiftRegistry/7"),
    ];
    let query = QueryRootQuery::new().nodes(None, &ids, |node| {
        node.on_product(|product| product.title())
    });
    let data = client.query(&query).await.unwrap();

    let nodes = QueryRoot::from_object(&data).nodes().unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], Node::Product(_)));
    assert!(matches!(nodes[1], Node::Unknown(_)));
}

// ── failure modes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn non_null_field_returning_null_fails_deserialization() {
    let (_server, client) = setup(json!({
        "shop": {"name": null}
    }))
    .await;

    let query = QueryRootQuery::new().shop(|shop| shop.name());
    match client.query(&query).await {
        Err(StorefrontError::SchemaViolation {
            type_name, field, ..
        }) => {
            assert_eq!(type_name, "Shop");
            assert_eq!(field, "name");
        }
        other => panic!("Expected SchemaViolation, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_money_fails_deserialization() {
    let (_server, client) = setup(json!({
        "node": {
            "__typename": "ProductVariant",
            "id": "gid://shop/ProductVariant/1",
            "price": "19,99",
        },
    }))
    .await;

    let id = Id::new("gid://shop/ProductVariant/1");
    let query = QueryRootQuery::new().node(None, &id, |node| {
        node.on_product_variant(|variant| variant.price())
    });
    assert!(matches!(
        client.query(&query).await,
        Err(StorefrontError::SchemaViolation { .. })
    ));
}
