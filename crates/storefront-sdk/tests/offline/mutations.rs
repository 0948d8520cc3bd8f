use super::*;
use serde_json::json;
use storefront_sdk::types::{
    CheckoutCreateInput, CheckoutLineItemInput, Mutation, MutationQuery,
};
use storefront_sdk::{Id, QueryBuilder, ResponseView};

#[tokio::test]
async fn checkout_create_sends_expected_document() {
    let (server, client) = setup(json!({
        "checkoutCreate": {"checkout": null, "userErrors": []}
    }))
    .await;

    let input = CheckoutCreateInput {
        email: Some("buyer@example.com".to_string()),
        line_items: vec![
            CheckoutLineItemInput::new("gid://shop/ProductVariant/1", 1),
            CheckoutLineItemInput::new("gid://shop/ProductVariant/2", 2),
        ],
        ..Default::default()
    };
    let mutation = MutationQuery::new().checkout_create(None, &input, |payload| {
        payload
            .checkout(|checkout| checkout.id().web_url().total_price())
            .user_errors(|err| err.field().message())
    });
    let _ = client.mutation(&mutation).await;

    let document = sent_document(&server.received_requests().await.unwrap());
    assert_eq!(
        document,
        "mutation{checkoutCreate(input:{email:\"buyer@example.com\",lineItems:[\
         {variantId:\"gid://shop/ProductVariant/1\",quantity:1},\
         {variantId:\"gid://shop/ProductVariant/2\",quantity:2}]})\
         {checkout{id,webUrl,totalPrice},userErrors{field,message}}}"
    );
}

#[tokio::test]
async fn checkout_create_decodes_checkout_payload() {
    let (_server, client) = setup(json!({
        "checkoutCreate": {
            "checkout": {
                "id": "gid://shop/Checkout/new",
                "webUrl": "https://shop.example.com/checkout/new",
                "totalPrice": "44.05",
                "currencyCode": "USD",
                "requiresShipping": true,
            },
            "userErrors": [],
        },
    }))
    .await;

    let input = CheckoutCreateInput {
        line_items: vec![CheckoutLineItemInput::new("gid://v1", 1)],
        ..Default::default()
    };
    let mutation = MutationQuery::new().checkout_create(None, &input, |payload| {
        payload
            .checkout(|checkout| {
                checkout
                    .id()
                    .web_url()
                    .total_price()
                    .currency_code()
                    .requires_shipping()
            })
            .user_errors(|err| err.message())
    });
    let data = client.mutation(&mutation).await.unwrap();

    let payload = Mutation::from_object(&data)
        .checkout_create()
        .unwrap()
        .unwrap();
    let checkout = payload.checkout().unwrap().unwrap();
    assert_eq!(checkout.id().unwrap().as_str(), "gid://shop/Checkout/new");
    assert_eq!(
        checkout.total_price().unwrap(),
        storefront_sdk::scalars::Decimal::new(4405, 2)
    );
    assert!(checkout.requires_shipping().unwrap());
    assert!(payload.user_errors().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_create_decodes_user_errors() {
    let (_server, client) = setup(json!({
        "checkoutCreate": {
            "checkout": null,
            "userErrors": [
                {"field": ["input", "lineItems"], "message": "Variant is out of stock"},
            ],
        },
    }))
    .await;

    let input = CheckoutCreateInput {
        line_items: vec![CheckoutLineItemInput::new("gid://v1", 999)],
        ..Default::default()
    };
    let mutation = MutationQuery::new().checkout_create(None, &input, |payload| {
        payload
            .checkout(|checkout| checkout.id())
            .user_errors(|err| err.field().message())
    });
    let data = client.mutation(&mutation).await.unwrap();

    let payload = Mutation::from_object(&data)
        .checkout_create()
        .unwrap()
        .unwrap();
    assert!(payload.checkout().unwrap().is_none());
    let errors = payload.user_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message().unwrap(), "Variant is out of stock");
    assert_eq!(
        errors[0].field().unwrap(),
        Some(vec!["input", "lineItems"])
    );
}

#[tokio::test]
async fn checkout_line_items_add_sends_expected_document() {
    let (server, client) = setup(json!({
        "checkoutLineItemsAdd": {"checkout": {"id": "gid://shop/Checkout/abc"}, "userErrors": []}
    }))
    .await;

    let checkout_id = Id::new("gid://shop/Checkout/abc");
    let items = vec![CheckoutLineItemInput::new("gid://shop/ProductVariant/3", 1)];
    let mutation = MutationQuery::new().checkout_line_items_add(
        None,
        &checkout_id,
        &items,
        |payload| payload.checkout(|checkout| checkout.id()),
    );
    let _ = client.mutation(&mutation).await;

    let document = sent_document(&server.received_requests().await.unwrap());
    assert_eq!(
        document,
        "mutation{checkoutLineItemsAdd(checkoutId:\"gid://shop/Checkout/abc\",\
         lineItems:[{variantId:\"gid://shop/ProductVariant/3\",quantity:1}])\
         {checkout{id}}}"
    );
}

#[tokio::test]
async fn mutation_response_flattens_for_cache_population() {
    let (_server, client) = setup(json!({
        "checkoutLineItemsAdd": {
            "checkout": {
                "id": "gid://shop/Checkout/abc",
                "lineItems": [
                    {"id": "gid://shop/CheckoutLineItem/1", "title": "A", "quantity": 1},
                    {"id": "gid://shop/CheckoutLineItem/2", "title": "B", "quantity": 2},
                ],
                "shippingAddress": {"id": "gid://shop/MailingAddress/1", "city": "Ottawa"},
            },
            "userErrors": [],
        },
    }))
    .await;

    let checkout_id = Id::new("gid://shop/Checkout/abc");
    let items = vec![CheckoutLineItemInput::new("gid://v9", 1)];
    let mutation = MutationQuery::new().checkout_line_items_add(
        None,
        &checkout_id,
        &items,
        |payload| {
            payload.checkout(|checkout| {
                checkout
                    .id()
                    .line_items(None, 10, None, |li| li.id().title().quantity())
                    .shipping_address(|address| address.id().city())
            })
        },
    );
    let data = client.mutation(&mutation).await.unwrap();

    // Root + payload + checkout + two line items + address.
    let all = data.nested_objects();
    assert_eq!(all.len(), 6);

    // Every object carrying an id appears exactly once.
    let mut ids: Vec<&str> = all
        .iter()
        .filter_map(|o| o.node_id())
        .map(|id| id.as_str())
        .collect();
    assert_eq!(ids.len(), 4);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
