//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::order::{Delivery, Item, Order, Payment};

/// Create a complete test order
pub fn test_order() -> Order {
    Order {
        order_uid: "b563feb7b2b84b6test".to_string(),
        track_number: "WBILMTESTTRACK".to_string(),
        entry: "WBIL".to_string(),
        delivery: Delivery {
            name: "Test Testov".to_string(),
            phone: "+9720000000".to_string(),
            zip: "2639809".to_string(),
            city: "Kiryat Mozkin".to_string(),
            address: "Ploshad Mira 15".to_string(),
            region: "Kraiot".to_string(),
            email: "test@gmail.com".to_string(),
        },
        payment: Payment {
            transaction: "b563feb7b2b84b6test".to_string(),
            request_id: String::new(),
            currency: "USD".to_string(),
            provider: "wbpay".to_string(),
            amount: "1817".into(),
            payment_dt: 1637907727,
            bank: "alpha".to_string(),
            delivery_cost: "1500".into(),
            goods_total: "317".into(),
            custom_fee: "0".into(),
        },
        items: vec![Item {
            chrt_id: 9934930,
            track_number: "WBILMTESTTRACK".to_string(),
            price: "453".into(),
            rid: "ab4219087a764ae0btest".to_string(),
            name: "Mascaras".to_string(),
            sale: "30".into(),
            size: "0".to_string(),
            total_price: "317".into(),
            nm_id: 2389212,
            brand: "Vivienne Sabo".to_string(),
            status: 202,
        }],
        locale: "en".to_string(),
        internal_signature: String::new(),
        customer_id: "test".to_string(),
        delivery_service: "meest".to_string(),
        shardkey: "9".to_string(),
        sm_id: 99,
        date_created: "2021-11-26T06:22:19Z".to_string(),
        oof_shard: "1".to_string(),
    }
}

/// Create a test order with a specific id
pub fn test_order_with_id(order_uid: &str) -> Order {
    Order {
        order_uid: order_uid.to_string(),
        ..test_order()
    }
}

/// The test order as the API sends it
pub fn test_order_json() -> String {
    r#"{
        "order_uid": "b563feb7b2b84b6test",
        "track_number": "WBILMTESTTRACK",
        "entry": "WBIL",
        "delivery": {
            "name": "Test Testov",
            "phone": "+9720000000",
            "zip": "2639809",
            "city": "Kiryat Mozkin",
            "address": "Ploshad Mira 15",
            "region": "Kraiot",
            "email": "test@gmail.com"
        },
        "payment": {
            "transaction": "b563feb7b2b84b6test",
            "request_id": "",
            "currency": "USD",
            "provider": "wbpay",
            "amount": 1817,
            "payment_dt": 1637907727,
            "bank": "alpha",
            "delivery_cost": 1500,
            "goods_total": 317,
            "custom_fee": 0
        },
        "items": [
            {
                "chrt_id": 9934930,
                "track_number": "WBILMTESTTRACK",
                "price": 453,
                "rid": "ab4219087a764ae0btest",
                "name": "Mascaras",
                "sale": 30,
                "size": "0",
                "total_price": 317,
                "nm_id": 2389212,
                "brand": "Vivienne Sabo",
                "status": 202
            }
        ],
        "locale": "en",
        "internal_signature": "",
        "customer_id": "test",
        "delivery_service": "meest",
        "shardkey": "9",
        "sm_id": 99,
        "date_created": "2021-11-26T06:22:19Z",
        "oof_shard": "1"
    }"#
    .to_string()
}

/// An order exactly as the order API encodes it
///
/// Decimals are strings, `goods_total` is an integer and the creation time
/// carries nanoseconds.
pub fn backend_order_json() -> String {
    r#"{"order_uid":"12345","track_number":"WBILMTESTTRACK","entry":"WBIL","delivery":{"name":"Test Testov","phone":"+9720000000","zip":"2639809","city":"Kiryat Mozkin","address":"Ploshad Mira 15","region":"Kraiot","email":"test@gmail.com"},"payment":{"transaction":"12345","request_id":"","currency":"USD","provider":"wbpay","payment_dt":1637907727,"bank":"alpha","goods_total":199,"amount":"259.48","delivery_cost":"59.49","custom_fee":"0"},"items":[{"chrt_id":9934930,"track_number":"WBILMTESTTRACK","rid":"ab4219087a764ae0btest","name":"Mascaras","size":"0","nm_id":2389212,"brand":"Vivienne Sabo","status":202,"price":"199.99","sale":"30","total_price":"139.99"}],"locale":"en","internal_signature":"","customer_id":"test","delivery_service":"meest","shardkey":"9","sm_id":99,"date_created":"2021-11-26T06:22:19.123456789Z","oof_shard":"1"}"#
        .to_string()
}

/// A backend order whose payment row is missing (`Payment` is a pointer there)
pub fn backend_unpaid_order_json() -> String {
    r#"{"order_uid":"unpaid","track_number":"WBILMTESTTRACK","entry":"WBIL","delivery":{"name":"Test Testov","phone":"+9720000000","zip":"2639809","city":"Kiryat Mozkin","address":"Ploshad Mira 15","region":"Kraiot","email":"test@gmail.com"},"payment":null,"items":null,"locale":"en","internal_signature":"","customer_id":"test","delivery_service":"meest","shardkey":"9","sm_id":99,"date_created":"2021-11-26T06:22:19.5Z","oof_shard":"1"}"#
        .to_string()
}
