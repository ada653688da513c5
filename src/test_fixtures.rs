//! Shared test fixtures: a scripted HTTP client, a recording sleeper and
//! JSON payloads shaped like the marketplace's responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};

use crate::time::Sleeper;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configured sequence of outcomes and
/// records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    /// A client answering once with `status` and a JSON body.
    pub fn json(status: u16, body: Value) -> Arc<Self> {
        Self::new(vec![Ok(response(status, body))])
    }

    /// A client answering once with an empty 204.
    pub fn no_content() -> Arc<Self> {
        Self::new(vec![Ok(raw_response(204, ""))])
    }

    /// A client answering `count` times with the same status and body.
    pub fn repeating(status: u16, body: &Value, count: usize) -> Arc<Self> {
        Self::new(
            (0..count)
                .map(|_| Ok(response(status, body.clone())))
                .collect(),
        )
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    /// Parses the last request's body as JSON.
    pub fn last_body(&self) -> Value {
        serde_json::from_slice(self.last_request().body.as_deref().unwrap()).unwrap()
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

/// Sleeper that records requested delays instead of waiting.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub fn response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::json(http::StatusCode::from_u16(status).unwrap(), &body)
}

pub fn raw_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

pub fn address_json() -> Value {
    json!({
        "first_name": "Olena",
        "last_name": "Koval",
        "address1": "Khreshchatyk 1",
        "city": "Kyiv",
        "region": "Kyiv",
        "postal_code": "01001",
        "country": "UA",
        "phone": "+380441234567"
    })
}

pub fn product_json() -> Value {
    json!({
        "id": "p_1",
        "sku": "SNK-001",
        "name": "Runner",
        "description": "Lightweight running shoe",
        "price": 89.5,
        "compare_at_price": 120.0,
        "currency": "UAH",
        "category_id": "shoes",
        "images": ["https://cdn.shop.com/p_1.jpg"],
        "inventory": 14,
        "status": "active",
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T12:30:00Z",
        "variants": [
            {
                "id": "v_1",
                "sku": "SNK-001-42",
                "name": "EU 42",
                "price": 89.5,
                "inventory": 6,
                "options": {"size": "42"}
            }
        ],
        "attributes": {"material": "mesh"}
    })
}

pub fn order_json() -> Value {
    json!({
        "id": "o_1",
        "order_number": "1001",
        "status": "paid",
        "customer_email": "olena@example.com",
        "customer_name": "Olena Koval",
        "shipping_address": address_json(),
        "billing_address": address_json(),
        "items": [
            {
                "product_id": "p_1",
                "variant_id": "v_1",
                "sku": "SNK-001-42",
                "name": "Runner EU 42",
                "quantity": 2,
                "price": 89.5,
                "total_price": 179.0
            },
            {
                "product_id": "p_2",
                "sku": "SOCK-1",
                "name": "Socks",
                "quantity": 1,
                "price": 5.0,
                "total_price": 5.0
            }
        ],
        "subtotal": 184.0,
        "shipping_cost": 10.0,
        "tax": 0.0,
        "discount": 4.0,
        "total": 190.0,
        "currency": "UAH",
        "created_at": "2024-03-05T09:15:00Z",
        "updated_at": "2024-03-05T09:20:00Z"
    })
}

pub fn webhook_json() -> Value {
    json!({
        "id": "wh_1",
        "url": "https://partner.example.com/hooks",
        "events": ["order.created", "order.paid"],
        "active": true,
        "created_at": "2024-01-10T08:00:00Z"
    })
}

pub fn page_json(items: Vec<Value>, total: u64, page: u32, limit: u32) -> Value {
    let total_pages = total.div_ceil(u64::from(limit)).max(1);
    json!({
        "items": items,
        "total": total,
        "page": page,
        "limit": limit,
        "total_pages": total_pages
    })
}
