//! Customer model and route handlers.

use bytes::Bytes;
use http::{Response, StatusCode, header};
use http_body_util::Full;
use serde::{Deserialize, Serialize};

/// The body type used for all responses.
pub type Body = Full<Bytes>;

/// A customer record as served over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub addresses: Vec<String>,
}

impl Customer {
    /// The canned record returned for any id.
    pub fn sample(id: u64) -> Self {
        Self {
            id,
            name: "name".to_string(),
            addresses: vec!["address1".to_string(), "address2".to_string()],
        }
    }
}

/// `GET /customers/{id}`: the customer as JSON, with a custom header and a
/// multi-valued `Accept-Ranges` for the header assertions to chew on.
pub fn get_customer(id: u64) -> Response<Body> {
    let customer = Customer::sample(id);
    let body = serde_json::to_vec(&customer).expect("customer serializes");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-custom-header", "1")
        .header(header::ACCEPT_RANGES, "range1")
        .header(header::ACCEPT_RANGES, "range2")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}

/// `GET /customers/{id}/greeting`: a plain-text body.
pub fn get_greeting(_id: u64) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from("hello world")))
        .expect("valid response")
}

/// `POST /customers`: 201 with `Location`, `ETag`, and `Cache-Control`
/// headers for the typed header assertions.
pub fn create_customer() -> Response<Body> {
    let customer = Customer::sample(3);
    let body = serde_json::to_vec(&customer).expect("customer serializes");

    Response::builder()
        .status(StatusCode::CREATED)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::LOCATION, "/customers/3")
        .header(header::ETAG, "\"customer-3\"")
        .header(header::CACHE_CONTROL, "max-age=60")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}

/// Any unmatched route.
pub fn not_found() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::new()))
        .expect("valid response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_customer() {
        let customer = Customer::sample(7);
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name, "name");
        assert_eq!(customer.addresses, ["address1", "address2"]);
    }

    #[test]
    fn test_get_customer_sets_headers() {
        let response = get_customer(1);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("x-custom-header").unwrap(), "1");

        let ranges: Vec<_> = response.headers().get_all(header::ACCEPT_RANGES).iter().collect();
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn test_create_customer_sets_typed_headers() {
        let response = create_customer();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/customers/3");
        assert_eq!(response.headers().get(header::ETAG).unwrap(), "\"customer-3\"");
    }

    #[test]
    fn test_customer_serializes_with_wire_names() {
        let json = serde_json::to_value(Customer::sample(1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "name");
        assert_eq!(json["addresses"][1], "address2");
    }
}
