//! Request Records
//!
//! Wire types for the CheckInn requests endpoint. Only the fields the
//! dashboard reads are modelled; everything else in a record is ignored.

use serde::{Deserialize, Serialize};

/// Response body of `GET /api/v1/int/requests`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestsEnvelope {
    pub requests: Vec<Request>,
}

/// A single request (ticket) raised at a hotel desk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Request {
    /// Department the request was routed to
    pub desk: Desk,
    /// Property the request belongs to
    pub hotel: Hotel,
}

/// Department entity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Desk {
    pub name: String,
}

/// Property entity, identified by its short code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hotel {
    pub shortname: String,
}

impl Request {
    /// Build a request from its department name and hotel short code
    pub fn new(desk: impl Into<String>, hotel: impl Into<String>) -> Self {
        Self {
            desk: Desk { name: desk.into() },
            hotel: Hotel {
                shortname: hotel.into(),
            },
        }
    }

    /// Department name (`desk.name`)
    pub fn department(&self) -> &str {
        &self.desk.name
    }

    /// Hotel short code (`hotel.shortname`)
    pub fn hotel_code(&self) -> &str {
        &self.hotel.shortname
    }
}
