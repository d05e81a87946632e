//! Request Aggregation
//!
//! Pure projections over a request list: total count, unique departments
//! and per-hotel counts. Every projection preserves first-appearance order.

use serde::Serialize;
use std::collections::HashMap;

use crate::requests::Request;

/// Derived view state for a non-empty request list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    pub total_requests: usize,
    pub unique_departments: Vec<String>,
    pub requests_per_hotel: HotelCounts,
}

/// Count for one hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelCount {
    pub hotel: String,
    pub count: u64,
}

/// Insertion-ordered hotel counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HotelCounts {
    entries: Vec<HotelCount>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl HotelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more request for `hotel`, starting at 1 on first sight
    pub fn increment(&mut self, hotel: &str) {
        match self.positions.get(hotel) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.positions.insert(hotel.to_string(), self.entries.len());
                self.entries.push(HotelCount {
                    hotel: hotel.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, hotel: &str) -> Option<u64> {
        self.positions.get(hotel).map(|&idx| self.entries[idx].count)
    }

    /// Hotel codes in first-appearance order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.hotel.clone()).collect()
    }

    /// Counts in the same order as [`labels`](Self::labels)
    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.count).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HotelCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of requests in the list
pub fn total_requests(requests: &[Request]) -> usize {
    requests.len()
}

/// Department names, deduplicated by exact string equality, in first-seen order
pub fn unique_departments(requests: &[Request]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for request in requests {
        let name = request.department();
        if !departments.iter().any(|d| d == name) {
            departments.push(name.to_string());
        }
    }
    departments
}

/// Requests counted per hotel short code, keys in first-seen order
pub fn requests_per_hotel(requests: &[Request]) -> HotelCounts {
    let mut counts = HotelCounts::new();
    for request in requests {
        counts.increment(request.hotel_code());
    }
    counts
}

/// All projections at once. `None` for an empty list: nothing is recomputed.
pub fn summarize(requests: &[Request]) -> Option<RequestSummary> {
    if requests.is_empty() {
        return None;
    }

    Some(RequestSummary {
        total_requests: total_requests(requests),
        unique_departments: unique_departments(requests),
        requests_per_hotel: requests_per_hotel(requests),
    })
}
