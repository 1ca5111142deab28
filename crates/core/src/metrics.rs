//! Prometheus metrics for the purchase workflow.
//!
//! This module provides metrics for:
//! - Purchase attempts by outcome
//! - Tickets sold per type
//! - Revenue charged and seats reserved
//! - Collaborator call latency

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Purchase Metrics
// =============================================================================

/// Purchase attempts total by result.
pub static PURCHASES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinema_purchases_total", "Total purchase attempts"),
        &["result"], // "success" or the error kind
    )
    .unwrap()
});

/// Tickets sold total by ticket type.
pub static TICKETS_SOLD: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinema_tickets_sold_total", "Total tickets sold"),
        &["ticket_type"],
    )
    .unwrap()
});

/// Revenue charged total, in whole currency units.
pub static REVENUE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("cinema_revenue_total", "Total amount charged for tickets").unwrap()
});

/// Seats reserved total.
pub static SEATS_RESERVED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("cinema_seats_reserved_total", "Total seats reserved").unwrap()
});

// =============================================================================
// Collaborator Metrics
// =============================================================================

/// Collaborator call duration in seconds.
pub static COLLABORATOR_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cinema_collaborator_duration_seconds",
            "Duration of payment and reservation calls",
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        &["collaborator", "result"], // collaborator: "payment", "reservation"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PURCHASES_TOTAL.clone()),
        Box::new(TICKETS_SOLD.clone()),
        Box::new(REVENUE_TOTAL.clone()),
        Box::new(SEATS_RESERVED.clone()),
        Box::new(COLLABORATOR_DURATION.clone()),
    ]
}
