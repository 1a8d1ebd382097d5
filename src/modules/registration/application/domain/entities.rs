use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PLAN_PREMIUM: &str = "premium";
pub const PLAN_FREE: &str = "free";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const STATUS_PENDING: &str = "pending";

// Covers every offset in use, UTC-14:00 to UTC+14:00
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// `None` outside UTC-14:00..=UTC+14:00.
pub fn viewer_offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    (-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES)
        .contains(&minutes)
        .then(|| FixedOffset::east_opt(minutes * 60))
        .flatten()
}

/// A persisted course sign-up. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Registration {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "+254700000000")]
    pub phone: String,
    #[schema(example = "beginner")]
    pub level: String,
    #[schema(example = "premium")]
    pub plan: String,
    #[schema(example = "en")]
    pub language: String,
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    pub premium_price: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RevenueEstimate {
    #[schema(example = "KES")]
    pub currency: String,
    #[schema(example = 8250)]
    pub amount: u64,
}

/// Dashboard counters derived from a full registration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegistrationStats {
    pub total: usize,
    pub premium: usize,
    pub free: usize,
    pub today: usize,
    pub premium_percentage: f64,
    pub free_percentage: f64,
    pub potential_revenue: RevenueEstimate,
}

impl RegistrationStats {
    /// `today` compares calendar dates in `viewer_offset`, not in UTC.
    pub fn compute(
        registrations: &[Registration],
        now: DateTime<Utc>,
        viewer_offset: FixedOffset,
        pricing: &Pricing,
    ) -> Self {
        let today = now.with_timezone(&viewer_offset).date_naive();

        let total = registrations.len();
        let premium = registrations
            .iter()
            .filter(|r| r.plan == PLAN_PREMIUM)
            .count();
        let free = registrations.iter().filter(|r| r.plan == PLAN_FREE).count();
        let created_today = registrations
            .iter()
            .filter(|r| r.created_at.with_timezone(&viewer_offset).date_naive() == today)
            .count();

        Self {
            total,
            premium,
            free,
            today: created_today,
            premium_percentage: percentage(premium, total),
            free_percentage: percentage(free, total),
            potential_revenue: RevenueEstimate {
                currency: pricing.currency.clone(),
                amount: premium as u64 * pricing.premium_price,
            },
        }
    }
}

// One decimal place
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}
