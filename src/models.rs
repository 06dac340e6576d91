use serde::Serialize;

/// A coach as seeded. Immutable for the lifetime of the database.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Coach {
    pub id: i64,
    pub name: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub specialty: Option<String>,
    pub hourly_rate: f64,
}

/// One bookable hour offered by a coach. `date` and the time columns are
/// stored as `YYYY-MM-DD` / `HH:MM` text, matching the seeded schema.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TimeSlot {
    pub id: i64,
    pub coach_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub slot_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: String,
}

/// A booking joined with its slot and coach, as returned to customers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BookingView {
    pub id: i64,
    pub slot_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub coach_name: String,
    pub hourly_rate: f64,
}
