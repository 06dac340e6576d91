//! The booking service: availability queries plus the one transition that
//! matters, moving a slot between free and booked while keeping the bookings
//! table in sync.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::ApiError,
    models::{Booking, BookingView, Coach, TimeSlot},
};

pub async fn list_coaches(pool: &SqlitePool) -> Result<Vec<Coach>, ApiError> {
    let coaches = sqlx::query_as::<_, Coach>(
        "SELECT id, name, photo_url, bio, specialty, hourly_rate FROM coaches ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(coaches)
}

pub async fn list_available_slots(
    pool: &SqlitePool,
    coach_id: Option<i64>,
    date: Option<&str>,
) -> Result<Vec<TimeSlot>, ApiError> {
    let slots = sqlx::query_as::<_, TimeSlot>(
        r#"SELECT id, coach_id, date, start_time, end_time, is_booked
           FROM time_slots
           WHERE is_booked = 0
             AND (?1 IS NULL OR coach_id = ?1)
             AND (?2 IS NULL OR date = ?2)
           ORDER BY date, start_time"#,
    )
    .bind(coach_id)
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(slots)
}

pub async fn list_available_dates(
    pool: &SqlitePool,
    coach_id: Option<i64>,
) -> Result<Vec<String>, ApiError> {
    let Some(coach_id) = coach_id else {
        return Err(ApiError::Validation("coach_id required".to_string()));
    };

    let dates = sqlx::query_scalar::<_, String>(
        r#"SELECT DISTINCT date FROM time_slots
           WHERE coach_id = ? AND is_booked = 0
           ORDER BY date"#,
    )
    .bind(coach_id)
    .fetch_all(pool)
    .await?;
    Ok(dates)
}

/// Reserves a slot for a customer. The slot transition and the booking insert
/// run in one transaction; the conditional update's affected-row count decides
/// who wins when two requests race for the same slot.
pub async fn book_slot(
    pool: &SqlitePool,
    slot_id: Option<i64>,
    name: &str,
    email: &str,
) -> Result<BookingView, ApiError> {
    let name = name.trim();
    let email = email.trim();
    let Some(slot_id) = slot_id else {
        return Err(ApiError::Validation(
            "slot_id, name, and email are required".to_string(),
        ));
    };
    if name.is_empty() || email.is_empty() {
        return Err(ApiError::Validation(
            "slot_id, name, and email are required".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let claimed = sqlx::query("UPDATE time_slots SET is_booked = 1 WHERE id = ? AND is_booked = 0")
        .bind(slot_id)
        .execute(&mut *tx)
        .await?;

    if claimed.rows_affected() == 0 {
        // Nothing changed: the slot is either taken or missing entirely.
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM time_slots WHERE id = ?")
            .bind(slot_id)
            .fetch_one(&mut *tx)
            .await?;
        return Err(if exists == 0 {
            ApiError::NotFound("Slot not found".to_string())
        } else {
            ApiError::Conflict("Slot is already booked".to_string())
        });
    }

    let created_at = Utc::now().to_rfc3339();
    let inserted = sqlx::query(
        r#"INSERT INTO bookings (slot_id, customer_name, customer_email, created_at)
           VALUES (?, ?, ?, ?)"#,
    )
    .bind(slot_id)
    .bind(name)
    .bind(email)
    .bind(&created_at)
    .execute(&mut *tx)
    .await?;
    let booking_id = inserted.last_insert_rowid();

    let view = sqlx::query_as::<_, BookingView>(
        r#"SELECT b.id, b.slot_id, b.customer_name, b.customer_email, b.created_at,
                  s.date, s.start_time, s.end_time,
                  c.name AS coach_name, c.hourly_rate
           FROM bookings b
           JOIN time_slots s ON b.slot_id = s.id
           JOIN coaches c ON s.coach_id = c.id
           WHERE b.id = ?"#,
    )
    .bind(booking_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!("Booked slot {slot_id} for {email} (booking {booking_id})");
    Ok(view)
}

pub async fn list_bookings_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Vec<BookingView>, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::Validation("email parameter required".to_string()));
    }

    let bookings = sqlx::query_as::<_, BookingView>(
        r#"SELECT b.id, b.slot_id, b.customer_name, b.customer_email, b.created_at,
                  s.date, s.start_time, s.end_time,
                  c.name AS coach_name, c.hourly_rate
           FROM bookings b
           JOIN time_slots s ON b.slot_id = s.id
           JOIN coaches c ON s.coach_id = c.id
           WHERE LOWER(b.customer_email) = LOWER(?)
           ORDER BY s.date, s.start_time"#,
    )
    .bind(email)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

/// Cancels a booking: the slot is recycled to free and the booking row is
/// deleted, as one transaction.
pub async fn cancel_booking(pool: &SqlitePool, booking_id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    let booking = sqlx::query_as::<_, Booking>(
        "SELECT id, slot_id, customer_name, customer_email, created_at FROM bookings WHERE id = ?",
    )
    .bind(booking_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(booking) = booking else {
        return Err(ApiError::NotFound("Booking not found".to_string()));
    };

    sqlx::query("UPDATE time_slots SET is_booked = 0 WHERE id = ?")
        .bind(booking.slot_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM bookings WHERE id = ?")
        .bind(booking.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("Cancelled booking {booking_id}, slot {} is free again", booking.slot_id);
    Ok(())
}
