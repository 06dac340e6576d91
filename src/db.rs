use std::{fs, path::Path};

use chrono::{Datelike, Duration, Utc, Weekday};
use sqlx::SqlitePool;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// SQLite URLs point at a file; make sure its directory exists before the
/// pool tries to create the database.
pub fn ensure_sqlite_dir(db_url: &str) -> std::io::Result<()> {
    let path = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"));

    let Some(path) = path else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    let path = path.strip_prefix("file:").unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

struct SeedCoach {
    name: &'static str,
    photo_url: &'static str,
    bio: &'static str,
    specialty: &'static str,
    hourly_rate: f64,
}

const SEED_COACHES: [SeedCoach; 4] = [
    SeedCoach {
        name: "Maria Santos",
        photo_url: "https://api.dicebear.com/7.x/personas/svg?seed=Maria&backgroundColor=b6e3f4",
        bio: "Former WTA top 100 player with 15 years of coaching experience. Specializes in building strong fundamentals and competitive match play.",
        specialty: "Groundstrokes & Match Strategy",
        hourly_rate: 85.0,
    },
    SeedCoach {
        name: "James Chen",
        photo_url: "https://api.dicebear.com/7.x/personas/svg?seed=James&backgroundColor=c0aede",
        bio: "USPTA certified professional. Patient and methodical teaching style, great with beginners and intermediate players looking to level up.",
        specialty: "Beginners & Technique",
        hourly_rate: 65.0,
    },
    SeedCoach {
        name: "Sofia Kovac",
        photo_url: "https://api.dicebear.com/7.x/personas/svg?seed=Sofia&backgroundColor=d1f4d1",
        bio: "NCAA Division I champion turned coach. High-energy sessions focused on fitness, agility, and power hitting.",
        specialty: "Power Game & Fitness",
        hourly_rate: 90.0,
    },
    SeedCoach {
        name: "Andre Williams",
        photo_url: "https://api.dicebear.com/7.x/personas/svg?seed=Andre&backgroundColor=ffd5dc",
        bio: "20+ years coaching juniors and adults. Known for improving serve technique and net play. Relaxed, encouraging style.",
        specialty: "Serve & Volley",
        hourly_rate: 75.0,
    },
];

/// Populates demo data on an empty database: four coaches, each with two
/// weeks of hourly slots (09:00-17:00, Sundays skipped) starting the
/// upcoming Monday. A non-empty coaches table means a seeded database and
/// the whole step is skipped.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM coaches")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let mut coach_ids = Vec::with_capacity(SEED_COACHES.len());
    for coach in &SEED_COACHES {
        let result = sqlx::query(
            r#"INSERT INTO coaches (name, photo_url, bio, specialty, hourly_rate)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(coach.name)
        .bind(coach.photo_url)
        .bind(coach.bio)
        .bind(coach.specialty)
        .bind(coach.hourly_rate)
        .execute(pool)
        .await?;
        coach_ids.push(result.last_insert_rowid());
    }

    let today = Utc::now().date_naive();
    let start = today + Duration::days((7 - today.weekday().num_days_from_monday() as i64) % 7);

    let mut slot_count = 0;
    for &coach_id in &coach_ids {
        for day_offset in 0..14 {
            let date = start + Duration::days(day_offset);
            if date.weekday() == Weekday::Sun {
                continue;
            }
            let date_str = date.format("%Y-%m-%d").to_string();
            for hour in 9..17 {
                sqlx::query(
                    r#"INSERT INTO time_slots (coach_id, date, start_time, end_time)
                       VALUES (?, ?, ?, ?)"#,
                )
                .bind(coach_id)
                .bind(&date_str)
                .bind(format!("{hour:02}:00"))
                .bind(format!("{:02}:00", hour + 1))
                .execute(pool)
                .await?;
                slot_count += 1;
            }
        }
    }

    log::info!(
        "Seeded {} coaches and {slot_count} time slots starting {start}",
        coach_ids.len()
    );
    Ok(())
}
