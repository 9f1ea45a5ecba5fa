//! # Seed Data Generator
//!
//! Populates a development database with rooms, chores and roommates.
//!
//! ## Usage
//! ```bash
//! # Seed ./roommates.db (created if missing)
//! cargo run -p roommates-db --bin seed
//!
//! # Specify database
//! cargo run -p roommates-db --bin seed -- --db sqlite://./data/house.db?mode=rwc
//!
//! # Wipe every table first, then seed
//! cargo run -p roommates-db --bin seed -- --reset
//! ```
//!
//! Roommates have no write path in the repositories; this binary stands
//! in for whatever provisions them in a real household database.

use chrono::NaiveDate;
use clap::Parser;
use roommates_core::{Chore, Room};
use roommates_db::{Database, DbConfig, DbResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rooms to create: (name, max occupancy)
const ROOMS: &[(&str, i32)] = &[
    ("Bedroom 1", 2),
    ("Bedroom 2", 1),
    ("Den", 2),
    ("Attic", 1),
    ("Basement", 3),
];

/// Chores to create
const CHORES: &[&str] = &[
    "Take out the trash",
    "Do the dishes",
    "Vacuum the living room",
    "Clean the bathroom",
    "Mow the lawn",
    "Water the plants",
];

/// Roommates: (first, last, rent %, moved in (y, m, d), index into ROOMS)
const ROOMMATES: &[(&str, &str, i32, (i32, u32, u32), usize)] = &[
    ("Wilbur", "Bishop", 20, (2020, 5, 1), 0),
    ("Jenna", "Solis", 20, (2021, 1, 15), 0),
    ("Juan", "Nguyen", 25, (2021, 8, 1), 1),
    ("Karen", "Osbourne", 20, (2022, 2, 1), 2),
    ("Dean", "Wise", 15, (2023, 6, 10), 4),
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Roommates seed data generator")]
struct Args {
    /// Database connection string
    #[arg(short, long, default_value = "sqlite://roommates.db?mode=rwc")]
    db: String,

    /// Delete all existing rows before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("🌱 Roommates Seed Data Generator");
    println!("================================");
    println!("Database: {}", args.db);
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;
    println!("✓ Connected to database");
    println!("✓ Schema ready");

    if args.reset {
        reset(&db).await?;
        println!("✓ Existing data removed");
    }

    let existing = db.rooms().get_all().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} rooms", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut room_ids = Vec::with_capacity(ROOMS.len());
    for (name, max) in ROOMS {
        let mut room = Room::new(*name, *max);
        room_ids.push(db.rooms().insert(&mut room).await?);
    }
    println!("✓ {} rooms", room_ids.len());

    for name in CHORES {
        db.chores().insert(&mut Chore::new(*name)).await?;
    }
    println!("✓ {} chores", CHORES.len());

    let mut seeded = 0;
    for (first, last, rent, (y, m, d), room_idx) in ROOMMATES {
        let Some(moved_in) = NaiveDate::from_ymd_opt(*y, *m, *d) else {
            eprintln!("Skipping {first} {last}: bad move-in date");
            continue;
        };
        insert_roommate(&db, first, last, *rent, moved_in, room_ids[*room_idx]).await?;
        seeded += 1;
    }
    println!("✓ {} roommates", seeded);

    // First chore to the first roommate so the unassigned list isn't everything
    let roommates = db.roommates().get_all().await?;
    let chores = db.chores().get_all().await?;
    if let (Some(mate), Some(chore)) = (roommates.first(), chores.first()) {
        db.chores().assign_chore(chore.id, mate.id).await?;
        info!(chore = %chore.name, roommate = %mate.full_name(), "Assigned sample chore");
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Empties every table, children before parents.
async fn reset(db: &Database) -> DbResult<()> {
    let provider = db.provider();
    let mut conn = provider.open().await?;

    for table in ["RoommateChore", "Roommate", "Chore", "Room"] {
        let deleted = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut conn)
            .await?
            .rows_affected();
        info!(table, deleted, "Cleared table");
    }

    provider.release(conn).await;
    Ok(())
}

async fn insert_roommate(
    db: &Database,
    first_name: &str,
    last_name: &str,
    rent_portion: i32,
    moved_in: NaiveDate,
    room_id: i64,
) -> DbResult<()> {
    let provider = db.provider();
    let mut conn = provider.open().await?;

    sqlx::query(
        r#"
        INSERT INTO Roommate (FirstName, LastName, RentPortion, MovedInDate, RoomId)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(rent_portion)
    .bind(moved_in)
    .bind(room_id)
    .execute(&mut conn)
    .await?;

    provider.release(conn).await;
    Ok(())
}
