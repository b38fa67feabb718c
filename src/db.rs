#![cfg(feature = "server")]

//! rusqlite-backed device store behind the server functions and the REST
//! surface.

use chrono::Utc;
use lazy_static::lazy_static;
use rusqlite::{Connection, Result, params};

use crate::models::{Device, DeviceSummary, Place};

lazy_static! {
    // Set once from the CLI before the server starts accepting requests.
    static ref DB_PATH: std::sync::Mutex<String> =
        std::sync::Mutex::new(String::from("soldesk.db"));
}

pub fn set_db_path(path: &str) {
    *DB_PATH.lock().unwrap() = path.to_string();
}

pub fn open() -> Result<Connection> {
    let path = DB_PATH.lock().unwrap().clone();
    Connection::open(path)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Device (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Place (
            device_id INTEGER NOT NULL,
            place INTEGER NOT NULL,
            currency TEXT NOT NULL,
            balances FLOAT NOT NULL,
            FOREIGN KEY(device_id) REFERENCES Device(id),
            PRIMARY KEY(device_id, place)
        )",
        [],
    )?;

    log::debug!("Database initialized successfully.");
    Ok(())
}

pub fn create_device(conn: &Connection, name: &str, places: &[(u32, &str)]) -> Result<i64> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO Device (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
        params![name, now, now],
    )?;
    let device_id = conn.last_insert_rowid();

    for (place, currency) in places {
        conn.execute(
            "INSERT INTO Place (device_id, place, currency, balances) VALUES (?1, ?2, ?3, 0)",
            params![device_id, place, currency],
        )?;
    }

    log::debug!("Device '{}' added with {} places", name, places.len());
    Ok(device_id)
}

/// First-run seed so the interface has something to administer.
pub fn seed_demo_devices(conn: &Connection) -> Result<()> {
    let device_count: i64 = conn.query_row("SELECT COUNT(*) FROM Device", [], |row| row.get(0))?;
    if device_count > 0 {
        return Ok(());
    }

    create_device(conn, "Terminal 1", &[(1, "RUB"), (2, "RUB"), (3, "RUB")])?;
    create_device(conn, "Terminal 2", &[(1, "EUR"), (2, "EUR")])?;
    create_device(conn, "Cash desk", &[(1, "USD")])?;

    log::debug!("Seeded demo devices");
    Ok(())
}

pub fn get_devices(conn: &Connection) -> Result<Vec<DeviceSummary>> {
    let mut stmt = conn.prepare("SELECT id, name FROM Device ORDER BY id")?;
    let devices = stmt
        .query_map([], |row| {
            Ok(DeviceSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(devices)
}

pub fn get_device(conn: &Connection, device_id: i64) -> Result<Option<Device>> {
    let mut stmt =
        conn.prepare("SELECT id, name, created_at, updated_at FROM Device WHERE id = ?1")?;
    let device = stmt.query_row(params![device_id], |row| {
        Ok(Device {
            id: row.get(0)?,
            name: row.get(1)?,
            places: Vec::new(),
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    });

    let mut device = match device {
        Ok(d) => d,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut stmt = conn.prepare(
        "SELECT device_id, place, currency, balances FROM Place
        WHERE device_id = ?1 ORDER BY place",
    )?;
    device.places = stmt
        .query_map(params![device_id], |row| {
            Ok(Place {
                device_id: row.get(0)?,
                place: row.get(1)?,
                currency: row.get(2)?,
                balances: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(device))
}

/// Write a confirmed absolute balance. Returns whether a matching place
/// existed; `Device.updated_at` is bumped on success.
pub fn set_balance(conn: &Connection, device_id: i64, place: u32, new_balance: f64) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE Place SET balances = ?1 WHERE device_id = ?2 AND place = ?3",
        params![new_balance, device_id, place],
    )?;
    if updated == 0 {
        log::error!(
            "No place {} on device {}, can't update balance.",
            place,
            device_id
        );
        return Ok(false);
    }

    conn.execute(
        "UPDATE Device SET updated_at = ?1 WHERE id = ?2",
        params![Utc::now(), device_id],
    )?;

    log::debug!(
        "device: {}, place: {}, new balance: {}",
        device_id,
        place,
        new_balance
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_list_devices() -> Result<()> {
        let conn = test_conn();

        create_device(&conn, "Terminal 1", &[(1, "RUB"), (2, "RUB")])?;
        create_device(&conn, "Terminal 2", &[(1, "EUR")])?;

        let devices = get_devices(&conn)?;
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Terminal 1");
        assert_eq!(devices[1].name, "Terminal 2");

        Ok(())
    }

    #[test]
    fn test_get_device_detail() -> Result<()> {
        let conn = test_conn();
        let id = create_device(&conn, "Terminal 1", &[(2, "RUB"), (1, "EUR")])?;

        let device = get_device(&conn, id)?.unwrap();
        assert_eq!(device.name, "Terminal 1");
        // Places come back ordered by place number.
        assert_eq!(device.places[0].place, 1);
        assert_eq!(device.places[0].currency, "EUR");
        assert_eq!(device.places[1].place, 2);
        assert_eq!(device.places[1].balances, 0.0);

        assert!(get_device(&conn, id + 1)?.is_none());
        Ok(())
    }

    #[test]
    fn test_set_balance() -> Result<()> {
        let conn = test_conn();
        let id = create_device(&conn, "Terminal 1", &[(1, "RUB")])?;
        let before = get_device(&conn, id)?.unwrap();

        assert!(set_balance(&conn, id, 1, 150.0)?);
        let after = get_device(&conn, id)?.unwrap();
        assert_eq!(after.places[0].balances, 150.0);
        assert!(after.updated_at >= before.updated_at);

        // Unknown device/place pairs report no match.
        assert!(!set_balance(&conn, id, 9, 10.0)?);
        assert!(!set_balance(&conn, id + 1, 1, 10.0)?);
        Ok(())
    }

    #[test]
    fn test_seed_runs_once() -> Result<()> {
        let conn = test_conn();
        seed_demo_devices(&conn)?;
        let seeded = get_devices(&conn)?.len();
        assert!(seeded > 0);

        seed_demo_devices(&conn)?;
        assert_eq!(get_devices(&conn)?.len(), seeded);
        Ok(())
    }
}
