//! Catalog collaborator: one query against pg_type on a live server,
//! materialized fully before generation begins.

use crate::error::AppError;
use crate::record::TypeRecord;
use tokio_postgres::{Client, Config, NoTls};
use tracing::{debug, info};

/// Connection parameters for the target catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub database: String,
}

/// All visible scalar types, ordered by display name. Excludes composite and
/// pseudo types, invisible types, and types that exist only as the element
/// type of some array type; the generator core assumes that filtering has
/// already happened here.
const TYPES_SQL: &str = "
  SELECT
    format_type(t.oid, NULL) AS name,
    t.typname AS typname,
    t.typcategory AS typcategory
  FROM pg_type t
  WHERE
    t.typtype NOT IN ('c', 'p')
    AND pg_type_is_visible(t.oid)
    AND NOT EXISTS(SELECT 1 FROM pg_catalog.pg_type el WHERE el.oid = t.typelem AND el.typarray = t.oid)
  ORDER BY name
";

pub async fn connect(cfg: &CatalogConfig) -> Result<Client, AppError> {
    let mut pg = Config::new();
    if let Some(host) = &cfg.host {
        pg.host(host);
    }
    if let Some(port) = cfg.port {
        pg.port(port);
    }
    if let Some(user) = &cfg.user {
        pg.user(user);
    }
    pg.dbname(&cfg.database);
    let (client, conn) = pg
        .connect(NoTls)
        .await
        .map_err(|e| AppError::catalog(format!("connect failed: {e}")))?;
    // drive the connection in background
    tokio::spawn(async move {
        let _ = conn.await;
    });
    info!("connected to database '{}'", cfg.database);
    Ok(client)
}

pub async fn fetch_types(client: &Client) -> Result<Vec<TypeRecord>, AppError> {
    let rows = client
        .query(TYPES_SQL, &[])
        .await
        .map_err(|e| AppError::catalog(format!("pg_type query failed: {e}")))?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let display_name: String = row.get("name");
        let short_name: String = row.get("typname");
        // typcategory is the one-byte "char" type
        let category: i8 = row.get("typcategory");
        debug!(
            "introspected type '{}' (typname={}, typcategory={})",
            display_name, short_name, category as u8 as char
        );
        records.push(TypeRecord::new(display_name, short_name, category as u8 as char));
    }
    info!("{} types introspected", records.len());
    Ok(records)
}
