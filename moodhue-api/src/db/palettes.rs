//! Queries over the `palettes` table

use chrono::Utc;
use moodhue_common::db::models::{NewPalette, PaletteRow, StoredPalette};
use moodhue_common::{Error, Result};
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::debug;

/// Store one analysis result, returning its new id
pub async fn insert_palette(pool: &SqlitePool, palette: &NewPalette) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO palettes (
            input_text, translated_text, polarity, colors, analysis_method,
            confidence_score, sentiment_label, intensity, emotion_type, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&palette.input_text)
    .bind(&palette.translated_text)
    .bind(palette.polarity_text())
    .bind(palette.colors_text())
    .bind(&palette.analysis_method)
    .bind(palette.confidence_score)
    .bind(&palette.sentiment_label)
    .bind(&palette.intensity)
    .bind(&palette.emotion_type)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!("Stored palette {}", id);
    Ok(id)
}

/// Most recent palettes first (ties broken by id)
pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<StoredPalette>> {
    let rows: Vec<PaletteRow> = sqlx::query_as(
        r#"
        SELECT id, input_text, translated_text, polarity, colors, analysis_method,
               confidence_score, sentiment_label, intensity, emotion_type, created_at
        FROM palettes
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(StoredPalette::from).collect())
}

pub async fn count_palettes(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM palettes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Row count per analysis method
pub async fn usage_by_method(pool: &SqlitePool) -> Result<BTreeMap<String, i64>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT analysis_method, COUNT(*) FROM palettes GROUP BY analysis_method",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}

/// Row count per emotion name (the `emotion_type` column, e.g. "Euphoria")
///
/// Rows stored without an emotion type are not counted.
pub async fn distribution_by_emotion(pool: &SqlitePool) -> Result<BTreeMap<String, i64>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT emotion_type, COUNT(*) FROM palettes
        WHERE emotion_type IS NOT NULL
        GROUP BY emotion_type
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}

/// Delete one palette; `Error::NotFound` when no row has `id`
pub async fn delete_palette(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM palettes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Palette {} not found", id)));
    }
    Ok(())
}

/// Delete every palette, returning how many were removed
pub async fn delete_all(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM palettes").execute(pool).await?;
    Ok(result.rows_affected())
}
