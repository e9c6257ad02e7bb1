//! Row decoding
//!
//! This module converts raw MySQL result rows into [`SqlRow`] values,
//! dispatching on the column's declared type.

use crate::row::SqlRow;
use crate::types::SqlValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo};

/// Decode a full result row into an ordered column-to-value mapping.
pub fn decode_row(row: &MySqlRow) -> Result<SqlRow, sqlx::Error> {
    let mut pairs = Vec::with_capacity(row.len());
    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, index, column.type_info().name())?;
        pairs.push((column.name().to_string(), value));
    }
    Ok(SqlRow::from_pairs(pairs))
}

fn decode_column(row: &MySqlRow, index: usize, type_name: &str) -> Result<SqlValue, sqlx::Error> {
    let value = match type_name {
        "NULL" => None,
        "BOOLEAN" => row.try_get::<Option<bool>, _>(index)?.map(SqlValue::Boolean),
        "TINYINT" => row.try_get::<Option<i8>, _>(index)?.map(SqlValue::TinyInt),
        "SMALLINT" => row.try_get::<Option<i16>, _>(index)?.map(SqlValue::SmallInt),
        "INT" | "MEDIUMINT" => row.try_get::<Option<i32>, _>(index)?.map(SqlValue::Integer),
        "BIGINT" => row.try_get::<Option<i64>, _>(index)?.map(SqlValue::BigInt),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "INT UNSIGNED" | "MEDIUMINT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(index)?
            .map(SqlValue::UnsignedBigInt),
        "YEAR" => row
            .try_get::<Option<u16>, _>(index)?
            .map(|y| SqlValue::Integer(i32::from(y))),
        "FLOAT" => row.try_get::<Option<f32>, _>(index)?.map(SqlValue::Float),
        "DOUBLE" => row.try_get::<Option<f64>, _>(index)?.map(SqlValue::Double),
        "DECIMAL" => row
            .try_get::<Option<Decimal>, _>(index)?
            .map(SqlValue::Decimal),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(SqlValue::Date),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map(SqlValue::Time),
        "DATETIME" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(SqlValue::DateTime),
        "TIMESTAMP" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(SqlValue::Timestamp),
        "JSON" => row
            .try_get::<Option<serde_json::Value>, _>(index)?
            .map(SqlValue::Json),
        "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET" => {
            row.try_get::<Option<String>, _>(index)?.map(SqlValue::Text)
        }
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)?
            .map(SqlValue::Bytes),
        // BIT, GEOMETRY and anything exotic: try text first, then raw bytes
        _ => match row.try_get::<Option<String>, _>(index) {
            Ok(text) => text.map(SqlValue::Text),
            Err(_) => row
                .try_get::<Option<Vec<u8>>, _>(index)?
                .map(SqlValue::Bytes),
        },
    };
    Ok(value.unwrap_or(SqlValue::Null))
}
