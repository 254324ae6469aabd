//! Typed row models for the five tables.
//!
//! External data loaders read and write rows through these structs; the
//! admin operations themselves never touch row data. Field shapes mirror
//! the descriptors in the parent module one-to-one.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A legislative bill record (`T_LAW`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Law {
    /// Internal id (snowflake, 18 chars)
    pub id: String,
    /// e-Gov lawId
    pub law_id: Option<String>,
    /// e-Gov lawNum, e.g. Act No. 75 of 2022
    pub law_num: Option<String>,
    /// One of the `law_type` codes
    pub law_type: Option<String>,
    /// One of the `jurisdiction` codes
    pub jurisdiction: Option<String>,
    pub title: String,
    pub promulgation_date: Option<NaiveDate>,
    pub enforcement_date: Option<NaiveDate>,
    pub summary: Option<String>,
    pub law_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// A classification bucket (`M_CATEGORY`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: String,
    /// e-Gov classification code, 3 chars, unique
    pub category_cd: String,
    pub name: String,
    pub description: Option<String>,
}

/// A political party (`M_PARTY`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Party {
    pub id: String,
    /// Party name, unique
    pub name: String,
    pub short_name: Option<String>,
    pub founded_on: Option<NaiveDate>,
    pub dissolved_on: Option<NaiveDate>,
}

/// Law <-> category link (`T_LAW_CATEGORY_MAP`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LawCategoryMap {
    pub law_id: String,
    pub category_id: String,
}

/// Party <-> law link with role metadata (`T_PARTY_LAW_ROLE`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PartyLawRole {
    pub law_id: String,
    pub party_id: String,
    /// One of the `submission_role` codes
    pub submission_role: Option<String>,
    /// One of the `promotion_role` codes
    pub promotion_role: Option<String>,
    /// One of the `vote_role` codes
    pub vote_role: Option<String>,
    /// Supplementary note (factions, defections)
    pub note: Option<String>,
}
