/**
 * Portfolio Item Model
 *
 * The item record and its enumerations. Invariants enforced here:
 *
 * - title is mandatory and at most 100 characters
 * - category is one of five fixed values
 * - client and description are mandatory
 * - year falls in 2020..=current_year+1
 * - status is draft or published (default published)
 *
 * JSON serialization matches the public API: camelCase keys, the
 * human-readable category strings, and lowercase status values.
 */

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length
pub const MAX_TITLE_LEN: usize = 100;

/// Earliest accepted project year
pub const MIN_YEAR: i32 = 2020;

/// Default display color
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.1)";

/// Latest accepted project year (next calendar year)
pub fn max_year() -> i32 {
    Utc::now().year() + 1
}

/// Fixed set of portfolio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Strategic Planning")]
    StrategicPlanning,
    #[serde(rename = "Social Media Planning")]
    SocialMediaPlanning,
    #[serde(rename = "SEO & Content Marketing")]
    SeoContentMarketing,
    #[serde(rename = "Design and Graphics")]
    DesignAndGraphics,
    #[serde(rename = "Analytics & Reporting")]
    AnalyticsReporting,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrategicPlanning => "Strategic Planning",
            Self::SocialMediaPlanning => "Social Media Planning",
            Self::SeoContentMarketing => "SEO & Content Marketing",
            Self::DesignAndGraphics => "Design and Graphics",
            Self::AnalyticsReporting => "Analytics & Reporting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Strategic Planning" => Some(Self::StrategicPlanning),
            "Social Media Planning" => Some(Self::SocialMediaPlanning),
            "SEO & Content Marketing" => Some(Self::SeoContentMarketing),
            "Design and Graphics" => Some(Self::DesignAndGraphics),
            "Analytics & Reporting" => Some(Self::AnalyticsReporting),
            _ => None,
        }
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    #[default]
    Published,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

/// Reference to an image in the external asset store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    pub public_id: String,
}

/// Portfolio item record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub client: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    /// Outcome narrative, serialized as `result`
    #[serde(rename = "result", skip_serializing_if = "Option::is_none")]
    pub result_summary: Option<String>,
    pub color: String,
    pub featured: bool,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parse a comma-separated tag string into an ordered tag list
///
/// Tags keep their submitted order; whitespace around each tag is
/// trimmed and empty segments are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a project year against the bounded range
pub fn year_in_range(year: i32) -> bool {
    (MIN_YEAR..=max_year()).contains(&year)
}
