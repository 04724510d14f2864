//! Wire DTOs for the fact-checking backend and the auth provider.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Enumerations carry lowercase wire names; unknown claim statuses
//! are preserved verbatim so the dashboard can still render them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Declared kind of submitted content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Url,
    Image,
    Video,
}

impl ContentType {
    /// Lowercase wire name, also used as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Categorical outcome of a claim analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Misleading,
    /// Also covers verdict strings this client does not know.
    #[serde(other)]
    Uncertain,
}

impl Verdict {
    /// Human-facing badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Misleading => "Misleading",
            Self::Uncertain => "Uncertain",
        }
    }

    /// CSS modifier used by the verdict badge.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Misleading => "misleading",
            Self::Uncertain => "uncertain",
        }
    }
}

/// Processing status of a claim. Unknown values are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl ClaimStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(raw),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// A submitted claim as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub content: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub original_url: Option<String>,
    pub status: ClaimStatus,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// One excerpt of evidence cited by the analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub source: String,
    pub excerpt: String,
    #[serde(default)]
    pub credibility_score: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A source reference listed under the analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub verified: bool,
}

/// Analysis result attached to a claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub verdict: Verdict,
    /// Confidence in `0.0..=1.0`.
    pub confidence_score: f64,
    pub summary: String,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// Free-text reasoning, possibly Markdown.
    #[serde(default)]
    pub ai_reasoning: String,
}

/// Response of `GET /api/v1/claims/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimDetail {
    pub claim: Claim,
    #[serde(default)]
    pub analysis: Option<Analysis>,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub comment_count: u32,
}

/// Response of `POST /api/v1/claims/submit`; only the id is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedClaim {
    pub id: String,
}

/// Compact claim row shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentClaim {
    pub id: String,
    pub content: String,
    pub status: ClaimStatus,
    pub created_at: String,
}

/// Response of `GET /api/v1/dashboard/stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub total_claims: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub pending_claims: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub completed_claims: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub rti_requests: u32,
    #[serde(default)]
    pub recent_claims: Vec<RecentClaim>,
}

/// Direction of a comment vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// Public author info embedded in each comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_expert: bool,
}

impl CommentAuthor {
    /// Full name when present, otherwise the email local part.
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => email_local_part(&self.email).to_owned(),
        }
    }
}

/// A discussion comment on a claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub user: CommentAuthor,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub upvotes: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub downvotes: i64,
    #[serde(default)]
    pub is_expert_response: bool,
    pub created_at: String,
}

impl Comment {
    /// Net vote score.
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Authenticated user carried inside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Session object issued by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

impl Session {
    /// Short display handle derived from the user's email.
    pub fn handle(&self) -> &str {
        email_local_part(&self.user.email)
    }
}

/// Portion of an email address before `@`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            {
                if let Some(float) = number.as_f64()
                    && float.is_finite()
                    && float.fract() == 0.0
                    && float >= i64::MIN as f64
                    && float <= i64::MAX as f64
                {
                    return Ok(float as i64);
                }
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
