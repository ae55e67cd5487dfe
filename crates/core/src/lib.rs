mod display;

use serde::{Deserialize, Serialize};

pub use display::{LOGO_PLACEHOLDER_URL, SALARY_NOT_DISCLOSED};

/// 検索地域が指定されていない場合に使う地域
pub const DEFAULT_LOCATION: &str = "India";

/// 投稿日の絞り込み区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatePosted {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "3days")]
    ThreeDays,
    #[serde(rename = "week")]
    Week,
    #[default]
    #[serde(rename = "month")]
    Month,
}

impl DatePosted {
    pub const ALL: [DatePosted; 5] = [
        Self::All,
        Self::Today,
        Self::ThreeDays,
        Self::Week,
        Self::Month,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "3days" => Some(Self::ThreeDays),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::ThreeDays => "3days",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Any time",
            Self::Today => "Past 24 hours",
            Self::ThreeDays => "Past 3 days",
            Self::Week => "Past week",
            Self::Month => "Past month",
        }
    }
}

/// 雇用形態の列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmploymentType {
    #[default]
    Intern,
    Fulltime,
    Contract,
    Parttime,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        Self::Intern,
        Self::Fulltime,
        Self::Contract,
        Self::Parttime,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "INTERN" => Some(Self::Intern),
            "FULLTIME" => Some(Self::Fulltime),
            "CONTRACT" => Some(Self::Contract),
            "PARTTIME" => Some(Self::Parttime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intern => "INTERN",
            Self::Fulltime => "FULLTIME",
            Self::Contract => "CONTRACT",
            Self::Parttime => "PARTTIME",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Intern => "Internship",
            Self::Fulltime => "Full-time",
            Self::Contract => "Contract",
            Self::Parttime => "Part-time",
        }
    }
}

/// プロバイダに依存しない検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub query_text: String,
    pub location: Option<String>,
    pub date_posted: DatePosted,
    pub remote_only: bool,
    pub employment_type: EmploymentType,
}

impl SearchFilter {
    pub fn new(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            location: None,
            date_posted: DatePosted::default(),
            remote_only: false,
            employment_type: EmploymentType::default(),
        }
    }

    /// Location to search in, with blanks treated as unset.
    pub fn effective_location(&self) -> &str {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
    }
}

impl From<&str> for SearchFilter {
    fn from(query_text: &str) -> Self {
        Self::new(query_text)
    }
}

impl From<String> for SearchFilter {
    fn from(query_text: String) -> Self {
        Self::new(query_text)
    }
}

/// 自然文から変換された部分的な検索条件
///
/// `query` は必ず空でない。`location` と `date_posted` はモデルが返した場合のみ存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSearchFilter {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<DatePosted>,
}

impl PartialSearchFilter {
    /// Plain keyword search used when translation yields nothing usable.
    pub fn plain(prompt: impl Into<String>) -> Self {
        Self {
            query: prompt.into(),
            location: None,
            date_posted: None,
        }
    }

    pub fn merge_into(self, mut filter: SearchFilter) -> SearchFilter {
        filter.query_text = self.query;
        if let Some(location) = self.location {
            filter.location = Some(location);
        }
        if let Some(date_posted) = self.date_posted {
            filter.date_posted = date_posted;
        }
        filter
    }
}

/// 求人検索 API が返す1件分の求人
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub employer_name: String,
    #[serde(default)]
    pub employer_logo: Option<String>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_publisher: String,
    #[serde(default)]
    pub job_employment_type: String,
    #[serde(default)]
    pub job_apply_link: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_is_remote: bool,
    #[serde(default)]
    pub job_posted_at_datetime_utc: String,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_min_salary: Option<f64>,
    #[serde(default)]
    pub job_max_salary: Option<f64>,
    #[serde(default)]
    pub job_salary_currency: Option<String>,
    #[serde(default)]
    pub job_salary_period: Option<String>,
}

/// 求人検索 API のレスポンス全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub data: Vec<ListingRecord>,
}
