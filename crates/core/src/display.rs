use crate::ListingRecord;
use chrono::{DateTime, Utc};

pub const LOGO_PLACEHOLDER_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/3/3f/Placeholder_view_vector.svg";

pub const SALARY_NOT_DISCLOSED: &str = "Stipend not disclosed";

impl ListingRecord {
    pub fn logo_url(&self) -> &str {
        self.employer_logo
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(LOGO_PLACEHOLDER_URL)
    }

    /// 都市 → 国 → "Remote" の順で表示用の地名を決める
    pub fn location_label(&self) -> &str {
        [&self.job_city, &self.job_country]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.is_empty())
            .unwrap_or("Remote")
    }

    pub fn salary_label(&self) -> String {
        match (self.job_min_salary, self.job_max_salary) {
            (Some(min), Some(max)) if min > 0.0 && max > 0.0 => {
                let currency = self.job_salary_currency.as_deref().unwrap_or_default();
                format!("{} {}-{}", currency, format_amount(min), format_amount(max))
                    .trim()
                    .to_string()
            }
            _ => SALARY_NOT_DISCLOSED.to_string(),
        }
    }

    /// 投稿日時を "3 days ago" のような相対表記にする
    ///
    /// 日時が空、または RFC 3339 として読めない場合は "Recently" を返す。
    pub fn posted_label(&self, now: DateTime<Utc>) -> String {
        let Ok(posted) = DateTime::parse_from_rfc3339(&self.job_posted_at_datetime_utc) else {
            return "Recently".to_string();
        };

        let elapsed = now.signed_duration_since(posted.with_timezone(&Utc));
        let minutes = elapsed.num_minutes();
        let hours = elapsed.num_hours();
        let days = elapsed.num_days();

        if minutes < 1 {
            "just now".to_string()
        } else if hours < 1 {
            plural(minutes, "minute")
        } else if days < 1 {
            plural(hours, "hour")
        } else if days < 30 {
            plural(days, "day")
        } else if days < 365 {
            plural(days / 30, "month")
        } else {
            plural(days / 365, "year")
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
