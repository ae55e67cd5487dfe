use crate::state::ViewMode;
use askama::Template;
use chrono::{DateTime, Utc};
use jobs_core::{DatePosted, EmploymentType, ListingRecord, SearchFilter, DEFAULT_LOCATION};

const ROLE_SHORTCUTS: [(&str, &str); 8] = [
    ("Software Engineer", "Software Engineer Intern"),
    ("Frontend", "Frontend Developer Intern"),
    ("Backend", "Backend Developer Intern"),
    ("Full Stack", "Full Stack Developer Intern"),
    ("Mobile / App", "Mobile App Developer Intern"),
    ("Data Science", "Data Science Intern"),
    ("UI/UX Design", "UI UX Design Intern"),
    ("Product mgmt", "Product Management Intern"),
];

const LOCATION_SHORTCUTS: [&str; 7] = [
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Pune",
    "Gurgaon",
    "Remote",
];

pub struct SearchPage<'a> {
    pub filter: &'a SearchFilter,
    pub view: ViewMode,
    pub listings: &'a [ListingRecord],
    /// Shown above the results when the listing request failed.
    pub notice: Option<&'a str>,
    pub now: DateTime<Utc>,
}

struct HiddenField {
    name: &'static str,
    value: &'static str,
}

struct Chip {
    href: String,
    label: &'static str,
    active: bool,
}

struct FilterGroup {
    title: &'static str,
    chips: Vec<Chip>,
}

struct Card<'a> {
    logo: &'a str,
    employer: &'a str,
    title: &'a str,
    remote: bool,
    location: &'a str,
    salary: String,
    posted: String,
    apply: &'a str,
}

// templates/*.html はエスケープ付きで展開される
#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate<'a> {
    query_text: &'a str,
    hidden_fields: Vec<HiddenField>,
    filter_groups: Vec<FilterGroup>,
    result_count: usize,
    remote_only: bool,
    location_pill: Option<&'a str>,
    date_bucket: &'static str,
    view_chips: Vec<Chip>,
    notice: Option<&'a str>,
    view_class: &'static str,
    cards: Vec<Card<'a>>,
}

/// 検索条件をページの URL に変換する (既定値のパラメータは省く)
pub fn search_href(filter: &SearchFilter, view: ViewMode) -> String {
    let mut params: Vec<(&str, &str)> = vec![("query", filter.query_text.as_str())];

    if let Some(location) = filter.location.as_deref().filter(|l| !l.trim().is_empty()) {
        params.push(("location", location));
    }
    if filter.date_posted != DatePosted::default() {
        params.push(("date_posted", filter.date_posted.as_str()));
    }
    if filter.remote_only {
        params.push(("remote", "true"));
    }
    if filter.employment_type != EmploymentType::default() {
        params.push(("job_type", filter.employment_type.as_str()));
    }
    if view != ViewMode::default() {
        params.push(("view", view.as_str()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/?{}", query)
}

/// Only http(s) links are rendered as-is.
fn safe_href(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        url
    } else {
        "#"
    }
}

pub fn render(page: &SearchPage) -> askama::Result<String> {
    let filter = page.filter;

    SearchTemplate {
        query_text: &filter.query_text,
        hidden_fields: hidden_fields(page),
        filter_groups: filter_groups(page),
        result_count: page.listings.len(),
        remote_only: filter.remote_only,
        location_pill: filter
            .location
            .as_deref()
            .filter(|l| !l.trim().is_empty() && *l != DEFAULT_LOCATION),
        date_bucket: filter.date_posted.as_str(),
        view_chips: [(ViewMode::Grid, "Grid"), (ViewMode::List, "List")]
            .into_iter()
            .map(|(view, label)| Chip {
                href: search_href(filter, view),
                label,
                active: page.view == view,
            })
            .collect(),
        notice: page.notice,
        view_class: page.view.as_str(),
        cards: page
            .listings
            .iter()
            .map(|listing| card(listing, page.now))
            .collect(),
    }
    .render()
}

/// 通常検索のフォームでも絞り込み条件を引き継ぐ
fn hidden_fields(page: &SearchPage) -> Vec<HiddenField> {
    let filter = page.filter;
    let mut fields = Vec::new();
    if filter.remote_only {
        fields.push(HiddenField {
            name: "remote",
            value: "true",
        });
    }
    if filter.employment_type != EmploymentType::default() {
        fields.push(HiddenField {
            name: "job_type",
            value: filter.employment_type.as_str(),
        });
    }
    if page.view != ViewMode::default() {
        fields.push(HiddenField {
            name: "view",
            value: page.view.as_str(),
        });
    }
    fields
}

fn filter_groups(page: &SearchPage) -> Vec<FilterGroup> {
    let filter = page.filter;
    let chip = |target: SearchFilter, label: &'static str, active: bool| Chip {
        href: search_href(&target, page.view),
        label,
        active,
    };

    let roles = ROLE_SHORTCUTS
        .into_iter()
        .map(|(label, query)| {
            let active = filter.query_text.contains(label) || filter.query_text == query;
            let target = SearchFilter {
                query_text: query.to_string(),
                ..filter.clone()
            };
            chip(target, label, active)
        })
        .collect();

    let locations = LOCATION_SHORTCUTS
        .into_iter()
        .map(|location| {
            let active = filter.location.as_deref() == Some(location);
            // 選択中の地域をもう一度押すと解除
            let target = SearchFilter {
                location: if active {
                    None
                } else {
                    Some(location.to_string())
                },
                ..filter.clone()
            };
            chip(target, location, active)
        })
        .collect();

    let job_types = EmploymentType::ALL
        .into_iter()
        .map(|employment_type| {
            let target = SearchFilter {
                employment_type,
                ..filter.clone()
            };
            chip(
                target,
                employment_type.label(),
                filter.employment_type == employment_type,
            )
        })
        .collect();

    let dates = DatePosted::ALL
        .into_iter()
        .map(|date_posted| {
            let target = SearchFilter {
                date_posted,
                ..filter.clone()
            };
            chip(target, date_posted.label(), filter.date_posted == date_posted)
        })
        .collect();

    let remote_target = SearchFilter {
        remote_only: !filter.remote_only,
        ..filter.clone()
    };

    vec![
        FilterGroup {
            title: "Category",
            chips: roles,
        },
        FilterGroup {
            title: "Location",
            chips: locations,
        },
        FilterGroup {
            title: "Job Type",
            chips: job_types,
        },
        FilterGroup {
            title: "Date Posted",
            chips: dates,
        },
        FilterGroup {
            title: "Work Mode",
            chips: vec![chip(remote_target, "Remote only", filter.remote_only)],
        },
    ]
}

fn card(listing: &ListingRecord, now: DateTime<Utc>) -> Card<'_> {
    Card {
        logo: safe_href(listing.logo_url()),
        employer: &listing.employer_name,
        title: &listing.job_title,
        remote: listing.job_is_remote,
        location: listing.location_label(),
        salary: listing.salary_label(),
        posted: listing.posted_label(now),
        apply: safe_href(&listing.job_apply_link),
    }
}
