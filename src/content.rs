//! The content boundary: typed records delivered by the headless CMS and the
//! five fetch functions the page is assembled from.
//!
//! Each fetch function issues one fixed GROQ query through a server function
//! and returns a typed snapshot. Results are cached per document type on the
//! browser so remounting a section never refetches within a page load.

#[cfg(feature = "ssr")]
pub mod client;
pub mod image;
pub mod portable_text;

use std::sync::LazyLock;

use chrono::NaiveDate;
use dashmap::DashMap;
use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use image::ImageRef;
use portable_text::Block;

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<&'static str, serde_json::Value>> =
    LazyLock::new(DashMap::new);

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("content query failed: {0}")]
    Http(String),
    #[error("couldn't decode content response: {0}")]
    Decode(String),
}

/// Singleton document describing the site owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub hero_image: Option<ImageRef>,
    pub profile_pic: Option<ImageRef>,
    pub background_information: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub url: String,
}

/// `progress` is expected in [0, 100] but the CMS does not enforce it; values
/// are only clamped visually via [`Skill::bar_width`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image: Option<ImageRef>,
    pub progress: i32,
}

impl Skill {
    /// Width of the hover progress bar in percent.
    pub fn bar_width(&self) -> i32 {
        self.progress.clamp(0, 100)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub company_image: Option<ImageRef>,
    pub job_title: String,
    pub date_started: Option<NaiveDate>,
    pub date_ended: Option<NaiveDate>,
    pub is_currently_working_here: bool,
    pub technologies: Vec<Skill>,
    pub points: Vec<String>,
}

impl Experience {
    /// Tenure line for the experience card, e.g. `7/1/2021 - Present`.
    ///
    /// A current position never reads `date_ended`; a missing end date also
    /// renders as "Present" rather than an empty range.
    pub fn tenure(&self) -> String {
        let start = self
            .date_started
            .map(format_card_date)
            .unwrap_or_default();
        let end = if self.is_currently_working_here {
            "Present".to_string()
        } else {
            self.date_ended
                .map(format_card_date)
                .unwrap_or_else(|| "Present".to_string())
        };
        format!("{start} - {end}")
    }
}

fn format_card_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Descending sort by start date, applied client-side on every render so the
/// ordering holds even if the query result arrives unsorted.
pub fn sort_newest_first(experiences: &mut [Experience]) {
    experiences.sort_by(|a, b| b.date_started.cmp(&a.date_started));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image: Option<ImageRef>,
    pub summary: Vec<Block>,
    pub technologies: Vec<Skill>,
    pub link_to_build: Option<String>,
}

pub const PAGE_INFO_QUERY: &str = r#"*[_type == "pageInfo"][0]"#;
pub const SOCIALS_QUERY: &str = r#"*[_type == "social"]"#;
pub const SKILLS_QUERY: &str = r#"*[_type == "skill"]"#;
pub const EXPERIENCES_QUERY: &str =
    r#"*[_type == "experience"] | order(dateStarted desc) { ..., technologies[]-> }"#;
pub const PROJECTS_QUERY: &str =
    r#"*[_type == "project"] | order(_createdAt desc) { ..., technologies[]-> }"#;

#[server(input = GetUrl)]
pub async fn get_page_info() -> Result<Option<PageInfo>, ServerFnError> {
    let client = client::content_client().map_err(ServerFnError::new)?;
    client
        .query(PAGE_INFO_QUERY)
        .await
        .map_err(ServerFnError::new)
}

#[server(input = GetUrl)]
pub async fn get_socials() -> Result<Vec<Social>, ServerFnError> {
    let client = client::content_client().map_err(ServerFnError::new)?;
    client.query(SOCIALS_QUERY).await.map_err(ServerFnError::new)
}

#[server(input = GetUrl)]
pub async fn get_skills() -> Result<Vec<Skill>, ServerFnError> {
    let client = client::content_client().map_err(ServerFnError::new)?;
    client.query(SKILLS_QUERY).await.map_err(ServerFnError::new)
}

#[server(input = GetUrl)]
pub async fn get_experiences() -> Result<Vec<Experience>, ServerFnError> {
    let client = client::content_client().map_err(ServerFnError::new)?;
    client
        .query(EXPERIENCES_QUERY)
        .await
        .map_err(ServerFnError::new)
}

#[server(input = GetUrl)]
pub async fn get_projects() -> Result<Vec<Project>, ServerFnError> {
    let client = client::content_client().map_err(ServerFnError::new)?;
    client
        .query(PROJECTS_QUERY)
        .await
        .map_err(ServerFnError::new)
}

/// Consult the per-type cache, otherwise run the fetch and (on the browser)
/// remember the result. Failures collapse to `None` so sections render what
/// they have.
async fn cached<T, F, Fut>(doc_type: &'static str, fetch: F) -> Option<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, ServerFnError>>,
{
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(raw) = cache.get(doc_type) {
        if let Ok(value) = serde_json::from_value(raw.clone()) {
            return Some(value);
        }
    }
    match fetch().await {
        Ok(value) => {
            // only cache on the browser; the server renders each page fresh
            #[cfg(feature = "hydrate")]
            if let Ok(raw) = serde_json::to_value(&value) {
                cache.insert(doc_type, raw);
            }
            Some(value)
        }
        Err(e) => {
            log::warn!("fetching {doc_type} failed: {e}");
            None
        }
    }
}

pub async fn fetch_page_info() -> Option<PageInfo> {
    cached("pageInfo", get_page_info).await.flatten()
}

pub async fn fetch_socials() -> Vec<Social> {
    cached("social", get_socials).await.unwrap_or_default()
}

pub async fn fetch_skills() -> Vec<Skill> {
    cached("skill", get_skills).await.unwrap_or_default()
}

pub async fn fetch_experiences() -> Vec<Experience> {
    cached("experience", get_experiences).await.unwrap_or_default()
}

pub async fn fetch_projects() -> Vec<Project> {
    cached("project", get_projects).await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(id: &str, started: Option<&str>) -> Experience {
        Experience {
            id: id.to_string(),
            date_started: started.map(|s| s.parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn experiences_sort_newest_first() {
        let mut experiences = vec![
            experience("old", Some("2017-12-01")),
            experience("new", Some("2024-03-01")),
            experience("mid", Some("2021-07-15")),
        ];
        sort_newest_first(&mut experiences);
        let ids = experiences.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn experiences_without_start_date_sort_last() {
        let mut experiences = vec![
            experience("none", None),
            experience("dated", Some("2020-01-01")),
        ];
        sort_newest_first(&mut experiences);
        assert_eq!(experiences[0].id, "dated");
        assert_eq!(experiences[1].id, "none");
    }

    #[test]
    fn current_position_renders_present_and_ignores_end_date() {
        let exp = Experience {
            date_started: Some("2021-07-01".parse().unwrap()),
            date_ended: Some("2022-01-01".parse().unwrap()),
            is_currently_working_here: true,
            ..Default::default()
        };
        assert_eq!(exp.tenure(), "7/1/2021 - Present");
    }

    #[test]
    fn ended_position_renders_end_date() {
        let exp = Experience {
            date_started: Some("2017-12-05".parse().unwrap()),
            date_ended: Some("2020-03-10".parse().unwrap()),
            is_currently_working_here: false,
            ..Default::default()
        };
        assert_eq!(exp.tenure(), "12/5/2017 - 3/10/2020");
    }

    #[test]
    fn missing_end_date_falls_back_to_present() {
        let exp = Experience {
            date_started: Some("2019-06-01".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(exp.tenure(), "6/1/2019 - Present");
    }

    #[test]
    fn progress_bar_width_is_clamped() {
        let skill = |progress| Skill {
            progress,
            ..Default::default()
        };
        assert_eq!(skill(85).bar_width(), 85);
        assert_eq!(skill(0).bar_width(), 0);
        assert_eq!(skill(100).bar_width(), 100);
        assert_eq!(skill(140).bar_width(), 100);
        assert_eq!(skill(-20).bar_width(), 0);
    }

    #[test]
    fn experience_deserializes_from_cms_shape() {
        let raw = serde_json::json!({
            "_id": "exp1",
            "_type": "experience",
            "company": "Acme",
            "jobTitle": "Engineer",
            "dateStarted": "2021-07-01",
            "isCurrentlyWorkingHere": true,
            "technologies": [
                { "_id": "sk1", "title": "Rust", "progress": 90 }
            ],
            "points": ["Did things"]
        });
        let exp: Experience = serde_json::from_value(raw).unwrap();
        assert_eq!(exp.company, "Acme");
        assert!(exp.is_currently_working_here);
        assert_eq!(exp.date_ended, None);
        assert_eq!(exp.technologies[0].title, "Rust");
    }

    #[test]
    fn partial_page_info_deserializes_with_defaults() {
        let raw = serde_json::json!({ "_id": "pi", "name": "Ruhail" });
        let info: PageInfo = serde_json::from_value(raw).unwrap();
        assert_eq!(info.name, "Ruhail");
        assert_eq!(info.role, "");
        assert!(info.hero_image.is_none());
        assert!(info.email.is_none());
    }
}
