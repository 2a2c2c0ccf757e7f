use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

const JOB_BOARD_API_BASE: &str = "https://api.hh.ru/";

/// One node of the upstream area tree. Every field the API may omit is an
/// explicit `Option`; downstream code never re-checks nested presence.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaNode {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub areas: Vec<AreaNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub from: Option<Decimal>,
    pub to: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Employer {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub raw: Option<String>,
}

/// Dictionary entry (`schedule`, `experience`, `employment`) — only the
/// display name is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VacancySummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub salary: Option<Salary>,
    pub employer: Option<Employer>,
    pub schedule: Option<NamedRef>,
    pub address: Option<Address>,
    pub experience: Option<NamedRef>,
    pub employment: Option<NamedRef>,
    pub area: Option<AreaRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<VacancySummary>,
    pub pages: Option<u32>,
    pub found: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeySkill {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VacancyDetail {
    pub description: Option<String>,
    #[serde(default)]
    pub key_skills: Vec<KeySkill>,
    pub alternate_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancySearchQuery {
    pub text: String,
    pub area: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    async fn fetch_areas(&self) -> Result<Vec<AreaNode>>;

    async fn search_vacancies(&self, query: &VacancySearchQuery) -> Result<SearchPage>;

    async fn fetch_vacancy(&self, api_id: &str) -> Result<VacancyDetail>;
}

#[derive(Clone)]
pub struct HhService {
    http: Client,
    base_url: Url,
}

impl HhService {
    pub fn new(http: Client) -> Self {
        let base_url = Url::parse(JOB_BOARD_API_BASE).expect("valid default job board URL");
        Self::with_base_url(http, base_url)
    }

    pub fn with_base_url(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| Error::Config(format!("Invalid job board endpoint {}: {}", path, err)))
    }
}

#[async_trait]
impl JobBoardApi for HhService {
    async fn fetch_areas(&self) -> Result<Vec<AreaNode>> {
        let url = self.endpoint("areas")?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<Vec<AreaNode>>().await?)
    }

    async fn search_vacancies(&self, query: &VacancySearchQuery) -> Result<SearchPage> {
        let url = self.endpoint("vacancies")?;
        let mut params: Vec<(&str, String)> = vec![
            ("text", query.text.clone()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        if let Some(area) = &query.area {
            params.push(("area", area.clone()));
        }

        let response = self
            .http
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<SearchPage>().await?)
    }

    async fn fetch_vacancy(&self, api_id: &str) -> Result<VacancyDetail> {
        let url = self.endpoint(&format!("vacancies/{}", api_id))?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<VacancyDetail>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_area_tree() {
        let raw = r#"
        [
            {
                "id": "40",
                "name": "Kazakhstan",
                "areas": [
                    {"id": "159", "name": "Astana", "areas": []},
                    {"id": "160", "name": "Almaty", "areas": []}
                ]
            }
        ]
        "#;
        let tree: Vec<AreaNode> = serde_json::from_str(raw).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id.as_deref(), Some("40"));
        assert_eq!(tree[0].areas.len(), 2);
        assert_eq!(tree[0].areas[1].name.as_deref(), Some("Almaty"));
    }

    #[test]
    fn decodes_area_node_with_missing_fields() {
        let raw = r#"{"name": "Nowhere"}"#;
        let node: AreaNode = serde_json::from_str(raw).unwrap();
        assert!(node.id.is_none());
        assert!(node.areas.is_empty());
    }

    #[test]
    fn decodes_search_page_with_partial_salary() {
        let raw = r#"
        {
            "items": [
                {
                    "id": "112233",
                    "name": "Backend Engineer",
                    "salary": {"from": 250000, "to": null, "currency": "RUR"},
                    "employer": {"name": "Acme"},
                    "schedule": {"name": "Remote"},
                    "area": {"id": "1", "name": "Moscow"}
                },
                {"id": "445566", "name": "DBA"}
            ],
            "pages": 12,
            "found": 1200
        }
        "#;
        let page: SearchPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.items.len(), 2);
        let first = &page.items[0];
        assert_eq!(
            first.salary.as_ref().and_then(|s| s.from),
            Some(Decimal::from(250_000))
        );
        assert!(first.salary.as_ref().unwrap().to.is_none());
        assert_eq!(first.area.as_ref().and_then(|a| a.id.as_deref()), Some("1"));
        assert!(page.items[1].salary.is_none());
        assert_eq!(page.found, Some(1200));
    }

    #[test]
    fn decodes_vacancy_detail() {
        let raw = r#"
        {
            "description": "<p>We build things.</p>",
            "key_skills": [{"name": "Rust"}, {"name": "SQL"}],
            "alternate_url": "https://hh.ru/vacancy/112233"
        }
        "#;
        let detail: VacancyDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.key_skills.len(), 2);
        assert_eq!(detail.key_skills[0].name.as_deref(), Some("Rust"));
        assert_eq!(
            detail.alternate_url.as_deref(),
            Some("https://hh.ru/vacancy/112233")
        );
    }

    #[test]
    fn decodes_empty_detail() {
        let detail: VacancyDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.description.is_none());
        assert!(detail.key_skills.is_empty());
    }
}
