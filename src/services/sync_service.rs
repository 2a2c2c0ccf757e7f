use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::models::region::Region;
use crate::models::vacancy::{SyncState, Vacancy};
use crate::services::hh_service::{AreaNode, JobBoardApi, VacancySearchQuery};
use crate::services::sync_store::{FieldChange, IncomingVacancy, SyncStore};

/// Fixed courtesy pause after every N reconciled listings, so detail fetches
/// do not trip the upstream rate limit.
const THROTTLE_EVERY: u64 = 5;

/// Mirrors the upstream recruitment API into the local store: regions first
/// (vacancies reference them), then paginated vacancy listings.
#[derive(Clone)]
pub struct SyncService {
    api: Arc<dyn JobBoardApi>,
    store: Arc<dyn SyncStore>,
    throttle_pause: Duration,
}

impl SyncService {
    pub fn new(api: Arc<dyn JobBoardApi>, store: Arc<dyn SyncStore>, throttle_pause: Duration) -> Self {
        Self {
            api,
            store,
            throttle_pause,
        }
    }

    /// Mirrors the upstream area tree into the region table and returns the
    /// top-level regions that were observed.
    ///
    /// The tree is walked with an explicit worklist of (node, parent) pairs;
    /// a node missing its id or name is skipped with a warning, and its
    /// subtree with it, since the children would have no parent row. Regions
    /// absent from the response are left untouched.
    pub async fn sync_regions(&self) -> Result<Vec<Region>> {
        let tree = self.api.fetch_areas().await?;

        let mut roots = Vec::new();
        let mut worklist: VecDeque<(AreaNode, Option<Uuid>)> =
            tree.into_iter().map(|node| (node, None)).collect();

        while let Some((node, parent_id)) = worklist.pop_front() {
            let (Some(api_id), Some(name)) = (node.id, node.name) else {
                warn!("Skipping malformed area node without id or name");
                continue;
            };

            let region = match self.store.find_region_by_api_id(&api_id).await? {
                Some(existing) => {
                    if existing.name != name || existing.parent_id != parent_id {
                        self.store.update_region(existing.id, &name, parent_id).await?
                    } else {
                        existing
                    }
                }
                None => self.store.insert_region(&api_id, &name, parent_id).await?,
            };

            if parent_id.is_none() {
                roots.push(region.clone());
            }
            for child in node.areas {
                worklist.push_back((child, Some(region.id)));
            }
        }

        info!(top_level = roots.len(), "Region sync finished");
        Ok(roots)
    }

    /// Paginates the upstream search, fetches the full detail of every
    /// listing and reconciles it against the local table. Returns the number
    /// of listings reconciled.
    ///
    /// Pagination stops on a short page. Any upstream failure aborts the run
    /// (no retry) and the count so far is returned.
    pub async fn sync_vacancies(
        &self,
        text: &str,
        area: Option<&str>,
        start_page: u32,
        per_page: u32,
    ) -> Result<u64> {
        // Region the caller filtered on, used when a listing's own area
        // cannot be resolved locally.
        let fallback_region = match area {
            Some(area_api_id) => self
                .store
                .find_region_by_api_id(area_api_id)
                .await?
                .map(|region| region.id),
            None => None,
        };

        let mut region_cache: HashMap<String, Option<Uuid>> = HashMap::new();
        let mut page = start_page;
        let mut processed: u64 = 0;

        'pages: loop {
            let query = VacancySearchQuery {
                text: text.to_string(),
                area: area.map(str::to_string),
                page,
                per_page,
            };
            let batch = match self.api.search_vacancies(&query).await {
                Ok(batch) => batch,
                Err(err) => {
                    error!(page, error = %err, "Vacancy search failed, aborting sync");
                    break;
                }
            };
            let page_len = batch.items.len();

            for listing in batch.items {
                let Some(api_id) = listing.id.clone() else {
                    warn!("Skipping vacancy listing without an external id");
                    continue;
                };
                let Some(title) = listing.name.clone() else {
                    warn!(api_id = %api_id, "Skipping vacancy listing without a title");
                    continue;
                };

                let detail = match self.api.fetch_vacancy(&api_id).await {
                    Ok(detail) => detail,
                    Err(err) => {
                        error!(api_id = %api_id, error = %err, "Vacancy detail fetch failed, aborting sync");
                        break 'pages;
                    }
                };

                let region_id = match listing.area.as_ref().and_then(|a| a.id.clone()) {
                    Some(area_api_id) => {
                        let resolved = match region_cache.get(&area_api_id) {
                            Some(cached) => *cached,
                            None => {
                                let found = self
                                    .store
                                    .find_region_by_api_id(&area_api_id)
                                    .await?
                                    .map(|region| region.id);
                                region_cache.insert(area_api_id, found);
                                found
                            }
                        };
                        resolved.or(fallback_region)
                    }
                    None => fallback_region,
                };

                let incoming =
                    IncomingVacancy::from_parts(api_id, title, &listing, &detail, region_id);

                match self.store.find_vacancy_by_api_id(&incoming.api_id).await? {
                    None => {
                        self.store.insert_vacancy(&incoming).await?;
                    }
                    Some(existing) => match existing.sync_state {
                        // A human owns this row now; upstream must not win.
                        SyncState::ManuallyOverridden => {}
                        SyncState::Synced => {
                            let changes = compute_changes(&existing, &incoming);
                            if !changes.is_empty() {
                                self.store.update_vacancy(existing.id, &changes).await?;
                            }
                        }
                    },
                }

                processed += 1;
                if processed % THROTTLE_EVERY == 0 {
                    tokio::time::sleep(self.throttle_pause).await;
                }
            }

            if page_len < per_page as usize {
                break;
            }
            page += 1;
        }

        info!(processed, "Vacancy sync finished");
        Ok(processed)
    }
}

/// Field-by-field diff between the stored row and the incoming snapshot.
/// A field that disappeared upstream becomes an explicit change to NULL.
fn compute_changes(current: &Vacancy, incoming: &IncomingVacancy) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if incoming.title != current.title {
        changes.push(FieldChange::Title(incoming.title.clone()));
    }
    if incoming.company_name != current.company_name {
        changes.push(FieldChange::CompanyName(incoming.company_name.clone()));
    }
    if incoming.description != current.description {
        changes.push(FieldChange::Description(incoming.description.clone()));
    }
    if incoming.region_id != current.region_id {
        changes.push(FieldChange::RegionId(incoming.region_id));
    }
    if incoming.salary_from != current.salary_from {
        changes.push(FieldChange::SalaryFrom(incoming.salary_from));
    }
    if incoming.salary_to != current.salary_to {
        changes.push(FieldChange::SalaryTo(incoming.salary_to));
    }
    if incoming.currency != current.currency {
        changes.push(FieldChange::Currency(incoming.currency.clone()));
    }
    if incoming.address != current.address {
        changes.push(FieldChange::Address(incoming.address.clone()));
    }
    if incoming.experience != current.experience {
        changes.push(FieldChange::Experience(incoming.experience.clone()));
    }
    if incoming.schedule != current.schedule {
        changes.push(FieldChange::Schedule(incoming.schedule.clone()));
    }
    if incoming.key_skills != current.key_skills {
        changes.push(FieldChange::KeySkills(incoming.key_skills.clone()));
    }
    if incoming.employment_type != current.employment_type {
        changes.push(FieldChange::EmploymentType(incoming.employment_type.clone()));
    }
    if incoming.url != current.url {
        changes.push(FieldChange::Url(incoming.url.clone()));
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::hh_service::{
        AreaRef, MockJobBoardApi, SearchPage, VacancyDetail, VacancySummary,
    };
    use crate::services::sync_store::MockSyncStore;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn area(id: &str, name: &str, areas: Vec<AreaNode>) -> AreaNode {
        AreaNode {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            areas,
        }
    }

    fn region_row(api_id: &str, name: &str, parent_id: Option<Uuid>) -> Region {
        Region {
            id: Uuid::new_v4(),
            api_id: Some(api_id.to_string()),
            name: name.to_string(),
            parent_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn listing(id: &str, title: &str) -> VacancySummary {
        VacancySummary {
            id: Some(id.to_string()),
            name: Some(title.to_string()),
            salary: None,
            employer: None,
            schedule: None,
            address: None,
            experience: None,
            employment: None,
            area: None,
        }
    }

    fn empty_detail() -> VacancyDetail {
        VacancyDetail {
            description: None,
            key_skills: vec![],
            alternate_url: None,
        }
    }

    fn stored_from(incoming: &IncomingVacancy, state: SyncState) -> Vacancy {
        Vacancy {
            id: Uuid::new_v4(),
            api_id: Some(incoming.api_id.clone()),
            title: incoming.title.clone(),
            company_name: incoming.company_name.clone(),
            description: incoming.description.clone(),
            region_id: incoming.region_id,
            salary_from: incoming.salary_from,
            salary_to: incoming.salary_to,
            currency: incoming.currency.clone(),
            address: incoming.address.clone(),
            experience: incoming.experience.clone(),
            schedule: incoming.schedule.clone(),
            key_skills: incoming.key_skills.clone(),
            employment_type: incoming.employment_type.clone(),
            url: incoming.url.clone(),
            sync_state: state,
            deleted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn inserted(incoming: &IncomingVacancy) -> Vacancy {
        stored_from(incoming, SyncState::Synced)
    }

    fn bare_incoming(api_id: &str, title: &str) -> IncomingVacancy {
        IncomingVacancy::from_parts(
            api_id.to_string(),
            title.to_string(),
            &listing(api_id, title),
            &empty_detail(),
            None,
        )
    }

    fn service(api: MockJobBoardApi, store: MockSyncStore) -> SyncService {
        SyncService::new(Arc::new(api), Arc::new(store), Duration::ZERO)
    }

    #[tokio::test]
    async fn region_tree_creates_rows_with_parent_links() {
        let mut api = MockJobBoardApi::new();
        api.expect_fetch_areas().times(1).returning(|| {
            Ok(vec![area(
                "40",
                "Kazakhstan",
                vec![area("159", "Astana", vec![]), area("160", "Almaty", vec![])],
            )])
        });

        let root_id = Uuid::new_v4();
        let mut store = MockSyncStore::new();
        store
            .expect_find_region_by_api_id()
            .times(3)
            .returning(|_| Ok(None));
        store
            .expect_insert_region()
            .withf(|api_id, name, parent_id| {
                api_id == "40" && name == "Kazakhstan" && parent_id.is_none()
            })
            .times(1)
            .returning(move |api_id, name, parent_id| {
                Ok(Region {
                    id: root_id,
                    api_id: Some(api_id.to_string()),
                    name: name.to_string(),
                    parent_id,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });
        store
            .expect_insert_region()
            .withf(move |api_id, _, parent_id| {
                (api_id == "159" || api_id == "160") && *parent_id == Some(root_id)
            })
            .times(2)
            .returning(|api_id, name, parent_id| Ok(region_row(api_id, name, parent_id)));

        let roots = service(api, store).sync_regions().await.unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, root_id);
        assert_eq!(roots[0].name, "Kazakhstan");
    }

    #[tokio::test]
    async fn region_sync_is_idempotent_for_unchanged_tree() {
        let mut api = MockJobBoardApi::new();
        api.expect_fetch_areas().times(1).returning(|| {
            Ok(vec![area(
                "40",
                "Kazakhstan",
                vec![area("159", "Astana", vec![]), area("160", "Almaty", vec![])],
            )])
        });

        let root = region_row("40", "Kazakhstan", None);
        let astana = region_row("159", "Astana", Some(root.id));
        let almaty = region_row("160", "Almaty", Some(root.id));

        let mut store = MockSyncStore::new();
        store
            .expect_find_region_by_api_id()
            .times(3)
            .returning(move |api_id| {
                Ok(match api_id {
                    "40" => Some(root.clone()),
                    "159" => Some(astana.clone()),
                    "160" => Some(almaty.clone()),
                    _ => None,
                })
            });
        store.expect_insert_region().never();
        store.expect_update_region().never();

        let roots = service(api, store).sync_regions().await.unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[tokio::test]
    async fn region_rename_updates_existing_row() {
        let mut api = MockJobBoardApi::new();
        api.expect_fetch_areas()
            .times(1)
            .returning(|| Ok(vec![area("40", "Republic of Kazakhstan", vec![])]));

        let existing = region_row("40", "Kazakhstan", None);
        let existing_id = existing.id;

        let mut store = MockSyncStore::new();
        store
            .expect_find_region_by_api_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_update_region()
            .withf(move |id, name, parent_id| {
                *id == existing_id && name == "Republic of Kazakhstan" && parent_id.is_none()
            })
            .times(1)
            .returning(|id, name, parent_id| {
                let mut row = region_row("40", name, parent_id);
                row.id = id;
                Ok(row)
            });
        store.expect_insert_region().never();

        let roots = service(api, store).sync_regions().await.unwrap();
        assert_eq!(roots[0].name, "Republic of Kazakhstan");
    }

    #[tokio::test]
    async fn malformed_area_node_is_skipped_with_its_subtree() {
        let mut api = MockJobBoardApi::new();
        api.expect_fetch_areas().times(1).returning(|| {
            Ok(vec![
                area("113", "Russia", vec![]),
                AreaNode {
                    id: None,
                    name: Some("Broken".to_string()),
                    areas: vec![area("1", "Moscow", vec![])],
                },
            ])
        });

        let mut store = MockSyncStore::new();
        store
            .expect_find_region_by_api_id()
            .withf(|api_id| api_id == "113")
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_insert_region()
            .withf(|api_id, _, _| api_id == "113")
            .times(1)
            .returning(|api_id, name, parent_id| Ok(region_row(api_id, name, parent_id)));

        let roots = service(api, store).sync_regions().await.unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[tokio::test]
    async fn region_sync_aborts_without_writes_when_fetch_fails() {
        let mut api = MockJobBoardApi::new();
        api.expect_fetch_areas()
            .times(1)
            .returning(|| Err(Error::Internal("upstream down".to_string())));

        let mut store = MockSyncStore::new();
        store.expect_find_region_by_api_id().never();
        store.expect_insert_region().never();
        store.expect_update_region().never();

        let result = service(api, store).sync_regions().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn pagination_stops_on_short_page() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies()
            .times(3)
            .returning(|query| {
                assert_eq!(query.per_page, 100);
                let len = match query.page {
                    0 | 1 => 100,
                    2 => 37,
                    other => panic!("unexpected page request: {}", other),
                };
                let items = (0..len)
                    .map(|i| listing(&format!("v-{}-{}", query.page, i), "Backend Engineer"))
                    .collect();
                Ok(SearchPage {
                    items,
                    pages: Some(3),
                    found: Some(237),
                })
            });
        api.expect_fetch_vacancy()
            .times(237)
            .returning(|_| Ok(empty_detail()));

        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(237)
            .returning(|_| Ok(None));
        store
            .expect_insert_vacancy()
            .times(237)
            .returning(|incoming| Ok(inserted(incoming)));

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 237);
    }

    #[tokio::test]
    async fn overridden_vacancy_is_never_mutated() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            Ok(SearchPage {
                items: vec![listing("112233", "New Upstream Title")],
                pages: Some(1),
                found: Some(1),
            })
        });
        api.expect_fetch_vacancy()
            .times(1)
            .returning(|_| Ok(empty_detail()));

        let stored = stored_from(
            &bare_incoming("112233", "Title A Human Wrote"),
            SyncState::ManuallyOverridden,
        );
        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        store.expect_insert_vacancy().never();
        store.expect_update_vacancy().never();

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[tokio::test]
    async fn unchanged_upstream_data_produces_no_writes() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            Ok(SearchPage {
                items: vec![listing("112233", "Backend Engineer")],
                pages: Some(1),
                found: Some(1),
            })
        });
        api.expect_fetch_vacancy()
            .times(1)
            .returning(|_| Ok(empty_detail()));

        let stored = stored_from(&bare_incoming("112233", "Backend Engineer"), SyncState::Synced);
        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        store.expect_insert_vacancy().never();
        store.expect_update_vacancy().never();

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[tokio::test]
    async fn changed_field_is_written_for_synced_vacancy() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            Ok(SearchPage {
                items: vec![listing("112233", "Senior Backend Engineer")],
                pages: Some(1),
                found: Some(1),
            })
        });
        api.expect_fetch_vacancy()
            .times(1)
            .returning(|_| Ok(empty_detail()));

        let stored = stored_from(&bare_incoming("112233", "Backend Engineer"), SyncState::Synced);
        let stored_id = stored.id;
        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        store
            .expect_update_vacancy()
            .withf(move |id, changes| {
                *id == stored_id
                    && changes
                        == [FieldChange::Title("Senior Backend Engineer".to_string())].as_slice()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        store.expect_insert_vacancy().never();

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[tokio::test]
    async fn search_failure_aborts_with_partial_count() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(2).returning(|query| {
            if query.page == 0 {
                Ok(SearchPage {
                    items: vec![listing("a", "One"), listing("b", "Two")],
                    pages: None,
                    found: None,
                })
            } else {
                Err(Error::Internal("upstream down".to_string()))
            }
        });
        api.expect_fetch_vacancy()
            .times(2)
            .returning(|_| Ok(empty_detail()));

        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(2)
            .returning(|_| Ok(None));
        store
            .expect_insert_vacancy()
            .times(2)
            .returning(|incoming| Ok(inserted(incoming)));

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 2)
            .await
            .unwrap();
        assert_eq!(processed, 2);
    }

    #[tokio::test]
    async fn detail_failure_aborts_the_run() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            Ok(SearchPage {
                items: vec![listing("a", "One"), listing("b", "Two")],
                pages: None,
                found: None,
            })
        });
        api.expect_fetch_vacancy().times(2).returning(|api_id| {
            if api_id == "a" {
                Ok(empty_detail())
            } else {
                Err(Error::Internal("upstream down".to_string()))
            }
        });

        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_insert_vacancy()
            .times(1)
            .returning(|incoming| Ok(inserted(incoming)));

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[tokio::test]
    async fn listing_without_external_id_is_skipped_and_not_counted() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            let mut broken = listing("ignored", "No Id");
            broken.id = None;
            Ok(SearchPage {
                items: vec![broken, listing("ok", "Valid")],
                pages: None,
                found: None,
            })
        });
        api.expect_fetch_vacancy()
            .times(1)
            .returning(|_| Ok(empty_detail()));

        let mut store = MockSyncStore::new();
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_insert_vacancy()
            .withf(|incoming| incoming.api_id == "ok")
            .times(1)
            .returning(|incoming| Ok(inserted(incoming)));

        let processed = service(api, store)
            .sync_vacancies("rust", None, 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[tokio::test]
    async fn unresolved_listing_area_falls_back_to_caller_filter() {
        let mut api = MockJobBoardApi::new();
        api.expect_search_vacancies().times(1).returning(|_| {
            let mut item = listing("112233", "Backend Engineer");
            item.area = Some(AreaRef {
                id: Some("77".to_string()),
                name: Some("Elsewhere".to_string()),
            });
            Ok(SearchPage {
                items: vec![item],
                pages: None,
                found: None,
            })
        });
        api.expect_fetch_vacancy()
            .times(1)
            .returning(|_| Ok(empty_detail()));

        let fallback = region_row("1", "Moscow", None);
        let fallback_id = fallback.id;
        let mut store = MockSyncStore::new();
        store
            .expect_find_region_by_api_id()
            .times(2)
            .returning(move |api_id| {
                Ok(match api_id {
                    "1" => Some(fallback.clone()),
                    _ => None,
                })
            });
        store
            .expect_find_vacancy_by_api_id()
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_insert_vacancy()
            .withf(move |incoming| incoming.region_id == Some(fallback_id))
            .times(1)
            .returning(|incoming| Ok(inserted(incoming)));

        let processed = service(api, store)
            .sync_vacancies("rust", Some("1"), 0, 100)
            .await
            .unwrap();
        assert_eq!(processed, 1);
    }

    #[test]
    fn diff_is_empty_for_identical_data() {
        let incoming = bare_incoming("112233", "Backend Engineer");
        let stored = stored_from(&incoming, SyncState::Synced);
        assert!(compute_changes(&stored, &incoming).is_empty());
    }

    #[test]
    fn diff_contains_only_the_changed_field() {
        let mut incoming = bare_incoming("112233", "Backend Engineer");
        incoming.salary_to = Some(Decimal::from(90_000));
        let stored = stored_from(&incoming, SyncState::Synced);

        let mut changed = incoming.clone();
        changed.salary_to = Some(Decimal::from(100_000));

        let changes = compute_changes(&stored, &changed);
        assert_eq!(
            changes,
            vec![FieldChange::SalaryTo(Some(Decimal::from(100_000)))]
        );
    }

    #[test]
    fn diff_writes_explicit_null_when_field_disappears_upstream() {
        let mut incoming = bare_incoming("112233", "Backend Engineer");
        incoming.currency = Some("RUR".to_string());
        let stored = stored_from(&incoming, SyncState::Synced);

        let mut changed = incoming.clone();
        changed.currency = None;

        let changes = compute_changes(&stored, &changed);
        assert_eq!(changes, vec![FieldChange::Currency(None)]);
    }
}
