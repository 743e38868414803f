use crate::conf::Settings;
use crate::model::{Area, Coord};
use crate::service::reconcile::AreaStateGateway;
use crate::service::timezone::TimezoneResolver;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const PER_PAGE: i64 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct DragoClient {
    http: reqwest::Client,
    base_url: String,
    auth: String,
}

#[derive(Deserialize)]
struct AreasResponse {
    data: Vec<AreaRecord>,
    pagination: Pagination,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pagination {
    has_next: bool,
    has_previous: bool,
    total: i64,
}

#[derive(Deserialize)]
struct AreaRecord {
    id: i64,
    name: String,
    enabled: bool,
    geofence: Vec<Coord>,
    pokemon_mode: WorkerMode,
}

#[derive(Deserialize)]
struct WorkerMode {
    workers: i64,
}

impl AreaRecord {
    // the first geofence point stands in for the whole area when picking
    // a timezone
    fn into_area(self, resolver: &TimezoneResolver) -> Result<Area> {
        let location = self
            .geofence
            .first()
            .copied()
            .ok_or_else(|| Error::Drago(format!("Area {} has an empty geofence", self.id)))?;
        let timezone = resolver.resolve(location.lat, location.lon)?;
        Ok(Area {
            id: self.id,
            name: self.name,
            location,
            timezone,
            enabled: self.enabled,
            workers: self.pokemon_mode.workers,
        })
    }
}

impl DragoClient {
    pub fn new(settings: &Settings) -> Result<DragoClient> {
        Ok(DragoClient {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            base_url: settings.drago_url.trim_end_matches('/').to_string(),
            auth: settings.drago_auth.clone(),
        })
    }

    /// Pulls every page of the area listing and maps the records into
    /// `Area` entities. Transport and decode failures abort the whole
    /// fetch, a record that can't be placed in a timezone is skipped
    /// with a warning.
    pub async fn fetch_all_areas(&self, resolver: &TimezoneResolver) -> Result<Vec<Area>> {
        let mut areas = vec![];
        let mut page = 0;
        loop {
            let url = format!(
                "{}/areas/?order=ASC&page={page}&perPage={PER_PAGE}&sortBy=name",
                self.base_url,
            );
            debug!(url, "Querying Drago");
            let res = self
                .http
                .get(&url)
                .header(header::COOKIE, self.auth_cookie())
                .send()
                .await?;
            if !res.status().is_success() {
                Err(Error::Drago(format!(
                    "Unexpected status code: {}",
                    res.status(),
                )))?;
            }
            let body = res.text().await?;
            let res: AreasResponse = serde_json::from_str(&body)?;
            debug!(
                page,
                records = res.data.len(),
                total = res.pagination.total,
                "Fetched page"
            );
            for record in res.data {
                let record_id = record.id;
                match record.into_area(resolver) {
                    Ok(area) => areas.push(area),
                    Err(e) => warn!(area = record_id, error = e.to_string(), "Skipping area"),
                }
            }
            if !res.pagination.has_next {
                break;
            }
            page += 1;
        }
        Ok(areas)
    }

    fn auth_cookie(&self) -> String {
        format!("authorized={}", self.auth)
    }
}

#[async_trait]
impl AreaStateGateway for DragoClient {
    async fn set_enabled(&self, area: &Area, enabled: bool) -> Result<()> {
        let action = if enabled { "enable" } else { "disable" };
        let url = format!("{}/areas/{}/{action}", self.base_url, area.id);
        let res = self
            .http
            .get(&url)
            .header(header::COOKIE, self.auth_cookie())
            .send()
            .await?;
        if !res.status().is_success() {
            Err(Error::Drago(format!(
                "Failed to {action} {}: {}",
                area.name,
                res.status(),
            )))?;
        }
        info!(area = %area.name, action, "Changed area state");
        Ok(())
    }
}
