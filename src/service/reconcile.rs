use crate::model::Area;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Global schedule, shared by every area. Hours are in each area's own
/// local time.
pub struct ScheduleConfig {
    pub enable_hour: u32,
    pub disable_hour: u32,
    pub excluded_area_ids: HashSet<i64>,
}

#[async_trait]
pub trait AreaStateGateway {
    async fn set_enabled(&self, area: &Area, enabled: bool) -> Result<()>;
}

/// Walks the area list and issues a state change for every area whose remote
/// state disagrees with the schedule. A gateway failure only affects its own
/// area, the remaining areas are still processed.
pub async fn run<G>(areas: &[Area], schedule: &ScheduleConfig, now: DateTime<Utc>, gateway: &G)
where
    G: AreaStateGateway + Sync,
{
    for area in areas {
        if schedule.excluded_area_ids.contains(&area.id) {
            debug!(area = %area.name, "Excluded from scheduling, skipping");
            continue;
        }
        let local_hour = now.with_timezone(&area.timezone).hour();
        let desired = desired_state(area, schedule, local_hour);
        if desired == area.enabled {
            info!(
                area = %area.name,
                local_hour,
                enabled = area.enabled,
                "Already in the desired state"
            );
            continue;
        }
        if let Err(e) = gateway.set_enabled(area, desired).await {
            error!(area = %area.name, error = e.to_string(), "Failed to change area state");
        }
    }
}

// The window is a plain pair of thresholds and never wraps midnight, so
// disable_hour <= enable_hour keeps the area off at every hour.
fn desired_state(area: &Area, schedule: &ScheduleConfig, local_hour: u32) -> bool {
    !(local_hour >= schedule.disable_hour
        || local_hour < schedule.enable_hour
        || area.workers == 0)
}
