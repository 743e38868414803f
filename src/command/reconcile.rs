use crate::conf::Conf;
use crate::service::drago::DragoClient;
use crate::service::reconcile;
use crate::service::timezone::TimezoneResolver;
use crate::Result;
use chrono::Utc;
use tracing::info;

pub async fn run(conf: &Conf) -> Result<()> {
    let resolver = TimezoneResolver::new();
    let client = DragoClient::new(&conf.settings)?;

    let areas = client.fetch_all_areas(&resolver).await?;
    info!(areas = areas.len(), "Fetched areas");

    reconcile::run(&areas, &conf.settings.schedule(), Utc::now(), &client).await;
    Ok(())
}
