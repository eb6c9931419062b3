use super::client::Client;
use crate::error::UpstreamError;
use crate::model::SiteId;
use serde_derive::Deserialize;

// The account is expected to hold only a handful of installations.
const SITE_LIST_PAGE_SIZE: &str = "5";

#[derive(Deserialize, Debug)]
struct SiteListResponse {
    sites: SiteList,
}

#[derive(Deserialize, Debug)]
struct SiteList {
    site: Vec<Site>,
}

#[derive(Deserialize, Debug)]
struct Site {
    id: SiteId,
}

impl Client {
    /// Lists the account's site ids, sorted by site name ascending.
    ///
    /// Without a site list no aggregation is possible, so any failure here
    /// propagates to the caller.
    pub async fn list_sites(&self) -> Result<Vec<SiteId>, UpstreamError> {
        let response: SiteListResponse = self
            .get_json(
                "/sites/list",
                &[
                    ("size", SITE_LIST_PAGE_SIZE),
                    ("sortProperty", "name"),
                    ("sortOrder", "ASC"),
                ],
            )
            .await?;

        Ok(response.sites.site.into_iter().map(|site| site.id).collect())
    }
}
