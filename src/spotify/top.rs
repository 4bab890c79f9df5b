use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::FetchError,
    types::{Artist, Category, Item, RankedItem, Session, TimeRange, TopItemsPage, Track},
};

/// Largest `limit` the top items endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default length of a ranked list.
pub const MAX_ITEMS: u32 = 100;

/// How many items to rank and how many to ask for per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub page_size: u32,
    pub total_wanted: u32,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            total_wanted: MAX_ITEMS,
        }
    }
}

impl FetchPlan {
    pub fn new(page_size: u32, total_wanted: u32) -> Result<Self, FetchError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(FetchError::InvalidPlan(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        Ok(Self {
            page_size,
            total_wanted,
        })
    }

    /// Offsets of the `ceil(total_wanted / page_size)` pages, in order.
    pub fn offsets(&self) -> Vec<u32> {
        (0..self.total_wanted.div_ceil(self.page_size))
            .map(|page| page * self.page_size)
            .collect()
    }
}

/// Concatenates pages in the order given, cuts to `total_wanted` and numbers
/// the result from 1.
pub fn rank_pages(pages: Vec<Vec<Item>>, total_wanted: u32) -> Vec<RankedItem> {
    pages
        .into_iter()
        .flatten()
        .take(total_wanted as usize)
        .zip(1..)
        .map(|(item, rank)| RankedItem { rank, item })
        .collect()
}

/// Reads `/me/top/{type}` on behalf of one authenticated session.
#[derive(Debug, Clone)]
pub struct TopItemsClient {
    http: Client,
    api_url: String,
    session: Session,
}

impl TopItemsClient {
    pub fn new(api_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Fetches one page of top items.
    ///
    /// Any non-success status or an undecodable body fails the page.
    pub async fn fetch_page(
        &self,
        category: Category,
        range: TimeRange,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Item>, FetchError> {
        match category {
            Category::Tracks => Ok(self
                .get_page::<Track>(category, range, limit, offset)
                .await?
                .into_iter()
                .map(Item::Track)
                .collect()),
            Category::Artists => Ok(self
                .get_page::<Artist>(category, range, limit, offset)
                .await?
                .into_iter()
                .map(Item::Artist)
                .collect()),
        }
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        category: Category,
        range: TimeRange,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<T>, FetchError> {
        let api_url = format!(
            "{uri}/me/top/{kind}?limit={limit}&offset={offset}&time_range={range}",
            uri = self.api_url,
            kind = category.as_path(),
            range = range.as_str(),
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(self.session.token().secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                offset,
            });
        }

        let page = response
            .json::<TopItemsPage<T>>()
            .await
            .map_err(|source| FetchError::Malformed { offset, source })?;
        Ok(page.items)
    }

    /// Builds the ranked top list for one category and range.
    ///
    /// All pages are requested at once. They are joined back in offset order
    /// however the responses interleave, and a single failed page fails the
    /// whole list. An expired token fails before any request.
    pub async fn fetch_top(
        &self,
        category: Category,
        range: TimeRange,
        plan: FetchPlan,
    ) -> Result<Vec<RankedItem>, FetchError> {
        let plan = FetchPlan::new(plan.page_size, plan.total_wanted)?;
        if self.session.token().is_expired() {
            return Err(FetchError::TokenExpired);
        }

        let pages = try_join_all(
            plan.offsets()
                .into_iter()
                .map(|offset| self.fetch_page(category, range, plan.page_size, offset)),
        )
        .await?;

        Ok(rank_pages(pages, plan.total_wanted))
    }
}
