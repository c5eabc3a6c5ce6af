//! Paged list envelopes returned by `cliente` and `processo`.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Default page size for the process list.
pub const PROCESS_PAGE_SIZE: u32 = 5;
/// Default page size for the customer list.
pub const CUSTOMER_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl PageMeta {
    /// Meta for a first page of `limit` with nothing loaded yet.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self { page: 1, limit, total: 0, total_pages: 1 }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `Some(page)` when `page` is a valid destination, else `None`.
    #[must_use]
    pub fn target(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.total_pages.max(1) && page != self.page).then_some(page)
    }
}

/// One page of `T`.
///
/// Accepts the `{data, meta}` envelope or a bare array, which is read as a
/// single page holding everything.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    #[must_use]
    pub fn single(data: Vec<T>) -> Self {
        let total = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self { meta: PageMeta { page: 1, limit: total.max(1), total, total_pages: 1 }, data }
    }

    /// Drop items matching `predicate`, keeping `meta.total` in step.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        let before = self.data.len();
        self.data.retain(|item| !predicate(item));
        let removed = u32::try_from(before - self.data.len()).unwrap_or(0);
        self.meta.total = self.meta.total.saturating_sub(removed);
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<T> {
            Envelope { data: Vec<T>, meta: PageMeta },
            Bare(Vec<T>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Envelope { data, meta } => Page { data, meta },
            Wire::Bare(data) => Page::single(data),
        })
    }
}
