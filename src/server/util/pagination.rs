//! Offset/limit pagination over a countable, sliceable source.
//!
//! A list endpoint builds a `PageRequest` from the query string and the configured limits,
//! then hands a `PageSource` to `paginate`. Query-backed sources push both the count and the
//! slice down to the database; `Vec` sources are counted and sliced in memory.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::{model::api::PageDto, server::config::PaginationConfig};

/// Validated offset and limit of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    /// Always within `1..=max_limit`.
    pub limit: u64,
}

impl PageRequest {
    /// Builds a request from raw query values.
    ///
    /// A missing limit takes the configured default. Limits are clamped into
    /// `1..=max_limit` and negative offsets to zero; out of range values are never an error.
    pub fn new(offset: Option<i64>, limit: Option<i64>, config: &PaginationConfig) -> Self {
        let max_limit = config.max_limit.max(1);

        let limit = match limit {
            Some(limit) => u64::try_from(limit).unwrap_or(0).clamp(1, max_limit),
            None => config.default_limit.clamp(1, max_limit),
        };

        Self {
            offset: u64::try_from(offset.unwrap_or(0)).unwrap_or(0),
            limit,
        }
    }
}

/// One page of results and the size of the whole candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
        }
    }

    pub fn into_dto<U>(self, f: impl FnMut(T) -> U) -> PageDto<U> {
        let page = self.map(f);

        PageDto {
            items: page.items,
            count: page.count,
        }
    }
}

/// A result set that can report its size and hand out a slice of itself.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    /// Size of the full candidate set, before any slicing.
    async fn count(&self) -> Result<u64, DbErr>;

    /// At most `limit` items starting at `offset`, in the source's order.
    async fn slice(self, offset: u64, limit: u64) -> Result<Vec<Self::Item>, DbErr>;
}

#[async_trait]
impl<T: Send + Sync> PageSource for Vec<T> {
    type Item = T;

    async fn count(&self) -> Result<u64, DbErr> {
        Ok(self.len() as u64)
    }

    async fn slice(self, offset: u64, limit: u64) -> Result<Vec<T>, DbErr> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self.into_iter().skip(offset).take(limit).collect())
    }
}

/// An unexecuted query; counting issues `COUNT` and slicing issues `OFFSET/LIMIT`.
///
/// The select must carry a total order (e.g. by primary key) for pages to be stable.
pub struct QuerySource<'a, E: EntityTrait> {
    db: &'a DatabaseConnection,
    select: Select<E>,
}

impl<'a, E: EntityTrait> QuerySource<'a, E> {
    pub fn new(db: &'a DatabaseConnection, select: Select<E>) -> Self {
        Self { db, select }
    }
}

#[async_trait]
impl<'a, E> PageSource for QuerySource<'a, E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    type Item = E::Model;

    async fn count(&self) -> Result<u64, DbErr> {
        self.select.clone().count(self.db).await
    }

    async fn slice(self, offset: u64, limit: u64) -> Result<Vec<E::Model>, DbErr> {
        self.select.offset(offset).limit(limit).all(self.db).await
    }
}

/// Counts the source and fetches the requested slice.
///
/// An offset at or past the end yields no items without querying the slice, while
/// `count` still reports the full size.
pub async fn paginate<S: PageSource>(
    source: S,
    request: PageRequest,
) -> Result<Page<S::Item>, DbErr> {
    let count = source.count().await?;

    let items = if request.offset >= count {
        Vec::new()
    } else {
        source.slice(request.offset, request.limit).await?
    };

    Ok(Page { items, count })
}
