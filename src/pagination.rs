// src/pagination.rs
//! Paginacja zapytań: metadane strony liczone równolegle z pobieraniem rekordów.

use async_trait::async_trait;
use futures::future::join;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// Przefiltrowany, niestronicowany zbiór rekordów.
///
/// `count` i `fetch` przyjmują `&self`: każde wywołanie buduje własne zapytanie,
/// więc LIMIT/OFFSET z `fetch` nigdy nie trafia do zapytania zliczającego.
#[async_trait]
pub trait Queryable: Send + Sync {
    type Record: Send;

    /// Liczba wszystkich pasujących rekordów, bez LIMIT/OFFSET.
    async fn count(&self) -> Result<i64, AppError>;

    /// Co najwyżej `limit` rekordów, począwszy od `offset`, w stałej kolejności.
    async fn fetch(&self, offset: i64, limit: i64) -> Result<Vec<Self::Record>, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Wartości zerowe, ujemne lub brakujące zastępowane są domyślnymi.
    /// Górny limit `limit` nie jest wymuszany.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PAGE_LIMIT,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub page: i64,
    pub limit: i64,
    pub prev_page: i64,
    pub next_page: i64,
    pub count: i64,
    pub total_page: i64,
}

impl PageResult {
    /// Brak poprzedniej/następnej strony kodowany jest jako 0.
    pub fn new(request: PageRequest, count: i64) -> Self {
        let total_page = total_pages(count, request.limit);
        let page = request.page;

        let prev_page = if page > 1 { page - 1 } else { 0 };
        let next_page = if page < total_page { page + 1 } else { 0 };

        Self {
            page,
            limit: request.limit,
            prev_page,
            next_page,
            count,
            total_page,
        }
    }
}

pub fn total_pages(count: i64, limit: i64) -> i64 {
    if count <= 0 || limit <= 0 {
        return 0;
    }
    // Bez `count + limit - 1`: przy limicie bliskim i64::MAX suma się przepełnia.
    count / limit + i64::from(count % limit != 0)
}

/// Zlicza i pobiera stronę rekordów jednocześnie.
///
/// Oba zapytania zawsze dobiegają końca; jeśli któreś się nie powiodło,
/// zwracany jest pierwszy błąd (najpierw zliczania), a `destination`
/// pozostaje nietknięte.
pub async fn paginate<Q>(
    request: PageRequest,
    query: &Q,
    destination: &mut Vec<Q::Record>,
) -> Result<PageResult, AppError>
where
    Q: Queryable + ?Sized,
{
    let (count_result, fetch_result) =
        join(query.count(), query.fetch(request.offset(), request.limit())).await;

    let count = count_result?;
    let records = fetch_result?;

    *destination = records;
    Ok(PageResult::new(request, count))
}
