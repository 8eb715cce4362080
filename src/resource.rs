//! The by-name / by-id / list contract shared by every resource kind.
//!
//! Each entity type names its endpoint through [`Resource::KIND`]; the base
//! client then resolves it the same way for every kind:
//!
//! * by name: `/{kind}/{slug}`, the slug trimmed and lowercased first
//! * by id: `/{kind}/{id}`, the id strictly positive
//! * list: `/{kind}?offset=&limit=`
//!
//! Identifiers are checked before any request is built, so a malformed one
//! fails fast with [`Error::InvalidArgument`] and never costs a round trip.

use crate::base::BaseClient;
use crate::interceptors::{self, RequestContext};
use crate::models::NamedApiResourceList;
use crate::{Error, Result};
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// An entity served by a PokéAPI endpoint.
pub trait Resource: DeserializeOwned {
    /// Endpoint name, e.g. `"berry-firmness"`.
    const KIND: &'static str;
}

/// Which page of a listing to fetch.
///
/// # Examples
///
/// ```
/// use pokeapi_client::Pagination;
///
/// let page = Pagination::new().with_limit(50).with_offset(100);
/// assert_eq!(page.limit, Some(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// Page size. Defaults to 20; the server caps it.
    pub limit: Option<u32>,
    /// Index of the first result. Defaults to 0.
    pub offset: Option<u32>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    fn query(&self) -> Result<Vec<(&'static str, String)>> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if limit == 0 {
            return Err(Error::InvalidArgument(
                "limit must be at least 1".to_string(),
            ));
        }
        let offset = self.offset.unwrap_or(0);

        Ok(vec![("offset", offset.to_string()), ("limit", limit.to_string())])
    }
}

/// Trims and lowercases `name`, rejecting anything that is not a slug.
pub(crate) fn normalize_name(name: &str) -> Result<String> {
    let slug = name.trim().to_ascii_lowercase();
    if slug.is_empty() {
        return Err(Error::InvalidArgument("name must not be empty".to_string()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::InvalidArgument(format!(
            "name must be a lowercase-hyphenated slug, got {:?}",
            name
        )));
    }
    Ok(slug)
}

pub(crate) fn validate_id(id: i64) -> Result<i64> {
    if id <= 0 {
        return Err(Error::InvalidArgument(format!(
            "id must be a positive integer, got {}",
            id
        )));
    }
    Ok(id)
}

/// A listing names no entity, so a 404 there is a plain status failure.
fn listing_status(error: Error) -> Error {
    match error {
        Error::NotFound { .. } => Error::HttpStatus {
            status: StatusCode::NOT_FOUND,
            raw_response: String::new(),
        },
        other => other,
    }
}

impl BaseClient {
    pub(crate) async fn resource_by_name<R: Resource>(&self, name: &str) -> Result<R> {
        let slug = self.checked(format!("/{}/{}", R::KIND, name), normalize_name(name))?;
        self.get_json(&format!("/{}/{}", R::KIND, slug), &[]).await
    }

    pub(crate) async fn resource_by_id<R: Resource>(&self, id: i64) -> Result<R> {
        let id = self.checked(format!("/{}/{}", R::KIND, id), validate_id(id))?;
        self.get_json(&format!("/{}/{}", R::KIND, id), &[]).await
    }

    pub(crate) async fn resource_list<R: Resource>(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        let page = pagination.unwrap_or_default();
        let target = format!("/{}?limit={}", R::KIND, page.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        let query = self.checked(target, page.query())?;
        self.get_json(&format!("/{}", R::KIND), &query)
            .await
            .map_err(listing_status)
    }

    /// Logs a validation failure through the request-error hook.
    fn checked<T>(&self, target: String, result: Result<T>) -> Result<T> {
        result.map_err(|e| {
            let ctx = RequestContext::new(Method::GET, target);
            interceptors::on_request_error(e, &ctx, self.logger())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("cheri").unwrap(), "cheri");
        assert_eq!(normalize_name("  Master-Ball ").unwrap(), "master-ball");
        assert_eq!(normalize_name("tm01").unwrap(), "tm01");
    }

    #[test]
    fn test_normalize_name_rejects_empty() {
        assert!(matches!(normalize_name(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(normalize_name("   "), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_normalize_name_rejects_non_slug() {
        for bad in ["cheri/../item", "cheri?x=1", "very soft", "poké-ball", "a_b"] {
            assert!(
                matches!(normalize_name(bad), Err(Error::InvalidArgument(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(1).unwrap(), 1);
        assert_eq!(validate_id(i64::MAX).unwrap(), i64::MAX);
        assert!(matches!(validate_id(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_id(-1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_default_pagination_query() {
        let query = Pagination::default().query().unwrap();
        assert_eq!(
            query,
            vec![("offset", "0".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_custom_pagination_query() {
        let query = Pagination::new()
            .with_limit(5)
            .with_offset(15)
            .query()
            .unwrap();
        assert_eq!(
            query,
            vec![("offset", "15".to_string()), ("limit", "5".to_string())]
        );
    }

    #[test]
    fn test_listing_not_found_becomes_status_error() {
        let error = listing_status(Error::NotFound {
            url: "https://pokeapi.co/api/v2/berry?offset=0&limit=20".to_string(),
        });
        assert!(matches!(
            error,
            Error::HttpStatus { status, .. } if status == StatusCode::NOT_FOUND
        ));

        let error = listing_status(Error::InvalidArgument("limit".to_string()));
        assert!(matches!(error, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = Pagination::new().with_limit(0).query();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
