use crate::models::{Berry, BerryFirmness, BerryFlavor, NamedApiResourceList};
use crate::{BaseClient, ClientArgs, Pagination, Result};

/// Client for the berries group: berry, berry-firmness and berry-flavor.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_client::{constants::berries, BerryClient, ClientArgs};
///
/// # async fn example() -> Result<(), pokeapi_client::Error> {
/// let client = BerryClient::new(ClientArgs::default())?;
///
/// let cheri = client.get_berry_by_name("cheri").await?;
/// assert_eq!(cheri.id, berries::CHERI);
///
/// let page = client.list_berries(None).await?;
/// println!("{} berries in total", page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BerryClient {
    base: BaseClient,
}

impl BerryClient {
    /// Creates a client. No network I/O happens here.
    pub fn new(args: ClientArgs) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(args)?,
        })
    }

    /// The shared pipeline, for cache and config introspection.
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// Fetches a berry by name from `GET /berry/{name}`.
    ///
    /// The name is trimmed and lowercased before the request is built.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if the name is empty or not a slug. No
    ///   request is sent.
    /// * `Error::NotFound` if no berry has that name.
    /// * `Error::HttpStatus`, `Error::Transport` or `Error::Decode` if the
    ///   request itself fails.
    pub async fn get_berry_by_name(&self, name: &str) -> Result<Berry> {
        self.base.resource_by_name(name).await
    }

    /// Fetches a berry by numeric id from `GET /berry/{id}`.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if `id` is not positive. No request is sent.
    /// * `Error::NotFound` if no berry has that id.
    /// * `Error::HttpStatus`, `Error::Transport` or `Error::Decode` if the
    ///   request itself fails.
    pub async fn get_berry_by_id(&self, id: i64) -> Result<Berry> {
        self.base.resource_by_id(id).await
    }

    /// Lists berries from `GET /berry?offset=&limit=`.
    ///
    /// `None` fetches the first page of 20.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if the page size is zero.
    /// * `Error::HttpStatus` on any non-2xx status, 404 included.
    /// * `Error::Transport` or `Error::Decode` if the request itself fails.
    pub async fn list_berries(&self, pagination: Option<Pagination>) -> Result<NamedApiResourceList> {
        self.base.resource_list::<Berry>(pagination).await
    }

    /// Fetches a berry firmness by name from `GET /berry-firmness/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_berry_firmness_by_name(&self, name: &str) -> Result<BerryFirmness> {
        self.base.resource_by_name(name).await
    }

    /// Fetches a berry firmness by id from `GET /berry-firmness/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_berry_firmness_by_id(&self, id: i64) -> Result<BerryFirmness> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of berry firmnesses from `GET /berry-firmness`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_berry_firmnesses(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<BerryFirmness>(pagination).await
    }

    /// Fetches a berry flavor by name from `GET /berry-flavor/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_berry_flavor_by_name(&self, name: &str) -> Result<BerryFlavor> {
        self.base.resource_by_name(name).await
    }

    /// Fetches a berry flavor by id from `GET /berry-flavor/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_berry_flavor_by_id(&self, id: i64) -> Result<BerryFlavor> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of berry flavors from `GET /berry-flavor`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_berry_flavors(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<BerryFlavor>(pagination).await
    }
}
