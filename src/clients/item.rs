use crate::models::{
    Item, ItemAttribute, ItemCategory, ItemFlingEffect, ItemPocket, NamedApiResourceList,
};
use crate::{BaseClient, ClientArgs, Pagination, Result};

/// Client for the items group: item, item-attribute, item-category,
/// item-fling-effect and item-pocket.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_client::constants::{item_categories, item_fling_effects};
/// use pokeapi_client::{ClientArgs, ItemClient, Pagination};
///
/// # async fn example() -> Result<(), pokeapi_client::Error> {
/// let client = ItemClient::new(ClientArgs::default())?;
///
/// let flinch = client.get_item_fling_effect_by_name("flinch").await?;
/// assert_eq!(flinch.id, item_fling_effects::FLINCH);
///
/// let choice = client.get_item_category_by_id(item_categories::CHOICE).await?;
/// println!("{} is in pocket {}", choice.name, choice.pocket.name);
///
/// let page = client
///     .list_items(Some(Pagination::new().with_limit(50).with_offset(50)))
///     .await?;
/// println!("{} of {} items", page.results.len(), page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItemClient {
    base: BaseClient,
}

impl ItemClient {
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

    /// Fetches an item by name from `GET /item/{name}`.
    ///
    /// The name is trimmed and lowercased before the request is built.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if the name is empty or not a slug. No
    ///   request is sent.
    /// * `Error::NotFound` if no item has that name.
    /// * `Error::HttpStatus`, `Error::Transport` or `Error::Decode` if the
    ///   request itself fails.
    pub async fn get_item_by_name(&self, name: &str) -> Result<Item> {
        self.base.resource_by_name(name).await
    }

    /// Fetches an item by numeric id from `GET /item/{id}`.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if `id` is not positive. No request is sent.
    /// * `Error::NotFound` if no item has that id.
    /// * `Error::HttpStatus`, `Error::Transport` or `Error::Decode` if the
    ///   request itself fails.
    pub async fn get_item_by_id(&self, id: i64) -> Result<Item> {
        self.base.resource_by_id(id).await
    }

    /// Lists items from `GET /item?offset=&limit=`.
    ///
    /// `None` fetches the first page of 20.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if the page size is zero.
    /// * `Error::HttpStatus` on any non-2xx status, 404 included.
    /// * `Error::Transport` or `Error::Decode` if the request itself fails.
    pub async fn list_items(&self, pagination: Option<Pagination>) -> Result<NamedApiResourceList> {
        self.base.resource_list::<Item>(pagination).await
    }

    /// Fetches an item attribute by name from `GET /item-attribute/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_item_attribute_by_name(&self, name: &str) -> Result<ItemAttribute> {
        self.base.resource_by_name(name).await
    }

    /// Fetches an item attribute by id from `GET /item-attribute/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_item_attribute_by_id(&self, id: i64) -> Result<ItemAttribute> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of item attributes from `GET /item-attribute`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_item_attributes(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<ItemAttribute>(pagination).await
    }

    /// Fetches an item category by name from `GET /item-category/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_item_category_by_name(&self, name: &str) -> Result<ItemCategory> {
        self.base.resource_by_name(name).await
    }

    /// Fetches an item category by id from `GET /item-category/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_item_category_by_id(&self, id: i64) -> Result<ItemCategory> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of item categories from `GET /item-category`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_item_categories(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<ItemCategory>(pagination).await
    }

    /// Fetches a fling effect by name from `GET /item-fling-effect/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_item_fling_effect_by_name(&self, name: &str) -> Result<ItemFlingEffect> {
        self.base.resource_by_name(name).await
    }

    /// Fetches a fling effect by id from `GET /item-fling-effect/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_item_fling_effect_by_id(&self, id: i64) -> Result<ItemFlingEffect> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of item fling effects from `GET /item-fling-effect`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_item_fling_effects(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<ItemFlingEffect>(pagination).await
    }

    /// Fetches an item pocket by name from `GET /item-pocket/{name}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a malformed name, `Error::NotFound` for an
    /// unknown one.
    pub async fn get_item_pocket_by_name(&self, name: &str) -> Result<ItemPocket> {
        self.base.resource_by_name(name).await
    }

    /// Fetches an item pocket by id from `GET /item-pocket/{id}`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for `id <= 0`, `Error::NotFound` for an unknown
    /// id.
    pub async fn get_item_pocket_by_id(&self, id: i64) -> Result<ItemPocket> {
        self.base.resource_by_id(id).await
    }

    /// Lists one page of item pockets from `GET /item-pocket`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` for a zero page size, `Error::HttpStatus` for
    /// any non-2xx status.
    pub async fn list_item_pockets(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<NamedApiResourceList> {
        self.base.resource_list::<ItemPocket>(pagination).await
    }
}
