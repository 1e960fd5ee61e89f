use crate::{ClientError, Result};
use async_trait::async_trait;
use beerworks_core::{Beer, BeerListParams, BeerPagedList, Endpoints};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// The beer API contract: six operations against the remote service.
///
/// Every operation returns a future that issues its request only when
/// awaited; in-flight calls are independent and dropping a pending future
/// cancels only that call.
#[async_trait]
pub trait BeerApi: Send + Sync {
    /// List one page of beers. `None` params are omitted from the query
    /// string entirely.
    async fn list_beers(&self, params: &BeerListParams) -> Result<BeerPagedList>;

    /// Fetch a beer by its server-assigned id. When
    /// `show_inventory_on_hand` is unset or false the server leaves
    /// `quantity_on_hand` unpopulated.
    async fn get_beer_by_id(
        &self,
        id: Uuid,
        show_inventory_on_hand: Option<bool>,
    ) -> Result<Beer>;

    /// Fetch a beer by its UPC code.
    async fn get_beer_by_upc(&self, upc: &str) -> Result<Beer>;

    /// Create a new beer. The payload must not carry an id. Success is
    /// `201 Created` with no body.
    async fn create_beer(&self, beer: &Beer) -> Result<StatusCode>;

    /// Replace the beer at the given id. Success is `204 No Content`.
    async fn update_beer_by_id(&self, id: Uuid, beer: &Beer) -> Result<StatusCode>;

    /// Delete the beer at the given id. Success is `204 No Content`; an
    /// unknown id surfaces as a `Server` error with status 404, which the
    /// caller must handle explicitly.
    async fn delete_beer_by_id(&self, id: Uuid) -> Result<StatusCode>;
}

/// Beer REST API client
pub struct BeerClient {
    endpoints: Endpoints,
    client: HttpClient,
}

impl BeerClient {
    /// Create a client against the default endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    /// Create a client against the given endpoints.
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            client: HttpClient::new(),
        }
    }

    /// Replace the underlying HTTP transport. The transport owns
    /// connection reuse and timeout policy; this client adds neither.
    pub fn with_http_client(mut self, client: HttpClient) -> Self {
        self.client = client;
        self
    }

    async fn check_status(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Server { status, message });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for BeerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BeerApi for BeerClient {
    async fn list_beers(&self, params: &BeerListParams) -> Result<BeerPagedList> {
        let url = self.endpoints.beer_url();
        tracing::debug!(%url, ?params, "listing beers");

        let response = self.client.get(&url).query(params).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }

    async fn get_beer_by_id(
        &self,
        id: Uuid,
        show_inventory_on_hand: Option<bool>,
    ) -> Result<Beer> {
        let url = self.endpoints.beer_by_id_url(&id);
        tracing::debug!(%url, "fetching beer by id");

        let mut request = self.client.get(&url);
        if let Some(show) = show_inventory_on_hand {
            request = request.query(&[("showInventoryOnHand", show)]);
        }

        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }

    async fn get_beer_by_upc(&self, upc: &str) -> Result<Beer> {
        let url = self.endpoints.beer_by_upc_url(upc);
        tracing::debug!(%url, "fetching beer by upc");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }

    async fn create_beer(&self, beer: &Beer) -> Result<StatusCode> {
        beer.validate_for_create()?;

        let url = self.endpoints.beer_url();
        tracing::debug!(%url, name = %beer.beer_name, "creating beer");

        let response = self.client.post(&url).json(beer).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.status())
    }

    async fn update_beer_by_id(&self, id: Uuid, beer: &Beer) -> Result<StatusCode> {
        beer.validate_for_write()?;

        let url = self.endpoints.beer_by_id_url(&id);
        tracing::debug!(%url, "updating beer");

        let response = self.client.put(&url).json(beer).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.status())
    }

    async fn delete_beer_by_id(&self, id: Uuid) -> Result<StatusCode> {
        let url = self.endpoints.beer_by_id_url(&id);
        tracing::debug!(%url, "deleting beer");

        let response = self.client.delete(&url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.status())
    }
}
