//! Vault backend client over `fetch` (gloo-net).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use lib_core::service::{endpoints, VaultApi};
use lib_core::{AppError, Direction, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::vault::{
    CalldataPayload, CalldataResponse, CreateTransactionRequest, ErrorResponse, PositionRequest,
    PositionResponse, PriceResponse, SlippageRequest, SlippageResponse, Stablecoin,
    VaultAddressResponse,
};

/// Client bound to one deployment base URL (`{origin}/{path}`).
#[derive(Debug, Clone)]
pub struct GlooVaultApi {
    base_url: String,
}

impl GlooVaultApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let response = Request::post(&url)
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

fn transport_error(error: gloo_net::Error) -> AppError {
    AppError::Api(error.to_string())
}

/// Non-2xx bodies carry `{message}`; anything else is passed through as text.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !response.ok() {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(AppError::Api(format!("HTTP {}: {}", status, message)));
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl VaultApi for GlooVaultApi {
    async fn supported_stablecoins(&self) -> Result<Vec<Stablecoin>> {
        self.get(endpoints::SUPPORTED_STABLECOINS).await
    }

    async fn position(&self, request: &PositionRequest) -> Result<f64> {
        let response: PositionResponse = self.post(endpoints::POSITION, request).await?;
        Ok(response.position)
    }

    async fn price(&self) -> Result<f64> {
        let response: PriceResponse = self.get(endpoints::PRICE).await?;
        Ok(response.price)
    }

    async fn canonical_price(&self) -> Result<f64> {
        let response: PriceResponse = self.get(endpoints::CANONICAL_PRICE).await?;
        Ok(response.price)
    }

    async fn slippage(&self, request: &SlippageRequest) -> Result<f64> {
        let response: SlippageResponse = self.post(endpoints::SLIPPAGE, request).await?;
        Ok(response.slippage)
    }

    async fn vault_address(&self) -> Result<String> {
        let response: VaultAddressResponse = self.get(endpoints::VAULT_ADDRESS).await?;
        Ok(response.address)
    }

    async fn create_transaction(
        &self,
        direction: Direction,
        request: &CreateTransactionRequest,
    ) -> Result<CalldataPayload> {
        let response: CalldataResponse = self.post(direction.endpoint(), request).await?;
        Ok(response.calldata)
    }
}
