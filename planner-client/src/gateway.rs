//! REST entity gateway

use async_trait::async_trait;
use serde_json::Value;
use shared::gateway::{Entity, EntityGateway, FieldFilter, GatewayResult, SortKey};

use crate::{ClientConfig, ClientResult, HttpClient};

/// Entity gateway backed by the store's REST endpoints
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: HttpClient,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn from_client(http: HttpClient) -> Self {
        Self { http }
    }

    fn collection<E: Entity>() -> String {
        format!("api/entities/{}", E::KIND)
    }

    fn record<E: Entity>(id: &str) -> String {
        format!("api/entities/{}/{}", E::KIND, id)
    }
}

/// Query pair of one exact-match predicate; strings go out unquoted.
fn filter_param(filter: &FieldFilter) -> (String, String) {
    let value = match &filter.value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (filter.field.clone(), value)
}

#[async_trait]
impl<E: Entity> EntityGateway<E> for HttpGateway {
    async fn list(&self, sort: Option<&SortKey>) -> GatewayResult<Vec<E>> {
        let query: Vec<(String, String)> = sort
            .map(|s| vec![("sort".to_string(), s.as_query())])
            .unwrap_or_default();
        self.http
            .get(&Self::collection::<E>(), &query)
            .await
            .map_err(|e| e.into_gateway(E::KIND, None))
    }

    async fn filter(&self, filters: &[FieldFilter]) -> GatewayResult<Vec<E>> {
        let query: Vec<(String, String)> = filters.iter().map(filter_param).collect();
        self.http
            .get(&Self::collection::<E>(), &query)
            .await
            .map_err(|e| e.into_gateway(E::KIND, None))
    }

    async fn create(&self, data: &E::Create) -> GatewayResult<E> {
        let created: E = self
            .http
            .post(&Self::collection::<E>(), data)
            .await
            .map_err(|e| e.into_gateway(E::KIND, None))?;
        tracing::debug!(kind = E::KIND, id = created.id(), "Entity created");
        Ok(created)
    }

    async fn update(&self, id: &str, data: &E::Update) -> GatewayResult<E> {
        self.http
            .put(&Self::record::<E>(id), data)
            .await
            .map_err(|e| e.into_gateway(E::KIND, Some(id)))
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        self.http
            .delete(&Self::record::<E>(id))
            .await
            .map_err(|e| e.into_gateway(E::KIND, Some(id)))
    }
}
