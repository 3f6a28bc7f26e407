use models::sighting::{SightingInfo, SightingUpdateInfo};
use models::ufo_v1::{
    CreateRequest, CreateResponse, DeleteRequest, Empty, GetRequest, GetResponse, RpcErrorBody, Sighting,
    UpdateRequest, SERVICE_NAME,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::ClientError;

/// Client of the `ufo.v1.UFOService` RPC endpoints.
#[derive(Clone, Debug)]
pub struct UfoClient {
    base_url: String,
    http: reqwest::Client,
}

impl UfoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http }
    }

    async fn call<Req: Serialize, Res: DeserializeOwned>(&self, method: &str, req: &Req) -> Result<Res, ClientError> {
        let url = format!("{}/{}/{}", self.base_url, SERVICE_NAME, method);
        let resp = self.http.post(url).json(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<Res>().await?);
        }
        let body = resp.json::<RpcErrorBody>().await.unwrap_or_else(|_| RpcErrorBody {
            code: "unknown".into(),
            message: status.to_string(),
        });
        Err(ClientError::Status { status: status.as_u16(), code: body.code, message: body.message })
    }

    pub async fn create(&self, info: SightingInfo) -> Result<String, ClientError> {
        let res: CreateResponse = self.call("Create", &CreateRequest { info }).await?;
        Ok(res.uuid)
    }

    pub async fn get(&self, uuid: &str) -> Result<Sighting, ClientError> {
        let res: GetResponse = self.call("Get", &GetRequest { uuid: uuid.to_string() }).await?;
        Ok(res.sighting)
    }

    pub async fn update(&self, uuid: &str, update_info: Option<SightingUpdateInfo>) -> Result<(), ClientError> {
        let _: Empty = self.call("Update", &UpdateRequest { uuid: uuid.to_string(), update_info }).await?;
        Ok(())
    }

    pub async fn delete(&self, uuid: &str) -> Result<(), ClientError> {
        let _: Empty = self.call("Delete", &DeleteRequest { uuid: uuid.to_string() }).await?;
        Ok(())
    }
}
