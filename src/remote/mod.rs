// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Thin REST client for the campaign mind-map API.
//!
//! One local mutation intent maps to exactly one call. The client does no
//! retrying and no reconciliation; the editor decides when a response is
//! applied to local state.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::model::{CampaignId, EdgeId, MapEdge, MapFile, MapNode, MindMap, NodeId, Point};

pub mod wire;

use wire::{
    ApiEnvelope, EdgeDto, MapFileDto, MindmapDto, NewEdgeBody, NewNodeBody, NodeDto,
    NodeFieldsBody, PositionBody,
};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindmapApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl MindmapApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client bound to one campaign's mind-map resource.
#[derive(Debug, Clone)]
pub struct MindmapApi {
    client: Client,
    base_url: String,
    campaign_id: CampaignId,
}

impl MindmapApi {
    pub fn new(config: MindmapApiConfig, campaign_id: CampaignId) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| RemoteError::Transport { message: err.to_string() })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            campaign_id,
        })
    }

    pub fn campaign_id(&self) -> &CampaignId {
        &self.campaign_id
    }

    fn url(&self, suffix: &str) -> String {
        format!(
            "{}/api/campaigns/{}/mindmap{}",
            self.base_url, self.campaign_id, suffix
        )
    }

    pub async fn fetch_mindmap(&self) -> Result<MindMap, RemoteError> {
        let url = self.url("");
        debug!(%url, "fetching mindmap");

        let response = self.client.get(&url).send().await.map_err(map_http_error)?;
        let dto: MindmapDto = decode_data(response).await?;
        dto.into_model()
            .map_err(|err| RemoteError::Decode { message: err.to_string() })
    }

    pub async fn fetch_files(&self) -> Result<Vec<MapFile>, RemoteError> {
        let url = self.url("/files");
        debug!(%url, "fetching attachable files");

        let response = self.client.get(&url).send().await.map_err(map_http_error)?;
        let dtos: Vec<MapFileDto> = decode_data(response).await?;
        dtos.into_iter()
            .map(|dto| {
                dto.into_model()
                    .map_err(|err| RemoteError::Decode { message: err.to_string() })
            })
            .collect()
    }

    pub async fn create_node(
        &self,
        title: &str,
        notes: Option<&str>,
        pos: Point,
    ) -> Result<(NodeId, MapNode), RemoteError> {
        let url = self.url("/nodes");
        debug!(%url, title, "creating node");

        let body = NewNodeBody { title, notes, pos_x: pos.x, pos_y: pos.y };
        let response = self.post_json(&url, &body).await?;
        let dto: NodeDto = decode_data(response).await?;
        dto.into_model()
            .map_err(|err| RemoteError::Decode { message: err.to_string() })
    }

    pub async fn update_node_fields(
        &self,
        node_id: &NodeId,
        title: &str,
        notes: Option<&str>,
    ) -> Result<(NodeId, MapNode), RemoteError> {
        let url = self.url(&format!("/nodes/{node_id}"));
        debug!(%url, "updating node fields");

        let body = NodeFieldsBody { title, notes };
        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_http_error)?;
        let dto: NodeDto = decode_data(response).await?;
        dto.into_model()
            .map_err(|err| RemoteError::Decode { message: err.to_string() })
    }

    pub async fn update_node_position(
        &self,
        node_id: &NodeId,
        pos: Point,
    ) -> Result<(), RemoteError> {
        let url = self.url(&format!("/nodes/{node_id}/position"));
        debug!(%url, pos_x = pos.x, pos_y = pos.y, "persisting node position");

        let body = PositionBody { pos_x: pos.x, pos_y: pos.y };
        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_http_error)?;
        decode_ack(response).await
    }

    pub async fn delete_node(&self, node_id: &NodeId) -> Result<(), RemoteError> {
        let url = self.url(&format!("/nodes/{node_id}"));
        debug!(%url, "deleting node");

        let response = self.client.delete(&url).send().await.map_err(map_http_error)?;
        decode_ack(response).await
    }

    pub async fn create_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        label: Option<&str>,
    ) -> Result<(EdgeId, MapEdge), RemoteError> {
        let url = self.url("/edges");
        debug!(%url, %source, %target, "creating edge");

        let body = NewEdgeBody {
            source_node_id: source.as_str(),
            target_node_id: target.as_str(),
            label,
        };
        let response = self.post_json(&url, &body).await?;
        let dto: EdgeDto = decode_data(response).await?;
        dto.into_model()
            .map_err(|err| RemoteError::Decode { message: err.to_string() })
    }

    pub async fn delete_edge(&self, edge_id: &EdgeId) -> Result<(), RemoteError> {
        let url = self.url(&format!("/edges/{edge_id}"));
        debug!(%url, "deleting edge");

        let response = self.client.delete(&url).send().await.map_err(map_http_error)?;
        decode_ack(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, RemoteError> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_http_error)
    }
}

fn map_http_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout { message: err.to_string() }
    } else {
        RemoteError::Transport { message: err.to_string() }
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Error bodies may still carry an envelope with a message worth showing.
    let message = match response.json::<ApiEnvelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.error,
        Err(_) => None,
    };
    Err(RemoteError::Status { status: status.as_u16(), message })
}

async fn decode_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
    let response = check_status(response).await?;
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|err| RemoteError::Decode { message: err.to_string() })?;

    if !envelope.success {
        return Err(RemoteError::Api {
            message: envelope.error.unwrap_or_else(|| "unspecified server error".to_owned()),
        });
    }
    envelope.data.ok_or_else(|| RemoteError::Decode {
        message: "successful response is missing its data payload".to_owned(),
    })
}

async fn decode_ack(response: reqwest::Response) -> Result<(), RemoteError> {
    let response = check_status(response).await?;
    let envelope: ApiEnvelope<serde_json::Value> = response
        .json()
        .await
        .map_err(|err| RemoteError::Decode { message: err.to_string() })?;

    if !envelope.success {
        return Err(RemoteError::Api {
            message: envelope.error.unwrap_or_else(|| "unspecified server error".to_owned()),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    Transport { message: String },
    Timeout { message: String },
    Status { status: u16, message: Option<String> },
    Api { message: String },
    Decode { message: String },
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "request failed: {message}"),
            Self::Timeout { message } => write!(f, "request timed out: {message}"),
            Self::Status { status, message } => match message {
                Some(message) => write!(f, "server returned {status}: {message}"),
                None => write!(f, "server returned {status}"),
            },
            Self::Api { message } => write!(f, "server rejected the request: {message}"),
            Self::Decode { message } => write!(f, "could not decode server response: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}
