use crate::query::PlanQuery;
use async_trait::async_trait;
use log::trace;
use serde_json::Value;
use std::fmt;
use std::fmt::Display;
use url::Url;

/// Router of a trip planner running on the same machine
pub const DEFAULT_PLANNER_URL: &str = "http://127.0.0.1:8080/otp/routers/default/";

/// Anything that can answer a plan query with a JSON document. The answer is handed back raw, so
/// that telling a found plan apart from a planner complaint stays with the response mapping.
#[async_trait]
pub trait TripPlanner: Send + Sync {
    async fn plan(&self, query: &PlanQuery) -> Result<Value, PlannerError>;
}

/// Plans trips with the HTTP API of an OpenTripPlanner router. There is no timeout and no retry:
/// a planner that never answers stalls the caller.
#[derive(Debug, Clone)]
pub struct OtpClient {
    client: reqwest::Client,
    plan_url: Url,
}

impl OtpClient {
    pub fn new(base_url: &str) -> Result<Self, PlannerError> {
        let mut base = Url::parse(base_url)?;
        // Without a trailing slash, joining would replace the last path segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            plan_url: base.join("plan")?,
        })
    }

    pub fn plan_url(&self) -> &Url {
        &self.plan_url
    }
}

#[async_trait]
impl TripPlanner for OtpClient {
    async fn plan(&self, query: &PlanQuery) -> Result<Value, PlannerError> {
        trace!(target: "planner", "Requesting plan from {} to {}", query.from_place, query.to_place);

        let response = self.client
            .get(self.plan_url.clone())
            .query(query)
            .send()
            .await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PlannerError {
    Reqwest(#[from] reqwest::Error),
    Json(#[from] serde_json::Error),
    Url(#[from] url::ParseError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlannerError::Reqwest(err) => write!(f, "Request to planner failed: {}", err),
            PlannerError::Json(err) => write!(f, "Planner did not answer with JSON: {}", err),
            PlannerError::Url(err) => write!(f, "Invalid planner URL: {}", err),
        }
    }
}
