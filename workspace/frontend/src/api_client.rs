pub mod alerts;
pub mod equipment;
pub mod forecasts;
pub mod fuel_types;
pub mod operational_hours;
pub mod sites;
pub mod stock;
pub mod transactions;

use std::fmt;
use std::rc::Rc;

use common::endpoints;
use common::{ApiError, ApiResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::toast::ToastContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// JSON client for the fuel-control API.
///
/// Every failure is logged and raised as an error notification before it is
/// handed back to the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    notifier: ToastContext,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.notifier == other.notifier
    }
}

impl ApiClient {
    pub fn new(base_url: &str, notifier: ToastContext) -> Self {
        Self {
            base_url: Rc::from(base_url),
            notifier,
        }
    }

    pub async fn request<T, B>(&self, endpoint: &str, method: Method, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.send(endpoint, method, body).await;
        if let Err(err) = &result {
            log::error!("API Error [{}]: {}", endpoint, err);
            self.notifier.show_error(err.notification_text());
        }
        result
    }

    async fn send<T, B>(&self, endpoint: &str, method: Method, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = endpoints::join_url(&self.base_url, endpoint);
        log::debug!("{} request to: {}", method, url);

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(ApiError::encode)?;

        let response = request.send().await.map_err(ApiError::network)?;

        if !response.ok() {
            log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
            let body = response.text().await.ok();
            return Err(ApiError::from_status(
                response.status(),
                &response.status_text(),
                body.as_deref(),
            ));
        }

        log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
        response.json::<T>().await.map_err(ApiError::decode)
    }

    pub async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(endpoint, Method::Get, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::Post, Some(body)).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::Put, Some(body)).await
    }

    pub async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(endpoint, Method::Delete, None).await
    }
}
