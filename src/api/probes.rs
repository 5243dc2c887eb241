//! Endpoint probes
//!
//! Each probe sends one request, prints the response and returns the JSON
//! body on HTTP 200. Failures are printed and collapse to `None`.

use crate::api::printer::print_response;
use crate::core::client::{KiroClient, ProbeError, ProbeResponse};
use crate::core::constants::endpoint;
use crate::models::requests::{
    CreateSubscriptionTokenRequest, GetProfileRequest, ListAvailableModelsParams,
    ListAvailableSubscriptionsRequest, ListFeatureEvaluationsRequest, UpdateUsageLimitsRequest,
};
use serde_json::Value;
use tracing::{error, warn};

/// Characters of a profile ARN shown in the report title
const PROFILE_ARN_PREVIEW_CHARS: usize = 30;

/// Runs probes against one client
pub struct Prober {
    client: KiroClient,
}

impl Prober {
    pub fn new(client: KiroClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &KiroClient {
        &self.client
    }

    /// `GET /ListAvailableModels` without a provider filter
    pub async fn list_available_models(&self) -> Option<Value> {
        println!("\n🔍 Testing ListAvailableModels API...");

        let params = ListAvailableModelsParams::new(None);
        let result = self
            .client
            .get(endpoint::LIST_AVAILABLE_MODELS, &params)
            .await;
        report("ListAvailableModels response", result)
    }

    /// `GET /ListAvailableModels` filtered by model provider
    pub async fn list_available_models_with_provider(&self, provider: &str) -> Option<Value> {
        println!(
            "\n🔍 Testing ListAvailableModels API (provider={})...",
            provider
        );

        let params = ListAvailableModelsParams::new(Some(provider));
        let result = self
            .client
            .get(endpoint::LIST_AVAILABLE_MODELS, &params)
            .await;
        report(
            &format!("ListAvailableModels (provider={}) response", provider),
            result,
        )
    }

    /// `POST /listAvailableSubscriptions`
    pub async fn list_available_subscriptions(&self) -> Option<Value> {
        println!("\n🔍 Testing ListAvailableSubscriptions API...");

        let result = self
            .client
            .post(
                endpoint::LIST_AVAILABLE_SUBSCRIPTIONS,
                &ListAvailableSubscriptionsRequest::default(),
            )
            .await;
        report("ListAvailableSubscriptions response", result)
    }

    /// `POST /CreateSubscriptionToken` with an optional subscription type
    pub async fn create_subscription_token(&self, subscription_type: Option<&str>) -> Option<Value> {
        let type_suffix = subscription_type
            .map(|t| format!(", type={}", t))
            .unwrap_or_default();
        println!(
            "\n🔍 Testing CreateSubscriptionToken API (provider=STRIPE{})...",
            type_suffix
        );

        let body = CreateSubscriptionTokenRequest::new(subscription_type);
        let result = self
            .client
            .post(endpoint::CREATE_SUBSCRIPTION_TOKEN, &body)
            .await;
        report("CreateSubscriptionToken response", result)
    }

    /// `POST /ListFeatureEvaluations`
    pub async fn list_feature_evaluations(&self) -> Option<Value> {
        println!("\n🔍 Testing ListFeatureEvaluations API...");

        let result = self
            .client
            .post(
                endpoint::LIST_FEATURE_EVALUATIONS,
                &ListFeatureEvaluationsRequest::default(),
            )
            .await;
        report("ListFeatureEvaluations response", result)
    }

    /// `POST /updateUsageLimits`
    ///
    /// Likely needs administrator rights; a 4xx here is expected for most
    /// tokens.
    pub async fn update_usage_limits(&self) -> Option<Value> {
        println!("\n🔍 Testing UpdateUsageLimits API...");

        let result = self
            .client
            .post(
                endpoint::UPDATE_USAGE_LIMITS,
                &UpdateUsageLimitsRequest::default(),
            )
            .await;
        report("UpdateUsageLimits response", result)
    }

    /// `POST /GetProfile` with an optional profile ARN
    pub async fn get_profile(&self, profile_arn: Option<&str>) -> Option<Value> {
        println!("\n🔍 Testing GetProfile API...");

        let body = GetProfileRequest {
            profile_arn: profile_arn.map(str::to_string),
        };
        let result = self.client.post(endpoint::GET_PROFILE, &body).await;
        report(&profile_title(profile_arn), result)
    }
}

fn profile_title(profile_arn: Option<&str>) -> String {
    match profile_arn {
        Some(arn) => {
            let preview: String = arn.chars().take(PROFILE_ARN_PREVIEW_CHARS).collect();
            format!("GetProfile (arn={}...)", preview)
        }
        None => "GetProfile (empty body)".to_string(),
    }
}

/// Print the outcome of one probe and extract its JSON body
fn report(title: &str, result: Result<ProbeResponse, ProbeError>) -> Option<Value> {
    match result {
        Ok(response) => {
            print_response(title, &response);
            match response.json() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("{}: {}", title, e);
                    None
                }
            }
        }
        Err(e) => {
            error!("{}: request failed: {}", title, e);
            println!("❌ Request failed: {}", e);
            None
        }
    }
}
