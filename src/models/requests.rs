//! Request payloads for the CodeWhisperer runtime API
//!
//! Query strings and JSON bodies sent by the probes. Optional fields are left
//! out of the serialized form instead of being sent as `null`.

use crate::core::constants::payload;
use serde::Serialize;

/// Query parameters for `GET /ListAvailableModels`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAvailableModelsParams {
    pub origin: String,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_provider: Option<String>,
}

impl ListAvailableModelsParams {
    pub fn new(model_provider: Option<&str>) -> Self {
        Self {
            origin: payload::ORIGIN_AI_EDITOR.to_string(),
            max_results: payload::MAX_RESULTS,
            model_provider: model_provider.map(str::to_string),
        }
    }
}

/// Body for `POST /listAvailableSubscriptions`; the API takes no parameters
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAvailableSubscriptionsRequest {}

/// Body for `POST /CreateSubscriptionToken`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionTokenRequest {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<String>,
}

impl CreateSubscriptionTokenRequest {
    pub fn new(subscription_type: Option<&str>) -> Self {
        Self {
            provider: payload::PROVIDER_STRIPE.to_string(),
            subscription_type: subscription_type.map(str::to_string),
        }
    }
}

/// Client description attached to feature evaluation requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub ide_category: String,
    pub operating_system: String,
    pub product: String,
    pub client_id: String,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            ide_category: payload::IDE_CATEGORY.to_string(),
            operating_system: payload::OPERATING_SYSTEM.to_string(),
            product: payload::PRODUCT.to_string(),
            client_id: payload::CLIENT_ID.to_string(),
        }
    }
}

/// Body for `POST /ListFeatureEvaluations`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeatureEvaluationsRequest {
    pub user_context: UserContext,
}

/// Body for `POST /updateUsageLimits`
///
/// The identifier fields are sent empty; the endpoint's required schema is
/// not known.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsageLimitsRequest {
    pub account_id: String,
    pub accountless_user_id: String,
    pub directory_id: String,
    pub feature_type: String,
    pub justification: String,
    pub permanent_override: bool,
    pub requested_limit: u64,
}

impl Default for UpdateUsageLimitsRequest {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            accountless_user_id: String::new(),
            directory_id: String::new(),
            feature_type: payload::FEATURE_AGENT_TASKS.to_string(),
            justification: payload::JUSTIFICATION.to_string(),
            permanent_override: false,
            requested_limit: payload::REQUESTED_LIMIT,
        }
    }
}

/// Body for `POST /GetProfile`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_token_omits_missing_type() {
        let body = serde_json::to_value(CreateSubscriptionTokenRequest::new(None)).unwrap();
        assert_eq!(body, json!({ "provider": "STRIPE" }));

        let body =
            serde_json::to_value(CreateSubscriptionTokenRequest::new(Some("KIRO_PRO"))).unwrap();
        assert_eq!(
            body,
            json!({ "provider": "STRIPE", "subscriptionType": "KIRO_PRO" })
        );
    }

    #[test]
    fn test_feature_evaluations_body() {
        let body = serde_json::to_value(ListFeatureEvaluationsRequest::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "userContext": {
                    "ideCategory": "KIRO",
                    "operatingSystem": "WINDOWS",
                    "product": "KIRO",
                    "clientId": "test-client"
                }
            })
        );
    }

    #[test]
    fn test_usage_limits_body() {
        let body = serde_json::to_value(UpdateUsageLimitsRequest::default()).unwrap();
        assert_eq!(body["accountId"], "");
        assert_eq!(body["accountlessUserId"], "");
        assert_eq!(body["directoryId"], "");
        assert_eq!(body["featureType"], "AGENT_TASKS");
        assert_eq!(body["permanentOverride"], false);
        assert_eq!(body["requestedLimit"], 1_000_000);
    }

    #[test]
    fn test_empty_bodies_serialize_to_empty_object() {
        assert_eq!(
            serde_json::to_value(ListAvailableSubscriptionsRequest::default()).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(GetProfileRequest::default()).unwrap(),
            json!({})
        );
    }
}
