//! Constants for the CodeWhisperer runtime API
//!
//! This module defines the base URL, endpoint paths, header names and the
//! fixed payload values sent by the probes.

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://codewhisperer.us-east-1.amazonaws.com";

/// Client identifier sent as the User-Agent
pub const USER_AGENT: &str = "Kiro/1.0";

/// Endpoint path constants
pub mod endpoint {
    /// Model listing (GET)
    pub const LIST_AVAILABLE_MODELS: &str = "/ListAvailableModels";

    /// Subscription plan listing (POST)
    pub const LIST_AVAILABLE_SUBSCRIPTIONS: &str = "/listAvailableSubscriptions";

    /// Payment-provider token creation (POST)
    pub const CREATE_SUBSCRIPTION_TOKEN: &str = "/CreateSubscriptionToken";

    /// Feature flag evaluations (POST)
    pub const LIST_FEATURE_EVALUATIONS: &str = "/ListFeatureEvaluations";

    /// Usage quota override (POST)
    pub const UPDATE_USAGE_LIMITS: &str = "/updateUsageLimits";

    /// Account profile (POST)
    pub const GET_PROFILE: &str = "/GetProfile";
}

/// Header name and value constants
pub mod header {
    /// Vendor opt-in preference header
    pub const OPTOUT_PREFERENCE: &str = "x-amzn-codewhisperer-optout-preference";

    /// Value sent in the opt-in preference header
    pub const OPTIN: &str = "OPTIN";

    /// JSON media type
    pub const APPLICATION_JSON: &str = "application/json";

    /// Response header name prefixes shown by the printer
    pub const DISPLAYED_PREFIXES: [&str; 3] = ["x-amz", "content-type", "date"];
}

/// Fixed payload values
pub mod payload {
    /// Required origin for model listing
    pub const ORIGIN_AI_EDITOR: &str = "AI_EDITOR";

    /// Page size for model listing
    pub const MAX_RESULTS: u32 = 50;

    /// Payment provider for subscription tokens
    pub const PROVIDER_STRIPE: &str = "STRIPE";

    /// IDE category, product and OS reported in the user context
    pub const IDE_CATEGORY: &str = "KIRO";
    pub const PRODUCT: &str = "KIRO";
    pub const OPERATING_SYSTEM: &str = "WINDOWS";
    pub const CLIENT_ID: &str = "test-client";

    /// Feature whose quota the usage-limit probe asks to raise
    pub const FEATURE_AGENT_TASKS: &str = "AGENT_TASKS";
    pub const JUSTIFICATION: &str = "Testing API";
    pub const REQUESTED_LIMIT: u64 = 1_000_000;
}

/// Maximum characters of a non-JSON body shown by the printer
pub const MAX_RAW_BODY_CHARS: usize = 2000;

/// Width of the banner rule
pub const BANNER_WIDTH: usize = 60;
