//! Fixed probe sequence

use crate::api::probes::Prober;
use crate::core::constants::BANNER_WIDTH;
use tracing::info;

/// Outcome counts of a probe run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
}

impl RunSummary {
    fn record(&mut self, result: Option<serde_json::Value>) {
        self.attempted += 1;
        if result.is_some() {
            self.succeeded += 1;
        }
    }
}

/// Run every probe once, in order
///
/// A failing probe never stops the run.
pub async fn run_probes(prober: &Prober) -> RunSummary {
    let config = prober.client().config();
    println!("\n📡 API base URL: {}", config.base_url);
    println!("🔑 Token length: {}", config.access_token.chars().count());

    print_rule();
    println!("📋 Starting tests...");
    print_rule();

    let mut summary = RunSummary::default();

    summary.record(prober.list_available_models().await);
    summary.record(prober.list_available_models_with_provider("AMAZON").await);
    summary.record(prober.list_available_models_with_provider("ANTHROPIC").await);
    summary.record(prober.list_available_subscriptions().await);
    summary.record(prober.create_subscription_token(None).await);
    summary.record(prober.create_subscription_token(Some("KIRO_PRO")).await);
    summary.record(prober.list_feature_evaluations().await);
    summary.record(prober.update_usage_limits().await);
    summary.record(prober.get_profile(None).await);

    info!(
        "Probe run finished: {}/{} returned JSON",
        summary.succeeded, summary.attempted
    );

    println!();
    print_rule();
    println!(
        "✅ Tests finished! ({}/{} returned JSON)",
        summary.succeeded, summary.attempted
    );
    print_rule();

    summary
}

fn print_rule() {
    println!("{}", "=".repeat(BANNER_WIDTH));
}
