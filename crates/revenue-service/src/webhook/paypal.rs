//! PayPal event handlers. Acknowledge-and-log only: nothing is settled,
//! stored, or provisioned beyond the log record.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use revenue_core::error::{Result, RevenueError};
use revenue_core::PriceCatalog;

use super::dispatcher::WebhookHandler;
use super::{WebhookCtx, WebhookEvent};

pub const PAYMENT_SALE_COMPLETED: &str = "PAYMENT.SALE.COMPLETED";
pub const SUBSCRIPTION_ACTIVATED: &str = "BILLING.SUBSCRIPTION.ACTIVATED";
pub const SUBSCRIPTION_CANCELLED: &str = "BILLING.SUBSCRIPTION.CANCELLED";

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Default, Deserialize)]
struct Party {
    #[serde(default)]
    email_address: String,
}

/// PayPal sends `total` as a decimal string; plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    fn to_f64(&self) -> Result<f64> {
        let v = match self {
            AmountValue::Number(n) => *n,
            AmountValue::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                RevenueError::BadRequest(format!("invalid amount total {s:?}: {e}"))
            })?,
        };
        if !v.is_finite() {
            return Err(RevenueError::BadRequest("amount total must be finite".into()));
        }
        Ok(v)
    }
}

#[derive(Debug, Default, Deserialize)]
struct SaleAmount {
    #[serde(default)]
    total: Option<AmountValue>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SaleResource {
    #[serde(default)]
    amount: SaleAmount,
    #[serde(default)]
    payer: Party,
}

#[derive(Debug, Default, Deserialize)]
struct SubscriptionResource {
    #[serde(default)]
    subscriber: Party,
    #[serde(default)]
    plan_id: String,
}

pub struct PaymentCompletedHandler {
    catalog: Arc<PriceCatalog>,
}

impl PaymentCompletedHandler {
    pub fn new(catalog: Arc<PriceCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl WebhookHandler for PaymentCompletedHandler {
    fn event_type(&self) -> &'static str {
        PAYMENT_SALE_COMPLETED
    }

    async fn handle(&self, ctx: WebhookCtx, event: WebhookEvent) -> Result<Value> {
        let res: SaleResource = event.resource()?;
        let amount = match &res.amount.total {
            Some(total) => total.to_f64()?,
            None => 0.0,
        };
        let currency = res
            .amount
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let payer = res.payer.email_address;

        tracing::info!(provider = ctx.provider, %amount, %currency, payer = %payer, "payment completed");

        let product = self.catalog.match_amount(amount);
        match product {
            Some(tier) => tracing::info!(
                provider = ctx.provider,
                email = %payer,
                product = %tier.key,
                product_name = %tier.name,
                amount,
                recurring = false,
                received_at = %ctx.received_at.to_rfc3339(),
                "provisioned customer access"
            ),
            None => tracing::warn!(provider = ctx.provider, amount, "payment matches no product tier"),
        }

        Ok(json!({
            "status": "success",
            "payment_processed": true,
            "amount": amount,
            "currency": currency,
            "provisioned": product.is_some(),
            "product": product.map(|t| t.key.as_str()),
        }))
    }
}

pub struct SubscriptionActivatedHandler;

#[async_trait]
impl WebhookHandler for SubscriptionActivatedHandler {
    fn event_type(&self) -> &'static str {
        SUBSCRIPTION_ACTIVATED
    }

    async fn handle(&self, ctx: WebhookCtx, event: WebhookEvent) -> Result<Value> {
        let res: SubscriptionResource = event.resource()?;
        tracing::info!(
            provider = ctx.provider,
            email = %res.subscriber.email_address,
            plan_id = %res.plan_id,
            recurring = true,
            received_at = %ctx.received_at.to_rfc3339(),
            "subscription activated, provisioned recurring access"
        );
        Ok(json!({ "status": "success", "subscription_activated": true }))
    }
}

pub struct SubscriptionCancelledHandler;

#[async_trait]
impl WebhookHandler for SubscriptionCancelledHandler {
    fn event_type(&self) -> &'static str {
        SUBSCRIPTION_CANCELLED
    }

    async fn handle(&self, ctx: WebhookCtx, event: WebhookEvent) -> Result<Value> {
        let res: SubscriptionResource = event.resource()?;
        tracing::info!(
            provider = ctx.provider,
            email = %res.subscriber.email_address,
            "subscription cancelled, revoking access"
        );
        Ok(json!({ "status": "success", "subscription_cancelled": true }))
    }
}
