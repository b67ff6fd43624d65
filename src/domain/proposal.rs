//! Project proposal payload delivered to the n8n webhook.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, CurrencyCode, Quantity, TypeConstraintError};

/// One line item of a project proposal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectComponent {
    pub name: String,
    pub description: String,
    pub price: Amount,
    pub quantity: Quantity,
    pub category: String,
}

impl ProjectComponent {
    pub fn try_new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        category: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: name.into(),
            description: description.into(),
            price: Amount::new(price)?,
            quantity: Quantity::new(quantity)?,
            category: category.into(),
        })
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> f64 {
        self.price.get() * f64::from(self.quantity.get())
    }
}

/// Body POSTed to the webhook endpoint.
///
/// `total_amount` is carried as entered and is not reconciled against the
/// components; see [`WebhookPayload::components_total`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload {
    pub project_name: String,
    pub client_name: String,
    pub proposal_date: String,
    pub components: Vec<ProjectComponent>,
    pub total_amount: Amount,
    pub currency: CurrencyCode,
    pub notes: String,
}

impl WebhookPayload {
    /// Sum of `price * quantity` over all components.
    pub fn components_total(&self) -> f64 {
        self.components
            .iter()
            .map(ProjectComponent::line_total)
            .sum()
    }

    /// Whether the listed total differs from the component sum.
    pub fn has_total_mismatch(&self) -> bool {
        (self.components_total() - self.total_amount.get()).abs() > f64::EPSILON
    }
}

/// Formats a timestamp the way browsers emit `Date.toISOString()`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

const SAMPLE_COMPONENTS: [(&str, &str, f64, &str); 8] = [
    (
        "Frontend Development",
        "React-based responsive web application",
        5000.0,
        "Development",
    ),
    (
        "Backend API Development",
        "RESTful API with authentication and authorization",
        4500.0,
        "Development",
    ),
    (
        "Database Design",
        "PostgreSQL database schema and optimization",
        2000.0,
        "Development",
    ),
    (
        "Payment Integration",
        "Stripe payment gateway integration",
        1500.0,
        "Integration",
    ),
    (
        "Admin Dashboard",
        "Full-featured admin panel with analytics",
        3000.0,
        "Development",
    ),
    (
        "Testing & QA",
        "Comprehensive testing and quality assurance",
        2500.0,
        "Testing",
    ),
    (
        "Deployment & DevOps",
        "CI/CD pipeline setup and production deployment",
        1800.0,
        "DevOps",
    ),
    (
        "Documentation",
        "Technical and user documentation",
        1200.0,
        "Documentation",
    ),
];

const SAMPLE_TOTAL: f64 = 21500.0;

/// Builds the predefined test proposal dated at `proposal_date`.
pub fn sample_proposal(
    proposal_date: DateTime<Utc>,
) -> Result<WebhookPayload, TypeConstraintError> {
    let components = SAMPLE_COMPONENTS
        .iter()
        .map(|&(name, description, price, category)| {
            ProjectComponent::try_new(name, description, price, 1, category)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WebhookPayload {
        project_name: "E-Commerce Platform Development".to_string(),
        client_name: "Acme Corporation".to_string(),
        proposal_date: iso_timestamp(proposal_date),
        components,
        total_amount: Amount::new(SAMPLE_TOTAL)?,
        currency: CurrencyCode::new("USD")?,
        notes: "This is a test proposal for n8n webhook integration. All values are sample data."
            .to_string(),
    })
}
