//! Enumeration types for the EcoArchitect simulation.
//!
//! Catalog keys (habitat and agent types) are closed enums rather than free
//! strings. Their serialized form is the camelCase key used by persisted
//! boards and authored catalogs (`"marketplace"`, `"paymentGateway"`,
//! `"recommendationAI"`). Keys this build does not recognise deserialize
//! to an `Unknown` variant, which no catalog defines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Catalog keys
// ---------------------------------------------------------------------------

/// A kind of habitat that can be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum HabitatType {
    /// Digital space where buyers and sellers meet.
    Marketplace,
    /// Financial transaction processing.
    Payment,
    /// Analytics and intelligence.
    Data,
    /// Security, authentication and compliance.
    Trust,
    /// Experimentation and evolution.
    Innovation,
    /// A key from persisted data that no catalog defines.
    #[serde(other)]
    Unknown,
}

impl HabitatType {
    /// Every habitat type, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Marketplace,
        Self::Payment,
        Self::Data,
        Self::Trust,
        Self::Innovation,
    ];

    /// The serialized catalog key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::Payment => "payment",
            Self::Data => "data",
            Self::Trust => "trust",
            Self::Innovation => "innovation",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this is a recognised habitat type.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl core::fmt::Display for HabitatType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind of agent component that can be placed inside a habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum AgentType {
    /// Card and wallet payment processing.
    PaymentGateway,
    /// Foreign exchange between currencies.
    CurrencyConverter,
    /// Login and identity.
    UserAuth,
    /// Transaction fraud screening.
    FraudDetection,
    /// Personalised suggestions.
    #[serde(rename = "recommendationAI")]
    RecommendationAi,
    /// Reporting and market insight.
    AnalyticsEngine,
    /// Ratings and reviews.
    ReviewSystem,
    /// Order and shipment tracking.
    DeliveryTracker,
    /// Rapid prototyping.
    PrototypeLab,
    /// Controlled experiments.
    AbTesting,
    /// Know-your-customer identity checks.
    KycVerification,
    /// Generic integration glue; fits any habitat.
    ApiConnector,
    /// A key from persisted data that no catalog defines.
    #[serde(other)]
    Unknown,
}

impl AgentType {
    /// Every agent type, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::PaymentGateway,
        Self::CurrencyConverter,
        Self::UserAuth,
        Self::FraudDetection,
        Self::RecommendationAi,
        Self::AnalyticsEngine,
        Self::ReviewSystem,
        Self::DeliveryTracker,
        Self::PrototypeLab,
        Self::AbTesting,
        Self::KycVerification,
        Self::ApiConnector,
    ];

    /// The serialized catalog key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaymentGateway => "paymentGateway",
            Self::CurrencyConverter => "currencyConverter",
            Self::UserAuth => "userAuth",
            Self::FraudDetection => "fraudDetection",
            Self::RecommendationAi => "recommendationAI",
            Self::AnalyticsEngine => "analyticsEngine",
            Self::ReviewSystem => "reviewSystem",
            Self::DeliveryTracker => "deliveryTracker",
            Self::PrototypeLab => "prototypeLab",
            Self::AbTesting => "abTesting",
            Self::KycVerification => "kycVerification",
            Self::ApiConnector => "apiConnector",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this is a recognised agent type.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl core::fmt::Display for AgentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The habitat an agent performs best in.
///
/// `Any` is the wildcard: the agent is correctly placed in every habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum BestFit {
    /// Best in a [`HabitatType::Marketplace`].
    Marketplace,
    /// Best in a [`HabitatType::Payment`].
    Payment,
    /// Best in a [`HabitatType::Data`].
    Data,
    /// Best in a [`HabitatType::Trust`].
    Trust,
    /// Best in a [`HabitatType::Innovation`].
    Innovation,
    /// Fits every habitat.
    Any,
}

impl BestFit {
    /// The specific habitat this fit names, or `None` for the wildcard.
    pub const fn habitat(self) -> Option<HabitatType> {
        match self {
            Self::Marketplace => Some(HabitatType::Marketplace),
            Self::Payment => Some(HabitatType::Payment),
            Self::Data => Some(HabitatType::Data),
            Self::Trust => Some(HabitatType::Trust),
            Self::Innovation => Some(HabitatType::Innovation),
            Self::Any => None,
        }
    }

    /// Whether an agent with this fit is correctly placed in `habitat`.
    ///
    /// A specific fit never accepts [`HabitatType::Unknown`].
    pub fn accepts(self, habitat: HabitatType) -> bool {
        self.habitat().is_none_or(|best| best == habitat)
    }

    /// The specific fit for `habitat`, or `None` for an unknown type.
    pub const fn for_habitat(habitat: HabitatType) -> Option<Self> {
        match habitat {
            HabitatType::Marketplace => Some(Self::Marketplace),
            HabitatType::Payment => Some(Self::Payment),
            HabitatType::Data => Some(Self::Data),
            HabitatType::Trust => Some(Self::Trust),
            HabitatType::Innovation => Some(Self::Innovation),
            HabitatType::Unknown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Metrics and bonuses
// ---------------------------------------------------------------------------

/// The metric a stakeholder group primarily cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum StakeholderMetric {
    /// Transaction and delivery speed.
    Speed,
    /// Security and compliance.
    Trust,
    /// Budget discipline.
    Cost,
    /// Correct placement and operational efficiency.
    Efficiency,
    /// End-user experience.
    UserSatisfaction,
    /// Overall business value.
    Value,
}

impl StakeholderMetric {
    /// The serialized metric key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Trust => "trust",
            Self::Cost => "cost",
            Self::Efficiency => "efficiency",
            Self::UserSatisfaction => "userSatisfaction",
            Self::Value => "value",
        }
    }
}

/// The bonus category a habitat grants.
///
/// A habitat bonus counts toward a stakeholder only when its key is
/// identical to the stakeholder's metric key; see [`BonusType::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum BonusType {
    /// User satisfaction bonus.
    UserSatisfaction,
    /// Transaction speed bonus.
    TransactionSpeed,
    /// System efficiency bonus.
    SystemEfficiency,
    /// Compliance score bonus.
    Compliance,
    /// Faster evolution bonus.
    Evolution,
}

impl BonusType {
    /// The serialized bonus key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserSatisfaction => "userSatisfaction",
            Self::TransactionSpeed => "transactionSpeed",
            Self::SystemEfficiency => "systemEfficiency",
            Self::Compliance => "compliance",
            Self::Evolution => "evolution",
        }
    }

    /// Whether this bonus key is the same key as `metric`.
    pub fn matches(self, metric: StakeholderMetric) -> bool {
        self.as_str() == metric.as_str()
    }
}

/// The category of a synergy bonus. Informational; scoring keys on labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum SynergyCategory {
    /// Speed synergy.
    Speed,
    /// Trust synergy.
    Trust,
    /// Efficiency synergy.
    Efficiency,
    /// User satisfaction synergy.
    UserSatisfaction,
    /// Evolution synergy.
    Evolution,
}

// ---------------------------------------------------------------------------
// Score presentation
// ---------------------------------------------------------------------------

/// Tag on a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum FeedbackKind {
    /// Something the configuration does well.
    Success,
    /// Something costing points.
    Warning,
}

/// How well an agent suits a habitat, for placement hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum AgentFit {
    /// Best-fit habitat or wildcard agent.
    Good,
    /// Agent type unknown to the catalog.
    Neutral,
    /// Agent belongs in another habitat.
    Poor,
}

/// How a stakeholder score compares to that stakeholder's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum SatisfactionBand {
    /// At least ten points above target.
    Exceeded,
    /// At or above target.
    Met,
    /// Within 80% of target.
    Close,
    /// Below 80% of target.
    Unmet,
}

/// Phase of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum SessionPhase {
    /// No scenario selected.
    Idle,
    /// Scenario seeded, countdown not yet running.
    Planning,
    /// Countdown running.
    Building,
    /// Score computed; awaiting restart, advance or reset.
    Review,
}
