//! Status conditions set by adapters and persisted by the driver.
//!
//! A resource carries at most one condition per [`ConditionType`]. `Ready`
//! tracks the lifecycle phase, `Synced` records whether the last
//! reconciliation pass succeeded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    Ready,
    Synced,
}

/// Condition status following Kubernetes conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

/// Machine-readable reason for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    Available,
    Unavailable,
    Creating,
    Deleting,
    ReconcileSuccess,
    ReconcileError,
}

/// Lifecycle phase derived from the `Ready` condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Unknown,
    Creating,
    Available,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: ConditionType,
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub last_transition_time: DateTime<Utc>,
}

impl Condition {
    fn new(type_: ConditionType, status: ConditionStatus, reason: Reason) -> Self {
        Self {
            type_,
            status,
            reason: Some(reason),
            message: String::new(),
            last_transition_time: Utc::now(),
        }
    }

    /// The resource exists remotely and can be used.
    pub fn available() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::True, Reason::Available)
    }

    pub fn unavailable() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, Reason::Unavailable)
    }

    /// A create request has been (or is about to be) sent.
    pub fn creating() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, Reason::Creating)
    }

    /// A delete request has been (or is about to be) sent.
    pub fn deleting() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, Reason::Deleting)
    }

    pub fn reconcile_success() -> Self {
        Self::new(
            ConditionType::Synced,
            ConditionStatus::True,
            Reason::ReconcileSuccess,
        )
    }

    /// Marks the last pass as failed. The message carries the full error chain.
    pub fn reconcile_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            message,
            ..Self::new(
                ConditionType::Synced,
                ConditionStatus::False,
                Reason::ReconcileError,
            )
        }
    }

    fn unknown(type_: ConditionType) -> Self {
        Self {
            type_,
            status: ConditionStatus::Unknown,
            reason: None,
            message: String::new(),
            last_transition_time: Utc::now(),
        }
    }

    /// Equality ignoring `last_transition_time`.
    pub fn equal(&self, other: &Condition) -> bool {
        self.type_ == other.type_
            && self.status == other.status
            && self.reason == other.reason
            && self.message == other.message
    }
}

/// Condition list embedded in a resource's status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionedStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl ConditionedStatus {
    /// Set conditions, replacing any existing condition of the same type.
    /// An identical condition keeps its original transition time.
    pub fn set_conditions(&mut self, conditions: impl IntoIterator<Item = Condition>) {
        for new in conditions {
            match self.conditions.iter_mut().find(|c| c.type_ == new.type_) {
                Some(existing) if existing.equal(&new) => {}
                Some(existing) => *existing = new,
                None => self.conditions.push(new),
            }
        }
    }

    /// Condition of the given type, or an `Unknown` one if none is set.
    pub fn get_condition(&self, type_: ConditionType) -> Condition {
        self.conditions
            .iter()
            .find(|c| c.type_ == type_)
            .cloned()
            .unwrap_or_else(|| Condition::unknown(type_))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self.get_condition(ConditionType::Ready).reason {
            Some(Reason::Creating) => Lifecycle::Creating,
            Some(Reason::Available) => Lifecycle::Available,
            Some(Reason::Deleting) => Lifecycle::Deleting,
            _ => Lifecycle::Unknown,
        }
    }

    /// Whether the two statuses hold the same conditions, ignoring timestamps
    /// and ordering.
    pub fn equivalent(&self, other: &ConditionedStatus) -> bool {
        self.conditions.len() == other.conditions.len()
            && self
                .conditions
                .iter()
                .all(|c| other.conditions.iter().any(|o| c.equal(o)))
    }
}
