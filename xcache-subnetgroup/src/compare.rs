//! Drift detection between declared parameters and the remote record.

use std::collections::BTreeSet;

use crate::clients::CacheSubnetGroupRecord;
use crate::resource::CacheSubnetGroupParameters;

/// Remote state as seen by a single describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedState {
    pub description: String,
    pub subnet_ids: BTreeSet<String>,
}

impl From<&CacheSubnetGroupRecord> for ObservedState {
    fn from(record: &CacheSubnetGroupRecord) -> Self {
        Self {
            description: record
                .cache_subnet_group_description
                .clone()
                .unwrap_or_default(),
            subnet_ids: record
                .subnets
                .iter()
                .filter_map(|s| s.subnet_identifier.clone())
                .collect(),
        }
    }
}

/// Whether the remote record satisfies the declared parameters.
///
/// Descriptions are compared literally: an empty desired description only
/// matches an empty (or missing) remote one. Subnets are compared as sets.
pub fn is_up_to_date(desired: &CacheSubnetGroupParameters, observed: &ObservedState) -> bool {
    if desired.description != observed.description {
        return false;
    }
    let desired_ids: BTreeSet<&str> = desired.subnet_ids.iter().map(String::as_str).collect();
    let observed_ids: BTreeSet<&str> = observed.subnet_ids.iter().map(String::as_str).collect();
    desired_ids == observed_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::Subnet;

    fn params(description: &str, ids: &[&str]) -> CacheSubnetGroupParameters {
        CacheSubnetGroupParameters {
            description: description.to_string(),
            subnet_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn observed(description: &str, ids: &[&str]) -> ObservedState {
        ObservedState {
            description: description.to_string(),
            subnet_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_subnet_order_is_ignored() {
        assert!(is_up_to_date(
            &params("d", &["A", "B"]),
            &observed("d", &["B", "A"])
        ));
    }

    #[test]
    fn test_subnet_membership_differs() {
        assert!(!is_up_to_date(
            &params("d", &["A", "B"]),
            &observed("d", &["A", "C"])
        ));
        assert!(!is_up_to_date(
            &params("d", &["A"]),
            &observed("d", &["A", "B"])
        ));
    }

    #[test]
    fn test_duplicate_desired_subnets() {
        assert!(is_up_to_date(
            &params("d", &["A", "A", "B"]),
            &observed("d", &["A", "B"])
        ));
    }

    #[test]
    fn test_description_compared_literally() {
        assert!(!is_up_to_date(&params("", &["A"]), &observed("remote", &["A"])));
        assert!(!is_up_to_date(&params("d1", &["A"]), &observed("d2", &["A"])));
        assert!(is_up_to_date(&params("", &[]), &observed("", &[])));
    }

    #[test]
    fn test_observed_from_record() {
        let record = CacheSubnetGroupRecord {
            cache_subnet_group_name: Some("sg".to_string()),
            cache_subnet_group_description: None,
            vpc_id: Some("vpc-1".to_string()),
            subnets: vec![
                Subnet {
                    subnet_identifier: Some("s1".to_string()),
                    subnet_availability_zone: None,
                },
                Subnet::default(),
            ],
        };

        let state = ObservedState::from(&record);
        assert_eq!(state.description, "");
        assert_eq!(state.subnet_ids, BTreeSet::from(["s1".to_string()]));
    }
}
