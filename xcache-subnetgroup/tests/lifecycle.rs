//! End-to-end lifecycle tests for the cache subnet group adapter.
//!
//! Drives Observe/Create/Update/Delete the way a reconciliation driver would,
//! against the recording mock client.

use tokio_util::sync::CancellationToken;

use xcache_subnetgroup::clients::fake::{Call, MockClient};
use xcache_subnetgroup::clients::{
    CacheSubnetGroupRecord, ClientError, DescribeOutput, ModifyInput, Subnet,
};
use xcache_subnetgroup::config::ReconcileConfig;
use xcache_subnetgroup::driver::{self, Action, Outcome};
use xcache_subnetgroup::{
    CacheSubnetGroup, CacheSubnetGroupParameters, ExternalClient, ExternalObservation, Lifecycle,
    SubnetGroupExternal,
};

fn desired() -> CacheSubnetGroup {
    CacheSubnetGroup::new(
        "sg-1",
        CacheSubnetGroupParameters {
            description: "d1".to_string(),
            subnet_ids: vec!["s1".to_string()],
        },
    )
}

fn remote(description: &str, subnets: &[&str]) -> DescribeOutput {
    DescribeOutput {
        cache_subnet_groups: vec![CacheSubnetGroupRecord {
            cache_subnet_group_name: Some("sg-1".to_string()),
            cache_subnet_group_description: Some(description.to_string()),
            vpc_id: Some("vpc-1".to_string()),
            subnets: subnets
                .iter()
                .map(|id| Subnet {
                    subnet_identifier: Some(id.to_string()),
                    subnet_availability_zone: None,
                })
                .collect(),
        }],
    }
}

/// Observe (missing) → Create → Observe (present, up to date).
#[tokio::test]
async fn test_create_then_available() {
    let external = SubnetGroupExternal::new(
        MockClient::new().with_describe(Ok(DescribeOutput::default())),
    );
    let cancel = CancellationToken::new();
    let mut cr = desired();

    let o = external.observe(&mut cr, &cancel).await.unwrap();
    assert_eq!(o, ExternalObservation::default());
    assert_eq!(cr.status.conditioned.lifecycle(), Lifecycle::Unknown);

    external.create(&mut cr, &cancel).await.unwrap();
    assert_eq!(cr.status.conditioned.lifecycle(), Lifecycle::Creating);

    external.client().set_describe(Ok(remote("d1", &["s1"])));

    let o = external.observe(&mut cr, &cancel).await.unwrap();
    assert_eq!(
        o,
        ExternalObservation {
            resource_exists: true,
            resource_up_to_date: true,
        }
    );
    assert_eq!(cr.status.conditioned.lifecycle(), Lifecycle::Available);
}

/// Repeated passes converge and then stop issuing mutations.
#[tokio::test]
async fn test_driver_passes_converge() {
    let external = SubnetGroupExternal::new(
        MockClient::new().with_describe(Err(ClientError::not_found("sg-1"))),
    );
    let config = ReconcileConfig::default();
    let cancel = CancellationToken::new();
    let mut cr = desired();

    let (action, _) = driver::reconcile(&external, &mut cr, &config, &cancel).await;
    assert_eq!(action, Action::Create);

    // The remote group exists but someone changed its subnets.
    external.client().set_describe(Ok(remote("d1", &["s2"])));
    let (action, outcome) = driver::reconcile(&external, &mut cr, &config, &cancel).await;
    assert_eq!(action, Action::Update);
    assert!(matches!(outcome, Outcome::RequeueAfter(d) if d == config.short_wait));
    assert_eq!(cr.status.conditioned.lifecycle(), Lifecycle::Available);

    external.client().set_describe(Ok(remote("d1", &["s1"])));
    let (action, outcome) = driver::reconcile(&external, &mut cr, &config, &cancel).await;
    assert_eq!(action, Action::None);
    assert!(matches!(outcome, Outcome::RequeueAfter(d) if d == config.poll_interval));

    let modifies: Vec<_> = external
        .client()
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Modify(input) => Some(input),
            _ => None,
        })
        .collect();
    assert_eq!(
        modifies,
        vec![ModifyInput {
            cache_subnet_group_name: "sg-1".to_string(),
            cache_subnet_group_description: "d1".to_string(),
            subnet_ids: vec!["s1".to_string()],
        }]
    );
}

/// Deleting twice is safe: the second delete sees not-found and succeeds.
#[tokio::test]
async fn test_delete_is_idempotent() {
    let external = SubnetGroupExternal::new(MockClient::new());
    let cancel = CancellationToken::new();
    let mut cr = desired();
    cr.metadata.deletion_requested = true;

    let (_, outcome) =
        driver::reconcile(&external, &mut cr, &ReconcileConfig::default(), &cancel).await;
    assert!(matches!(outcome, Outcome::Deleted));

    let retry = SubnetGroupExternal::new(
        MockClient::new().with_delete(Err(ClientError::not_found("sg-1"))),
    );
    let (_, outcome) =
        driver::reconcile(&retry, &mut cr, &ReconcileConfig::default(), &cancel).await;
    assert!(matches!(outcome, Outcome::Deleted));
    assert_eq!(cr.status.conditioned.lifecycle(), Lifecycle::Deleting);
}

#[test]
fn test_status_serializes_conditions() {
    let mut cr = desired();
    cr.status
        .conditioned
        .set_conditions([xcache_subnetgroup::Condition::available()]);

    let json = serde_json::to_value(&cr).unwrap();
    let condition = &json["status"]["conditions"][0];
    assert_eq!(condition["type"], "Ready");
    assert_eq!(condition["status"], "True");
    assert_eq!(condition["reason"], "Available");
    assert!(condition["lastTransitionTime"].is_string());
    assert_eq!(json["spec"]["forProvider"]["subnetIDs"][0], "s1");
}
