//! Recording test double for [`SubnetGroupClient`].
//!
//! Every call is recorded, then answered from the configured response for
//! that operation. Unconfigured operations succeed with an empty result.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{
    CacheSubnetGroupRecord, ClientError, CreateInput, DeleteInput, DescribeInput, DescribeOutput,
    ModifyInput, Result, SubnetGroupClient,
};

/// A request seen by [`MockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Describe(DescribeInput),
    Create(CreateInput),
    Modify(ModifyInput),
    Delete(DeleteInput),
}

#[derive(Default)]
struct Responses {
    describe: Option<Result<DescribeOutput>>,
    create: Option<Result<CacheSubnetGroupRecord>>,
    modify: Option<Result<CacheSubnetGroupRecord>>,
    delete: Option<Result<()>>,
}

#[derive(Default)]
pub struct MockClient {
    responses: Mutex<Responses>,
    calls: Mutex<Vec<Call>>,
    latency: Option<Duration>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_describe(self, response: Result<DescribeOutput>) -> Self {
        self.set_describe(response);
        self
    }

    pub fn with_create(self, response: Result<CacheSubnetGroupRecord>) -> Self {
        lock(&self.responses).create = Some(response);
        self
    }

    pub fn with_modify(self, response: Result<CacheSubnetGroupRecord>) -> Self {
        lock(&self.responses).modify = Some(response);
        self
    }

    pub fn with_delete(self, response: Result<()>) -> Self {
        lock(&self.responses).delete = Some(response);
        self
    }

    /// Delay every answer, to exercise cancellation of in-flight calls.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Change the describe answer between calls, e.g. once a create landed.
    pub fn set_describe(&self, response: Result<DescribeOutput>) {
        lock(&self.responses).describe = Some(response);
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    async fn record(&self, call: Call) {
        lock(&self.calls).push(call);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

// A poisoned lock only means another test thread panicked; keep the data.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

fn answer<T: Clone + Default>(slot: &Option<std::result::Result<T, ClientError>>) -> Result<T> {
    slot.clone().unwrap_or_else(|| Ok(T::default()))
}

#[async_trait]
impl SubnetGroupClient for MockClient {
    async fn describe(&self, input: DescribeInput) -> Result<DescribeOutput> {
        self.record(Call::Describe(input)).await;
        let response = answer(&lock(&self.responses).describe);
        response
    }

    async fn create(&self, input: CreateInput) -> Result<CacheSubnetGroupRecord> {
        self.record(Call::Create(input)).await;
        let response = answer(&lock(&self.responses).create);
        response
    }

    async fn modify(&self, input: ModifyInput) -> Result<CacheSubnetGroupRecord> {
        self.record(Call::Modify(input)).await;
        let response = answer(&lock(&self.responses).modify);
        response
    }

    async fn delete(&self, input: DeleteInput) -> Result<()> {
        self.record(Call::Delete(input)).await;
        let response = answer(&lock(&self.responses).delete);
        response
    }
}
