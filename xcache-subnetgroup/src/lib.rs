//! xcache-subnetgroup: adapter converging remote cache subnet groups toward
//! their declared spec.
//!
//! - `reconciler`: Observe/Create/Update/Delete adapter
//! - `compare`: drift detection
//! - `clients`: remote capability and test doubles
//! - `driver`: one reconciliation pass

pub mod clients;
pub mod compare;
pub mod condition;
pub mod config;
pub mod connector;
pub mod driver;
pub mod error;
pub mod reconciler;
pub mod resource;

pub use clients::{ClientError, SubnetGroupClient};
pub use condition::{Condition, ConditionedStatus, Lifecycle};
pub use error::{AdapterError, ErrorKind};
pub use reconciler::{ExternalClient, ExternalObservation, SubnetGroupExternal};
pub use resource::{CacheSubnetGroup, CacheSubnetGroupParameters};
