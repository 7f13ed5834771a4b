//! Device-accelerated backend
//!
//! Kernels run on the blocking pool with data-parallel lanes; each launch
//! returns a join handle that resolves when every write is visible. Buffers
//! move into a launch and come back with its completion, so outstanding work
//! always drains before the memory can be reused or released.

pub mod fold;
pub mod memory;
pub mod msm;

pub use memory::DeviceVector;

use ipa_core::{IpaError, IpaResult};
use tokio::task::JoinHandle;

/// Await a kernel completion handle, forwarding launch-infrastructure
/// failures into the error taxonomy
pub(crate) async fn complete<T>(handle: JoinHandle<T>) -> IpaResult<T> {
    handle.await.map_err(|e| {
        if e.is_panic() {
            IpaError::Collaborator(format!("device kernel failed: {e}"))
        } else {
            IpaError::ResourceExhausted(format!("device kernel cancelled: {e}"))
        }
    })
}
