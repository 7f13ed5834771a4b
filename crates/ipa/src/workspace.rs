//! Per-proof mutable state

use crate::descriptor::ProofDescriptor;
use crate::device::DeviceVector;
use crate::driver::Backend;
use ipa_core::{GroupElement, IpaError, IpaResult, Scalar};

/// Position of a workspace in the round protocol
///
/// Transitions are `Ready → Committed` (`commit_to_fold`) and
/// `Committed → Ready | Final` (`fold`); anything else is a contract
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundState {
    /// Awaiting `commit_to_fold` for the current round
    Ready,
    /// Round messages emitted; awaiting `fold`
    Committed,
    /// Vectors reduced to length 1
    Final,
}

/// The current `a`, `b`, `g` vectors, in the memory space of the backend
/// that created them
#[derive(Debug)]
pub(crate) enum WorkspaceVectors {
    Host {
        a: Vec<Scalar>,
        b: Vec<Scalar>,
        g: Vec<GroupElement>,
    },
    Device {
        a: DeviceVector<Scalar>,
        b: DeviceVector<Scalar>,
        g: DeviceVector<GroupElement>,
    },
}

/// Mutable proving state owned by one proof session
///
/// Created by [`IpaDriver::make_workspace`](crate::IpaDriver::make_workspace)
/// and mutated only through the driver's operations. At most one operation
/// may be in flight per workspace.
#[derive(Debug)]
pub struct Workspace<'a> {
    pub(crate) descriptor: &'a ProofDescriptor,
    pub(crate) vectors: WorkspaceVectors,
    pub(crate) state: RoundState,
    pub(crate) round_index: usize,
}

impl<'a> Workspace<'a> {
    pub(crate) fn new(
        descriptor: &'a ProofDescriptor,
        vectors: WorkspaceVectors,
    ) -> Self {
        Self {
            descriptor,
            vectors,
            state: RoundState::Ready,
            round_index: 0,
        }
    }

    /// The descriptor backing this workspace
    pub fn descriptor(&self) -> &'a ProofDescriptor {
        self.descriptor
    }

    /// Number of completed folds
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Current length of the `a`, `b`, and `g` vectors
    pub fn length(&self) -> usize {
        match &self.vectors {
            WorkspaceVectors::Host { g, .. } => g.len(),
            WorkspaceVectors::Device { g, .. } => g.len(),
        }
    }

    /// The memory space this workspace resides in
    pub fn backend(&self) -> Backend {
        match &self.vectors {
            WorkspaceVectors::Host { .. } => Backend::Host,
            WorkspaceVectors::Device { .. } => Backend::Device,
        }
    }

    /// The folded opening `a'`, available once the vectors have length 1
    pub fn final_scalar(&self) -> IpaResult<Scalar> {
        if self.length() != 1 {
            return Err(IpaError::ProtocolMisuse(format!(
                "final scalar requested at vector length {}",
                self.length()
            )));
        }
        match &self.vectors {
            WorkspaceVectors::Host { a, .. } => Ok(a[0]),
            WorkspaceVectors::Device { a, .. } => Ok(a.to_host()[0]),
        }
    }

    pub(crate) fn expect_state(&self, state: RoundState, operation: &str) -> IpaResult<()> {
        if self.state != state {
            return Err(IpaError::ProtocolMisuse(format!(
                "{operation} is not permitted in the {:?} state",
                self.state
            )));
        }
        Ok(())
    }

    /// Move the device vectors out for a kernel launch; the caller restores
    /// them on completion
    pub(crate) fn take_device_vectors(
        &mut self,
    ) -> IpaResult<(
        DeviceVector<Scalar>,
        DeviceVector<Scalar>,
        DeviceVector<GroupElement>,
    )> {
        let empty = WorkspaceVectors::Device {
            a: DeviceVector::default(),
            b: DeviceVector::default(),
            g: DeviceVector::default(),
        };
        match std::mem::replace(&mut self.vectors, empty) {
            WorkspaceVectors::Device { a, b, g } => Ok((a, b, g)),
            host => {
                self.vectors = host;
                Err(IpaError::WrongMemorySpace)
            }
        }
    }

    pub(crate) fn restore_device_vectors(
        &mut self,
        a: DeviceVector<Scalar>,
        b: DeviceVector<Scalar>,
        g: DeviceVector<GroupElement>,
    ) {
        self.vectors = WorkspaceVectors::Device { a, b, g };
    }
}
