//! The round-based proving and verification driver
//!
//! One driver serves any number of workspaces; the backend selected at
//! construction decides where a workspace's vectors live and where its
//! kernels run. A workspace may only ever be handed back to a driver of the
//! backend that created it.

use crate::descriptor::ProofDescriptor;
use crate::device::{self, fold as device_fold, msm, DeviceVector};
use crate::fold::{check_fold_shape, fold_generators, fold_scalars};
use crate::verifier::expected_commitment;
use crate::workspace::{RoundState, Workspace, WorkspaceVectors};
use ipa_core::{
    inner_product, CompressedRistretto, GroupElement, IpaError, IpaResult, Scalar,
};
use tracing::debug;

/// Backend selector: where proof vectors live and kernels run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Synchronous folding and multiexponentiation in host memory
    #[default]
    Host,
    /// Data-parallel kernels over device-resident vectors
    Device,
}

/// Driver for the inner-product round protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct IpaDriver {
    backend: Backend,
}

impl IpaDriver {
    /// Create a driver for the given backend
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// The backend this driver dispatches to
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Allocate the mutable state for one proof
    ///
    /// `a_vector` must match the descriptor's vector length. On the device
    /// backend the returned future completes only once `a`, `b`, and `g`
    /// are all resident on the device.
    pub async fn make_workspace<'a>(
        &self,
        descriptor: &'a ProofDescriptor,
        a_vector: &[Scalar],
    ) -> IpaResult<Workspace<'a>> {
        if a_vector.len() != descriptor.length() {
            return Err(IpaError::LengthMismatch {
                expected: descriptor.length(),
                actual: a_vector.len(),
            });
        }

        let vectors = match self.backend {
            Backend::Host => WorkspaceVectors::Host {
                a: a_vector.to_vec(),
                b: descriptor.b_vector().to_vec(),
                g: descriptor.g_vector().to_vec(),
            },
            Backend::Device => {
                let a = DeviceVector::copy_from_host(a_vector);
                let b = DeviceVector::copy_from_host(descriptor.b_vector());
                let g = DeviceVector::copy_from_host(descriptor.g_vector());
                debug!(n = descriptor.length(), "proof vectors copied to device");
                WorkspaceVectors::Device { a, b, g }
            }
        };
        Ok(Workspace::new(descriptor, vectors))
    }

    /// Compute this round's messages
    ///
    /// ```text
    /// L = <a_low, g_high> + <a_low, b_high>·q
    /// R = <a_high, g_low> + <a_high, b_low>·q
    /// ```
    ///
    /// The future resolves only after both values are computed and
    /// compressed.
    pub async fn commit_to_fold(
        &self,
        workspace: &mut Workspace<'_>,
    ) -> IpaResult<(CompressedRistretto, CompressedRistretto)> {
        workspace.expect_state(RoundState::Ready, "commit_to_fold")?;
        let mid = workspace.length() / 2;
        if mid == 0 {
            return Err(IpaError::DegenerateRound);
        }
        let q = *workspace.descriptor.q_value();

        let (l_value, r_value) = match self.backend {
            Backend::Host => {
                let WorkspaceVectors::Host { a, b, g } = &workspace.vectors else {
                    return Err(IpaError::WrongMemorySpace);
                };
                let l_value = commit_partial(&g[mid..], &q, &a[..mid], &b[mid..])?;
                let r_value = commit_partial(&g[..mid], &q, &a[mid..], &b[..mid])?;
                (l_value, r_value)
            }
            Backend::Device => {
                let (a, b, g) = workspace.take_device_vectors()?;
                let task = tokio::task::spawn_blocking(move || {
                    let (l_value, r_value) = rayon::join(
                        || {
                            device_commit_partial(
                                &g.as_slice()[mid..],
                                &q,
                                &a.as_slice()[..mid],
                                &b.as_slice()[mid..],
                            )
                        },
                        || {
                            device_commit_partial(
                                &g.as_slice()[..mid],
                                &q,
                                &a.as_slice()[mid..],
                                &b.as_slice()[..mid],
                            )
                        },
                    );
                    (a, b, g, l_value, r_value)
                });
                let (a, b, g, l_value, r_value) = device::complete(task).await?;
                workspace.restore_device_vectors(a, b, g);
                (l_value?, r_value?)
            }
        };

        workspace.state = RoundState::Committed;
        Ok((l_value, r_value))
    }

    /// Fold the workspace's vectors to half length under the challenge `x`
    ///
    /// When the fold reduces to length 1, only `a` is folded; `b` and `g`
    /// are truncated without folding since no further round consults them.
    /// The future resolves after every issued fold completes.
    pub async fn fold(&self, workspace: &mut Workspace<'_>, x: &Scalar) -> IpaResult<()> {
        workspace.expect_state(RoundState::Committed, "fold")?;
        let n = workspace.length();
        let mid = n / 2;
        check_fold_shape(n, mid)?;
        if self.backend != workspace.backend() {
            return Err(IpaError::WrongMemorySpace);
        }

        workspace.round_index += 1;
        let x_inv = x.invert();

        match self.backend {
            Backend::Host => {
                let WorkspaceVectors::Host { a, b, g } = &mut workspace.vectors else {
                    return Err(IpaError::WrongMemorySpace);
                };
                fold_scalars(a, x, &x_inv, mid)?;
                if mid > 1 {
                    fold_scalars(b, &x_inv, x, mid)?;
                    fold_generators(g, &x_inv, x, mid)?;
                }
                a.truncate(mid);
                b.truncate(mid);
                g.truncate(mid);
            }
            Backend::Device => {
                let (a, mut b, mut g) = workspace.take_device_vectors()?;
                let a_task = device_fold::launch_scalar_fold(a, *x, x_inv, mid)?;
                if mid > 1 {
                    let b_task = device_fold::launch_scalar_fold(b, x_inv, *x, mid)?;
                    let g_task = device_fold::launch_generator_fold(g, x_inv, *x, mid)?;
                    debug!(round = workspace.round_index, mid, "fold kernels launched");
                    let (a_res, b_res, g_res) = tokio::join!(
                        device::complete(a_task),
                        device::complete(b_task),
                        device::complete(g_task),
                    );
                    let mut a = a_res?;
                    b = b_res?;
                    g = g_res?;
                    a.truncate(mid);
                    b.truncate(mid);
                    g.truncate(mid);
                    workspace.restore_device_vectors(a, b, g);
                } else {
                    let mut a = device::complete(a_task).await?;
                    a.truncate(mid);
                    b.truncate(mid);
                    g.truncate(mid);
                    workspace.restore_device_vectors(a, b, g);
                }
            }
        }

        workspace.state = if mid == 1 {
            RoundState::Final
        } else {
            RoundState::Ready
        };
        Ok(())
    }

    /// Reconstruct the commitment implied by a proof's round messages and
    /// final opening `a_value`
    pub async fn compute_expected_commitment(
        &self,
        descriptor: &ProofDescriptor,
        l_vector: &[CompressedRistretto],
        r_vector: &[CompressedRistretto],
        x_vector: &[Scalar],
        a_value: &Scalar,
    ) -> IpaResult<CompressedRistretto> {
        match self.backend {
            Backend::Host => expected_commitment(descriptor, l_vector, r_vector, x_vector, a_value),
            // TODO: evaluate the verification multiexponentiation on the device
            Backend::Device => {
                expected_commitment(descriptor, l_vector, r_vector, x_vector, a_value)
            }
        }
    }
}

/// One commitment half: `<u, g_half> + <u, v>·q`, compressed
fn commit_partial(
    g_half: &[GroupElement],
    q: &GroupElement,
    u: &[Scalar],
    v: &[Scalar],
) -> IpaResult<CompressedRistretto> {
    let product = inner_product(u, v)?;
    let commit = GroupElement::multiscalar_mul(u.iter().cloned(), g_half.iter().cloned());
    Ok((commit + *q * product).compress())
}

/// Device flavor of [`commit_partial`]: the multiexponentiation and the
/// inner product run concurrently
fn device_commit_partial(
    g_half: &[GroupElement],
    q: &GroupElement,
    u: &[Scalar],
    v: &[Scalar],
) -> IpaResult<CompressedRistretto> {
    let (partial, product) = rayon::join(|| msm::multiexp(g_half, u), || inner_product(u, v));
    Ok((partial + *q * product?).compress())
}
