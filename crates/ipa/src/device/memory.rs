//! Device-resident buffers
//!
//! The accelerator owns its buffers outright; host data crosses the boundary
//! only through the explicit copy operations here. Kernels take buffers by
//! value and hand them back on completion, so a buffer is never visible to
//! the host while a kernel may still be writing it.

/// A vector resident in the accelerator's address space
#[derive(Debug, Clone)]
pub struct DeviceVector<T> {
    data: Vec<T>,
}

impl<T> Default for DeviceVector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Clone> DeviceVector<T> {
    /// Copy a host slice into a fresh device buffer
    pub fn copy_from_host(host: &[T]) -> Self {
        Self {
            data: host.to_vec(),
        }
    }

    /// Copy the buffer back into host memory
    pub fn to_host(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no live elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logically shrink the buffer to `len` elements
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
