//! fastboot port - abstracts the fastboot side of the device command backend.

use async_trait::async_trait;

use super::BackendError;
use crate::device::Device;

#[async_trait]
pub trait FastbootPort: Send + Sync {
    /// Flash an image file to the named partition. Parameters are validated
    /// by the caller; the adapter passes them through.
    async fn flash_partition(&self, partition: &str, image_path: &str)
        -> Result<(), BackendError>;

    /// Factory wipe (`fastboot -w`).
    async fn wipe_data(&self) -> Result<(), BackendError>;

    /// Devices currently in fastboot mode.
    async fn devices(&self) -> Result<Vec<Device>, BackendError>;
}
