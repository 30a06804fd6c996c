//! fastboot CLI adapter.

use async_trait::async_trait;

use fd_core::ports::{BackendError, FastbootPort};
use fd_core::Device;

use crate::parse::parse_fastboot_devices;
use crate::process::run_tool;
use crate::tooling::ToolingPaths;

pub struct FastbootCli {
    tooling: ToolingPaths,
}

impl FastbootCli {
    pub fn new(tooling: ToolingPaths) -> Self {
        Self { tooling }
    }

    async fn run(&self, args: &[&str]) -> Result<String, BackendError> {
        let binary = self.tooling.resolve("fastboot")?;
        run_tool(&binary, "fastboot", args).await
    }
}

#[async_trait]
impl FastbootPort for FastbootCli {
    async fn flash_partition(
        &self,
        partition: &str,
        image_path: &str,
    ) -> Result<(), BackendError> {
        self.run(&["flash", partition, image_path]).await?;
        Ok(())
    }

    async fn wipe_data(&self) -> Result<(), BackendError> {
        self.run(&["-w"]).await?;
        Ok(())
    }

    async fn devices(&self) -> Result<Vec<Device>, BackendError> {
        let output = self.run(&["devices"]).await?;
        Ok(parse_fastboot_devices(&output))
    }
}
