//! FlashDeck application shell.
//!
//! Wires the Tauri builder: logging plugins, runtime construction in the
//! setup phase, and the command surface.

use std::sync::Arc;

use tauri::Manager;

use fd_tauri::commands;

pub fn run() {
    if let Err(e) = fd_tauri::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config = match fd_infra::config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration, using defaults: {}", e);
            fd_core::AppConfig::default()
        }
    };

    tauri::Builder::default()
        .plugin(fd_tauri::bootstrap::logging::get_builder().build())
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let runtime = fd_tauri::bootstrap::build_runtime(&config, app.handle());
            app.manage(Arc::new(runtime));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::flasher::select_image_file,
            commands::flasher::flash_partition,
            commands::flasher::wipe_data,
            commands::utilities::reboot_device,
            commands::shell::run_shell_command,
            commands::shell::shell_history,
            commands::shell::shell_recall_previous,
            commands::shell::shell_recall_next,
            commands::devices::get_adb_devices,
            commands::devices::get_fastboot_devices,
            commands::devices::get_device_info,
            commands::apps::install_package,
            commands::apps::uninstall_package,
            commands::operations::operation_state,
            commands::operations::operation_states,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
