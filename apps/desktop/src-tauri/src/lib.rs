//! # Storekeeper Desktop Library
//!
//! Core library for the Storekeeper desktop application.
//!
//! ## Module Organization
//! ```text
//! storekeeper_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── manager.rs      ◄─── StoreManager: database handle + grid selection
//! ├── commands.rs     ◄─── Tauri command wrappers (feature "tauri")
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The `StoreManager` and the error type always build, so the controller is
//! fully testable headless. Only the window plumbing (`run`, `commands`)
//! needs the `tauri` feature.
//!
//! ## Interface Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storekeeper                                              [_][□][X]    │
//! │                                                                         │
//! │   Product Name  [____________]                                         │
//! │   Price         [____________]                                         │
//! │   Stock         [____________]                                         │
//! │                                                                         │
//! │   [Add Product]  [View Products]  [Delete Product]  [Update Product]   │
//! │                                                                         │
//! │   ┌──────┬──────────────────┬──────────┬─────────┐                     │
//! │   │  ID  │  Name            │  Price   │  Stock  │                     │
//! │   ├──────┼──────────────────┼──────────┼─────────┤                     │
//! │   │  1   │  Widget          │  9.99    │  10     │ ◄── click: inputs  │
//! │   └──────┴──────────────────┴──────────┴─────────┘     get populated   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod manager;

#[cfg(feature = "tauri")]
pub mod commands;

pub use error::{ApiError, ErrorCode};
pub use manager::StoreManager;

#[cfg(feature = "tauri")]
mod app {
    use std::path::PathBuf;

    use directories::ProjectDirs;
    use tauri::Manager;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use crate::commands;
    use crate::manager::StoreManager;
    use storekeeper_db::{Database, DbConfig};

    /// Runs the Tauri application.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  1. Initialize logging (tracing-subscriber, RUST_LOG overridable)   │
    /// │  2. Resolve the platform data directory for storekeeper.db         │
    /// │  3. Open the database and apply the migration                       │
    /// │  4. Manage the StoreManager as Tauri state                          │
    /// │  5. Register commands and launch the window                         │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The storage handle lives for the whole process: opened once here,
    /// torn down at exit, no explicit close.
    pub fn run() {
        init_tracing();

        info!("Starting Storekeeper Desktop Application");

        tauri::Builder::default()
            // Setup hook runs before the app starts
            .setup(|app| {
                let db_path = database_path()?;
                info!(?db_path, "Database path determined");

                // Initialize database (blocking in setup, async in runtime)
                let db = tauri::async_runtime::block_on(async {
                    let config = DbConfig::new(db_path);
                    Database::new(config).await
                })?;

                info!("Database connected and migration applied");

                app.manage(StoreManager::new(db));
                Ok(())
            })
            // Register all commands
            .invoke_handler(tauri::generate_handler![
                commands::add_product,
                commands::list_products,
                commands::update_product,
                commands::delete_product,
                commands::select_product,
                commands::clear_selection,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }

    /// Initializes the tracing subscriber for structured logging.
    ///
    /// ## Log Levels
    /// - `RUST_LOG=debug` - Show debug messages
    /// - Default: INFO level, sqlx quieted
    fn init_tracing() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,storekeeper=debug,sqlx=warn"));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    /// Determines the database file path based on the platform.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.storekeeper.app/storekeeper.db`
    /// - **Windows**: `%APPDATA%\storekeeper\app\storekeeper.db`
    /// - **Linux**: `~/.local/share/storekeeper/storekeeper.db`
    fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let proj_dirs = ProjectDirs::from("com", "storekeeper", "app")
            .ok_or("Could not determine app data directory")?;

        let data_dir = proj_dirs.data_dir();

        // Create directory if it doesn't exist
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("storekeeper.db"))
    }
}

#[cfg(feature = "tauri")]
pub use app::run;
