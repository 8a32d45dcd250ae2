use eframe::egui;
use log::{error, info};

mod config_store;
mod ui;

use config_store::ConfigStore;
use ui::WalletApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=debug
    env_logger::init();
    info!("Starting Anon. CBDC wallet");

    // Optional first argument overrides the configured wallet address
    let address_override = std::env::args().nth(1);

    let config = match ConfigStore::default_location().and_then(|store| store.load_or_init()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load wallet config: {:#}", e);
            return Err(eframe::Error::AppCreation(
                format!("Failed to load wallet config: {:#}", e).into(),
            ));
        }
    };
    let config = match address_override {
        Some(public_address) => shared::WalletConfig { public_address, ..config },
        None => config,
    };

    // Phone-shaped window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Anon. CBDC")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Anon. CBDC",
        options,
        Box::new(move |cc| match WalletApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized wallet app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
