//! # Userdesk - Binary Entry Point
//!
//! Native desktop client for managing a remote user directory.

use userdesk::app::App;
use userdesk::services::session::SessionStore;
use userdesk::ui;
use userdesk::ui::widgets::notifications::NotificationManager;

/// eframe application shell: ticks the orchestrator and renders every frame.
struct UserdeskApp {
    app: App,
    notifications: NotificationManager,
}

impl UserdeskApp {
    fn new(app: App) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for UserdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process async events (non-blocking)
        self.app.on_tick();

        ui::render(ctx, &mut self.app, &mut self.notifications);

        // Keep polling the event channel while idle so async results are
        // applied promptly even without input
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("userdesk=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result {
    init_logging();

    let session = SessionStore::open_default();
    let app = App::new(session);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Userdesk"),
        ..Default::default()
    };

    tracing::info!("Starting Userdesk");
    eframe::run_native(
        "Userdesk",
        options,
        Box::new(|_cc| Ok(Box::new(UserdeskApp::new(app)))),
    )
}
