use fltk::app;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use nuvium::app::domain::window::SETTINGS_ROUTE;
use nuvium::app::domain::{Message, PersistedSettings, ShellConfiguration, WindowContext};
use nuvium::app::infrastructure::config::ShellConfig;
use nuvium::app::infrastructure::event_bus::{EventBus, LocalEventBus};
use nuvium::app::infrastructure::logging::init_logging;
use nuvium::app::infrastructure::store::{FileStoreLoader, load_settings_or};
use nuvium::app::services::i18n::texts_for_locale;
use nuvium::app::state::AppState;
use nuvium::app::ShellSettings;
use nuvium::ui::file_dialogs::NativeFilePicker;
use nuvium::ui::main_window::build_main_window;
use nuvium::ui::settings_window::{SettingsWindowDeps, build_settings_window};
use nuvium::ui::window_host::FltkWindowHost;

fn main() {
    init_logging();

    let config = ShellConfig::from_env();
    tracing::info!(
        store = %config.store_path.display(),
        locale = config.default_locale.code(),
        version = env!("CARGO_PKG_VERSION"),
        "starting nuvium"
    );

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let defaults = PersistedSettings::with_default_locale(config.default_locale);
    let loader = FileStoreLoader::new(&config.store_path);
    let settings = Rc::new(RefCell::new(ShellSettings::from(load_settings_or(&loader, &defaults))));
    let bus: Arc<dyn EventBus> = Arc::new(LocalEventBus::new());

    let host = FltkWindowHost::new();
    let deps = SettingsWindowDeps {
        loader,
        bus: bus.clone(),
        shell: settings.clone(),
        defaults,
    };
    host.register_route(SETTINGS_ROUTE, move |spec, host| build_settings_window(spec, host, &deps));

    let window = WindowContext::main();
    let texts = texts_for_locale(settings.borrow().language);
    let shell = ShellConfiguration::for_window(&window, &texts.nav_labels());
    let widgets = build_main_window(&shell, &texts, &sender);

    let mut state = AppState::new(
        window,
        widgets,
        sender,
        settings,
        host,
        bus,
        Box::new(NativeFilePicker),
    );
    state.mount();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle_message(msg) {
                break;
            }
        }
    }

    state.unmount();
    tracing::info!("exiting");
}
