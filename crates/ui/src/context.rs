use services::AppServices;

/// Services shared with every view through the dioxus context.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone()
    }
}

/// Build an `AppContext` from assembled app services; the binary provides it
/// to the desktop launcher.
#[must_use]
pub fn build_app_context(services: AppServices) -> AppContext {
    AppContext::new(services)
}
