use crate::{
    core::{config::RouterConfig, constants::PRODUCT_NAME},
    host::{Alerts, HostMap, Navigator},
    input::events::{EventHandled, InputEvent},
    router::{Router, RoutingError, ViewerUrl},
};

/// What a single trigger ended in
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    /// A viewer URL was handed to the navigator
    Opened(ViewerUrl),
    /// Routing refused and the user was warned
    Warned(RoutingError),
    /// Routing refused silently (diagnostic only)
    Suppressed(RoutingError),
}

/// Page-lifetime session: the router, its config, and the host's side effects.
///
/// Everything runs on the page's single thread from inside event handlers,
/// so state is plain fields mutated through `&mut self`.
pub struct Session<H, N, A> {
    router: Router,
    host: H,
    navigator: N,
    alerts: A,
    pointer_over_map: bool,
}

impl<H, N, A> Session<H, N, A>
where
    H: HostMap,
    N: Navigator,
    A: Alerts,
{
    pub fn new(config: RouterConfig, host: H, navigator: N, alerts: A) -> Self {
        log::debug!("Initialising");
        Self {
            router: Router::new(config),
            host,
            navigator,
            alerts,
            pointer_over_map: false,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        self.router.config()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    pub fn hotkey_enabled(&self) -> bool {
        self.router.config().hotkey_enabled
    }

    pub fn set_hotkey_enabled(&mut self, enabled: bool) {
        self.router.config_mut().hotkey_enabled = enabled;
        log::debug!("hotkey control {}", enabled);
    }

    pub fn pointer_over_map(&self) -> bool {
        self.pointer_over_map
    }

    /// Handles a page event. `Handled` means the event's default action
    /// should be suppressed.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventHandled {
        match event {
            InputEvent::ButtonClick => {
                self.trigger();
                EventHandled::Handled
            }
            InputEvent::KeyPress { key, .. } => {
                let is_hotkey = key
                    .as_char()
                    .is_some_and(|c| self.router.config().matches_hotkey(c));
                if self.hotkey_enabled() && is_hotkey && self.pointer_over_map {
                    self.trigger();
                    EventHandled::Handled
                } else {
                    EventHandled::NotHandled
                }
            }
            InputEvent::PointerEnterMap => {
                self.pointer_over_map = true;
                EventHandled::NotHandled
            }
            InputEvent::PointerLeaveMap => {
                self.pointer_over_map = false;
                EventHandled::NotHandled
            }
            InputEvent::HotkeyToggled(enabled) => {
                self.set_hotkey_enabled(*enabled);
                EventHandled::Handled
            }
        }
    }

    /// Routes the current viewport and performs the resulting side effect
    pub fn trigger(&mut self) -> TriggerOutcome {
        match self.router.route(&self.host) {
            Ok(url) => {
                log::info!("opening {}", url);
                self.navigator.open(&url);
                TriggerOutcome::Opened(url)
            }
            Err(err) if err.is_user_visible() => {
                log::debug!("routing refused: {}", err);
                self.alerts.warning(PRODUCT_NAME, &err.to_string());
                TriggerOutcome::Warned(err)
            }
            Err(err) => {
                log::debug!("routing refused: {}", err);
                TriggerOutcome::Suppressed(err)
            }
        }
    }
}
