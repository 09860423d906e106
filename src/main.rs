//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Countryscope library and
//! the Zellij plugin system. It owns every host call: permissions, event
//! subscriptions, the web request and hiding the plugin pane.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize logging, create `AppState`
//! 2. **Permissions**: request `WebAccess`, subscribe to events
//! 3. **Update**: translate host events, delegate to `handle_event`, execute
//!    the returned actions
//! 4. **Render**: call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → bound event for the current input mode (see `app::keys`)
//! - `PermissionRequestResult` → `PermissionsGranted` / `PermissionsDenied`
//! - `WebRequestResult` with our context → `CountriesFetched`
//!
//! The host API only exists on `wasm32`; native builds get an empty `main`
//! so the library tests can build the whole package.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use countryscope::repository::CountryRequest;
    use countryscope::{handle_event, map_key, Action, AppState, Config, Event as AppEvent};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: countryscope::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds application state, requests web
        /// access and subscribes to the events the plugin reacts to.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            countryscope::observability::init_tracing(&config);

            let _span = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(config = ?config, "parsed configuration");

            self.app = countryscope::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::info!("plugin loaded, waiting for permissions");
        }

        /// Returns `true` if the UI should re-render.
        fn update(&mut self, event: Event) -> bool {
            let Some(app_event) = self.translate(event) else {
                return false;
            };

            match handle_event(&mut self.app, &app_event) {
                Ok((should_render, actions)) => {
                    for action in actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            countryscope::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Translates a host event into a library event.
        fn translate(&self, event: Event) -> Option<AppEvent> {
            match event {
                Event::Key(key) => {
                    tracing::trace!(bare_key = ?key.bare_key, "key event");
                    map_key(&key, self.app.input_mode)
                }
                Event::PermissionRequestResult(PermissionStatus::Granted) => Some(AppEvent::PermissionsGranted),
                Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("web access denied");
                    Some(AppEvent::PermissionsDenied)
                }
                Event::WebRequestResult(status, _headers, body, context) => {
                    if !CountryRequest::is_response_context(&context) {
                        tracing::debug!(?context, "ignoring unrelated web response");
                        return None;
                    }
                    Some(AppEvent::CountriesFetched { status, body })
                }
                _ => None,
            }
        }

        /// Performs a side effect requested by the library.
        fn execute_action(action: Action) {
            tracing::debug!(action = ?action, "executing action");

            match action {
                Action::CloseFocus => hide_self(),
                Action::FetchCountries(request) => {
                    web_request(
                        request.url,
                        HttpVerb::Get,
                        BTreeMap::new(),
                        vec![],
                        request.context,
                    );
                }
            }
        }
    }
}
