//! Live settings changes.

use hover_common::{Event, WindowId};
use hover_config::schema::HoverConfig;
use hover_config::settings::{apply_update, diff, reset_settings, settings_snapshot, SettingChange};
use hover_platform::{resolve_theme, ResolvedTheme, ShortcutTable};
use hover_webview::{ipc::outbound, LocalPage};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{AppRequest, SessionManager};

impl SessionManager {
    /// Replace the live settings and re-apply whatever changed.
    ///
    /// Used both for `update-setting` messages and for config file reloads.
    pub fn apply_settings(&mut self, new: HoverConfig) {
        let changes = diff(&self.config, &new);
        self.config = new;

        for change in &changes {
            match change {
                SettingChange::AlwaysOnTop => self.apply_on_top_all(),
                SettingChange::Shortcuts => {
                    let table = ShortcutTable::from_config(&self.config.shortcuts);
                    let global = self.config.shortcuts.global;
                    let local = self.shortcuts.apply_bindings(table, global);
                    self.broadcast(outbound::SET_LOCAL_SHORTCUTS, &local);
                    self.publish(Event::ShortcutsChanged { global });
                }
                SettingChange::Theme => self.broadcast_theme(),
                SettingChange::AutoStart => self.sync_launch_at_login(),
                SettingChange::CanvasResize | SettingChange::Onboarding => {}
            }
        }
        if !changes.is_empty() {
            info!(?changes, "settings applied");
        }
        self.broadcast(
            outbound::SETTINGS_UPDATED,
            &settings_snapshot(&self.config),
        );
    }

    /// Handle one `update-setting` message and persist the result.
    pub(super) fn update_setting(&mut self, payload: &Value) {
        let Some(key) = payload.get("key").and_then(Value::as_str) else {
            warn!(%payload, "update-setting without a key");
            return;
        };
        let value = payload.get("value").cloned().unwrap_or(Value::Null);
        let mut next = self.config.clone();
        match apply_update(&mut next, key, &value) {
            Ok(change) => {
                debug!(key, ?change, "setting updated");
                self.apply_settings(next);
                self.request(AppRequest::SaveConfig);
            }
            Err(e) => warn!(key, "rejected setting: {e}"),
        }
    }

    /// Put every page setting back to its default and persist the result.
    ///
    /// Window geometry, animation, content and logging sections are kept.
    pub fn reset_settings(&mut self) {
        info!("resetting settings to defaults");
        let next = reset_settings(&self.config);
        self.apply_settings(next);
        self.request(AppRequest::SaveConfig);
    }

    /// Make the OS login entry match `general.auto_start`.
    pub(super) fn sync_launch_at_login(&mut self) {
        let enabled = self.config.general.auto_start;
        if let Err(e) = self.launch_at_login.set_enabled(enabled) {
            warn!(enabled, "failed to update launch at login: {e}");
        }
    }

    /// Theme the pages should render with right now.
    pub fn resolved_theme(&self) -> ResolvedTheme {
        let os_dark = self.registry.iter().find_map(|e| e.native.prefers_dark());
        resolve_theme(self.config.general.theme, os_dark)
    }

    /// Send `theme-updated` everywhere, e.g. after the OS appearance changed.
    pub fn broadcast_theme(&self) {
        let theme = Value::from(self.resolved_theme().as_str());
        self.broadcast(outbound::THEME_UPDATED, &theme);
    }

    /// The walkthrough was dismissed in `window`.
    pub(super) fn complete_onboarding(&mut self, window: WindowId) {
        if !self.config.general.onboarding_shown {
            self.config.general.onboarding_shown = true;
            self.request(AppRequest::SaveConfig);
        }
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        if let Err(e) = entry.native.show_page(LocalPage::Chrome) {
            warn!(%window, "failed to restore chrome: {e}");
        }
        let rect = entry.native.rect();

        if let Some(view) = self.views.unpark(window) {
            if let Err(conflict) = self.views.attach(window, view, rect) {
                warn!("{conflict}");
            }
        } else if !self.views.has_attached(window) {
            self.create_view(window);
        }
        self.focus_view(window);
    }
}
