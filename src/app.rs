use std::sync::Arc;

use dailygoals_core::{gate, AuthPhase, GateOutcome, GoalTracker, RouteGroup, ThemeMode};
use dailygoals_ui::Spinner;
use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::OfflineNotice;
use crate::context::{
    get_backend_config, get_data_dir, use_auth_phase, OnlineStatus, SharedTracker, TrackerReady,
};
use crate::pages::{
    GoalDetail, GoalEdit, GoalNew, Home, Login, NotFound, Register, Settings, Welcome,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every route sits under the [`AuthGate`] layout, which resolves the
/// session phase before rendering and redirects users out of screens
/// their phase doesn't allow.
///
/// - `/` - Welcome screen with Login / Sign Up buttons
/// - `/login`, `/register` - Auth forms (public)
/// - `/home` - Goal list with the tab bar (protected)
/// - `/settings` - Preferences and sign-out (protected)
/// - `/goals/new`, `/goals/:id`, `/goals/:id/edit` - Goal screens (protected)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(AuthGate)]
    #[route("/")]
    Welcome {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/home")]
    Home {},
    #[route("/settings")]
    Settings {},
    #[route("/goals/new")]
    GoalNew {},
    #[route("/goals/:id")]
    GoalDetail { id: i64 },
    #[route("/goals/:id/edit")]
    GoalEdit { id: i64 },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Which gate rules apply to this screen
    pub fn group(&self) -> RouteGroup {
        match self {
            Route::Welcome {} | Route::Login {} | Route::Register {} => RouteGroup::Public,
            Route::Home {}
            | Route::Settings {}
            | Route::GoalNew {}
            | Route::GoalDetail { .. }
            | Route::GoalEdit { .. } => RouteGroup::Protected,
            Route::NotFound { .. } => RouteGroup::Neutral,
        }
    }
}

/// Router layout enforcing the session gate on every screen.
///
/// Re-renders whenever the phase signal moves, so a login flips the
/// user from `/login` to `/home` and a logout does the reverse without
/// any navigation calls in the submit handlers.
#[component]
pub fn AuthGate() -> Element {
    let phase = use_auth_phase();
    let route: Route = use_route();
    let navigator = use_navigator();

    let body = match gate(&phase.read(), route.group()) {
        GateOutcome::Loading => rsx! {
            div { class: "gate-loading",
                Spinner {}
            }
        },
        GateOutcome::Render => rsx! {
            Outlet::<Route> {}
        },
        GateOutcome::RedirectToHome => {
            navigator.replace(Route::Home {});
            rsx! {}
        }
        GateOutcome::RedirectToLogin => {
            navigator.replace(Route::Login {});
            rsx! {}
        }
    };
    body
}

/// Root application component.
///
/// Provides global styles, tracker context, and routing. On mount it
/// constructs the [`GoalTracker`], restores any stored session, and
/// keeps the phase/online signals mirrored from the tracker's watch
/// channels for as long as the app lives.
#[component]
pub fn App() -> Element {
    // Initialize shared tracker state
    let tracker: Signal<SharedTracker> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut tracker_ready: Signal<bool> = use_signal(|| false);
    let mut auth_phase: Signal<AuthPhase> = use_signal(AuthPhase::default);
    let mut theme: Signal<ThemeMode> = use_signal(ThemeMode::default);
    let mut online: Signal<bool> = use_signal(|| true);

    // Provide tracker context to all child components
    use_context_provider(|| tracker);
    use_context_provider(|| TrackerReady(tracker_ready));
    use_context_provider(|| auth_phase);
    use_context_provider(|| theme);
    use_context_provider(|| OnlineStatus(online));

    // Initialize tracker on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let config = get_backend_config();
            match GoalTracker::new(config, &data_dir).await {
                Ok(trk) => {
                    // Apply the stored theme before first paint settles
                    match trk.prefs().theme() {
                        Ok(Some(mode)) => theme.set(mode),
                        Ok(None) => {}
                        Err(e) => tracing::warn!("Failed to load stored theme: {}", e),
                    }

                    let mut phase_rx = trk.session().subscribe();
                    let mut online_rx = trk.connectivity().subscribe();

                    let shared = tracker();
                    let mut guard = shared.write().await;
                    *guard = Some(trk);
                    drop(guard);
                    tracker_ready.set(true);
                    tracing::info!("GoalTracker initialized");

                    // Resolve the stored session one way or the other
                    {
                        let guard = shared.read().await;
                        if let Some(ref trk) = *guard {
                            trk.session().restore().await;
                        }
                    }

                    // Mirror the watch channels into the reactive signals.
                    // Each pass re-reads both current values, then sleeps
                    // until either channel moves again.
                    loop {
                        auth_phase.set(phase_rx.borrow_and_update().clone());
                        online.set(*online_rx.borrow_and_update());
                        tokio::select! {
                            changed = phase_rx.changed() => {
                                if changed.is_err() {
                                    break;
                                }
                            }
                            changed = online_rx.changed() => {
                                if changed.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to initialize GoalTracker: {}", e);
                }
            }
        });
    });

    let theme_class = theme().css_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell {theme_class}",
            if online() {
                Router::<Route> {}
            } else {
                OfflineNotice {}
            }
        }
    }
}
