use dioxus::prelude::*;
use shared_types::{
    display_name, initials, role_label, AuthUser, ProfileRecord, SystemStatus,
};

/// Who is signed in, plus what the dashboard chrome shows about them.
///
/// Provided once at the app root. The auth guard and the sign-in form
/// populate it; signing out clears it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub user: Signal<Option<AuthUser>>,
    pub profile: Signal<Option<ProfileRecord>>,
    pub system_status: Signal<SystemStatus>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            profile: Signal::new(None),
            system_status: Signal::new(SystemStatus::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.user.set(Some(user));
    }

    /// Forget the user and everything loaded for them.
    pub fn clear(&mut self) {
        self.user.set(None);
        self.profile.set(None);
        self.system_status.set(SystemStatus::default());
    }

    pub fn display_name(&self) -> String {
        display_name(self.profile.read().as_ref())
    }

    pub fn initials(&self) -> String {
        initials(&self.display_name())
    }

    pub fn role_label(&self) -> String {
        role_label(self.profile.read().as_ref())
    }

    /// Fetch the caller's profile row. On failure the placeholder name stays.
    pub async fn load_profile(mut self) {
        match server::api::get_my_profile().await {
            Ok(profile) => self.profile.set(profile),
            Err(e) => tracing::error!(error = %e, "failed to load profile"),
        }
    }

    /// Fetch the global status row. On failure the current status stays.
    pub async fn load_system_status(mut self) {
        match server::api::get_system_status().await {
            Ok(row) => self.system_status.set(SystemStatus::from_record(row.as_ref())),
            Err(e) => tracing::error!(error = %e, "failed to load system status"),
        }
    }

    /// Revoke the server session, then clear local state. Navigation is
    /// left to the caller.
    pub async fn sign_out(mut self) {
        if let Err(e) = server::api::logout().await {
            tracing::warn!(error = %e, "sign-out request failed");
        }
        self.clear();
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
