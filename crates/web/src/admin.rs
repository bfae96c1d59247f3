//! Admin panel view-model.
//!
//! Holds the login state, the current list and the create/edit form. Every
//! outcome of a mutation is reported through the [`Prompter`].

use courtside_core::schedule::ScheduleEvent;
use courtside_core::types::DbId;

use crate::cache::ListCache;
use crate::client::{ClientError, ScheduleApi};
use crate::form::ScheduleForm;
use crate::prompt::Prompter;
use crate::session::SessionStore;

pub const ADDED_MESSAGE: &str = "Schedule item added!";
pub const UPDATED_MESSAGE: &str = "Schedule item updated!";
pub const DELETED_MESSAGE: &str = "Schedule item deleted!";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this schedule item?";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Where the admin panel is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPhase {
    Unauthenticated,
    Authenticating,
    /// Logged in, nothing in flight.
    Idle,
    /// A create or update is in flight; the submit control is disabled.
    Submitting,
}

pub struct AdminView<A, S, C, P> {
    api: A,
    session: S,
    cache: C,
    prompter: P,
    phase: AdminPhase,
    events: Vec<ScheduleEvent>,
    pub form: ScheduleForm,
    edit_target: Option<DbId>,
    login_error: Option<String>,
}

impl<A, S, C, P> AdminView<A, S, C, P>
where
    A: ScheduleApi,
    S: SessionStore,
    C: ListCache,
    P: Prompter,
{
    pub fn new(api: A, session: S, cache: C, prompter: P) -> Self {
        Self {
            api,
            session,
            cache,
            prompter,
            phase: AdminPhase::Unauthenticated,
            events: Vec::new(),
            form: ScheduleForm::default(),
            edit_target: None,
            login_error: None,
        }
    }

    pub fn phase(&self) -> AdminPhase {
        self.phase
    }

    /// The admin list, newest first.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn edit_target(&self) -> Option<DbId> {
        self.edit_target
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AdminPhase::Idle | AdminPhase::Submitting)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Page load. A token left in the session store unlocks the panel
    /// without asking for the password again.
    pub async fn open(&mut self) {
        if self.session.token().is_some() {
            tracing::debug!("Resuming admin session");
            self.phase = AdminPhase::Idle;
            self.refresh().await;
        } else {
            self.phase = AdminPhase::Unauthenticated;
        }
    }

    pub async fn login(&mut self, password: &str) {
        if self.phase != AdminPhase::Unauthenticated {
            return;
        }
        self.phase = AdminPhase::Authenticating;

        match self.api.authenticate(password).await {
            Ok(auth) => {
                tracing::info!(expires_in = auth.expires_in, "Admin logged in");
                self.session.set_token(auth.token);
                self.login_error = None;
                self.phase = AdminPhase::Idle;
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Admin login failed");
                let message = match &err {
                    ClientError::Api { message, .. } => message.clone(),
                    ClientError::Network(_) => format!("Error: {err}"),
                };
                self.phase = AdminPhase::Unauthenticated;
                self.prompter.alert(&message);
                self.login_error = Some(message);
            }
        }
    }

    /// Load the list through the cache, fetching on a miss.
    pub async fn refresh(&mut self) {
        if let Some(events) = self.cache.get() {
            self.events = events;
            return;
        }
        let Some(token) = self.session.token() else {
            return;
        };

        match self.api.list_admin(&token).await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "Loaded admin schedule");
                self.cache.put(events.clone());
                self.events = events;
            }
            Err(err) => self.report_failure(err),
        }
    }

    /// Start editing a listed record. Returns `false` if `id` is not listed.
    pub fn edit(&mut self, id: DbId) -> bool {
        let Some(event) = self.events.iter().find(|e| e.id == id) else {
            return false;
        };
        self.form = ScheduleForm::from_event(event);
        self.edit_target = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.form.reset();
    }

    /// Save the form: update when editing, otherwise create.
    pub async fn submit(&mut self) {
        if self.phase != AdminPhase::Idle {
            return;
        }
        let Some(token) = self.session.token() else {
            self.expire_session();
            return;
        };

        self.phase = AdminPhase::Submitting;
        let input = self.form.to_input();
        let result = match self.edit_target {
            Some(id) => self.api.update(&token, id, &input).await,
            None => self.api.create(&token, &input).await,
        };
        self.phase = AdminPhase::Idle;

        match result {
            Ok(event) => {
                let message = if self.edit_target.is_some() {
                    UPDATED_MESSAGE
                } else {
                    ADDED_MESSAGE
                };
                tracing::info!(schedule_id = %event.id, title = %event.title, "Schedule item saved");
                self.prompter.alert(message);
                self.cancel_edit();
                self.cache.invalidate();
                self.refresh().await;
            }
            Err(err) => self.report_failure(err),
        }
    }

    /// Delete after the user confirms. Declining issues no request.
    pub async fn delete(&mut self, id: DbId) {
        if self.phase != AdminPhase::Idle {
            return;
        }
        if !self.prompter.confirm(CONFIRM_DELETE_MESSAGE) {
            return;
        }
        let Some(token) = self.session.token() else {
            self.expire_session();
            return;
        };

        match self.api.delete(&token, id).await {
            Ok(()) => {
                tracing::info!(schedule_id = %id, "Schedule item deleted");
                if self.edit_target == Some(id) {
                    self.cancel_edit();
                }
                self.prompter.alert(DELETED_MESSAGE);
                self.cache.invalidate();
                self.refresh().await;
            }
            Err(err) => self.report_failure(err),
        }
    }

    pub fn logout(&mut self) {
        self.session.clear();
        self.cache.invalidate();
        self.events.clear();
        self.cancel_edit();
        self.phase = AdminPhase::Unauthenticated;
    }

    fn report_failure(&mut self, err: ClientError) {
        if err.is_unauthorized() {
            self.expire_session();
            return;
        }
        tracing::warn!(error = %err, "Admin request failed");
        self.prompter.alert(&format!("Error: {err}"));
    }

    fn expire_session(&mut self) {
        tracing::info!("Admin session expired");
        self.logout();
        self.prompter.alert(SESSION_EXPIRED_MESSAGE);
    }
}
