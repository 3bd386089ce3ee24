//! # Validation Pipeline
//!
//! Owns the four field values and publishes a [`FormState`] snapshot after
//! every change.
//!
//! ## Email availability check
//!
//! ```text
//! set_email ──▶ qualifies? ──no──▶ Idle
//!                  │yes
//!                  ├─ same as last checked ──▶ Resolved (cached verdict, no call)
//!                  └─ otherwise ──▶ Pending ─ debounce ─▶ check_email_available ─▶ Resolved
//! ```
//!
//! Each new email edit aborts a check that is still waiting out its
//! debounce window. A request already sent to the server keeps running:
//! returning to its email re-adopts it instead of sending the email again,
//! and a newer request supersedes it. A completing task carries the
//! generation it was scheduled with and is discarded unless that
//! generation is still current, so only the check for the latest stable
//! value can land.
//!
//! ## Single writer
//!
//! All mutation happens under one lock, and each mutation recomputes the
//! full snapshot through [`FormState::derive`].

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use signup_core::{is_valid_email, AuthApi, Field, FieldError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::state::{EmailCheck, FormInput, FormState};

/// Reactive validator for the sign-up form.
///
/// Cheap to clone; clones share the same fields and outputs.
#[derive(Clone)]
pub struct ValidationPipeline {
    shared: Arc<Shared>,
}

struct Shared {
    api: Arc<dyn AuthApi>,
    config: PipelineConfig,
    runtime: Handle,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<FormState>,
}

#[derive(Default)]
struct Inner {
    input: FormInput,
    email_check: EmailCheck,
    /// Last email the server answered for, and its answer.
    last_checked: Option<(String, bool)>,
    generation: u64,
    /// Check still inside its debounce window.
    email_task: Option<JoinHandle<()>>,
    /// Check whose request has been sent and not yet answered.
    in_flight: Option<InFlight>,
}

struct InFlight {
    email: String,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl ValidationPipeline {
    /// Create a pipeline bound to the current Tokio runtime.
    pub fn new(api: Arc<dyn AuthApi>, config: PipelineConfig) -> Result<Self, PipelineError> {
        let runtime = Handle::try_current().map_err(|_| PipelineError::NoRuntime)?;
        let (state_tx, _) = watch::channel(FormState::default());
        Ok(Self {
            shared: Arc::new(Shared {
                api,
                config,
                runtime,
                inner: Mutex::new(Inner::default()),
                state_tx,
            }),
        })
    }

    pub fn set_username(&self, value: impl Into<String>) {
        self.set(Field::Username, value.into());
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.set(Field::Email, value.into());
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.set(Field::Password, value.into());
    }

    pub fn set_confirm_password(&self, value: impl Into<String>) {
        self.set(Field::ConfirmPassword, value.into());
    }

    /// Record a new value for `field` and republish the derived state.
    pub fn set(&self, field: Field, value: String) {
        let mut inner = self.shared.inner.lock();
        let slot = inner.input.field_mut(field);
        let changed = slot.value != value;
        slot.value = value;
        slot.touched = true;

        if field == Field::Email && changed {
            self.shared.reschedule_email_check(&mut inner);
        }
        self.shared.publish(&inner);
    }

    /// Clear the fields a completed submission consumes.
    ///
    /// Username, email and confirmation are emptied as if the user had
    /// cleared them. The password value is kept but its error is hidden
    /// until the user edits it again.
    pub fn reset_after_submit(&self) {
        let mut inner = self.shared.inner.lock();
        for field in [Field::Username, Field::Email, Field::ConfirmPassword] {
            let slot = inner.input.field_mut(field);
            slot.value.clear();
            slot.touched = true;
        }
        inner.input.password.touched = false;
        self.shared.reschedule_email_check(&mut inner);
        self.shared.publish(&inner);
    }

    /// Observe the derived state: current value now, every change after.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.shared.state_tx.subscribe()
    }

    /// Current derived state.
    pub fn snapshot(&self) -> FormState {
        self.shared.state_tx.borrow().clone()
    }

    /// Wait until no email check is scheduled or in flight, then return
    /// the state at that point.
    pub async fn settled(&self) -> FormState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.email_check_pending).await {
            Ok(state) => state.clone(),
            // The sender lives in `shared`, which `self` keeps alive.
            Err(_) => self.snapshot(),
        };
        settled
    }

    /// Current raw value of `field`.
    pub fn value(&self, field: Field) -> String {
        self.shared.inner.lock().input.field(field).value.clone()
    }

    pub fn username_error(&self) -> &'static str {
        self.message(Field::Username)
    }

    pub fn email_error(&self) -> &'static str {
        self.message(Field::Email)
    }

    pub fn password_error(&self) -> &'static str {
        self.message(Field::Password)
    }

    pub fn confirm_password_error(&self) -> &'static str {
        self.message(Field::ConfirmPassword)
    }

    pub fn can_submit(&self) -> bool {
        self.shared.state_tx.borrow().can_submit
    }

    fn message(&self, field: Field) -> &'static str {
        FieldError::render(self.shared.state_tx.borrow().error(field))
    }
}

impl std::fmt::Debug for ValidationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.inner.lock();
        f.debug_struct("ValidationPipeline")
            .field("input", &inner.input)
            .field("email_check", &inner.email_check)
            .field("config", &self.shared.config)
            .finish()
    }
}

impl Shared {
    fn publish(&self, inner: &Inner) {
        let next = FormState::derive(
            &inner.input,
            &inner.email_check,
            self.config.password_policy,
        );
        self.state_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                tracing::debug!(?next, "form state changed");
                *current = next;
                true
            }
        });
    }

    fn reschedule_email_check(self: &Arc<Self>, inner: &mut Inner) {
        if let Some(task) = inner.email_task.take() {
            task.abort();
        }
        inner.generation += 1;

        let email = inner.input.email.value.clone();
        if email.is_empty() || !is_valid_email(&email) {
            inner.email_check = EmailCheck::Idle;
            return;
        }

        if let Some((checked, available)) = &inner.last_checked {
            if *checked == email {
                tracing::debug!(%email, available, "reusing verdict for already-checked email");
                inner.email_check = EmailCheck::Resolved {
                    email,
                    available: *available,
                };
                return;
            }
        }

        if let Some(flight) = inner.in_flight.as_ref().filter(|f| f.email == email) {
            tracing::debug!(%email, generation = flight.generation, "re-adopting in-flight email check");
            inner.email_check = EmailCheck::Pending {
                email,
                generation: flight.generation,
            };
            return;
        }

        let generation = inner.generation;
        inner.email_check = EmailCheck::Pending {
            email: email.clone(),
            generation,
        };

        let api = Arc::clone(&self.api);
        let debounce = self.config.email_debounce;
        let weak: Weak<Self> = Arc::downgrade(self);
        inner.email_task = Some(self.runtime.spawn(async move {
            tokio::time::sleep(debounce).await;
            match weak.upgrade() {
                Some(shared) if shared.mark_sent(&email, generation) => {}
                _ => return,
            }
            tracing::debug!(%email, generation, "checking email availability");
            let available = api.check_email_available(&email).await;
            if let Some(shared) = weak.upgrade() {
                shared.resolve_email_check(email, generation, available);
            }
        }));
    }

    /// Move a check whose debounce window elapsed to the in-flight slot.
    /// Returns `false` if the check was superseded meanwhile.
    fn mark_sent(&self, email: &str, generation: u64) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            return false;
        }
        if let Some(stale) = inner.in_flight.take() {
            if let Some(task) = stale.task {
                task.abort();
            }
        }
        let task = inner.email_task.take();
        inner.in_flight = Some(InFlight {
            email: email.to_string(),
            generation,
            task,
        });
        true
    }

    fn resolve_email_check(&self, email: String, generation: u64, available: bool) {
        let mut inner = self.inner.lock();
        if inner
            .in_flight
            .as_ref()
            .is_some_and(|f| f.generation == generation)
        {
            inner.in_flight = None;
        }

        let current = matches!(
            &inner.email_check,
            EmailCheck::Pending { generation: g, .. } if *g == generation
        );
        if !current {
            tracing::debug!(%email, generation, "discarding stale email check result");
            return;
        }

        inner.last_checked = Some((email.clone(), available));
        inner.email_check = EmailCheck::Resolved { email, available };
        self.publish(&inner);
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        if let Some(task) = inner.email_task.take() {
            task.abort();
        }
        if let Some(task) = inner.in_flight.take().and_then(|f| f.task) {
            task.abort();
        }
    }
}
