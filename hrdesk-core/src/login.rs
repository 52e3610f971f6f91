//! Simulated sign-in.
//!
//! No credential service exists. [`LoginSimulator`] runs the client-side form
//! checks, waits a fixed delay standing in for the network round trip, and
//! then resolves to the configured [`MockOutcome`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{HrError, Result};
use crate::route::Route;

/// Default simulated round-trip time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Who is signing in; decides the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// First screen after a successful sign-in
    pub fn landing(&self) -> Route {
        match self {
            Role::Admin => Route::AdminDashboard,
            Role::Manager => Route::ManagerDashboard,
            Role::Employee => Route::Attendance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(HrError::config(format!("unknown role '{other}'"))),
        }
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Client-side checks run before the simulated request
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(HrError::MissingField { field: "Email" });
        }
        if self.password.is_empty() {
            return Err(HrError::MissingField { field: "Password" });
        }
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(HrError::InvalidEmail {
                value: email.to_string(),
            }),
        }
    }
}

/// What the mock backend answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockOutcome {
    #[default]
    Succeed,
    Reject,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub remember_me: bool,
    #[serde(serialize_with = "serialize_route")]
    pub landing: Route,
}

fn serialize_route<S: serde::Serializer>(route: &Route, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.collect_str(route)
}

/// "jane.doe@company.com" -> "Jane Doe"
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stand-in for the authentication service
#[derive(Debug, Clone, Copy)]
pub struct LoginSimulator {
    delay: Duration,
    outcome: MockOutcome,
}

impl Default for LoginSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, MockOutcome::Succeed)
    }
}

impl LoginSimulator {
    pub fn new(delay: Duration, outcome: MockOutcome) -> Self {
        Self { delay, outcome }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validate, wait the fixed delay, then resolve to the mock outcome
    pub async fn sign_in(&self, form: &LoginForm) -> Result<Session> {
        form.validate()?;

        debug!(delay_ms = self.delay.as_millis() as u64, "simulating sign-in");
        tokio::time::sleep(self.delay).await;

        match self.outcome {
            MockOutcome::Succeed => {
                let email = form.email.trim().to_string();
                info!(role = %form.role, "signed in");
                Ok(Session {
                    display_name: display_name(&email),
                    email,
                    role: form.role,
                    remember_me: form.remember_me,
                    landing: form.role.landing(),
                })
            }
            MockOutcome::Reject => Err(HrError::InvalidCredentials),
        }
    }

    /// Run [`sign_in`](Self::sign_in) as an owned background task
    pub fn spawn(&self, form: LoginForm) -> PendingLogin {
        let sim = *self;
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = tx.send(sim.sign_in(&form).await);
        });
        PendingLogin {
            task: Some(task),
            rx,
        }
    }
}

/// In-flight sign-in owned by the login screen; aborted on drop
#[derive(Debug)]
pub struct PendingLogin {
    task: Option<JoinHandle<()>>,
    rx: oneshot::Receiver<Result<Session>>,
}

impl PendingLogin {
    /// Wait for the outcome
    pub async fn wait(mut self) -> Result<Session> {
        match (&mut self.rx).await {
            Ok(result) => result,
            Err(_) => Err(HrError::config("sign-in was cancelled")),
        }
    }

    /// Take the outcome if it is ready, without waiting
    pub fn try_take(&mut self) -> Option<Result<Session>> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.task = None;
                Some(result)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(Err(HrError::config("sign-in was cancelled")))
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("sign-in cancelled");
        }
    }
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.cancel();
    }
}
