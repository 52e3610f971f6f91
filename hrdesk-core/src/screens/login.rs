use crate::login::{LoginForm, LoginSimulator, PendingLogin, Role, Session};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Role,
    RememberMe,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Role,
            LoginFocus::Role => LoginFocus::RememberMe,
            LoginFocus::RememberMe => LoginFocus::Email,
        }
    }
}

/// Login form plus the in-flight request, if any
#[derive(Debug, Default)]
pub struct LoginScreen {
    pub form: LoginForm,
    pub focus: LoginFocus,
    pending: Option<PendingLogin>,
    error: Option<String>,
    session: Option<Session>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sign-in. Form errors are reported immediately without a request.
    ///
    /// Must be called inside a tokio runtime.
    pub fn submit(&mut self, simulator: &LoginSimulator) {
        if self.pending.is_some() {
            return;
        }
        self.error = None;
        if let Err(e) = self.form.validate() {
            self.error = Some(e.to_string());
            return;
        }
        self.pending = Some(simulator.spawn(self.form.clone()));
    }

    /// Collect a finished request. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        match pending.try_take() {
            None => false,
            Some(result) => {
                self.pending = None;
                match result {
                    Ok(session) => self.session = Some(session),
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
        }
    }

    /// Abandon an in-flight request
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn cycle_role(&mut self) {
        self.form.role = match self.form.role {
            Role::Admin => Role::Manager,
            Role::Manager => Role::Employee,
            Role::Employee => Role::Admin,
        };
    }

    /// Type into the focused text field
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginFocus::Email => self.form.email.push(c),
            LoginFocus::Password => self.form.password.push(c),
            LoginFocus::Role if c == ' ' => self.cycle_role(),
            LoginFocus::RememberMe if c == ' ' => self.form.remember_me = !self.form.remember_me,
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            LoginFocus::Email => {
                self.form.email.pop();
            }
            LoginFocus::Password => {
                self.form.password.pop();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::{MockOutcome, DEFAULT_DELAY};
    use std::time::Duration;

    fn type_in(screen: &mut LoginScreen, email: &str, password: &str) {
        screen.focus = LoginFocus::Email;
        email.chars().for_each(|c| screen.push_char(c));
        screen.focus = screen.focus.next();
        password.chars().for_each(|c| screen.push_char(c));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_poll() {
        let mut screen = LoginScreen::new();
        type_in(&mut screen, "john.smith@company.com", "pw");
        screen.submit(&LoginSimulator::default());
        assert!(screen.is_submitting());
        assert!(!screen.poll());

        tokio::time::sleep(DEFAULT_DELAY + Duration::from_millis(1)).await;
        assert!(screen.poll());
        assert!(!screen.is_submitting());
        assert_eq!(screen.session().unwrap().display_name, "John Smith");
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_sets_error_without_request() {
        let mut screen = LoginScreen::new();
        screen.submit(&LoginSimulator::default());
        assert!(!screen.is_submitting());
        assert_eq!(screen.error(), Some("Email is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_message() {
        let mut screen = LoginScreen::new();
        type_in(&mut screen, "a@b.com", "x");
        screen.submit(&LoginSimulator::new(Duration::from_millis(5), MockOutcome::Reject));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(screen.poll());
        assert_eq!(screen.error(), Some("Invalid email or password"));
        assert!(screen.session().is_none());
    }

    #[test]
    fn test_role_and_remember_toggle() {
        let mut screen = LoginScreen::new();
        screen.focus = LoginFocus::Role;
        screen.push_char(' ');
        assert_eq!(screen.form.role, Role::Manager);
        screen.focus = screen.focus.next();
        screen.push_char(' ');
        assert!(screen.form.remember_me);
    }
}
