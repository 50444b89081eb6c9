//! Mock session gate.

/// Authenticated / unauthenticated flag.
///
/// Credentials are never checked; the flag only decides which top-level
/// view is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn sign_in(&mut self) {
        self.authenticated = true;
    }

    pub(crate) fn sign_out(&mut self) {
        self.authenticated = false;
    }
}

/// Values typed into the login or register form.
///
/// Only carried so the submit signature matches a real form; nothing reads
/// them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep typed credentials out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &"***")
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let dbg = format!("{:?}", creds);
        assert!(!dbg.contains("a@b.c"));
        assert!(!dbg.contains("hunter2"));
    }
}
