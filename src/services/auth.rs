/// Credential check for the admin view. The viewer only ever asks "is this
/// credential valid" so a real verifier can be substituted without touching
/// the handlers.
pub trait Authenticator: Send + Sync {
    fn verify(&self, credential: &str) -> bool;
}

/// Plaintext comparison against one shared password. No lockout, no rate
/// limiting, no expiry.
pub struct StaticPasswordAuth {
    password: String,
}

impl StaticPasswordAuth {
    pub fn new(password: String) -> Self {
        Self { password }
    }
}

impl Authenticator for StaticPasswordAuth {
    fn verify(&self, credential: &str) -> bool {
        credential == self.password
    }
}
