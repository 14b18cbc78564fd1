// Service-principal credentials for the query service

use std::fmt;

pub const CLIENT_ID_ENV: &str = "CLIENT_ID";
pub const TENANT_ID_ENV: &str = "TENANT_ID";
pub const CLIENT_SECRET_ENV: &str = "CLIENT_SECRET";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServicePrincipal {
    pub client_id: String,
    pub tenant_id: String,
    pub client_secret: String,
}

impl ServicePrincipal {
    /// Reads CLIENT_ID / TENANT_ID / CLIENT_SECRET. Unset vars become empty strings;
    /// the token endpoint is the one that rejects them.
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            client_id: read(CLIENT_ID_ENV),
            tenant_id: read(TENANT_ID_ENV),
            client_secret: read(CLIENT_SECRET_ENV),
        }
    }
}

impl fmt::Debug for ServicePrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicePrincipal")
            .field("client_id", &self.client_id)
            .field("tenant_id", &self.tenant_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Where a request gets its credentials from. Resolved once per invocation, never cached.
#[derive(Debug, Clone, Default)]
pub enum CredentialSource {
    #[default]
    Environment,
    Static(ServicePrincipal),
}

impl CredentialSource {
    pub fn resolve(&self) -> ServicePrincipal {
        match self {
            CredentialSource::Environment => ServicePrincipal::from_env(),
            CredentialSource::Static(sp) => sp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let sp = ServicePrincipal {
            client_id: "app".into(),
            tenant_id: "tenant".into(),
            client_secret: "hunter2".into(),
        };
        let s = format!("{:?}", sp);
        assert!(s.contains("app"));
        assert!(!s.contains("hunter2"));
    }

    #[test]
    fn static_source_returns_its_principal() {
        let sp = ServicePrincipal {
            client_id: "a".into(),
            tenant_id: "b".into(),
            client_secret: "c".into(),
        };
        assert_eq!(CredentialSource::Static(sp.clone()).resolve(), sp);
    }
}
