//! Client configuration.

use std::time::Duration;

use crate::fault::FaultMap;
use crate::{PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};

/// Which Cvent service the client talks to before a session pins an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// `api.cvent.com`.
    #[default]
    Production,
    /// `sandbox-api.cvent.com`.
    Sandbox,
    /// Any other SOAP endpoint, e.g. a local mock server.
    Custom(String),
}

impl Environment {
    /// Pick production or sandbox from a flag.
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// The SOAP endpoint URL.
    pub fn endpoint(&self) -> &str {
        match self {
            Environment::Production => PRODUCTION_ENDPOINT,
            Environment::Sandbox => SANDBOX_ENDPOINT,
            Environment::Custom(url) => url,
        }
    }

    /// The WSDL location for this endpoint.
    pub fn wsdl_url(&self) -> String {
        format!("{}?WSDL", self.endpoint())
    }
}

/// Configuration for the SOAP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service to call before login.
    pub environment: Environment,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
    /// Fault message classification table.
    pub fault_map: FaultMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
            fault_map: FaultMap::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default configuration against the sandbox.
    pub fn sandbox() -> Self {
        Self::builder().with_environment(Environment::Sandbox).build()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Use the sandbox (`true`) or production (`false`) endpoint.
    pub fn sandbox(self, sandbox: bool) -> Self {
        self.with_environment(Environment::from_sandbox_flag(sandbox))
    }

    /// Use a custom endpoint.
    pub fn with_endpoint(self, url: impl Into<String>) -> Self {
        self.with_environment(Environment::Custom(url.into()))
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Replace the fault classification table.
    pub fn with_fault_map(mut self, fault_map: FaultMap) -> Self {
        self.config.fault_map = fault_map;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
