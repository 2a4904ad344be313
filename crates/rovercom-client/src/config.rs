use std::time::Duration;

/// Reference device address on the lab network.
pub const DEFAULT_HOST: &str = "10.16.1.17";

/// Port the device firmware listens on.
pub const DEFAULT_PORT: u16 = 3333;

/// Default bound on connection establishment.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to reach the device.
#[derive(Debug, Clone)]
pub struct Target {
    /// Hostname or IP address of the device.
    pub host: String,
    /// TCP port the device listens on.
    pub port: u16,
    /// Maximum time to wait for the connection to establish.
    pub connect_timeout: Duration,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Target {
    /// Target a specific host, keeping the default port and timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// `host:port` form, for logs and error messages.
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
