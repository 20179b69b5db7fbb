use crate::tls::TlsConfig;
use std::fmt;

/// Database dialect a probe targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    Postgres,
}

impl DatabaseKind {
    /// Port used when none is configured
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::MySql => 3306,
            Self::Postgres => 5432,
        }
    }

    /// Human readable name shown on the status page
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::Postgres => "PostgreSQL",
        }
    }

    /// Database to connect to when none is configured
    ///
    /// `MySQL` accepts a connection without selecting a schema, `PostgreSQL`
    /// always needs one and ships `postgres` on every server.
    #[must_use]
    pub const fn admin_database(self) -> Option<&'static str> {
        match self {
            Self::MySql => None,
            Self::Postgres => Some("postgres"),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => f.write_str("mysql"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

/// Connection settings for a single probe target
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub kind: DatabaseKind,
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub database: Option<String>,
    pub tls: TlsConfig,
}

impl ConnectionConfig {
    /// Empty target of the given kind with its default port and database
    #[must_use]
    pub fn new(kind: DatabaseKind) -> Self {
        Self {
            kind,
            host: String::new(),
            user: String::new(),
            password: String::new(),
            port: kind.default_port(),
            database: kind.admin_database().map(String::from),
            tls: TlsConfig::default(),
        }
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the database, `None` keeps the kind's default
    #[must_use]
    pub fn database(mut self, database: Option<String>) -> Self {
        if let Some(database) = database.filter(|db| !db.is_empty()) {
            self.database = Some(database);
        }
        self
    }

    #[must_use]
    pub fn tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// `host:port` pair used in log lines
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keep the password out of logs and panics
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("kind", &self.kind)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"********")
            .field("port", &self.port)
            .field("database", &self.database)
            .field("tls", &self.tls)
            .finish()
    }
}
