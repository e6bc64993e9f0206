use anyhow::{Context, bail};

use crate::orders::{CourseLayout, GateKind};

/// Default capacity of the event broadcast channel
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Order desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | COURSE_LAYOUT | dynamic | `dynamic` (lazy groups, pruned when empty) or `fixed` (seeded house courses) |
/// | COURSE_GATE | sequential | `sequential`, `strict` or `open` |
/// | EVENT_CHANNEL_CAPACITY | 1024 | Broadcast buffer per subscriber |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | - | Daily rolling log files in this directory |
/// | MENU_CATALOG | - | JSON menu file (built-in house menu otherwise) |
///
/// # Example
///
/// ```ignore
/// COURSE_LAYOUT=fixed COURSE_GATE=strict order-desk session.json
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// How course groups come into existence
    pub layout: CourseLayout,
    /// Course unlocking rule
    pub gate: GateKind,
    pub event_channel_capacity: usize,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Menu catalog file
    pub menu_catalog: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables
    ///
    /// Unset values fall back to their defaults; values that do not parse
    /// are an error.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let event_channel_capacity = match lookup("EVENT_CHANNEL_CAPACITY") {
            Some(value) => {
                let capacity: usize = value
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid EVENT_CHANNEL_CAPACITY: {value}"))?;
                if capacity == 0 {
                    bail!("EVENT_CHANNEL_CAPACITY must be greater than 0");
                }
                capacity
            }
            None => defaults.event_channel_capacity,
        };

        let log_json = match lookup("LOG_JSON") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("invalid LOG_JSON: {value}"))?,
            None => defaults.log_json,
        };

        Ok(Self {
            layout: parse_var(&lookup, "COURSE_LAYOUT")?.unwrap_or(defaults.layout),
            gate: parse_var(&lookup, "COURSE_GATE")?.unwrap_or(defaults.gate),
            event_channel_capacity,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json,
            log_dir: lookup("LOG_DIR").filter(|v| !v.is_empty()),
            menu_catalog: lookup("MENU_CATALOG").filter(|v| !v.is_empty()),
        })
    }

    /// Override the course policy (tests and embedding)
    pub fn with_policy(mut self, layout: CourseLayout, gate: GateKind) -> Self {
        self.layout = layout;
        self.gate = gate;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            layout: CourseLayout::default(),
            gate: GateKind::default(),
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
            menu_catalog: None,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    lookup(key)
        .map(|value| value.parse().map_err(|err: String| anyhow::anyhow!("{key}: {err}")))
        .transpose()
}
