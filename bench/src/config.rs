use anyhow::{bail, Context};

/// An integer setting read from the environment, with bounds.
pub struct IntSetting {
    pub name: &'static str,
    pub description: &'static str,
    pub default: u64,
    pub min: u64,
    pub max: u64,
}

pub static NODE_COUNT: IntSetting = IntSetting {
    name: "GRAPH_BFS_NODES",
    description: "Target vertex count for generated graphs",
    default: 200_000,
    min: 16,
    max: 20_000_000,
};

pub const LOG_LEVEL_VAR: &str = "GRAPH_BFS_LOG";
pub const FORMAT_VAR: &str = "GRAPH_BFS_FORMAT";

impl IntSetting {
    /// Parse `raw` (or the default when `None`) and check it against the bounds.
    pub fn resolve(&self, raw: Option<&str>) -> anyhow::Result<u64> {
        let value = match raw {
            None => self.default,
            Some(s) => s
                .trim()
                .replace('_', "")
                .parse::<u64>()
                .with_context(|| format!("{}: expected an integer, got '{}'", self.name, s))?,
        };
        if value < self.min || value > self.max {
            bail!(
                "{} must be between {} and {}, got {}",
                self.name,
                self.min,
                self.max,
                value
            );
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    All,
    Chain,
    LSystem,
    SmallWorld,
    Random,
    Barbell,
    Dla,
    BfsDemo,
    ComponentsDemo,
    Help,
}

impl Mode {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "all" => Mode::All,
            "chain" => Mode::Chain,
            "lsystem" => Mode::LSystem,
            "smallworld" => Mode::SmallWorld,
            "random" => Mode::Random,
            "barbell" => Mode::Barbell,
            "dla" => Mode::Dla,
            "bfs-demo" => Mode::BfsDemo,
            "components-demo" => Mode::ComponentsDemo,
            "help" | "--help" | "-h" => Mode::Help,
            other => bail!("unknown mode '{}', use --help for options", other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Quiet,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "quiet" | "off" => LogLevel::Quiet,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            other => bail!(
                "{}: invalid level '{}', use 'quiet', 'info', 'debug' or 'trace'",
                LOG_LEVEL_VAR,
                other
            ),
        })
    }

    pub fn as_tracing(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Quiet => None,
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            other => bail!("{}: invalid format '{}', use 'table' or 'json'", FORMAT_VAR, other),
        })
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub mode: Mode,
    pub node_count: u64,
    pub log_level: LogLevel,
    pub format: OutputFormat,
}

impl BenchConfig {
    /// Build from positional args `[mode] [node_count]` and the environment.
    /// A positional node count takes precedence over `GRAPH_BFS_NODES`.
    pub fn load(args: &[String]) -> anyhow::Result<Self> {
        Self::from_sources(args, |name| std::env::var(name).ok())
    }

    fn from_sources<F>(args: &[String], env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match args.get(1) {
            Some(s) => Mode::parse(s)?,
            None => Mode::All,
        };

        let env_nodes = env(NODE_COUNT.name);
        let raw_nodes = args.get(2).map(String::as_str).or(env_nodes.as_deref());
        let node_count = NODE_COUNT.resolve(raw_nodes)?;

        let log_level = match env(LOG_LEVEL_VAR) {
            Some(s) => LogLevel::parse(&s)?,
            None => LogLevel::Info,
        };
        let format = match env(FORMAT_VAR) {
            Some(s) => OutputFormat::parse(&s)?,
            None => OutputFormat::Table,
        };

        Ok(Self {
            mode,
            node_count,
            log_level,
            format,
        })
    }
}
