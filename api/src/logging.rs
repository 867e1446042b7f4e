use crate::lineio::TRACE_TARGET;

// Warnings by default, the wire trace on top when verbose. Directives from
// the environment override both.
pub fn builder(verbose: bool, env: env_logger::Env) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn);
    if verbose {
        builder.filter_module(TRACE_TARGET, log::LevelFilter::Debug);
    }
    builder.parse_env(env);
    builder
}

pub fn init(verbose: bool) {
    builder(verbose, env_logger::Env::default()).init();
}

#[cfg(test)]
mod test {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    fn unset_env() -> env_logger::Env<'static> {
        env_logger::Env::new().filter("ARENA_LOG_UNSET_FOR_TESTS")
    }

    #[test]
    fn verbose_keeps_warnings() {
        let logger = builder(true, unset_env()).build();
        assert!(enabled(&logger, TRACE_TARGET, Level::Debug));
        assert!(enabled(&logger, "arena_elevated::dispatch", Level::Warn));
        assert!(!enabled(&logger, "arena_elevated::dispatch", Level::Info));
    }

    #[test]
    fn quiet_hides_wire_trace() {
        let logger = builder(false, unset_env()).build();
        assert!(!enabled(&logger, TRACE_TARGET, Level::Debug));
        assert!(enabled(&logger, "arena_vijf::player", Level::Warn));
    }
}
