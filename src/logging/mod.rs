use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let env_filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|error| {
        eprintln!(
            "Invalid log filter `{}` ({error}), falling back to `neuralatlas_server=info`.",
            args.log_filter
        );
        EnvFilter::new("neuralatlas_server=info")
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
