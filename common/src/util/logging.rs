use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{info, LevelFilter, SetLoggerError};
use std::future::Future;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static MULTI: OnceLock<MultiProgress> = OnceLock::new();

pub fn initialize_logging(log_level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = env_logger::builder()
        .filter_level(log_level)
        .parse_default_env() // Allow overriding log level through RUST_LOG env var
        .build();

    let multi = MULTI.get_or_init(MultiProgress::new);

    LogWrapper::new(multi.clone(), logger).try_init()
}

/// Progress bars are only drawn through the shared `MultiProgress`, so that log lines printed in
/// between don't tear them apart. Without initialized logging they stay hidden.
fn register(pb: ProgressBar) -> ProgressBar {
    match MULTI.get() {
        Some(multi) => multi.add(pb),
        None => {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
            pb
        }
    }
}

fn unregister(pb: &ProgressBar) {
    if let Some(multi) = MULTI.get() {
        multi.remove(pb);
    }
}

pub fn run_with_spinner<'a, F, Out>(
    target: &'a str, task_desc: &'a str, function: F,
) -> Out where
    F: FnOnce() -> Out,
{
    let start_time = Instant::now();

    let pb = ProgressBar::new_spinner()
        .with_message(format!("{}...", task_desc))
        .with_style(ProgressStyle::with_template("{spinner:.white} [{elapsed:.green}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()));
    let pb = register(pb);
    pb.enable_steady_tick(Duration::from_millis(100));

    let out = function();

    pb.finish_and_clear();
    unregister(&pb);
    let elapsed = indicatif::HumanDuration(start_time.elapsed());
    info!(target: target, "{} finished (took {})", task_desc, elapsed);

    out
}

pub async fn run_with_pb_async<'a, F, Fut, Out>(
    target: &'a str, task_desc: &'a str, total: u64, print_message: bool, function: F,
) -> Out where
    F: FnOnce(ProgressBar) -> Fut,
    Fut: Future<Output = Out>,
{
    let start_time = Instant::now();

    let pb = ProgressBar::new(total)
        .with_message(format!("{}...", task_desc))
        .with_style(
            ProgressStyle::with_template("[{elapsed:.green}] {msg} [{wide_bar:.cyan/blue}] {human_pos}/{human_len} [{eta}]")
                .map(|style| style.progress_chars("=> "))
                .unwrap_or_else(|_| ProgressStyle::default_bar())
        );
    let pb = register(pb);
    pb.enable_steady_tick(Duration::from_secs(1));

    let out = function(pb.clone()).await;

    pb.finish_and_clear();
    unregister(&pb);
    if print_message {
        let elapsed = indicatif::HumanDuration(start_time.elapsed());
        info!(target: target, "{} finished (took {})", task_desc, elapsed);
    }

    out
}
