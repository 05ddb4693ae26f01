#![forbid(unsafe_code)]
#![allow(unknown_lints)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::perf,
    clippy::nursery,
    clippy::complexity,
    clippy::correctness,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::exit,
    clippy::expect_used,
    clippy::filetype_is_file,
    clippy::if_then_some_else_none,
    clippy::indexing_slicing,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::multiple_inherent_impl,
    clippy::panic_in_result_fn,
    clippy::rc_buffer,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::semicolon_if_nothing_returned,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm,
    clippy::wrong_self_convention
)]
#![allow(
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions
)]

use std::path::PathBuf;

use tracing::{info, instrument};

use bot::DiscordBot;
use utility::{config::Config, logger::Logger};

fn main() -> anyhow::Result<()> {
    Logger::initialize()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { async_main().await })
}

#[instrument]
async fn async_main() -> anyhow::Result<()> {
    let config = Config::load(&get_config_path())?;

    let task = DiscordBot::start(config).await?;

    task.await?;
    info!(task = "Main thread", "Shutting down.");

    Ok(())
}

fn get_config_path() -> PathBuf {
    std::env::var_os("PRIDE_BOT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings"))
}
