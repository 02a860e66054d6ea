use log::info;
use redisw::ui::cli::{app, args::Args};
use redisw::utils::logging::init_logging;

fn main() {
    init_logging();
    let args = Args::parse_normalized();
    app::run(args);
    info!("redisw exited normally.");
}
