use clap::Parser;
use tracing::error;

fn main() {
    let args = match tshark_wrap::cli::Args::try_parse() {
        Ok(args) => args,
        // --help / --version 仍走 clap 自己的输出与退出码。
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            tshark_wrap::logging::init(None);
            error!("{}", err.to_string().trim_end());
            std::process::exit(1);
        }
    };

    if let Err(err) = tshark_wrap::run(args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
