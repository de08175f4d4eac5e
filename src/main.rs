mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

fn main() {
    match cli_runtime::run() {
        Ok(status) => std::process::exit(status.code()),
        Err(err) => {
            gitlabctl::output::error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
