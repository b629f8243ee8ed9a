use clap::Parser;
use jver::cli::{handle_version, Cli, CommandHandler, Commands, TerminalPrompter};
use jver::environments::JavaVersionProbe;
use jver::error::{with_context, ContextualResult};
use jver::infrastructure::{logging, open_default, Config};
use std::io;
use std::process;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let code = match run(cli.command) {
        Ok(()) => 0,
        Err(e) => {
            eprint!("{}", e.user_message());
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(command: Commands) -> ContextualResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if command == Commands::Version {
        return with_context(handle_version(&mut out), "show version");
    }

    let config = with_context(Config::load(), "load configuration")?;
    let store = with_context(open_default(&config), "open environment store")?;
    let mut handler = CommandHandler::new(
        config,
        store,
        Box::new(TerminalPrompter),
        Box::new(JavaVersionProbe::default()),
    );
    handler.handle_command(command, &mut out)
}
