use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use snipz::commands::config::ConfigAction;
use snipz::commands::{self, Action, CmdMessage, MessageLevel};
use snipz::config::{self, SnipzConfig};
use snipz::error::Result;
use snipz::store::{self, SnippetStore};
use snipz::ui;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = parse_args();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        // Usage errors exit 1, same as every other reported error
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

struct AppContext {
    config: SnipzConfig,
    config_root: PathBuf,
    store: SnippetStore,
}

/// Every argument shape and interactive path reduces to one of these before
/// anything executes.
struct Invocation {
    action: Action,
    name: String,
    extra_args: Vec<String>,
    skip_confirm: bool,
}

impl Invocation {
    fn new(action: Action, name: String) -> Self {
        Self {
            action,
            name,
            extra_args: Vec::new(),
            skip_confirm: false,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Run { name, args }) => execute(
            &ctx,
            Invocation {
                extra_args: args,
                ..Invocation::new(Action::Run, name)
            },
        ),
        Some(Commands::Print { name }) => execute(&ctx, Invocation::new(Action::Print, name)),
        Some(Commands::Copy { name }) => execute(&ctx, Invocation::new(Action::Copy, name)),
        Some(Commands::Edit { name }) => execute(&ctx, Invocation::new(Action::Edit, name)),
        Some(Commands::Delete { name, yes }) => execute(
            &ctx,
            Invocation {
                skip_confirm: yes,
                ..Invocation::new(Action::Delete, name)
            },
        ),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Direct(tokens)) => handle_direct(&ctx, tokens),
        None => handle_interactive(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let config_root = config::config_root()?;
    let config = SnipzConfig::load(&config_root)?;
    let store = SnippetStore::new(config.snippets_dir.clone());

    Ok(AppContext {
        config,
        config_root,
        store,
    })
}

fn handle_interactive(ctx: &AppContext) -> Result<()> {
    let names = ctx.store.list()?;
    if names.is_empty() {
        println!("No snippets found.");
        return Ok(());
    }

    let Some(name) = ui::select_snippet(&names)? else {
        return cancelled();
    };
    prompt_action(ctx, name, Vec::new())
}

/// Legacy direct invocation: `snipz <name> [args...]`. A missing backing
/// file goes straight into create/edit; an existing one gets the action
/// menu, with any further tokens forwarded if Run is chosen.
fn handle_direct(ctx: &AppContext, tokens: Vec<String>) -> Result<()> {
    let mut tokens = tokens.into_iter();
    let name = tokens.next().unwrap_or_default();
    let extra_args: Vec<String> = tokens.collect();

    store::validate_name(&name)?;

    if !ctx.store.exists(&name) {
        println!("Creating new snippet: {}", name);
        return execute(ctx, Invocation::new(Action::Edit, name));
    }
    prompt_action(ctx, name, extra_args)
}

fn prompt_action(ctx: &AppContext, name: String, extra_args: Vec<String>) -> Result<()> {
    let Some(action) = ui::select_action()? else {
        return cancelled();
    };
    execute(
        ctx,
        Invocation {
            extra_args,
            ..Invocation::new(action, name)
        },
    )
}

fn execute(ctx: &AppContext, invocation: Invocation) -> Result<()> {
    store::validate_name(&invocation.name)?;

    if invocation.action == Action::Delete && !invocation.skip_confirm {
        let prompt = format!("Are you sure you want to delete '{}'?", invocation.name);
        if !ui::confirm(&prompt)? {
            println!("Snippet deletion cancelled.");
            return Ok(());
        }
    }

    let result = match invocation.action {
        Action::Run => commands::run::run(&ctx.store, &invocation.name, &invocation.extra_args)?,
        Action::Print => commands::print::run(&ctx.store, &invocation.name)?,
        Action::Copy => commands::copy::run(&ctx.store, &invocation.name)?,
        Action::Edit => commands::edit::run(&ctx.store, &ctx.config, &invocation.name)?,
        Action::Delete => commands::delete::run(&ctx.store, &invocation.name)?,
    };

    render(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.config_root, action)?;
    render(&result);
    Ok(())
}

fn cancelled() -> Result<()> {
    println!("Prompt cancelled by user.");
    Ok(())
}

fn render(result: &commands::CmdResult) {
    if let Some(content) = &result.content {
        println!("{}", content);
    }
    for (key, value) in &result.entries {
        println!("{} = {}", key, value);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
