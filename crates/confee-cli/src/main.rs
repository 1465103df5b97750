//! confee - terminal client for the Confee tech-conference assistant

mod commands;
mod config;
mod utils;

use clap::Parser;
use confee_api::HttpTransport;
use confee_chat::{ChatEvent, ConversationController, Role, SessionManager};
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// confee - your tech conference partner
#[derive(Parser, Debug)]
#[command(name = "confee")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the chat API (overrides CONFEE_API_URL and the config file)
    #[arg(short = 'u', long)]
    api_url: Option<String>,

    /// Seconds to wait for a reply (default: 30)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Send a single message and exit
    #[arg(short = 'c', long)]
    command: Option<String>,

    /// Continue an existing server session by id
    #[arg(long)]
    session: Option<String>,

    /// Don't list suggested prompts on an empty conversation
    #[arg(long)]
    no_suggestions: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Initialize config file
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup tracing
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("confee=debug,confee_api=debug,confee_chat=debug")
            .with_writer(io::stderr)
            .init();
    }

    // Initialize config and exit
    if args.init_config {
        match config::Config::init() {
            Ok(path) => {
                println!("Config file created at: {}", path.display());
                println!("\nExample config:\n{}", config::example_config());
            }
            Err(e) => {
                eprintln!("Error creating config: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let cfg = config::Config::load();
    let settings = cfg.resolve(
        args.api_url.as_deref(),
        args.timeout,
        std::env::var(config::API_URL_ENV).ok(),
    )?;
    tracing::debug!("Using {:?}", settings);

    let transport = Arc::new(HttpTransport::with_timeout(
        &settings.api_url,
        settings.timeout,
    )?);

    let session = match args.session {
        Some(id) if !id.trim().is_empty() => SessionManager::with_session_id(id.trim()),
        Some(_) => anyhow::bail!("--session must not be empty"),
        None => SessionManager::new(),
    };
    let mut chat = ConversationController::with_session(transport, session);

    // Non-interactive mode
    if let Some(command) = args.command {
        return run_command(&mut chat, &command).await;
    }

    let show_suggestions = settings.show_suggestions && !args.no_suggestions;
    run_interactive(&mut chat, show_suggestions).await
}

async fn run_command(chat: &mut ConversationController, command: &str) -> anyhow::Result<()> {
    if command.trim().is_empty() {
        anyhow::bail!("message is empty");
    }

    let mut receiver = chat.subscribe();
    chat.submit(command).await;

    if let Some(reply) = chat.conversation().last_by(Role::Assistant) {
        println!("{}", reply.content());
    }

    // The reply above is the rendered error; make scripts see the failure too.
    while let Ok(event) = receiver.try_recv() {
        if let ChatEvent::TurnFailed { failure } = event {
            tracing::debug!("Turn failed: {}", failure.kind());
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_interactive(
    chat: &mut ConversationController,
    show_suggestions: bool,
) -> anyhow::Result<()> {
    let is_tty = io::stdin().is_terminal();

    if is_tty {
        eprintln!("Confee - Your Tech Conference Partner (/help for commands)");
        eprintln!();
    }
    print_empty_state(show_suggestions);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let text = match commands::execute_command(input, chat) {
            None => input.to_string(),
            Some(commands::CommandResult::Submit(prompt)) => prompt,
            Some(commands::CommandResult::NewConversation) => {
                let session_id = chat.reset();
                tracing::debug!("New conversation, session {}", session_id);
                println!("新しい会話を開始しました。");
                println!();
                print_empty_state(show_suggestions);
                continue;
            }
            Some(commands::CommandResult::Message(msg)) => {
                println!("{}", msg);
                println!();
                continue;
            }
            Some(commands::CommandResult::Unknown(cmd)) => {
                println!("Unknown command: /{}", cmd);
                println!("Type /help for available commands.");
                println!();
                continue;
            }
            Some(commands::CommandResult::Exit) => break,
        };

        submit_and_render(chat, &text, is_tty).await;
    }

    Ok(())
}

/// Run one turn, showing a busy indicator while the request is in flight,
/// then print the newest assistant message from history.
async fn submit_and_render(chat: &mut ConversationController, text: &str, is_tty: bool) {
    let mut receiver = chat.subscribe();
    let handle = chat.handle();

    let indicator = tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            if let ChatEvent::BusyChanged { busy: true } = event {
                break;
            }
        }
        if is_tty {
            eprint!("考え中...");
            io::stderr().flush().ok();
        }
        handle.wait_for_idle().await;
        if is_tty {
            eprint!("\r\x1b[K");
            io::stderr().flush().ok();
        }
    });

    println!();
    chat.submit(text).await;
    let _ = indicator.await;

    if let Some(reply) = chat.conversation().last_by(Role::Assistant) {
        println!("{}", reply.content());
    }
    println!();
}

fn print_empty_state(show_suggestions: bool) {
    println!("Confee へようこそ");
    println!("技術カンファレンスについて質問してみましょう");
    if show_suggestions {
        println!();
        println!("{}", commands::PromptsCommand::list_text());
    }
    println!();
}
