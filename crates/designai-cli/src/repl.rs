//! Interactive workspace.
//!
//! Slash commands drive the controller; any other line is a generation
//! prompt. After every command the new chat messages and a changed auth hint
//! are printed.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use designai_application::{ExportFormat, WorkspaceController};
use designai_core::chat::{ChatMessage, ChatRole};
use designai_core::error::DesignError;
use designai_core::record::GenerationRequest;
use designai_core::session::LoginInput;
use designai_core::state::{AuthEntry, Device, View};

use crate::commands;

const COMMANDS: [&str; 18] = [
    "/auth",
    "/demo",
    "/pricing",
    "/back",
    "/login",
    "/guest",
    "/logout",
    "/template",
    "/tone",
    "/device",
    "/export",
    "/status",
    "/clear",
    "/new",
    "/preview",
    "/help",
    "/quit",
    "/exit",
];

const DEFAULT_TEMPLATE: &str = "Dashboard";
const DEFAULT_TONE: &str = "Executive";

/// Completion, hints and highlighting for the workspace prompt.
///
/// Command names complete at the start of the line; `/device` and `/export`
/// also complete their first argument.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    devices: Vec<String>,
    formats: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            devices: Device::ALL.iter().map(Device::to_string).collect(),
            formats: ExportFormat::ALL.iter().map(ExportFormat::to_string).collect(),
        }
    }

    /// Byte offset of the word under the cursor and the words it may become.
    fn candidates<'a>(&'a self, line: &str) -> Option<(usize, &'a [String])> {
        if !line.starts_with('/') {
            return None;
        }

        match line.split_once(' ') {
            None => Some((0, self.commands.as_slice())),
            Some((name, arg)) if !arg.contains(' ') => {
                let words: &[String] = match name {
                    "/device" => &self.devices,
                    "/export" => &self.formats,
                    _ => return None,
                };
                Some((name.len() + 1, words))
            }
            Some(_) => None,
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let Some((start, words)) = self.candidates(line) else {
            return Ok((0, vec![]));
        };

        let word = &line[start..];
        let pairs = words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        match line.split_once(' ') {
            Some((name, rest)) => Owned(format!("{} {}", name.bright_cyan(), rest)),
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, words) = self.candidates(line)?;
        let word = &line[start..];
        words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    OpenAuth(AuthEntry),
    Back,
    Login,
    Guest,
    Logout,
    Template(Option<String>),
    Tone(Option<String>),
    Device(Option<String>),
    Export(Option<String>, Option<PathBuf>),
    Status,
    Clear,
    NewProject,
    Preview,
    Help,
    Quit,
    Generate(String),
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return Self::Generate(line.to_string());
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "/auth" => Self::OpenAuth(AuthEntry::Login),
            "/demo" => Self::OpenAuth(AuthEntry::Demo),
            "/pricing" => Self::OpenAuth(AuthEntry::Pricing),
            "/back" => Self::Back,
            "/login" => Self::Login,
            "/guest" => Self::Guest,
            "/logout" => Self::Logout,
            "/template" => Self::Template(arg),
            "/tone" => Self::Tone(arg),
            "/device" => Self::Device(arg),
            "/export" => {
                let mut parts = rest.split_whitespace();
                let format = parts.next().map(str::to_string);
                let path = parts.next().map(PathBuf::from);
                Self::Export(format, path)
            }
            "/status" => Self::Status,
            "/clear" => Self::Clear,
            "/new" => Self::NewProject,
            "/preview" => Self::Preview,
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

struct Repl {
    controller: WorkspaceController,
    template: String,
    tone: String,
    /// Chat messages already printed.
    shown: usize,
    /// Last auth hint printed.
    shown_hint: Option<String>,
}

impl Repl {
    fn new(controller: WorkspaceController) -> Self {
        Self {
            controller,
            template: DEFAULT_TEMPLATE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            shown: 0,
            shown_hint: None,
        }
    }

    fn prompt(&self) -> String {
        let state = self.controller.state();
        match state.view {
            View::Generator => format!(
                "[{} | {} credits | {}] >> ",
                self.controller.profile_label(),
                state.credits,
                state.active_device
            ),
            view => format!("[{}] >> ", view),
        }
    }

    /// Prints chat messages and the auth hint that appeared since last call.
    fn flush(&mut self) {
        let state = self.controller.state();
        if state.chat.len() < self.shown {
            self.shown = 0;
        }
        for message in &state.chat[self.shown..] {
            print_message(message);
        }
        self.shown = state.chat.len();

        if state.auth_hint != self.shown_hint {
            if let Some(hint) = &state.auth_hint {
                println!("{}", hint.yellow());
            }
            self.shown_hint = state.auth_hint.clone();
        }
    }

    /// Reports an error unless the controller already put it in the chat log.
    fn report(&mut self, err: DesignError) {
        self.flush();
        let message = err.to_string();
        let already_shown = self
            .controller
            .state()
            .chat
            .last()
            .is_some_and(|m| m.text == message)
            || self.shown_hint.as_deref() == Some(message.as_str());
        if !already_shown {
            println!("{}", message.red());
        }
    }

    async fn execute(&mut self, command: Command, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<bool> {
        let outcome = match command {
            Command::Quit => return Ok(false),
            Command::OpenAuth(entry) => self.controller.open_auth(entry),
            Command::Back => self.controller.back_to_landing(),
            Command::Login => self.login(rl).await,
            Command::Guest => self.controller.login_guest().map(|_| ()),
            Command::Logout => self.controller.logout(),
            Command::Template(value) => {
                set_or_show("Template", &mut self.template, value);
                Ok(())
            }
            Command::Tone(value) => {
                set_or_show("Tone", &mut self.tone, value);
                Ok(())
            }
            Command::Device(value) => {
                self.device(value);
                Ok(())
            }
            Command::Export(format, path) => self.export(format, path),
            Command::Status => {
                commands::status::run(&self.controller);
                Ok(())
            }
            Command::Clear => {
                self.controller.clear_chat();
                println!("{}", "Chat cleared.".bright_black());
                Ok(())
            }
            Command::NewProject => {
                self.controller.new_project();
                Ok(())
            }
            Command::Preview => self.controller.preview_document().map(|html| println!("{}", html)),
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Generate(prompt) => self.generate(prompt).await,
            Command::Unknown(name) => {
                println!("{}", format!("Unknown command {}. Type /help.", name).bright_black());
                Ok(())
            }
        };

        match outcome {
            Ok(()) => self.flush(),
            Err(e) => self.report(e),
        }
        Ok(true)
    }

    async fn login(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<(), DesignError> {
        if self.controller.state().view == View::Landing {
            self.controller.open_auth(AuthEntry::Login)?;
            self.flush();
        }

        let mut field = |label: &str| -> Result<String, DesignError> {
            match rl.readline(&format!("{}: ", label)) {
                Ok(value) => Ok(value),
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(String::new()),
                Err(e) => Err(DesignError::io(e.to_string())),
            }
        };
        let input = LoginInput::new(
            field("Full name")?,
            field("Email")?,
            field("Password")?,
            field("Company")?,
        );

        println!("{}", "Signing in...".bright_black());
        self.controller.login(input).await.map(|_| ())
    }

    async fn generate(&mut self, prompt: String) -> Result<(), DesignError> {
        let request = GenerationRequest::new(
            prompt,
            self.template.clone(),
            self.tone.clone(),
            self.controller.state().active_device,
        );
        let pending = self.controller.begin_generation(request)?;
        self.flush();
        println!("{}", "Generating...".bright_black());
        self.controller.complete_generation_after_delay(pending).await?;
        Ok(())
    }

    fn device(&mut self, value: Option<String>) {
        match value.as_deref().map(Device::from_str) {
            Some(Ok(device)) => {
                self.controller.select_device(device);
                let size = device.dimensions();
                println!(
                    "{}",
                    format!("Device: {} ({}x{})", device, size.width, size.height).bright_black()
                );
            }
            Some(Err(_)) => println!("{}", "Device must be desktop, tablet or mobile.".red()),
            None => {
                let device = self.controller.state().active_device;
                let size = device.dimensions();
                println!("Device: {} ({}x{})", device, size.width, size.height);
            }
        }
    }

    fn export(&mut self, format: Option<String>, path: Option<PathBuf>) -> Result<(), DesignError> {
        let format = match format.as_deref().map(ExportFormat::from_str) {
            None => ExportFormat::Html,
            Some(Ok(format)) => format,
            Some(Err(_)) => {
                println!("{}", "Export format must be html or json.".red());
                return Ok(());
            }
        };

        let artifact = self.controller.export_latest(format)?;
        match commands::export::write_artifact(&artifact, path) {
            Ok(written) => println!("{}", format!("Saved {}", written.display()).bright_green()),
            Err(e) => println!("{}", format!("{:#}", e).red()),
        }
        Ok(())
    }
}

fn set_or_show(label: &str, slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
    println!("{}", format!("{}: {}", label, slot).bright_black());
}

fn print_message(message: &ChatMessage) {
    match message.role {
        ChatRole::User => println!("{}", format!("> {}", message.text).green()),
        ChatRole::Assistant => {
            for line in message.text.lines() {
                println!("{}", line.bright_blue());
            }
        }
    }
}

fn print_help() {
    let lines = [
        ("/auth, /demo, /pricing", "open the login page"),
        ("/back", "return to the landing page"),
        ("/login", "sign in with name, email, password and company"),
        ("/guest", "continue to the dashboard with the guest profile"),
        ("/logout", "sign out"),
        ("/template <name>", "set the template used for generation"),
        ("/tone <name>", "set the tone used for generation"),
        ("/device <desktop|tablet|mobile>", "set the preview device"),
        ("/export <html|json> [path]", "export the latest design"),
        ("/status", "show the workspace summary"),
        ("/preview", "print the latest preview document"),
        ("/clear, /new", "clear the chat or start a new project"),
        ("/quit", "exit"),
    ];
    for (command, description) in lines {
        println!("  {:<34} {}", command.bright_cyan(), description.bright_black());
    }
    println!("  {}", "Anything else is sent as a design prompt.".bright_black());
}

pub async fn run(controller: WorkspaceController) -> Result<()> {
    let helper = CliHelper::new();
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== DesignAI ===".bright_magenta().bold());
    println!("{}", "Type '/help' for commands, or '/quit' to exit.".bright_black());
    println!();

    let mut repl = Repl::new(controller);
    repl.flush();

    loop {
        let readline = rl.readline(&repl.prompt());

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if !repl.execute(Command::parse(trimmed), &mut rl).await? {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
