//! Console adapter for the portal form controller.
//!
//! Stands in for the browser page: field edits and clicks become commands on
//! stdin, view updates and notices are printed, and confirmations block on a
//! y/n answer. The checkout hand-off is printed instead of navigating, since
//! the final form POST to the payment processor belongs to a real page.

use std::env;
use std::io::{self, Write};
use std::sync::Mutex;

use config::{Config, Environment, File};
use dotenvy::dotenv;

use autopay_portal::controller::PortalController;
use autopay_portal::domain::session::Attachment;
use autopay_portal::gateway::HttpGateway;
use autopay_portal::models::config::PortalConfig;
use autopay_portal::ui::{FormView, MessageKind, Notice, ViewPatch};

#[derive(Default)]
struct ConsoleView {
    suggestions: Mutex<Vec<String>>,
}

impl ConsoleView {
    fn suggestion(&self, index: usize) -> Option<String> {
        self.suggestions.lock().ok()?.get(index).cloned()
    }
}

impl FormView for ConsoleView {
    fn apply(&self, patch: &ViewPatch) {
        if let Some(items) = &patch.suggestions {
            if let Ok(mut stored) = self.suggestions.lock() {
                *stored = items.clone();
            }
            for (i, item) in items.iter().enumerate() {
                println!("  [{i}] {item}");
            }
        }
        if let Some((indicator, true)) = patch.busy {
            println!("... {indicator:?} busy");
        }
        if patch.name_enabled == Some(true) {
            println!("(name input enabled)");
        }
        if patch.disable_submit {
            println!("(submit disabled)");
        }
    }

    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Alert(message) => println!("[ALERT] {message}"),
            Notice::Warning(message) => println!("[warning] {message}"),
            Notice::Success(message) => println!("{message}"),
        }
    }

    fn clear(&self, _kind: MessageKind) {}

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

fn load_config() -> io::Result<PortalConfig> {
    let config_path = env::var("PORTAL_CONFIG").unwrap_or_else(|_| "portal.yaml".to_string());
    Config::builder()
        .add_source(File::with_name(&config_path).required(false))
        .add_source(Environment::with_prefix("PORTAL"))
        .build()
        .map_err(|e| io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize::<PortalConfig>()
        .map_err(|e| io::Error::other(format!("Invalid configuration: {e}")))
}

const HELP: &str = "commands:
  mode                toggle registration/payment
  fee <type>          change fee type (re-fetches the roster)
  part <name>         change part/category (re-fetches the roster)
  name <text>         type into the name input
  pick <n>            select suggestion n
  id <value>          type the registration number / phone
  amount <value>      type the payment amount
  file <path>         attach a roster file (empty path detaches)
  donate on|off       toggle the donate opt-in (checkout page)
  submit              submit the entry form
  checkout            run the public payment flow
  show                print the session state
  quit";

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let portal_config = load_config()?;
    let gateway = HttpGateway::new(&portal_config);
    let view = ConsoleView::default();
    let mut controller = PortalController::new(gateway, &view, &portal_config);

    println!("{HELP}");
    let _ = controller.startup().await;

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "mode" => {
                let mode = controller.mode_toggled();
                println!("mode: {}", mode.label());
            }
            "fee" => {
                let _ = controller.fee_type_changed(rest.to_string()).await;
            }
            "part" => {
                let _ = controller.part_changed(rest.to_string()).await;
            }
            "name" => controller.name_typed(rest.to_string()),
            "pick" => match rest.parse::<usize>().ok().and_then(|i| view.suggestion(i)) {
                Some(choice) => controller.suggestion_picked(&choice),
                None => println!("no such suggestion"),
            },
            "id" => controller.identifier_typed(rest.to_string()),
            "amount" => controller.amount_typed(rest.to_string()),
            "file" => {
                if rest.is_empty() {
                    controller.file_attached(None);
                } else {
                    match std::fs::read(rest) {
                        Ok(bytes) => controller.file_attached(Some(Attachment::new(rest, bytes))),
                        Err(e) => println!("cannot read {rest}: {e}"),
                    }
                }
            }
            "donate" => controller.donate_toggled(rest == "on"),
            "submit" => {
                let _ = controller.entry_submitted().await;
            }
            "checkout" => {
                if let Ok(Some(handoff)) = controller.checkout_submitted().await {
                    println!("hand-off form for the payment processor:");
                    for (field, value) in handoff.form_fields() {
                        println!("  {field} = {value}");
                    }
                }
            }
            "show" => {
                let session = controller.session();
                println!(
                    "mode={:?} fee_type={:?} part={:?} name={:?} id={:?} amount={:?} donate={} roster={} entries",
                    session.mode,
                    session.fee_type,
                    session.part,
                    session.name,
                    session.identifier,
                    session.amount,
                    session.donate,
                    session.roster.len(),
                );
            }
            "quit" | "exit" => break,
            _ => println!("{HELP}"),
        }
    }

    Ok(())
}
