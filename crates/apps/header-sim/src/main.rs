//! header-sim - Replays scripted sessions against the header controller
//!
//! Usage: `header-sim [script.json] [--open-links]`
//!
//! Runs over the in-memory history service and logs the render model after
//! every step. The dark-mode preference is read from and written to the
//! ZinZen config directory.

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use header::{
    AppActions, ButtonRole, DeferredInstallPrompt, FileFlagStore, FlagStore, GOALS_PATH, Header,
    HeaderButton, HeaderContext, HistoryService, InMemoryFlagStore, InMemoryHistory,
    InstallOutcome, InstallPromptEvent, RecordingAppActions, StaticTranslator, SystemAppActions,
    ToastLog, UserChoice,
};

mod script;

use script::{Script, Step};

/// Locale table in the config directory, if the user provides one
const LOCALE_FILE: &str = "locale.json";

/// Install prompt that answers every dialog with a fixed outcome
struct ScriptedPrompt {
    outcome: InstallOutcome,
}

impl DeferredInstallPrompt for ScriptedPrompt {
    fn prompt(&self) -> Result<tokio::sync::oneshot::Receiver<UserChoice>> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let choice = UserChoice {
            outcome: self.outcome,
            platform: Some("web".to_string()),
        };
        // The receiver is returned below, so the send cannot fail
        let _ = tx.send(choice);
        Ok(rx)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "header-sim",
    version,
    about = "Replay scripted sessions against the ZinZen header controller"
)]
struct Args {
    /// Session script (JSON); the built-in demo session runs when omitted
    script: Option<PathBuf>,

    /// Open donate/blog links in the system browser instead of recording them
    #[arg(long)]
    open_links: bool,
}

fn english() -> StaticTranslator {
    StaticTranslator::new()
        .with("mygoals", "My Goals")
        .with("donate", "Donate")
        .with("feedback", "Feedback")
        .with("blog", "Blog")
        .with("backup", "Backup")
        .with("changeTheme", "Change Theme")
}

fn load_translator() -> StaticTranslator {
    if !config::config_exists(LOCALE_FILE) {
        return english();
    }
    match config::load_json::<StaticTranslator>(LOCALE_FILE) {
        Ok(translator) => translator,
        Err(e) => {
            warn!("Ignoring locale file: {:#}", e);
            english()
        }
    }
}

fn load_flags() -> Arc<dyn FlagStore> {
    match FileFlagStore::open_default() {
        Ok(store) => {
            info!("Preferences at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            warn!("Preferences unavailable, using memory: {:#}", e);
            Arc::new(InMemoryFlagStore::new())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let args = Args::parse();
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::demo()?,
    };

    let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
    let (host_tx, mut host_rx) = mpsc::unbounded_channel();
    let actions: Arc<dyn AppActions> = if args.open_links {
        Arc::new(SystemAppActions::new(host_tx))
    } else {
        Arc::new(RecordingAppActions::new())
    };
    let ctx = HeaderContext::new(
        history.clone(),
        Arc::new(load_translator()),
        load_flags(),
        Arc::new(ToastLog::new()),
        actions,
    );
    ctx.state.set_show_inbox(script.show_inbox);

    let mut hints = HeaderButton::new(ButtonRole::Hints, ctx.clone());
    let mut header = Header::new(script.title.clone(), ctx).with_search(script.has_search);
    header.mount();
    info!("Mounted: {:?}", header.render_model());

    for (index, step) in script.steps.into_iter().enumerate() {
        info!("Step {}: {:?}", index + 1, step);
        match step {
            Step::Click(role) => {
                let outcome = match ButtonRole::from(role) {
                    ButtonRole::Hints => hints.click(),
                    role => header.click(role),
                };
                info!("  -> {:?}", outcome);
            }
            Step::Navigate { path, state } => history.navigate(&path, state)?,
            Step::Back(steps) => {
                if let Err(e) = history.go_back(steps) {
                    warn!("  back ignored: {:#}", e);
                }
            }
            Step::Forward(steps) => {
                if let Err(e) = history.go_forward(steps) {
                    warn!("  forward ignored: {:#}", e);
                }
            }
            Step::Menu(key) => {
                let selection = header.select_menu_key(&key);
                info!("  -> {:?}", selection);
            }
            Step::InstallAvailable(outcome) => {
                let handle: Arc<dyn DeferredInstallPrompt> = Arc::new(ScriptedPrompt { outcome });
                let mut event = InstallPromptEvent::new(handle);
                header.on_install_available(&mut event);
            }
            Step::Install => {
                let outcome = header.install().await;
                info!("  -> install {:?}", outcome);
            }
            Step::ShowInbox(show) => header.context().state.set_show_inbox(show),
        }

        header.sync_location();
        while let Ok(action) = host_rx.try_recv() {
            info!("  host action: {:?}", action);
        }
        info!("  {:?}", header.render_model());
    }

    header.unmount();
    info!(
        "Session finished at {} ({} history entries)",
        history.current_location().path,
        history.entry_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_demo_session() {
        let args = Args::try_parse_from(["header-sim"]).unwrap();
        assert!(args.script.is_none());
        assert!(!args.open_links);
    }

    #[test]
    fn test_script_and_open_links() {
        let args = Args::try_parse_from(["header-sim", "--open-links", "session.json"]).unwrap();
        assert_eq!(args.script, Some(PathBuf::from("session.json")));
        assert!(args.open_links);
    }

    #[test]
    fn test_help_and_unknown_flags_are_not_scripts() {
        let help = Args::try_parse_from(["header-sim", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let unknown = Args::try_parse_from(["header-sim", "--verbose"]).unwrap_err();
        assert_eq!(unknown.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
