use std::{path::PathBuf, sync::Mutex};

use dotenvy::dotenv;
use log::warn;
use migrator_client::{
    model::{playlist::PlaylistOption, report::TransferReport, CredentialsFile},
    Action, Dispatcher, MigratorClientBuilder, StatusElement, Ui,
};
use reqwest::Url;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: login | file <path> | upload | load | select <number or id> | transfer | quit";

#[derive(Default)]
struct ConsoleUi {
    state: Mutex<ConsoleState>,
}

#[derive(Default)]
struct ConsoleState {
    file: Option<PathBuf>,
    options: Vec<PlaylistOption>,
    selected: Option<String>,
}

impl ConsoleUi {
    fn state(&self) -> std::sync::MutexGuard<'_, ConsoleState> {
        self.state.lock().expect("console state mutex poisoned")
    }

    fn pick_file(&self, path: &str) {
        self.state().file = Some(PathBuf::from(path));
    }

    fn select(&self, choice: &str) {
        let mut state = self.state();

        let selected = match choice.parse::<usize>() {
            Ok(number) => state.options.get(number.wrapping_sub(1)).map(|option| option.value.clone()),
            Err(_) => state
                .options
                .iter()
                .find(|option| option.value == choice)
                .map(|option| option.value.clone()),
        };

        match selected {
            Some(value) => state.selected = Some(value),
            None => println!("no such playlist: {choice}"),
        }
    }
}

impl Ui for ConsoleUi {
    fn open_url(&self, url: &Url) {
        if let Err(err) = webbrowser::open(url.as_str()) {
            warn!("Failed to open browser: {}", err);
        }

        println!("log in at {url}");
    }

    fn selected_file(&self) -> Option<CredentialsFile> {
        let path = self.state().file.clone()?;

        match CredentialsFile::from_path(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                warn!("Failed to read {}: {}", path.display(), err);
                None
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("!! {message}");
    }

    fn set_status(&self, element: StatusElement, text: &str) {
        println!("[{element}] {text}");
    }

    fn replace_options(&self, options: Vec<PlaylistOption>) {
        for (number, option) in options.iter().enumerate() {
            println!("{:>3}. {}", number + 1, option.label);
        }

        let mut state = self.state();
        // a fresh list starts with its first playlist selected, like a dropdown would
        state.selected = options.first().map(|option| option.value.clone());
        state.options = options;
    }

    fn selected_playlist(&self) -> Option<String> {
        self.state().selected.clone()
    }

    fn render_report(&self, text: &str) {
        println!("{text}");
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client = MigratorClientBuilder::from_env()
        .build()
        .expect("failed to build migrator client");

    let dispatcher = Dispatcher::new(client, ConsoleUi::default());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let (command, argument) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));

        let action = match command {
            "login" => Action::Login,
            "upload" => Action::UploadCredentials,
            "load" => Action::LoadPlaylists,
            "file" => {
                dispatcher.ui().pick_file(argument.trim());
                continue;
            }
            "select" => {
                dispatcher.ui().select(argument.trim());
                continue;
            }
            "transfer" => {
                // the report was already printed verbatim, add a short summary when it has the usual shape
                if let Ok(report) = dispatcher.transfer_selected().await {
                    if let Some(report) = TransferReport::from_value(&report) {
                        println!(
                            "matched {} of {} tracks ({} confidently)",
                            report.matches().len(),
                            report.total_spotify_tracks(),
                            report.confident_matches().count()
                        );
                    }
                }
                continue;
            }
            "quit" | "exit" => break,
            "" => continue,
            _ => {
                println!("{HELP}");
                continue;
            }
        };

        if let Err(err) = dispatcher.dispatch(action).await {
            warn!("{} failed: {}", action, err);
        }
    }
}
