//! Command-line front end.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;

use leavedesk::avatar::encode_avatar;
use leavedesk::config::Config;
use leavedesk::features::leave_summary::{LeaveSummary, LeaveSummaryIntent};
use leavedesk::flows::{self, LeaveForm, ProfileDraft, ValidationError};
use leavedesk::notify::{Alert, ChannelNotifier, Notifier};
use leavedesk::store::selectors;
use leavedesk::{App, AppState};

#[derive(Debug, Parser)]
#[command(name = "leavedesk", version, about = "Track leave requests and balances")]
pub struct Cli {
    /// Config file (default: ~/.config/leavedesk/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the directory persisted state is stored in
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show or edit the signed-in user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Image file to use as avatar
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// List registered users
    Users,
    /// Add, edit or review a leave request
    #[command(subcommand)]
    Request(RequestCommand),
    /// List leave requests, newest first
    Requests,
    /// Show or change the leave summary
    Summary {
        #[command(subcommand)]
        action: Option<SummaryCommand>,
    },
    /// Reset the leave summary and delete all requests
    Reset,
    /// Delete all persisted data
    Purge,
}

#[derive(Debug, Subcommand)]
enum RequestCommand {
    Add {
        /// Leave date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long = "type")]
        leave_type: String,
    },
    Edit {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long = "type")]
        leave_type: String,
    },
    Approve {
        #[arg(long)]
        id: u64,
    },
    Reject {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
enum SummaryCommand {
    Set {
        #[arg(long)]
        total: u32,
        #[arg(long)]
        taken: u32,
        #[arg(long)]
        remaining: u32,
    },
    Reset,
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    // Decode before touching the store so a bad file changes nothing.
    let avatar = match &cli.command {
        Command::Profile {
            avatar: Some(path), ..
        } => Some(encode_avatar(path).with_context(|| format!("cannot use {} as avatar", path.display()))?),
        _ => None,
    };

    let app = App::open(&config).await;
    let (notifier, mut alerts) = ChannelNotifier::new();

    let outcome = execute(&app, &notifier, cli.command, avatar).await;

    app.close().await;
    print_alerts(&mut alerts);

    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

async fn execute(
    app: &App,
    notifier: &dyn Notifier,
    command: Command,
    avatar: Option<String>,
) -> Result<(), ValidationError> {
    let store = app.store();
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            let user = flows::signup(store, notifier, &name, &email, &password)?;
            println!("Signed up as {} <{}>", user.name, user.email);
        }
        Command::Login { email, password } => {
            let user = flows::login(store, notifier, &email, &password)?;
            println!("Welcome back, {}", user.name);
        }
        Command::Logout => {
            if flows::logout(store) {
                println!("Signed out");
            } else {
                println!("Not signed in");
            }
        }
        Command::Whoami => match store.with_state_ref(|s| selectors::current_user(s).cloned()) {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not signed in"),
        },
        Command::Profile {
            name,
            phone,
            address,
            ..
        } => {
            let draft = ProfileDraft {
                name,
                phone,
                address,
                avatar,
            };
            let user = if draft.is_empty() {
                match store.with_state_ref(|s| selectors::current_user(s).cloned()) {
                    Some(user) => user,
                    None => {
                        notifier.notify(Alert::error(ValidationError::NotSignedIn.to_string()));
                        return Err(ValidationError::NotSignedIn);
                    }
                }
            } else {
                flows::save_profile(store, notifier, draft)?
            };
            println!("Name:    {}", user.name);
            println!("Email:   {}", user.email);
            println!("Phone:   {}", user.phone.as_deref().unwrap_or("-"));
            println!("Address: {}", user.address.as_deref().unwrap_or("-"));
            println!("Avatar:  {}", if user.avatar.is_some() { "set" } else { "-" });
        }
        Command::Users => store.with_state_ref(|s| {
            for user in selectors::users_list(s) {
                println!("{} <{}>", user.name, user.email);
            }
        }),
        Command::Request(request) => {
            let saved = match request {
                RequestCommand::Add { date, leave_type } => flows::submit_leave(
                    store,
                    notifier,
                    LeaveForm {
                        id: None,
                        date: Some(date),
                        leave_type,
                    },
                )?,
                RequestCommand::Edit {
                    id,
                    date,
                    leave_type,
                } => flows::submit_leave(
                    store,
                    notifier,
                    LeaveForm {
                        id: Some(id),
                        date: Some(date),
                        leave_type,
                    },
                )?,
                RequestCommand::Approve { id } => flows::approve_request(store, notifier, id)?,
                RequestCommand::Reject { id } => flows::reject_request(store, notifier, id)?,
            };
            println!("{}\t{}\t{}\t{}", saved.id, saved.date, saved.leave_type, saved.status);
        }
        Command::Requests => store.with_state_ref(|s| {
            for request in selectors::recent_requests(s) {
                println!(
                    "{}\t{}\t{}\t{}",
                    request.id, request.date, request.leave_type, request.status
                );
            }
        }),
        Command::Summary { action } => {
            match action {
                Some(SummaryCommand::Set {
                    total,
                    taken,
                    remaining,
                }) => {
                    store.dispatch(LeaveSummaryIntent::SetAll(LeaveSummary::new(total, taken, remaining)));
                }
                Some(SummaryCommand::Reset) => {
                    store.dispatch(LeaveSummaryIntent::Reset);
                }
                None => {}
            }
            store.with_state_ref(print_summary);
        }
        Command::Reset => {
            flows::reset_data(store);
            println!("Leave data reset");
        }
        Command::Purge => {
            app.purge().await;
            println!("Persisted data deleted");
        }
    }
    Ok(())
}

fn print_summary(state: &AppState) {
    let summary = selectors::leave_summary(state);
    let tally = selectors::request_tally(state);
    println!(
        "Total: {}  Taken: {}  Remaining: {}",
        summary.total, summary.taken, summary.remaining
    );
    println!(
        "Requests: {}  Pending: {}  Approved: {}  Rejected: {}",
        tally.total, tally.pending, tally.approved, tally.rejected
    );
}

fn print_alerts(alerts: &mut UnboundedReceiver<Alert>) {
    while let Ok(alert) = alerts.try_recv() {
        eprintln!("{alert}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_add() {
        let cli = Cli::try_parse_from([
            "leavedesk",
            "request",
            "add",
            "--date",
            "2025-04-01",
            "--type",
            "Annual",
        ])
        .unwrap();
        match cli.command {
            Command::Request(RequestCommand::Add { date, leave_type }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
                assert_eq!(leave_type, "Annual");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "leavedesk",
            "request",
            "add",
            "--date",
            "01/04/2025",
            "--type",
            "Annual",
        ]);
        assert!(result.is_err());
    }
}
