mod storage;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use api::types::{AuthResponse, LoginCredentials};
use api::{ApiClient, ApiConfig, ApiError, ApiRequest};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use session::{AuthContext, Credentials, Navigation, Role, RouteGuard, SessionError, SessionStorage};
use time::Date;
use time::macros::format_description;

use crate::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `backoffice login` first")]
    NotLoggedIn,
    #[error("this command requires the ADMIN role")]
    Forbidden,
    #[error("cannot locate a home directory; pass --session-file or set BACKOFFICE_SESSION_FILE")]
    NoSessionPath,
    #[error("invalid date `{0}`; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session could not be saved: {0}")]
    Session(#[from] SessionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "backoffice", about = "Law-firm back-office CLI")]
struct Cli {
    #[arg(long, env = "BACKOFFICE_API_URL", default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "BACKOFFICE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log session and request details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BACKOFFICE_PASSWORD")]
        password: String,
    },
    Logout,
    Whoami,
    Customers(CustomersCommand),
    Processes(ProcessesCommand),
    Fees(FeesCommand),
    Users(UsersCommand),
    Summary {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
}

#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
struct CustomersCommand {
    #[command(subcommand)]
    command: RecordSubcommand,
}

#[derive(Args, Debug)]
struct ProcessesCommand {
    #[command(subcommand)]
    command: RecordSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecordSubcommand {
    List(PageArgs),
    Show { id: String },
    Delete { id: String },
}

#[derive(Args, Debug)]
struct FeesCommand {
    #[command(subcommand)]
    command: FeesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FeesSubcommand {
    List,
    Show {
        id: String,
    },
    Delete {
        id: String,
    },
    PayInstallment {
        installment_id: String,
        /// Date received, `YYYY-MM-DD`; defaults to today (UTC).
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Show { id: String },
}

struct CliContext {
    auth: AuthContext<FileStorage>,
    api: ApiClient,
    http: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.session_file.or_else(storage::default_path).ok_or(CliError::NoSessionPath)?;
    let credentials = Credentials::new();
    let mut ctx = CliContext {
        auth: AuthContext::new(FileStorage::new(path), credentials.clone()),
        api: ApiClient::new(ApiConfig::from_override(Some(&cli.base_url)), credentials),
        http: reqwest::Client::new(),
    };
    ctx.auth.initialize("/");

    match cli.command {
        Command::Login { email, password } => run_login(&mut ctx, email, password).await,
        Command::Logout => {
            ctx.auth.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            require(&mut ctx.auth, None)?;
            let user = ctx.auth.user().ok_or(CliError::NotLoggedIn)?;
            print_json(&serde_json::to_value(user)?)
        }
        Command::Customers(cmd) => run_customers(&mut ctx, cmd.command).await,
        Command::Processes(cmd) => run_processes(&mut ctx, cmd.command).await,
        Command::Fees(cmd) => run_fees(&mut ctx, cmd.command).await,
        Command::Users(cmd) => run_users(&mut ctx, cmd.command).await,
        Command::Summary { month, year } => {
            if !(1..=12).contains(&month) {
                return Err(CliError::InvalidMonth(month));
            }
            require(&mut ctx.auth, None)?;
            let json = send_json(&ctx.http, ctx.api.financial_summary(month, year)).await?;
            print_json(&json)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

/// Run the route guard for a command; a denial becomes the matching error.
///
/// An unauthenticated run clears whatever session is left on disk.
fn require<S: SessionStorage>(auth: &mut AuthContext<S>, role: Option<Role>) -> Result<(), CliError> {
    let mut redirect = None;
    let mut guard = RouteGuard::new(role);
    if guard.evaluate(auth, &mut |to: Navigation| redirect = Some(to)) {
        return Ok(());
    }
    match redirect {
        Some(Navigation::Home) => Err(CliError::Forbidden),
        Some(Navigation::Login) | None => Err(CliError::NotLoggedIn),
    }
}

fn parse_date(raw: Option<&str>) -> Result<String, CliError> {
    let format = format_description!("[year]-[month]-[day]");
    let date = match raw {
        Some(raw) => Date::parse(raw.trim(), format).map_err(|_| CliError::InvalidDate(raw.to_owned()))?,
        None => time::OffsetDateTime::now_utc().date(),
    };
    date.format(format).map_err(|_| CliError::InvalidDate(date.to_string()))
}

async fn run_login(ctx: &mut CliContext, email: String, password: String) -> Result<(), CliError> {
    let credentials = LoginCredentials { email: email.trim().to_owned(), password };
    let (status, body) = send(&ctx.http, ctx.api.login(&credentials)?).await?;
    let resp: AuthResponse = api::decode(status, &body)?;
    let name = resp.user.display_name().to_owned();
    let role = resp.user.role;
    ctx.auth.login(&resp.token, resp.user)?;
    println!("logged in as {name} ({})", role.label());
    Ok(())
}

async fn run_customers(ctx: &mut CliContext, command: RecordSubcommand) -> Result<(), CliError> {
    require(&mut ctx.auth, None)?;
    let request = match command {
        RecordSubcommand::List(args) => {
            ctx.api.customers(args.page, args.limit.unwrap_or(api::pagination::CUSTOMER_PAGE_SIZE))
        }
        RecordSubcommand::Show { id } => ctx.api.customer(&id),
        RecordSubcommand::Delete { id } => return delete(&ctx.http, ctx.api.delete_customer(&id), &id).await,
    };
    print_json(&send_json(&ctx.http, request).await?)
}

async fn run_processes(ctx: &mut CliContext, command: RecordSubcommand) -> Result<(), CliError> {
    require(&mut ctx.auth, None)?;
    let request = match command {
        RecordSubcommand::List(args) => {
            ctx.api.processes(args.page, args.limit.unwrap_or(api::pagination::PROCESS_PAGE_SIZE))
        }
        RecordSubcommand::Show { id } => ctx.api.process(&id),
        RecordSubcommand::Delete { id } => return delete(&ctx.http, ctx.api.delete_process(&id), &id).await,
    };
    print_json(&send_json(&ctx.http, request).await?)
}

async fn run_fees(ctx: &mut CliContext, command: FeesSubcommand) -> Result<(), CliError> {
    require(&mut ctx.auth, None)?;
    let request = match command {
        FeesSubcommand::List => ctx.api.fees(),
        FeesSubcommand::Show { id } => ctx.api.fee(&id),
        FeesSubcommand::Delete { id } => return delete(&ctx.http, ctx.api.delete_fee(&id), &id).await,
        FeesSubcommand::PayInstallment { installment_id, date } => {
            let received_on = parse_date(date.as_deref())?;
            let request = ctx.api.mark_installment_paid(&installment_id, &received_on)?;
            let (status, body) = send(&ctx.http, request).await?;
            api::decode_empty(status, &body)?;
            println!("installment {installment_id} marked as received on {received_on}");
            return Ok(());
        }
    };
    print_json(&send_json(&ctx.http, request).await?)
}

async fn run_users(ctx: &mut CliContext, command: UsersSubcommand) -> Result<(), CliError> {
    require(&mut ctx.auth, Some(Role::Admin))?;
    let request = match command {
        UsersSubcommand::List => ctx.api.users(),
        UsersSubcommand::Show { id } => ctx.api.user(&id),
    };
    print_json(&send_json(&ctx.http, request).await?)
}

async fn delete(http: &reqwest::Client, request: ApiRequest, id: &str) -> Result<(), CliError> {
    let (status, body) = send(http, request).await?;
    api::decode_empty(status, &body)?;
    println!("deleted {id}");
    Ok(())
}

async fn send_json(http: &reqwest::Client, request: ApiRequest) -> Result<Value, CliError> {
    let (status, body) = send(http, request).await?;
    if body.trim().is_empty() {
        api::decode_empty(status, &body)?;
        return Ok(Value::Null);
    }
    Ok(api::decode(status, &body)?)
}

fn http_method(method: api::Method) -> reqwest::Method {
    match method {
        api::Method::Get => reqwest::Method::GET,
        api::Method::Post => reqwest::Method::POST,
        api::Method::Patch => reqwest::Method::PATCH,
        api::Method::Delete => reqwest::Method::DELETE,
    }
}

async fn send(http: &reqwest::Client, request: ApiRequest) -> Result<(u16, String), CliError> {
    tracing::debug!(method = %request.method, url = %request.url, "request");
    let mut builder = http.request(http_method(request.method), &request.url);
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }
    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    tracing::debug!(status, "response");
    Ok((status, body))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
