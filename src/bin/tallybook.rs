//! CLI binary for the tallybook finance tracker.

use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use tallybook::action::Action;
use tallybook::chart::{ChartOptions, render_donut};
use tallybook::interchange::{export_file_name, export_json, import_json};
use tallybook::models::{
    Category, CategoryFilter, DateRange, FilterUpdate, Theme, Transaction, TransactionId,
    TransactionKind,
};
use tallybook::storage::{FileStorage, Storage};
use tallybook::store::Store;
use tallybook::views::{
    CategoryTotal, MonthlySummary, Totals, chart_slices, expense_by_category, filtered,
    monthly_summary, totals,
};

/// Tallybook — track income and expenses from the terminal.
#[derive(Debug, Parser)]
#[command(name = "tallybook", version, about)]
struct Cli {
    /// Override the storage directory (default: XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new transaction.
    Add(AddArgs),
    /// Delete a transaction by ID.
    Delete {
        /// ID of the transaction to delete.
        id: String,
    },
    /// Undo the most recent add or delete.
    Undo,
    /// List transactions, optionally filtered.
    List(ListArgs),
    /// Show income, expense, and balance totals.
    Totals,
    /// Show per-month income and expense summaries.
    Monthly,
    /// Show expense totals per category.
    Categories,
    /// Render the expense breakdown as an SVG donut chart.
    Chart {
        /// Write the SVG here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Export all transactions as a JSON file.
    Export {
        /// Output path (default: transactions-<today>.json).
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import transactions from a JSON file.
    Import {
        /// Path of the JSON array to import.
        input: PathBuf,
    },
    /// Switch the UI theme.
    Theme {
        /// New theme (dark or light).
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Switch the display currency code.
    Currency {
        /// Currency code (e.g. USD, EUR).
        code: String,
    },
}

/// Arguments for the `add` subcommand.
#[derive(Debug, Args)]
struct AddArgs {
    /// Free-text description.
    #[arg(long)]
    description: String,
    /// Amount (>= 0).
    #[arg(long)]
    amount: f64,
    /// income or expense.
    #[arg(long, value_parser = parse_kind)]
    kind: TransactionKind,
    /// Spending category.
    #[arg(long, value_parser = parse_category, default_value = "other")]
    category: Category,
    /// Transaction date (YYYY-MM-DD, default: now).
    #[arg(long, value_parser = parse_date)]
    date: Option<DateTime<Utc>>,
}

/// Arguments for the `list` subcommand.
#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive substring matched against descriptions.
    #[arg(long)]
    search: Option<String>,
    /// Restrict to one category ("all" for everything).
    #[arg(long, value_parser = parse_category_filter)]
    category: Option<CategoryFilter>,
    /// Relative date window (all, today, week, month, year).
    #[arg(long, value_parser = parse_date_range)]
    range: Option<DateRange>,
    /// Minimum amount (inclusive).
    #[arg(long)]
    min_price: Option<f64>,
    /// Maximum amount (inclusive).
    #[arg(long)]
    max_price: Option<f64>,
}

// ── Value parsers ────────────────────────────────────────────────────

/// Parses a transaction kind for clap.
fn parse_kind(raw: &str) -> Result<TransactionKind, String> {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(format!("invalid kind: {other} (expected income|expense)")),
    }
}

/// Parses a category for clap.
fn parse_category(raw: &str) -> Result<Category, String> {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        "food" => Ok(Category::Food),
        "rent" => Ok(Category::Rent),
        "transport" => Ok(Category::Transport),
        "shopping" => Ok(Category::Shopping),
        "entertainment" => Ok(Category::Entertainment),
        "salary" => Ok(Category::Salary),
        "other" => Ok(Category::Other),
        unknown => Err(format!("invalid category: {unknown}")),
    }
}

/// Parses a category filter for clap (`all` or a category name).
fn parse_category_filter(raw: &str) -> Result<CategoryFilter, String> {
    let lower = raw.to_lowercase();
    if lower == "all" {
        Ok(CategoryFilter::All)
    } else {
        parse_category(&lower).map(CategoryFilter::from)
    }
}

/// Parses a date window for clap.
fn parse_date_range(raw: &str) -> Result<DateRange, String> {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        "all" => Ok(DateRange::All),
        "today" => Ok(DateRange::Today),
        "week" => Ok(DateRange::Week),
        "month" => Ok(DateRange::Month),
        "year" => Ok(DateRange::Year),
        other => Err(format!(
            "invalid range: {other} (expected all|today|week|month|year)"
        )),
    }
}

/// Parses a `YYYY-MM-DD` date for clap, anchored at midnight UTC.
fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| format!("{err}"))
}

// ── Entry point ──────────────────────────────────────────────────────

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let storage = match create_storage(cli.data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize storage: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let store = match Store::open(storage) {
        Ok(store) => store,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to load state: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    dispatch(&store, cli.command)
}

/// Creates the storage backend, using `data_dir` if provided or the
/// default XDG data directory otherwise.
fn create_storage(data_dir: Option<PathBuf>) -> tallybook::error::Result<FileStorage> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    FileStorage::new(dir)
}

/// Dispatches to the appropriate subcommand handler.
fn dispatch<S: Storage>(store: &Store<S>, command: Command) -> io::Result<ExitCode> {
    match command {
        Command::Add(args) => cmd_add(store, args),
        Command::Delete { id } => cmd_delete(store, &id),
        Command::Undo => cmd_undo(store),
        Command::List(args) => cmd_list(store, args),
        Command::Totals => cmd_totals(store),
        Command::Monthly => cmd_monthly(store),
        Command::Categories => cmd_categories(store),
        Command::Chart { output } => cmd_chart(store, output),
        Command::Export { output } => cmd_export(store, output),
        Command::Import { input } => cmd_import(store, &input),
        Command::Theme { theme } => cmd_theme(store, theme),
        Command::Currency { code } => cmd_currency(store, code),
    }
}

// ── Subcommand handlers ──────────────────────────────────────────────

/// Executes the `add` subcommand: records a new transaction.
fn cmd_add<S: Storage>(store: &Store<S>, args: AddArgs) -> io::Result<ExitCode> {
    if args.amount < 0.0_f64 {
        writeln!(
            io::stderr().lock(),
            "{} amount must be non-negative",
            "error:".red().bold()
        )?;
        return Ok(ExitCode::FAILURE);
    }

    let transaction = Transaction {
        id: TransactionId::new(uuid::Uuid::new_v4().to_string()),
        description: args.description,
        amount: args.amount,
        kind: args.kind,
        category: args.category,
        date: args.date.unwrap_or_else(Utc::now),
    };
    let id = transaction.id.clone();
    let description = transaction.description.clone();
    store.dispatch(Action::AddTransaction(transaction));

    writeln!(
        io::stdout().lock(),
        "{} {description} {}",
        "Added".green().bold(),
        format_args!("({id})").dimmed()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `delete` subcommand: removes a transaction by ID.
fn cmd_delete<S: Storage>(store: &Store<S>, id: &str) -> io::Result<ExitCode> {
    let target = TransactionId::new(id.to_owned());
    let known = store.state().transactions.iter().any(|tx| tx.id == target);
    if !known {
        writeln!(
            io::stderr().lock(),
            "{} no transaction with id {id}",
            "error:".red().bold()
        )?;
        return Ok(ExitCode::FAILURE);
    }

    store.dispatch(Action::DeleteTransaction(target));
    writeln!(io::stdout().lock(), "{} {id}", "Deleted".green().bold())?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `undo` subcommand: inverts the most recent operation.
fn cmd_undo<S: Storage>(store: &Store<S>) -> io::Result<ExitCode> {
    if store.state().history.is_empty() {
        writeln!(io::stdout().lock(), "{}", "Nothing to undo.".dimmed())?;
        return Ok(ExitCode::SUCCESS);
    }
    store.undo();
    writeln!(io::stdout().lock(), "{}", "Undone.".green().bold())?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `list` subcommand: prints transactions matching the
/// stored filters with any CLI flags merged on top.
fn cmd_list<S: Storage>(store: &Store<S>, args: ListArgs) -> io::Result<ExitCode> {
    let state = store.state();
    let filter = state.filters.merged(FilterUpdate {
        search: args.search,
        category: args.category,
        date_range: args.range,
        min_price: args.min_price.map(Some),
        max_price: args.max_price.map(Some),
    });
    let matched = filtered(&state.transactions, &filter, Utc::now());
    print_transactions_table(&matched, &state.currency)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `totals` subcommand.
fn cmd_totals<S: Storage>(store: &Store<S>) -> io::Result<ExitCode> {
    let state = store.state();
    let result = totals(&state.transactions);
    print_totals(&result, &state.currency)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `monthly` subcommand.
fn cmd_monthly<S: Storage>(store: &Store<S>) -> io::Result<ExitCode> {
    let state = store.state();
    let summaries = monthly_summary(&state.transactions);
    print_monthly_table(&summaries, &state.currency)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `categories` subcommand.
fn cmd_categories<S: Storage>(store: &Store<S>) -> io::Result<ExitCode> {
    let state = store.state();
    let by_category = expense_by_category(&state.transactions);
    print_categories_table(&by_category, &state.currency)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `chart` subcommand: renders the expense donut.
fn cmd_chart<S: Storage>(store: &Store<S>, output: Option<PathBuf>) -> io::Result<ExitCode> {
    let state = store.state();
    let slices = chart_slices(&expense_by_category(&state.transactions));
    let svg = render_donut(&slices, &chart_options_for(state.theme));

    match output {
        Some(path) => {
            std::fs::write(&path, svg)?;
            writeln!(
                io::stdout().lock(),
                "{} chart to {}",
                "Wrote".green().bold(),
                path.display()
            )?;
        }
        None => writeln!(io::stdout().lock(), "{svg}")?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `export` subcommand: writes transactions as JSON.
fn cmd_export<S: Storage>(store: &Store<S>, output: Option<PathBuf>) -> io::Result<ExitCode> {
    let state = store.state();
    let json = match export_json(&state.transactions) {
        Ok(json) => json,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} export failed: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
    std::fs::write(&path, json)?;
    writeln!(
        io::stdout().lock(),
        "{} {} transactions to {}",
        "Exported".green().bold(),
        state.transactions.len(),
        path.display()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `import` subcommand: reads a JSON array and adds each
/// record. A parse failure changes no state.
fn cmd_import<S: Storage>(store: &Store<S>, input: &PathBuf) -> io::Result<ExitCode> {
    let contents = std::fs::read_to_string(input)?;
    let records = match import_json(&contents) {
        Ok(records) => records,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} import failed: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let count = records.len();
    for record in records {
        store.dispatch(Action::AddTransaction(record));
    }
    writeln!(
        io::stdout().lock(),
        "{} {count} transactions",
        "Imported".green().bold()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `theme` subcommand.
fn cmd_theme<S: Storage>(store: &Store<S>, theme: Theme) -> io::Result<ExitCode> {
    let name = match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    store.dispatch(Action::SetTheme(theme));
    writeln!(
        io::stdout().lock(),
        "{} {name}",
        "Theme set to".green().bold()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `currency` subcommand.
fn cmd_currency<S: Storage>(store: &Store<S>, code: String) -> io::Result<ExitCode> {
    let display = code.to_uppercase();
    store.dispatch(Action::SetCurrency(display.clone()));
    writeln!(
        io::stdout().lock(),
        "{} {display}",
        "Currency set to".green().bold()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Parses a theme for clap.
fn parse_theme(raw: &str) -> Result<Theme, String> {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(format!("invalid theme: {other} (expected dark|light)")),
    }
}

/// Chart options matching the active theme.
fn chart_options_for(theme: Theme) -> ChartOptions {
    let background = match theme {
        Theme::Dark => "#1a1a2e".to_owned(),
        Theme::Light => "#ffffff".to_owned(),
    };
    ChartOptions {
        background,
        ..ChartOptions::default()
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Prints transactions in a table.
fn print_transactions_table(transactions: &[&Transaction], currency: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if transactions.is_empty() {
        writeln!(out, "{}", "No transactions found.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Description").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new(format!("Amount ({currency})")).fg(Color::Cyan),
        Cell::new("ID").fg(Color::Cyan),
    ]);

    for tx in transactions {
        let amount_cell = match tx.kind {
            TransactionKind::Income => {
                Cell::new(format!("+{:.2}", tx.amount)).fg(Color::Green)
            }
            TransactionKind::Expense => {
                Cell::new(format!("-{:.2}", tx.amount)).fg(Color::Red)
            }
        };
        _ = table.add_row(vec![
            Cell::new(tx.date.format("%Y-%m-%d")),
            Cell::new(&tx.description),
            Cell::new(tx.category),
            amount_cell,
            Cell::new(tx.id.as_inner()).fg(Color::DarkGrey),
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Transactions".green().bold(),
        format_args!("({})", transactions.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints the totals summary.
fn print_totals(result: &Totals, currency: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Income").fg(Color::Cyan),
        Cell::new("Expense").fg(Color::Cyan),
        Cell::new(format!("Balance ({currency})")).fg(Color::Cyan),
    ]);

    let balance_color = if result.balance < 0.0_f64 {
        Color::Red
    } else {
        Color::Green
    };
    _ = table.add_row(vec![
        Cell::new(format!("{:.2}", result.income)).fg(Color::Green),
        Cell::new(format!("{:.2}", result.expense)).fg(Color::Red),
        Cell::new(format!("{:.2}", result.balance)).fg(balance_color),
    ]);

    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints the monthly summaries in a table.
fn print_monthly_table(summaries: &[MonthlySummary], currency: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if summaries.is_empty() {
        writeln!(out, "{}", "No transactions found.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Month").fg(Color::Cyan),
        Cell::new(format!("Income ({currency})")).fg(Color::Cyan),
        Cell::new(format!("Expense ({currency})")).fg(Color::Cyan),
    ]);

    for summary in summaries {
        _ = table.add_row(vec![
            Cell::new(&summary.label),
            Cell::new(format!("{:.2}", summary.income)).fg(Color::Green),
            Cell::new(format!("{:.2}", summary.expense)).fg(Color::Red),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints the per-category expense totals in a table.
fn print_categories_table(by_category: &[CategoryTotal], currency: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if by_category.is_empty() {
        writeln!(out, "{}", "No expenses recorded.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Category").fg(Color::Cyan),
        Cell::new(format!("Spent ({currency})")).fg(Color::Cyan),
    ]);

    for entry in by_category {
        _ = table.add_row(vec![
            Cell::new(entry.category),
            Cell::new(format!("{:.2}", entry.total)).fg(Color::Red),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output — if stderr itself failed, nothing
            // we can do.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tallybook::models::AppState;
    use tallybook::storage::InMemoryStorage;

    /// Creates a store backed by in-memory storage.
    fn memory_store() -> Store<InMemoryStorage> {
        Store::open(InMemoryStorage::new()).unwrap()
    }

    /// Creates a test transaction.
    fn test_transaction(id: &str, description: &str, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            description: description.to_owned(),
            amount,
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    // ── Value parser tests ────────────────────────────────────────────

    #[test]
    fn parse_kind_valid() {
        assert_eq!(parse_kind("income").unwrap(), TransactionKind::Income);
        assert_eq!(parse_kind("EXPENSE").unwrap(), TransactionKind::Expense);
    }

    #[test]
    fn parse_kind_invalid() {
        assert!(parse_kind("transfer").is_err());
    }

    #[test]
    fn parse_category_valid() {
        assert_eq!(parse_category("food").unwrap(), Category::Food);
        assert_eq!(parse_category("Salary").unwrap(), Category::Salary);
    }

    #[test]
    fn parse_category_invalid() {
        assert!(parse_category("groceries").is_err());
    }

    #[test]
    fn parse_category_filter_all_and_single() {
        assert_eq!(parse_category_filter("all").unwrap(), CategoryFilter::All);
        assert_eq!(parse_category_filter("rent").unwrap(), CategoryFilter::Rent);
        assert!(parse_category_filter("bogus").is_err());
    }

    #[test]
    fn parse_date_range_valid() {
        assert_eq!(parse_date_range("week").unwrap(), DateRange::Week);
        assert_eq!(parse_date_range("ALL").unwrap(), DateRange::All);
    }

    #[test]
    fn parse_date_range_invalid() {
        assert!(parse_date_range("hourly").is_err());
    }

    #[test]
    fn parse_date_valid() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("01-15-2024").is_err());
    }

    #[test]
    fn parse_theme_valid_and_invalid() {
        assert_eq!(parse_theme("dark").unwrap(), Theme::Dark);
        assert_eq!(parse_theme("LIGHT").unwrap(), Theme::Light);
        assert!(parse_theme("sepia").is_err());
    }

    // ── create_storage tests ──────────────────────────────────────────

    #[test]
    fn create_storage_with_custom_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_storage(Some(dir.path().to_path_buf()));
        assert!(storage.is_ok());
    }

    #[test]
    fn create_storage_with_default_dir() {
        let storage = create_storage(None);
        assert!(storage.is_ok());
    }

    // ── cmd_* tests ──────────────────────────────────────────────────

    #[test]
    fn cmd_add_records_transaction() {
        let store = memory_store();
        let args = AddArgs {
            description: "Coffee".to_owned(),
            amount: 4.5,
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: None,
        };
        let code = cmd_add(&store, args).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(store.state().transactions.len(), 1);
    }

    #[test]
    fn cmd_add_rejects_negative_amount() {
        let store = memory_store();
        let args = AddArgs {
            description: "Bad".to_owned(),
            amount: -1.0,
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: None,
        };
        let code = cmd_add(&store, args).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert!(store.state().transactions.is_empty());
    }

    #[test]
    fn cmd_delete_known_id() {
        let store = Store::with_state(
            AppState {
                transactions: vec![test_transaction("t-1", "Lunch", 12.0)],
                ..AppState::default()
            },
            InMemoryStorage::new(),
        );
        let code = cmd_delete(&store, "t-1").unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(store.state().transactions.is_empty());
    }

    #[test]
    fn cmd_delete_unknown_id_fails_without_change() {
        let store = Store::with_state(
            AppState {
                transactions: vec![test_transaction("t-1", "Lunch", 12.0)],
                ..AppState::default()
            },
            InMemoryStorage::new(),
        );
        let code = cmd_delete(&store, "missing").unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(store.state().transactions.len(), 1);
    }

    #[test]
    fn cmd_undo_with_empty_history() {
        let store = memory_store();
        let code = cmd_undo(&store).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_undo_after_add() {
        let store = memory_store();
        store.dispatch(Action::AddTransaction(test_transaction("t-1", "x", 1.0)));
        let code = cmd_undo(&store).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(store.state().transactions.is_empty());
    }

    #[test]
    fn cmd_list_empty() {
        let store = memory_store();
        let args = ListArgs {
            search: None,
            category: None,
            range: None,
            min_price: None,
            max_price: None,
        };
        let code = cmd_list(&store, args).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_list_with_filters() {
        let store = memory_store();
        store.dispatch(Action::AddTransaction(test_transaction("t-1", "Coffee", 4.5)));
        store.dispatch(Action::AddTransaction(test_transaction("t-2", "Rent", 1200.0)));
        let args = ListArgs {
            search: Some("coffee".to_owned()),
            category: None,
            range: None,
            min_price: None,
            max_price: None,
        };
        let code = cmd_list(&store, args).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_totals_and_reports() {
        let store = memory_store();
        store.dispatch(Action::AddTransaction(test_transaction("t-1", "Lunch", 12.0)));
        assert_eq!(cmd_totals(&store).unwrap(), ExitCode::SUCCESS);
        assert_eq!(cmd_monthly(&store).unwrap(), ExitCode::SUCCESS);
        assert_eq!(cmd_categories(&store).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_chart_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let store = memory_store();
        store.dispatch(Action::AddTransaction(test_transaction("t-1", "Lunch", 12.0)));

        let code = cmd_chart(&store, Some(path.clone())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<path"));
    }

    #[test]
    fn cmd_chart_empty_renders_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let store = memory_store();

        let code = cmd_chart(&store, Some(path.clone())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("No data"));
    }

    #[test]
    fn cmd_export_then_import_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let source = memory_store();
        source.dispatch(Action::AddTransaction(test_transaction("t-1", "Lunch", 12.0)));
        let export_code = cmd_export(&source, Some(path.clone())).unwrap();
        assert_eq!(export_code, ExitCode::SUCCESS);

        let target = memory_store();
        let import_code = cmd_import(&target, &path).unwrap();
        assert_eq!(import_code, ExitCode::SUCCESS);
        assert_eq!(target.state().transactions.len(), 1);
    }

    #[test]
    fn cmd_import_invalid_json_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = memory_store();
        let code = cmd_import(&store, &path).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert!(store.state().transactions.is_empty());
    }

    #[test]
    fn cmd_import_non_array_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"id": "t-1"}"#).unwrap();

        let store = memory_store();
        let code = cmd_import(&store, &path).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert!(store.state().transactions.is_empty());
    }

    #[test]
    fn cmd_theme_and_currency() {
        let store = memory_store();
        assert_eq!(cmd_theme(&store, Theme::Light).unwrap(), ExitCode::SUCCESS);
        assert_eq!(store.state().theme, Theme::Light);

        assert_eq!(
            cmd_currency(&store, "eur".to_owned()).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(store.state().currency, "EUR");
    }

    #[test]
    fn chart_options_track_theme() {
        assert_eq!(chart_options_for(Theme::Dark).background, "#1a1a2e");
        assert_eq!(chart_options_for(Theme::Light).background, "#ffffff");
    }

    // ── dispatch tests ───────────────────────────────────────────────

    #[test]
    fn dispatch_totals() {
        let store = memory_store();
        let code = dispatch(&store, Command::Totals).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn dispatch_undo() {
        let store = memory_store();
        let code = dispatch(&store, Command::Undo).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
