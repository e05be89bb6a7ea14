//! Shelf CLI
//!
//! Runs the web app, or works the books API directly from a terminal.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use shelf_app::utils::format_price;
use shelf_client::{ApiClient, Book, BookQuery, SalesQuery, SortBy, SortOrder};
use shelf_kernel::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "shelf", version, about = "Bookstore catalog and inventory console")]
struct Cli {
    /// Books API base URL (overrides `api.base_url` from configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log to stdout while running API commands
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the catalog and admin web app
    Serve,

    /// Browse and manage books
    #[command(subcommand)]
    Books(BooksCommand),

    /// Inspect recorded sales
    #[command(subcommand)]
    Sales(SalesCommand),
}

#[derive(Subcommand, Debug)]
enum BooksCommand {
    /// List one page of books
    List(ListArgs),

    /// Show a single book
    Show { id: String },

    /// Sell copies of a book
    Sell {
        id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Set the stock level of a book
    Stock { id: String, stock: u32 },

    /// Delete a book
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[arg(short, long, default_value_t = 10)]
    limit: u32,

    /// Match title or author
    #[arg(short, long)]
    search: Option<String>,

    /// title, author, price or createdAt
    #[arg(long, default_value = "title")]
    sort_by: SortBy,

    /// asc or desc
    #[arg(long, default_value = "asc")]
    sort_order: SortOrder,
}

#[derive(Subcommand, Debug)]
enum SalesCommand {
    /// List one page of sales
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,

        /// Only sales of this book
        #[arg(long)]
        book: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().context("failed to load Shelf settings")?;
    if let Some(api_url) = cli.api_url {
        settings.api.base_url = api_url;
    }

    if matches!(cli.command, Command::Serve) || cli.verbose {
        shelf_telemetry::init(&settings.telemetry)?;
    }

    match cli.command {
        Command::Serve => {
            tracing::info!(env = ?settings.environment, "serving Shelf");
            shelf_app::run(settings).await?;
        }

        Command::Books(BooksCommand::List(args)) => {
            let query = BookQuery {
                page: Some(args.page.saturating_sub(1)),
                limit: Some(args.limit),
                search: args.search,
                genre: None,
                sort_by: Some(args.sort_by),
                sort_order: Some(args.sort_order),
            };
            let response = client(&settings)?.list_books(&query).await?;
            if response.books.is_empty() {
                println!("No books found");
            }
            for book in &response.books {
                println!("{}", summary_line(book));
            }
            println!(
                "Page {} of {} ({} books)",
                response.page.saturating_add(1),
                response.total_pages.max(1),
                response.total
            );
        }

        Command::Books(BooksCommand::Show { id }) => {
            let book = client(&settings)?.get_book(&id).await?;
            print_book(&book);
        }

        Command::Books(BooksCommand::Sell { id, quantity }) => {
            let book = client(&settings)?.sell_book(&id, quantity).await?;
            println!("Sold {quantity} of \"{}\"; {} left", book.title, book.stock);
        }

        Command::Books(BooksCommand::Stock { id, stock }) => {
            let book = client(&settings)?.update_stock(&id, stock).await?;
            println!("Stock of \"{}\" is now {}", book.title, book.stock);
        }

        Command::Books(BooksCommand::Delete { id, yes }) => {
            if !yes {
                bail!("refusing to delete book {id} without --yes");
            }
            client(&settings)?.delete_book(&id).await?;
            println!("Deleted book {id}");
        }

        Command::Sales(SalesCommand::List { page, limit, book }) => {
            let query = SalesQuery {
                page: Some(page.saturating_sub(1)),
                limit: Some(limit),
                book_id: book,
            };
            let response = client(&settings)?.list_sales(&query).await?;
            if response.sales.is_empty() {
                println!("No sales recorded");
            }
            for sale in &response.sales {
                let title = sale
                    .book
                    .as_ref()
                    .map(|book| book.title.as_str())
                    .unwrap_or(sale.book_id.as_str());
                println!(
                    "{}  {}  x{}  {}",
                    sale.sale_date.format("%Y-%m-%d %H:%M"),
                    title,
                    sale.quantity,
                    format_price(sale.total_price)
                );
            }
            println!(
                "Page {} of {} ({} sales)",
                response.page.saturating_add(1),
                response.total_pages.max(1),
                response.total
            );
        }
    }

    Ok(())
}

fn client(settings: &Settings) -> anyhow::Result<ApiClient> {
    ApiClient::new(&settings.api.base_url)
        .with_context(|| format!("invalid books API url '{}'", settings.api.base_url))
}

fn summary_line(book: &Book) -> String {
    format!(
        "{}  {} by {}  {}  {}",
        book.id,
        book.title,
        book.author,
        format_price(book.price),
        if book.in_stock() {
            format!("{} in stock", book.stock)
        } else {
            "out of stock".to_string()
        }
    )
}

fn print_book(book: &Book) {
    println!("{}", book.title);
    println!("  id:        {}", book.id);
    println!("  author:    {}", book.author);
    println!("  isbn:      {}", book.isbn);
    println!("  price:     {}", format_price(book.price));
    println!("  stock:     {}", book.stock);
    if let Some(genre) = &book.genre {
        println!("  genre:     {genre}");
    }
    if let Some(published) = &book.published_date {
        println!("  published: {published}");
    }
    if let Some(total_sales) = book.total_sales {
        println!("  sold:      {total_sales}");
    }
    if let Some(description) = &book.description {
        println!();
        println!("{description}");
    }
}
