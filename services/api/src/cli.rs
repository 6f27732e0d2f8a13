use crate::server;
use chainlink::directory::{Directory, DirectoryEntry, FilterCriteria};
use chainlink::error::AppError;
use chainlink::site::{industries_in, Industry};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ChainLink Pro",
    about = "Serve and explore the ChainLink Pro marketing site from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the manufacturer directory
    Directory {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
    /// List the industries showcase, optionally narrowed to one category
    Industries(IndustriesArgs),
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// Filter the directory the same way the directory page does
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive match against names and specialties
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Substring of the manufacturer location, e.g. "Germany"
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Exact category, e.g. "Electronics"
    #[arg(long, default_value = "")]
    pub(crate) category: String,
    /// Exact company size, e.g. "Large"
    #[arg(long, default_value = "")]
    pub(crate) size: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct IndustriesArgs {
    /// Industry category; "All" shows every industry
    #[arg(long, default_value = "All")]
    pub(crate) category: String,
}

impl From<SearchArgs> for FilterCriteria {
    fn from(args: SearchArgs) -> Self {
        FilterCriteria {
            search: args.search,
            location: args.location,
            category: args.category,
            size: args.size,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Directory {
            command: DirectoryCommand::Search(args),
        } => {
            run_directory_search(args);
            Ok(())
        }
        Command::Industries(args) => {
            run_industries(args);
            Ok(())
        }
    }
}

fn run_directory_search(args: SearchArgs) {
    let directory = Directory::seeded();
    let criteria = FilterCriteria::from(args);
    let matches = directory.search(&criteria);

    println!("Manufacturer directory");
    println!(
        "Showing {} of {} manufacturers",
        matches.len(),
        directory.entries().len()
    );
    if matches.is_empty() {
        println!("\nNo manufacturers found. Try adjusting your search criteria or filters.");
        return;
    }
    for entry in matches {
        render_entry(entry);
    }
}

fn render_entry(entry: &DirectoryEntry) {
    println!("\n[{}] {}", entry.id, entry.name);
    println!("  {} | {} | {}", entry.location, entry.category, entry.size);
    println!(
        "  Rating {:.1} ({} reviews), capacity {}",
        entry.rating, entry.reviews, entry.capacity
    );
    println!("  Specialties: {}", entry.specialties.join(", "));
    println!("  Certifications: {}", entry.certifications.join(", "));
}

fn run_industries(args: IndustriesArgs) {
    let industries = industries_in(&args.category);
    println!("Industries ({})", args.category);
    if industries.is_empty() {
        println!("  No industries in this category");
        return;
    }
    for industry in industries {
        render_industry(industry);
    }
}

fn render_industry(industry: &Industry) {
    println!("\n{} [{}]", industry.title, industry.category);
    println!("  {}", industry.description);
    println!(
        "  {} {} across {} companies",
        industry.metrics.improvement, industry.metrics.metric, industry.metrics.companies
    );
    println!("  Case study: {}", industry.case_study);
}
