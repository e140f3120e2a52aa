use clap::{Args, Parser, Subcommand};
use loftloot::{Catalogue, CatalogueError, CatalogueSettings, SearchFilters, SearchParams, SortStrategy};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "loftloot", about = "Query a Loftloot product catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON array of products
    #[arg(long, env = "LOFTLOOT_PRODUCTS", default_value = "products.json")]
    products: String,

    /// Catalogue settings JSON; defaults apply when omitted
    #[arg(long, env = "LOFTLOOT_SETTINGS")]
    settings: Option<String>,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    collection: Option<String>,
    #[arg(long)]
    decade: Option<String>,
    #[arg(long = "type")]
    product_type: Option<String>,
    #[arg(long, requires = "max_price")]
    min_price: Option<f64>,
    #[arg(long, requires = "min_price")]
    max_price: Option<f64>,
    #[arg(long)]
    in_stock: bool,
}

impl FilterArgs {
    fn apply(&self, mut filters: SearchFilters) -> SearchFilters {
        if let Some(c) = &self.collection {
            filters = filters.with_collection(c.as_str());
        }
        if let Some(d) = &self.decade {
            filters = filters.with_decade(d.as_str());
        }
        if let Some(t) = &self.product_type {
            filters = filters.with_type(t.as_str());
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            filters = filters.with_price_range(min, max);
        }
        filters.show_in_stock_only |= self.in_stock;
        filters
    }
}

#[derive(Subcommand)]
enum Command {
    /// Search products with optional filters and sorting
    Search {
        #[arg(default_value = "")]
        query: String,
        /// Shop URL query string, e.g. "q=lion&decade=1980s&stock=1"
        #[arg(long, conflicts_with = "query")]
        params: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
        /// latest, name-asc, name-desc, price-low, price-high, relevance
        #[arg(long)]
        sort: Option<String>,
        /// Number of pages to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Type-ahead suggestions for a partial query
    Autocomplete {
        query: String,
        #[arg(long)]
        in_stock: bool,
    },
    /// Facet values still selectable under the given filters
    Facets {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Related products of one product
    Related { id: i64 },
    /// Resolve a site path to a page
    Resolve { path: String },
    /// List every page path
    Routes,
    /// Build the catalogue and report a summary
    Validate,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::Autocomplete { .. } => "autocomplete",
            Command::Facets { .. } => "facets",
            Command::Related { .. } => "related",
            Command::Resolve { .. } => "resolve",
            Command::Routes => "routes",
            Command::Validate => "validate",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    products: usize,
    sold: usize,
    collections: &'a [String],
    decades: &'a [String],
    types: &'a [String],
    price_bounds: Option<loftloot::PriceRange>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_catalogue(cli: &Cli) -> loftloot::Result<Catalogue> {
    let settings = match &cli.settings {
        Some(path) => CatalogueSettings::load(path)?,
        None => CatalogueSettings::default(),
    };
    Catalogue::load(&cli.products, settings)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = load_catalogue(&cli)?;
    let exec = catalogue.executor();
    let default_sort = catalogue.settings().default_sort;
    tracing::debug!(
        command = cli.command.name(),
        products = catalogue.len(),
        "Dispatching command"
    );

    match cli.command {
        Command::Search {
            query,
            params,
            filters,
            sort,
            pages,
        } => {
            let base = match params {
                Some(qs) => SearchParams::parse_with_default(&qs, default_sort),
                None => SearchParams {
                    query,
                    filters: SearchFilters::default(),
                    sort: default_sort,
                },
            };
            let sort = match sort {
                Some(key) => key.parse::<SortStrategy>()?,
                None => base.sort,
            };
            let filters = filters.apply(base.filters);
            print_json(&exec.browse(&base.query, &filters, sort, pages))
        }
        Command::Autocomplete { query, in_stock } => {
            print_json(&exec.autocomplete(&query, in_stock))
        }
        Command::Facets { filters } => {
            print_json(&exec.available_facets(&filters.apply(SearchFilters::default())))
        }
        Command::Related { id } => match catalogue.get(id) {
            Some(_) => print_json(&catalogue.related(id)),
            None => Err(format!("No product with id {}", id).into()),
        },
        Command::Resolve { path } => print_json(&catalogue.resolve(&path)),
        Command::Routes => print_json(&catalogue.routes()),
        Command::Validate => print_json(&Summary {
            products: catalogue.len(),
            sold: catalogue.products().iter().filter(|p| p.is_sold).count(),
            collections: catalogue.collections(),
            decades: catalogue.decades(),
            types: catalogue.types(),
            price_bounds: catalogue.price_bounds(),
        }),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        match e.downcast_ref::<CatalogueError>() {
            Some(err) => eprintln!("ERROR [{}]: {}", err.code(), err),
            None => eprintln!("ERROR: {}", e),
        }
        std::process::exit(1);
    }
}
