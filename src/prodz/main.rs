use clap::Parser;
use prodz::api::{Direction, ProdzApi};
use prodz::error::Result;
use prodz::model::Product;

mod cli;
use cli::{menu, print};

#[derive(Parser, Debug)]
#[command(name = "prodz")]
#[command(about = "In-memory product catalog with cursor navigation", long_about = None)]
struct Cli {
    /// Print the catalog once and exit instead of opening the menu
    #[arg(long)]
    demo: bool,

    /// Emit the demo listing as JSON
    #[arg(long, requires = "demo")]
    json: bool,

    /// Start with an empty catalog instead of the sample products
    #[arg(long)]
    no_seed: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut api = ProdzApi::new();
    if !cli.no_seed {
        seed_samples(&mut api)?;
    }

    if cli.demo {
        let result = api.list_products(Direction::Forward)?;
        if cli.json {
            print::print_products_json(&result.listed)?;
        } else {
            print::print_products(&result.listed);
            print::print_messages(&result.messages);
        }
        return Ok(());
    }

    menu::run(&mut api)
}

fn seed_samples(api: &mut ProdzApi) -> Result<()> {
    api.add_product(Product::new(101, "Mechanical Keyboard", 350.00, 15))?;
    api.add_product(Product::new(102, "RGB Gaming Mouse", 120.50, 30))?;
    api.add_product(Product::new(103, "Ultrawide Monitor", 1800.00, 8))?;
    Ok(())
}
