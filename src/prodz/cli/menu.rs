//! Interactive arrow-key menu over the API facade. Everything here is
//! terminal plumbing; no catalog logic lives in this module.

use colored::Colorize;
use console::{Key, Term};
use prodz::api::{Direction, ProdzApi};
use prodz::error::Result;
use prodz::model::{Product, ProductPatch};

use super::print;

const MENU_OPTIONS: [&str; 9] = [
    "Add product",
    "Remove product",
    "Update product",
    "Find product by id",
    "List products (front to back)",
    "List products (back to front)",
    "Browse with the cursor",
    "Catalog size",
    "Quit",
];

pub fn run(api: &mut ProdzApi) -> Result<()> {
    let term = Term::stdout();
    let mut selected = 0;

    loop {
        draw_menu(&term, selected)?;
        match term.read_key()? {
            Key::ArrowUp => {
                selected = if selected == 0 {
                    MENU_OPTIONS.len() - 1
                } else {
                    selected - 1
                }
            }
            Key::ArrowDown => selected = (selected + 1) % MENU_OPTIONS.len(),
            Key::Enter => {
                term.clear_screen()?;
                if !run_selected(&term, api, selected)? {
                    return Ok(());
                }
                pause(&term)?;
            }
            Key::Char('q') | Key::Char('Q') => return Ok(()),
            _ => {}
        }
    }
}

fn draw_menu(term: &Term, selected: usize) -> Result<()> {
    term.clear_screen()?;
    println!("{}", "--- Product Catalog ---".cyan());
    println!();
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        if i == selected {
            println!("{}", format!("-> {}", option).yellow());
        } else {
            println!("   {}", option);
        }
    }
    println!();
    println!("Use UP/DOWN arrows to move and ENTER to select.");
    Ok(())
}

/// Runs one menu entry. Returns `false` when the user picked Quit.
fn run_selected(term: &Term, api: &mut ProdzApi, selected: usize) -> Result<bool> {
    match selected {
        0 => add_product(term, api)?,
        1 => remove_product(term, api)?,
        2 => update_product(term, api)?,
        3 => find_product(term, api)?,
        4 => list_products(api, Direction::Forward)?,
        5 => list_products(api, Direction::Backward)?,
        6 => browse(term, api)?,
        7 => {
            println!("{}", "--- Catalog size ---".green());
            println!("The catalog holds {} products.", api.size());
        }
        _ => {
            println!("{}", "Leaving the catalog. Bye!".blue());
            return Ok(false);
        }
    }
    Ok(true)
}

fn add_product(term: &Term, api: &mut ProdzApi) -> Result<()> {
    println!("{}", "--- Add product ---".green());
    let id = prompt_i64(term, "Id: ")?;
    let name = prompt_line(term, "Name: ")?;
    let price = prompt_f64(term, "Price: ")?;
    let quantity = prompt_i64(term, "Quantity: ")?;

    let result = api.add_product(Product::new(id, &name, price, quantity))?;
    print::print_messages(&result.messages);
    Ok(())
}

fn remove_product(term: &Term, api: &mut ProdzApi) -> Result<()> {
    println!("{}", "--- Remove product ---".green());
    let id = prompt_i64(term, "Product id: ")?;
    match api.remove_product(id) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn update_product(term: &Term, api: &mut ProdzApi) -> Result<()> {
    println!("{}", "--- Update product ---".green());
    let id = prompt_i64(term, "Product id: ")?;
    println!("New values; leave a field blank to keep it. The id never changes.");

    let mut patch = ProductPatch::new();
    let name = prompt_line(term, "New name: ")?;
    if !name.is_empty() {
        patch.name = Some(name);
    }
    patch.price = prompt_optional_f64(term, "New price: ")?;
    patch.quantity = prompt_optional_i64(term, "New quantity: ")?;

    match api.update_product(id, &patch) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn find_product(term: &Term, api: &ProdzApi) -> Result<()> {
    println!("{}", "--- Find product by id ---".green());
    let id = prompt_i64(term, "Product id: ")?;
    match api.find_product(id) {
        Ok(result) => {
            println!("{}", "Product found:".yellow());
            for product in &result.listed {
                print::print_product_detail(product);
            }
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn list_products(api: &ProdzApi, direction: Direction) -> Result<()> {
    let header = match direction {
        Direction::Forward => "--- Products (front to back) ---",
        Direction::Backward => "--- Products (back to front) ---",
    };
    println!("{}", header.green());
    let result = api.list_products(direction)?;
    print::print_products(&result.listed);
    print::print_messages(&result.messages);
    Ok(())
}

fn browse(term: &Term, api: &mut ProdzApi) -> Result<()> {
    if api.size() == 0 {
        println!("{}", "The catalog is empty. Nothing to browse.".yellow());
        return Ok(());
    }

    api.go_first();
    let mut status: Option<&str> = None;
    loop {
        term.clear_screen()?;
        println!(
            "{}",
            "Browsing (LEFT/RIGHT arrows to move, 'q' to leave):".magenta()
        );
        if let Some(product) = api.current() {
            print::print_product_detail(product);
        }
        if let Some(message) = status.take() {
            println!("{}", message.yellow());
        }

        match term.read_key()? {
            Key::ArrowRight => {
                if !api.step_next() {
                    status = Some("Already at the last product.");
                }
            }
            Key::ArrowLeft => {
                if !api.step_prev() {
                    status = Some("Already at the first product.");
                }
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape => return Ok(()),
            _ => {}
        }
    }
}

fn pause(term: &Term) -> Result<()> {
    println!();
    println!("{}", "Press any key to continue...".dimmed());
    term.read_key()?;
    Ok(())
}

fn prompt_line(term: &Term, label: &str) -> Result<String> {
    term.write_str(label)?;
    Ok(term.read_line()?.trim().to_string())
}

fn prompt_i64(term: &Term, label: &str) -> Result<i64> {
    loop {
        let input = prompt_line(term, label)?;
        match input.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", format!("Not a whole number: {input}").red()),
        }
    }
}

fn prompt_f64(term: &Term, label: &str) -> Result<f64> {
    loop {
        let input = prompt_line(term, label)?;
        match input.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", format!("Not a number: {input}").red()),
        }
    }
}

fn prompt_optional_i64(term: &Term, label: &str) -> Result<Option<i64>> {
    loop {
        let input = prompt_line(term, label)?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{}", format!("Not a whole number: {input}").red()),
        }
    }
}

fn prompt_optional_f64(term: &Term, label: &str) -> Result<Option<f64>> {
    loop {
        let input = prompt_line(term, label)?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{}", format!("Not a number: {input}").red()),
        }
    }
}
