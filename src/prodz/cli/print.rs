use colored::Colorize;
use prodz::api::{CmdMessage, MessageLevel};
use prodz::error::Result;
use prodz::model::Product;
use unicode_width::UnicodeWidthStr;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Width-aligned table of products, one row each. Prints nothing for an
/// empty slice; the command's own message covers that case.
pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        return;
    }

    let name_width = products
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0)
        .max("NAME".width());

    let header = format!(
        "{:>8}  {:<width$}  {:>12}  {:>8}",
        "ID",
        "NAME",
        "PRICE",
        "QTY",
        width = name_width
    );
    println!("{}", header.bold());

    for product in products {
        // Pad by display width, not byte length.
        let padding = name_width.saturating_sub(product.name.width());
        println!(
            "{:>8}  {}{}  {:>12.2}  {:>8}",
            product.id,
            product.name,
            " ".repeat(padding),
            product.price,
            product.quantity
        );
    }
}

pub fn print_product_detail(product: &Product) {
    println!("=========================================");
    println!("{} {}", "ID:".cyan(), product.id);
    println!("{} {}", "Name:".cyan(), product.name);
    println!("{} {:.2}", "Price:".cyan(), product.price);
    println!("{} {}", "Quantity:".cyan(), product.quantity);
}

pub fn print_products_json(products: &[Product]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(products)?);
    Ok(())
}
