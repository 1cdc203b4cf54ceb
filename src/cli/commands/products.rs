use clap::{Arg, Command};

pub const CMD_PRODUCTS: &str = "products";
pub const ARG_ID: &str = "id";
pub const ARG_SEARCH: &str = "search";
pub const ARG_NAME: &str = "name";
pub const ARG_CODE: &str = "code";
pub const ARG_PRICE: &str = "price";
pub const ARG_STOCK: &str = "stock";
pub const ARG_MINIMUM: &str = "minimum";
pub const ARG_DESCRIPTION: &str = "description";

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Product id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

/// Fields shared by create and update; update replaces the whole product.
fn with_product_fields(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_NAME)
                .long("name")
                .help("Product name")
                .required(true),
        )
        .arg(
            Arg::new(ARG_CODE)
                .long("code")
                .help("Product code (SKU)")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PRICE)
                .long("price")
                .help("Unit price, greater than zero")
                .required(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new(ARG_STOCK)
                .long("stock")
                .help("Units in stock")
                .required(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_MINIMUM)
                .long("minimum")
                .help("Alert when stock falls to this level")
                .required(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_DESCRIPTION)
                .long("description")
                .help("Free-form description"),
        )
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_PRODUCTS)
        .about("Manage the product catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list").about("List products").arg(
                Arg::new(ARG_SEARCH)
                    .short('s')
                    .long("search")
                    .help("Filter by name or code"),
            ),
        )
        .subcommand(Command::new("get").about("Show one product").arg(id_arg()))
        .subcommand(with_product_fields(
            Command::new("create").about("Create a product"),
        ))
        .subcommand(with_product_fields(
            Command::new("update")
                .about("Replace a product")
                .arg(id_arg()),
        ))
        .subcommand(Command::new("delete").about("Delete a product").arg(id_arg()))
}
