//! Maps validated CLI matches to an [`Action`].

use crate::cli::actions::{Action, ProductsAction};
use crate::cli::commands::{
    ARG_PASSWORD, ARG_USERNAME, CMD_ALERTS, CMD_DASHBOARD, CMD_LOGIN,
    products::{
        ARG_CODE, ARG_DESCRIPTION, ARG_ID, ARG_MINIMUM, ARG_NAME, ARG_PRICE, ARG_SEARCH,
        ARG_STOCK, CMD_PRODUCTS,
    },
};
use crate::features::products::ProductInput;
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if a subcommand or one of its required arguments is missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_LOGIN, sub_m)) => Ok(Action::Login {
            username: required(sub_m, ARG_USERNAME)?,
            password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
        }),
        Some((CMD_PRODUCTS, sub_m)) => products(sub_m).map(Action::Products),
        Some((CMD_DASHBOARD, _)) => Ok(Action::Dashboard),
        Some((CMD_ALERTS, _)) => Ok(Action::Alerts),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn products(matches: &ArgMatches) -> Result<ProductsAction> {
    match matches.subcommand() {
        Some(("list", sub_m)) => Ok(ProductsAction::List {
            search: sub_m.get_one::<String>(ARG_SEARCH).cloned(),
        }),
        Some(("get", sub_m)) => Ok(ProductsAction::Get { id: id(sub_m)? }),
        Some(("create", sub_m)) => Ok(ProductsAction::Create {
            input: product_input(sub_m)?,
        }),
        Some(("update", sub_m)) => Ok(ProductsAction::Update {
            id: id(sub_m)?,
            input: product_input(sub_m)?,
        }),
        Some(("delete", sub_m)) => Ok(ProductsAction::Delete { id: id(sub_m)? }),
        Some((name, _)) => Err(anyhow!("unknown products command: {name}")),
        None => Err(anyhow!("missing products command")),
    }
}

fn product_input(matches: &ArgMatches) -> Result<ProductInput> {
    Ok(ProductInput {
        name: required(matches, ARG_NAME)?,
        code: required(matches, ARG_CODE)?,
        description: matches
            .get_one::<String>(ARG_DESCRIPTION)
            .cloned()
            .unwrap_or_default(),
        unit_price: matches
            .get_one::<f64>(ARG_PRICE)
            .copied()
            .context("missing required argument: --price")?,
        stock: matches
            .get_one::<i64>(ARG_STOCK)
            .copied()
            .context("missing required argument: --stock")?,
        minimum: matches
            .get_one::<i64>(ARG_MINIMUM)
            .copied()
            .context("missing required argument: --minimum")?,
    })
}

fn id(matches: &ArgMatches) -> Result<u64> {
    matches
        .get_one::<u64>(ARG_ID)
        .copied()
        .context("missing required argument: <id>")
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    fn dispatch(args: &[&str]) -> Result<Action> {
        let matches = commands::new().try_get_matches_from(args)?;
        handler(&matches)
    }

    #[test]
    fn login_maps_credentials() -> Result<()> {
        let action = dispatch(&["stockroom", "login", "-u", "Admin", "-p", "1234"])?;
        let Action::Login { username, password } = action else {
            return Err(anyhow!("expected login action"));
        };
        assert_eq!(username, "Admin");
        assert_eq!(password.expose_secret(), "1234");
        Ok(())
    }

    #[test]
    fn products_list_with_search() -> Result<()> {
        let action = dispatch(&["stockroom", "products", "list", "--search", "relé"])?;
        let Action::Products(ProductsAction::List { search }) = action else {
            return Err(anyhow!("expected products list action"));
        };
        assert_eq!(search.as_deref(), Some("relé"));
        Ok(())
    }

    #[test]
    fn products_update_collects_fields() -> Result<()> {
        let action = dispatch(&[
            "stockroom",
            "products",
            "update",
            "7",
            "--name",
            "Alternador 90A",
            "--code",
            "ALT-90",
            "--price",
            "450.5",
            "--stock",
            "3",
            "--minimum",
            "2",
        ])?;
        let Action::Products(ProductsAction::Update { id, input }) = action else {
            return Err(anyhow!("expected products update action"));
        };
        assert_eq!(id, 7);
        assert_eq!(input.name, "Alternador 90A");
        assert_eq!(input.code, "ALT-90");
        assert!((input.unit_price - 450.5).abs() < f64::EPSILON);
        assert_eq!(input.stock, 3);
        assert_eq!(input.minimum, 2);
        assert_eq!(input.description, "");
        Ok(())
    }

    #[test]
    fn products_delete_requires_numeric_id() {
        assert!(dispatch(&["stockroom", "products", "delete", "abc"]).is_err());
        assert!(matches!(
            dispatch(&["stockroom", "products", "delete", "3"]),
            Ok(Action::Products(ProductsAction::Delete { id: 3 }))
        ));
    }

    #[test]
    fn simple_commands() {
        assert!(matches!(
            dispatch(&["stockroom", "dashboard"]),
            Ok(Action::Dashboard)
        ));
        assert!(matches!(dispatch(&["stockroom", "alerts"]), Ok(Action::Alerts)));
    }
}
