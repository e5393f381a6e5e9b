use crate::cli::{AddressArgs, AddressesCommand};
use crate::context::CliContext;
use crate::error::CliError;

use client_core::delivery_addresses::{DeliveryAddressesScreen, ScreenView};

pub async fn run(
    command: AddressesCommand,
    ctx: &CliContext,
    json: bool,
) -> Result<String, CliError> {
    let mut screen = DeliveryAddressesScreen::new(ctx.client.clone(), ctx.store.clone());

    match command {
        AddressesCommand::List => list(&mut screen, ctx, json).await,
        AddressesCommand::Add(args) => add(&mut screen, args).await,
        AddressesCommand::Delete { id } => delete(&mut screen, ctx, id).await,
        AddressesCommand::Default { id, unset } => {
            screen.set_default(id, !unset).await;
            snackbar_error(&screen)?;
            Ok(if unset {
                format!("Address #{id} is no longer the default.")
            } else {
                format!("Address #{id} is now the default.")
            })
        }
    }
}

async fn list(
    screen: &mut DeliveryAddressesScreen,
    ctx: &CliContext,
    json: bool,
) -> Result<String, CliError> {
    screen.load().await;
    snackbar_error(screen)?;

    if json {
        let addresses = ctx
            .store
            .select(|state| state.delivery_addresses.addresses.clone());
        return Ok(serde_json::to_string_pretty(&addresses)?);
    }

    Ok(render_view(&screen.view()))
}

async fn add(screen: &mut DeliveryAddressesScreen, args: AddressArgs) -> Result<String, CliError> {
    screen.show_new_address_modal();
    screen.update_form(|form| {
        form.with_street_name(args.street_name)
            .with_house_number(args.house_number)
            .with_ap_suite(args.ap_suite)
            .with_city(args.city)
            .with_postal_code(args.postal_code)
            .with_state(args.state)
            .with_default(args.default)
    });

    if screen.submit().await {
        return Ok("Address saved.".to_string());
    }

    let field_errors = screen
        .modal()
        .map(|modal| modal.field_errors.clone())
        .unwrap_or_default();
    if !field_errors.is_empty() {
        let message = field_errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CliError::validation(message));
    }

    snackbar_error(screen)?;
    Err(CliError::cli("Address was not saved"))
}

async fn delete(
    screen: &mut DeliveryAddressesScreen,
    ctx: &CliContext,
    id: u64,
) -> Result<String, CliError> {
    screen.load().await;
    snackbar_error(screen)?;

    let address = ctx
        .store
        .select(|state| {
            state
                .delivery_addresses
                .addresses
                .iter()
                .find(|address| address.id == id)
                .cloned()
        })
        .ok_or_else(|| CliError::cli(format!("No saved address with id {id}")))?;

    screen.show_confirm_delete(&address);
    screen.confirm_delete().await;

    if screen.pending_delete().is_some() {
        snackbar_error(screen)?;
        return Err(CliError::cli(format!("Address #{id} was not deleted")));
    }

    Ok(format!("Address #{id} deleted."))
}

fn snackbar_error(screen: &DeliveryAddressesScreen) -> Result<(), CliError> {
    match screen.snackbar() {
        Some(message) => Err(CliError::core(message)),
        None => Ok(()),
    }
}

/// Two lines per address: street (with a default marker), then city line.
pub fn render_view(view: &ScreenView) -> String {
    match view {
        ScreenView::Loading => "Loading...".to_string(),
        ScreenView::Empty => "No saved addresses.".to_string(),
        ScreenView::List(rows) => rows
            .iter()
            .map(|row| {
                let marker = if row.is_default { " (default)" } else { "" };
                format!("#{} {}{marker}\n    {}", row.id, row.street, row.city)
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
