use crate::api_client::{ApiClient, extract, get_response_error_message};
use crate::capabilities::Dispatcher;
use crate::delivery_addresses::{
    DELIVERY_ADDRESSES_ENDPOINT, DeliveryAddressesAction, Mutation, VALIDATION_STATUSES,
};
use crate::error::ApiClientError;
use crate::interceptor::{ExchangeOutcome, RequestOptions};

use models::{DeliveryAddress, DeliveryAddressDraft, DeliveryAddressPatch};

use std::future::Future;

use log::{debug, info, warn};

const DATA_POINTER: &str = "/data";

/// Load the address list into the store.
pub async fn get_delivery_addresses(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
) -> Result<Vec<DeliveryAddress>, ApiClientError> {
    dispatcher.dispatch(DeliveryAddressesAction::FetchRequest.into());

    let result = client
        .get(DELIVERY_ADDRESSES_ENDPOINT, RequestOptions::default())
        .await
        .and_then(|outcome| extract::<Vec<DeliveryAddress>>(&outcome, DATA_POINTER));

    match result {
        Ok(addresses) => {
            debug!("Fetched {} delivery addresses", addresses.len());
            dispatcher.dispatch(DeliveryAddressesAction::FetchSuccess(addresses.clone()).into());
            Ok(addresses)
        }
        Err(e) => {
            warn!("Failed to fetch delivery addresses: {e}");
            dispatcher
                .dispatch(DeliveryAddressesAction::FetchFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}

pub async fn create_delivery_address(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    draft: &DeliveryAddressDraft,
) -> Result<(), ApiClientError> {
    let body = serde_json::to_value(draft)?;
    let outcome = tracked(
        dispatcher,
        Mutation::Create,
        client.post(DELIVERY_ADDRESSES_ENDPOINT, &body, form_options()),
    )
    .await?;

    info!("Delivery address created");
    upsert_from(&outcome, dispatcher);
    invalidate(client, dispatcher).await;
    Ok(())
}

pub async fn update_delivery_address(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    id: u64,
    patch: &DeliveryAddressPatch,
) -> Result<(), ApiClientError> {
    let body = serde_json::to_value(patch)?;
    let path = format!("{DELIVERY_ADDRESSES_ENDPOINT}/{id}");
    let outcome = tracked(
        dispatcher,
        Mutation::Update,
        client.patch(&path, &body, form_options()),
    )
    .await?;

    info!("Delivery address {id} updated");
    upsert_from(&outcome, dispatcher);
    invalidate(client, dispatcher).await;
    Ok(())
}

pub async fn delete_delivery_address(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    id: u64,
) -> Result<(), ApiClientError> {
    let path = format!("{DELIVERY_ADDRESSES_ENDPOINT}/{id}");
    tracked(
        dispatcher,
        Mutation::Delete,
        client.delete(&path, RequestOptions::default()),
    )
    .await?;

    info!("Delivery address {id} deleted");
    dispatcher.dispatch(DeliveryAddressesAction::Removed(id).into());
    invalidate(client, dispatcher).await;
    Ok(())
}

fn form_options() -> RequestOptions {
    RequestOptions::expecting(VALIDATION_STATUSES)
}

async fn tracked<T>(
    dispatcher: &dyn Dispatcher,
    mutation: Mutation,
    request: impl Future<Output = Result<T, ApiClientError>>,
) -> Result<T, ApiClientError> {
    dispatcher.dispatch(DeliveryAddressesAction::MutationStarted(mutation).into());
    let result = request.await;
    dispatcher.dispatch(DeliveryAddressesAction::MutationFinished(mutation).into());
    result
}

/// Apply the returned address locally until the refetch lands.
fn upsert_from(outcome: &ExchangeOutcome, dispatcher: &dyn Dispatcher) {
    if let Ok(address) = extract::<DeliveryAddress>(outcome, DATA_POINTER) {
        dispatcher.dispatch(DeliveryAddressesAction::Upserted(address).into());
    }
}

/// Refetch after a mutation. Failure here is already reported by the fetch.
async fn invalidate(client: &ApiClient, dispatcher: &dyn Dispatcher) {
    if let Err(e) = get_delivery_addresses(client, dispatcher).await {
        debug!("Refetch after mutation failed: {e}");
    }
}
