use crate::api_client::{ApiClient, get_response_error_message};
use crate::delivery_addresses::errors::{ApiErrorReport, FORM_FIELDS, handle_api_error};
use crate::delivery_addresses::service::{
    create_delivery_address, delete_delivery_address, get_delivery_addresses,
    update_delivery_address,
};
use crate::delivery_addresses::Mutation;
use crate::error::ApiClientError;
use crate::store::AppStore;

use models::{
    DeliveryAddress, DeliveryAddressDraftBuilder, DeliveryAddressPatch, format_delivery_address,
};

use std::collections::BTreeMap;

use log::debug;

pub const DELETE_CONFIRMATION_TITLE: &str = "Are you sure you want to delete this address?";

/// One row of the address list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRow {
    pub id: u64,
    pub street: String,
    pub city: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading,
    Empty,
    List(Vec<AddressRow>),
}

/// Create/edit modal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressModal {
    pub editing: Option<DeliveryAddress>,
    pub form: DeliveryAddressDraftBuilder,
    pub field_errors: BTreeMap<String, String>,
}

impl AddressModal {
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Address"
        } else {
            "New Address"
        }
    }
}

/// Controller behind the delivery address list screen.
pub struct DeliveryAddressesScreen {
    client: ApiClient,
    store: AppStore,
    modal: Option<AddressModal>,
    pending_delete: Option<DeliveryAddress>,
    snackbar: Option<String>,
}

impl DeliveryAddressesScreen {
    pub fn new(client: ApiClient, store: AppStore) -> Self {
        Self {
            client,
            store,
            modal: None,
            pending_delete: None,
            snackbar: None,
        }
    }

    pub async fn load(&mut self) {
        if let Err(e) = get_delivery_addresses(&self.client, &self.store).await {
            self.show_error(&e);
        }
    }

    pub fn view(&self) -> ScreenView {
        self.store.select(|state| {
            let slice = &state.delivery_addresses;
            if slice.is_fetching || slice.is_mutating(Mutation::Update) {
                return ScreenView::Loading;
            }

            if slice.addresses.is_empty() {
                return ScreenView::Empty;
            }

            ScreenView::List(
                slice
                    .addresses
                    .iter()
                    .map(|address| {
                        let formatted = format_delivery_address(address);
                        AddressRow {
                            id: address.id,
                            street: formatted.street,
                            city: formatted.city,
                            is_default: address.default,
                        }
                    })
                    .collect(),
            )
        })
    }

    pub fn snackbar(&self) -> Option<&str> {
        self.snackbar.as_deref()
    }

    pub fn dismiss_snackbar(&mut self) {
        self.snackbar = None;
    }

    // ============================================
    // CREATE / EDIT MODAL
    // ============================================

    pub fn modal(&self) -> Option<&AddressModal> {
        self.modal.as_ref()
    }

    pub fn show_new_address_modal(&mut self) {
        self.modal = Some(AddressModal {
            editing: None,
            form: DeliveryAddressDraftBuilder::default(),
            field_errors: BTreeMap::new(),
        });
    }

    pub fn edit(&mut self, address: &DeliveryAddress) {
        self.modal = Some(AddressModal {
            editing: Some(address.clone()),
            form: DeliveryAddressDraftBuilder::from_address(address),
            field_errors: BTreeMap::new(),
        });
    }

    pub fn hide_modal(&mut self) {
        self.modal = None;
    }

    /// Edit the open form. No-op when the modal is closed.
    pub fn update_form(
        &mut self,
        edit: impl FnOnce(DeliveryAddressDraftBuilder) -> DeliveryAddressDraftBuilder,
    ) {
        if let Some(modal) = self.modal.as_mut() {
            modal.form = edit(std::mem::take(&mut modal.form));
        }
    }

    pub fn is_saving(&self) -> bool {
        self.store.select(|state| {
            state.delivery_addresses.is_mutating(Mutation::Create)
                || state.delivery_addresses.is_mutating(Mutation::Update)
        })
    }

    /// Validate and save the open form. Closes the modal on success.
    ///
    /// Returns `true` when the address was saved.
    pub async fn submit(&mut self) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        let validation_errors = modal.form.validate();
        if !validation_errors.is_empty() {
            modal.field_errors = ApiErrorReport::from_validation(&validation_errors).field_errors;
            return false;
        }

        let draft = match modal.form.clone().build() {
            Ok(draft) => draft,
            Err(e) => {
                modal.field_errors = ApiErrorReport::from_validation(&[e]).field_errors;
                return false;
            }
        };

        let result = match &modal.editing {
            Some(existing) => {
                let patch = DeliveryAddressPatch::from(draft);
                update_delivery_address(&self.client, &self.store, existing.id, &patch).await
            }
            None => create_delivery_address(&self.client, &self.store, &draft).await,
        };

        match result {
            Ok(()) => {
                self.modal = None;
                true
            }
            Err(e) => {
                let report = handle_api_error(&e, FORM_FIELDS);
                if let Some(modal) = self.modal.as_mut() {
                    modal.field_errors = report.field_errors;
                }
                self.snackbar = report.message;
                false
            }
        }
    }

    // ============================================
    // DELETE / DEFAULT
    // ============================================

    pub fn pending_delete(&self) -> Option<&DeliveryAddress> {
        self.pending_delete.as_ref()
    }

    pub fn show_confirm_delete(&mut self, address: &DeliveryAddress) {
        self.pending_delete = Some(address.clone());
    }

    pub fn hide_confirm_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn is_deleting(&self) -> bool {
        self.store
            .select(|state| state.delivery_addresses.is_mutating(Mutation::Delete))
    }

    /// Delete the address awaiting confirmation. The dialog stays open on failure.
    pub async fn confirm_delete(&mut self) {
        let Some(address) = self.pending_delete.clone() else {
            debug!("Delete confirmed with no address selected");
            return;
        };

        match delete_delivery_address(&self.client, &self.store, address.id).await {
            Ok(()) => self.hide_confirm_delete(),
            Err(e) => self.show_error(&e),
        }
    }

    pub async fn set_default(&mut self, id: u64, make_default: bool) {
        let patch = DeliveryAddressPatch::make_default(make_default);
        if let Err(e) = update_delivery_address(&self.client, &self.store, id, &patch).await {
            self.show_error(&e);
        }
    }

    fn show_error(&mut self, error: &ApiClientError) {
        self.snackbar = Some(get_response_error_message(error));
    }
}
