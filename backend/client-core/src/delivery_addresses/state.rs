use models::DeliveryAddress;

/// Remote mutation currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryAddressesAction {
    FetchRequest,
    FetchSuccess(Vec<DeliveryAddress>),
    FetchFailure(String),
    MutationStarted(Mutation),
    MutationFinished(Mutation),
    Upserted(DeliveryAddress),
    Removed(u64),
}

impl DeliveryAddressesAction {
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryAddressesAction::FetchRequest => "deliveryAddresses/fetchRequest",
            DeliveryAddressesAction::FetchSuccess(_) => "deliveryAddresses/fetchSuccess",
            DeliveryAddressesAction::FetchFailure(_) => "deliveryAddresses/fetchFailure",
            DeliveryAddressesAction::MutationStarted(_) => "deliveryAddresses/mutationStarted",
            DeliveryAddressesAction::MutationFinished(_) => "deliveryAddresses/mutationFinished",
            DeliveryAddressesAction::Upserted(_) => "deliveryAddresses/upserted",
            DeliveryAddressesAction::Removed(_) => "deliveryAddresses/removed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryAddressesState {
    pub addresses: Vec<DeliveryAddress>,
    pub is_fetching: bool,
    pub in_flight: Vec<Mutation>,
    pub error: Option<String>,
}

impl DeliveryAddressesState {
    pub fn is_mutating(&self, mutation: Mutation) -> bool {
        self.in_flight.contains(&mutation)
    }

    pub fn apply(&mut self, action: DeliveryAddressesAction) {
        match action {
            DeliveryAddressesAction::FetchRequest => {
                self.is_fetching = true;
            }
            DeliveryAddressesAction::FetchSuccess(addresses) => {
                self.addresses = addresses;
                self.is_fetching = false;
                self.error = None;
            }
            DeliveryAddressesAction::FetchFailure(error) => {
                self.is_fetching = false;
                self.error = Some(error);
            }
            DeliveryAddressesAction::MutationStarted(mutation) => {
                self.in_flight.push(mutation);
            }
            DeliveryAddressesAction::MutationFinished(mutation) => {
                if let Some(index) = self.in_flight.iter().position(|m| *m == mutation) {
                    self.in_flight.remove(index);
                }
            }
            DeliveryAddressesAction::Upserted(address) => {
                // Only one address can be the default.
                if address.default {
                    for other in &mut self.addresses {
                        other.default = false;
                    }
                }
                match self.addresses.iter_mut().find(|a| a.id == address.id) {
                    Some(existing) => *existing = address,
                    None => self.addresses.push(address),
                }
            }
            DeliveryAddressesAction::Removed(id) => {
                self.addresses.retain(|address| address.id != id);
            }
        }
    }
}
