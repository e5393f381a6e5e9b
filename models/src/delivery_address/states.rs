/// Picker option for the delivery address `state` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATES: &[UsState] = &[
    UsState { value: "AL", label: "Alabama" },
    UsState { value: "AK", label: "Alaska" },
    UsState { value: "AZ", label: "Arizona" },
    UsState { value: "AR", label: "Arkansas" },
    UsState { value: "CA", label: "California" },
    UsState { value: "CO", label: "Colorado" },
    UsState { value: "CT", label: "Connecticut" },
    UsState { value: "DE", label: "Delaware" },
    UsState { value: "DC", label: "District of Columbia" },
    UsState { value: "FL", label: "Florida" },
    UsState { value: "GA", label: "Georgia" },
    UsState { value: "HI", label: "Hawaii" },
    UsState { value: "ID", label: "Idaho" },
    UsState { value: "IL", label: "Illinois" },
    UsState { value: "IN", label: "Indiana" },
    UsState { value: "IA", label: "Iowa" },
    UsState { value: "KS", label: "Kansas" },
    UsState { value: "KY", label: "Kentucky" },
    UsState { value: "LA", label: "Louisiana" },
    UsState { value: "ME", label: "Maine" },
    UsState { value: "MD", label: "Maryland" },
    UsState { value: "MA", label: "Massachusetts" },
    UsState { value: "MI", label: "Michigan" },
    UsState { value: "MN", label: "Minnesota" },
    UsState { value: "MS", label: "Mississippi" },
    UsState { value: "MO", label: "Missouri" },
    UsState { value: "MT", label: "Montana" },
    UsState { value: "NE", label: "Nebraska" },
    UsState { value: "NV", label: "Nevada" },
    UsState { value: "NH", label: "New Hampshire" },
    UsState { value: "NJ", label: "New Jersey" },
    UsState { value: "NM", label: "New Mexico" },
    UsState { value: "NY", label: "New York" },
    UsState { value: "NC", label: "North Carolina" },
    UsState { value: "ND", label: "North Dakota" },
    UsState { value: "OH", label: "Ohio" },
    UsState { value: "OK", label: "Oklahoma" },
    UsState { value: "OR", label: "Oregon" },
    UsState { value: "PA", label: "Pennsylvania" },
    UsState { value: "RI", label: "Rhode Island" },
    UsState { value: "SC", label: "South Carolina" },
    UsState { value: "SD", label: "South Dakota" },
    UsState { value: "TN", label: "Tennessee" },
    UsState { value: "TX", label: "Texas" },
    UsState { value: "UT", label: "Utah" },
    UsState { value: "VT", label: "Vermont" },
    UsState { value: "VA", label: "Virginia" },
    UsState { value: "WA", label: "Washington" },
    UsState { value: "WV", label: "West Virginia" },
    UsState { value: "WI", label: "Wisconsin" },
    UsState { value: "WY", label: "Wyoming" },
];

/// Look up a state by its two-letter code.
pub fn find_state(value: &str) -> Option<&'static UsState> {
    STATES.iter().find(|state| state.value == value)
}
