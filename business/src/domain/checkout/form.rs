/// Checkout form as collected by the checkout view.
///
/// The card fields are captured but never validated or transmitted to a
/// payment processor; orders are placed without charging anyone.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl CheckoutForm {
    /// All required contact and shipping fields are filled in.
    pub fn is_valid(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.zip_code.trim().is_empty()
    }

    /// Single-line shipping address for the order record.
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}
