use crate::api::encode_path_segment;

pub const CURRENCY_SYMBOL: &str = "₹";

pub fn format_price(price: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, price)
}

pub fn product_edit_path(product_id: &str) -> String {
    format!("/admin/product/{}/edit", encode_path_segment(product_id))
}
